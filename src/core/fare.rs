use crate::domain::model::DiscountBand;

pub const DEFAULT_BASE_RATE_PER_KM: f64 = 500.0;

/// 依距離與年齡計算票價
///
/// 基本票價 = 每公里費率 × 距離，再乘上年齡級距的折扣倍率。
/// 12 歲與 60 歲都屬於全票。
pub fn compute_fare(distance_km: f64, age: u32, base_rate_per_km: f64) -> f64 {
    debug_assert!(distance_km >= 0.0, "distance must be non-negative");
    debug_assert!(base_rate_per_km > 0.0, "base rate must be positive");

    let base = base_rate_per_km * distance_km;
    base * DiscountBand::for_age(age).multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = DEFAULT_BASE_RATE_PER_KM;

    #[test]
    fn test_reference_passengers() {
        assert_eq!(compute_fare(20.0, 10, RATE), 5000.0);
        assert_eq!(compute_fare(10.0, 65, RATE), 3500.0);
        assert_eq!(compute_fare(15.0, 30, RATE), 7500.0);
    }

    #[test]
    fn test_band_edges() {
        let d = 8.0;
        let r = 120.0;
        assert_eq!(compute_fare(d, 11, r), 0.5 * r * d);
        assert_eq!(compute_fare(d, 12, r), r * d);
        assert_eq!(compute_fare(d, 60, r), r * d);
        assert_eq!(compute_fare(d, 61, r), 0.7 * r * d);
    }

    #[test]
    fn test_zero_distance_is_free() {
        for age in [0, 11, 12, 60, 61, 120] {
            assert_eq!(compute_fare(0.0, age, RATE), 0.0);
        }
    }

    #[test]
    fn test_fare_is_non_negative_and_monotonic_in_distance() {
        for age in [0, 5, 11, 12, 35, 60, 61, 99] {
            let mut previous = 0.0;
            for step in 0..200 {
                let distance = step as f64 * 0.75;
                let fare = compute_fare(distance, age, 37.5);
                assert!(fare >= 0.0);
                assert!(fare >= previous, "age {} distance {}", age, distance);
                previous = fare;
            }
        }
    }
}
