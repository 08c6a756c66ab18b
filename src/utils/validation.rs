use crate::utils::error::{FareError, InputError, NumberIssue, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_positive_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Rate must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

// 以下為乘客資料的解析規則，互動輸入與 CSV 共用

/// 解析非負整數；負數與非數字分開回報
fn parse_whole(raw: &str) -> std::result::Result<u64, NumberIssue> {
    let value: i128 = raw.trim().parse().map_err(|_| NumberIssue::NotANumber)?;
    if value < 0 {
        return Err(NumberIssue::Negative);
    }
    u64::try_from(value).map_err(|_| NumberIssue::OutOfRange)
}

pub fn parse_count(raw: &str) -> std::result::Result<usize, InputError> {
    parse_whole(raw)
        .and_then(|v| usize::try_from(v).map_err(|_| NumberIssue::OutOfRange))
        .map_err(|issue| InputError::InvalidCount {
            raw: raw.trim().to_string(),
            issue,
        })
}

pub fn parse_age(raw: &str) -> std::result::Result<u32, InputError> {
    parse_whole(raw)
        .and_then(|v| u32::try_from(v).map_err(|_| NumberIssue::OutOfRange))
        .map_err(|issue| InputError::InvalidAge {
            raw: raw.trim().to_string(),
            issue,
        })
}

pub fn parse_distance(raw: &str) -> std::result::Result<f64, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| NumberIssue::NotANumber)
        .and_then(check_distance)
        .map_err(|issue| InputError::InvalidDistance {
            raw: trimmed.to_string(),
            issue,
        })
}

/// 距離必須是有限且非負的數值 (NaN 視為非數字，-0 正規化為 0)
pub fn check_distance(value: f64) -> std::result::Result<f64, NumberIssue> {
    if value.is_nan() {
        Err(NumberIssue::NotANumber)
    } else if value < 0.0 {
        Err(NumberIssue::Negative)
    } else if value.is_infinite() {
        Err(NumberIssue::OutOfRange)
    } else if value == 0.0 {
        Ok(0.0)
    } else {
        Ok(value)
    }
}

pub fn parse_name(raw: &str) -> std::result::Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(trimmed.to_string())
}
