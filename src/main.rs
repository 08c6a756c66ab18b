use anyhow::Context;
use clap::Parser;
use std::io;
use transport_fare::core::report;
use transport_fare::domain::ports::{ConfigProvider, ReportSink};
use transport_fare::utils::error::{ErrorSeverity, FareError};
use transport_fare::utils::logger;
use transport_fare::{
    CliConfig, CsvPassengerSource, FareEngine, FileSink, PromptSession, RunOutcome, StdoutSink,
    TomlConfig,
};

fn main() {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.logging.format);
    tracing::info!("Starting transport-fare CLI");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    for description in cli.override_summary() {
        tracing::debug!("🔧 Command-line override: {}", description);
    }
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(&cli, &config) {
        std::process::exit(report_failure(&e));
    }
}

fn run(cli: &CliConfig, config: &TomlConfig) -> anyhow::Result<()> {
    let outcome = match &cli.input {
        Some(path) => {
            let source = CsvPassengerSource::from_path(path)
                .with_context(|| format!("opening passenger file '{}'", path))?;
            FareEngine::new(source, config.clone()).run()?
        }
        None => {
            let stdin = io::stdin();
            let mut session =
                PromptSession::new(stdin.lock(), io::stdout(), config.max_prompt_attempts());
            if !cli.no_banner {
                session.print_banner()?;
            }
            FareEngine::new(session, config.clone()).run()?
        }
    };

    let batch = match outcome {
        RunOutcome::NoPassengers => {
            println!("\nNo passengers to process. Exiting.");
            return Ok(());
        }
        RunOutcome::Processed(batch) => batch,
    };

    let rendered = report::render(&batch, config.report_format(), config.currency())?;

    match config.output_path() {
        Some(path) => {
            let destination = FileSink::new(path)
                .write_report(&rendered)
                .with_context(|| format!("writing fare report to '{}'", path))?;
            tracing::info!("📁 Report saved to: {}", destination);
            println!("📁 Report saved to: {}", destination);
        }
        None => {
            StdoutSink.write_report(&rendered)?;
        }
    }

    Ok(())
}

/// 輸出錯誤訊息並依嚴重程度決定退出碼
fn report_failure(error: &anyhow::Error) -> i32 {
    let Some(fare_error) = error.downcast_ref::<FareError>() else {
        tracing::error!("❌ {:#}", error);
        eprintln!("❌ {:#}", error);
        return 1;
    };

    tracing::error!(
        "❌ Fare run failed: {:#} (Category: {:?}, Severity: {:?})",
        error,
        fare_error.category(),
        fare_error.severity()
    );
    eprintln!("❌ {}", fare_error.user_friendly_message());
    eprintln!("💡 Suggestion: {}", fare_error.recovery_suggestion());

    match fare_error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
