use clap::Parser;
use fruit_farm::utils::error::{ErrorSeverity, FarmError};
use fruit_farm::utils::{logger, validation::Validate};
use fruit_farm::{adapters, CliConfig, FarmReporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fruit-farm CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let data = match adapters::from_config(&config) {
        Ok(data) => data,
        Err(e) => exit_with(e),
    };
    let reporter = FarmReporter::new(data);

    match reporter.run(config.report).await {
        Ok(report) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: FarmError) -> ! {
    tracing::error!("❌ Farm report failed: {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
