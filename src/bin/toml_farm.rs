use clap::Parser;
use fruit_farm::utils::{logger, validation::Validate};
use fruit_farm::{adapters, FarmReporter, SourceConfig, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-farm")]
#[command(about = "Farm fruit report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "farm-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the resolved data source without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_output() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No lookups will be made");
        println!("source endpoint: {}", config.api_endpoint().unwrap_or("-"));
        println!("source file:     {}", config.data_file().unwrap_or("-"));
        println!("timeout:         {:?}", config.request_timeout());
        println!("report:          {:?}", config.report_kind());
        return Ok(());
    }

    let reporter = FarmReporter::new(adapters::from_config(&config)?);
    let report = reporter.run(config.report_kind()).await?;

    if config.json_output() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
