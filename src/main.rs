use anyhow::Context;
use buy_black::core::pipeline::STDOUT_DESTINATION;
use buy_black::core::ConfigProvider;
use buy_black::utils::error::ErrorSeverity;
use buy_black::utils::{logger, validation::Validate};
use buy_black::{CliConfig, DebtError, DebtPipeline, LocalStorage, ReportEngine, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml_config = match &cli.config {
        Some(path) => {
            let mut config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            config.apply_cli_overrides(&cli);
            Some(config)
        }
        None => None,
    };

    // 初始化日誌
    let (verbose, log_json) = match &toml_config {
        Some(config) => (config.logging.verbose, config.logging.json),
        None => (cli.verbose, cli.log_json),
    };
    if log_json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting buy-black CLI");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match toml_config {
        Some(config) => {
            tracing::info!("📁 Using configuration from: {:?}", cli.config);
            let base_path = config.base_path().to_string();
            execute(config, base_path, &cli).await
        }
        None => execute(cli.clone(), cli.base_path().to_string(), &cli).await,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn execute<C>(config: C, base_path: String, cli: &CliConfig) -> i32
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    let storage = LocalStorage::new(base_path);
    let engine = ReportEngine::new(DebtPipeline::new(storage, config));

    if cli.interactive {
        eprintln!("Enter an age and press Enter (type 'quit' to stop)");
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        return match engine.run_interactive(stdin, &mut stdout).await {
            Ok(_) => 0,
            Err(e) => report_failure(&e),
        };
    }

    let raw_age = cli.age.as_deref().unwrap_or_default();
    match engine.run(raw_age).await {
        Ok(destination) => {
            if destination != STDOUT_DESTINATION {
                println!("✅ Report saved to: {}", destination);
            }
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &DebtError) -> i32 {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
