use clap::Parser;
use equiplan::app::commands::run_command;
use equiplan::utils::{logger, validation::Validate};
use equiplan::{AppConfig, CliConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    let verbose = cli.verbose || config.verbose_logging();
    if cli.json_logs || config.json_logging() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let registry = config.label_registry()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run_command(&cli.command, &config, &registry, &mut out) {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    Ok(())
}
