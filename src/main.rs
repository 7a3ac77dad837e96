use clap::Parser;
use comp_dom::utils::{logger, validation::Validate};
use comp_dom::{ClassifierEngine, ClassifierPipeline, CliConfig, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let pipeline = ClassifierPipeline::new(LocalStorage::new(), config);
    let engine = ClassifierEngine::new(pipeline);

    match engine.run() {
        Ok(report) => print!("{}", report),
        Err(e) => {
            tracing::error!("Classification failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
