use clap::Parser;
use image_cleanup::utils::{logger, validation::Validate};
use image_cleanup::{CleanEngine, CleanPipeline, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting image-cleanup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    if let Err(e) = engine.run().await {
        tracing::error!("❌ Cleanup failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
