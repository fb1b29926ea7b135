//! Main entry point for the dedup-lines binary

use clap::Parser;

use deduplicator::{Args, DedupConfig, DedupResult, Deduplicator};
use shared::{OutputFormat, RealFileSystem, ToolId, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> DedupResult<()> {
    // Values from .env become defaults for the env-backed arguments
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    ToolId::init_deduplicator();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = DedupConfig::from(args);
    logging::log_startup(
        ToolId::current(),
        &format!("deduplication of {}", config.file.display()),
    );

    let format = config.format;
    let deduplicator = Deduplicator::new(config, RealFileSystem::new());

    let report = match deduplicator.run().await {
        Ok(report) => report,
        Err(err) => {
            logging::log_error(ToolId::current(), "Deduplication", &err);
            return Err(err);
        }
    };

    match format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
