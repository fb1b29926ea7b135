//! Main entry point for the normalize-addresses binary

use clap::Parser;

use normalizer::{AddressNormalizer, Args, NormalizerConfig, NormalizerError, NormalizerResult, render_text};
use shared::{OutputFormat, RealFileSystem, ToolId, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> NormalizerResult<()> {
    // Values from .env become defaults for the env-backed arguments
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    ToolId::init_normalizer();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = NormalizerConfig::from(args);
    logging::log_startup(
        ToolId::current(),
        &format!("address normalization under {}", config.root.display()),
    );

    let format = config.format;
    let normalizer = AddressNormalizer::new(config, RealFileSystem::new())?;

    let report = match normalizer.run().await {
        Ok(report) => report,
        Err(err) => {
            logging::log_error(ToolId::current(), "Address normalization", &err);
            return Err(err);
        }
    };

    match format {
        OutputFormat::Text => println!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    let failed = report.failure_count();
    if failed > 0 {
        return Err(NormalizerError::FilesFailed { count: failed });
    }

    logging::log_success(ToolId::current(), "Address normalization finished");
    Ok(())
}
