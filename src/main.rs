use clap::Parser;

use barcode_basket::utils::{logger, validation::Validate};
use barcode_basket::{
    adapters, app, CliConfig, Command, PriceCatalog, RxingDecoder, ScanPipeline,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting barcode-basket CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    let records = match adapters::load_price_list(&settings.price_list) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("❌ Could not load price list: {}", e);
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let catalog = PriceCatalog::from_records(records);
    tracing::info!("📋 Price catalog ready ({} products)", catalog.len());

    let pipeline = ScanPipeline::new(RxingDecoder::new());

    let result = match &cli.command {
        Command::Scan { image } => app::scan_once::run(&pipeline, &catalog, image),
        Command::Folder { dir } => {
            let dir = dir.clone().unwrap_or_else(|| settings.demo_dir.clone());
            app::folder::run(&pipeline, &catalog, &dir).map(|_| ())
        }
        Command::Interactive => app::interactive::run(&catalog),
    };

    if let Err(e) = result {
        tracing::error!("❌ Scan session failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    Ok(())
}
