mod config;
mod logging;
mod render;

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use anyhow::Context;
use config::Config;
use logging::init_tracing;
use tickerbook_core::declarations::HoldingsDeclaration;
use tickerbook_core::fx::FxService;
use tickerbook_core::quotes::QuoteService;
use tickerbook_core::{PortfolioReportService, PortfolioReportServiceTrait};
use tickerbook_market_data::{MarketDataProvider, YahooProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let declaration = HoldingsDeclaration::from_path(&config.stock_file)
        .with_context(|| format!("Failed to load {}", config.stock_file.display()))?;
    tracing::info!(
        "Loaded {} lot(s) from {}",
        declaration.lots.len(),
        config.stock_file.display()
    );

    let provider: Arc<dyn MarketDataProvider> =
        Arc::new(YahooProvider::new(&config.provider_config())?);
    let quote_service = Arc::new(QuoteService::new(
        provider.clone(),
        config.report.lookback_days,
    ));
    let fx_service = Arc::new(FxService::new(
        provider,
        &config.report.foreign_currency,
        &config.report.reporting_currency,
    ));
    let report_service =
        PortfolioReportService::new(quote_service, fx_service, config.report.clone());

    let report = report_service.generate(&declaration).await?;

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();
    out.write_all(render::render_report(&report, color).as_bytes())?;
    out.flush()?;
    Ok(())
}
