use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tickerbook_core::constants::{
    DEFAULT_DOMESTIC_SUFFIXES, DEFAULT_FOREIGN_CURRENCY, DEFAULT_LOOKBACK_DAYS,
    DEFAULT_MAX_FALLBACK_STEPS, DEFAULT_REPORTING_CURRENCY,
};
use tickerbook_core::settings::ReportSettings;
use tickerbook_core::TrendBasis;
use tickerbook_market_data::ProviderConfig;

/// Show the performance of a domestic and foreign stock portfolio.
#[derive(Parser, Debug)]
#[command(name = "tickerbook")]
#[command(about = "Show the performance of a domestic and foreign stock portfolio", long_about = None)]
pub struct Args {
    /// Holdings declaration file.
    #[arg(short, long, env = "STOCK_FILE", default_value = "stock.json")]
    pub file: PathBuf,

    /// Color rows by the change since the previous session instead of the
    /// change since purchase.
    #[arg(short, long, env = "TB_DAILY")]
    pub daily: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub stock_file: PathBuf,
    pub log_format: LogFormat,
    pub request_timeout: Duration,
    pub report: ReportSettings,
}

impl Config {
    /// Loads `.env`, parses the command line and reads the remaining
    /// settings from the environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let args = Args::parse();
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    pub fn from_sources(args: Args, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_format = match var("TB_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let timeout_ms: u64 = parse_var(&var, "TB_REQUEST_TIMEOUT_MS", 30000)?;

        let domestic_suffixes = match var("TB_DOMESTIC_SUFFIXES") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_DOMESTIC_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let report = ReportSettings {
            domestic_suffixes,
            reporting_currency: var("TB_REPORTING_CURRENCY")
                .unwrap_or_else(|| DEFAULT_REPORTING_CURRENCY.into())
                .to_uppercase(),
            foreign_currency: var("TB_FOREIGN_CURRENCY")
                .unwrap_or_else(|| DEFAULT_FOREIGN_CURRENCY.into())
                .to_uppercase(),
            max_fallback_steps: parse_var(&var, "TB_MAX_FALLBACK_STEPS", DEFAULT_MAX_FALLBACK_STEPS)?,
            lookback_days: parse_var(&var, "TB_LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS)?,
            trend_basis: if args.daily {
                TrendBasis::Daily
            } else {
                TrendBasis::Purchase
            },
        };
        report.validate().context("Invalid configuration")?;

        Ok(Self {
            stock_file: args.file,
            log_format,
            request_timeout: Duration::from_millis(timeout_ms),
            report,
        })
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            request_timeout: self.request_timeout,
        }
    }
}

fn parse_var<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: '{}'", key, raw)),
        None => Ok(default),
    }
}
