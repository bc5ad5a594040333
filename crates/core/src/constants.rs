/// Exchange suffixes that mark an identifier as domestic (KOSPI, KOSDAQ)
pub const DEFAULT_DOMESTIC_SUFFIXES: &[&str] = &[".KS", ".KQ"];

/// Currency every total is expressed in
pub const DEFAULT_REPORTING_CURRENCY: &str = "KRW";

/// Native currency of foreign holdings
pub const DEFAULT_FOREIGN_CURRENCY: &str = "USD";

/// How many sessions a price lookup may step back past empty sessions
pub const DEFAULT_MAX_FALLBACK_STEPS: usize = 2;

/// Calendar days of price history requested per run
pub const DEFAULT_LOOKBACK_DAYS: i64 = 10;

/// Minimum number of sessions a price series must contain
pub const MIN_SESSIONS: usize = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
