//! Compile-time knobs. No config file; the dashboard has no persistence.

/// Where the catalog comes from when --prices is not given.
pub const MODEL_PRICES_SOURCE: &str = "model-prices.csv";

/// Where the lab name mapping comes from when --labs is not given.
pub const LABS_SOURCE: &str = "labs.csv";

/// The combined price assumes a typical 3:1 input-to-output token volume.
pub const INPUT_WEIGHT: f64 = 3.0;

/// Everything below one dollar of input price is the low tier.
pub const LOW_TIER_CEILING: f64 = 1.0;

/// Ten dollars and up is the high tier. The mid tier is what's between.
pub const HIGH_TIER_FLOOR: f64 = 10.0;

/// Base for the per-model external link built from lab slug + model slug.
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai";
