use clap::{Parser, Subcommand, ValueEnum};

use crate::calculation::sorting::{SortColumn, SortRule};
use crate::catalog::record::Tier;
use crate::config::defaults::{LABS_SOURCE, MODEL_PRICES_SOURCE};
use crate::store::{Action, DisplayMode};

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }
}

// Structs

#[derive(Parser, Debug)]
#[command(name = "modelboard", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    //
    // Global args start here..
    //

    //
    /// Model prices csv: a local path or an http(s) url.
    #[arg(long, default_value = MODEL_PRICES_SOURCE, global = true)]
    pub prices: String,

    /// Lab names csv. Optional in spirit: a miss only costs display names.
    #[arg(long, default_value = LABS_SOURCE, global = true)]
    pub labs: String,

    /// No format.
    #[arg(long, default_value_t = false, global = true)]
    pub unformatted: bool,

    /// Skip animations
    #[arg(long, default_value_t = false, global = true)]
    pub no_animate: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Every model as csv rows, selection flag included.
    Table(TableArgs),

    /// Selected models only, shaped for bar charts.
    ///
    /// Single-metric modes print two columns (label, number), which pipes
    /// straight into tools like `uplot`.
    Chart(ChartArgs),

    /// The enriched catalog as JSON.
    ///
    /// This is the full record set with every derived field. Useful for
    /// piping into `jq` or for building custom views.
    ///
    /// Go build something fun on top of this!
    Raw,
}

#[derive(clap::Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(clap::Args, Debug)]
pub struct ChartArgs {
    /// Which bars to draw.
    #[arg(long, default_value = "both")]
    pub mode: DisplayMode,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Sort and selection arguments, shared by table and chart.
#[derive(clap::Args, Debug)]
pub struct ViewArgs {
    /// Column to sort by. Unknown names sort on that raw csv cell.
    #[arg(long, default_value = "Combined")]
    pub sort: String,

    /// Biggest first.
    #[arg(long, default_value_t = false)]
    pub desc: bool,

    /// Keep the csv's own row order instead of sorting.
    #[arg(long, default_value_t = false)]
    pub unsorted: bool,

    /// Start from a selection preset. Applied before any --toggle.
    #[arg(long)]
    pub tab: Option<TabPreset>,

    /// Flip one model in or out of the selection (repeatable).
    /// Any toggle lands the state on the custom tab.
    #[arg(long = "toggle", value_name = "NAME")]
    pub toggles: Vec<String>,
}

impl ViewArgs {
    /// None means natural load order; clap's default keeps the dashboard's
    /// combined-ascending opening sort otherwise.
    pub fn sort_rule(&self) -> Option<SortRule> {
        if self.unsorted {
            return None;
        }

        Some(SortRule {
            column: SortColumn::parse(&self.sort),
            descending: self.desc,
        })
    }
}

/// The presets a user can ask for by name. Custom is deliberately absent;
/// that tab only ever arises from toggling.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum TabPreset {
    All,
    Low,
    Mid,
    High,
    None,
}

impl TabPreset {
    pub fn into_action(self) -> Action {
        match self {
            TabPreset::All => Action::SelectAll,
            TabPreset::Low => Action::SelectTier(Tier::Low),
            TabPreset::Mid => Action::SelectTier(Tier::Mid),
            TabPreset::High => Action::SelectTier(Tier::High),
            TabPreset::None => Action::DeselectAll,
        }
    }
}
