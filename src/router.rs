use crate::calculation::board_report::BoardReport;
use crate::cli::{Cli, Commands, ViewArgs};
use crate::prelude::*;
use crate::store::{Action, BoardStore};

/// Turns the parsed command into a report, pushing every view change
/// through the store first. The store is the only writer; this function
/// just translates arguments into actions.
pub fn route(cli: &Cli, store: &mut BoardStore) -> AppResult<BoardReport> {
    let report = match &cli.command {
        // modelboard table.
        Commands::Table(args) => {
            apply_view_args(store, &args.view);

            BoardReport::Table(store.table_rows())
        }

        // modelboard chart.
        Commands::Chart(args) => {
            apply_view_args(store, &args.view);
            store.dispatch(Action::SetDisplayMode(args.mode));

            BoardReport::Chart {
                rows: store.chart_rows(),
                mode: store.state().display_mode,
            }
        }

        // modelboard raw.
        Commands::Raw => {
            let records = store.catalog().records();

            let json = if cli.unformatted {
                serde_json::to_string(records).into_diagnostic()?
            } else {
                serde_json::to_string_pretty(records).into_diagnostic()?
            };

            BoardReport::Raw(json)
        }
    };

    Ok(report)
}

/// Preset first, then the individual toggles on top of it, then the sort
/// rule. Order matters: --tab low --toggle x means "the low tier, minus
/// or plus x", and the toggles leave the state on the custom tab.
fn apply_view_args(store: &mut BoardStore, view: &ViewArgs) {
    if let Some(preset) = view.tab {
        store.dispatch(preset.into_action());
    }

    for name in &view.toggles {
        store.dispatch(Action::Toggle(name.clone()));
    }

    store.dispatch(Action::SetSort(view.sort_rule()));
}
