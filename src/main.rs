mod app;
mod calculation;
mod catalog;
mod cli;
mod config;
mod display;
mod error;
mod io;
mod prelude;
mod router;
mod store;

use app::App;
use catalog::Catalog;
use catalog::labs::LabDirectory;
use cli::Cli;
use prelude::*;
use store::BoardStore;

// The prices csv is useless without these; checked once at load.
const REQUIRED_COLUMNS: &[&str] = &["Name", "Input", "Output", "Lab"];

fn main() -> AppResult {
    env_logger::init();

    let mut app = App::new(Cli::new());

    app.display.start("Loading");

    // The catalog load is mandatory; any failure here is terminal for
    // the session. No partial catalog, no retry.
    app.display.update_text(format!("Loading {}", app.cli.prices));
    let prices_text = io::source::read_source(&app.cli.prices)?;
    let prices_table = io::csv_rows::parse_table(&prices_text)?;
    prices_table.require_columns(REQUIRED_COLUMNS, &app.cli.prices)?;

    let labs = load_lab_directory(&mut app);

    let catalog = Catalog::from_rows(prices_table.rows, &labs);
    log::debug!("catalog loaded: {} records", catalog.len());

    app.display.finish();

    // From here on it's pure state: init the store, replay the cli's view
    // changes through it, project, print.
    let mut store = BoardStore::new(catalog);

    let report = router::route(&app.cli, &mut store)?;
    let output = report.render(app.cli.unformatted)?;

    print!("{}", output);
    // The raw json has no trailing newline of its own.
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

// private

/// The labs csv is best-effort: a miss only means raw slugs in the lab
/// column, so it degrades to an empty directory instead of failing the
/// session.
fn load_lab_directory(app: &mut App) -> LabDirectory {
    app.display.update_text(format!("Loading {}", app.cli.labs));

    let text = match io::source::read_source(&app.cli.labs) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("labs csv unavailable, falling back to raw slugs: {e}");
            return LabDirectory::default();
        }
    };

    match io::csv_rows::parse_table(&text) {
        Ok(table) => {
            let labs = LabDirectory::from_rows(table.rows);
            log::debug!("lab directory loaded: {} entries", labs.len());
            labs
        }
        Err(e) => {
            log::warn!("labs csv unparseable, falling back to raw slugs: {e}");
            LabDirectory::default()
        }
    }
}
