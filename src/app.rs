use crate::cli::Cli;
use crate::display::SpinnerContainer;

/// Everything a command handler gets to see: the parsed arguments and
/// the progress display.
pub struct App {
    pub cli: Cli,
    pub display: SpinnerContainer,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let display = SpinnerContainer::new(cli.no_animate);

        App { cli, display }
    }
}
