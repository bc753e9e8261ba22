use spinoff::{Color, Spinner, spinners};
use std::io::IsTerminal;

/// Holds maybe-a-spinner, because the spinner api has no empty instance
/// and the quiet paths (piped output, --no-animate) still need something
/// to call methods on.
pub struct SpinnerContainer {
    instance: Option<Spinner>,
    quiet: bool,
}

impl SpinnerContainer {
    /// Quiet when asked, and also when stdout is not a terminal; the
    /// reports here exist to be piped, and a spinner would flood the pipe.
    pub fn new(no_animate: bool) -> Self {
        SpinnerContainer {
            instance: None,
            quiet: no_animate || !std::io::stdout().is_terminal(),
        }
    }

    pub fn start(&mut self, message: &'static str) {
        if self.quiet {
            return;
        }

        self.instance = Some(Spinner::new(spinners::Dots, message, Color::Blue));
    }

    pub fn update_text(&mut self, message: String) {
        if let Some(spinner) = self.instance.as_mut() {
            spinner.update_text(message)
        }
    }

    /// Clears the spinner line before the report gets printed.
    pub fn finish(&mut self) {
        // Take ownership to prevent double stopping.
        if let Some(mut spinner) = self.instance.take() {
            // .clear() doesn't do what its name says, so this instead.
            spinner.stop_with_message("");
        }
    }
}

impl Drop for SpinnerContainer {
    fn drop(&mut self) {
        self.finish();
    }
}
