use crate::ports::outbound::StatusReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrStatusReporter adapter for status output on stderr.
///
/// Implements the StatusReporter port, writing status lines to stderr so
/// they don't interfere with stdout output. Waits are shown as an indicatif
/// spinner.
pub struct StderrStatusReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrStatusReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }
}

impl Default for StderrStatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for StderrStatusReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn start_wait(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .expect("Failed to set spinner template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn finish_wait(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_wait();
        eprintln!("{}", message);
    }
}
