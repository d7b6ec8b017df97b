/// StatusReporter port for user feedback on stderr.
///
/// Keeps status chatter out of stdout so rendered results stay pipeable.
pub trait StatusReporter {
    /// Reports a one-line status message
    fn report(&self, message: &str);

    /// Starts an indeterminate wait indicator with the given label
    fn start_wait(&self, message: &str);

    /// Clears the wait indicator, if one is active
    fn finish_wait(&self);

    /// Reports a warning or error line
    fn report_error(&self, message: &str);
}
