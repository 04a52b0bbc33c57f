/// ProgressReporter port for user feedback during long-running commands
///
/// Output goes to stderr so stdout stays usable for piping. Implementations
/// must be `Send + Sync`: concurrent publish tasks report through the same
/// reporter.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports `current` out of `total` steps, with an optional message
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable error or warning
    fn report_error(&self, message: &str);

    /// Reports completion of the whole operation
    fn report_completion(&self, message: &str);
}
