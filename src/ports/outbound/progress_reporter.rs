use std::sync::Arc;

/// ProgressReporter port for user-facing feedback
///
/// Messages go to the user (stderr), separate from the report on stdout and
/// from diagnostic `tracing` output. Implementations are shared with catalog
/// decorators, hence `Send + Sync`.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, message: &str);

    /// Reports progress with a position out of `total`
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for Arc<T> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
