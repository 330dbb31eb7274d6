use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts where formatted reports end up (stdout, a file).
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if writing to the destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
