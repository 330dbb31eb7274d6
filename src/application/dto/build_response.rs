use crate::application::read_models::BuildSummary;
use crate::catalog::domain::BuildEvent;

/// Result of a [`BuildCommand`](super::BuildCommand)
#[derive(Debug, Clone)]
pub struct BuildResponse {
    /// Events produced, in order; empty for no-op commands
    pub events: Vec<BuildEvent>,
    pub summary: BuildSummary,
}
