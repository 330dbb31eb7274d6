use crate::catalog::domain::BuildSnapshot;
use crate::shared::Result;

/// BuildStore port for persisting the build between invocations
pub trait BuildStore {
    /// Loads the saved build, or `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<BuildSnapshot>>;

    /// Replaces the saved build with `snapshot`
    fn save(&self, snapshot: &BuildSnapshot) -> Result<()>;
}
