use crate::catalog::domain::Category;

/// One operation on the saved build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildCommand {
    /// Select `id` from the `category` catalog, replacing any current pick
    Add { category: Category, id: String },
    /// Empty the `category` slot
    Remove { category: Category },
    /// Empty every slot
    Clear,
    /// Report the build without changing it
    Show,
    /// Re-resolve every selected part against the current catalogs
    Refresh,
}

impl BuildCommand {
    /// True for commands that may change the saved build
    pub fn is_mutation(&self) -> bool {
        !matches!(self, BuildCommand::Show)
    }
}
