use super::category::Category;
use super::component::ComponentId;
use std::fmt;

/// Change notification emitted by every effective build mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// A component was placed in a slot, possibly replacing another
    Selected {
        category: Category,
        component_id: ComponentId,
        replaced: Option<ComponentId>,
    },
    /// A filled slot was emptied
    Cleared {
        category: Category,
        component_id: ComponentId,
    },
    /// The whole build was emptied
    Reset { cleared: usize },
}

impl BuildEvent {
    /// Category affected by the event, `None` for a full reset
    pub fn category(&self) -> Option<Category> {
        match self {
            BuildEvent::Selected { category, .. } | BuildEvent::Cleared { category, .. } => {
                Some(*category)
            }
            BuildEvent::Reset { .. } => None,
        }
    }
}

impl fmt::Display for BuildEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildEvent::Selected {
                category,
                component_id,
                replaced: Some(previous),
            } if previous == component_id => {
                write!(f, "{}: updated {}", category.display_name(), component_id)
            }
            BuildEvent::Selected {
                category,
                component_id,
                replaced: Some(previous),
            } => write!(
                f,
                "{}: replaced {} with {}",
                category.display_name(),
                previous,
                component_id
            ),
            BuildEvent::Selected {
                category,
                component_id,
                replaced: None,
            } => write!(f, "{}: selected {}", category.display_name(), component_id),
            BuildEvent::Cleared {
                category,
                component_id,
            } => write!(f, "{}: removed {}", category.display_name(), component_id),
            BuildEvent::Reset { cleared } => write!(f, "Build cleared ({} part(s) removed)", cleared),
        }
    }
}
