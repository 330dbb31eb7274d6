use crate::catalog::domain::{BuildEvent, Category, ComponentRecord};
use std::collections::BTreeMap;

/// BuildAccumulator - at most one selected component per category
///
/// Each slot is either empty or filled. `set` always overwrites, `clear` on an
/// empty slot is a no-op, and nothing here validates compatibility. Every
/// effective mutation returns the [`BuildEvent`] it caused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildAccumulator {
    selections: BTreeMap<Category, ComponentRecord>,
}

impl BuildAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores an accumulator from existing selections
    pub fn from_selections(selections: BTreeMap<Category, ComponentRecord>) -> Self {
        Self { selections }
    }

    /// Puts `component` in the `category` slot, replacing any occupant
    pub fn set(&mut self, category: Category, component: ComponentRecord) -> BuildEvent {
        let component_id = component.id().clone();
        let replaced = self
            .selections
            .insert(category, component)
            .map(|previous| previous.id().clone());

        BuildEvent::Selected {
            category,
            component_id,
            replaced,
        }
    }

    /// Empties the `category` slot; `None` if it was already empty
    pub fn clear(&mut self, category: Category) -> Option<BuildEvent> {
        self.selections
            .remove(&category)
            .map(|removed| BuildEvent::Cleared {
                category,
                component_id: removed.id().clone(),
            })
    }

    /// Empties every slot; `None` if the build was already empty
    pub fn clear_all(&mut self) -> Option<BuildEvent> {
        if self.selections.is_empty() {
            return None;
        }
        let cleared = self.selections.len();
        self.selections.clear();
        Some(BuildEvent::Reset { cleared })
    }

    pub fn get(&self, category: Category) -> Option<&ComponentRecord> {
        self.selections.get(&category)
    }

    pub fn is_filled(&self, category: Category) -> bool {
        self.selections.contains_key(&category)
    }

    /// Filled slots in category order
    pub fn selections(&self) -> impl Iterator<Item = (Category, &ComponentRecord)> {
        self.selections.iter().map(|(c, r)| (*c, r))
    }

    /// Categories with no selection, in builder order
    pub fn missing_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.selections.contains_key(c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn to_selections(&self) -> BTreeMap<Category, ComponentRecord> {
        self.selections.clone()
    }
}
