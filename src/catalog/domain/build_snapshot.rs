use super::category::Category;
use super::component::ComponentRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Serializable copy of a build, used to carry a build across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    pub build_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub selections: BTreeMap<Category, ComponentRecord>,
}

impl BuildSnapshot {
    /// Empty snapshot with a fresh build id
    pub fn new_empty() -> Self {
        let now = Utc::now();
        Self {
            build_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            selections: BTreeMap::new(),
        }
    }
}
