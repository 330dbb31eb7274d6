use pc_builder::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock BuildStore keeping the saved build in memory
#[derive(Default, Clone)]
pub struct MockBuildStore {
    saved: Arc<Mutex<Option<BuildSnapshot>>>,
    saves: Arc<Mutex<usize>>,
}

impl MockBuildStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<BuildSnapshot> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl BuildStore for MockBuildStore {
    fn load(&self) -> Result<Option<BuildSnapshot>> {
        Ok(self.saved())
    }

    fn save(&self, snapshot: &BuildSnapshot) -> Result<()> {
        *self.saved.lock().unwrap() = Some(snapshot.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
