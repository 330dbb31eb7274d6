use async_trait::async_trait;
use pc_builder::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock CatalogSource serving in-memory catalogs
///
/// Categories without a catalog fail to load. Clones share the catalogs and
/// the load counter, so a test can keep a handle after moving one into a
/// use case.
#[derive(Default, Clone)]
pub struct MockCatalogSource {
    catalogs: Arc<Mutex<HashMap<Category, Catalog>>>,
    loads: Arc<AtomicUsize>,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, catalog: Catalog) -> Self {
        self.set_catalog(catalog);
        self
    }

    pub fn set_catalog(&self, catalog: Catalog) {
        self.catalogs
            .lock()
            .unwrap()
            .insert(catalog.category(), catalog);
    }

    pub fn remove_catalog(&self, category: Category) {
        self.catalogs.lock().unwrap().remove(&category);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn load_catalog(&self, category: Category) -> Result<Catalog> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.catalogs
            .lock()
            .unwrap()
            .get(&category)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("mock: no {} catalog", category))
    }

    fn describe(&self) -> String {
        "mock catalog".to_string()
    }
}
