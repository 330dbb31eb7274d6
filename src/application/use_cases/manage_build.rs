use crate::application::build_session::BuildSession;
use crate::application::dto::{BuildCommand, BuildResponse};
use crate::application::read_models::{BuildSummary, BuildSummaryBuilder};
use crate::catalog::domain::{BuildEvent, Catalog, Category, ComponentId};
use crate::ports::outbound::{BuildObserver, BuildStore, CatalogSource, ProgressReporter};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Catalog loads in flight during a refresh
const CONCURRENT_CATALOG_LOADS: usize = 4;

/// ManageBuildUseCase - applies one [`BuildCommand`] to the saved build
///
/// Loads the saved build into a [`BuildSession`], subscribes the registered
/// observers, applies the command, and saves the build again if anything
/// changed. Compatibility is reported in the summary, never enforced.
///
/// # Type Parameters
/// * `S` - CatalogSource implementation
/// * `B` - BuildStore implementation
/// * `R` - ProgressReporter implementation
pub struct ManageBuildUseCase<S, B, R> {
    source: S,
    store: B,
    reporter: R,
    observers: Vec<Rc<dyn BuildObserver>>,
}

impl<S, B, R> ManageBuildUseCase<S, B, R>
where
    S: CatalogSource,
    B: BuildStore,
    R: ProgressReporter,
{
    pub fn new(source: S, store: B, reporter: R) -> Self {
        Self {
            source,
            store,
            reporter,
            observers: Vec::new(),
        }
    }

    /// Registers an observer on every session this use case opens
    pub fn with_observer(mut self, observer: Rc<dyn BuildObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub async fn execute(&self, command: BuildCommand) -> Result<BuildResponse> {
        let session = self.open_session()?;

        let events = match command {
            BuildCommand::Add { category, id } => vec![self.add(&session, category, &id).await?],
            BuildCommand::Remove { category } => session.clear(category).into_iter().collect(),
            BuildCommand::Clear => session.clear_all().into_iter().collect(),
            BuildCommand::Show => Vec::new(),
            BuildCommand::Refresh => self.refresh(&session).await,
        };

        if !events.is_empty() {
            self.store.save(&session.snapshot())?;
        }

        Ok(BuildResponse {
            events,
            summary: Self::summarize(&session),
        })
    }

    fn open_session(&self) -> Result<BuildSession> {
        let session = match self.store.load()? {
            Some(snapshot) => BuildSession::from_snapshot(snapshot),
            None => BuildSession::new(),
        };
        for observer in &self.observers {
            session.subscribe(Rc::clone(observer));
        }
        Ok(session)
    }

    async fn add(&self, session: &BuildSession, category: Category, id: &str) -> Result<BuildEvent> {
        let id = ComponentId::new(id.to_string())?;
        let catalog = self.source.load_catalog(category).await?;
        let record = catalog.require(&id)?.clone();
        Ok(session.set(category, record))
    }

    /// Re-resolves every selected part against its current catalog
    ///
    /// Parts whose catalog fails to load, or that are no longer listed, stay
    /// as they are with a warning.
    async fn refresh(&self, session: &BuildSession) -> Vec<BuildEvent> {
        let selected: Vec<(Category, ComponentId)> =
            session.with_build(|b| b.selections().map(|(c, r)| (c, r.id().clone())).collect());
        let catalogs = self.load_catalogs(selected.iter().map(|(c, _)| *c).collect()).await;

        let mut events = Vec::new();
        for (category, id) in selected {
            let catalog = match catalogs.get(&category) {
                Some(Ok(catalog)) => catalog,
                Some(Err(e)) => {
                    self.reporter.report_error(&format!(
                        "⚠️  Warning: could not refresh {}: {}",
                        category.display_name(),
                        e
                    ));
                    continue;
                }
                None => continue,
            };

            match catalog.find(&id) {
                Some(current) if session.get(category).as_ref() != Some(current) => {
                    events.push(session.set(category, current.clone()));
                }
                Some(_) => {}
                None => self.reporter.report_error(&format!(
                    "⚠️  Warning: {} '{}' is no longer listed in the catalog; keeping the saved copy.",
                    category.display_name(),
                    id
                )),
            }
        }
        self.reporter.report_completion(&format!(
            "✅ Refreshed build: {} part(s) updated",
            events.len()
        ));
        events
    }

    async fn load_catalogs(&self, categories: Vec<Category>) -> BTreeMap<Category, Result<Catalog>> {
        let total = categories.len();
        let mut loads = stream::iter(categories)
            .map(|category| async move { (category, self.source.load_catalog(category).await) })
            .buffer_unordered(CONCURRENT_CATALOG_LOADS);

        let mut catalogs = BTreeMap::new();
        while let Some((category, result)) = loads.next().await {
            catalogs.insert(category, result);
            self.reporter
                .report_progress(catalogs.len(), total, Some(category.display_name()));
        }
        catalogs
    }

    fn summarize(session: &BuildSession) -> BuildSummary {
        let (build_id, updated_at) = (session.build_id(), session.updated_at());
        session.with_build(|build| BuildSummaryBuilder::build(build, build_id, updated_at))
    }
}
