use crate::catalog::domain::{BuildEvent, BuildSnapshot, Category, ComponentRecord};
use crate::catalog::services::BuildAccumulator;
use crate::ports::outbound::BuildObserver;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

struct SessionState {
    build_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    accumulator: BuildAccumulator,
}

/// BuildSession - the shared handle to the current build
///
/// Cloning is cheap and every clone sees the same build, so one session can be
/// handed to every consumer. Subscribed observers are notified after the state
/// borrow is released, which lets an observer read the session from inside its
/// callback. Single-threaded by construction (`Rc`).
#[derive(Clone)]
pub struct BuildSession {
    state: Rc<RefCell<SessionState>>,
    observers: Rc<RefCell<Vec<Rc<dyn BuildObserver>>>>,
}

impl BuildSession {
    /// Starts an empty build with a fresh id
    pub fn new() -> Self {
        Self::from_snapshot(BuildSnapshot::new_empty())
    }

    pub fn from_snapshot(snapshot: BuildSnapshot) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState {
                build_id: snapshot.build_id,
                created_at: snapshot.created_at,
                updated_at: snapshot.updated_at,
                accumulator: BuildAccumulator::from_selections(snapshot.selections),
            })),
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Replaces the whole build in place; every clone sees the restored build.
    /// Observers are not notified.
    pub fn restore(&self, snapshot: BuildSnapshot) {
        let mut state = self.state.borrow_mut();
        state.build_id = snapshot.build_id;
        state.created_at = snapshot.created_at;
        state.updated_at = snapshot.updated_at;
        state.accumulator = BuildAccumulator::from_selections(snapshot.selections);
    }

    pub fn subscribe(&self, observer: Rc<dyn BuildObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    pub fn set(&self, category: Category, component: ComponentRecord) -> BuildEvent {
        let event = self.state.borrow_mut().accumulator.set(category, component);
        self.publish(&event);
        event
    }

    pub fn clear(&self, category: Category) -> Option<BuildEvent> {
        let event = self.state.borrow_mut().accumulator.clear(category);
        if let Some(ref event) = event {
            self.publish(event);
        }
        event
    }

    pub fn clear_all(&self) -> Option<BuildEvent> {
        let event = self.state.borrow_mut().accumulator.clear_all();
        if let Some(ref event) = event {
            self.publish(event);
        }
        event
    }

    pub fn get(&self, category: Category) -> Option<ComponentRecord> {
        self.state.borrow().accumulator.get(category).cloned()
    }

    /// Runs `f` against the current build
    pub fn with_build<R>(&self, f: impl FnOnce(&BuildAccumulator) -> R) -> R {
        f(&self.state.borrow().accumulator)
    }

    pub fn build_id(&self) -> Uuid {
        self.state.borrow().build_id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.state.borrow().updated_at
    }

    pub fn snapshot(&self) -> BuildSnapshot {
        let state = self.state.borrow();
        BuildSnapshot {
            build_id: state.build_id,
            created_at: state.created_at,
            updated_at: state.updated_at,
            selections: state.accumulator.to_selections(),
        }
    }

    /// Stamps the change and notifies observers. The state borrow taken by
    /// the mutation must already be released.
    fn publish(&self, event: &BuildEvent) {
        self.state.borrow_mut().updated_at = Utc::now();
        tracing::debug!(build_id = %self.build_id(), %event, "build changed");

        let observers: Vec<_> = self.observers.borrow().iter().cloned().collect();
        for observer in observers {
            observer.on_build_event(event);
        }
    }
}

impl Default for BuildSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BuildSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("BuildSession")
            .field("build_id", &state.build_id)
            .field("parts", &state.accumulator.len())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}
