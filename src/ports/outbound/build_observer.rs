use crate::catalog::domain::BuildEvent;

/// BuildObserver port for reacting to build changes
///
/// Every consumer that renders or persists the build subscribes one of these
/// to the session instead of polling it. Calls happen synchronously, after
/// the mutation is complete, on the thread that mutated the build.
pub trait BuildObserver {
    /// Called once per effective mutation
    fn on_build_event(&self, event: &BuildEvent);
}
