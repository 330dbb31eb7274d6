use crate::catalog::domain::BuildEvent;
use crate::ports::outbound::{BuildObserver, ProgressReporter};

/// BuildEventReporter tells the user about each change to the build
pub struct BuildEventReporter<R: ProgressReporter> {
    reporter: R,
}

impl<R: ProgressReporter> BuildEventReporter<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }
}

impl<R: ProgressReporter> BuildObserver for BuildEventReporter<R> {
    fn on_build_event(&self, event: &BuildEvent) {
        let icon = match event {
            BuildEvent::Selected { replaced: None, .. } => "➕",
            BuildEvent::Selected { .. } => "🔁",
            BuildEvent::Cleared { .. } | BuildEvent::Reset { .. } => "➖",
        };
        self.reporter.report(&format!("{} {}", icon, event));
    }
}
