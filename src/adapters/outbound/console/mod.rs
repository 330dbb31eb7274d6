/// Console adapters for user-facing feedback on stderr
mod build_event_reporter;
mod progress_reporter;

pub use build_event_reporter::BuildEventReporter;
pub use progress_reporter::StderrProgressReporter;
