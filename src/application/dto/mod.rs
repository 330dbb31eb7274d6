/// Data Transfer Objects for application layer
///
/// Requests and responses passed between the CLI and the use cases.
mod browse_request;
mod build_command;
mod build_response;
mod compare_request;
mod output_format;

pub use browse_request::BrowseRequest;
pub use build_command::BuildCommand;
pub use build_response::BuildResponse;
pub use compare_request::{CompareRequest, MIN_COMPARED};
pub use output_format::OutputFormat;
