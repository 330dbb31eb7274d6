/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports. The CLI itself lives in
/// `cli.rs` and `main.rs`.
pub mod outbound;
