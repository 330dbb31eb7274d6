/// Catalog and build core
///
/// Pure data types, filtering and the build accumulator. Nothing in here
/// performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
