pub mod compatibility;

pub use compatibility::{CompatibilityAdvisor, CompatibilityNote, PLATFORM_POWER_ALLOWANCE_WATTS};
