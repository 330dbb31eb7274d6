pub mod attributes;
pub mod build_event;
pub mod build_snapshot;
pub mod catalog;
pub mod category;
pub mod component;
pub mod filter_criteria;

pub use attributes::{
    AttributeSet, CaseAttributes, ComponentAttributes, CoolerAttributes, CpuAttributes,
    GpuAttributes, MemoryAttributes, MotherboardAttributes, PsuAttributes, StorageAttributes,
    TextValue,
};
pub use build_event::BuildEvent;
pub use build_snapshot::BuildSnapshot;
pub use catalog::Catalog;
pub use category::{Category, FacetKind, FacetSpec};
pub use component::{ComponentId, ComponentRecord, Price};
pub use filter_criteria::{FilterCriteria, NumericRange};
