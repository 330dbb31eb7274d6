use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hardware component class. Each category has its own catalog and facet schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Cooler,
    Motherboard,
    Memory,
    Storage,
    Gpu,
    Case,
    Psu,
}

/// How a facet constrains records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    /// Inclusive numeric range
    Range,
    /// Multi-select over categorical values
    Select,
    /// Tri-state yes/no/either
    Flag,
}

/// One filterable field in a category's schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FacetKind,
}

const fn range(field: &'static str, label: &'static str) -> FacetSpec {
    FacetSpec {
        field,
        label,
        kind: FacetKind::Range,
    }
}

const fn select(field: &'static str, label: &'static str) -> FacetSpec {
    FacetSpec {
        field,
        label,
        kind: FacetKind::Select,
    }
}

const fn flag(field: &'static str, label: &'static str) -> FacetSpec {
    FacetSpec {
        field,
        label,
        kind: FacetKind::Flag,
    }
}

/// Facets every category shares through the common record envelope
pub const ENVELOPE_FACETS: &[FacetSpec] = &[range("price", "Price"), select("brand", "Brand")];

const CPU_FACETS: &[FacetSpec] = &[
    range("core_count", "Cores"),
    range("thread_count", "Threads"),
    range("base_clock_ghz", "Base clock (GHz)"),
    range("boost_clock_ghz", "Boost clock (GHz)"),
    range("tdp_watts", "TDP (W)"),
    select("socket", "Socket"),
    select("microarchitecture", "Microarchitecture"),
    flag("integrated_graphics", "Integrated graphics"),
    flag("smt", "SMT"),
];

const GPU_FACETS: &[FacetSpec] = &[
    range("memory_gb", "Memory (GB)"),
    range("core_clock_mhz", "Core clock (MHz)"),
    range("boost_clock_mhz", "Boost clock (MHz)"),
    range("length_mm", "Length (mm)"),
    range("tdp_watts", "TDP (W)"),
    select("chipset", "Chipset"),
    select("memory_type", "Memory type"),
    select("color", "Color"),
];

const MEMORY_FACETS: &[FacetSpec] = &[
    range("speed_mhz", "Speed (MHz)"),
    range("modules", "Modules"),
    range("capacity_gb", "Capacity (GB)"),
    range("cas_latency", "CAS latency"),
    select("memory_type", "Memory type"),
    select("color", "Color"),
    flag("rgb", "RGB"),
    flag("ecc", "ECC"),
];

const STORAGE_FACETS: &[FacetSpec] = &[
    range("capacity_gb", "Capacity (GB)"),
    range("cache_mb", "Cache (MB)"),
    select("storage_type", "Type"),
    select("interface", "Interface"),
    select("form_factor", "Form factor"),
    flag("nvme", "NVMe"),
];

const CASE_FACETS: &[FacetSpec] = &[
    range("max_gpu_length_mm", "Max GPU length (mm)"),
    range("external_volume_l", "Volume (L)"),
    select("case_type", "Type"),
    select("side_panel", "Side panel"),
    select("color", "Color"),
    select("motherboard_form_factors", "Motherboard support"),
    flag("psu_included", "PSU included"),
];

const MOTHERBOARD_FACETS: &[FacetSpec] = &[
    range("memory_slots", "Memory slots"),
    range("max_memory_gb", "Max memory (GB)"),
    select("socket", "Socket"),
    select("form_factor", "Form factor"),
    select("memory_type", "Memory type"),
    select("chipset", "Chipset"),
    flag("wifi", "Wi-Fi"),
];

const PSU_FACETS: &[FacetSpec] = &[
    range("wattage", "Wattage (W)"),
    select("efficiency", "Efficiency rating"),
    select("modular", "Modular"),
    select("form_factor", "Form factor"),
];

const COOLER_FACETS: &[FacetSpec] = &[
    range("fan_rpm_max", "Max fan RPM"),
    range("noise_db", "Noise (dB)"),
    range("radiator_size_mm", "Radiator (mm)"),
    select("cooler_type", "Type"),
    select("sockets", "Socket support"),
    flag("fanless", "Fanless"),
];

impl Category {
    /// All categories in builder display order
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Cooler,
        Category::Motherboard,
        Category::Memory,
        Category::Storage,
        Category::Gpu,
        Category::Case,
        Category::Psu,
    ];

    /// Stable key used for catalog file names and build snapshots
    pub fn key(self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Cooler => "cooler",
            Category::Motherboard => "motherboard",
            Category::Memory => "memory",
            Category::Storage => "storage",
            Category::Gpu => "gpu",
            Category::Case => "case",
            Category::Psu => "psu",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Cooler => "CPU Cooler",
            Category::Motherboard => "Motherboard",
            Category::Memory => "Memory",
            Category::Storage => "Storage",
            Category::Gpu => "Video Card",
            Category::Case => "Case",
            Category::Psu => "Power Supply",
        }
    }

    /// Category-specific facets, excluding the envelope facets
    pub fn attribute_facets(self) -> &'static [FacetSpec] {
        match self {
            Category::Cpu => CPU_FACETS,
            Category::Cooler => COOLER_FACETS,
            Category::Motherboard => MOTHERBOARD_FACETS,
            Category::Memory => MEMORY_FACETS,
            Category::Storage => STORAGE_FACETS,
            Category::Gpu => GPU_FACETS,
            Category::Case => CASE_FACETS,
            Category::Psu => PSU_FACETS,
        }
    }

    /// Envelope facets followed by the category's attribute facets
    pub fn facets(self) -> impl Iterator<Item = &'static FacetSpec> {
        ENVELOPE_FACETS.iter().chain(self.attribute_facets().iter())
    }

    /// Looks up a facet by field name
    pub fn facet(self, field: &str) -> Option<&'static FacetSpec> {
        self.facets().find(|spec| spec.field == field)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpu" | "processor" => Ok(Category::Cpu),
            "cooler" | "cpu-cooler" => Ok(Category::Cooler),
            "motherboard" | "mobo" => Ok(Category::Motherboard),
            "memory" | "ram" => Ok(Category::Memory),
            "storage" | "ssd" | "hdd" => Ok(Category::Storage),
            "gpu" | "video-card" => Ok(Category::Gpu),
            "case" => Ok(Category::Case),
            "psu" | "power-supply" => Ok(Category::Psu),
            _ => Err(format!(
                "Invalid category: {}. Expected one of: {}",
                s,
                Category::ALL
                    .iter()
                    .map(|c| c.key())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
