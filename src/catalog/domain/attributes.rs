//! Typed, category-specific attribute sets.
//!
//! Catalog data is heterogeneous and often incomplete, so every attribute is
//! optional and deserialization is lenient: a value of the wrong shape is
//! dropped (treated as missing) instead of failing the whole catalog.

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read access to a record's attributes by field name.
///
/// Unknown field names behave exactly like missing attributes.
pub trait AttributeSet {
    fn number(&self, field: &str) -> Option<f64>;
    fn text(&self, field: &str) -> Option<TextValue<'_>>;
    fn flag(&self, field: &str) -> Option<bool>;
}

/// A categorical attribute value, single or multi-valued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextValue<'a> {
    One(&'a str),
    Many(&'a [String]),
}

impl TextValue<'_> {
    /// True if the value (or any of the values) is in `allowed`
    pub fn intersects(&self, allowed: &BTreeSet<String>) -> bool {
        match self {
            TextValue::One(value) => allowed.contains(*value),
            TextValue::Many(values) => values.iter().any(|v| allowed.contains(v)),
        }
    }

    pub fn to_display(&self) -> String {
        match self {
            TextValue::One(value) => value.to_string(),
            TextValue::Many(values) => values.join(", "),
        }
    }
}

fn one(value: &Option<String>) -> Option<TextValue<'_>> {
    value.as_deref().map(TextValue::One)
}

fn many(values: &[String]) -> Option<TextValue<'_>> {
    if values.is_empty() {
        None
    } else {
        Some(TextValue::Many(values))
    }
}

/// Lenient field deserializers
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Accepts a single string or a list of strings
    pub fn text_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Bool(b)) => Some(b),
            Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
                "yes" | "true" | "y" => Some(true),
                "no" | "false" | "n" => Some(false),
                _ => None,
            },
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub core_count: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub thread_count: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub base_clock_ghz: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub boost_clock_ghz: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub tdp_watts: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub microarchitecture: Option<String>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub integrated_graphics: Option<bool>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub smt: Option<bool>,
}

impl AttributeSet for CpuAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "core_count" => self.core_count,
            "thread_count" => self.thread_count,
            "base_clock_ghz" => self.base_clock_ghz,
            "boost_clock_ghz" => self.boost_clock_ghz,
            "tdp_watts" => self.tdp_watts,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "socket" => one(&self.socket),
            "microarchitecture" => one(&self.microarchitecture),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "integrated_graphics" => self.integrated_graphics,
            "smt" => self.smt,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub memory_gb: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub core_clock_mhz: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub boost_clock_mhz: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub length_mm: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub tdp_watts: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub chipset: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
}

impl AttributeSet for GpuAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "memory_gb" => self.memory_gb,
            "core_clock_mhz" => self.core_clock_mhz,
            "boost_clock_mhz" => self.boost_clock_mhz,
            "length_mm" => self.length_mm,
            "tdp_watts" => self.tdp_watts,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "chipset" => one(&self.chipset),
            "memory_type" => one(&self.memory_type),
            "color" => many(&self.color),
            _ => None,
        }
    }

    fn flag(&self, _field: &str) -> Option<bool> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub speed_mhz: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub modules: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub capacity_gb: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub cas_latency: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub rgb: Option<bool>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub ecc: Option<bool>,
}

impl AttributeSet for MemoryAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "speed_mhz" => self.speed_mhz,
            "modules" => self.modules,
            "capacity_gb" => self.capacity_gb,
            "cas_latency" => self.cas_latency,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "memory_type" => one(&self.memory_type),
            "color" => many(&self.color),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "rgb" => self.rgb,
            "ecc" => self.ecc,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub capacity_gb: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub cache_mb: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub nvme: Option<bool>,
}

impl AttributeSet for StorageAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "capacity_gb" => self.capacity_gb,
            "cache_mb" => self.cache_mb,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "storage_type" => one(&self.storage_type),
            "interface" => one(&self.interface),
            "form_factor" => one(&self.form_factor),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "nvme" => self.nvme,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub max_gpu_length_mm: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub external_volume_l: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub side_panel: Option<String>,
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Vec::is_empty")]
    pub motherboard_form_factors: Vec<String>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub psu_included: Option<bool>,
}

impl AttributeSet for CaseAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "max_gpu_length_mm" => self.max_gpu_length_mm,
            "external_volume_l" => self.external_volume_l,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "case_type" => one(&self.case_type),
            "side_panel" => one(&self.side_panel),
            "color" => many(&self.color),
            "motherboard_form_factors" => many(&self.motherboard_form_factors),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "psu_included" => self.psu_included,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotherboardAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub memory_slots: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub max_memory_gb: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub chipset: Option<String>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub wifi: Option<bool>,
}

impl AttributeSet for MotherboardAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "memory_slots" => self.memory_slots,
            "max_memory_gb" => self.max_memory_gb,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "socket" => one(&self.socket),
            "form_factor" => one(&self.form_factor),
            "memory_type" => one(&self.memory_type),
            "chipset" => one(&self.chipset),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "wifi" => self.wifi,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsuAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub wattage: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub modular: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
}

impl AttributeSet for PsuAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "wattage" => self.wattage,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "efficiency" => one(&self.efficiency),
            "modular" => one(&self.modular),
            "form_factor" => one(&self.form_factor),
            _ => None,
        }
    }

    fn flag(&self, _field: &str) -> Option<bool> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolerAttributes {
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub fan_rpm_max: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub noise_db: Option<f64>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub radiator_size_mm: Option<f64>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub cooler_type: Option<String>,
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Vec::is_empty")]
    pub sockets: Vec<String>,
    #[serde(deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub fanless: Option<bool>,
}

impl AttributeSet for CoolerAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "fan_rpm_max" => self.fan_rpm_max,
            "noise_db" => self.noise_db,
            "radiator_size_mm" => self.radiator_size_mm,
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "cooler_type" => one(&self.cooler_type),
            "sockets" => many(&self.sockets),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "fanless" => self.fanless,
            _ => None,
        }
    }
}

/// Category-tagged attribute set of a component record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "spec", rename_all = "lowercase")]
pub enum ComponentAttributes {
    Cpu(CpuAttributes),
    Cooler(CoolerAttributes),
    Motherboard(MotherboardAttributes),
    Memory(MemoryAttributes),
    Storage(StorageAttributes),
    Gpu(GpuAttributes),
    Case(CaseAttributes),
    Psu(PsuAttributes),
}

impl ComponentAttributes {
    /// Empty attribute set for `category`
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Cpu => ComponentAttributes::Cpu(CpuAttributes::default()),
            Category::Cooler => ComponentAttributes::Cooler(CoolerAttributes::default()),
            Category::Motherboard => {
                ComponentAttributes::Motherboard(MotherboardAttributes::default())
            }
            Category::Memory => ComponentAttributes::Memory(MemoryAttributes::default()),
            Category::Storage => ComponentAttributes::Storage(StorageAttributes::default()),
            Category::Gpu => ComponentAttributes::Gpu(GpuAttributes::default()),
            Category::Case => ComponentAttributes::Case(CaseAttributes::default()),
            Category::Psu => ComponentAttributes::Psu(PsuAttributes::default()),
        }
    }

    /// Deserializes the attribute set for `category` from a JSON object
    pub fn from_json(
        category: Category,
        value: serde_json::Value,
    ) -> serde_json::Result<Self> {
        Ok(match category {
            Category::Cpu => ComponentAttributes::Cpu(serde_json::from_value(value)?),
            Category::Cooler => ComponentAttributes::Cooler(serde_json::from_value(value)?),
            Category::Motherboard => {
                ComponentAttributes::Motherboard(serde_json::from_value(value)?)
            }
            Category::Memory => ComponentAttributes::Memory(serde_json::from_value(value)?),
            Category::Storage => ComponentAttributes::Storage(serde_json::from_value(value)?),
            Category::Gpu => ComponentAttributes::Gpu(serde_json::from_value(value)?),
            Category::Case => ComponentAttributes::Case(serde_json::from_value(value)?),
            Category::Psu => ComponentAttributes::Psu(serde_json::from_value(value)?),
        })
    }

    pub fn category(&self) -> Category {
        match self {
            ComponentAttributes::Cpu(_) => Category::Cpu,
            ComponentAttributes::Cooler(_) => Category::Cooler,
            ComponentAttributes::Motherboard(_) => Category::Motherboard,
            ComponentAttributes::Memory(_) => Category::Memory,
            ComponentAttributes::Storage(_) => Category::Storage,
            ComponentAttributes::Gpu(_) => Category::Gpu,
            ComponentAttributes::Case(_) => Category::Case,
            ComponentAttributes::Psu(_) => Category::Psu,
        }
    }

    fn as_set(&self) -> &dyn AttributeSet {
        match self {
            ComponentAttributes::Cpu(a) => a,
            ComponentAttributes::Cooler(a) => a,
            ComponentAttributes::Motherboard(a) => a,
            ComponentAttributes::Memory(a) => a,
            ComponentAttributes::Storage(a) => a,
            ComponentAttributes::Gpu(a) => a,
            ComponentAttributes::Case(a) => a,
            ComponentAttributes::Psu(a) => a,
        }
    }
}

impl AttributeSet for ComponentAttributes {
    fn number(&self, field: &str) -> Option<f64> {
        self.as_set().number(field)
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        self.as_set().text(field)
    }

    fn flag(&self, field: &str) -> Option<bool> {
        self.as_set().flag(field)
    }
}
