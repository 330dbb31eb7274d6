use super::attributes::{AttributeSet, ComponentAttributes, TextValue};
use super::category::Category;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a component id
const MAX_ID_LENGTH: usize = 128;

/// NewType wrapper for a component identifier, unique within its category
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: String) -> Result<Self> {
        let id = id.trim().to_string();
        if id.is_empty() {
            anyhow::bail!("Component id cannot be empty");
        }
        if id.len() > MAX_ID_LENGTH {
            anyhow::bail!(
                "Component id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_ID_LENGTH
            );
        }
        if id.chars().any(|c| c.is_control()) {
            anyhow::bail!("Component id contains control characters");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative, finite price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() {
            anyhow::bail!("Price must be a finite number");
        }
        if amount < 0.0 {
            anyhow::bail!("Price cannot be negative ({})", amount);
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = anyhow::Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// One purchasable hardware item.
///
/// A fixed envelope (id, name, brand, price) plus a typed attribute set tagged
/// by category. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    id: ComponentId,
    name: String,
    brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<Price>,
    attributes: ComponentAttributes,
}

impl ComponentRecord {
    pub fn new(
        id: ComponentId,
        name: String,
        brand: String,
        price: Option<Price>,
        attributes: ComponentAttributes,
    ) -> Self {
        Self {
            id,
            name,
            brand,
            price,
            attributes,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Option<Price> {
        self.price
    }

    pub fn category(&self) -> Category {
        self.attributes.category()
    }

    pub fn attributes(&self) -> &ComponentAttributes {
        &self.attributes
    }
}

/// Envelope fields are addressable like any other attribute
impl AttributeSet for ComponentRecord {
    fn number(&self, field: &str) -> Option<f64> {
        match field {
            "price" => self.price.map(|p| p.amount()),
            _ => self.attributes.number(field),
        }
    }

    fn text(&self, field: &str) -> Option<TextValue<'_>> {
        match field {
            "brand" if !self.brand.is_empty() => Some(TextValue::One(&self.brand)),
            "brand" => None,
            "name" => Some(TextValue::One(&self.name)),
            _ => self.attributes.text(field),
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        self.attributes.flag(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: Option<f64>) -> ComponentRecord {
        ComponentRecord::new(
            ComponentId::new("cpu-1".to_string()).unwrap(),
            "Ryzen 5 7600".to_string(),
            "AMD".to_string(),
            price.map(|p| Price::new(p).unwrap()),
            ComponentAttributes::empty(Category::Cpu),
        )
    }

    #[test]
    fn test_component_id_new_valid() {
        let id = ComponentId::new("  case-01 ".to_string()).unwrap();
        assert_eq!(id.as_str(), "case-01");
    }

    #[test]
    fn test_component_id_new_empty() {
        assert!(ComponentId::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_component_id_too_long() {
        assert!(ComponentId::new("x".repeat(MAX_ID_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_price_rejects_negative_and_nan() {
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
        assert_eq!(Price::new(0.0).unwrap().amount(), 0.0);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::new(89.5).unwrap().to_string(), "$89.50");
    }

    #[test]
    fn test_record_envelope_attributes() {
        let r = record(Some(199.99));
        assert_eq!(r.number("price"), Some(199.99));
        assert_eq!(r.text("brand"), Some(TextValue::One("AMD")));
        assert_eq!(r.category(), Category::Cpu);
    }

    #[test]
    fn test_record_without_price() {
        let r = record(None);
        assert_eq!(r.number("price"), None);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let r = record(Some(229.0));
        let json = serde_json::to_string(&r).unwrap();
        let back: ComponentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_record_deserialize_rejects_negative_price() {
        let json = r#"{"id":"x","name":"n","brand":"b","price":-5.0,
            "attributes":{"category":"cpu","spec":{}}}"#;
        assert!(serde_json::from_str::<ComponentRecord>(json).is_err());
    }
}
