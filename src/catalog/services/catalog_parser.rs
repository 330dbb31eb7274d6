use crate::catalog::domain::{
    Catalog, Category, ComponentAttributes, ComponentId, ComponentRecord, Price,
};
use crate::shared::Result;
use anyhow::Context;
use serde_json::{Map, Value};

/// Source encoding of a catalog bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// A JSON array of records, or an object with a `components` array
    Json,
    /// `[[component]]` tables
    Toml,
}

impl CatalogFormat {
    pub fn extension(self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Toml => "toml",
        }
    }
}

/// CatalogParser - turns raw catalog bundles into validated [`Catalog`]s
///
/// The envelope (`id`, `name`, `brand`/`manufacturer`, `price`) is strict:
/// a record without an id or name, or with a negative price, fails the load.
/// Everything else is handed to the lenient attribute deserializers.
pub struct CatalogParser;

impl CatalogParser {
    pub fn parse(category: Category, content: &str, format: CatalogFormat) -> Result<Catalog> {
        let root = match format {
            CatalogFormat::Json => {
                serde_json::from_str::<Value>(content).context("Invalid JSON")?
            }
            CatalogFormat::Toml => {
                let value: toml::Value = toml::from_str(content).context("Invalid TOML")?;
                serde_json::to_value(value).context("Unsupported TOML value")?
            }
        };

        let items = Self::record_array(root, format)?;
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let record = Self::parse_record(category, item)
                .with_context(|| format!("Record #{} is invalid", index + 1))?;
            records.push(record);
        }

        Catalog::new(category, records)
    }

    fn record_array(root: Value, format: CatalogFormat) -> Result<Vec<Value>> {
        let key = match format {
            CatalogFormat::Json => "components",
            CatalogFormat::Toml => "component",
        };
        match root {
            Value::Array(items) => Ok(items),
            Value::Object(mut map) => match map.remove(key) {
                Some(Value::Array(items)) => Ok(items),
                Some(_) => anyhow::bail!("'{}' must be an array of records", key),
                None if format == CatalogFormat::Toml => Ok(Vec::new()),
                None => anyhow::bail!("Catalog object has no '{}' array", key),
            },
            _ => anyhow::bail!("Catalog root must be an array of records"),
        }
    }

    fn parse_record(category: Category, item: Value) -> Result<ComponentRecord> {
        let Value::Object(mut fields) = item else {
            anyhow::bail!("Record must be an object");
        };

        let id = match fields.remove("id") {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => anyhow::bail!("Missing 'id'"),
        };
        let id = ComponentId::new(id)?;

        let name = match fields.remove("name") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => anyhow::bail!("Record '{}' is missing 'name'", id),
        };

        let brand = Self::take_brand(&mut fields);
        let price = Self::take_price(&mut fields)
            .with_context(|| format!("Record '{}' has an invalid price", id))?;

        let attributes = ComponentAttributes::from_json(category, Value::Object(fields))
            .with_context(|| format!("Record '{}' has invalid attributes", id))?;

        Ok(ComponentRecord::new(id, name, brand, price, attributes))
    }

    /// `brand` wins over `manufacturer`; a missing brand is an empty string
    fn take_brand(fields: &mut Map<String, Value>) -> String {
        let manufacturer = fields.remove("manufacturer");
        match fields.remove("brand").or(manufacturer) {
            Some(Value::String(s)) => s.trim().to_string(),
            _ => String::new(),
        }
    }

    fn take_price(fields: &mut Map<String, Value>) -> Result<Option<Price>> {
        let amount = match fields.remove("price") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| anyhow::anyhow!("price is out of range"))?,
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .trim_start_matches('$')
                .parse::<f64>()
                .with_context(|| format!("'{}' is not a number", s))?,
            Some(other) => anyhow::bail!("unexpected price value {}", other),
        };
        Ok(Some(Price::new(amount)?))
    }
}
