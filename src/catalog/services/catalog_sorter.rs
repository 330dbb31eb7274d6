use crate::catalog::domain::ComponentRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Explicit result ordering chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order, untouched
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Name,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "featured" => Ok(SortOrder::Featured),
            "price-asc" | "price" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "name" => Ok(SortOrder::Name),
            _ => Err(format!(
                "Invalid sort order: {}. Please specify 'featured', 'price-asc', 'price-desc' or 'name'",
                s
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Name => "name",
        };
        write!(f, "{}", s)
    }
}

/// CatalogSorter - stable ordering of already-filtered records
///
/// Unpriced records always sort after priced ones for both price orders.
pub struct CatalogSorter;

impl CatalogSorter {
    pub fn sort(records: &mut [&ComponentRecord], order: SortOrder) {
        match order {
            SortOrder::Featured => {}
            SortOrder::PriceAsc => records.sort_by(|a, b| Self::compare_price(a, b, false)),
            SortOrder::PriceDesc => records.sort_by(|a, b| Self::compare_price(a, b, true)),
            SortOrder::Name => records.sort_by_cached_key(|r| r.name().to_lowercase()),
        }
    }

    fn compare_price(a: &ComponentRecord, b: &ComponentRecord, descending: bool) -> Ordering {
        match (a.price(), b.price()) {
            (Some(pa), Some(pb)) => {
                let ord = pa.amount().total_cmp(&pb.amount());
                if descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
