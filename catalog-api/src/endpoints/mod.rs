pub mod products;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Product grouping offered by the storefront
///
/// The catalog tags each product with the singular form of the category
/// name (`"tour"`, `"ticket"`, ...), see [`Category::product_tag`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Tours,
    Tickets,
    Rent,
    Transfer,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tours,
        Category::Tickets,
        Category::Rent,
        Category::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tours => "tours",
            Self::Tickets => "tickets",
            Self::Rent => "rent",
            Self::Transfer => "transfer",
        }
    }

    /// Capitalized name for tabs and titles
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tours => "Tours",
            Self::Tickets => "Tickets",
            Self::Rent => "Rent",
            Self::Transfer => "Transfer",
        }
    }

    /// Tag carried by products of this category
    pub fn product_tag(&self) -> String {
        product_tag(self.as_str())
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Next category, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Lowercase a category name and drop a single trailing plural "s"
pub fn product_tag(category: &str) -> String {
    let lower = category.to_lowercase();
    match lower.strip_suffix('s') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category '{}': expected one of tours, tickets, rent, transfer",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

/// Product identifier as sent by the catalog
///
/// The service is not consistent about the JSON type of `id`, so both
/// strings and integers are accepted and normalized to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_tag_strips_single_trailing_s() {
        assert_eq!(Category::Tours.product_tag(), "tour");
        assert_eq!(Category::Tickets.product_tag(), "ticket");
        assert_eq!(Category::Rent.product_tag(), "rent");
        assert_eq!(Category::Transfer.product_tag(), "transfer");
        assert_eq!(product_tag("TOURS"), "tour");
        assert_eq!(product_tag("bus"), "bu");
        assert_eq!(product_tag("class"), "clas");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("tours".parse::<Category>(), Ok(Category::Tours));
        assert_eq!(" Rent ".parse::<Category>(), Ok(Category::Rent));
        assert!("cruises".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_cycles() {
        assert_eq!(Category::Tours.next(), Category::Tickets);
        assert_eq!(Category::Transfer.next(), Category::Tours);
        assert_eq!(Category::Tours.prev(), Category::Transfer);
    }

    #[test]
    fn test_product_id_accepts_string_and_number() {
        let from_str: ProductId = serde_json::from_str("\"abc-1\"").unwrap();
        let from_num: ProductId = serde_json::from_str("42").unwrap();

        assert_eq!(from_str, ProductId::from("abc-1"));
        assert_eq!(from_num, ProductId::from(42i64));
        assert_eq!(serde_json::to_string(&from_num).unwrap(), "\"42\"");
    }
}
