//! Product data handed over by the storefront for the page being viewed.

use serde::Deserialize;

use crate::error::WachatError;

/// The product the message talks about.
///
/// Fields are checked once when the record is built, so link building never
/// has to probe for missing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductContext {
    pub name: String,
    pub url: String,
    /// Already formatted by the storefront. `None` when the product has no price.
    pub price: Option<String>,
}

impl ProductContext {
    pub fn new(name: impl Into<String>, url: impl Into<String>, price: Option<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            price,
        }
    }

    /// Parse a product from JSON (`{"name": .., "url": .., "price": ..}`).
    ///
    /// `name` and `url` are required; `price` may be missing, null, a string,
    /// or a number.
    pub fn from_json(json: &str) -> Result<Self, WachatError> {
        let raw: RawProduct = serde_json::from_str(json)?;

        let name = raw
            .name
            .ok_or_else(|| WachatError::Product("missing product name".to_string()))?;
        let url = raw
            .url
            .ok_or_else(|| WachatError::Product("missing product url".to_string()))?;
        let price = match raw.price {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            Some(other) => {
                return Err(WachatError::Product(format!(
                    "price must be a string or number, got {other}"
                )))
            }
        };

        Ok(Self { name, url, price })
    }

    pub fn price_or_empty(&self) -> &str {
        self.price.as_deref().unwrap_or("")
    }
}

#[derive(Deserialize)]
struct RawProduct {
    name: Option<String>,
    url: Option<String>,
    price: Option<serde_json::Value>,
}

/// Tokens a message template may contain, one per product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Url,
    Price,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Placeholder::Name, Placeholder::Url, Placeholder::Price];

    /// Literal token as written in templates.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Name => "{product_name}",
            Self::Url => "{product_url}",
            Self::Price => "{product_price}",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Name => "Product name",
            Self::Url => "Product URL",
            Self::Price => "Product price",
        }
    }

    /// The product field this token stands for.
    pub fn value_in<'a>(&self, product: &'a ProductContext) -> &'a str {
        match self {
            Self::Name => &product.name,
            Self::Url => &product.url,
            Self::Price => product.price_or_empty(),
        }
    }
}
