//! Product record as returned by the listing endpoint.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric product identifier.
///
/// Serialized as a bare JSON number. The decimal [`fmt::Display`] form is what
/// the id filter matches against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub year: i32,
    /// CSS color as sent by the endpoint, usually `#rrggbb`.
    pub color: String,
}

impl Product {
    /// Lines shown under the product name in the detail modal.
    #[must_use]
    pub fn detail_lines(&self) -> [String; 3] {
        [
            format!("ID: {}", self.id),
            format!("Year: {}", self.year),
            format!("Color: {}", self.color),
        ]
    }

    /// The product color, if it is safe to drop into a `style` attribute.
    #[must_use]
    pub fn swatch(&self) -> Option<&str> {
        is_css_color_token(&self.color).then_some(self.color.as_str())
    }
}

/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and plain named colors.
fn is_css_color_token(raw: &str) -> bool {
    if let Some(hex) = raw.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphabetic())
}
