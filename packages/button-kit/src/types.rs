//! Serializable report types shared with the CLI.

use crate::variants::{Intent, Size, VARIANT_TABLE};
use serde::{Deserialize, Serialize};

/// One resolved row of the variant table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantEntry {
    pub intent: Intent,
    pub size: Size,
    /// Final class list for this pair
    pub class: String,
}

impl VariantEntry {
    /// Table rows matching the given filters; `None` matches every value.
    pub fn list(intent: Option<Intent>, size: Option<Size>) -> Vec<Self> {
        VARIANT_TABLE
            .iter()
            .filter(|(i, s, _)| intent.map_or(true, |x| x == *i) && size.map_or(true, |x| x == *s))
            .map(|(intent, size, class)| Self {
                intent,
                size,
                class: class.to_string(),
            })
            .collect()
    }
}

/// API response wrapper for success cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
