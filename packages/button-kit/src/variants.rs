//! Variant resolution.
//!
//! Maps an `(intent, size)` selection to the class list of the button. Every
//! combination is precomputed once into [`VARIANT_TABLE`]; unset axes fall
//! back to their `Default` value before lookup.

use crate::class;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Classes shared by every button regardless of variant.
pub const BASE_CLASS: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-[color,box-shadow] disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 [&_svg]:shrink-0 ring-ring/10 dark:ring-ring/20 dark:outline-ring/40 outline-ring/50 focus-visible:ring-4 focus-visible:outline-1 aria-invalid:focus-visible:ring-0";

/// Visual intent of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Default,
        Intent::Destructive,
        Intent::Outline,
        Intent::Secondary,
        Intent::Ghost,
        Intent::Link,
    ];

    /// Class fragment of this intent.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground shadow-sm hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground shadow-xs hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background shadow-xs hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => {
                "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80"
            }
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| Error::UnknownIntent(s.to_string()))
    }
}

/// Size of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Default, Size::Sm, Size::Lg, Size::Icon];

    /// Class fragment of this size.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
            Self::Sm => "h-8 rounded-md px-3 has-[>svg]:px-2.5",
            Self::Lg => "h-10 rounded-md px-6 has-[>svg]:px-4",
            Self::Icon => "size-9",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| Error::UnknownSize(s.to_string()))
    }
}

/// Precomputed class list for every `(intent, size)` pair.
///
/// Indexed by enum discriminant, so a missing combination cannot be expressed.
#[derive(Debug)]
pub struct VariantTable {
    entries: [[String; Size::ALL.len()]; Intent::ALL.len()],
}

impl VariantTable {
    fn build() -> Self {
        let entries = std::array::from_fn(|i| {
            std::array::from_fn(|s| {
                class::compose([BASE_CLASS, Intent::ALL[i].classes(), Size::ALL[s].classes()])
            })
        });
        Self { entries }
    }

    /// Class list for an exact `(intent, size)` pair.
    pub fn get(&self, intent: Intent, size: Size) -> &str {
        &self.entries[intent as usize][size as usize]
    }

    /// Iterate over all entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Intent, Size, &str)> {
        Intent::ALL.into_iter().flat_map(move |intent| {
            Size::ALL
                .into_iter()
                .map(move |size| (intent, size, self.get(intent, size)))
        })
    }
}

/// The process-wide variant table, built on first use.
pub static VARIANT_TABLE: LazyLock<VariantTable> = LazyLock::new(VariantTable::build);

/// Resolve the class list for a selection, defaulting unset axes.
pub fn resolve(intent: Option<Intent>, size: Option<Size>) -> &'static str {
    let table: &'static VariantTable = &VARIANT_TABLE;
    table.get(intent.unwrap_or_default(), size.unwrap_or_default())
}

/// Parse optional string keys, failing on any unrecognized key.
pub fn parse_keys(
    intent: Option<&str>,
    size: Option<&str>,
) -> Result<(Option<Intent>, Option<Size>)> {
    let intent = intent.map(str::parse::<Intent>).transpose()?;
    let size = size.map(str::parse::<Size>).transpose()?;
    Ok((intent, size))
}
