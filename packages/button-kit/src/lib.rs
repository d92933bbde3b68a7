//! Button Kit - variant-driven button component.
//!
//! This crate renders a single interactive control from a small props
//! contract:
//!
//! - **Variants**: a fixed `(intent, size)` table of class fragments
//! - **Class composition**: Tailwind-aware merging of fragments and overrides
//! - **Extension hooks**: state-conditional class names and content overrides
//! - **Loading state**: a spinner prepended to the button content
//! - **Delegation**: merging the button's props onto a caller-supplied child
//!
//! # Example
//!
//! ```rust
//! use button_kit::{Button, ButtonProps, Intent, Node, Size};
//!
//! let props = ButtonProps::new(Node::text("Delete"))
//!     .intent(Intent::Destructive)
//!     .size(Size::Sm)
//!     .loading(true);
//!
//! let html = Button::render(&props).unwrap().to_html();
//! assert!(html.starts_with("<button class=\""));
//! assert!(html.contains("bg-destructive"));
//! ```

pub mod button;
pub mod class;
pub mod config;
pub mod extend;
pub mod icon;
pub mod node;
pub mod slot;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use button::{Button, ButtonProps, RenderMode};
pub use config::ButtonConfig;
pub use extend::{extend_children, extend_class_name, ClassNameExt, Render, RenderContext};
pub use node::{AttrValue, Attributes, Element, Node};
pub use types::{ApiResponse, VariantEntry};
pub use variants::{parse_keys, resolve, Intent, Size, VariantTable, VARIANT_TABLE};

/// Error types for button-kit operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Unknown size: {0}")]
    UnknownSize(String),

    #[error("Delegated rendering requires exactly one child element, got {0}")]
    SlotChildCount(usize),

    #[error("Delegated rendering requires an element child, got text")]
    SlotChildNotElement,

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Loading spinner cannot be placed inside void element <{0}>")]
    SpinnerInVoidElement(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for button-kit operations.
pub type Result<T> = std::result::Result<T, Error>;
