//! State-conditional extension hooks.
//!
//! Callers describe how presentation changes with the button state without
//! the button knowing every combination: [`ClassNameExt`] adds class fragments
//! for matching states and [`Render`] replaces the content entirely.

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// State visible to extension hooks during one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    pub disabled: bool,
    pub is_loading: bool,
}

type ClassFn = Arc<dyn Fn(&RenderContext) -> Option<String> + Send + Sync>;

/// Base class name plus context-dependent fragments, applied in declaration order.
#[derive(Clone, Default)]
pub struct ClassNameExt {
    base: Option<String>,
    fragments: Vec<ClassFn>,
}

impl ClassNameExt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Static class name applied in every state.
    pub fn base(class: impl Into<String>) -> Self {
        Self {
            base: Some(class.into()),
            fragments: Vec::new(),
        }
    }

    /// Add `class` whenever `predicate` holds for the render context.
    pub fn when<P>(self, predicate: P, class: impl Into<String>) -> Self
    where
        P: Fn(&RenderContext) -> bool + Send + Sync + 'static,
    {
        let class = class.into();
        self.with(move |cx| predicate(cx).then(|| class.clone()))
    }

    pub fn when_disabled(self, class: impl Into<String>) -> Self {
        self.when(|cx| cx.disabled, class)
    }

    pub fn when_loading(self, class: impl Into<String>) -> Self {
        self.when(|cx| cx.is_loading, class)
    }

    /// Add an arbitrary fragment computed from the render context.
    pub fn with<F>(mut self, fragment: F) -> Self
    where
        F: Fn(&RenderContext) -> Option<String> + Send + Sync + 'static,
    {
        self.fragments.push(Arc::new(fragment));
        self
    }
}

impl fmt::Debug for ClassNameExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassNameExt")
            .field("base", &self.base)
            .field("fragments", &self.fragments.len())
            .finish()
    }
}

impl From<&str> for ClassNameExt {
    fn from(class: &str) -> Self {
        ClassNameExt::base(class)
    }
}

impl From<String> for ClassNameExt {
    fn from(class: String) -> Self {
        ClassNameExt::base(class)
    }
}

/// Content override: produces the button content from the render context.
#[derive(Clone)]
pub struct Render(Arc<dyn Fn(&RenderContext) -> Node + Send + Sync>);

impl Render {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&RenderContext) -> Node + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    pub fn call(&self, cx: &RenderContext) -> Node {
        (self.0)(cx)
    }
}

impl fmt::Debug for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Render(..)")
    }
}

/// Base class followed by every fragment that applies to `cx`, space separated.
pub fn extend_class_name(cx: &RenderContext, class_name: &ClassNameExt) -> String {
    class_name
        .base
        .iter()
        .cloned()
        .chain(class_name.fragments.iter().filter_map(|fragment| fragment(cx)))
        .filter(|class| !class.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The override output when a render override is set, otherwise `children` unchanged.
pub fn extend_children(children: &Node, render: Option<&Render>, cx: &RenderContext) -> Node {
    match render {
        Some(render) => render.call(cx),
        None => children.clone(),
    }
}
