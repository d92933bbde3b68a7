//! Delegated rendering.
//!
//! A slot has no element of its own: its attributes are merged onto the one
//! child element the caller supplies, and that child's tag is what renders.

use crate::class;
use crate::node::{Attributes, Element, Node};
use crate::{Error, Result};

/// Resolve `content` to its single child element.
///
/// Fragments are flattened first; anything other than exactly one element is
/// a configuration error, as is a child whose tag or attribute names cannot be
/// written as markup.
pub fn single_child(content: Node) -> Result<Element> {
    let mut children = content.flatten();
    if children.len() != 1 {
        return Err(Error::SlotChildCount(children.len()));
    }
    match children.pop() {
        Some(Node::Element(el)) => {
            el.validate()?;
            Ok(el)
        }
        _ => Err(Error::SlotChildNotElement),
    }
}

/// Merge slot attributes onto `child`.
///
/// Child attributes win, except `class`, which is composed slot first.
/// Classes go through the Tailwind merge rather than plain concatenation, so a
/// child utility replaces a conflicting variant utility.
pub fn merge(slot: &Attributes, mut child: Element) -> Element {
    let mut attributes = slot.clone();
    attributes.extend(&child.attributes);

    let merged = class::compose(
        [slot.get_str("class"), child.class()]
            .into_iter()
            .flatten(),
    );
    if merged.is_empty() {
        attributes.remove("class");
    } else {
        attributes.set("class", merged);
    }

    child.attributes = attributes;
    child
}
