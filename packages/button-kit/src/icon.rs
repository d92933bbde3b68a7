//! Loading indicator icon.

use crate::node::{Element, Node};

/// Path data of the Lucide `loader-circle` icon.
const LOADER_CIRCLE_PATH: &str = "M21 12a9 9 0 1 1-6.219-8.56";

/// Spinner rendered in front of the button content while loading.
pub fn spinner(class: &str) -> Node {
    let mut svg = Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", "24")
        .attr("height", "24")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .attr("aria-hidden", "true")
        .child(Element::new("path").attr("d", LOADER_CIRCLE_PATH));

    let class = class.trim();
    if !class.is_empty() {
        svg = svg.attr("class", class);
    }
    svg.into()
}
