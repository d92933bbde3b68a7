//! Button component.
//!
//! Resolves variant classes, applies the caller's extension hooks and renders
//! either a native `<button>` or the caller's own child element.

use crate::class;
use crate::config::ButtonConfig;
use crate::extend::{extend_children, extend_class_name, ClassNameExt, Render, RenderContext};
use crate::icon;
use crate::node::{validate_attribute_name, AttrValue, Attributes, Element, Node};
use crate::slot;
use crate::variants::{resolve, Intent, Size};
use crate::{Error, Result};

/// Attributes owned by dedicated props; ignored in the pass-through map.
const RESERVED_ATTRIBUTES: [&str; 2] = ["class", "disabled"];

/// Props of a button.
#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    pub intent: Option<Intent>,
    pub size: Option<Size>,
    /// Render onto the single child element instead of a native button.
    pub as_child: bool,
    pub is_loading: bool,
    pub disabled: bool,
    pub class_name: ClassNameExt,
    pub children: Node,
    /// Replaces `children` when set.
    pub render: Option<Render>,
    /// Native attributes forwarded verbatim.
    pub attributes: Attributes,
}

impl ButtonProps {
    pub fn new(children: impl Into<Node>) -> Self {
        Self {
            children: children.into(),
            ..Default::default()
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<ClassNameExt>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn render(mut self, render: Render) -> Self {
        self.render = Some(render);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Context handed to the extension hooks.
    pub fn context(&self) -> RenderContext {
        RenderContext {
            disabled: self.disabled,
            is_loading: self.is_loading,
        }
    }
}

/// Which element a render produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// A native `<button>` holding the content.
    Native,
    /// The caller's child element, with the button props merged onto it.
    Delegated(Element),
}

impl RenderMode {
    fn decide(as_child: bool, content: Node) -> Result<(Self, Vec<Node>)> {
        if as_child {
            let child = slot::single_child(content)?;
            Ok((RenderMode::Delegated(child), Vec::new()))
        } else {
            Ok((RenderMode::Native, content.flatten()))
        }
    }
}

/// Stateless renderer for [`ButtonProps`].
pub struct Button;

impl Button {
    /// Render with the default configuration.
    pub fn render(props: &ButtonProps) -> Result<Node> {
        Self::render_with(props, &ButtonConfig::default())
    }

    pub fn render_with(props: &ButtonProps, config: &ButtonConfig) -> Result<Node> {
        let cx = props.context();

        let extra_class = extend_class_name(&cx, &props.class_name);
        let variant_class = resolve(props.intent, props.size);
        let class = if extra_class.is_empty() {
            variant_class.to_string()
        } else {
            class::compose([variant_class, extra_class.as_str()])
        };
        let content = extend_children(&props.children, props.render.as_ref(), &cx);

        let attributes = Self::attributes(props, config, class)?;

        let (mode, children) = RenderMode::decide(props.as_child, content).inspect_err(|err| {
            tracing::debug!(error = %err, "rejected delegated button content");
        })?;

        let mut element = match mode {
            RenderMode::Native => Element {
                tag: "button".to_string(),
                attributes,
                children,
            },
            RenderMode::Delegated(child) => slot::merge(&attributes, child),
        };

        if props.is_loading {
            if element.is_void() {
                tracing::debug!(tag = %element.tag, "no room for the loading spinner");
                return Err(Error::SpinnerInVoidElement(element.tag));
            }
            element
                .children
                .insert(0, icon::spinner(&config.spinner_class));
        }

        Ok(element.into())
    }

    fn attributes(props: &ButtonProps, config: &ButtonConfig, class: String) -> Result<Attributes> {
        let mut attributes = Attributes::new();
        if let Some(data_slot) = &config.data_slot {
            attributes.set("data-slot", data_slot.as_str());
        }

        for (name, value) in props.attributes.iter() {
            validate_attribute_name(name)?;
            if RESERVED_ATTRIBUTES.contains(&name) {
                continue;
            }
            attributes.set(name, value.clone());
        }

        if props.disabled {
            attributes.set("disabled", true);
        }
        if !class.is_empty() {
            attributes.set("class", class);
        }
        Ok(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::VARIANT_TABLE;

    fn render_html(props: &ButtonProps) -> String {
        Button::render(props).unwrap().to_html()
    }

    fn spinner() -> Node {
        icon::spinner(&ButtonConfig::default().spinner_class)
    }

    fn rendered(props: &ButtonProps) -> Element {
        match Button::render(props).unwrap() {
            Node::Element(el) => el,
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_destructive_small_button() {
        let props = ButtonProps::new("Delete")
            .intent(Intent::Destructive)
            .size(Size::Sm);
        let el = rendered(&props);

        assert_eq!(el.tag, "button");
        assert_eq!(el.class(), Some(VARIANT_TABLE.get(Intent::Destructive, Size::Sm)));
        assert_eq!(el.attributes.get_str("data-slot"), Some("button"));
        assert!(!el.attributes.contains("disabled"));
        assert_eq!(el.children, vec![Node::text("Delete")]);
    }

    #[test]
    fn test_loading_prepends_spinner() {
        let props = ButtonProps::new("Delete")
            .intent(Intent::Destructive)
            .size(Size::Sm)
            .loading(true);
        let el = rendered(&props);

        assert_eq!(el.tag, "button");
        assert_eq!(el.class(), Some(VARIANT_TABLE.get(Intent::Destructive, Size::Sm)));
        assert_eq!(el.children, vec![spinner(), Node::text("Delete")]);
    }

    #[test]
    fn test_loading_only_adds_spinner() {
        let children = Node::fragment(vec![
            Node::text("Save"),
            Element::new("kbd").child("S").into(),
        ]);
        let idle = ButtonProps::new(children)
            .intent(Intent::Outline)
            .size(Size::Lg)
            .class_name("w-full")
            .attr("type", "submit")
            .disabled(true);
        let busy = idle.clone().loading(true);

        let idle_el = rendered(&idle);
        let mut busy_el = rendered(&busy);

        assert_eq!(busy_el.children.remove(0), spinner());
        assert_eq!(idle_el, busy_el);
    }

    #[test]
    fn test_disabled_is_forwarded_independently_of_loading() {
        let el = rendered(&ButtonProps::new("Go").loading(true));
        assert!(!el.attributes.contains("disabled"));

        let el = rendered(&ButtonProps::new("Go").disabled(true));
        assert_eq!(el.attributes.get("disabled"), Some(&AttrValue::Bool(true)));
        assert!(render_html(&ButtonProps::new("Go").disabled(true)).contains(" disabled"));
    }

    #[test]
    fn test_caller_class_overrides_variant() {
        let el = rendered(&ButtonProps::new("Tall").class_name("h-12 w-full"));
        let class = el.class().unwrap();
        let tokens: Vec<_> = class.split_whitespace().collect();

        assert!(tokens.contains(&"h-12"));
        assert!(tokens.contains(&"w-full"));
        assert!(!tokens.contains(&"h-9"));
    }

    #[test]
    fn test_state_conditional_class() {
        let class_name = ClassNameExt::new().when_loading("cursor-wait");

        let idle = rendered(&ButtonProps::new("Go").class_name(class_name.clone()));
        let busy = rendered(&ButtonProps::new("Go").class_name(class_name).loading(true));

        assert!(!idle.class().unwrap().contains("cursor-wait"));
        assert!(busy.class().unwrap().split_whitespace().any(|t| t == "cursor-wait"));
    }

    #[test]
    fn test_render_override_sees_context() {
        let props = ButtonProps::new("Save")
            .loading(true)
            .render(Render::new(|cx| {
                Node::text(if cx.is_loading { "Saving" } else { "Save" })
            }));
        let el = rendered(&props);

        assert_eq!(el.children, vec![spinner(), Node::text("Saving")]);
    }

    #[test]
    fn test_pass_through_attributes() {
        let props = ButtonProps::new("Go")
            .attr("type", "submit")
            .attr("aria-label", "Continue")
            .attr("class", "ignored")
            .attr("disabled", true);
        let el = rendered(&props);

        assert_eq!(el.attributes.get_str("type"), Some("submit"));
        assert_eq!(el.attributes.get_str("aria-label"), Some("Continue"));
        assert!(!el.attributes.contains("disabled"));
        assert!(!el.class().unwrap().contains("ignored"));
    }

    #[test]
    fn test_pass_through_can_replace_data_slot() {
        let el = rendered(&ButtonProps::new("Go").attr("data-slot", "cta"));
        assert_eq!(el.attributes.get_str("data-slot"), Some("cta"));
    }

    #[test]
    fn test_invalid_attribute_name() {
        let props = ButtonProps::new("Go").attr("on click", "x");
        assert!(matches!(
            Button::render(&props),
            Err(Error::InvalidAttribute(name)) if name == "on click"
        ));
    }

    #[test]
    fn test_delegated_child() {
        let link = Element::new("a")
            .attr("href", "/docs")
            .attr("class", "font-bold")
            .child("Docs");
        let props = ButtonProps::new(link)
            .as_child(true)
            .intent(Intent::Link)
            .attr("aria-label", "Documentation");
        let el = rendered(&props);

        assert_eq!(el.tag, "a");
        assert_eq!(el.attributes.get_str("href"), Some("/docs"));
        assert_eq!(el.attributes.get_str("aria-label"), Some("Documentation"));
        assert_eq!(el.attributes.get_str("data-slot"), Some("button"));
        let tokens: Vec<_> = el.class().unwrap().split_whitespace().collect();
        assert!(tokens.contains(&"underline-offset-4"));
        assert!(tokens.contains(&"font-bold"));
        assert!(!tokens.contains(&"font-medium"));
        assert_eq!(el.children, vec![Node::text("Docs")]);
    }

    #[test]
    fn test_delegated_child_while_loading() {
        let props = ButtonProps::new(Element::new("a").child("Docs"))
            .as_child(true)
            .loading(true);
        let el = rendered(&props);

        assert_eq!(el.tag, "a");
        assert_eq!(el.children, vec![spinner(), Node::text("Docs")]);
    }

    #[test]
    fn test_delegated_child_count_errors() {
        let none = ButtonProps::new(Node::empty()).as_child(true);
        assert!(matches!(Button::render(&none), Err(Error::SlotChildCount(0))));

        let two = ButtonProps::new(Node::fragment(vec![
            Element::new("a").into(),
            Element::new("span").into(),
        ]))
        .as_child(true);
        assert!(matches!(Button::render(&two), Err(Error::SlotChildCount(2))));

        let text = ButtonProps::new("Docs").as_child(true);
        assert!(matches!(Button::render(&text), Err(Error::SlotChildNotElement)));
    }

    #[test]
    fn test_delegated_child_markup_is_checked() {
        let props = ButtonProps::new(Element::new("a onclick=x").child("Go")).as_child(true);
        assert!(matches!(
            Button::render(&props),
            Err(Error::InvalidTag(tag)) if tag == "a onclick=x"
        ));

        let props = ButtonProps::new(Element::new("a").attr("on click", "x").child("Go"))
            .as_child(true);
        assert!(matches!(
            Button::render(&props),
            Err(Error::InvalidAttribute(name)) if name == "on click"
        ));
    }

    #[test]
    fn test_loading_void_child_is_an_error() {
        let input = Element::new("input").attr("type", "submit").attr("value", "Send");

        let props = ButtonProps::new(input.clone()).as_child(true).loading(true);
        assert!(matches!(
            Button::render(&props),
            Err(Error::SpinnerInVoidElement(tag)) if tag == "input"
        ));

        // without the spinner a void child renders fine
        let el = rendered(&ButtonProps::new(input).as_child(true));
        assert_eq!(el.tag, "input");
        assert!(el.children.is_empty());
    }

    #[test]
    fn test_delegated_child_from_render_override() {
        let props = ButtonProps::new(Node::empty())
            .as_child(true)
            .render(Render::new(|_| Element::new("a").child("Docs").into()));
        assert_eq!(rendered(&props).tag, "a");
    }

    #[test]
    fn test_native_mode_ignores_child_count() {
        let el = rendered(&ButtonProps::new(Node::empty()));
        assert!(el.children.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let props = ButtonProps::new("Delete")
            .intent(Intent::Destructive)
            .size(Size::Icon)
            .loading(true)
            .attr("title", "Remove \"item\"");
        assert_eq!(render_html(&props), render_html(&props));
    }

    #[test]
    fn test_config_controls_slot_and_spinner() {
        let config = ButtonConfig {
            data_slot: None,
            spinner_class: "animate-spin size-3".to_string(),
        };
        let node = Button::render_with(&ButtonProps::new("Go").loading(true), &config).unwrap();
        let el = node.as_element().unwrap();

        assert!(!el.attributes.contains("data-slot"));
        assert_eq!(el.children[0], icon::spinner("animate-spin size-3"));
    }

    #[test]
    fn test_html_output() {
        let props = ButtonProps::new("Delete")
            .intent(Intent::Destructive)
            .size(Size::Sm);
        let class = VARIANT_TABLE
            .get(Intent::Destructive, Size::Sm)
            .replace('&', "&amp;")
            .replace('>', "&gt;");
        assert_eq!(
            render_html(&props),
            format!(r#"<button class="{}" data-slot="button">Delete</button>"#, class)
        );
    }
}
