//! Minimal document model.
//!
//! The crate does not own a browser. This models exactly the DOM surface the
//! customizations touch: "does an element with class X exist, and how many",
//! attribute/markup mutation, and interaction listeners fired by the
//! platform (or a test) on behalf of the user.

pub mod probe;

use std::collections::HashMap;
use std::fmt;

/// Arena index of an element. Stable for the lifetime of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Interaction triggers the customizations listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Click,
    Play,
}

/// Listener callbacks receive the element they are attached to, so a
/// handler can re-assert element state on interaction (the logo redirect
/// does) without holding the whole document.
type Callback = Box<dyn Fn(&mut Element) + Send>;

struct Listener {
    node: NodeId,
    trigger: Trigger,
    callback: Callback,
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    pub text: String,
    /// Raw markup installed via `set_html`. The platform renders it; this
    /// model only stores it.
    pub html: Option<String>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Builder for fixture and platform-side element creation.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: String,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

pub struct Document {
    title: String,
    nodes: Vec<Element>,
    head: NodeId,
    body: NodeId,
    listeners: Vec<Listener>,
}

impl Document {
    pub fn new(title: &str) -> Self {
        let mut doc = Self {
            title: title.to_string(),
            nodes: Vec::new(),
            head: NodeId(0),
            body: NodeId(0),
            listeners: Vec::new(),
        };
        let root = doc.push(Element {
            tag: "html".to_string(),
            ..Element::default()
        });
        doc.head = doc.append(root, ElementSpec::new("head"));
        doc.body = doc.append(root, ElementSpec::new("body"));
        doc
    }

    fn push(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(element);
        id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Append a new element under `parent`.
    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let id = self.push(Element {
            tag: spec.tag,
            id: spec.id,
            classes: spec.classes,
            attrs: spec.attrs.into_iter().collect(),
            text: spec.text,
            html: None,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    // ---- queries (all non-fatal existence checks) ----

    pub fn by_id(&self, element_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(element_id))
            .map(NodeId)
    }

    /// All elements carrying `class`, in document order.
    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.has_class(class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.by_class(class).into_iter().next()
    }

    pub fn first_by_attr(&self, name: &str, value: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.attr(name) == Some(value))
            .map(NodeId)
    }

    /// Depth-first descendants of `id`, not including `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    pub fn text_of(&self, id: NodeId) -> &str {
        &self.nodes[id.0].text
    }

    // ---- mutations ----

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.nodes[id.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    /// Replace an element's contents with raw markup. Existing children are
    /// discarded, matching `innerHTML` assignment.
    pub fn set_html(&mut self, id: NodeId, html: impl Into<String>) {
        let node = &mut self.nodes[id.0];
        node.children.clear();
        node.html = Some(html.into());
    }

    pub fn html_of(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].html.as_deref()
    }

    /// Append a `<script src=...>` element to the head.
    pub fn append_script(&mut self, src: &str) -> NodeId {
        let head = self.head;
        self.append(head, ElementSpec::new("script").attr("src", src))
    }

    /// Script sources currently present in the head, in insertion order.
    pub fn scripts(&self) -> Vec<&str> {
        self.nodes[self.head.0]
            .children
            .iter()
            .filter(|c| self.nodes[c.0].tag == "script")
            .filter_map(|c| self.nodes[c.0].attr("src"))
            .collect()
    }

    // ---- interaction listeners ----

    pub fn on(&mut self, node: NodeId, trigger: Trigger, callback: impl Fn(&mut Element) + Send + 'static) {
        self.listeners.push(Listener {
            node,
            trigger,
            callback: Box::new(callback),
        });
    }

    /// Dispatch an interaction to every listener attached to `node` for
    /// `trigger`, in attachment order.
    pub fn fire(&mut self, node: NodeId, trigger: Trigger) {
        let Document { nodes, listeners, .. } = self;
        for listener in listeners.iter() {
            if listener.node == node && listener.trigger == trigger {
                (listener.callback)(&mut nodes[node.0]);
            }
        }
    }

    pub fn click(&mut self, node: NodeId) {
        self.fire(node, Trigger::Click);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn listeners_on(&self, node: NodeId) -> usize {
        self.listeners.iter().filter(|l| l.node == node).count()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("title", &self.title)
            .field("nodes", &self.nodes.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
