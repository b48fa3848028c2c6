// In-memory document and notifier used by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;

use field_guard_core::{Dom, Notifier, Toast};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

struct Node {
    tag: String,
    id: Option<String>,
    parent: Option<NodeId>,
    value: String,
}

struct Listener {
    target: NodeId,
    event: String,
    handler: Box<dyn FnMut()>,
}

/// Tiny element tree. Locators are `#id` or a bare tag name.
#[derive(Default)]
pub struct FakeDom {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<Listener>>,
    guarded_forms: RefCell<Vec<NodeId>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, tag: &str, id: Option<&str>, parent: Option<NodeId>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_ascii_uppercase(),
            id: id.map(str::to_string),
            parent,
            value: String::new(),
        });
        NodeId(nodes.len() - 1)
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.nodes.borrow_mut()[node.0].value = value.to_string();
    }

    /// Dispatches `event` on `node`
    pub fn fire(&self, node: NodeId, event: &str) {
        let mut listeners = self.listeners.borrow_mut();
        for listener in listeners.iter_mut() {
            if listener.target == node && listener.event == event {
                (listener.handler)();
            }
        }
    }

    /// Types `value` into `node` and fires `event`
    pub fn enter(&self, node: NodeId, value: &str, event: &str) {
        self.set_value(node, value);
        self.fire(node, event);
    }

    /// Submits `form`; returns whether the page would navigate
    pub fn submit(&self, form: NodeId) -> bool {
        !self.guarded_forms.borrow().contains(&form)
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| listener.target == node)
            .count()
    }

    pub fn listens_for(&self, node: NodeId, event: &str) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|listener| listener.target == node && listener.event == event)
    }
}

impl Dom for FakeDom {
    type Element = NodeId;

    fn query(&self, locator: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let position = match locator.strip_prefix('#') {
            Some(id) => nodes.iter().position(|node| node.id.as_deref() == Some(id)),
            None => nodes
                .iter()
                .position(|node| node.tag.eq_ignore_ascii_case(locator)),
        };
        position.map(NodeId)
    }

    fn is_input(&self, element: &NodeId) -> bool {
        self.nodes.borrow()[element.0].tag == "INPUT"
    }

    fn is_form(&self, element: &NodeId) -> bool {
        self.nodes.borrow()[element.0].tag == "FORM"
    }

    fn closest_form(&self, element: &NodeId) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let mut current = Some(*element);
        while let Some(node) = current {
            if nodes[node.0].tag == "FORM" {
                return Some(node);
            }
            current = nodes[node.0].parent;
        }
        None
    }

    fn value(&self, element: &NodeId) -> String {
        self.nodes.borrow()[element.0].value.clone()
    }

    fn prevent_submit(&self, form: &NodeId) {
        self.guarded_forms.borrow_mut().push(*form);
    }

    fn listen(&self, element: &NodeId, event: &str, handler: Box<dyn FnMut()>) {
        self.listeners.borrow_mut().push(Listener {
            target: *element,
            event: event.to_string(),
            handler,
        });
    }
}

/// Records every toast it is asked to show
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts
            .borrow()
            .iter()
            .map(|toast| toast.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.toasts.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn present(&self, toast: &Toast) {
        self.toasts.borrow_mut().push(toast.clone());
    }
}
