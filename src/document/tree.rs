/*!
 * Document tree shared by generated and loaded documents.
 *
 * A node is either an element (a container with a name, attributes and
 * children) or a text payload. Traversal goes through `NodeVisitor`, which is
 * dispatched on the node variant.
 */

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Container node
    Element(Element),
    /// Text-bearing node
    Text(String),
}

impl Node {
    /// Dispatch this node to the visitor, descending into elements.
    pub fn accept(&mut self, visitor: &mut dyn NodeVisitor) {
        match self {
            Node::Element(element) => element.accept(visitor),
            Node::Text(text) => visitor.visit_text(text),
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// Visitor over the two node variants.
pub trait NodeVisitor {
    /// Called for every element before its children.
    ///
    /// Returning `false` skips the element's children.
    fn visit_element(&mut self, _element: &mut Element) -> bool {
        true
    }

    /// Called for every text payload.
    fn visit_text(&mut self, text: &mut String);
}

/// Element node with ordered attributes and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified name, e.g. `text:p`
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    /// Set an attribute, replacing an existing value of the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Append a child node.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Append text, merging with a trailing text node.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First element named `name` in depth-first order, including `self`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(name))
    }

    /// Mutable variant of [`Element::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name == name {
            return Some(self);
        }
        for child in self.children.iter_mut() {
            if let Node::Element(element) = child {
                if let Some(found) = element.find_mut(name) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }

    /// Dispatch this element and its subtree to the visitor.
    pub fn accept(&mut self, visitor: &mut dyn NodeVisitor) {
        if visitor.visit_element(self) {
            for child in self.children.iter_mut() {
                child.accept(visitor);
            }
        }
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Element(element) => collect_text(element, out),
            Node::Text(text) => out.push_str(text),
        }
    }
}
