//! Node definitions.
//!
//! The core tree types used throughout hastform.

use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{AstError, Properties, PropertyValue};

/// Node fields this model does not interpret, such as `position`, `data` or
/// the `name`/`attributes` of MDX nodes. Written back unchanged on
/// serialization.
pub type Extra = Map<String, Value>;

/// A node in a document tree.
///
/// The set of kinds is closed: anything that is not a root, element or text
/// node is carried as [`Opaque`] and left alone by transforms.
///
/// # Serialization
///
/// Nodes (de)serialize in the HAST JSON shape, discriminated by `type`:
///
/// ```rust
/// use hastform_ast::Node;
///
/// let node: Node = serde_json::from_str(
///     r#"{"type": "element", "tagName": "p", "children": [{"type": "text", "value": "hi"}]}"#,
/// ).unwrap();
///
/// assert!(node.is_element_with_tag("p"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawNode")]
pub enum Node {
    Root(Root),
    Element(Element),
    Text(Text),
    Opaque(Opaque),
}

/// The root of a document tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Root {
    /// Top-level content, in document order.
    pub children: Vec<Node>,

    /// Uninterpreted fields.
    pub extra: Extra,
}

/// An element such as `h1`, `blockquote` or `table`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element name. Must not be empty; serializing an element with an empty
    /// name fails with [`AstError::EmptyTagName`].
    pub tag_name: String,

    /// Properties (attributes). `None` when the element has no property map
    /// at all, which is distinct from an empty map.
    pub properties: Option<Properties>,

    /// Child nodes, in document order.
    pub children: Vec<Node>,

    /// Uninterpreted fields.
    pub extra: Extra,
}

/// A literal text leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
    pub extra: Extra,
}

/// Any node kind this model does not interpret (comments, doctypes, raw HTML,
/// MDX nodes, ...). Every field is kept so the node survives a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque {
    /// The `type` discriminant as read.
    pub kind: String,

    /// String payload, if the node had one.
    pub value: Option<String>,

    /// Children, if the node had any.
    pub children: Option<Vec<Node>>,

    /// Every other field.
    pub extra: Extra,
}

impl Node {
    /// Creates a text node.
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text::new(value))
    }

    /// Creates an element node with no properties and no children.
    ///
    /// # Panics
    ///
    /// Panics if `tag_name` is empty.
    #[inline]
    pub fn element(tag_name: impl Into<String>) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Returns the HAST `type` name of this node.
    pub fn kind(&self) -> &str {
        match self {
            Node::Root(_) => "root",
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Opaque(opaque) => &opaque.kind,
        }
    }

    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if this node is an element with the given tag name.
    #[inline]
    pub fn is_element_with_tag(&self, tag_name: &str) -> bool {
        self.as_element().is_some_and(|element| element.is(tag_name))
    }
}

impl Root {
    /// Creates a root owning the given children.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            extra: Extra::new(),
        }
    }

    /// Parses a tree from HAST JSON.
    ///
    /// The top-level node must be a root.
    ///
    /// `serde_json` stops at 128 levels of JSON nesting, and every element
    /// level takes two (the node object and its `children` array). Trees
    /// nested deeper than about 60 elements fail with
    /// [`AstError::InvalidJson`].
    pub fn from_json(json: &str) -> Result<Self, AstError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the tree to HAST JSON.
    pub fn to_json(&self) -> Result<String, AstError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Element {
    /// Creates an element with no properties and no children.
    ///
    /// # Panics
    ///
    /// Panics if `tag_name` is empty. Use [`Element::try_new`] for names
    /// that are not known up front.
    pub fn new(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        assert!(!tag_name.is_empty(), "element tag name must not be empty");
        Self::with_tag_name(tag_name)
    }

    /// Creates an element, rejecting an empty tag name.
    pub fn try_new(tag_name: impl Into<String>) -> Result<Self, AstError> {
        let tag_name = tag_name.into();
        if tag_name.is_empty() {
            return Err(AstError::EmptyTagName);
        }
        Ok(Self::with_tag_name(tag_name))
    }

    fn with_tag_name(tag_name: String) -> Self {
        Self {
            tag_name,
            properties: None,
            children: Vec::new(),
            extra: Extra::new(),
        }
    }

    /// Sets a property, creating the property map if needed.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.set_property(name, value);
        self
    }

    /// Appends children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns true if this element has the given tag name.
    #[inline]
    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }

    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.as_ref()?.get(name)
    }

    /// Returns the property map, creating an empty one if absent.
    pub fn properties_mut(&mut self) -> &mut Properties {
        self.properties.get_or_insert_with(Properties::new)
    }

    /// Sets a property, keeping the position of an existing key.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties_mut().insert(name.into(), value.into());
    }
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extra: Extra::new(),
        }
    }
}

impl Opaque {
    /// Creates an opaque node of the given kind with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            children: None,
            extra: Extra::new(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Root> for Node {
    fn from(root: Root) -> Self {
        Node::Root(root)
    }
}

impl From<Opaque> for Node {
    fn from(opaque: Opaque) -> Self {
        Node::Opaque(opaque)
    }
}

// Serialization borrows the tree and writes fields in HAST order:
// `type`, `tagName`, `properties`, `children`, `value`, then extras.

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Root(root) => root.serialize(serializer),
            Node::Element(element) => element.serialize(serializer),
            Node::Text(text) => text.serialize(serializer),
            Node::Opaque(opaque) => opaque.serialize(serializer),
        }
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", "root")?;
        map.serialize_entry("children", &self.children)?;
        serialize_extra(&mut map, &self.extra)?;
        map.end()
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.tag_name.is_empty() {
            return Err(ser::Error::custom(AstError::EmptyTagName));
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", "element")?;
        map.serialize_entry("tagName", &self.tag_name)?;
        if let Some(properties) = &self.properties {
            map.serialize_entry("properties", properties)?;
        }
        map.serialize_entry("children", &self.children)?;
        serialize_extra(&mut map, &self.extra)?;
        map.end()
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry("value", &self.value)?;
        serialize_extra(&mut map, &self.extra)?;
        map.end()
    }
}

impl Serialize for Opaque {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind)?;
        if let Some(children) = &self.children {
            map.serialize_entry("children", children)?;
        }
        if let Some(value) = &self.value {
            map.serialize_entry("value", value)?;
        }
        serialize_extra(&mut map, &self.extra)?;
        map.end()
    }
}

fn serialize_extra<M: SerializeMap>(map: &mut M, extra: &Extra) -> Result<(), M::Error> {
    for (key, value) in extra {
        map.serialize_entry(key, value)?;
    }
    Ok(())
}

/// Wire shape shared by every node kind, used for decoding.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,

    #[serde(default)]
    tag_name: Option<String>,

    #[serde(default)]
    properties: Option<Properties>,

    #[serde(default)]
    children: Option<Vec<Node>>,

    #[serde(default)]
    value: Option<String>,

    #[serde(flatten)]
    extra: Extra,
}

impl TryFrom<RawNode> for Node {
    type Error = AstError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "root" => Ok(Node::Root(Root {
                children: raw.children.unwrap_or_default(),
                extra: raw.extra,
            })),
            "element" => {
                let tag_name = raw
                    .tag_name
                    .ok_or(AstError::missing_field("element", "tagName"))?;
                if tag_name.is_empty() {
                    return Err(AstError::EmptyTagName);
                }
                Ok(Node::Element(Element {
                    tag_name,
                    properties: raw.properties,
                    children: raw.children.unwrap_or_default(),
                    extra: raw.extra,
                }))
            }
            "text" => {
                let value = raw.value.ok_or(AstError::missing_field("text", "value"))?;
                Ok(Node::Text(Text {
                    value,
                    extra: raw.extra,
                }))
            }
            _ => Ok(Node::Opaque(Opaque {
                kind: raw.kind,
                value: raw.value,
                children: raw.children,
                extra: raw.extra,
            })),
        }
    }
}

impl TryFrom<RawNode> for Root {
    type Error = AstError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        match Node::try_from(raw)? {
            Node::Root(root) => Ok(root),
            other => Err(AstError::NotRoot(other.kind().to_string())),
        }
    }
}
