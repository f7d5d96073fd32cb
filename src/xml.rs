//! XML node tree with declarative omission rules.
//!
//! Documents are assembled as a tree of [`XmlNode`]s and rendered with the
//! `quick-xml` writer. Whether a node is written is decided here, by its
//! [`Emit`] rule, rather than by conditionals in the code that builds the
//! tree:
//!
//! - [`Emit::Always`] nodes are written even when empty (`<physicalDescription/>`)
//! - [`Emit::IfContent`] nodes are written only when they have non-empty text
//!   or at least one child that is itself written
//!
//! Attributes with empty values are never written.
//!
//! # Examples
//!
//! ```
//! use aspace_mods::xml::{render, XmlNode};
//!
//! let tree = XmlNode::required("language")
//!     .child(XmlNode::element("languageTerm").attr("type", "code").text("eng"))
//!     .child(XmlNode::element("languageTerm").attr("type", "text").text(""));
//!
//! let xml = render(&tree, None, false)?;
//! assert_eq!(xml, "<language><languageTerm type=\"code\">eng</languageTerm></language>\n");
//! # Ok::<(), aspace_mods::ExportError>(())
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{ExportError, Result};

/// When a node is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Always written, as an empty element if need be
    Always,
    /// Written only when it has content
    IfContent,
}

/// An element in a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<XmlNode>,
    emit: Emit,
}

impl XmlNode {
    /// An element written only when it has content.
    pub fn element(name: impl Into<String>) -> Self {
        Self::with_rule(name, Emit::IfContent)
    }

    /// An element that is always written.
    pub fn required(name: impl Into<String>) -> Self {
        Self::with_rule(name, Emit::Always)
    }

    fn with_rule(name: impl Into<String>, emit: Emit) -> Self {
        XmlNode {
            name: name.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            emit,
        }
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Omission rule.
    #[must_use]
    pub fn rule(&self) -> Emit {
        self.emit
    }

    /// Add an attribute; empty values are dropped.
    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.attrs.push((key, value));
        }
        self
    }

    /// Add an attribute when a value is present.
    #[must_use]
    pub fn opt_attr(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// Attribute value, if set.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the text content when present.
    #[must_use]
    pub fn opt_text(self, text: Option<&str>) -> Self {
        match text {
            Some(text) => self.text(text),
            None => self,
        }
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append child elements.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the node has non-empty text or a child that will be written.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.own_text().is_some() || self.children.iter().any(XmlNode::is_emitted)
    }

    /// Whether the renderer writes this node.
    #[must_use]
    pub fn is_emitted(&self) -> bool {
        match self.emit {
            Emit::Always => true,
            Emit::IfContent => self.has_content(),
        }
    }

    fn own_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

/// Render a tree to a UTF-8 string ending in a newline.
///
/// `indent` is the indentation width; `None` writes everything on one line.
///
/// # Errors
///
/// Returns [`ExportError::Xml`] if the writer fails.
pub fn render(root: &XmlNode, indent: Option<usize>, declaration: bool) -> Result<String> {
    let mut writer = match indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };

    if declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_node(&mut writer, root)?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| ExportError::Xml(format!("Rendered XML is not UTF-8: {e}")))?;
    xml.push('\n');
    Ok(xml)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<()> {
    if !node.is_emitted() {
        return Ok(());
    }

    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attrs {
        start.push_attribute((*key, value.as_str()));
    }

    if !node.has_content() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = node.own_text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    Ok(())
}
