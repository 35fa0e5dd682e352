// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! XML document tree.
//!
//! One [`XmlNode`] represents one element: attributes, optional text
//! content and children grouped by tag name in first-seen order. A tag
//! that occurs once stays a bare node; a repeated tag is an ordered
//! list. This is the only XML shape the runtime and the generated code
//! ever operate on.

use crate::error::Error;
use crate::one_or_many::OneOrMany;
use quick_xml::escape::unescape;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Reader;
use quick_xml::Writer;

/// One XML element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    /// Attributes by local name, in document order.
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content, if any.
    pub text: Option<String>,
    /// Children grouped by tag name, in first-seen order.
    pub children: Vec<(String, OneOrMany<XmlNode>)>,
}

impl XmlNode {
    /// Node holding only text content.
    #[must_use]
    pub fn text_node(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Attribute value by local name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value of the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// All occurrences of a child tag.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&OneOrMany<XmlNode>> {
        self.children
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// First occurrence of a child tag.
    #[must_use]
    pub fn first_child(&self, name: &str) -> Option<&XmlNode> {
        self.child(name).and_then(OneOrMany::first)
    }

    /// Iterate every occurrence of a child tag. A single occurrence
    /// yields one item; a missing tag yields none.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlNode> {
        self.child(name).into_iter().flatten()
    }

    /// Text content of the first occurrence of a child tag.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.first_child(name)
            .and_then(|n| n.text.as_deref())
    }

    /// Append a child, coalescing with existing occurrences of the tag.
    pub fn add_child(&mut self, name: impl Into<String>, node: XmlNode) {
        let name = name.into();
        if let Some(pos) = self.children.iter().position(|(k, _)| *k == name) {
            let (key, existing) = self.children.remove(pos);
            self.children.insert(pos, (key, existing.push(node)));
        } else {
            self.children.push((name, OneOrMany::One(node)));
        }
    }

    /// No attributes, no text, no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.text.is_none() && self.children.is_empty()
    }
}

/// Parse an XML document into its root element.
///
/// Returns the root tag name and the root node. Comments, processing
/// instructions and the XML declaration are skipped.
///
/// # Errors
///
/// - `Error::XmlRead` on malformed XML.
/// - `Error::NoRootElement` if the document has no element at all.
pub fn parse_document(xml: &str) -> Result<(String, XmlNode), Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut stack: Vec<(String, XmlNode)> = Vec::new();
    let mut root: Option<(String, XmlNode)> = None;
    loop {
        match reader.read_event().map_err(Error::XmlRead)? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let (name, node) = element_from_start(&start)?;
                attach(&mut stack, &mut root, name, node);
            }
            Event::Text(t) => {
                let raw = String::from_utf8_lossy(t.as_ref()).into_owned();
                let text = unescape(&raw)
                    .map_err(|e| Error::XmlRead(e.into()))?
                    .into_owned();
                append_text(&mut stack, &text);
            }
            Event::CData(t) => {
                let text = String::from_utf8_lossy(t.as_ref()).into_owned();
                append_text(&mut stack, &text);
            }
            Event::End(_) => {
                if let Some((name, node)) = stack.pop() {
                    attach(&mut stack, &mut root, name, node);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    root.ok_or(Error::NoRootElement)
}

/// Serialize a node as an XML document with the given root tag.
///
/// # Errors
///
/// Returns `Error::XmlWrite` if event serialization fails.
pub fn write_document(root_name: &str, node: &XmlNode) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, root_name, node)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<(String, XmlNode), Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut node = XmlNode::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::XmlRead(e.into()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(attr.value.as_ref()).into_owned();
        let value = unescape(&raw)
            .map_err(|e| Error::XmlRead(e.into()))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok((name, node))
}

fn attach(
    stack: &mut Vec<(String, XmlNode)>,
    root: &mut Option<(String, XmlNode)>,
    name: String,
    node: XmlNode,
) {
    if let Some((_, parent)) = stack.last_mut() {
        parent.add_child(name, node);
    } else if root.is_none() {
        *root = Some((name, node));
    }
}

fn append_text(stack: &mut Vec<(String, XmlNode)>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some((_, node)) = stack.last_mut() {
        match &mut node.text {
            Some(existing) => existing.push_str(text),
            None => node.text = Some(text.to_string()),
        }
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, node: &XmlNode) -> Result<(), Error> {
    let mut start = BytesStart::new(name);
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if node.text.is_none() && node.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::XmlWrite(e.into()));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::XmlWrite(e.into()))?;
    if let Some(text) = &node.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| Error::XmlWrite(e.into()))?;
    }
    for (child_name, occurrences) in &node.children {
        for child in occurrences.iter() {
            write_element(writer, child_name, child)?;
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| Error::XmlWrite(e.into()))
}

#[cfg(test)]
mod test {
    use super::parse_document;
    use super::write_document;
    use super::XmlNode;
    use crate::one_or_many::OneOrMany;

    #[test]
    fn parse_groups_repeated_children() {
        let (name, node) = parse_document(
            r#"<Order id="7">
                 <Item>a</Item>
                 <Item>b</Item>
                 <Note>first</Note>
               </Order>"#,
        )
        .unwrap();
        assert_eq!(name, "Order");
        assert_eq!(node.attr("id"), Some("7"));
        assert_eq!(node.child("Item").unwrap().len(), 2);
        assert!(matches!(node.child("Note"), Some(OneOrMany::One(_))));
        assert_eq!(node.child_text("Note"), Some("first"));
    }

    #[test]
    fn parse_keeps_first_seen_child_order() {
        let (_, node) = parse_document("<R><A/><B/><A/></R>").unwrap();
        let names: Vec<&str> = node.children.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(node.child("A").unwrap().len(), 2);
    }

    #[test]
    fn write_then_parse_round_trips() {
        let mut node = XmlNode::default();
        node.set_attr("Age", "42");
        node.add_child("Name", XmlNode::text_node("Ada"));
        node.add_child("Tag", XmlNode::text_node("x"));
        node.add_child("Tag", XmlNode::text_node("y"));

        let xml = write_document("Person", &node).unwrap();
        let (name, parsed) = parse_document(&xml).unwrap();
        assert_eq!(name, "Person");
        assert_eq!(parsed, node);
    }

    #[test]
    fn attribute_values_unescape() {
        let (_, node) = parse_document(r#"<N label="a &amp; b">x &lt; y</N>"#).unwrap();
        assert_eq!(node.attr("label"), Some("a & b"));
        assert_eq!(node.text.as_deref(), Some("x < y"));
    }
}
