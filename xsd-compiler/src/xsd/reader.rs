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

//! Schema reader.
//!
//! Reads XSD text with the quick-xml event API into the ordered
//! explicit-children raw shape. The event API is used instead of the
//! serde path because content models depend on document order across
//! repeated tags, which serde maps cannot preserve.

use crate::xsd::raw::ChildRecord;
use crate::xsd::raw::TreeNode;
use quick_xml::escape::unescape;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Error as XmlError;
use quick_xml::Reader;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// A parsed schema document.
#[derive(Debug)]
pub struct Document {
    /// Tag name of the document root element.
    pub root_name: String,
    /// Root element in raw ordered shape.
    pub root: TreeNode,
}

/// Schema reading errors.
#[derive(Debug)]
pub enum ReadError {
    /// Malformed XML.
    Xml(XmlError),
    /// The document has no root element.
    NoRootElement,
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Xml(err) => write!(f, "malformed XML: {err}"),
            Self::NoRootElement => "document contains no root element".fmt(f),
        }
    }
}

impl StdError for ReadError {}

/// Read an XML document into the ordered raw tree.
///
/// # Errors
///
/// - `ReadError::Xml` on malformed XML.
/// - `ReadError::NoRootElement` when no element is found at all.
pub fn read_document(xml: &str) -> Result<Document, ReadError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut stack: Vec<(String, TreeNode)> = Vec::new();
    let mut root: Option<(String, TreeNode)> = None;
    loop {
        match reader.read_event().map_err(ReadError::Xml)? {
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
                    .map_err(|e| ReadError::Xml(e.into()))?
                    .into_owned();
                if !text.is_empty() {
                    if let Some((_, node)) = stack.last_mut() {
                        match &mut node.text {
                            Some(existing) => existing.push_str(&text),
                            None => node.text = Some(text),
                        }
                    }
                }
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
    root.map(|(root_name, root)| Document { root_name, root })
        .ok_or(ReadError::NoRootElement)
}

fn element_from_start(start: &BytesStart<'_>) -> Result<(String, TreeNode), ReadError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut node = TreeNode::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ReadError::Xml(e.into()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(attr.value.as_ref()).into_owned();
        let value = unescape(&raw)
            .map_err(|e| ReadError::Xml(e.into()))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok((name, node))
}

fn attach(
    stack: &mut Vec<(String, TreeNode)>,
    root: &mut Option<(String, TreeNode)>,
    name: String,
    node: TreeNode,
) {
    if let Some((_, parent)) = stack.last_mut() {
        parent.children.push(ChildRecord { name, node });
    } else if root.is_none() {
        *root = Some((name, node));
    }
}
