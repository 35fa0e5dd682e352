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

//! The deserialize/serialize contract of generated types.

use crate::error::Error;
use crate::meta::TypeMeta;
use crate::node::parse_document;
use crate::node::write_document;
use crate::node::XmlNode;

/// Contract every generated type satisfies.
///
/// Construction rules per property: primitive values pass through
/// coercion helpers unchanged; a single nested property constructs the
/// dependent type only when source data is present; a list property
/// normalizes one-or-many source occurrences to a `Vec` and constructs
/// one instance per entry. `fill_node` inverts this exactly.
pub trait XmlBind: Sized {
    /// Binding metadata of the type.
    const META: TypeMeta;

    /// Construct from an already parsed element.
    fn from_node(node: &XmlNode) -> Self;

    /// Serialize into an element.
    fn fill_node(&self, node: &mut XmlNode);

    /// Parse an XML document into an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read.
    fn from_xml(xml: &str) -> Result<Self, Error> {
        let (_, node) = parse_document(xml)?;
        Ok(Self::from_node(&node))
    }

    /// Serialize into an element tree.
    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::default();
        self.fill_node(&mut node);
        node
    }

    /// Serialize as an XML document rooted at the type's XML name.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn to_xml(&self) -> Result<String, Error> {
        write_document(Self::META.name, &self.to_node())
    }
}

/// Record of property mutations, used by generated change-notifying
/// setters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeLog {
    entries: Vec<&'static str>,
}

impl ChangeLog {
    /// Record a mutation of the named property.
    pub fn record(&mut self, property: &'static str) {
        self.entries.push(property);
    }

    /// Recorded mutations in order.
    #[must_use]
    pub fn entries(&self) -> &[&'static str] {
        &self.entries
    }

    /// No mutations recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget recorded mutations.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Coerce schema integer text.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Coerce schema decimal/float text.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Coerce schema boolean text. Accepts the XSD lexical forms.
#[must_use]
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// XSD lexical form of a boolean.
#[must_use]
pub const fn fmt_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Children of `node` whose tags are not claimed by any declared
/// property, in first-seen order. Backs generated wildcard properties.
#[must_use]
pub fn unclaimed_children(node: &XmlNode, claimed: &[&str]) -> Vec<(String, XmlNode)> {
    node.children
        .iter()
        .filter(|(name, _)| !claimed.contains(&name.as_str()))
        .flat_map(|(name, occurrences)| {
            occurrences.iter().map(move |n| (name.clone(), n.clone()))
        })
        .collect()
}

/// Attributes of `node` not claimed by any declared property. Backs
/// generated attribute-wildcard properties.
#[must_use]
pub fn unclaimed_attributes(node: &XmlNode, claimed: &[&str]) -> Vec<(String, String)> {
    node.attributes
        .iter()
        .filter(|(name, _)| !claimed.contains(&name.as_str()))
        .cloned()
        .collect()
}
