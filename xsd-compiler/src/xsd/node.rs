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

//! Node normalizer.
//!
//! Converts either raw shape into the canonical node: attributes by
//! local name, optional text, children grouped by tag in first-seen
//! order with a single occurrence kept bare. All code past this point
//! operates on the canonical shape only.

use crate::xsd::raw::FlatNode;
use crate::xsd::raw::FlatValue;
use crate::xsd::raw::RawNode;
use crate::xsd::raw::TreeNode;
use crate::xsd::ATTR_MARKER;
use crate::xsd::TEXT_KEY;
use xsdbind_core::XmlNode;

/// The Canonical Schema Node. Shares the runtime's element shape: the
/// compiler reads schemas through the same structure generated code
/// reads documents through.
pub type XsdNode = XmlNode;

/// Normalize a raw node of either shape into the canonical shape.
///
/// Malformed input yields a partial or empty canonical node; there are
/// no error conditions at this stage.
#[must_use]
pub fn normalize(raw: RawNode) -> XsdNode {
    match raw {
        RawNode::Flat(node) => normalize_flat(node),
        RawNode::Tree(node) => normalize_tree(node),
    }
}

fn normalize_flat(raw: FlatNode) -> XsdNode {
    let mut node = XsdNode::default();
    for (key, value) in raw.entries {
        if let Some(attr_name) = key.strip_prefix(ATTR_MARKER) {
            if let FlatValue::Text(text) = value {
                node.attributes.push((attr_name.to_string(), text));
            }
        } else if key == TEXT_KEY {
            if let FlatValue::Text(text) = value {
                node.text = Some(text);
            }
        } else {
            match value {
                // Non-object leaves pass through as text-only children.
                FlatValue::Text(text) => node.add_child(key, XsdNode::text_node(text)),
                FlatValue::Node(child) => node.add_child(key, normalize_flat(child)),
                FlatValue::List(children) => {
                    for child in children {
                        node.add_child(key.clone(), normalize_flat(child));
                    }
                }
            }
        }
    }
    node
}

fn normalize_tree(raw: TreeNode) -> XsdNode {
    let mut node = XsdNode {
        attributes: raw.attributes,
        text: raw.text,
        children: Vec::new(),
    };
    for child in raw.children {
        node.add_child(child.name, normalize_tree(child.node));
    }
    node
}
