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

//! Raw parse-tree shapes.
//!
//! Upstream XML parsers deliver one of two tree shapes. Both are
//! modeled explicitly here as a tagged enum, so the normalizer
//! dispatches on the tag instead of probing nodes for marker keys.

/// A raw node in either supported shape.
#[derive(Debug, Clone)]
pub enum RawNode {
    /// Flat-object shape: attributes merged under `@`-prefixed keys,
    /// text under `#text`, children as direct entries.
    Flat(FlatNode),
    /// Explicit-children shape: attributes, text and an ordered child
    /// record list kept separately. Preserves document order across
    /// differently named siblings.
    Tree(TreeNode),
}

/// Flat-object raw shape.
#[derive(Debug, Clone, Default)]
pub struct FlatNode {
    /// Entries in source order. `@`-prefixed keys are attributes,
    /// `#text` is text content, everything else is a child.
    pub entries: Vec<(String, FlatValue)>,
}

/// Value of one flat-object entry.
#[derive(Debug, Clone)]
pub enum FlatValue {
    /// Scalar leaf: an attribute value, text content, or a text-only
    /// child element.
    Text(String),
    /// Single child element.
    Node(FlatNode),
    /// Repeated child element.
    List(Vec<FlatNode>),
}

impl FlatNode {
    /// Append an entry, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: FlatValue) -> Self {
        self.entries.push((key.into(), value));
        self
    }
}

/// Explicit-children raw shape.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    /// Attributes by local name, in document order.
    pub attributes: Vec<(String, String)>,
    /// Text content, if any.
    pub text: Option<String>,
    /// Children in document order, repeated names not grouped.
    pub children: Vec<ChildRecord>,
}

/// One ordered child of a [`TreeNode`].
#[derive(Debug, Clone)]
pub struct ChildRecord {
    pub name: String,
    pub node: TreeNode,
}

impl TreeNode {
    /// Append an attribute, builder style.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set text content, builder style.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child, builder style.
    #[must_use]
    pub fn with_child(mut self, name: impl Into<String>, node: TreeNode) -> Self {
        self.children.push(ChildRecord {
            name: name.into(),
            node,
        });
        self
    }
}
