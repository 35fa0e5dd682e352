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

//! Schema parsing and normalization.
//!
//! Raw parse trees arrive in one of two shapes (`raw` module) and are
//! normalized exactly once, at this boundary, into the canonical node
//! shape (`node` module). Downstream code never inspects the source
//! shape again.

/// Validated schema identifiers.
pub mod names;

/// Canonical node shape and the normalizer.
pub mod node;

/// The two supported raw parse-tree shapes.
pub mod raw;

/// quick-xml based schema reader.
pub mod reader;

/// Marker prefix distinguishing attribute names from element names.
pub const ATTR_MARKER: &str = "@";

/// Reserved key for element text content in the flat raw shape, also
/// the `xml_name` of synthesized text-value properties.
pub const TEXT_KEY: &str = "#text";

/// Fixed prefix of XML Schema elements and built-in types. The prefix
/// is matched literally, not namespace-resolved.
pub const XS_PREFIX: &str = "xs";

/// Reexport of the canonical node to the module level.
pub type XsdNode = node::XsdNode;

/// Qualified schema tag names matched during extraction.
pub mod tags {
    pub const SCHEMA: &str = "xs:schema";
    pub const COMPLEX_TYPE: &str = "xs:complexType";
    pub const SIMPLE_TYPE: &str = "xs:simpleType";
    pub const ELEMENT: &str = "xs:element";
    pub const ATTRIBUTE: &str = "xs:attribute";
    pub const GROUP: &str = "xs:group";
    pub const ATTRIBUTE_GROUP: &str = "xs:attributeGroup";
    pub const SEQUENCE: &str = "xs:sequence";
    pub const CHOICE: &str = "xs:choice";
    pub const ALL: &str = "xs:all";
    pub const ANY: &str = "xs:any";
    pub const ANY_ATTRIBUTE: &str = "xs:anyAttribute";
    pub const SIMPLE_CONTENT: &str = "xs:simpleContent";
    pub const COMPLEX_CONTENT: &str = "xs:complexContent";
    pub const EXTENSION: &str = "xs:extension";
    pub const RESTRICTION: &str = "xs:restriction";
    pub const ENUMERATION: &str = "xs:enumeration";
    pub const LIST: &str = "xs:list";
    pub const UNION: &str = "xs:union";
    pub const ANNOTATION: &str = "xs:annotation";
    pub const DOCUMENTATION: &str = "xs:documentation";
}
