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

//! Typed binding metadata.
//!
//! Every generated type carries a const [`TypeMeta`] table. Lookups are
//! by property name, so application code introspects the binding
//! without string-keyed maps or schema re-parsing.

/// Metadata of one generated type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMeta {
    /// Schema name of the type, also its XML tag when used as a
    /// document root.
    pub name: &'static str,
    /// Schema name of the extension base type, if any.
    pub parent: Option<&'static str>,
    /// Properties in schema order.
    pub properties: &'static [PropertyMeta],
}

impl TypeMeta {
    /// Property metadata by user-facing property name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&'static PropertyMeta> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Metadata of one property of a generated type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMeta {
    /// User-facing property name. May differ from `xml_name` when
    /// transparent attribute naming strips the attribute marker.
    pub name: &'static str,
    /// Original XML name, authoritative for serialization. Attributes
    /// always keep the `@` marker here.
    pub xml_name: &'static str,
    /// Original schema type. Populated only when the compiler ran with
    /// schema-type retention.
    pub schema_type: Option<&'static str>,
    /// Attribute-vs-element flag. Populated only when the compiler ran
    /// with attribute-flag retention.
    pub is_attribute: Option<bool>,
    /// The property holds repeated occurrences.
    pub is_list: bool,
    /// The schema declares the element nillable.
    pub is_nillable: bool,
}
