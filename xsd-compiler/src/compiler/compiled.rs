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

//! Compiled schema result set.

use crate::compiler::properties::PropertyDesc;
use crate::compiler::simple_type::SimpleTypeVariant;
use crate::compiler::topo::topo_sort;
use crate::xsd::names::XsdName;

/// One generatable complex type.
#[derive(Debug, Clone)]
pub struct ComplexType {
    pub name: XsdName,
    /// Extension base, inherited at the class level.
    pub parent: Option<XsdName>,
    /// Properties in schema order, names unique.
    pub properties: Vec<PropertyDesc>,
    pub doc: Option<String>,
    /// Promoted from a top-level element declaration.
    pub synthetic: bool,
}

impl ComplexType {
    /// Names of other schema types this type depends on: the parent
    /// plus every named property type. Names not resolving to a known
    /// generated type are ignored by the consumer.
    pub fn dependencies(&self) -> impl Iterator<Item = &XsdName> {
        self.parent.iter().chain(
            self.properties
                .iter()
                .filter_map(|p| p.declared_type.named()),
        )
    }
}

/// One generatable simple type.
#[derive(Debug, Clone)]
pub struct SimpleType {
    pub name: XsdName,
    pub variant: SimpleTypeVariant,
    pub doc: Option<String>,
    /// Promoted from an inline declaration.
    pub synthetic: bool,
}

/// The full compiled schema: the generator's only input.
#[derive(Debug, Default)]
pub struct Compiled {
    /// Complex types in dependency order after [`Compiled::sorted`].
    pub complex_types: Vec<ComplexType>,
    /// Simple types in schema order, synthesized ones appended.
    pub simple_types: Vec<SimpleType>,
    /// Non-fatal diagnostics collected across the pipeline.
    pub warnings: Vec<String>,
}

impl Compiled {
    /// Whether a name refers to a known complex type.
    #[must_use]
    pub fn contains_complex(&self, name: &XsdName) -> bool {
        self.complex_types.iter().any(|t| &t.name == name)
    }

    /// Whether a name refers to a known simple type.
    #[must_use]
    pub fn contains_simple(&self, name: &XsdName) -> bool {
        self.simple_types.iter().any(|t| &t.name == name)
    }

    /// Reorder complex types so every type follows its dependencies.
    /// Stable: identical input yields identical output. Cycles are
    /// tolerated; the first-encountered member of a cycle is emitted
    /// before the types that reference it.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        let order = topo_sort(&self.complex_types);
        let mut slots: Vec<Option<ComplexType>> =
            self.complex_types.into_iter().map(Some).collect();
        self.complex_types = order
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();
        self
    }
}
