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

//! Declared-type resolution.
//!
//! Lowers the dangling type references carried by property
//! descriptors into the concrete shapes the Rust generator emits.
//! This is the point where an unresolved reference finally surfaces,
//! as a warning, never as a failure.

use crate::compiler::Compiled;
use crate::compiler::DeclaredType;
use crate::compiler::SimpleTypeVariant;
use crate::xsd::names::XsdName;
use std::collections::HashMap;
use std::collections::HashSet;

/// Leaf value representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Text,
    Int,
    Float,
    Bool,
}

impl Scalar {
    /// Map a built-in schema type's local name. Unrecognized built-ins
    /// stay text.
    #[must_use]
    pub fn of_primitive(local: &str, string_only: bool) -> Self {
        if string_only {
            return Self::Text;
        }
        match local {
            "boolean" => Self::Bool,
            "int" | "integer" | "long" | "short" | "byte" | "unsignedInt" | "unsignedLong"
            | "unsignedShort" | "unsignedByte" | "nonNegativeInteger" | "positiveInteger"
            | "nonPositiveInteger" | "negativeInteger" => Self::Int,
            "decimal" | "double" | "float" => Self::Float,
            _ => Self::Text,
        }
    }
}

/// A property type after resolution against the compiled set.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedType {
    /// Built-in leaf value.
    Scalar(Scalar),
    /// Named non-enumeration simple type; generated as an alias of
    /// its scalar representation.
    SimpleAlias { name: XsdName, scalar: Scalar },
    /// Enumeration simple type; generated as a Rust enum.
    Enumeration(XsdName),
    /// Another generated complex type.
    Complex(XsdName),
    /// No resolution: the raw element node is kept. `unresolved`
    /// carries the dangling name when there was one, for the warning
    /// marker.
    Node { unresolved: Option<XsdName> },
}

/// Index of the compiled type set consulted during generation.
#[derive(Debug)]
pub struct TypeTable {
    complex: HashSet<XsdName>,
    simple: HashMap<XsdName, SimpleKind>,
    string_only: bool,
}

#[derive(Debug, Clone, Copy)]
enum SimpleKind {
    Enumeration,
    Scalar(Scalar),
}

impl TypeTable {
    /// Build the index of every generatable type.
    #[must_use]
    pub fn build(compiled: &Compiled, string_only: bool) -> Self {
        Self {
            complex: compiled.complex_types.iter().map(|t| t.name.clone()).collect(),
            simple: compiled
                .simple_types
                .iter()
                .map(|t| {
                    let kind = match &t.variant {
                        SimpleTypeVariant::Enumeration { .. } => SimpleKind::Enumeration,
                        SimpleTypeVariant::Alias { base } => {
                            SimpleKind::Scalar(base_scalar(base, string_only))
                        }
                        // Lists and unions collapse to their lexical
                        // text form.
                        SimpleTypeVariant::List { .. }
                        | SimpleTypeVariant::Union { .. }
                        | SimpleTypeVariant::Opaque => SimpleKind::Scalar(Scalar::Text),
                    };
                    (t.name.clone(), kind)
                })
                .collect(),
            string_only,
        }
    }

    /// Scalar representation of a named simple type, used when
    /// emitting its alias.
    #[must_use]
    pub fn alias_scalar(&self, name: &XsdName) -> Scalar {
        match self.simple.get(name) {
            Some(SimpleKind::Scalar(scalar)) => *scalar,
            _ => Scalar::Text,
        }
    }

    /// Resolve one declared type.
    #[must_use]
    pub fn resolve(&self, declared: &DeclaredType) -> ResolvedType {
        match declared {
            DeclaredType::Primitive(local) => {
                ResolvedType::Scalar(Scalar::of_primitive(local, self.string_only))
            }
            DeclaredType::Named(name) => match self.simple.get(name) {
                Some(SimpleKind::Enumeration) => ResolvedType::Enumeration(name.clone()),
                Some(SimpleKind::Scalar(scalar)) => ResolvedType::SimpleAlias {
                    name: name.clone(),
                    scalar: *scalar,
                },
                None => {
                    if self.complex.contains(name) {
                        ResolvedType::Complex(name.clone())
                    } else {
                        ResolvedType::Node {
                            unresolved: Some(name.clone()),
                        }
                    }
                }
            },
            DeclaredType::Any | DeclaredType::Unknown => {
                ResolvedType::Node { unresolved: None }
            }
        }
    }

    /// Whether a parent name resolves to a generated complex type.
    #[must_use]
    pub fn parent_known(&self, name: &XsdName) -> bool {
        self.complex.contains(name)
    }
}

fn base_scalar(base: &DeclaredType, string_only: bool) -> Scalar {
    match base {
        DeclaredType::Primitive(local) => Scalar::of_primitive(local, string_only),
        _ => Scalar::Text,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compiler::Config;
    use crate::compiler::SchemaSet;

    fn table(schema: &str, string_only: bool) -> TypeTable {
        let compiled = SchemaSet::parse(schema)
            .unwrap()
            .compile(&Config::default())
            .unwrap();
        TypeTable::build(&compiled, string_only)
    }

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
         <xs:complexType name="Order"/>
         <xs:simpleType name="Status">
           <xs:restriction base="xs:string">
             <xs:enumeration value="Open"/>
           </xs:restriction>
         </xs:simpleType>
         <xs:simpleType name="Count">
           <xs:restriction base="xs:int"/>
         </xs:simpleType>
       </xs:schema>"#;

    #[test]
    fn resolution_covers_every_reference_kind() {
        let table = table(SCHEMA, false);
        assert_eq!(
            table.resolve(&DeclaredType::Primitive("int".to_string())),
            ResolvedType::Scalar(Scalar::Int)
        );
        assert_eq!(
            table.resolve(&DeclaredType::Named("Order".parse().unwrap())),
            ResolvedType::Complex("Order".parse().unwrap())
        );
        assert_eq!(
            table.resolve(&DeclaredType::Named("Status".parse().unwrap())),
            ResolvedType::Enumeration("Status".parse().unwrap())
        );
        assert_eq!(
            table.resolve(&DeclaredType::Named("Count".parse().unwrap())),
            ResolvedType::SimpleAlias {
                name: "Count".parse().unwrap(),
                scalar: Scalar::Int,
            }
        );
        assert_eq!(
            table.resolve(&DeclaredType::Named("External".parse().unwrap())),
            ResolvedType::Node {
                unresolved: Some("External".parse().unwrap())
            }
        );
        assert_eq!(
            table.resolve(&DeclaredType::Unknown),
            ResolvedType::Node { unresolved: None }
        );
    }

    #[test]
    fn string_only_suppresses_coercion() {
        let table = table(SCHEMA, true);
        assert_eq!(
            table.resolve(&DeclaredType::Primitive("int".to_string())),
            ResolvedType::Scalar(Scalar::Text)
        );
        assert_eq!(
            table.resolve(&DeclaredType::Named("Count".parse().unwrap())),
            ResolvedType::SimpleAlias {
                name: "Count".parse().unwrap(),
                scalar: Scalar::Text,
            }
        );
    }
}
