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

//! Compiler of one schema into the generatable type model.

/// Compiled schema result set.
pub mod compiled;

/// Error diagnostics.
pub mod error;

/// Property extraction from complex-type bodies.
pub mod properties;

/// Simple-type analysis.
pub mod simple_type;

/// Dependency ordering of compiled types.
pub mod topo;

/// Type declaration extraction.
pub mod types;

use crate::xsd::node::normalize;
use crate::xsd::raw::RawNode;
use crate::xsd::reader::read_document;
use crate::xsd::reader::ReadError;
use crate::xsd::tags;
use crate::xsd::XsdNode;
use properties::PropertyExtractor;

/// Reexport `Compiled` to the level of the compiler.
pub type Compiled = compiled::Compiled;
/// Reexport `ComplexType` to the level of the compiler.
pub type ComplexType = compiled::ComplexType;
/// Reexport `SimpleType` to the level of the compiler.
pub type SimpleType = compiled::SimpleType;
/// Reexport `Error` to the level of the compiler.
pub type Error = error::Error;
/// Reexport `PropertyDesc` to the level of the compiler.
pub type PropertyDesc = properties::PropertyDesc;
/// Reexport `DeclaredType` to the level of the compiler.
pub type DeclaredType = properties::DeclaredType;
/// Reexport `SimpleTypeVariant` to the level of the compiler.
pub type SimpleTypeVariant = simple_type::SimpleTypeVariant;
/// Reexport `TypeDecl` to the level of the compiler.
pub type TypeDecl = types::TypeDecl;

/// Compiler configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the synthesized text-value property of simple-content
    /// types.
    pub text_property: String,
    /// Strip the attribute marker from user-facing property names.
    /// `xml_name` keeps the marker regardless.
    pub transparent_attributes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_property: "value".to_string(),
            transparent_attributes: false,
        }
    }
}

/// One schema document, normalized and ready for compilation.
pub struct SchemaSet {
    root_name: String,
    document: XsdNode,
}

impl SchemaSet {
    /// Parse schema text.
    ///
    /// # Errors
    ///
    /// Returns a read error on malformed XML or an element-free
    /// document.
    pub fn parse(xml: &str) -> Result<Self, ReadError> {
        let doc = read_document(xml)?;
        Ok(Self {
            root_name: doc.root_name,
            document: normalize(RawNode::Tree(doc.root)),
        })
    }

    /// Build from an already parsed raw tree of either shape. Entry
    /// point for embedders that bring their own XML parser.
    #[must_use]
    pub fn from_raw(root_name: impl Into<String>, raw: RawNode) -> Self {
        Self {
            root_name: root_name.into(),
            document: normalize(raw),
        }
    }

    /// Compile the schema into the generatable type model: extract
    /// type declarations, derive property lists, analyze simple types
    /// and order complex types by their dependencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema root cannot be located or a
    /// top-level declaration name is unusable.
    pub fn compile(&self, config: &Config) -> Result<Compiled, Error> {
        let extracted = types::extract_types(&self.root_name, &self.document)?;
        let extractor = PropertyExtractor::new(
            &extracted.groups,
            &extracted.attribute_groups,
            config,
        );
        let mut warnings = extracted.warnings;
        let complex_types = extracted
            .complex
            .iter()
            .map(|decl| {
                let extraction = extractor.extract(&decl.node);
                warnings.extend(
                    extraction
                        .warnings
                        .iter()
                        .map(|w| format!("{}: {w}", decl.name)),
                );
                ComplexType {
                    name: decl.name.clone(),
                    parent: extraction.parent,
                    properties: extraction.properties,
                    doc: decl.doc.clone(),
                    synthetic: decl.synthetic,
                }
            })
            .collect();
        let simple_types = extracted
            .simple
            .iter()
            .map(|decl| SimpleType {
                name: decl.name.clone(),
                variant: simple_type::analyze(&decl.node),
                doc: decl.doc.clone(),
                synthetic: decl.synthetic,
            })
            .collect();
        Ok(Compiled {
            complex_types,
            simple_types,
            warnings,
        }
        .sorted())
    }
}

/// Text of the first `xs:documentation` under a declaration's
/// `xs:annotation`, used for generated doc comments.
pub(crate) fn doc_of(node: &XsdNode) -> Option<String> {
    node.first_child(tags::ANNOTATION)
        .and_then(|a| a.first_child(tags::DOCUMENTATION))
        .and_then(|d| d.text.as_ref())
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn schema_compiles_end_to_end() {
        let schema = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="Library">
               <xs:sequence>
                 <xs:element name="Book" type="Book" maxOccurs="unbounded"/>
               </xs:sequence>
               <xs:attribute name="Name" type="xs:string"/>
             </xs:complexType>
             <xs:complexType name="Book">
               <xs:sequence>
                 <xs:element name="Title" type="xs:string"/>
               </xs:sequence>
             </xs:complexType>
             <xs:simpleType name="Status">
               <xs:restriction base="xs:string">
                 <xs:enumeration value="Open"/>
                 <xs:enumeration value="Closed"/>
               </xs:restriction>
             </xs:simpleType>
           </xs:schema>"#;
        let set = SchemaSet::parse(schema).unwrap();
        let compiled = set.compile(&Config::default()).unwrap();
        assert_eq!(compiled.complex_types.len(), 2);
        assert_eq!(compiled.simple_types.len(), 1);
        // Book is a dependency of Library and must be emitted first.
        let names: Vec<&str> = compiled
            .complex_types
            .iter()
            .map(|t| t.name.as_ref())
            .collect();
        assert_eq!(names, ["Book", "Library"]);
        let library = compiled.complex_types.last().unwrap();
        assert!(library.properties[0].is_list);
        assert!(library.properties[1].is_attribute);
    }

    #[test]
    fn missing_schema_root_is_fatal() {
        let set = SchemaSet::parse("<wsdl:definitions/>").unwrap();
        assert!(matches!(
            set.compile(&Config::default()),
            Err(Error::SchemaRootNotFound)
        ));
    }

    #[test]
    fn every_named_type_yields_exactly_one_declaration() {
        let schema = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="A"/>
             <xs:complexType name="B"/>
             <xs:simpleType name="S">
               <xs:restriction base="xs:string"/>
             </xs:simpleType>
             <xs:element name="Root">
               <xs:complexType>
                 <xs:sequence>
                   <xs:element name="A" type="A"/>
                 </xs:sequence>
               </xs:complexType>
             </xs:element>
           </xs:schema>"#;
        let compiled = SchemaSet::parse(schema)
            .unwrap()
            .compile(&Config::default())
            .unwrap();
        let mut names: Vec<&str> = compiled
            .complex_types
            .iter()
            .map(|t| t.name.as_ref())
            .collect();
        names.sort_unstable();
        assert_eq!(names, ["A", "B", "Root"]);
        assert_eq!(compiled.simple_types.len(), 1);
    }
}
