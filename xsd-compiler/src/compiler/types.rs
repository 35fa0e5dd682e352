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

//! Schema type extraction.
//!
//! Collects every named complex and simple type declaration of the
//! schema, promotes top-level elements with inline complex bodies into
//! synthetic complex types, and promotes inline simple types nested in
//! element/attribute declarations into synthetic named simple types.
//! Promotion never mutates the input tree; owning declarations are
//! rebuilt with a type reference in place of the inline body.

use crate::compiler::doc_of;
use crate::compiler::error::Error;
use crate::xsd::names::XsdName;
use crate::xsd::tags;
use crate::xsd::XsdNode;
use std::collections::HashMap;

/// Kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Complex,
    Simple,
}

/// One named type declaration extracted from the schema.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: XsdName,
    pub kind: TypeKind,
    /// Declaration body in canonical shape.
    pub node: XsdNode,
    /// Promoted from an inline declaration rather than declared
    /// top-level under its own name.
    pub synthetic: bool,
    pub doc: Option<String>,
}

/// Extraction result: ordered type declarations plus the named model
/// group and attribute group bodies referenced during property
/// extraction.
#[derive(Debug, Default)]
pub struct Extracted {
    pub complex: Vec<TypeDecl>,
    pub simple: Vec<TypeDecl>,
    pub groups: HashMap<XsdName, XsdNode>,
    pub attribute_groups: HashMap<XsdName, XsdNode>,
    pub warnings: Vec<String>,
}

/// Extract all type declarations of a schema document.
///
/// # Errors
///
/// - `Error::SchemaRootNotFound` if neither the document root nor a
///   direct child is the `xs:schema` element.
/// - `Error::InvalidTypeName` if a declaration name cannot be used as
///   a type name.
pub fn extract_types(root_name: &str, document: &XsdNode) -> Result<Extracted, Error> {
    let schema = locate_schema_root(root_name, document)?;
    let mut out = Extracted::default();
    // Synthesized inline simple types of this run. Scoped to this call
    // so repeated invocations never observe each other's state.
    let mut synthesized: Vec<TypeDecl> = Vec::new();

    for node in schema.children_named(tags::GROUP) {
        collect_group(node, &mut out.groups, &mut out.warnings, "group");
    }
    for node in schema.children_named(tags::ATTRIBUTE_GROUP) {
        collect_group(
            node,
            &mut out.attribute_groups,
            &mut out.warnings,
            "attribute group",
        );
    }

    for node in schema.children_named(tags::COMPLEX_TYPE) {
        let name = match declared_name(node) {
            Some(name) => name?,
            None => {
                out.warnings
                    .push("skipped unnamed top-level complex type".to_string());
                continue;
            }
        };
        let body = promote_inline_simple_types(&name, node, &mut synthesized);
        out.complex.push(TypeDecl {
            doc: doc_of(node),
            name,
            kind: TypeKind::Complex,
            node: body,
            synthetic: false,
        });
    }

    // Top-level elements are the schema's entry points; an inline
    // complex body makes the element itself a generatable type.
    for element in schema.children_named(tags::ELEMENT) {
        if element.attr("type").is_some() {
            continue;
        }
        let body = match element.first_child(tags::COMPLEX_TYPE) {
            Some(body) => body,
            None => continue,
        };
        let name = match declared_name(element) {
            Some(name) => name?,
            None => {
                out.warnings
                    .push("skipped unnamed top-level element".to_string());
                continue;
            }
        };
        let body = promote_inline_simple_types(&name, body, &mut synthesized);
        out.complex.push(TypeDecl {
            doc: doc_of(element),
            name,
            kind: TypeKind::Complex,
            node: body,
            synthetic: true,
        });
    }

    for node in schema.children_named(tags::SIMPLE_TYPE) {
        let name = match declared_name(node) {
            Some(name) => name?,
            None => {
                out.warnings
                    .push("skipped unnamed top-level simple type".to_string());
                continue;
            }
        };
        out.simple.push(TypeDecl {
            doc: doc_of(node),
            name,
            kind: TypeKind::Simple,
            node: node.clone(),
            synthetic: false,
        });
    }

    out.simple.append(&mut synthesized);
    Ok(out)
}

fn locate_schema_root<'a>(
    root_name: &str,
    document: &'a XsdNode,
) -> Result<&'a XsdNode, Error> {
    if root_name == tags::SCHEMA {
        Some(document)
    } else {
        document.first_child(tags::SCHEMA)
    }
    .ok_or(Error::SchemaRootNotFound)
}

fn declared_name(node: &XsdNode) -> Option<Result<XsdName, Error>> {
    node.attr("name").map(|raw| {
        raw.parse()
            .map_err(|_| Error::InvalidTypeName(raw.to_string()))
    })
}

fn collect_group(
    node: &XsdNode,
    map: &mut HashMap<XsdName, XsdNode>,
    warnings: &mut Vec<String>,
    kind: &str,
) {
    match node.attr("name").and_then(|raw| raw.parse().ok()) {
        Some(name) => {
            map.insert(name, node.clone());
        }
        None => warnings.push(format!("skipped unnamed top-level {kind}")),
    }
}

/// Rebuild a complex-type body with every inline simple type replaced
/// by a reference to a synthesized named simple type. The synthesized
/// declarations are pushed onto `acc`.
fn promote_inline_simple_types(
    owner: &XsdName,
    node: &XsdNode,
    acc: &mut Vec<TypeDecl>,
) -> XsdNode {
    let mut out = XsdNode {
        attributes: node.attributes.clone(),
        text: node.text.clone(),
        children: Vec::new(),
    };
    for (tag, occurrences) in &node.children {
        for child in occurrences.iter() {
            let rewritten = if is_inline_simple_owner(tag, child) {
                promote_declaration(owner, child, acc)
            } else {
                promote_inline_simple_types(owner, child, acc)
            };
            out.add_child(tag.clone(), rewritten);
        }
    }
    out
}

fn is_inline_simple_owner(tag: &str, node: &XsdNode) -> bool {
    (tag == tags::ELEMENT || tag == tags::ATTRIBUTE)
        && node.attr("type").is_none()
        && node.first_child(tags::SIMPLE_TYPE).is_some()
}

fn promote_declaration(owner: &XsdName, decl: &XsdNode, acc: &mut Vec<TypeDecl>) -> XsdNode {
    let property: XsdName = match decl.attr("name").and_then(|raw| raw.parse().ok()) {
        Some(name) => name,
        // An unnamed declaration cannot name its promoted type; keep
        // the inline body as found.
        None => return decl.clone(),
    };
    let name = XsdName::synthetic(owner, &property);
    let body = decl
        .first_child(tags::SIMPLE_TYPE)
        .cloned()
        .unwrap_or_default();
    acc.push(TypeDecl {
        doc: doc_of(&body),
        name: name.clone(),
        kind: TypeKind::Simple,
        node: body,
        synthetic: true,
    });
    let mut out = XsdNode {
        attributes: decl.attributes.clone(),
        text: decl.text.clone(),
        children: decl
            .children
            .iter()
            .filter(|(tag, _)| tag != tags::SIMPLE_TYPE)
            .cloned()
            .collect(),
    };
    out.set_attr("type", name.to_string());
    out
}
