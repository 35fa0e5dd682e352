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

//! Simple-type analysis.

use crate::compiler::properties::DeclaredType;
use crate::xsd::tags;
use crate::xsd::XsdNode;

/// Value space of a simple type.
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleTypeVariant {
    /// Restriction enumerating its accepted values, in declaration
    /// order.
    Enumeration {
        base: DeclaredType,
        values: Vec<String>,
    },
    /// Restriction without an enumeration: an alias of its base.
    Alias { base: DeclaredType },
    /// Whitespace-separated list of an item type.
    List { item: DeclaredType },
    /// Union of member types.
    Union { members: Vec<DeclaredType> },
    /// No recognizable derivation; treated as plain text.
    Opaque,
}

/// Classify a simple-type declaration body.
#[must_use]
pub fn analyze(node: &XsdNode) -> SimpleTypeVariant {
    if let Some(restriction) = node.first_child(tags::RESTRICTION) {
        let base = DeclaredType::classify(restriction.attr("base"));
        let values: Vec<String> = restriction
            .children_named(tags::ENUMERATION)
            .filter_map(|e| e.attr("value"))
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            SimpleTypeVariant::Alias { base }
        } else {
            SimpleTypeVariant::Enumeration { base, values }
        }
    } else if let Some(list) = node.first_child(tags::LIST) {
        SimpleTypeVariant::List {
            item: DeclaredType::classify(list.attr("itemType")),
        }
    } else if let Some(union) = node.first_child(tags::UNION) {
        SimpleTypeVariant::Union {
            members: union
                .attr("memberTypes")
                .map(|m| {
                    m.split_whitespace()
                        .map(|t| DeclaredType::classify(Some(t)))
                        .collect()
                })
                .unwrap_or_default(),
        }
    } else {
        SimpleTypeVariant::Opaque
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::xsd::node::normalize;
    use crate::xsd::raw::RawNode;
    use crate::xsd::reader::read_document;

    fn body(xml: &str) -> XsdNode {
        normalize(RawNode::Tree(read_document(xml).unwrap().root))
    }

    #[test]
    fn enumeration_keeps_declaration_order() {
        let node = body(
            r#"<xs:simpleType name="Status">
                 <xs:restriction base="xs:string">
                   <xs:enumeration value="Released"/>
                   <xs:enumeration value="Draft"/>
                   <xs:enumeration value="Deprecated"/>
                 </xs:restriction>
               </xs:simpleType>"#,
        );
        match analyze(&node) {
            SimpleTypeVariant::Enumeration { values, .. } => {
                assert_eq!(values, ["Released", "Draft", "Deprecated"]);
            }
            other => panic!("expected enumeration, got {other:?}"),
        }
    }

    #[test]
    fn plain_restriction_is_an_alias() {
        let node = body(
            r#"<xs:simpleType name="Sku">
                 <xs:restriction base="xs:string"/>
               </xs:simpleType>"#,
        );
        assert_eq!(
            analyze(&node),
            SimpleTypeVariant::Alias {
                base: DeclaredType::Primitive("string".to_string())
            }
        );
    }

    #[test]
    fn list_and_union_are_recognized() {
        let list = body(r#"<xs:simpleType><xs:list itemType="xs:int"/></xs:simpleType>"#);
        assert_eq!(
            analyze(&list),
            SimpleTypeVariant::List {
                item: DeclaredType::Primitive("int".to_string())
            }
        );
        let union = body(
            r#"<xs:simpleType><xs:union memberTypes="xs:int Status"/></xs:simpleType>"#,
        );
        match analyze(&union) {
            SimpleTypeVariant::Union { members } => assert_eq!(members.len(), 2),
            other => panic!("expected union, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_body_is_opaque() {
        let node = body("<xs:simpleType name=\"X\"/>");
        assert_eq!(analyze(&node), SimpleTypeVariant::Opaque);
    }
}
