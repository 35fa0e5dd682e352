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

//! Property extraction.
//!
//! Derives the ordered property list of one complex-type body:
//! simple-content types collapse to a text-value property plus
//! attributes; complex-content extensions record the base type and
//! contribute only their own members; sequence/all/choice content is
//! flattened recursively with named group references resolved in
//! place; wildcards become sentinel properties; attributes are
//! appended after all element-derived properties. A name that already
//! occurred is dropped, first declaration wins.
//!
//! Unresolved type references are not errors here. The dangling name
//! is carried through and resolved, or flagged, at generation time.

use crate::compiler::doc_of;
use crate::compiler::Config;
use crate::xsd::names::XmlName;
use crate::xsd::names::XsdName;
use crate::xsd::tags;
use crate::xsd::XsdNode;
use crate::xsd::ATTR_MARKER;
use crate::xsd::TEXT_KEY;
use crate::xsd::XS_PREFIX;
use std::collections::HashMap;
use std::collections::HashSet;

/// Type reference of one property.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclaredType {
    /// Reference to another schema type, possibly not (yet) known.
    Named(XsdName),
    /// Built-in schema type, local name without the `xs:` prefix.
    Primitive(String),
    /// Wildcard content.
    Any,
    /// No usable type information.
    Unknown,
}

impl DeclaredType {
    /// Classify a raw `type`/`base` attribute value. The `xs:` prefix
    /// marks built-ins; any other prefix is split off and the local
    /// name kept as a named reference.
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unknown,
            Some(t) => match t.split_once(':') {
                Some((prefix, local)) if prefix == XS_PREFIX => Self::Primitive(local.to_string()),
                Some((_, local)) => local.parse().map(Self::Named).unwrap_or(Self::Unknown),
                None => t.parse().map(Self::Named).unwrap_or(Self::Unknown),
            },
        }
    }

    /// The referenced type name, for dependency edges.
    #[must_use]
    pub const fn named(&self) -> Option<&XsdName> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

/// One property of a generated type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDesc {
    /// User-facing name. Attributes keep the marker here unless
    /// transparent attribute naming is configured.
    pub name: String,
    /// Original XML name, authoritative for serialization. Attributes
    /// always carry the marker here.
    pub xml_name: XmlName,
    pub declared_type: DeclaredType,
    /// Raw schema type text, kept for metadata retention.
    pub schema_type: Option<String>,
    pub is_attribute: bool,
    pub is_list: bool,
    pub is_nillable: bool,
    pub is_choice_member: bool,
    pub is_any: bool,
    pub doc: Option<String>,
}

/// Extraction result of one type body.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Extension base type, inherited at the class level.
    pub parent: Option<XsdName>,
    pub properties: Vec<PropertyDesc>,
    pub warnings: Vec<String>,
}

/// Property extractor over the schema's named group maps.
pub struct PropertyExtractor<'a> {
    groups: &'a HashMap<XsdName, XsdNode>,
    attribute_groups: &'a HashMap<XsdName, XsdNode>,
    config: &'a Config,
}

impl<'a> PropertyExtractor<'a> {
    #[must_use]
    pub const fn new(
        groups: &'a HashMap<XsdName, XsdNode>,
        attribute_groups: &'a HashMap<XsdName, XsdNode>,
        config: &'a Config,
    ) -> Self {
        Self {
            groups,
            attribute_groups,
            config,
        }
    }

    /// Derive the ordered property list of a complex-type body.
    #[must_use]
    pub fn extract(&self, body: &XsdNode) -> Extraction {
        let mut out = Extraction::default();
        // Names of groups currently being expanded, guarding against
        // recursive group references.
        let mut expanding = Vec::new();
        if let Some(simple) = body.first_child(tags::SIMPLE_CONTENT) {
            // A simple-content type has no element children by schema
            // rules; nothing past the text property and the
            // derivation's attributes may be processed.
            self.simple_content(simple, &mut out, &mut expanding);
        } else if let Some(complex) = body.first_child(tags::COMPLEX_CONTENT) {
            self.complex_content(complex, &mut out, &mut expanding);
        } else {
            self.content_model(body, false, false, &mut out, &mut expanding);
            self.attributes_of(body, &mut out, &mut expanding);
        }
        dedup(&mut out.properties);
        out
    }

    fn simple_content(
        &self,
        node: &XsdNode,
        out: &mut Extraction,
        expanding: &mut Vec<XsdName>,
    ) {
        let derivation = node
            .first_child(tags::EXTENSION)
            .or_else(|| node.first_child(tags::RESTRICTION));
        let base = derivation.and_then(|d| d.attr("base"));
        out.properties.push(PropertyDesc {
            name: self.config.text_property.clone(),
            xml_name: XmlName::new(TEXT_KEY.to_string()),
            declared_type: DeclaredType::classify(base),
            schema_type: base.map(str::to_string),
            is_attribute: false,
            is_list: false,
            is_nillable: false,
            is_choice_member: false,
            is_any: false,
            doc: None,
        });
        if let Some(derivation) = derivation {
            self.attributes_of(derivation, out, expanding);
        }
    }

    fn complex_content(
        &self,
        node: &XsdNode,
        out: &mut Extraction,
        expanding: &mut Vec<XsdName>,
    ) {
        if let Some(extension) = node.first_child(tags::EXTENSION) {
            // The base type's members are inherited at the class
            // level, never copied into this list.
            out.parent = match DeclaredType::classify(extension.attr("base")) {
                DeclaredType::Named(name) => Some(name),
                _ => None,
            };
            self.content_model(extension, false, false, out, expanding);
            self.attributes_of(extension, out, expanding);
        } else if let Some(restriction) = node.first_child(tags::RESTRICTION) {
            // A restriction restates the permitted subset of the base
            // model; its body is processed like a direct model.
            self.content_model(restriction, false, false, out, expanding);
            self.attributes_of(restriction, out, expanding);
        }
    }

    fn content_model(
        &self,
        node: &XsdNode,
        forced_list: bool,
        in_choice: bool,
        out: &mut Extraction,
        expanding: &mut Vec<XsdName>,
    ) {
        for (tag, occurrences) in &node.children {
            for child in occurrences.iter() {
                let repeats = forced_list || is_unbounded(child);
                match tag.as_str() {
                    tags::SEQUENCE | tags::ALL => {
                        self.content_model(child, repeats, in_choice, out, expanding);
                    }
                    tags::CHOICE => self.content_model(child, repeats, true, out, expanding),
                    tags::GROUP => self.group_ref(child, repeats, in_choice, out, expanding),
                    tags::ELEMENT => {
                        let property = self.element(child, forced_list, in_choice);
                        match property {
                            Some(p) => out.properties.push(p),
                            None => out
                                .warnings
                                .push("skipped element without name or ref".to_string()),
                        }
                    }
                    tags::ANY => out.properties.push(any_element(repeats)),
                    _ => {}
                }
            }
        }
    }

    fn group_ref(
        &self,
        node: &XsdNode,
        forced_list: bool,
        in_choice: bool,
        out: &mut Extraction,
        expanding: &mut Vec<XsdName>,
    ) {
        let reference = node.attr("ref");
        let name = reference.and_then(|raw| local_part(raw).parse::<XsdName>().ok());
        let body = name
            .as_ref()
            .and_then(|name| self.groups.get(name));
        match (name, body) {
            (Some(name), Some(body)) => {
                if expanding.contains(&name) {
                    out.warnings
                        .push(format!("recursive group reference {name}"));
                    return;
                }
                expanding.push(name);
                self.content_model(body, forced_list, in_choice, out, expanding);
                expanding.pop();
            }
            _ => out.warnings.push(format!(
                "unresolved group reference {}",
                reference.unwrap_or("<missing ref>")
            )),
        }
    }

    fn element(
        &self,
        node: &XsdNode,
        forced_list: bool,
        in_choice: bool,
    ) -> Option<PropertyDesc> {
        let (xml_name, schema_type) = match node.attr("name") {
            Some(name) => (name.to_string(), node.attr("type").map(str::to_string)),
            // An element reference binds under the referenced name and
            // is typed by it; top-level elements become types of the
            // same name.
            None => {
                let reference = node.attr("ref")?;
                (
                    local_part(reference).to_string(),
                    Some(reference.to_string()),
                )
            }
        };
        Some(PropertyDesc {
            name: xml_name.clone(),
            declared_type: DeclaredType::classify(schema_type.as_deref()),
            schema_type,
            xml_name: XmlName::new(xml_name),
            is_attribute: false,
            is_list: forced_list || is_unbounded(node),
            is_nillable: node.attr("nillable") == Some("true"),
            is_choice_member: in_choice,
            is_any: false,
            doc: doc_of(node),
        })
    }

    fn attributes_of(
        &self,
        node: &XsdNode,
        out: &mut Extraction,
        expanding: &mut Vec<XsdName>,
    ) {
        for (tag, occurrences) in &node.children {
            for child in occurrences.iter() {
                match tag.as_str() {
                    tags::ATTRIBUTE => {
                        let property = self.attribute(child);
                        match property {
                            Some(p) => out.properties.push(p),
                            None => out
                                .warnings
                                .push("skipped attribute without name".to_string()),
                        }
                    }
                    tags::ATTRIBUTE_GROUP => self.attribute_group_ref(child, out, expanding),
                    tags::ANY_ATTRIBUTE => out.properties.push(any_attribute()),
                    _ => {}
                }
            }
        }
    }

    fn attribute(&self, node: &XsdNode) -> Option<PropertyDesc> {
        let local = node
            .attr("name")
            .or_else(|| node.attr("ref").map(local_part))?;
        let xml_name = format!("{ATTR_MARKER}{local}");
        let name = if self.config.transparent_attributes {
            local.to_string()
        } else {
            xml_name.clone()
        };
        let schema_type = node.attr("type").map(str::to_string);
        Some(PropertyDesc {
            name,
            xml_name: XmlName::new(xml_name),
            declared_type: DeclaredType::classify(schema_type.as_deref()),
            schema_type,
            is_attribute: true,
            is_list: false,
            is_nillable: false,
            is_choice_member: false,
            is_any: false,
            doc: doc_of(node),
        })
    }

    fn attribute_group_ref(
        &self,
        node: &XsdNode,
        out: &mut Extraction,
        expanding: &mut Vec<XsdName>,
    ) {
        let reference = node.attr("ref");
        let name = reference.and_then(|raw| local_part(raw).parse::<XsdName>().ok());
        let body = name
            .as_ref()
            .and_then(|name| self.attribute_groups.get(name));
        match (name, body) {
            (Some(name), Some(body)) => {
                if expanding.contains(&name) {
                    out.warnings
                        .push(format!("recursive attribute group reference {name}"));
                    return;
                }
                expanding.push(name);
                self.attributes_of(body, out, expanding);
                expanding.pop();
            }
            _ => out.warnings.push(format!(
                "unresolved attribute group reference {}",
                reference.unwrap_or("<missing ref>")
            )),
        }
    }
}

fn any_element(is_list: bool) -> PropertyDesc {
    PropertyDesc {
        name: "anyElement".to_string(),
        xml_name: XmlName::new("anyElement".to_string()),
        declared_type: DeclaredType::Any,
        schema_type: None,
        is_attribute: false,
        is_list,
        is_nillable: false,
        is_choice_member: false,
        is_any: true,
        doc: None,
    }
}

fn any_attribute() -> PropertyDesc {
    PropertyDesc {
        name: "anyAttribute".to_string(),
        xml_name: XmlName::new(format!("{ATTR_MARKER}anyAttribute")),
        declared_type: DeclaredType::Any,
        schema_type: None,
        is_attribute: true,
        is_list: false,
        is_nillable: false,
        is_choice_member: false,
        is_any: true,
        doc: None,
    }
}

fn is_unbounded(node: &XsdNode) -> bool {
    node.attr("maxOccurs") == Some("unbounded")
}

fn local_part(raw: &str) -> &str {
    raw.rsplit(':').next().unwrap_or(raw)
}

/// Drop properties whose resolved name already occurred. First
/// declaration wins; this matters when overlapping group expansions
/// reintroduce the same name.
fn dedup(properties: &mut Vec<PropertyDesc>) {
    let mut seen = HashSet::new();
    properties.retain(|p| seen.insert(p.name.clone()));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compiler::types::extract_types;
    use crate::xsd::node::normalize;
    use crate::xsd::raw::RawNode;
    use crate::xsd::reader::read_document;

    fn extract_with(schema: &str, type_name: &str, config: &Config) -> Extraction {
        let doc = read_document(schema).unwrap();
        let node = normalize(RawNode::Tree(doc.root));
        let extracted = extract_types(&doc.root_name, &node).unwrap();
        let decl = extracted
            .complex
            .iter()
            .find(|t| t.name.as_ref() == type_name)
            .unwrap_or_else(|| panic!("type {type_name} not extracted"));
        PropertyExtractor::new(&extracted.groups, &extracted.attribute_groups, config)
            .extract(&decl.node)
    }

    fn extract(schema: &str, type_name: &str) -> Extraction {
        extract_with(schema, type_name, &Config::default())
    }

    #[test]
    fn element_and_attribute_of_person() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Person">
                   <xs:sequence>
                     <xs:element name="Name" type="xs:string"/>
                   </xs:sequence>
                   <xs:attribute name="Age" type="xs:int"/>
                 </xs:complexType>
               </xs:schema>"#,
            "Person",
        );
        assert_eq!(out.properties.len(), 2);
        let name = &out.properties[0];
        assert_eq!(name.name, "Name");
        assert_eq!(name.xml_name.inner(), "Name");
        assert!(!name.is_attribute);
        let age = &out.properties[1];
        assert_eq!(age.name, "@Age");
        assert_eq!(age.xml_name.inner(), "@Age");
        assert!(age.is_attribute);
        assert!(!age.is_list);
    }

    #[test]
    fn transparent_naming_strips_marker_from_name_only() {
        let config = Config {
            transparent_attributes: true,
            ..Config::default()
        };
        let out = extract_with(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Person">
                   <xs:attribute name="Age" type="xs:int"/>
                 </xs:complexType>
               </xs:schema>"#,
            "Person",
            &config,
        );
        assert_eq!(out.properties[0].name, "Age");
        assert_eq!(out.properties[0].xml_name.inner(), "@Age");
    }

    #[test]
    fn simple_content_short_circuits_to_text_plus_attributes() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Price">
                   <xs:simpleContent>
                     <xs:extension base="xs:decimal">
                       <xs:attribute name="Currency" type="xs:string"/>
                     </xs:extension>
                   </xs:simpleContent>
                 </xs:complexType>
               </xs:schema>"#,
            "Price",
        );
        assert_eq!(out.properties.len(), 2);
        let text = &out.properties[0];
        assert_eq!(text.name, "value");
        assert_eq!(text.xml_name.inner(), "#text");
        assert_eq!(
            text.declared_type,
            DeclaredType::Primitive("decimal".to_string())
        );
        assert!(out.properties[1].is_attribute);
        assert!(out.parent.is_none());
    }

    #[test]
    fn text_property_name_is_configurable() {
        let config = Config {
            text_property: "content".to_string(),
            ..Config::default()
        };
        let out = extract_with(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Note">
                   <xs:simpleContent>
                     <xs:extension base="xs:string"/>
                   </xs:simpleContent>
                 </xs:complexType>
               </xs:schema>"#,
            "Note",
            &config,
        );
        assert_eq!(out.properties[0].name, "content");
        assert_eq!(out.properties[0].xml_name.inner(), "#text");
    }

    #[test]
    fn extension_records_parent_and_own_members_only() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Base">
                   <xs:sequence>
                     <xs:element name="Id" type="xs:string"/>
                   </xs:sequence>
                 </xs:complexType>
                 <xs:complexType name="Derived">
                   <xs:complexContent>
                     <xs:extension base="Base">
                       <xs:sequence>
                         <xs:element name="Extra" type="xs:string"/>
                       </xs:sequence>
                       <xs:attribute name="Version" type="xs:int"/>
                     </xs:extension>
                   </xs:complexContent>
                 </xs:complexType>
               </xs:schema>"#,
            "Derived",
        );
        assert_eq!(out.parent.as_ref().unwrap().as_ref(), "Base");
        let names: Vec<&str> = out.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Extra", "@Version"], "no parent members copied");
    }

    #[test]
    fn choice_members_flatten_as_individual_properties() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Shape">
                   <xs:choice>
                     <xs:element name="Circle" type="Circle"/>
                     <xs:element name="Square" type="Square"/>
                   </xs:choice>
                 </xs:complexType>
               </xs:schema>"#,
            "Shape",
        );
        assert_eq!(out.properties.len(), 2);
        assert!(out.properties.iter().all(|p| p.is_choice_member));
        assert!(out.properties.iter().all(|p| !p.is_list));
    }

    #[test]
    fn unbounded_choice_marks_every_member_as_list() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Mixed">
                   <xs:choice maxOccurs="unbounded">
                     <xs:element name="A" type="xs:string"/>
                     <xs:element name="B" type="xs:string"/>
                   </xs:choice>
                 </xs:complexType>
               </xs:schema>"#,
            "Mixed",
        );
        assert!(out.properties.iter().all(|p| p.is_list));
        assert!(out.properties.iter().all(|p| p.is_choice_member));
    }

    #[test]
    fn group_reference_flattens_resolved_body_in_place() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:group name="Common">
                   <xs:sequence>
                     <xs:element name="Id" type="xs:string"/>
                     <xs:element name="Label" type="xs:string"/>
                   </xs:sequence>
                 </xs:group>
                 <xs:complexType name="Widget">
                   <xs:sequence>
                     <xs:group ref="Common"/>
                     <xs:element name="Weight" type="xs:decimal"/>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "Widget",
        );
        let names: Vec<&str> = out.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Id", "Label", "Weight"]);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn recursive_group_reference_is_reported_not_fatal() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:group name="Loop">
                   <xs:sequence>
                     <xs:element name="Id" type="xs:string"/>
                     <xs:group ref="Loop"/>
                   </xs:sequence>
                 </xs:group>
                 <xs:complexType name="T">
                   <xs:sequence>
                     <xs:group ref="Loop"/>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "T",
        );
        assert_eq!(out.properties.len(), 1);
        assert!(out.warnings.iter().any(|w| w.contains("recursive")));
    }

    #[test]
    fn unresolved_group_reference_warns_and_recovers() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Widget">
                   <xs:sequence>
                     <xs:group ref="Missing"/>
                     <xs:element name="Weight" type="xs:decimal"/>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "Widget",
        );
        assert_eq!(out.properties.len(), 1);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("Missing"));
    }

    #[test]
    fn attribute_group_resolves_nested_groups_and_wildcard() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:attributeGroup name="Audit">
                   <xs:attribute name="By" type="xs:string"/>
                   <xs:attributeGroup ref="Extra"/>
                 </xs:attributeGroup>
                 <xs:attributeGroup name="Extra">
                   <xs:anyAttribute/>
                 </xs:attributeGroup>
                 <xs:complexType name="Entry">
                   <xs:sequence>
                     <xs:element name="Value" type="xs:string"/>
                   </xs:sequence>
                   <xs:attributeGroup ref="Audit"/>
                 </xs:complexType>
               </xs:schema>"#,
            "Entry",
        );
        let names: Vec<&str> = out.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Value", "@By", "anyAttribute"]);
        let wildcard = out.properties.last().unwrap();
        assert!(wildcard.is_attribute);
        assert!(wildcard.is_any);
        assert_eq!(wildcard.declared_type, DeclaredType::Any);
    }

    #[test]
    fn any_wildcard_becomes_sentinel_property() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Open">
                   <xs:sequence>
                     <xs:any maxOccurs="unbounded"/>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "Open",
        );
        assert_eq!(out.properties.len(), 1);
        let any = &out.properties[0];
        assert_eq!(any.name, "anyElement");
        assert!(any.is_any);
        assert!(any.is_list);
        assert!(!any.is_attribute);
    }

    // Duplicate suppression is first-wins by specification. This also
    // discards legitimately repeated names arising from different
    // groups; the test pins that behavior so a change is visible.
    #[test]
    fn duplicate_names_first_wins() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="Doc">
                   <xs:sequence>
                     <xs:element name="Title" type="xs:string"/>
                     <xs:choice>
                       <xs:element name="Title" type="xs:token"/>
                       <xs:element name="Subtitle" type="xs:string"/>
                     </xs:choice>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "Doc",
        );
        let names: Vec<&str> = out.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Title", "Subtitle"]);
        // First declaration survives: the plain string element, not
        // the choice member.
        assert!(!out.properties[0].is_choice_member);
        assert_eq!(
            out.properties[0].declared_type,
            DeclaredType::Primitive("string".to_string())
        );
    }

    #[test]
    fn attributes_are_never_lists() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="T">
                   <xs:sequence maxOccurs="unbounded">
                     <xs:element name="E" type="xs:string"/>
                   </xs:sequence>
                   <xs:attribute name="A" type="xs:string"/>
                 </xs:complexType>
               </xs:schema>"#,
            "T",
        );
        for p in &out.properties {
            if p.is_attribute {
                assert!(!p.is_list);
            }
        }
        assert!(out.properties[0].is_list, "unbounded sequence forces lists");
    }

    #[test]
    fn nillable_and_unbounded_elements() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="T">
                   <xs:sequence>
                     <xs:element name="N" type="xs:string" nillable="true"/>
                     <xs:element name="L" type="xs:string" maxOccurs="unbounded"/>
                     <xs:element name="B" type="xs:string" maxOccurs="3"/>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "T",
        );
        assert!(out.properties[0].is_nillable);
        assert!(out.properties[1].is_list);
        // Only an explicit unbounded maximum makes a list.
        assert!(!out.properties[2].is_list);
    }

    #[test]
    fn element_reference_binds_under_referenced_name() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="T">
                   <xs:sequence>
                     <xs:element ref="tns:Remark"/>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "T",
        );
        let p = &out.properties[0];
        assert_eq!(p.name, "Remark");
        assert_eq!(
            p.declared_type,
            DeclaredType::Named("Remark".parse().unwrap())
        );
    }

    #[test]
    fn unresolved_type_reference_is_carried_not_rejected() {
        let out = extract(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:complexType name="T">
                   <xs:sequence>
                     <xs:element name="Payload" type="External"/>
                   </xs:sequence>
                 </xs:complexType>
               </xs:schema>"#,
            "T",
        );
        assert_eq!(
            out.properties[0].declared_type,
            DeclaredType::Named("External".parse().unwrap())
        );
        assert!(out.warnings.is_empty());
    }
}
