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

//! Generation of one Rust struct per complex type.
//!
//! Field layout follows the property list: single values are
//! `Option`s, lists are `Vec`s, the extension base is an embedded
//! `base` field constructed from the same node. The `XmlBind` impl
//! realizes the runtime contract: presence-gated construction of
//! nested types, one-or-many list coercion, and a serialization that
//! inverts construction exactly.

use crate::compiler::ComplexType;
use crate::compiler::PropertyDesc;
use crate::generator::converter::ResolvedType;
use crate::generator::converter::Scalar;
use crate::generator::converter::TypeTable;
use crate::generator::rust::doc::format_and_generate as doc_format_and_generate;
use crate::generator::rust::scalar_type_tokens;
use crate::generator::rust::Config;
use crate::generator::rust::FieldName;
use crate::generator::rust::TypeName;
use crate::xsd::ATTR_MARKER;
use crate::xsd::TEXT_KEY;
use proc_macro2::Literal;
use proc_macro2::TokenStream;
use quote::quote;

/// Generation of one Rust struct.
#[derive(Debug)]
pub struct StructDef<'a> {
    pub compiled: &'a ComplexType,
    pub table: &'a TypeTable,
    pub config: &'a Config,
}

#[derive(Default)]
struct Parts {
    fields: TokenStream,
    ctor: TokenStream,
    fill: TokenStream,
    metas: TokenStream,
    accessors: TokenStream,
}

impl StructDef<'_> {
    /// Generate the struct, its optional accessor impl and its
    /// `XmlBind` impl.
    pub fn generate(&self, tokens: &mut TokenStream, warnings: &mut Vec<String>) {
        let rt = &self.config.runtime_path;
        let name = TypeName::new(&self.compiled.name);
        let name_lit = Literal::string(self.compiled.name.as_ref());
        let mut parts = Parts::default();

        let parent = self.compiled.parent.as_ref().and_then(|p| {
            if self.table.parent_known(p) {
                Some(p)
            } else {
                warnings.push(format!(
                    "{}: unresolved base type `{p}`",
                    self.compiled.name
                ));
                None
            }
        });
        if let Some(parent) = parent {
            let parent_ty = TypeName::new(parent);
            let vis = self.vis();
            parts.fields.extend(quote! {
                /// Extension base.
                #vis base: #parent_ty,
            });
            parts.ctor.extend(quote! { base: #parent_ty::from_node(node), });
            parts.fill.extend(quote! { self.base.fill_node(node); });
            if self.config.wants_accessors() {
                parts.accessors.extend(quote! {
                    pub fn base(&self) -> &#parent_ty { &self.base }
                    pub fn base_mut(&mut self) -> &mut #parent_ty { &mut self.base }
                });
            }
        }

        let claimed_children: Vec<Literal> = self
            .compiled
            .properties
            .iter()
            .filter(|p| !p.is_attribute && !p.is_any && p.xml_name.inner() != TEXT_KEY)
            .map(|p| Literal::string(p.xml_name.inner()))
            .collect();
        let claimed_attributes: Vec<Literal> = self
            .compiled
            .properties
            .iter()
            .filter(|p| p.is_attribute && !p.is_any)
            .map(|p| Literal::string(attr_local(p)))
            .collect();

        for p in &self.compiled.properties {
            self.property(p, &mut parts, &claimed_children, &claimed_attributes, warnings);
        }

        if self.config.notify_changes {
            parts.fields.extend(quote! { changes: #rt::ChangeLog, });
            parts
                .ctor
                .extend(quote! { changes: #rt::ChangeLog::default(), });
            parts.accessors.extend(quote! {
                /// Mutations recorded by setters.
                pub fn changes(&self) -> &#rt::ChangeLog { &self.changes }
                /// Forget recorded mutations.
                pub fn clear_changes(&mut self) { self.changes.clear(); }
            });
        }

        let fields = &parts.fields;
        tokens.extend([
            doc_format_and_generate(self.compiled.doc.as_deref(), None),
            quote! {
                #[derive(Debug, Clone, Default, PartialEq)]
                pub struct #name { #fields }
            },
        ]);
        if self.config.wants_accessors() {
            let accessors = &parts.accessors;
            tokens.extend(quote! { impl #name { #accessors } });
        }
        let parent_meta = match &self.compiled.parent {
            Some(p) => {
                let lit = Literal::string(p.as_ref());
                quote! { Some(#lit) }
            }
            None => quote! { None },
        };
        let metas = &parts.metas;
        let ctor = &parts.ctor;
        let fill = &parts.fill;
        tokens.extend(quote! {
            impl #rt::XmlBind for #name {
                const META: #rt::TypeMeta = #rt::TypeMeta {
                    name: #name_lit,
                    parent: #parent_meta,
                    properties: &[#metas],
                };
                fn from_node(node: &#rt::XmlNode) -> Self {
                    Self { #ctor }
                }
                fn fill_node(&self, node: &mut #rt::XmlNode) { #fill }
            }
        });
    }

    fn vis(&self) -> TokenStream {
        if self.config.wants_accessors() {
            TokenStream::new()
        } else {
            quote! { pub }
        }
    }

    fn notify(&self, p: &PropertyDesc) -> TokenStream {
        if self.config.notify_changes {
            let xml = Literal::string(p.xml_name.inner());
            quote! { self.changes.record(#xml); }
        } else {
            TokenStream::new()
        }
    }

    fn property(
        &self,
        p: &PropertyDesc,
        parts: &mut Parts,
        claimed_children: &[Literal],
        claimed_attributes: &[Literal],
        warnings: &mut Vec<String>,
    ) {
        parts.metas.extend(self.property_meta(p));
        if p.is_any {
            if p.is_attribute {
                self.any_attribute(p, parts, claimed_attributes);
            } else {
                self.any_element(p, parts, claimed_children);
            }
        } else if p.xml_name.inner() == TEXT_KEY {
            self.text(p, parts, warnings);
        } else if p.is_attribute {
            self.attribute(p, parts, warnings);
        } else {
            self.element(p, parts, warnings);
        }
    }

    fn property_meta(&self, p: &PropertyDesc) -> TokenStream {
        let rt = &self.config.runtime_path;
        let name = Literal::string(&p.name);
        let xml_name = Literal::string(p.xml_name.inner());
        let schema_type = match (&p.schema_type, self.config.retain_schema_types) {
            (Some(t), true) => {
                let lit = Literal::string(t);
                quote! { Some(#lit) }
            }
            _ => quote! { None },
        };
        let is_attribute = if self.config.retain_attribute_flags {
            let v = p.is_attribute;
            quote! { Some(#v) }
        } else {
            quote! { None }
        };
        let is_list = p.is_list;
        let is_nillable = p.is_nillable;
        quote! {
            #rt::PropertyMeta {
                name: #name,
                xml_name: #xml_name,
                schema_type: #schema_type,
                is_attribute: #is_attribute,
                is_list: #is_list,
                is_nillable: #is_nillable,
            },
        }
    }

    fn any_attribute(&self, p: &PropertyDesc, parts: &mut Parts, claimed: &[Literal]) {
        let rt = &self.config.runtime_path;
        let field = FieldName::new(&p.name);
        let vis = self.vis();
        parts.fields.extend(doc_format_and_generate(p.doc.as_deref(), None));
        parts
            .fields
            .extend(quote! { #vis #field: Vec<(String, String)>, });
        parts.ctor.extend(quote! {
            #field: #rt::bind::unclaimed_attributes(node, &[#(#claimed),*]),
        });
        parts.fill.extend(quote! {
            for (name, value) in &self.#field {
                node.set_attr(name.clone(), value.clone());
            }
        });
        if self.config.wants_accessors() {
            let setter = field.setter();
            let notify = self.notify(p);
            parts.accessors.extend(quote! {
                pub fn #field(&self) -> &[(String, String)] { &self.#field }
                pub fn #setter(&mut self, value: Vec<(String, String)>) {
                    self.#field = value;
                    #notify
                }
            });
        }
    }

    fn any_element(&self, p: &PropertyDesc, parts: &mut Parts, claimed: &[Literal]) {
        let rt = &self.config.runtime_path;
        let field = FieldName::new(&p.name);
        let vis = self.vis();
        parts.fields.extend(doc_format_and_generate(p.doc.as_deref(), None));
        parts
            .fields
            .extend(quote! { #vis #field: Vec<(String, #rt::XmlNode)>, });
        parts.ctor.extend(quote! {
            #field: #rt::bind::unclaimed_children(node, &[#(#claimed),*]),
        });
        parts.fill.extend(quote! {
            for (name, child) in &self.#field {
                node.add_child(name.clone(), child.clone());
            }
        });
        if self.config.wants_accessors() {
            let setter = field.setter();
            let notify = self.notify(p);
            parts.accessors.extend(quote! {
                pub fn #field(&self) -> &[(String, #rt::XmlNode)] { &self.#field }
                pub fn #setter(&mut self, value: Vec<(String, #rt::XmlNode)>) {
                    self.#field = value;
                    #notify
                }
            });
        }
    }

    fn text(&self, p: &PropertyDesc, parts: &mut Parts, warnings: &mut Vec<String>) {
        let rt = &self.config.runtime_path;
        let field = FieldName::new(&p.name);
        let vis = self.vis();
        parts.fields.extend(doc_format_and_generate(p.doc.as_deref(), None));
        if let ResolvedType::Enumeration(n) = self.table.resolve(&p.declared_type) {
            let ty = TypeName::new(&n);
            parts.fields.extend(quote! { #vis #field: Option<#ty>, });
            parts
                .ctor
                .extend(quote! { #field: node.text.as_deref().and_then(#ty::parse), });
            parts.fill.extend(quote! {
                if let Some(v) = &self.#field { node.text = Some(v.as_str().to_string()); }
            });
            self.single_copy_accessors(p, parts, &quote! { #ty });
            return;
        }
        let (ty, scalar) = self.leaf(p, warnings);
        parts.fields.extend(quote! { #vis #field: Option<#ty>, });
        let ctor = match scalar {
            Scalar::Text => quote! { node.text.clone() },
            Scalar::Int => quote! { node.text.as_deref().and_then(#rt::bind::parse_int) },
            Scalar::Float => quote! { node.text.as_deref().and_then(#rt::bind::parse_float) },
            Scalar::Bool => quote! { node.text.as_deref().and_then(#rt::bind::parse_bool) },
        };
        parts.ctor.extend(quote! { #field: #ctor, });
        let serialized = match scalar {
            Scalar::Text => quote! { v.clone() },
            Scalar::Int | Scalar::Float => quote! { v.to_string() },
            Scalar::Bool => quote! { #rt::bind::fmt_bool(*v).to_string() },
        };
        parts.fill.extend(quote! {
            if let Some(v) = &self.#field { node.text = Some(#serialized); }
        });
        match scalar {
            Scalar::Text => self.single_text_accessors(p, parts),
            _ => self.single_copy_accessors(p, parts, &ty),
        }
    }

    fn attribute(&self, p: &PropertyDesc, parts: &mut Parts, warnings: &mut Vec<String>) {
        let rt = &self.config.runtime_path;
        let field = FieldName::new(&p.name);
        let vis = self.vis();
        let attr = Literal::string(attr_local(p));
        parts.fields.extend(doc_format_and_generate(p.doc.as_deref(), None));
        if let ResolvedType::Enumeration(n) = self.table.resolve(&p.declared_type) {
            let ty = TypeName::new(&n);
            parts.fields.extend(quote! { #vis #field: Option<#ty>, });
            parts
                .ctor
                .extend(quote! { #field: node.attr(#attr).and_then(#ty::parse), });
            parts.fill.extend(quote! {
                if let Some(v) = &self.#field { node.set_attr(#attr, v.as_str()); }
            });
            self.single_copy_accessors(p, parts, &quote! { #ty });
            return;
        }
        let (ty, scalar) = self.leaf(p, warnings);
        parts.fields.extend(quote! { #vis #field: Option<#ty>, });
        let ctor = match scalar {
            Scalar::Text => quote! { node.attr(#attr).map(str::to_string) },
            Scalar::Int => quote! { node.attr(#attr).and_then(#rt::bind::parse_int) },
            Scalar::Float => quote! { node.attr(#attr).and_then(#rt::bind::parse_float) },
            Scalar::Bool => quote! { node.attr(#attr).and_then(#rt::bind::parse_bool) },
        };
        parts.ctor.extend(quote! { #field: #ctor, });
        let serialized = match scalar {
            Scalar::Text => quote! { v.clone() },
            Scalar::Int | Scalar::Float => quote! { v.to_string() },
            Scalar::Bool => quote! { #rt::bind::fmt_bool(*v) },
        };
        parts.fill.extend(quote! {
            if let Some(v) = &self.#field { node.set_attr(#attr, #serialized); }
        });
        match scalar {
            Scalar::Text => self.single_text_accessors(p, parts),
            _ => self.single_copy_accessors(p, parts, &ty),
        }
    }

    fn element(&self, p: &PropertyDesc, parts: &mut Parts, warnings: &mut Vec<String>) {
        let rt = &self.config.runtime_path;
        let field = FieldName::new(&p.name);
        let vis = self.vis();
        let tag = Literal::string(p.xml_name.inner());
        match self.table.resolve(&p.declared_type) {
            ResolvedType::Enumeration(n) => {
                let ty = TypeName::new(&n);
                parts.fields.extend(doc_format_and_generate(p.doc.as_deref(), None));
                if p.is_list {
                    parts.fields.extend(quote! { #vis #field: Vec<#ty>, });
                    parts.ctor.extend(quote! {
                        #field: node
                            .children_named(#tag)
                            .filter_map(|child| child.text.as_deref().and_then(#ty::parse))
                            .collect(),
                    });
                    parts.fill.extend(quote! {
                        for v in &self.#field {
                            node.add_child(#tag, #rt::XmlNode::text_node(v.as_str()));
                        }
                    });
                    self.list_accessors(p, parts, &quote! { #ty });
                } else {
                    parts.fields.extend(quote! { #vis #field: Option<#ty>, });
                    parts.ctor.extend(quote! {
                        #field: node.child_text(#tag).and_then(#ty::parse),
                    });
                    parts.fill.extend(quote! {
                        if let Some(v) = &self.#field {
                            node.add_child(#tag, #rt::XmlNode::text_node(v.as_str()));
                        }
                    });
                    self.single_copy_accessors(p, parts, &quote! { #ty });
                }
            }
            ResolvedType::Complex(n) => {
                let ty = TypeName::new(&n);
                parts.fields.extend(doc_format_and_generate(p.doc.as_deref(), None));
                if p.is_list {
                    parts.fields.extend(quote! { #vis #field: Vec<#ty>, });
                    parts.ctor.extend(quote! {
                        #field: node.children_named(#tag).map(#ty::from_node).collect(),
                    });
                    parts.fill.extend(quote! {
                        for v in &self.#field { node.add_child(#tag, v.to_node()); }
                    });
                    self.list_accessors(p, parts, &quote! { #ty });
                } else {
                    parts.fields.extend(quote! { #vis #field: Option<Box<#ty>>, });
                    parts.ctor.extend(quote! {
                        #field: node
                            .first_child(#tag)
                            .map(|child| Box::new(#ty::from_node(child))),
                    });
                    parts.fill.extend(quote! {
                        if let Some(v) = &self.#field { node.add_child(#tag, v.to_node()); }
                    });
                    if self.config.wants_accessors() {
                        let setter = field.setter();
                        let notify = self.notify(p);
                        parts.accessors.extend(quote! {
                            pub fn #field(&self) -> Option<&#ty> { self.#field.as_deref() }
                            pub fn #setter(&mut self, value: Option<Box<#ty>>) {
                                self.#field = value;
                                #notify
                            }
                        });
                    }
                }
            }
            ResolvedType::Node { unresolved } => {
                let warning = unresolved.as_ref().map(|n| {
                    warnings.push(format!(
                        "{}: unresolved type reference `{n}` for property {}",
                        self.compiled.name, p.name
                    ));
                    format!("unresolved type reference `{n}`")
                });
                parts.fields.extend(doc_format_and_generate(
                    p.doc.as_deref(),
                    warning.as_deref(),
                ));
                if p.is_list {
                    parts.fields.extend(quote! { #vis #field: Vec<#rt::XmlNode>, });
                    parts.ctor.extend(quote! {
                        #field: node.children_named(#tag).cloned().collect(),
                    });
                    parts.fill.extend(quote! {
                        for v in &self.#field { node.add_child(#tag, v.clone()); }
                    });
                    self.list_accessors(p, parts, &quote! { #rt::XmlNode });
                } else {
                    parts
                        .fields
                        .extend(quote! { #vis #field: Option<#rt::XmlNode>, });
                    parts.ctor.extend(quote! {
                        #field: node.first_child(#tag).cloned(),
                    });
                    parts.fill.extend(quote! {
                        if let Some(v) = &self.#field { node.add_child(#tag, v.clone()); }
                    });
                    if self.config.wants_accessors() {
                        let setter = field.setter();
                        let notify = self.notify(p);
                        parts.accessors.extend(quote! {
                            pub fn #field(&self) -> Option<&#rt::XmlNode> { self.#field.as_ref() }
                            pub fn #setter(&mut self, value: Option<#rt::XmlNode>) {
                                self.#field = value;
                                #notify
                            }
                        });
                    }
                }
            }
            resolved => {
                let (ty, scalar) = leaf_of(resolved);
                parts.fields.extend(doc_format_and_generate(p.doc.as_deref(), None));
                if p.is_list {
                    parts.fields.extend(quote! { #vis #field: Vec<#ty>, });
                    let ctor = match scalar {
                        Scalar::Text => quote! {
                            node.children_named(#tag)
                                .filter_map(|child| child.text.clone())
                                .collect()
                        },
                        Scalar::Int => quote! {
                            node.children_named(#tag)
                                .filter_map(|child| {
                                    child.text.as_deref().and_then(#rt::bind::parse_int)
                                })
                                .collect()
                        },
                        Scalar::Float => quote! {
                            node.children_named(#tag)
                                .filter_map(|child| {
                                    child.text.as_deref().and_then(#rt::bind::parse_float)
                                })
                                .collect()
                        },
                        Scalar::Bool => quote! {
                            node.children_named(#tag)
                                .filter_map(|child| {
                                    child.text.as_deref().and_then(#rt::bind::parse_bool)
                                })
                                .collect()
                        },
                    };
                    parts.ctor.extend(quote! { #field: #ctor, });
                    let serialized = scalar_text(rt, scalar);
                    parts.fill.extend(quote! {
                        for v in &self.#field {
                            node.add_child(#tag, #rt::XmlNode::text_node(#serialized));
                        }
                    });
                    self.list_accessors(p, parts, &ty);
                } else {
                    parts.fields.extend(quote! { #vis #field: Option<#ty>, });
                    let ctor = match scalar {
                        Scalar::Text => quote! { node.child_text(#tag).map(str::to_string) },
                        Scalar::Int => {
                            quote! { node.child_text(#tag).and_then(#rt::bind::parse_int) }
                        }
                        Scalar::Float => {
                            quote! { node.child_text(#tag).and_then(#rt::bind::parse_float) }
                        }
                        Scalar::Bool => {
                            quote! { node.child_text(#tag).and_then(#rt::bind::parse_bool) }
                        }
                    };
                    parts.ctor.extend(quote! { #field: #ctor, });
                    let serialized = scalar_text(rt, scalar);
                    parts.fill.extend(quote! {
                        if let Some(v) = &self.#field {
                            node.add_child(#tag, #rt::XmlNode::text_node(#serialized));
                        }
                    });
                    match scalar {
                        Scalar::Text => self.single_text_accessors(p, parts),
                        _ => self.single_copy_accessors(p, parts, &ty),
                    }
                }
            }
        }
    }

    /// Leaf representation for attribute/text positions. Anything that
    /// is not scalar degrades to text.
    fn leaf(&self, p: &PropertyDesc, warnings: &mut Vec<String>) -> (TokenStream, Scalar) {
        let resolved = self.table.resolve(&p.declared_type);
        if let ResolvedType::Node {
            unresolved: Some(n),
        } = &resolved
        {
            warnings.push(format!(
                "{}: unresolved type reference `{n}` for property {}",
                self.compiled.name, p.name
            ));
        }
        leaf_of(resolved)
    }

    fn single_copy_accessors(&self, p: &PropertyDesc, parts: &mut Parts, ty: &TokenStream) {
        if !self.config.wants_accessors() {
            return;
        }
        let field = FieldName::new(&p.name);
        let setter = field.setter();
        let notify = self.notify(p);
        parts.accessors.extend(quote! {
            pub fn #field(&self) -> Option<#ty> { self.#field }
            pub fn #setter(&mut self, value: Option<#ty>) {
                self.#field = value;
                #notify
            }
        });
    }

    fn single_text_accessors(&self, p: &PropertyDesc, parts: &mut Parts) {
        if !self.config.wants_accessors() {
            return;
        }
        let field = FieldName::new(&p.name);
        let setter = field.setter();
        let notify = self.notify(p);
        parts.accessors.extend(quote! {
            pub fn #field(&self) -> Option<&str> { self.#field.as_deref() }
            pub fn #setter(&mut self, value: Option<String>) {
                self.#field = value;
                #notify
            }
        });
    }

    fn list_accessors(&self, p: &PropertyDesc, parts: &mut Parts, ty: &TokenStream) {
        if !self.config.wants_accessors() {
            return;
        }
        let field = FieldName::new(&p.name);
        let setter = field.setter();
        let notify = self.notify(p);
        parts.accessors.extend(quote! {
            pub fn #field(&self) -> &[#ty] { &self.#field }
            pub fn #setter(&mut self, value: Vec<#ty>) {
                self.#field = value;
                #notify
            }
        });
    }
}

/// Attribute name without the marker, as written in documents.
fn attr_local(p: &PropertyDesc) -> &str {
    let raw = p.xml_name.inner().as_str();
    raw.strip_prefix(ATTR_MARKER).unwrap_or(raw)
}

fn leaf_of(resolved: ResolvedType) -> (TokenStream, Scalar) {
    match resolved {
        ResolvedType::Scalar(scalar) => (scalar_type_tokens(scalar), scalar),
        ResolvedType::SimpleAlias { name, scalar } => {
            let ty = TypeName::new(&name);
            (quote! { #ty }, scalar)
        }
        _ => (scalar_type_tokens(Scalar::Text), Scalar::Text),
    }
}

fn scalar_text(rt: &syn::Path, scalar: Scalar) -> TokenStream {
    match scalar {
        Scalar::Text => quote! { v.clone() },
        Scalar::Int | Scalar::Float => quote! { v.to_string() },
        Scalar::Bool => quote! { #rt::bind::fmt_bool(*v) },
    }
}
