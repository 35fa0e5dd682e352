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

//! Generation of simple types: enumerations and aliases.

use crate::generator::converter::Scalar;
use crate::generator::rust::doc::format_and_generate as doc_format_and_generate;
use crate::generator::rust::scalar_type_tokens;
use crate::generator::rust::TypeName;
use heck::AsUpperCamelCase;
use proc_macro2::Ident;
use proc_macro2::Literal;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;

/// Enumeration simple type generated as a Rust enum.
#[derive(Debug)]
pub struct EnumDef<'a> {
    pub name: TypeName<'a>,
    pub values: &'a [String],
    pub doc: Option<&'a str>,
}

impl EnumDef<'_> {
    /// Generate the enum plus its lexical-value conversions. The
    /// accepted value set is exactly the schema's, in schema order.
    pub fn generate(&self, tokens: &mut TokenStream) {
        let name = self.name;
        let mut used = HashSet::new();
        let variants: Vec<Ident> = self
            .values
            .iter()
            .map(|v| variant_ident(v, &mut used))
            .collect();
        let literals: Vec<Literal> = self
            .values
            .iter()
            .map(|v| Literal::string(v))
            .collect();
        tokens.extend([
            doc_format_and_generate(self.doc, None),
            quote! {
                #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                pub enum #name { #(#variants,)* }
                impl #name {
                    /// Accepted lexical values, in schema order.
                    pub const VALUES: &'static [&'static str] = &[#(#literals),*];
                    /// Variant of a lexical value.
                    #[must_use]
                    pub fn parse(text: &str) -> Option<Self> {
                        match text {
                            #(#literals => Some(Self::#variants),)*
                            _ => None,
                        }
                    }
                    /// Lexical value of this variant.
                    #[must_use]
                    pub const fn as_str(&self) -> &'static str {
                        match self { #(Self::#variants => #literals,)* }
                    }
                }
            },
        ]);
    }
}

/// Non-enumeration simple type generated as an alias of its scalar
/// representation.
#[derive(Debug)]
pub struct AliasDef<'a> {
    pub name: TypeName<'a>,
    pub scalar: Scalar,
    pub doc: Option<&'a str>,
}

impl AliasDef<'_> {
    pub fn generate(&self, tokens: &mut TokenStream) {
        let name = self.name;
        let target = scalar_type_tokens(self.scalar);
        tokens.extend([
            doc_format_and_generate(self.doc, None),
            quote! { pub type #name = #target; },
        ]);
    }
}

fn variant_ident(value: &str, used: &mut HashSet<String>) -> Ident {
    let mut base = AsUpperCamelCase(value).to_string();
    if base.is_empty() || base.chars().next().map_or(true, char::is_numeric) {
        base = format!("V{base}");
    }
    if base == "Self" {
        base = "Self_".to_string();
    }
    let mut candidate = base.clone();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}{n}");
        n += 1;
    }
    Ident::new(&candidate, Span::call_site())
}
