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

use crate::generator::casemungler;
use proc_macro2::Ident;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::ToTokens;
use quote::TokenStreamExt as _;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Keywords usable as raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Keywords not usable even as raw identifiers.
const RESERVED: &[&str] = &["self", "super", "crate", "_"];

/// Struct field name built from a property name.
///
/// Example of representation: `serial_number`
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct FieldName<'a>(&'a str);

impl<'a> FieldName<'a> {
    #[must_use]
    pub const fn new(v: &'a str) -> Self {
        Self(v)
    }

    /// Ident of the matching setter.
    #[must_use]
    pub fn setter(&self) -> Ident {
        Ident::new(&format!("set_{}", munge(self.0)), Span::call_site())
    }
}

fn munge(raw: &str) -> String {
    let snake = casemungler::to_snake(raw);
    if snake.is_empty() {
        "field_".to_string()
    } else if RESERVED.contains(&snake.as_str()) {
        format!("{snake}_")
    } else {
        snake
    }
}

/// Ident for a generated module name, raw when it collides with a
/// keyword.
#[must_use]
pub fn module_ident(name: &str) -> Ident {
    if RAW_KEYWORDS.contains(&name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

impl ToTokens for FieldName<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = munge(self.0);
        if RAW_KEYWORDS.contains(&name.as_str()) {
            tokens.append(Ident::new_raw(&name, Span::call_site()));
        } else {
            tokens.append(Ident::new(&name, Span::call_site()));
        }
    }
}

impl Display for FieldName<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&munge(self.0))
    }
}

impl Debug for FieldName<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::FieldName;
    use quote::quote;
    use quote::ToTokens as _;

    #[test]
    fn attribute_marker_is_dropped() {
        assert_eq!(FieldName::new("@Age").to_string(), "age");
    }

    #[test]
    fn keywords_become_raw_identifiers() {
        let mut ts = proc_macro2::TokenStream::new();
        FieldName::new("Type").to_tokens(&mut ts);
        assert_eq!(ts.to_string(), quote! { r#type }.to_string());
    }

    #[test]
    fn reserved_words_get_a_suffix() {
        assert_eq!(FieldName::new("Self").to_string(), "self_");
    }

    #[test]
    fn setter_name() {
        assert_eq!(FieldName::new("@Age").setter().to_string(), "set_age");
    }
}
