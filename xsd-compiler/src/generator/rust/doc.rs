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

//! Generation of Rust doc by comment lines.

use proc_macro2::Delimiter;
use proc_macro2::Group;
use proc_macro2::Ident;
use proc_macro2::Literal;
use proc_macro2::Punct;
use proc_macro2::Spacing;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use proc_macro2::TokenTree;

/// Doc attributes for a declaration: its schema documentation plus an
/// optional visible warning marker for a human to review.
#[must_use]
pub fn format_and_generate(doc: Option<&str>, warning: Option<&str>) -> TokenStream {
    let mut lines = Vec::new();
    if let Some(doc) = doc {
        lines.push(format!(" {doc}"));
    }
    if let Some(warning) = warning {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!(" WARNING: {warning}"));
    }
    generate(&lines)
}

#[must_use]
pub fn generate(lines: &[impl ToString]) -> TokenStream {
    let mut ts = TokenStream::new();
    for l in lines {
        let mut attr_inner = TokenStream::new();
        attr_inner.extend([
            TokenTree::Ident(Ident::new("doc", Span::call_site())),
            TokenTree::Punct(Punct::new('=', Spacing::Alone)),
            TokenTree::Literal(Literal::string(&l.to_string())),
        ]);
        ts.extend([
            TokenTree::Punct(Punct::new('#', Spacing::Alone)),
            TokenTree::Group(Group::new(Delimiter::Bracket, attr_inner)),
        ]);
    }
    ts
}
