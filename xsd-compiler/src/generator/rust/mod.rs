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

//! Rust code generation over the compiled type model.

/// Configuration of generation.
pub mod config;

/// Doc comment generation.
pub mod doc;

/// Enumerations and aliases.
pub mod enum_def;

/// Struct field names.
pub mod field_name;

/// Output assembly: single file or per-type files with an index.
pub mod mod_def;

/// Struct generation.
pub mod struct_def;

/// Type names.
pub mod type_name;

use crate::compiler::Compiled;
use crate::generator::converter::Scalar;
use proc_macro2::TokenStream;
use quote::quote;

/// Reexport `Config` to the level of the generator.
pub type Config = config::Config;
/// Reexport `FieldName` to the level of the generator.
pub type FieldName<'a> = field_name::FieldName<'a>;
/// Reexport `TypeName` to the level of the generator.
pub type TypeName<'a> = type_name::TypeName<'a>;
/// Reexport `StructDef` to the level of the generator.
pub type StructDef<'a> = struct_def::StructDef<'a>;
/// Reexport `EnumDef` to the level of the generator.
pub type EnumDef<'a> = enum_def::EnumDef<'a>;

/// One generated output file.
#[derive(Debug)]
pub struct Artifact {
    /// File name relative to the output location.
    pub file_name: String,
    pub tokens: TokenStream,
}

/// Generation result: artifacts plus non-fatal diagnostics.
#[derive(Debug)]
pub struct Generated {
    pub artifacts: Vec<Artifact>,
    pub warnings: Vec<String>,
}

/// Rust generator over a compiled schema.
pub struct RustGenerator {
    compiled: Compiled,
    config: Config,
}

impl RustGenerator {
    #[must_use]
    pub const fn new(compiled: Compiled, config: Config) -> Self {
        Self { compiled, config }
    }

    /// Generate all artifacts. Unresolved references surface here as
    /// warnings and visible markers, never as failures.
    #[must_use]
    pub fn generate(&self) -> Generated {
        if self.config.split {
            mod_def::split(&self.compiled, &self.config)
        } else {
            mod_def::single(&self.compiled, &self.config)
        }
    }
}

/// Rust type of a scalar representation.
#[must_use]
pub fn scalar_type_tokens(scalar: Scalar) -> TokenStream {
    match scalar {
        Scalar::Text => quote! { String },
        Scalar::Int => quote! { i64 },
        Scalar::Float => quote! { f64 },
        Scalar::Bool => quote! { bool },
    }
}
