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

use syn::Path;

/// Configuration of generation.
#[derive(Debug)]
pub struct Config {
    /// Module path of the runtime crate referenced by generated code.
    /// Overriding it substitutes a custom base-type implementation.
    pub runtime_path: Path,
    /// Embed per-property original schema type names in the metadata
    /// tables.
    pub retain_schema_types: bool,
    /// Embed per-property attribute-vs-element flags in the metadata
    /// tables.
    pub retain_attribute_flags: bool,
    /// Represent every leaf value as text, suppressing coercion.
    pub string_only: bool,
    /// Hide fields behind getter/setter pairs.
    pub accessors: bool,
    /// Make generated setters record mutations. Implies `accessors`.
    pub notify_changes: bool,
    /// Emit one file per type plus an index instead of one combined
    /// file.
    pub split: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime_path: syn::parse_str("xsdbind_core").expect("should always be parsed"),
            retain_schema_types: false,
            retain_attribute_flags: false,
            string_only: false,
            accessors: false,
            notify_changes: false,
            split: false,
        }
    }
}

impl Config {
    /// Accessors are generated either explicitly or as the carrier of
    /// change notification.
    #[must_use]
    pub const fn wants_accessors(&self) -> bool {
        self.accessors || self.notify_changes
    }
}
