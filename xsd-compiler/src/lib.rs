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

//! XSD compiler and Rust data-binding generator.
//!
//! Pipeline: the `xsd` module parses schema text into an ordered raw
//! tree and normalizes it into the canonical node shape; the `compiler`
//! module extracts complex/simple type declarations, derives a property
//! list per type and orders types by their dependencies; the
//! `generator` module emits Rust structs, enums and binding metadata
//! over the `xsdbind-core` runtime.

/// Command-line entry points.
pub mod commands;

/// Type extraction, property derivation and dependency ordering.
pub mod compiler;

/// Compiler top-level errors.
pub mod error;

/// Rust code generation.
pub mod generator;

/// Schema parsing and node normalization.
pub mod xsd;

pub use error::Error;
