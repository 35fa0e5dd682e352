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

use crate::xsd::names::XsdName;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Compilation error kinds.
///
/// Everything that still allows deriving a property list is recovered
/// from locally and reported as a warning, not an error. These variants
/// are the cases where the schema cannot be interpreted at all.
#[derive(Debug)]
pub enum Error {
    /// The schema root element cannot be located.
    SchemaRootNotFound,
    /// A top-level declaration carries a name unusable as a type name.
    InvalidTypeName(String),
    /// Error while extracting a type.
    Type(XsdName, Box<Error>),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::SchemaRootNotFound => {
                "schema root element not found (expected xs:schema)".fmt(f)
            }
            Self::InvalidTypeName(name) => write!(f, "invalid type name: {name}"),
            Self::Type(name, err) => write!(f, "while extracting type: {name}\n{err}"),
        }
    }
}

impl StdError for Error {}
