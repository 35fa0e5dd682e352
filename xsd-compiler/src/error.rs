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

use crate::compiler::Error as CompileError;
use crate::generator::manifest::Error as ManifestError;
use crate::xsd::reader::ReadError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::path::PathBuf;

/// XSD compiler errors.
#[derive(Debug)]
pub enum Error {
    Io(String, IoError),
    Schema(String, ReadError),
    Compile(Vec<String>),
    Manifest(ManifestError),
    InvalidRuntimePath(String, syn::Error),
    ParseGenerated(syn::Error),
    WriteOutput(PathBuf, IoError),
}

// Passing by reference would break possibility to use it as
// `map_err(Error::compile_error)`.
#[allow(clippy::needless_pass_by_value)]
impl Error {
    pub fn compile_error(e: CompileError) -> Self {
        Self::Compile(
            format!("{e}")
                .split('\n')
                .map(ToString::to_string)
                .collect(),
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(fname, error) => write!(f, "input/output error: file: {fname}: {error}"),
            Self::Schema(fname, error) => {
                write!(f, "schema read error: file: {fname}: {error}")
            }
            Self::Compile(lines) => {
                write!(f, "compilation error:")?;
                lines
                    .iter()
                    .enumerate()
                    .try_for_each(|(no, line)| write!(f, "\n #{no}: {line}"))
            }
            Self::Manifest(error) => write!(f, "generator manifest error: {error}"),
            Self::InvalidRuntimePath(path, error) => {
                write!(f, "invalid runtime path {path}: {error}")
            }
            Self::ParseGenerated(error) => {
                write!(f, "failed to parse generated file: {error}")
            }
            Self::WriteOutput(fname, error) => {
                write!(f, "failed write output file: {}: {error}", fname.display())
            }
        }
    }
}

impl StdError for Error {}
