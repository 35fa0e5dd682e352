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

//! Generator manifest.
//!
//! This module defines the file format of the generator manifest. The
//! manifest carries defaults for every generation option and the
//! optional header template prepended to each written artifact.
//! Command-line flags override manifest values.

use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Read as _;
use std::path::Path;
use toml::de::Error as TomlError;

/// Manifest that defines generation defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorManifest {
    pub text_property: Option<String>,
    pub transparent_attributes: Option<bool>,
    pub retain_schema_types: Option<bool>,
    pub retain_attribute_flags: Option<bool>,
    pub string_only: Option<bool>,
    pub accessors: Option<bool>,
    pub notify_changes: Option<bool>,
    pub runtime_path: Option<String>,
    pub split: Option<bool>,
    pub template: Option<Template>,
}

/// Textual substitution points applied to written artifacts.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Template {
    /// Header prepended to every artifact. Recognized markers:
    /// `%{file}` (artifact file name) and `%{schema}` (input schema
    /// path).
    pub header: Option<String>,
}

impl GeneratorManifest {
    /// Read a generator manifest from a toml file.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if the file cannot be read.
    /// - `Error::Toml` if the content is not a valid manifest.
    pub fn read(fname: &Path) -> Result<Self, Error> {
        let mut file = File::open(fname).map_err(Error::Io)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(Error::Io)?;
        toml::from_str(&content).map_err(Error::Toml)
    }

    /// Header text for one artifact with markers substituted.
    #[must_use]
    pub fn header(&self, file: &str, schema: &str) -> Option<String> {
        self.template
            .as_ref()
            .and_then(|t| t.header.as_ref())
            .map(|h| substitute(h, &[("file", file), ("schema", schema)]))
    }
}

/// Replace `%{key}` markers.
#[must_use]
pub fn substitute(template: &str, markers: &[(&str, &str)]) -> String {
    markers.iter().fold(template.to_string(), |out, (key, value)| {
        out.replace(&format!("%{{{key}}}"), value)
    })
}

#[derive(Debug)]
pub enum Error {
    Io(IoError),
    Toml(TomlError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(err) => write!(f, "input/output error: {err}"),
            Self::Toml(err) => write!(f, "manifest file format error: {err}"),
        }
    }
}

impl StdError for Error {}
