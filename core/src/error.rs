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

use quick_xml::Error as XmlError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Runtime binding errors.
#[derive(Debug)]
pub enum Error {
    /// XML could not be read.
    XmlRead(XmlError),
    /// XML could not be written.
    XmlWrite(XmlError),
    /// The document contains no root element.
    NoRootElement,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::XmlRead(err) => write!(f, "failed to read XML: {err}"),
            Self::XmlWrite(err) => write!(f, "failed to write XML: {err}"),
            Self::NoRootElement => "document contains no root element".fmt(f),
        }
    }
}

impl StdError for Error {}
