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

//! Validated schema identifiers.

use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;
use tagged_types::TaggedType;

/// Raw XML tag or attribute name exactly as written in a document.
/// May carry the attribute marker or the text-content key; never used
/// as an identifier without going through the generator's name mungers.
pub type XmlName = TaggedType<String, XmlNameTag>;
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display)]
#[capability(inner_access)]
pub enum XmlNameTag {}

#[derive(Debug)]
pub enum Error {
    /// The string is not a valid schema name.
    InvalidName(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidName(name) => write!(f, "invalid schema name {name}"),
        }
    }
}

impl StdError for Error {}

/// Name of a schema type, group or element declaration.
///
/// Normative: an NCName. Starts with a letter or underscore, followed
/// by letters, digits, underscores, hyphens or dots. Colons are
/// rejected; namespace prefixes must be split off before parsing.
#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct XsdName(String);

impl XsdName {
    #[must_use]
    pub const fn inner(&self) -> &String {
        &self.0
    }

    /// Deterministic name of a promoted inline simple type, derived
    /// from its owner type and owning declaration so re-runs are
    /// stable.
    #[must_use]
    pub fn synthetic(owner: &XsdName, property: &XsdName) -> Self {
        Self(format!("{owner}_{property}_Type"))
    }
}

impl Display for XsdName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl AsRef<str> for XsdName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for XsdName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        chars
            .next()
            .and_then(|first| {
                if first.is_alphabetic() || first == '_' {
                    Some(())
                } else {
                    None
                }
            })
            .ok_or_else(|| Error::InvalidName(s.into()))?;
        if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '-' && c != '.') {
            Err(Error::InvalidName(s.into()))
        } else {
            Ok(Self(s.into()))
        }
    }
}

#[cfg(test)]
mod test {
    use super::XsdName;

    #[test]
    fn accepts_ncnames() {
        assert!("Person".parse::<XsdName>().is_ok());
        assert!("_private".parse::<XsdName>().is_ok());
        assert!("release-2.0".parse::<XsdName>().is_ok());
    }

    #[test]
    fn rejects_non_names() {
        assert!("".parse::<XsdName>().is_err());
        assert!("9lives".parse::<XsdName>().is_err());
        assert!("xs:string".parse::<XsdName>().is_err());
        assert!("a b".parse::<XsdName>().is_err());
    }

    #[test]
    fn synthetic_names_are_stable() {
        let owner: XsdName = "Order".parse().unwrap();
        let prop: XsdName = "Status".parse().unwrap();
        assert_eq!(
            XsdName::synthetic(&owner, &prop).inner(),
            "Order_Status_Type"
        );
    }
}
