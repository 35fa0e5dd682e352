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

//! Runtime support for XSD-generated data bindings.
//!
//! Generated types implement [`XmlBind`] over the [`XmlNode`] document
//! tree. The compiler emits one struct per complex type, one enum or
//! alias per simple type, and a [`TypeMeta`] table describing each
//! property so applications can introspect the binding without parsing
//! the schema themselves.

/// XmlBind trait and construction/serialization helpers.
pub mod bind;

/// Runtime errors.
pub mod error;

/// Typed per-property binding metadata.
pub mod meta;

/// XML document tree and quick-xml based parse/write.
pub mod node;

/// Single-vs-repeated child container.
pub mod one_or_many;

pub use bind::ChangeLog;
pub use bind::XmlBind;
pub use error::Error;
pub use meta::PropertyMeta;
pub use meta::TypeMeta;
pub use node::XmlNode;
pub use one_or_many::OneOrMany;
