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

//! Dependency ordering.
//!
//! Depth-first topological sort over the compiled complex types.
//! Dependency names that do not resolve to another compiled type
//! (built-ins, simple types, external bases) are ignored. The visited
//! guard makes revisiting a no-op, which also absorbs cycles.

use crate::compiler::compiled::ComplexType;
use crate::xsd::names::XsdName;
use std::collections::HashMap;

/// Emission order of `types` as indices into the input slice.
#[must_use]
pub fn topo_sort(types: &[ComplexType]) -> Vec<usize> {
    let index: HashMap<&XsdName, usize> = types
        .iter()
        .enumerate()
        .map(|(i, t)| (&t.name, i))
        .collect();
    let mut visited = vec![false; types.len()];
    let mut order = Vec::with_capacity(types.len());
    for i in 0..types.len() {
        visit(i, types, &index, &mut visited, &mut order);
    }
    order
}

fn visit(
    i: usize,
    types: &[ComplexType],
    index: &HashMap<&XsdName, usize>,
    visited: &mut Vec<bool>,
    order: &mut Vec<usize>,
) {
    if visited[i] {
        return;
    }
    visited[i] = true;
    for dependency in types[i].dependencies() {
        if let Some(&target) = index.get(dependency) {
            visit(target, types, index, visited, order);
        }
    }
    order.push(i);
}
