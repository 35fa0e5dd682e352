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

use std::env::var;
use std::path::PathBuf;
use xsdbind_compiler::commands::process_command;
use xsdbind_compiler::commands::Commands;
use xsdbind_compiler::Error;

fn main() -> Result<(), Error> {
    let out_dir = PathBuf::from(var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let schema = "./schemas/library.xsd";
    println!("cargo:rerun-if-changed={schema}");

    process_command(&Commands::Compile {
        xsd: schema.to_string(),
        output: out_dir.join("library.rs"),
        split: false,
        manifest: None,
        runtime_path: None,
        retain_schema_types: true,
        retain_attribute_flags: true,
        transparent_attributes: false,
        text_property: None,
        string_only: false,
        accessors: false,
        notify_changes: false,
    })?;
    Ok(())
}
