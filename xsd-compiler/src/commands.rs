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

//! Command-line entry points for the compiler
//!
//! Provides two subcommands used by build scripts or users:
//! - `Compile`: parse one XSD document, compile its type model and
//!   generate Rust bindings to an output file or, in split mode, a
//!   directory of per-type files plus an index.
//! - `ListTypes`: print the compiled type model without generating.
//!
//! `Compile`:
//! - Reads the schema, builds a `SchemaSet` and compiles it with the
//!   configured text-property name and attribute naming.
//! - Runs the Rust generator, pretty-prints each artifact and writes
//!   it to the `output` path. Non-fatal diagnostics are returned as
//!   `warning:` display lines.

use crate::compiler::Config as CompilerConfig;
use crate::compiler::SchemaSet;
use crate::compiler::SimpleTypeVariant;
use crate::error::Error;
use crate::generator::manifest::GeneratorManifest;
use crate::generator::rust::Artifact;
use crate::generator::rust::Config as GeneratorConfig;
use crate::generator::rust::RustGenerator;
use clap::Subcommand;
use std::fs::create_dir_all;
use std::fs::write;
use std::fs::File;
use std::io::Read as _;
use std::path::PathBuf;

/// Default name of the synthesized text-value property.
pub const DEFAULT_TEXT_PROPERTY: &str = "value";

/// Default runtime crate path referenced by generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "xsdbind_core";

/// Compiler high-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile an XSD schema into Rust data bindings.
    Compile {
        /// XSD document to compile.
        #[arg(required = true)]
        xsd: String,
        /// Output file, or output directory in split mode.
        #[arg(short, long, default_value = "bindings.rs")]
        output: PathBuf,
        /// Generate one file per type plus an index instead of one
        /// combined file.
        #[arg(long)]
        split: bool,
        /// Generator manifest with option defaults and the header
        /// template. Command-line flags override manifest values.
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Module path of the runtime crate referenced by generated
        /// code, substituting a custom base-type implementation.
        #[arg(long)]
        runtime_path: Option<String>,
        /// Embed per-property original schema type names in metadata.
        #[arg(long)]
        retain_schema_types: bool,
        /// Embed per-property attribute-vs-element flags in metadata.
        #[arg(long)]
        retain_attribute_flags: bool,
        /// Strip the attribute marker from generated property names.
        #[arg(long)]
        transparent_attributes: bool,
        /// Name of the synthesized text-value property of
        /// simple-content types.
        #[arg(long)]
        text_property: Option<String>,
        /// Treat every leaf value as text, suppressing coercion.
        #[arg(long)]
        string_only: bool,
        /// Generate getter/setter pairs over hidden fields.
        #[arg(long)]
        accessors: bool,
        /// Make generated setters record mutations. Implies
        /// accessors.
        #[arg(long)]
        notify_changes: bool,
    },
    /// List the types a schema compiles to, without generating code.
    ListTypes {
        /// XSD document to inspect.
        #[arg(required = true)]
        xsd: String,
    },
}

/// Process a compiler command.
///
/// # Errors
///
/// Returns an error if command processing fails.
pub fn process_command(command: &Commands) -> Result<Vec<String>, Error> {
    match command {
        Commands::Compile {
            xsd,
            output,
            split,
            manifest,
            runtime_path,
            retain_schema_types,
            retain_attribute_flags,
            transparent_attributes,
            text_property,
            string_only,
            accessors,
            notify_changes,
        } => {
            let manifest = match manifest {
                Some(path) => GeneratorManifest::read(path).map_err(Error::Manifest)?,
                None => GeneratorManifest::default(),
            };
            let content = read_file(xsd)?;
            let schema_set =
                SchemaSet::parse(&content).map_err(|e| Error::Schema(xsd.clone(), e))?;
            let compiler_config = CompilerConfig {
                text_property: text_property
                    .clone()
                    .or_else(|| manifest.text_property.clone())
                    .unwrap_or_else(|| DEFAULT_TEXT_PROPERTY.to_string()),
                transparent_attributes: *transparent_attributes
                    || manifest.transparent_attributes.unwrap_or(false),
            };
            let compiled = schema_set
                .compile(&compiler_config)
                .map_err(Error::compile_error)?;
            let runtime = runtime_path
                .clone()
                .or_else(|| manifest.runtime_path.clone())
                .unwrap_or_else(|| DEFAULT_RUNTIME_PATH.to_string());
            let generator_config = GeneratorConfig {
                runtime_path: syn::parse_str(&runtime)
                    .map_err(|e| Error::InvalidRuntimePath(runtime.clone(), e))?,
                retain_schema_types: *retain_schema_types
                    || manifest.retain_schema_types.unwrap_or(false),
                retain_attribute_flags: *retain_attribute_flags
                    || manifest.retain_attribute_flags.unwrap_or(false),
                string_only: *string_only || manifest.string_only.unwrap_or(false),
                accessors: *accessors || manifest.accessors.unwrap_or(false),
                notify_changes: *notify_changes || manifest.notify_changes.unwrap_or(false),
                split: *split || manifest.split.unwrap_or(false),
            };
            let split_mode = generator_config.split;
            let generated = RustGenerator::new(compiled, generator_config).generate();

            let mut display_output: Vec<String> = generated
                .warnings
                .iter()
                .map(|w| format!("warning: {w}"))
                .collect();
            if split_mode {
                create_dir_all(output).map_err(|e| Error::WriteOutput(output.clone(), e))?;
                for artifact in &generated.artifacts {
                    let path = output.join(&artifact.file_name);
                    let text = render(artifact, &manifest, xsd)?;
                    write(&path, text).map_err(|e| Error::WriteOutput(path.clone(), e))?;
                }
                display_output.push(format!(
                    "{} files have been written to {}",
                    generated.artifacts.len(),
                    output.display()
                ));
            } else {
                for artifact in &generated.artifacts {
                    let text = render(artifact, &manifest, xsd)?;
                    write(output, text).map_err(|e| Error::WriteOutput(output.clone(), e))?;
                    display_output.push(format!("{} file has been written", output.display()));
                }
            }
            Ok(display_output)
        }
        Commands::ListTypes { xsd } => {
            let content = read_file(xsd)?;
            let schema_set =
                SchemaSet::parse(&content).map_err(|e| Error::Schema(xsd.clone(), e))?;
            let compiled = schema_set
                .compile(&CompilerConfig::default())
                .map_err(Error::compile_error)?;
            let mut display_output: Vec<String> = compiled
                .warnings
                .iter()
                .map(|w| format!("warning: {w}"))
                .collect();
            for t in &compiled.complex_types {
                let base = t
                    .parent
                    .as_ref()
                    .map(|p| format!(", extends {p}"))
                    .unwrap_or_default();
                display_output.push(format!(
                    "complex type {} ({} properties{base})",
                    t.name,
                    t.properties.len()
                ));
            }
            for t in &compiled.simple_types {
                let kind = match &t.variant {
                    SimpleTypeVariant::Enumeration { values, .. } => {
                        format!("enumeration of {} values", values.len())
                    }
                    SimpleTypeVariant::Alias { .. } => "alias".to_string(),
                    SimpleTypeVariant::List { .. } => "list".to_string(),
                    SimpleTypeVariant::Union { .. } => "union".to_string(),
                    SimpleTypeVariant::Opaque => "opaque".to_string(),
                };
                display_output.push(format!("simple type {} ({kind})", t.name));
            }
            Ok(display_output)
        }
    }
}

fn read_file(fname: &str) -> Result<String, Error> {
    let mut file = File::open(fname).map_err(|err| Error::Io(fname.to_string(), err))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|err| Error::Io(fname.to_string(), err))?;
    Ok(content)
}

fn render(artifact: &Artifact, manifest: &GeneratorManifest, schema: &str) -> Result<String, Error> {
    let syntax_tree =
        syn::parse_file(&artifact.tokens.to_string()).map_err(Error::ParseGenerated)?;
    let body = prettyplease::unparse(&syntax_tree);
    Ok(match manifest.header(&artifact.file_name, schema) {
        Some(header) => format!("{header}{body}"),
        None => body,
    })
}
