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

//! Output assembly.
//!
//! Single mode produces one combined file: simple types first, then
//! complex types in dependency order. Split mode produces one file per
//! complex type, a denormalized `simple_types` file and a `mod.rs`
//! index enumerating them.

use crate::compiler::Compiled;
use crate::compiler::SimpleTypeVariant;
use crate::generator::converter::TypeTable;
use crate::generator::rust::enum_def::AliasDef;
use crate::generator::rust::field_name::module_ident;
use crate::generator::rust::Artifact;
use crate::generator::rust::Config;
use crate::generator::rust::EnumDef;
use crate::generator::rust::FieldName;
use crate::generator::rust::Generated;
use crate::generator::rust::StructDef;
use crate::generator::rust::TypeName;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;

/// File name of the denormalized simple-type artifact.
pub const SIMPLE_TYPES_MODULE: &str = "simple_types";

/// Generate one combined artifact.
#[must_use]
pub fn single(compiled: &Compiled, config: &Config) -> Generated {
    let mut warnings = compiled.warnings.clone();
    let table = TypeTable::build(compiled, config.string_only);
    let mut tokens = prelude(config);
    simple_types(compiled, &table, &mut tokens);
    for ct in &compiled.complex_types {
        StructDef {
            compiled: ct,
            table: &table,
            config,
        }
        .generate(&mut tokens, &mut warnings);
    }
    Generated {
        artifacts: vec![Artifact {
            file_name: "bindings.rs".to_string(),
            tokens,
        }],
        warnings,
    }
}

/// Generate one artifact per complex type plus the simple-type file
/// and the index.
#[must_use]
pub fn split(compiled: &Compiled, config: &Config) -> Generated {
    let mut warnings = compiled.warnings.clone();
    let table = TypeTable::build(compiled, config.string_only);
    let mut artifacts = Vec::new();

    let mut simple = TokenStream::new();
    simple_types(compiled, &table, &mut simple);
    artifacts.push(Artifact {
        file_name: format!("{SIMPLE_TYPES_MODULE}.rs"),
        tokens: simple,
    });

    let mut used = HashSet::new();
    used.insert(SIMPLE_TYPES_MODULE.to_string());
    used.insert("mod".to_string());
    let mut index = TokenStream::new();
    let simple_ident = module_ident(SIMPLE_TYPES_MODULE);
    index.extend(quote! {
        mod #simple_ident;
        pub use #simple_ident::*;
    });

    for ct in &compiled.complex_types {
        let module = unique_module_name(&FieldName::new(ct.name.as_ref()).to_string(), &mut used);
        let module_ident = module_ident(&module);
        let mut tokens = prelude(config);
        tokens.extend(quote! {
            #[allow(unused_imports)]
            use super::*;
        });
        StructDef {
            compiled: ct,
            table: &table,
            config,
        }
        .generate(&mut tokens, &mut warnings);
        artifacts.push(Artifact {
            file_name: format!("{module}.rs"),
            tokens,
        });
        index.extend(quote! {
            mod #module_ident;
            pub use #module_ident::*;
        });
    }

    artifacts.push(Artifact {
        file_name: "mod.rs".to_string(),
        tokens: index,
    });
    Generated {
        artifacts,
        warnings,
    }
}

fn prelude(config: &Config) -> TokenStream {
    let rt = &config.runtime_path;
    quote! {
        #[allow(unused_imports)]
        use #rt::XmlBind;
    }
}

fn simple_types(compiled: &Compiled, table: &TypeTable, tokens: &mut TokenStream) {
    for st in &compiled.simple_types {
        match &st.variant {
            SimpleTypeVariant::Enumeration { values, .. } => EnumDef {
                name: TypeName::new(&st.name),
                values,
                doc: st.doc.as_deref(),
            }
            .generate(tokens),
            _ => AliasDef {
                name: TypeName::new(&st.name),
                scalar: table.alias_scalar(&st.name),
                doc: st.doc.as_deref(),
            }
            .generate(tokens),
        }
    }
}

fn unique_module_name(base: &str, used: &mut HashSet<String>) -> String {
    let base = if base.is_empty() {
        "generated_type".to_string()
    } else {
        base.to_string()
    };
    let mut candidate = base.clone();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}_{n}");
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compiler::Config as CompilerConfig;
    use crate::compiler::SchemaSet;

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
         <xs:complexType name="Person">
           <xs:sequence>
             <xs:element name="Name" type="xs:string"/>
             <xs:element name="Nickname" type="xs:string" maxOccurs="unbounded"/>
             <xs:element name="Home" type="Address"/>
           </xs:sequence>
           <xs:attribute name="Age" type="xs:int"/>
         </xs:complexType>
         <xs:complexType name="Address">
           <xs:sequence>
             <xs:element name="City" type="xs:string"/>
           </xs:sequence>
         </xs:complexType>
         <xs:simpleType name="Status">
           <xs:restriction base="xs:string">
             <xs:enumeration value="Released"/>
             <xs:enumeration value="Draft"/>
             <xs:enumeration value="Deprecated"/>
           </xs:restriction>
         </xs:simpleType>
       </xs:schema>"#;

    fn generated(config: Config) -> Generated {
        let compiled = SchemaSet::parse(SCHEMA)
            .unwrap()
            .compile(&CompilerConfig::default())
            .unwrap();
        if config.split {
            split(&compiled, &config)
        } else {
            single(&compiled, &config)
        }
    }

    #[test]
    fn single_output_is_parsable_rust() {
        let out = generated(Config::default());
        assert_eq!(out.artifacts.len(), 1);
        let code = out.artifacts[0].tokens.to_string();
        syn::parse_file(&code).expect("generated code must parse");
        assert!(code.contains("pub struct Person"));
        assert!(code.contains("pub enum Status"));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn dependency_order_puts_address_before_person() {
        let out = generated(Config::default());
        let code = out.artifacts[0].tokens.to_string();
        let address = code.find("pub struct Address").unwrap();
        let person = code.find("pub struct Person").unwrap();
        assert!(address < person);
    }

    #[test]
    fn split_output_has_index_and_simple_types() {
        let out = generated(Config {
            split: true,
            ..Config::default()
        });
        let names: Vec<&str> = out
            .artifacts
            .iter()
            .map(|a| a.file_name.as_str())
            .collect();
        assert!(names.contains(&"simple_types.rs"));
        assert!(names.contains(&"person.rs"));
        assert!(names.contains(&"address.rs"));
        assert!(names.contains(&"mod.rs"));
        for artifact in &out.artifacts {
            syn::parse_file(&artifact.tokens.to_string())
                .unwrap_or_else(|e| panic!("{} must parse: {e}", artifact.file_name));
        }
        let index = &out
            .artifacts
            .iter()
            .find(|a| a.file_name == "mod.rs")
            .unwrap()
            .tokens
            .to_string();
        assert!(index.contains("mod person"));
        assert!(index.contains("pub use person"));
    }

    #[test]
    fn unresolved_reference_warns_and_marks_generated_code() {
        let schema = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="T">
               <xs:sequence>
                 <xs:element name="Payload" type="External"/>
               </xs:sequence>
             </xs:complexType>
           </xs:schema>"#;
        let compiled = SchemaSet::parse(schema)
            .unwrap()
            .compile(&CompilerConfig::default())
            .unwrap();
        let out = single(&compiled, &Config::default());
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("External"));
        let code = out.artifacts[0].tokens.to_string();
        assert!(code.contains("WARNING"));
        syn::parse_file(&code).expect("generation must not fail on unresolved references");
    }

    #[test]
    fn metadata_retention_is_opt_in() {
        let without = generated(Config::default());
        let code = without.artifacts[0].tokens.to_string();
        assert!(!code.contains("Some (\"xs:string\")"));
        let with = generated(Config {
            retain_schema_types: true,
            retain_attribute_flags: true,
            ..Config::default()
        });
        let code = with.artifacts[0].tokens.to_string();
        assert!(code.contains("schema_type : Some (\"xs:string\")"));
        assert!(code.contains("is_attribute : Some (true)"));
    }

    #[test]
    fn accessors_hide_fields_and_notify() {
        let out = generated(Config {
            notify_changes: true,
            ..Config::default()
        });
        let code = out.artifacts[0].tokens.to_string();
        syn::parse_file(&code).expect("generated code must parse");
        assert!(!code.contains("pub name : Option"));
        assert!(code.contains("pub fn set_name"));
        assert!(code.contains("changes . record (\"Name\")"));
    }

    #[test]
    fn string_only_uses_text_for_every_leaf() {
        let out = generated(Config {
            string_only: true,
            ..Config::default()
        });
        let code = out.artifacts[0].tokens.to_string();
        assert!(!code.contains("parse_int"));
        assert!(code.contains("age : Option < String >"));
    }
}
