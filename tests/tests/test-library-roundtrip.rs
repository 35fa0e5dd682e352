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

use xsdbind_core::XmlBind;

fn book(isbn: &str, title: &str) -> String {
    format!(
        r#"<Book Isbn="{isbn}">
             <Title>{title}</Title>
             <Author Age="57"><Name>Frank</Name></Author>
             <Price Currency="EUR">12.5</Price>
             <Status>Released</Status>
           </Book>"#
    )
}

#[test]
fn single_occurrence_coerces_to_one_entry_list() {
    let xml = format!(r#"<Library Name="Main">{}</Library>"#, book("1", "Dune"));
    let library = xsdbind_tests::library::Library::from_xml(&xml).unwrap();
    assert_eq!(library.name.as_deref(), Some("Main"));
    assert_eq!(library.book.len(), 1);
    let first = &library.book[0];
    assert_eq!(first.isbn.as_deref(), Some("1"));
    assert_eq!(first.title.as_deref(), Some("Dune"));
}

#[test]
fn three_occurrences_coerce_to_three_entry_list() {
    let xml = format!(
        r#"<Library Name="Main">{}{}{}</Library>"#,
        book("1", "Dune"),
        book("2", "Messiah"),
        book("3", "Children")
    );
    let library = xsdbind_tests::library::Library::from_xml(&xml).unwrap();
    assert_eq!(library.book.len(), 3);
    let titles: Vec<&str> = library
        .book
        .iter()
        .filter_map(|b| b.title.as_deref())
        .collect();
    assert_eq!(titles, ["Dune", "Messiah", "Children"]);
}

#[test]
fn attributes_and_nested_values_round_trip() {
    let xml = format!(r#"<Library Name="Main">{}</Library>"#, book("1", "Dune"));
    let library = xsdbind_tests::library::Library::from_xml(&xml).unwrap();
    let first = &library.book[0];
    assert_eq!(first.author[0].age, Some(57));
    assert_eq!(first.author[0].name.as_deref(), Some("Frank"));
    let price = first.price.as_ref().unwrap();
    assert_eq!(price.value, Some(12.5));
    assert_eq!(price.currency.as_deref(), Some("EUR"));

    let serialized = library.to_xml().unwrap();
    let reparsed = xsdbind_tests::library::Library::from_xml(&serialized).unwrap();
    assert_eq!(reparsed, library);
}

#[test]
fn enumeration_accepts_exactly_the_schema_values() {
    use xsdbind_tests::library::Status;
    assert_eq!(Status::VALUES, ["Released", "Draft", "Deprecated"]);
    assert_eq!(Status::parse("Draft"), Some(Status::Draft));
    assert_eq!(Status::parse("Retired"), None);
    assert_eq!(Status::Deprecated.as_str(), "Deprecated");
}

#[test]
fn metadata_describes_the_binding() {
    use xsdbind_tests::library::Person;
    let age = Person::META.property("@Age").unwrap();
    assert_eq!(age.xml_name, "@Age");
    assert_eq!(age.is_attribute, Some(true));
    assert_eq!(age.schema_type, Some("xs:int"));
    assert!(!age.is_list);
    let name = Person::META.property("Name").unwrap();
    assert_eq!(name.is_attribute, Some(false));
    assert_eq!(Person::META.name, "Person");
}

#[test]
fn status_element_binds_as_enum() {
    let xml = format!(r#"<Library>{}</Library>"#, book("1", "Dune"));
    let library = xsdbind_tests::library::Library::from_xml(&xml).unwrap();
    assert_eq!(
        library.book[0].status,
        Some(xsdbind_tests::library::Status::Released)
    );
}
