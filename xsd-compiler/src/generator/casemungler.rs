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

/// Convert a schema name to a snake_case identifier. The attribute
/// marker is dropped; hyphens and dots become underscores.
#[must_use]
pub fn to_snake<S>(name: S) -> String
where
    S: AsRef<str>,
{
    let cleaned: String = name
        .as_ref()
        .trim_start_matches('@')
        .chars()
        .map(|c| if c == '-' || c == '.' { '_' } else { c })
        .collect();
    camel_to_words(&cleaned)
        .collect::<Vec<String>>()
        .join("_")
        .to_lowercase()
        .replace("__", "_")
}

fn camel_to_words(s: &str) -> impl Iterator<Item = String> {
    let chars: Vec<char> = s.chars().collect();

    chars
        .iter()
        .enumerate()
        .fold(vec![vec![]], |mut words: Vec<Vec<char>>, (i, &ch)| {
            // catch all situations where we need to separate stream of chars into words
            if i > 0 && ch.is_uppercase() && {
                let prev_char = chars[i - 1];

                // case 1: new word: transition from lower to uppercase (standard camelCase)
                prev_char.is_lowercase() ||
                    // case 2: new word: transition from an uppercase acronym letter to lowercase
                    (prev_char.is_uppercase() &&
                        i + 1 < chars.len() && chars[i + 1].is_lowercase() &&
                        // assume that the following 2+ lowercase letters are a new word
                        chars[(i + 1)..]
                            .iter()
                            .take_while(|&&c| c.is_lowercase())
                            .count() >= 2)
            } {
                words.push(vec![]);
            }

            if let Some(curr_word) = words.last_mut() {
                curr_word.push(ch);
            }
            words
        })
        .into_iter()
        .map(|w| w.into_iter().collect::<String>())
        .collect::<Vec<String>>()
        .into_iter()
}
