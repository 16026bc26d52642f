/*
 * Copyright (c) 2021 Works Applications Co., Ltd.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! A Japanese morphological analyzer over MeCab-compatible dictionaries:
//! decodes a double-array `sys.dic` and a `matrix.bin` connection-cost
//! table, builds a lattice of candidate segmentations for an input
//! text, and finds its minimum-cost path.

pub mod cost;
pub mod dic;
pub mod error;
pub mod input_text;
pub mod lattice;
pub mod output;
pub mod search;

#[cfg(test)]
pub mod tests_support;

pub use error::{AnalyzerError, AnalyzerResult};

pub mod prelude {
    pub use crate::{
        dic::dictionary::Dictionary,
        lattice::{build as build_lattice, Lattice},
        search::shortest_path,
        AnalyzerError, AnalyzerResult,
    };
}
