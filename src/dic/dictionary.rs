//! Ties the header, trie, token array, feature pile and connection
//! matrix together into one read-only, in-memory dictionary (§4.2–§4.4).
//!
//! Files are read fully into owned buffers; nothing here memory-maps.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::dic::header::Header;
use crate::dic::matrix::ConnectionMatrix;
use crate::dic::token::{feature_at, RawToken, TokenArray};
use crate::dic::trie::Trie;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::input_text::build_indexes;

pub struct Dictionary {
    header: Header,
    tokens: TokenArray,
    features: Vec<u8>,
    matrix: ConnectionMatrix,
    entries: HashMap<Vec<u8>, Vec<RawToken>>,
    prefixes: HashSet<Vec<u8>>,
    min_token_cost: i32,
    max_token_cost: i32,
    min_edge_cost: i32,
    max_edge_cost: i32,
}

impl Dictionary {
    pub fn from_paths(sys_dic: &Path, matrix_bin: &Path) -> AnalyzerResult<Dictionary> {
        let dic_bytes = fs::read(sys_dic)
            .map_err(AnalyzerError::from)
            .map_err(|e| e.with_context(format!("reading {}", sys_dic.display())))?;
        let matrix_bytes = fs::read(matrix_bin)
            .map_err(AnalyzerError::from)
            .map_err(|e| e.with_context(format!("reading {}", matrix_bin.display())))?;
        Dictionary::from_bytes(&dic_bytes, &matrix_bytes)
    }

    pub fn from_bytes(dic_bytes: &[u8], matrix_bytes: &[u8]) -> AnalyzerResult<Dictionary> {
        let (header, offset) = Header::parse(dic_bytes)?;

        let trie_start = offset;
        let trie_end = trie_start + header.trie_bytes as usize;
        let token_end = trie_end + header.token_bytes as usize;
        let feature_end = token_end + header.feature_bytes as usize;
        if feature_end > dic_bytes.len() {
            return Err(AnalyzerError::Format(format!(
                "sys.dic declares {} bytes of payload but file has only {}",
                feature_end - offset,
                dic_bytes.len() - offset
            )));
        }

        let trie = Trie::parse(&dic_bytes[trie_start..trie_end])?;
        let tokens = TokenArray::parse(&dic_bytes[trie_end..token_end])?;
        let features = dic_bytes[token_end..feature_end].to_vec();
        let matrix = ConnectionMatrix::parse(matrix_bytes)?;

        let mut entries: HashMap<Vec<u8>, Vec<RawToken>> = HashMap::new();
        let mut prefixes: HashSet<Vec<u8>> = HashSet::new();
        let mut surface_count = 0usize;
        for (surface, first, count) in trie.enumerate_all_entries() {
            let slice = tokens.slice(first, count)?;
            for boundary in proper_codepoint_prefixes(&surface)? {
                prefixes.insert(boundary);
            }
            entries
                .entry(surface)
                .and_modify(|existing| existing.extend_from_slice(slice))
                .or_insert_with(|| slice.to_vec());
            surface_count += 1;
        }

        let (min_token_cost, max_token_cost) = tokens.cost_bounds();
        let (min_edge_cost, max_edge_cost) = matrix.cost_bounds();

        log::info!(
            "loaded dictionary: {} surfaces, {} tokens, {}x{} matrix",
            surface_count,
            tokens.len(),
            matrix.left_edges(),
            matrix.right_edges(),
        );

        Ok(Dictionary {
            header,
            tokens,
            features,
            matrix,
            entries,
            prefixes,
            min_token_cost,
            max_token_cost,
            min_edge_cost,
            max_edge_cost,
        })
    }

    pub fn lookup(&self, surface: &[u8]) -> Option<&[RawToken]> {
        self.entries.get(surface).map(Vec::as_slice)
    }

    pub fn is_prefix(&self, surface: &[u8]) -> bool {
        self.prefixes.contains(surface)
    }

    pub fn feature(&self, token: &RawToken) -> AnalyzerResult<&str> {
        feature_at(&self.features, token.feature_offset)
    }

    pub fn matrix(&self) -> &ConnectionMatrix {
        &self.matrix
    }

    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn min_token_cost(&self) -> i32 {
        self.min_token_cost
    }

    pub fn max_token_cost(&self) -> i32 {
        self.max_token_cost
    }

    pub fn min_edge_cost(&self) -> i32 {
        self.min_edge_cost
    }

    pub fn max_edge_cost(&self) -> i32 {
        self.max_edge_cost
    }
}

/// Every proper, non-empty, codepoint-aligned prefix of `surface` (§4.4).
fn proper_codepoint_prefixes(surface: &[u8]) -> AnalyzerResult<Vec<Vec<u8>>> {
    let boundaries = build_indexes(surface)?;
    let mut out = Vec::new();
    for &end in &boundaries[1..boundaries.len() - 1] {
        out.push(surface[..end].to_vec());
    }
    Ok(out)
}
