//! Lattice construction (§4.5): longest-prefix dictionary matches at
//! every codepoint boundary, with a single-codepoint `UNK` fallback
//! injected only at the earliest position no match has yet reached.

use crate::dic::dictionary::Dictionary;
use crate::error::AnalyzerResult;
use crate::input_text::build_indexes;
use crate::lattice::node::{LatticeToken, TokenKind};

pub struct Lattice {
    /// Codepoint index `i` -> byte offset; length `codepoint_count + 1`.
    pub boundaries: Vec<usize>,
    /// `slots[i]` holds every candidate token starting at codepoint `i`.
    pub slots: Vec<Vec<LatticeToken>>,
}

impl Lattice {
    pub fn codepoint_count(&self) -> usize {
        self.slots.len()
    }
}

pub fn build(dictionary: &Dictionary, text: &str) -> AnalyzerResult<Lattice> {
    let boundaries = build_indexes(text.as_bytes())?;
    let n = boundaries.len() - 1;
    let bytes = text.as_bytes();
    let mut slots: Vec<Vec<LatticeToken>> = Vec::with_capacity(n);
    let mut max_covered_byte = 0usize;

    for start in 0..n {
        let mut candidates = Vec::new();
        let mut end = start + 1;
        loop {
            if end > n {
                break;
            }
            let substr = &bytes[boundaries[start]..boundaries[end]];
            let matched = dictionary.lookup(substr);
            if let Some(tokens) = matched {
                for token in tokens {
                    candidates.push(LatticeToken {
                        left_context: token.left_context,
                        right_context: token.right_context,
                        pos: token.pos,
                        cost: token.cost,
                        surface: String::from_utf8_lossy(substr).into_owned(),
                        feature: dictionary.feature(token)?.to_string(),
                        start,
                        length: end - start,
                        kind: TokenKind::Normal,
                    });
                }
                max_covered_byte = max_covered_byte.max(boundaries[end]);
            }
            if matched.is_some() || dictionary.is_prefix(substr) {
                end += 1;
            } else {
                break;
            }
        }

        if boundaries[start] == max_covered_byte && candidates.is_empty() {
            let surface = &bytes[boundaries[start]..boundaries[start + 1]];
            candidates.push(LatticeToken {
                left_context: 0,
                right_context: 0,
                pos: 0,
                cost: 0,
                surface: String::from_utf8_lossy(surface).into_owned(),
                feature: "UNK".to_string(),
                start,
                length: 1,
                kind: TokenKind::Unk,
            });
        }

        slots.push(candidates);
    }

    let unk_count = slots.iter().flatten().filter(|t| t.kind == TokenKind::Unk).count();
    log::debug!(
        "built lattice: {} codepoints, {} synthesized UNK tokens",
        n,
        unk_count
    );

    Ok(Lattice { boundaries, slots })
}
