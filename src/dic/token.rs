//! The 16-byte on-disk token record and the NUL-terminated feature pile
//! it points into (§3).

use crate::error::{AnalyzerError, AnalyzerResult};

pub const TOKEN_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    pub left_context: u16,
    pub right_context: u16,
    pub pos: u16,
    pub cost: i16,
    pub feature_offset: u32,
    // 4 reserved bytes follow on disk; no documented consumer (§9).
}

pub struct TokenArray {
    tokens: Vec<RawToken>,
}

impl TokenArray {
    pub fn parse(bytes: &[u8]) -> AnalyzerResult<TokenArray> {
        if bytes.len() % TOKEN_LEN != 0 {
            return Err(AnalyzerError::Format(
                "token array length is not a multiple of 16".to_string(),
            ));
        }
        let tokens = bytes
            .chunks_exact(TOKEN_LEN)
            .map(|chunk| RawToken {
                left_context: u16::from_le_bytes([chunk[0], chunk[1]]),
                right_context: u16::from_le_bytes([chunk[2], chunk[3]]),
                pos: u16::from_le_bytes([chunk[4], chunk[5]]),
                cost: i16::from_le_bytes([chunk[6], chunk[7]]),
                feature_offset: u32::from_le_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]),
            })
            .collect();
        Ok(TokenArray { tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn slice(&self, first: u32, count: u8) -> AnalyzerResult<&[RawToken]> {
        let first = first as usize;
        let count = count as usize;
        let end = first
            .checked_add(count)
            .filter(|&end| end <= self.tokens.len())
            .ok_or_else(|| {
                AnalyzerError::Integrity(format!(
                    "token slice [{}, {}+{}) out of bounds (len {})",
                    first, first, count, self.tokens.len()
                ))
            })?;
        Ok(&self.tokens[first..end])
    }

    /// `(min, max)` cost bounds across the whole array, used by the
    /// search heuristic (§4.7). Seeded from `i32::MAX`/`i32::MIN` rather
    /// than zero, the way the original walks its token array against
    /// `0x7FFF`/`-0x8000` sentinels, so an all-positive or all-negative
    /// array doesn't falsely report a bound of zero. An empty array (no
    /// tokens at all) has no costs to bound, so it reports `(0, 0)`.
    pub fn cost_bounds(&self) -> (i32, i32) {
        if self.tokens.is_empty() {
            return (0, 0);
        }
        self.tokens
            .iter()
            .fold((i32::MAX, i32::MIN), |(min, max), t| {
                (min.min(t.cost as i32), max.max(t.cost as i32))
            })
    }
}

/// Extracts the NUL-terminated UTF-8 feature string at `offset` in the
/// feature pile.
pub fn feature_at(pile: &[u8], offset: u32) -> AnalyzerResult<&str> {
    let offset = offset as usize;
    if offset > pile.len() {
        return Err(AnalyzerError::Integrity(format!(
            "feature offset {} beyond pile of length {}",
            offset,
            pile.len()
        )));
    }
    let end = pile[offset..]
        .iter()
        .position(|&b| b == 0)
        .map(|p| offset + p)
        .unwrap_or(pile.len());
    std::str::from_utf8(&pile[offset..end])
        .map_err(|_| AnalyzerError::Integrity(format!("non-UTF-8 feature at offset {}", offset)))
}
