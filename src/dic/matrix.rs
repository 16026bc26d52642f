//! `matrix.bin`: a dense bigram connection-cost table (§3, §6).

use crate::error::{AnalyzerError, AnalyzerResult};

pub struct ConnectionMatrix {
    left_edges: u16,
    right_edges: u16,
    weights: Vec<i16>,
}

impl ConnectionMatrix {
    pub fn parse(bytes: &[u8]) -> AnalyzerResult<ConnectionMatrix> {
        if bytes.len() < 4 {
            return Err(AnalyzerError::Format(
                "matrix.bin truncated before header".to_string(),
            ));
        }
        let left_edges = u16::from_le_bytes([bytes[0], bytes[1]]);
        let right_edges = u16::from_le_bytes([bytes[2], bytes[3]]);
        let expected = left_edges as usize * right_edges as usize;
        let body = &bytes[4..];
        if body.len() != expected * 2 {
            return Err(AnalyzerError::Format(format!(
                "matrix.bin body has {} bytes, expected {} for {}x{} i16 weights",
                body.len(),
                expected * 2,
                left_edges,
                right_edges
            )));
        }
        let weights = body
            .chunks_exact(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect();
        Ok(ConnectionMatrix {
            left_edges,
            right_edges,
            weights,
        })
    }

    pub fn left_edges(&self) -> u16 {
        self.left_edges
    }

    pub fn right_edges(&self) -> u16 {
        self.right_edges
    }

    /// Transition cost from a token with `right_context` into a token
    /// with `left_context`, per §3's `right_context + left_edges *
    /// left_context` indexing.
    pub fn cost(&self, right_context: u16, left_context: u16) -> AnalyzerResult<i16> {
        let idx = right_context as usize + self.left_edges as usize * left_context as usize;
        self.weights.get(idx).copied().ok_or_else(|| {
            AnalyzerError::Integrity(format!(
                "connection matrix index {} out of bounds (left_edges={}, right_edges={})",
                idx, self.left_edges, self.right_edges
            ))
        })
    }

    /// `(min, max)` weight bounds across the whole table, seeded from
    /// `i32::MAX`/`i32::MIN` rather than zero for the same reason as
    /// `TokenArray::cost_bounds`: an all-positive or all-negative table
    /// must not falsely report a bound of zero. An empty table (no
    /// weights at all) reports `(0, 0)`.
    pub fn cost_bounds(&self) -> (i32, i32) {
        if self.weights.is_empty() {
            return (0, 0);
        }
        self.weights
            .iter()
            .fold((i32::MAX, i32::MIN), |(min, max), &w| {
                (min.min(w as i32), max.max(w as i32))
            })
    }
}
