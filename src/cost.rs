//! Edge cost between two adjacent lattice tokens (§4.6).

use crate::dic::matrix::ConnectionMatrix;
use crate::error::AnalyzerResult;
use crate::lattice::{LatticeToken, TokenKind};

/// `None` means the edge does not exist (the tokens are not adjacent).
/// `a` is the predecessor, `b` the successor.
pub fn edge_cost(
    matrix: &ConnectionMatrix,
    a: &LatticeToken,
    b: &LatticeToken,
) -> AnalyzerResult<Option<i64>> {
    if a.kind != TokenKind::Bos && a.end() != b.start {
        return Ok(None);
    }

    if b.kind == TokenKind::Bos || b.kind == TokenKind::Eos {
        return Ok(Some(0));
    }

    if a.kind == TokenKind::Bos {
        return Ok(Some(b.cost as i64));
    }

    let transition = matrix.cost(a.right_context, b.left_context)?;
    Ok(Some(b.cost as i64 + transition as i64))
}
