//! Stdout rendering of the chosen path (§4.8, §6).

use std::io::{self, Write};

use crate::lattice::{LatticeToken, TokenKind};

const SURFACE_DELIMITER: char = '\u{FF5C}'; // ｜

pub fn write_path<W: Write>(mut out: W, path: &[LatticeToken]) -> io::Result<()> {
    let morphemes: Vec<&LatticeToken> = path
        .iter()
        .filter(|t| t.kind != TokenKind::Bos && t.kind != TokenKind::Eos)
        .collect();

    for token in &morphemes {
        writeln!(out, "{}", token.feature)?;
    }

    let surfaces: Vec<&str> = morphemes.iter().map(|t| t.surface.as_str()).collect();
    writeln!(out, "{}", surfaces.join(&SURFACE_DELIMITER.to_string()))?;
    Ok(())
}
