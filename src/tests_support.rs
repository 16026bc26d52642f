//! Synthetic dictionary fixtures shared between unit tests and the
//! top-level integration tests (kept in-crate, `cfg(test)` only, the way
//! the lineage keeps hand-built byte buffers alongside `Grammar`'s own
//! tests rather than loading a real dictionary from disk).

use crate::dic::dictionary::Dictionary;
use crate::dic::header::{HEADER_LEN, MAGIC, VERSION};
use crate::dic::token::TOKEN_LEN;

pub struct Link {
    pub base: u32,
    pub check: u32,
}

/// Builds a dense `(base, check)` array encoding exactly one dictionary
/// key, by chaining synthetic node ids spaced far enough apart that
/// their child slots never collide.
pub fn trie_for_single_key(key: &[u8], first_token: u32, count: u8) -> Vec<u8> {
    let mut sparse: Vec<(usize, Link)> = Vec::new();
    let root_branch = 100usize;
    sparse.push((0, Link { base: root_branch as u32, check: 0 }));

    let mut current = root_branch;
    let mut next_id = root_branch;
    for &b in key {
        let child_slot = current + 1 + b as usize;
        next_id += 200;
        sparse.push((
            child_slot,
            Link {
                base: next_id as u32,
                check: current as u32,
            },
        ));
        current = next_id;
    }
    let encoded_output = !(((first_token) << 8) | (count as u32));
    sparse.push((
        current,
        Link {
            base: encoded_output,
            check: current as u32,
        },
    ));

    let max_index = sparse.iter().map(|(i, _)| *i).max().unwrap_or(0);
    let mut dense = vec![Link { base: 0, check: 0 }; max_index + 1];
    for (i, link) in sparse {
        dense[i] = link;
    }

    let mut bytes = Vec::with_capacity(dense.len() * 8);
    for link in &dense {
        bytes.extend_from_slice(&link.base.to_le_bytes());
        bytes.extend_from_slice(&link.check.to_le_bytes());
    }
    bytes
}

/// A trie array with no reachable output at all.
pub fn empty_trie() -> Vec<u8> {
    vec![0u8; 8]
}

pub fn token_bytes(
    left_context: u16,
    right_context: u16,
    pos: u16,
    cost: i16,
    feature_offset: u32,
) -> Vec<u8> {
    let mut buf = vec![0u8; TOKEN_LEN];
    buf[0..2].copy_from_slice(&left_context.to_le_bytes());
    buf[2..4].copy_from_slice(&right_context.to_le_bytes());
    buf[4..6].copy_from_slice(&pos.to_le_bytes());
    buf[6..8].copy_from_slice(&cost.to_le_bytes());
    buf[8..12].copy_from_slice(&feature_offset.to_le_bytes());
    buf
}

pub fn sys_dic_bytes(trie: &[u8], tokens: &[u8], features: &[u8], num_tokens: u32) -> Vec<u8> {
    let mut header = vec![0u8; HEADER_LEN];
    header[0x00..0x04].copy_from_slice(&MAGIC.to_le_bytes());
    header[0x04..0x08].copy_from_slice(&VERSION.to_le_bytes());
    header[0x08..0x0C].copy_from_slice(&0u32.to_le_bytes());
    header[0x0C..0x10].copy_from_slice(&num_tokens.to_le_bytes());
    header[0x10..0x14].copy_from_slice(&1u32.to_le_bytes());
    header[0x14..0x18].copy_from_slice(&1u32.to_le_bytes());
    header[0x18..0x1C].copy_from_slice(&(trie.len() as u32).to_le_bytes());
    header[0x1C..0x20].copy_from_slice(&(tokens.len() as u32).to_le_bytes());
    header[0x20..0x24].copy_from_slice(&(features.len() as u32).to_le_bytes());
    let name = b"UTF-8";
    header[0x28..0x28 + name.len()].copy_from_slice(name);

    let mut out = header;
    out.extend_from_slice(trie);
    out.extend_from_slice(tokens);
    out.extend_from_slice(features);
    out
}

pub fn matrix_bytes(left_edges: u16, right_edges: u16, weights: &[i16]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&left_edges.to_le_bytes());
    buf.extend_from_slice(&right_edges.to_le_bytes());
    for w in weights {
        buf.extend_from_slice(&w.to_le_bytes());
    }
    buf
}

pub fn zero_matrix(left_edges: u16, right_edges: u16) -> Vec<u8> {
    matrix_bytes(left_edges, right_edges, &vec![0i16; left_edges as usize * right_edges as usize])
}

pub fn empty_sys_dic() -> Vec<u8> {
    sys_dic_bytes(&empty_trie(), &[], &[], 0)
}

/// A dictionary holding exactly one entry, surface `"あ"`, one token
/// `(lc=1, rc=1, pos=0, cost=100)` with feature `"pron"`, and a 2x2
/// matrix whose only non-zero weight is `matrix[1 + 2*1] = 50` (S3).
pub fn single_token_dictionary() -> Dictionary {
    let trie = trie_for_single_key("あ".as_bytes(), 0, 1);
    let tokens = token_bytes(1, 1, 0, 100, 0);
    let features = b"pron\0".to_vec();
    let dic = sys_dic_bytes(&trie, &tokens, &features, 1);
    let matrix = matrix_bytes(2, 2, &[0, 0, 0, 50]);
    Dictionary::from_bytes(&dic, &matrix).expect("fixture dictionary must be well-formed")
}
