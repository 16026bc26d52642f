//! The fixed 0x48-byte header at the start of `sys.dic` (§6).

use nom::number::complete::le_u32;
use nom::sequence::tuple;
use nom::IResult;

use crate::error::{AnalyzerError, AnalyzerResult};

pub const MAGIC: u32 = 0xE117_2181;
pub const VERSION: u32 = 0x66;
pub const ENCODING_TAG_LEN: usize = 32;
pub const HEADER_LEN: usize = 0x48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub dict_type: u32,
    pub num_tokens: u32,
    pub num_left_contexts: u32,
    pub num_right_contexts: u32,
    pub trie_bytes: u32,
    pub token_bytes: u32,
    pub feature_bytes: u32,
}

impl Header {
    /// Parses and validates the header, returning it along with the byte
    /// offset at which the trie/token/feature arrays begin (always
    /// `HEADER_LEN`, kept explicit to mirror §6's table).
    pub fn parse(input: &[u8]) -> AnalyzerResult<(Header, usize)> {
        if input.len() < HEADER_LEN {
            return Err(AnalyzerError::Format(format!(
                "dictionary header truncated: need {} bytes, have {}",
                HEADER_LEN,
                input.len()
            )));
        }
        let (_, fields) = parse_fixed_fields(input)
            .map_err(|e| AnalyzerError::Format(format!("malformed dictionary header: {}", e)))?;
        let (magic, version, dict_type, num_tokens, num_left_contexts, num_right_contexts, trie_bytes, token_bytes, feature_bytes) =
            fields;

        if magic != MAGIC {
            return Err(AnalyzerError::Format(
                "not a mecab sys.dic file".to_string(),
            ));
        }
        if version != VERSION {
            return Err(AnalyzerError::Format(format!(
                "unsupported version: {:#x}",
                version
            )));
        }

        let encoding = &input[0x28..0x28 + ENCODING_TAG_LEN];
        if !is_utf8_tag(encoding) {
            return Err(AnalyzerError::Format(
                "dictionary encoding is not UTF-8".to_string(),
            ));
        }

        if trie_bytes % 8 != 0 {
            return Err(AnalyzerError::Format(
                "trie array length is not a multiple of 8".to_string(),
            ));
        }
        if token_bytes % 16 != 0 || token_bytes / 16 != num_tokens {
            return Err(AnalyzerError::Format(
                "token array length is inconsistent with num_tokens".to_string(),
            ));
        }

        Ok((
            Header {
                dict_type,
                num_tokens,
                num_left_contexts,
                num_right_contexts,
                trie_bytes,
                token_bytes,
                feature_bytes,
            },
            HEADER_LEN,
        ))
    }
}

#[allow(clippy::type_complexity)]
fn parse_fixed_fields(
    input: &[u8],
) -> IResult<&[u8], (u32, u32, u32, u32, u32, u32, u32, u32, u32)> {
    tuple((
        le_u32, le_u32, le_u32, le_u32, le_u32, le_u32, le_u32, le_u32, le_u32,
    ))(input)
    // magic, version, dict_type, num_tokens, num_left, num_right, trie_bytes, token_bytes, feature_bytes
    // the trailing 4-byte padding field (offset 0x24) is intentionally not returned
}

fn is_utf8_tag(tag: &[u8]) -> bool {
    let mut padded = [0u8; ENCODING_TAG_LEN];
    let name = b"UTF-8";
    padded[..name.len()].copy_from_slice(name);
    tag == padded
}
