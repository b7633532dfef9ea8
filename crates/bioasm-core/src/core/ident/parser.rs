//! Parser for the structure identifier grammar.
//!
//! ```text
//! name      := pdbId ('.' selector)? | scopId | 'BIOL:' pdbId (':' digits)? | 'PDP:' pdpToken | url
//! selector  := '('? chainRange (',' chainRange)* ')'?
//! chainRange:= chainId ('_' resNum '-' resNum)?
//! pdbId     := digit alnum{3}
//! chainId   := alnum
//! scopId    := 'd' pdbId [a-z_] [0-9_]
//! pdpToken  := pdbId [A-Za-z0-9_]+
//! resNum    := [+-]? digits letter?
//! ```
//!
//! PDB codes are case-insensitive (normalized lowercase); chain ids are
//! case-sensitive. Anything containing `://` is treated as an opaque URL.

use super::id::{PdbId, Selector, StructureId};
use crate::core::models::residue::ResidueNumber;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed structure identifier '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

impl ParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        ParseError::Malformed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

const BIOL_PREFIX: &str = "BIOL:";
const PDP_PREFIX: &str = "PDP:";
const MIN_IDENTIFIER_LEN: usize = 4;
const SCOP_ID_LEN: usize = 7;

/// Parses an identifier string into exactly one [`StructureId`] variant.
pub fn parse(text: &str) -> Result<StructureId, ParseError> {
    let text = text.trim();

    // URLs are accepted as an alternate code form and passed through whole.
    if text.contains("://") {
        return Ok(StructureId::Url {
            url: text.to_string(),
        });
    }

    if text.len() < MIN_IDENTIFIER_LEN {
        return Err(ParseError::new(
            text,
            "shorter than a 4-character PDB code",
        ));
    }

    if let Some(rest) = text.strip_prefix(BIOL_PREFIX) {
        return parse_biol(text, rest);
    }
    if let Some(rest) = text.strip_prefix(PDP_PREFIX) {
        return parse_pdp(text, rest);
    }
    if looks_like_scop_id(text) {
        return Ok(StructureId::ScopDomain {
            id: text.to_ascii_lowercase(),
        });
    }

    match text.split_once('.') {
        None => {
            let code = PdbId::new(text)
                .ok_or_else(|| ParseError::new(text, "not a valid PDB code"))?;
            Ok(StructureId::Entry { code })
        }
        Some((code_part, selector_part)) => {
            let code = PdbId::new(code_part)
                .ok_or_else(|| ParseError::new(text, "not a valid PDB code"))?;
            let selectors = parse_selectors(text, selector_part)?;
            Ok(StructureId::Selection { code, selectors })
        }
    }
}

fn parse_biol(input: &str, rest: &str) -> Result<StructureId, ParseError> {
    let (code_part, index) = match rest.split_once(':') {
        None => (rest, 1), // bare BIOL:code defaults to assembly nr 1
        Some((code_part, index_part)) => {
            let index = index_part.parse::<usize>().map_err(|_| {
                ParseError::new(input, "assembly index must be a non-negative integer")
            })?;
            (code_part, index)
        }
    };
    if code_part.contains('.') {
        // Sub-selection combined with an assembly request is unsupported.
        return Err(ParseError::new(
            input,
            "sub-selection cannot be combined with an assembly request",
        ));
    }
    let code = PdbId::new(code_part)
        .ok_or_else(|| ParseError::new(input, "not a valid PDB code after BIOL:"))?;
    Ok(StructureId::Assembly { code, index })
}

fn parse_pdp(input: &str, rest: &str) -> Result<StructureId, ParseError> {
    if !rest.is_ascii() || rest.len() <= 4 {
        return Err(ParseError::new(input, "PDP token too short"));
    }
    let (code_part, suffix) = rest.split_at(4);
    if PdbId::new(code_part).is_none()
        || !suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ParseError::new(input, "not a valid PDP token"));
    }
    Ok(StructureId::DomainPrediction {
        id: rest.to_string(),
    })
}

fn looks_like_scop_id(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    lower.is_ascii()
        && bytes.len() == SCOP_ID_LEN
        && bytes[0] == b'd'
        && PdbId::new(&lower[1..5]).is_some()
        && (bytes[5].is_ascii_lowercase() || bytes[5] == b'_')
        && (bytes[6].is_ascii_digit() || bytes[6] == b'_')
}

fn parse_selectors(input: &str, selector_part: &str) -> Result<Vec<Selector>, ParseError> {
    // The original grammar allows the selector list to be parenthesized.
    let selector_part = selector_part
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(selector_part);

    if selector_part.is_empty() {
        return Err(ParseError::new(input, "empty selector"));
    }

    selector_part
        .split(',')
        .map(|token| parse_chain_range(input, token))
        .collect()
}

fn parse_chain_range(input: &str, token: &str) -> Result<Selector, ParseError> {
    match token.split_once('_') {
        None => {
            let id = single_chain_char(token)
                .ok_or_else(|| ParseError::new(input, "chain id must be one alphanumeric character"))?;
            Ok(Selector::Chain { id })
        }
        Some((chain_part, range_part)) => {
            let chain = single_chain_char(chain_part)
                .ok_or_else(|| ParseError::new(input, "chain id must be one alphanumeric character"))?;
            let (start, end) = parse_residue_range(range_part)
                .ok_or_else(|| ParseError::new(input, "poorly formatted residue range"))?;
            Ok(Selector::Range { chain, start, end })
        }
    }
}

fn single_chain_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Some(c),
        _ => None,
    }
}

/// Splits `start-end` where both sides are residue numbers. The separator
/// is the first '-' that is not the leading sign of the start number.
fn parse_residue_range(range: &str) -> Option<(ResidueNumber, ResidueNumber)> {
    let search_from = usize::from(range.starts_with('-') || range.starts_with('+'));
    let sep = range[search_from..].find('-')? + search_from;
    let start: ResidueNumber = range[..sep].parse().ok()?;
    let end: ResidueNumber = range[sep + 1..].parse().ok()?;
    Some((start, end))
}
