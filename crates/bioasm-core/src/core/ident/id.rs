use crate::core::models::residue::ResidueNumber;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// A validated 4-character PDB code: ascii alphanumeric, first character a
/// digit, stored lowercase (PDB codes are case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PdbId(String);

impl PdbId {
    /// Validates and normalizes a candidate code. Returns `None` when the
    /// token is not a well-formed PDB code; the parser turns that into its
    /// own error.
    pub fn new(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let first = chars.next()?;
        if code.chars().count() != 4
            || !first.is_ascii_digit()
            || !code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return None;
        }
        Some(Self(code.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One element of a sub-selection: a whole chain, or an inclusive residue
/// range on a chain. Chain letters are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Chain {
        id: char,
    },
    Range {
        chain: char,
        start: ResidueNumber,
        end: ResidueNumber,
    },
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Chain { id } => write!(f, "{}", id),
            Selector::Range { chain, start, end } => write!(f, "{}_{}-{}", chain, start, end),
        }
    }
}

/// A parsed structure identifier.
///
/// Every identifier is exactly one of these variants, so downstream
/// resolution is an exhaustive match rather than string sniffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureId {
    /// A whole entry: the full asymmetric unit, ligands included, first
    /// model only.
    Entry { code: PdbId },
    /// A composite sub-structure: the named chains/ranges, in the order
    /// given.
    Selection {
        code: PdbId,
        selectors: Vec<Selector>,
    },
    /// A SCOP domain identifier such as `d2bq6a1`, stored lowercase.
    ScopDomain { id: String },
    /// A PDP domain-prediction identifier (the part after the `PDP:`
    /// prefix, case preserved).
    DomainPrediction { id: String },
    /// A biological assembly of an entry. Index 0 denotes the asymmetric
    /// unit itself.
    Assembly { code: PdbId, index: usize },
    /// An opaque URL, delegated whole to the retrieval backend.
    Url { url: String },
}

impl StructureId {
    /// Parses an identifier string. See [`super::parser`] for the grammar.
    pub fn parse(text: &str) -> Result<Self, super::parser::ParseError> {
        super::parser::parse(text)
    }
}

impl FromStr for StructureId {
    type Err = super::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::parse(s)
    }
}

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureId::Entry { code } => write!(f, "{}", code),
            StructureId::Selection { code, selectors } => {
                write!(f, "{}.{}", code, selectors.iter().join(","))
            }
            StructureId::ScopDomain { id } => f.write_str(id),
            StructureId::DomainPrediction { id } => write!(f, "PDP:{}", id),
            StructureId::Assembly { code, index } => write!(f, "BIOL:{}:{}", code, index),
            StructureId::Url { url } => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdb_id_normalizes_to_lowercase() {
        let id = PdbId::new("4HHB").unwrap();
        assert_eq!(id.as_str(), "4hhb");
        assert_eq!(id.to_string(), "4hhb");
    }

    #[test]
    fn pdb_id_rejects_bad_codes() {
        assert!(PdbId::new("").is_none());
        assert!(PdbId::new("hhb4").is_none()); // first char must be a digit
        assert!(PdbId::new("4hh").is_none()); // too short
        assert!(PdbId::new("4hhbb").is_none()); // too long
        assert!(PdbId::new("4hh-").is_none()); // non-alphanumeric
    }

    #[test]
    fn selectors_display_in_grammar_form() {
        let chain = Selector::Chain { id: 'C' };
        assert_eq!(chain.to_string(), "C");

        let range = Selector::Range {
            chain: 'A',
            start: ResidueNumber::new(1),
            end: ResidueNumber::with_icode(83, 'B'),
        };
        assert_eq!(range.to_string(), "A_1-83B");
    }

    #[test]
    fn structure_ids_display_in_grammar_form() {
        let code = PdbId::new("4hhb").unwrap();
        assert_eq!(StructureId::Entry { code: code.clone() }.to_string(), "4hhb");
        assert_eq!(
            StructureId::Selection {
                code: code.clone(),
                selectors: vec![Selector::Chain { id: 'A' }, Selector::Chain { id: 'B' }],
            }
            .to_string(),
            "4hhb.A,B"
        );
        assert_eq!(
            StructureId::Assembly { code, index: 2 }.to_string(),
            "BIOL:4hhb:2"
        );
        assert_eq!(
            StructureId::DomainPrediction {
                id: "4HHBAa".to_string()
            }
            .to_string(),
            "PDP:4HHBAa"
        );
    }
}
