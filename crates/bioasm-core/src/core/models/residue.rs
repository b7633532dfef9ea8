use super::ids::{AtomId, ChainId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A residue sequence number together with its optional insertion code.
///
/// PDB entries number residues with a signed integer and an optional
/// one-letter insertion code; `82`, `82A`, `82B`, `83` is a valid run.
/// The derived ordering (number first, then insertion code, with an absent
/// code sorting before any present one) matches that sequence order, which
/// is what residue-range selection relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResidueNumber {
    pub num: i32,
    pub icode: Option<char>,
}

impl ResidueNumber {
    pub fn new(num: i32) -> Self {
        Self { num, icode: None }
    }

    pub fn with_icode(num: i32, icode: char) -> Self {
        Self {
            num,
            icode: Some(icode),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid residue number '{0}'")]
pub struct ParseResidueNumberError(pub String);

impl FromStr for ResidueNumber {
    type Err = ParseResidueNumberError;

    /// Parses `[+-]? digits letter?`, e.g. `1`, `-5`, `+82`, `82A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseResidueNumberError(s.to_string());
        let mut chars = s.chars().peekable();

        let mut num_str = String::new();
        if let Some(&c) = chars.peek() {
            if c == '+' || c == '-' {
                num_str.push(c);
                chars.next();
            }
        }
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                num_str.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if !num_str.chars().any(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        let icode = match chars.next() {
            None => None,
            Some(c) if c.is_ascii_alphabetic() && chars.next().is_none() => Some(c),
            _ => return Err(err()),
        };

        let num = num_str.parse::<i32>().map_err(|_| err())?;
        Ok(Self { num, icode })
    }
}

impl fmt::Display for ResidueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num)?;
        if let Some(c) = self.icode {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// A residue: sequence position, name, parent chain, and its atoms in
/// source order. Ligand and water residues are represented the same way as
/// polymer residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: ResidueNumber,
    pub name: String,
    pub chain_id: ChainId,
    pub(crate) atoms: Vec<AtomId>,
}

impl Residue {
    pub(crate) fn new(number: ResidueNumber, name: &str, chain_id: ChainId) -> Self {
        Self {
            number,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }
}
