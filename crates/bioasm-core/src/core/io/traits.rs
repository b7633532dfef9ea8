use crate::core::models::atom::Atom;
use crate::core::models::structure::Structure;
use std::io;
use thiserror::Error;

/// Failures of the retrieval path, distinct from identifier parse errors.
///
/// `NotFound` and `MissingChain` mean the identifier was syntactically valid
/// but names something the backend does not have; `Io` wraps an underlying
/// transport or filesystem failure. None of these is retried at this layer.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("no structure found for code '{code}'")]
    NotFound { code: String },

    #[error("chain '{chain}' not found in structure '{code}'")]
    MissingChain { code: String, chain: char },

    #[error("identifier '{id}' cannot be resolved by the structure cache")]
    UnsupportedIdentifier { id: String },

    #[error("I/O failure while fetching structure data: {0}")]
    Io(#[from] io::Error),
}

/// The retrieval backend contract.
///
/// Implementations own file parsing, disk caching, and network download.
/// The core only ever asks for a fully materialized structure by code (or by
/// opaque URL) and depends on nothing else.
pub trait StructureProvider {
    /// Fetches the full asymmetric unit for a code: first model only,
    /// ligands included, header metadata populated.
    fn fetch_by_code(&self, code: &str) -> Result<Structure, RetrievalError>;

    /// Fetches the atoms of an entry without the surrounding hierarchy.
    fn fetch_atoms(&self, code: &str) -> Result<Vec<Atom>, RetrievalError> {
        let structure = self.fetch_by_code(code)?;
        Ok(structure.atoms_iter().map(|(_, atom)| atom.clone()).collect())
    }
}

/// The biological-assembly metadata provider contract.
pub trait BioUnitProvider {
    /// The asymmetric unit for a code, with assembly metadata in its header.
    fn asym_unit(&self, code: &str) -> Result<Structure, RetrievalError>;

    /// Whether one or more biological assemblies are declared for the code.
    fn has_biol_assembly(&self, code: &str) -> Result<bool, RetrievalError>;

    /// Number of declared biological assemblies (the asymmetric unit at
    /// index 0 is not counted).
    fn nr_biol_assemblies(&self, code: &str) -> Result<usize, RetrievalError>;
}
