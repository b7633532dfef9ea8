use super::backend::BackendSlot;
use crate::core::ident::{Selector, StructureId};
use crate::core::io::traits::{RetrievalError, StructureProvider};
use crate::core::models::structure::Structure;
use std::sync::Arc;
use tracing::debug;

pub type SharedProvider = Arc<dyn StructureProvider + Send + Sync>;

/// Owns the process's retrieval backend and resolves parsed identifiers
/// into structures.
///
/// At most one backend instance is live at a time: the default is built
/// lazily on first use (idempotent under concurrent first use), and
/// [`set_backend`](Self::set_backend) substitutes another instance - e.g. a
/// test double - for all future resolutions without disturbing resolutions
/// already in flight.
pub struct StructureCache {
    backend: BackendSlot<dyn StructureProvider + Send + Sync>,
}

impl StructureCache {
    /// Creates a cache whose default backend is built by `factory` on first
    /// use.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> SharedProvider + Send + Sync + 'static,
    {
        Self {
            backend: BackendSlot::new(factory),
        }
    }

    /// Creates a cache permanently seeded with `backend` (no lazy default).
    pub fn with_backend(backend: SharedProvider) -> Self {
        let seed = Arc::clone(&backend);
        Self::new(move || Arc::clone(&seed))
    }

    /// Replaces the backend used by future resolutions.
    pub fn set_backend(&self, backend: SharedProvider) {
        self.backend.replace(backend);
    }

    /// Reverts to the lazily constructed default backend.
    pub fn clear_backend(&self) {
        self.backend.clear();
    }

    /// Resolves a parsed identifier into a structure.
    ///
    /// Assembly identifiers are not handled here - they route through
    /// [`crate::engine::resolver::AssemblyResolver`] - and fail explicitly
    /// rather than being guessed at.
    pub fn resolve(&self, id: &StructureId) -> Result<Structure, RetrievalError> {
        let backend = self.backend.current();
        match id {
            StructureId::Entry { code } => backend.fetch_by_code(code.as_str()),
            StructureId::Url { url } => backend.fetch_by_code(url),
            StructureId::Selection { code, selectors } => {
                let full = backend.fetch_by_code(code.as_str())?;
                extract_selection(&full, code.as_str(), selectors)
            }
            StructureId::ScopDomain { id } => {
                // dXXXXc#: embedded code at 1..5, chain letter at 5 ('_'
                // means the whole entry). SCOP encodes chain letters
                // lowercase; structures store them as deposited.
                let code = &id[1..5];
                let chain = id.as_bytes()[5] as char;
                debug!(scop = %id, code, "resolving SCOP domain via its chain");
                let full = backend.fetch_by_code(code)?;
                if chain == '_' {
                    return Ok(full);
                }
                let selector = Selector::Chain {
                    id: chain.to_ascii_uppercase(),
                };
                extract_selection(&full, code, &[selector])
            }
            StructureId::DomainPrediction { id } => {
                // PDP tokens embed the code in the first 4 characters and
                // the chain letter (case preserved) in the 5th.
                let code = id[..4].to_ascii_lowercase();
                let chain = id.as_bytes()[4] as char;
                debug!(pdp = %id, code = %code, "resolving PDP domain via its chain");
                let full = backend.fetch_by_code(&code)?;
                extract_selection(&full, &code, &[Selector::Chain { id: chain }])
            }
            StructureId::Assembly { .. } => Err(RetrievalError::UnsupportedIdentifier {
                id: id.to_string(),
            }),
        }
    }
}

/// Builds the composite sub-structure for a selector list: the selected
/// chains and ranges, in the order given, deep-copied into a fresh
/// structure that inherits the source header.
fn extract_selection(
    source: &Structure,
    code: &str,
    selectors: &[Selector],
) -> Result<Structure, RetrievalError> {
    let mut out = Structure::new();
    out.set_header(source.header().clone());

    for selector in selectors {
        let (letter, bounds) = match selector {
            Selector::Chain { id } => (*id, None),
            Selector::Range { chain, start, end } => (*chain, Some((*start, *end))),
        };

        let chain_id = source
            .find_chain_by_id(letter)
            .ok_or(RetrievalError::MissingChain {
                code: code.to_string(),
                chain: letter,
            })?;
        let chain = source.chain(chain_id).expect("looked-up chain exists");

        let out_chain = out.add_chain(letter);
        for &residue_id in chain.residues() {
            let residue = source.residue(residue_id).expect("chain residue exists");
            if let Some((start, end)) = bounds {
                if residue.number < start || residue.number > end {
                    continue;
                }
            }
            let out_residue = out
                .add_residue(out_chain, residue.number, &residue.name)
                .expect("output chain exists");
            for &atom_id in residue.atoms() {
                let atom = source.atom(atom_id).expect("residue atom exists").clone();
                out.add_atom_to_residue(out_residue, atom);
            }
        }
    }

    Ok(out)
}
