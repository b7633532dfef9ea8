use crate::core::ident::{ParseError, StructureId};
use crate::core::io::traits::RetrievalError;
use crate::core::models::structure::Structure;
use crate::engine::cache::StructureCache;
use crate::engine::error::AssemblyError;
use crate::engine::resolver::AssemblyResolver;
use thiserror::Error;
use tracing::{debug, instrument};

/// Everything a resolution call needs: the structure cache and the
/// assembly resolver, owned together and passed explicitly.
pub struct ResolveContext {
    pub cache: StructureCache,
    pub assemblies: AssemblyResolver,
}

impl ResolveContext {
    pub fn new(cache: StructureCache, assemblies: AssemblyResolver) -> Self {
        Self { cache, assemblies }
    }
}

/// Union of everything that can go wrong between an identifier string and a
/// structure. The three sources stay distinguishable: a malformed name, a
/// resolvable-but-absent structure, and a failed assembly reconstruction
/// are different conditions.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Resolves an identifier string into a fully materialized structure.
///
/// Parses the name (one grammar variant or a [`ParseError`]), then routes
/// it: assembly requests go through reconstruction, everything else through
/// the structure cache.
#[instrument(skip(ctx), name = "resolve_structure")]
pub fn resolve(ctx: &ResolveContext, name: &str) -> Result<Structure, ResolveError> {
    let id: StructureId = name.parse()?;
    debug!(id = %id, "parsed structure identifier");

    match &id {
        StructureId::Assembly { code, index } => {
            Ok(ctx.assemblies.assembly(code.as_str(), *index)?)
        }
        _ => Ok(ctx.cache.resolve(&id)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::traits::{BioUnitProvider, StructureProvider};
    use crate::core::models::assembly::{BiologicalAssembly, Transformation};
    use crate::core::models::atom::Atom;
    use crate::core::models::residue::ResidueNumber;
    use nalgebra::{Matrix4, Point3, Vector3};
    use std::sync::Arc;

    /// One entry, "1fah": chains A and B, one assembly (A duplicated by a
    /// translation), served through both provider interfaces.
    struct MemoryArchive;

    impl MemoryArchive {
        fn build_entry() -> Structure {
            let mut structure = Structure::new();
            structure.header_mut().pdb_code = Some("1fah".to_string());

            for (letter, y) in [('A', 0.0), ('B', 3.0)] {
                let chain = structure.add_chain(letter);
                let residue = structure
                    .add_residue(chain, ResidueNumber::new(1), "GLY")
                    .unwrap();
                structure
                    .add_atom_to_residue(
                        residue,
                        Atom::new("CA", residue, Point3::new(1.0, y, 0.0)),
                    )
                    .unwrap();
            }

            structure.header_mut().bio_assemblies.insert(
                1,
                BiologicalAssembly::new(vec![
                    Transformation::identity("1", vec!['A']),
                    Transformation::new(
                        "2",
                        vec!['A'],
                        Matrix4::new_translation(&Vector3::new(0.0, 0.0, 7.0)),
                    ),
                ]),
            );
            structure
        }

        fn fetch(code: &str) -> Result<Structure, RetrievalError> {
            if code == "1fah" {
                Ok(Self::build_entry())
            } else {
                Err(RetrievalError::NotFound {
                    code: code.to_string(),
                })
            }
        }
    }

    impl StructureProvider for MemoryArchive {
        fn fetch_by_code(&self, code: &str) -> Result<Structure, RetrievalError> {
            Self::fetch(code)
        }
    }

    impl BioUnitProvider for MemoryArchive {
        fn asym_unit(&self, code: &str) -> Result<Structure, RetrievalError> {
            Self::fetch(code)
        }

        fn has_biol_assembly(&self, code: &str) -> Result<bool, RetrievalError> {
            Ok(self.nr_biol_assemblies(code)? > 0)
        }

        fn nr_biol_assemblies(&self, code: &str) -> Result<usize, RetrievalError> {
            Ok(Self::fetch(code)?.header().num_assemblies())
        }
    }

    fn memory_context() -> ResolveContext {
        ResolveContext::new(
            StructureCache::with_backend(Arc::new(MemoryArchive)),
            AssemblyResolver::with_provider(Arc::new(MemoryArchive)),
        )
    }

    #[test]
    fn whole_entry_resolves_through_the_cache() {
        let ctx = memory_context();
        let structure = resolve(&ctx, "1FAH").unwrap();
        assert_eq!(structure.num_chains(), 2);
    }

    #[test]
    fn chain_selection_resolves_to_that_chain() {
        let ctx = memory_context();
        let structure = resolve(&ctx, "1fah.B").unwrap();
        assert_eq!(structure.num_chains(), 1);
        let (_, chain) = structure.chains_iter().next().unwrap();
        assert_eq!(chain.id, 'B');
    }

    #[test]
    fn default_assembly_request_rebuilds_assembly_one() {
        let ctx = memory_context();
        let structure = resolve(&ctx, "BIOL:1fah").unwrap();
        let letters: Vec<char> = structure.chains_iter().map(|(_, c)| c.id).collect();
        assert_eq!(letters, vec!['A', 'A']);
    }

    #[test]
    fn assembly_zero_resolves_to_the_asymmetric_unit() {
        let ctx = memory_context();
        let structure = resolve(&ctx, "BIOL:1fah:0").unwrap();
        assert_eq!(structure.num_chains(), 2);
        let letters: Vec<char> = structure.chains_iter().map(|(_, c)| c.id).collect();
        assert_eq!(letters, vec!['A', 'B']);
    }

    #[test]
    fn errors_stay_distinguishable_by_source() {
        let ctx = memory_context();
        assert!(matches!(
            resolve(&ctx, "X"),
            Err(ResolveError::Parse(ParseError::Malformed { .. }))
        ));
        assert!(matches!(
            resolve(&ctx, "9zzz"),
            Err(ResolveError::Retrieval(RetrievalError::NotFound { .. }))
        ));
        assert!(matches!(
            resolve(&ctx, "BIOL:1fah:5"),
            Err(ResolveError::Assembly(AssemblyError::NotAvailable(5)))
        ));
    }
}
