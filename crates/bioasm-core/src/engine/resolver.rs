use super::backend::BackendSlot;
use super::builder;
use super::error::AssemblyError;
use crate::core::io::traits::{BioUnitProvider, RetrievalError};
use crate::core::models::structure::Structure;
use std::sync::Arc;
use tracing::{info, instrument};

pub type SharedBioUnitProvider = Arc<dyn BioUnitProvider + Send + Sync>;

/// Resolves biological-assembly requests against a [`BioUnitProvider`].
///
/// The provider slot mirrors [`crate::engine::cache::StructureCache`]:
/// lazily built default, explicit swap, no disruption of in-flight calls.
/// The asymmetric unit loaded for one call is owned by that call and
/// dropped on every exit path, success or error, so resolving many
/// assemblies in sequence does not accumulate transient structures.
pub struct AssemblyResolver {
    provider: BackendSlot<dyn BioUnitProvider + Send + Sync>,
}

impl AssemblyResolver {
    /// Creates a resolver whose default provider is built by `factory` on
    /// first use.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> SharedBioUnitProvider + Send + Sync + 'static,
    {
        Self {
            provider: BackendSlot::new(factory),
        }
    }

    /// Creates a resolver permanently seeded with `provider`.
    pub fn with_provider(provider: SharedBioUnitProvider) -> Self {
        let seed = Arc::clone(&provider);
        Self::new(move || Arc::clone(&seed))
    }

    pub fn set_provider(&self, provider: SharedBioUnitProvider) {
        self.provider.replace(provider);
    }

    pub fn clear_provider(&self) {
        self.provider.clear();
    }

    /// Whether one or more biological assemblies are available for a code.
    pub fn has_assembly(&self, code: &str) -> Result<bool, RetrievalError> {
        self.provider
            .current()
            .has_biol_assembly(&code.to_ascii_lowercase())
    }

    /// Number of biological assemblies available for a code (index 0, the
    /// asymmetric unit, is not counted).
    pub fn assembly_count(&self, code: &str) -> Result<usize, RetrievalError> {
        self.provider
            .current()
            .nr_biol_assemblies(&code.to_ascii_lowercase())
    }

    /// Materializes the `index`-th biological assembly of an entry.
    ///
    /// Index 0 returns the asymmetric unit itself. A missing index fails
    /// with [`AssemblyError::NotAvailable`]; an index whose transformation
    /// list was declared but never populated fails with
    /// [`AssemblyError::NoTransformations`].
    #[instrument(skip(self), name = "get_assembly")]
    pub fn assembly(&self, code: &str, index: usize) -> Result<Structure, AssemblyError> {
        let code = code.to_ascii_lowercase();
        let provider = self.provider.current();

        let asym_unit = provider.asym_unit(&code)?;

        if index == 0 {
            info!(
                code = %code,
                "requested biological assembly 0, returning the asymmetric unit"
            );
            return Ok(asym_unit);
        }

        let assembly = asym_unit
            .header()
            .assembly(index)
            .ok_or(AssemblyError::NotAvailable(index))?;
        if assembly.transforms.is_empty() {
            return Err(AssemblyError::NoTransformations { index });
        }

        info!(
            code = %code,
            index,
            transforms = assembly.transforms.len(),
            "rebuilding biological assembly"
        );
        builder::build(&asym_unit, &assembly.transforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::assembly::{BiologicalAssembly, Transformation};
    use crate::core::models::atom::Atom;
    use crate::core::models::residue::ResidueNumber;
    use nalgebra::{Matrix4, Point3, Vector3};

    /// Entry "1fah" with two chains and assemblies 1 (dimer of A) and
    /// 2 (A+B shifted); assembly 9 is declared but has no transformations.
    struct MemoryBioUnitProvider;

    impl MemoryBioUnitProvider {
        fn build_asym_unit() -> Structure {
            let mut structure = Structure::new();
            structure.header_mut().pdb_code = Some("1fah".to_string());

            for (letter, z) in [('A', 0.0), ('B', 4.0)] {
                let chain = structure.add_chain(letter);
                let residue = structure
                    .add_residue(chain, ResidueNumber::new(1), "GLY")
                    .unwrap();
                for (name, x) in [("N", 0.0), ("CA", 1.4)] {
                    structure
                        .add_atom_to_residue(
                            residue,
                            Atom::new(name, residue, Point3::new(x, 0.0, z)),
                        )
                        .unwrap();
                }
            }

            let two_fold = {
                let mut m = Matrix4::identity();
                m[(0, 0)] = -1.0;
                m[(1, 1)] = -1.0;
                m[(0, 3)] = 10.0;
                m
            };
            structure.header_mut().bio_assemblies.insert(
                1,
                BiologicalAssembly::new(vec![
                    Transformation::identity("1", vec!['A']),
                    Transformation::new("2", vec!['A'], two_fold),
                ]),
            );
            structure.header_mut().bio_assemblies.insert(
                2,
                BiologicalAssembly::new(vec![Transformation::new(
                    "1",
                    vec!['A', 'B'],
                    Matrix4::new_translation(&Vector3::new(0.0, 0.0, 8.0)),
                )]),
            );
            structure
                .header_mut()
                .bio_assemblies
                .insert(9, BiologicalAssembly::default());

            structure
        }
    }

    impl BioUnitProvider for MemoryBioUnitProvider {
        fn asym_unit(&self, code: &str) -> Result<Structure, RetrievalError> {
            if code == "1fah" {
                Ok(Self::build_asym_unit())
            } else {
                Err(RetrievalError::NotFound {
                    code: code.to_string(),
                })
            }
        }

        fn has_biol_assembly(&self, code: &str) -> Result<bool, RetrievalError> {
            Ok(self.nr_biol_assemblies(code)? > 0)
        }

        fn nr_biol_assemblies(&self, code: &str) -> Result<usize, RetrievalError> {
            Ok(self.asym_unit(code)?.header().num_assemblies())
        }
    }

    fn memory_resolver() -> AssemblyResolver {
        AssemblyResolver::with_provider(Arc::new(MemoryBioUnitProvider))
    }

    #[test]
    fn index_zero_returns_the_asymmetric_unit_unchanged() {
        let resolver = memory_resolver();
        let asym = MemoryBioUnitProvider::build_asym_unit();
        let returned = resolver.assembly("1FAH", 0).unwrap();

        assert_eq!(returned.num_chains(), asym.num_chains());
        assert_eq!(returned.num_atoms(), asym.num_atoms());
        let coords: Vec<Point3<f64>> = returned.atoms_iter().map(|(_, a)| a.position).collect();
        let expected: Vec<Point3<f64>> = asym.atoms_iter().map(|(_, a)| a.position).collect();
        assert_eq!(coords, expected);
    }

    #[test]
    fn assembly_one_contains_two_copies_of_chain_a() {
        let resolver = memory_resolver();
        let assembly = resolver.assembly("1fah", 1).unwrap();

        let letters: Vec<char> = assembly.chains_iter().map(|(_, c)| c.id).collect();
        assert_eq!(letters, vec!['A', 'A']);

        let operators: Vec<Option<String>> = assembly
            .chains_iter()
            .map(|(_, c)| c.operator_id.clone())
            .collect();
        assert_eq!(
            operators,
            vec![Some("1".to_string()), Some("2".to_string())]
        );
    }

    #[test]
    fn missing_index_fails_with_not_available() {
        let resolver = memory_resolver();
        assert!(matches!(
            resolver.assembly("1fah", 5),
            Err(AssemblyError::NotAvailable(5))
        ));
    }

    #[test]
    fn declared_but_empty_assembly_fails_with_no_transformations() {
        let resolver = memory_resolver();
        assert!(matches!(
            resolver.assembly("1fah", 9),
            Err(AssemblyError::NoTransformations { index: 9 })
        ));
    }

    #[test]
    fn unknown_code_propagates_retrieval_error() {
        let resolver = memory_resolver();
        assert!(matches!(
            resolver.assembly("9zzz", 1),
            Err(AssemblyError::Retrieval(RetrievalError::NotFound { .. }))
        ));
    }

    #[test]
    fn codes_are_normalized_to_lowercase() {
        let resolver = memory_resolver();
        assert!(resolver.assembly("1FAH", 1).is_ok());
        assert!(resolver.has_assembly("1FAH").unwrap());
    }

    #[test]
    fn assembly_count_matches_declared_header_entries() {
        let resolver = memory_resolver();
        let declared = MemoryBioUnitProvider::build_asym_unit()
            .header()
            .num_assemblies();
        assert_eq!(resolver.assembly_count("1fah").unwrap(), declared);
        assert_eq!(resolver.assembly_count("1fah").unwrap(), 3);
    }

    #[test]
    fn provider_is_swappable_and_clearable() {
        let resolver = AssemblyResolver::new(|| {
            Arc::new(MemoryBioUnitProvider) as SharedBioUnitProvider
        });

        struct EmptyProvider;
        impl BioUnitProvider for EmptyProvider {
            fn asym_unit(&self, code: &str) -> Result<Structure, RetrievalError> {
                Err(RetrievalError::NotFound {
                    code: code.to_string(),
                })
            }
            fn has_biol_assembly(&self, _code: &str) -> Result<bool, RetrievalError> {
                Ok(false)
            }
            fn nr_biol_assemblies(&self, _code: &str) -> Result<usize, RetrievalError> {
                Ok(0)
            }
        }

        assert!(resolver.assembly("1fah", 1).is_ok());

        resolver.set_provider(Arc::new(EmptyProvider));
        assert!(!resolver.has_assembly("1fah").unwrap());
        assert!(resolver.assembly("1fah", 1).is_err());

        resolver.clear_provider();
        assert!(resolver.assembly("1fah", 1).is_ok());
    }
}
