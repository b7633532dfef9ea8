use super::assembly::BiologicalAssembly;
use crate::core::xtal::info::CrystallographicInfo;
use std::collections::BTreeMap;

/// Entry-level metadata attached to a loaded structure.
///
/// Populated once by the loading backend when the source file is parsed and
/// treated as a read-only snapshot afterwards; resolution and assembly
/// reconstruction only ever read from it. A rebuilt assembly inherits a copy
/// of this header from its asymmetric unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureHeader {
    /// The 4-character PDB code, lowercase, if the entry has one.
    pub pdb_code: Option<String>,
    /// Title of the entry; empty if the source provides none.
    pub title: String,
    /// Unit cell, space group, and NCS operators, if crystallographic.
    pub crystallographic: Option<CrystallographicInfo>,
    /// Biological-assembly definitions keyed by assembly index (1..=N).
    /// Index 0 denotes the asymmetric unit itself and is never stored.
    pub bio_assemblies: BTreeMap<usize, BiologicalAssembly>,
}

impl StructureHeader {
    pub fn assembly(&self, index: usize) -> Option<&BiologicalAssembly> {
        self.bio_assemblies.get(&index)
    }

    /// Number of true biological assemblies declared for this entry
    /// (the synthetic index 0 is not counted).
    pub fn num_assemblies(&self) -> usize {
        self.bio_assemblies.len()
    }
}
