use super::atom::Atom;
use super::chain::Chain;
use super::header::StructureHeader;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::{Residue, ResidueNumber};
use slotmap::SlotMap;
use std::collections::HashMap;

/// A fully materialized macromolecular structure: first model only, ligands
/// included.
///
/// Serves both as the asymmetric unit returned by a retrieval backend and as
/// the composite structure produced by assembly reconstruction. Chains keep
/// their insertion order, and unlike the asymmetric unit a rebuilt assembly
/// may legitimately contain several chains with the same letter (symmetric
/// copies); per-letter lookup resolves to the first instance, and copies are
/// told apart by [`Chain::operator_id`].
#[derive(Debug, Clone, Default)]
pub struct Structure {
    header: StructureHeader,
    atoms: SlotMap<AtomId, Atom>,
    residues: SlotMap<ResidueId, Residue>,
    chains: SlotMap<ChainId, Chain>,
    /// Chain IDs in insertion order; iteration follows this.
    chain_order: Vec<ChainId>,
    /// First chain registered under each letter.
    chain_id_map: HashMap<char, ChainId>,
    residue_id_map: HashMap<(ChainId, ResidueNumber), ResidueId>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &StructureHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut StructureHeader {
        &mut self.header
    }

    pub fn set_header(&mut self, header: StructureHeader) {
        self.header = header;
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns an iterator over all atoms in the structure.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in insertion order.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(move |&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    pub fn num_chains(&self) -> usize {
        self.chain_order.len()
    }

    pub fn num_residues(&self) -> usize {
        self.residues.len()
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Finds a chain by its letter.
    ///
    /// When several chains share the letter (assembly copies), the first one
    /// added wins; in an asymmetric unit letters are unique so this is the
    /// chain.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    pub fn find_residue_by_number(
        &self,
        chain_id: ChainId,
        number: ResidueNumber,
    ) -> Option<ResidueId> {
        self.residue_id_map.get(&(chain_id, number)).copied()
    }

    /// Adds a new chain instance.
    ///
    /// Always creates a fresh chain, even when the letter is already in use;
    /// assemblies contain multiple physical copies of the same chain. The
    /// per-letter lookup keeps pointing at the first instance.
    pub fn add_chain(&mut self, id: char) -> ChainId {
        self.insert_chain(Chain::new(id, None))
    }

    /// Adds a new chain instance tagged with the symmetry operator that
    /// produced it.
    pub fn add_chain_with_operator(&mut self, id: char, operator_id: &str) -> ChainId {
        self.insert_chain(Chain::new(id, Some(operator_id.to_string())))
    }

    fn insert_chain(&mut self, chain: Chain) -> ChainId {
        let letter = chain.id;
        let chain_id = self.chains.insert(chain);
        self.chain_order.push(chain_id);
        self.chain_id_map.entry(letter).or_insert(chain_id);
        chain_id
    }

    /// Adds a residue to a chain, or returns the existing one.
    ///
    /// Idempotent per (chain instance, residue number); two copies of the
    /// same source chain are distinct chain instances and do not collide.
    ///
    /// Returns `None` if the chain does not exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        number: ResidueNumber,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(number, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a residue, overriding the atom's `residue_id` with
    /// the target residue.
    ///
    /// Returns `None` if the residue does not exist.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }

        atom.residue_id = residue_id;
        let atom_id = self.atoms.insert(atom);

        let residue = self
            .residues
            .get_mut(residue_id)
            .expect("residue checked above");
        residue.atoms.push(atom_id);

        Some(atom_id)
    }
}
