use super::error::AssemblyError;
use crate::core::models::assembly::Transformation;
use crate::core::models::structure::Structure;
use tracing::debug;

/// Rebuilds a biological assembly from an asymmetric unit and an ordered
/// transformation sequence.
///
/// For each transformation in order, every chain it names is deep-copied,
/// its atom coordinates are mapped through the 4x4 affine matrix, and the
/// copy is appended to the output. Identity transformations still produce
/// copies: each copy is a distinct physical chain instance, tagged with the
/// operator id that produced it. The output inherits the asymmetric unit's
/// header (title, crystallographic info) but none of its chain instances,
/// and shares no mutable state with it.
///
/// Deterministic: the same inputs always yield bit-identical coordinates.
/// Performs no I/O; fails only on inputs that reference missing chains.
pub fn build(
    asym_unit: &Structure,
    transforms: &[Transformation],
) -> Result<Structure, AssemblyError> {
    let mut assembly = Structure::new();
    assembly.set_header(asym_unit.header().clone());

    for transformation in transforms {
        for &letter in &transformation.chain_ids {
            let chain_id = asym_unit
                .find_chain_by_id(letter)
                .ok_or(AssemblyError::MissingChain { chain: letter })?;
            let chain = asym_unit.chain(chain_id).expect("looked-up chain exists");

            let copy_id = assembly.add_chain_with_operator(letter, &transformation.id);
            for &residue_id in chain.residues() {
                let residue = asym_unit
                    .residue(residue_id)
                    .expect("chain residue exists");
                let copy_residue = assembly
                    .add_residue(copy_id, residue.number, &residue.name)
                    .expect("output chain exists");
                for &atom_id in residue.atoms() {
                    let mut atom = asym_unit
                        .atom(atom_id)
                        .expect("residue atom exists")
                        .clone();
                    atom.position = transformation.transform_point(&atom.position);
                    assembly.add_atom_to_residue(copy_residue, atom);
                }
            }
        }
    }

    debug!(
        chains = assembly.num_chains(),
        atoms = assembly.num_atoms(),
        "assembly rebuilt"
    );
    Ok(assembly)
}
