use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a macromolecular structure.
///
/// Only the fields needed for identifier resolution and assembly
/// reconstruction are carried: identity, parent residue, and coordinates.
/// Force-field properties and connectivity are out of scope for this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// Serial number from the source file, if any.
    pub serial: i32,
    /// Element symbol (e.g., "C", "FE"); may be empty if the source omits it.
    pub element: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with default values for serial and element.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            serial: 0,
            element: String::new(),
            residue_id,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let residue_id = ResidueId::default();
        let atom = Atom::new("CA", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.serial, 0);
        assert_eq!(atom.element, "");
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let residue_id = ResidueId::default();
        let mut atom1 = Atom::new("FE", residue_id, Point3::origin());
        atom1.element = "FE".to_string();
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
