use super::cell::CrystalCell;
use super::space_group::SpaceGroup;
use nalgebra::Matrix4;

/// Crystallographic information attached to a structure's header: the unit
/// cell, the space group, and any NCS operators the entry declares.
#[derive(Debug, Clone, PartialEq)]
pub struct CrystallographicInfo {
    cell: CrystalCell,
    space_group: SpaceGroup,
    /// NCS operators needed to complete the full asymmetric unit from a
    /// deposited partial one (common for viral capsids). Only operators the
    /// entry marks as still-to-apply are kept; "given" operators are never
    /// stored.
    ncs_operators: Option<Vec<Matrix4<f64>>>,
}

impl CrystallographicInfo {
    pub fn new(cell: CrystalCell, space_group: SpaceGroup) -> Self {
        Self {
            cell,
            space_group,
            ncs_operators: None,
        }
    }

    pub fn with_ncs_operators(
        cell: CrystalCell,
        space_group: SpaceGroup,
        ncs_operators: Vec<Matrix4<f64>>,
    ) -> Self {
        Self {
            cell,
            space_group,
            ncs_operators: Some(ncs_operators),
        }
    }

    pub fn cell(&self) -> &CrystalCell {
        &self.cell
    }

    pub fn space_group(&self) -> &SpaceGroup {
        &self.space_group
    }

    pub fn ncs_operators(&self) -> Option<&[Matrix4<f64>]> {
        self.ncs_operators.as_deref()
    }

    pub fn a(&self) -> f64 {
        self.cell.a()
    }

    pub fn b(&self) -> f64 {
        self.cell.b()
    }

    pub fn c(&self) -> f64 {
        self.cell.c()
    }

    pub fn alpha(&self) -> f64 {
        self.cell.alpha()
    }

    pub fn beta(&self) -> f64 {
        self.cell.beta()
    }

    pub fn gamma(&self) -> f64 {
        self.cell.gamma()
    }

    /// All space-group symmetry operators expressed in the orthonormal
    /// basis, in operator order; the result has exactly
    /// `space_group().num_operators()` entries.
    ///
    /// Operator 0 is the identity and is copied verbatim rather than run
    /// through the basis change, so it stays bit-exact.
    pub fn transformations_orthonormal(&self) -> Vec<Matrix4<f64>> {
        let mut transforms = Vec::with_capacity(self.space_group.num_operators());
        for (index, operator) in self.space_group.operators().iter().enumerate() {
            if index == 0 {
                transforms.push(*operator);
            } else {
                transforms.push(self.cell.transf_to_orthonormal(operator));
            }
        }
        transforms
    }
}
