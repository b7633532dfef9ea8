use nalgebra::{Matrix3, Matrix4, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CellError {
    #[error("unit cell length {name} must be positive (got {value})")]
    NonPositiveLength { name: &'static str, value: f64 },
    #[error("unit cell angle {name} must lie strictly between 0 and 180 degrees (got {value})")]
    AngleOutOfRange { name: &'static str, value: f64 },
}

/// Unit cell parameters: axis lengths in Angstroms, angles in degrees.
///
/// Construction validates the parameters, so every `CrystalCell` value can
/// be orthogonalized without producing NaN or garbage geometry; the
/// conversions below are total functions over constructed cells. Angles at
/// exactly 0 or 180 degrees (where the cell degenerates) are rejected;
/// angles near 90 degrees, the common case, are well conditioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalCell {
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl CrystalCell {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self, CellError> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !(value > 0.0) {
                return Err(CellError::NonPositiveLength { name, value });
            }
        }
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(value > 0.0 && value < 180.0) {
                return Err(CellError::AngleOutOfRange { name, value });
            }
        }
        Ok(Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Angle alpha in degrees.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Angle beta in degrees.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Angle gamma in degrees.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Unit cell volume in cubic Angstroms.
    pub fn volume(&self) -> f64 {
        self.a * self.b * self.c * self.volume_factor()
    }

    // v = sqrt(1 - cos^2(a) - cos^2(b) - cos^2(g) + 2 cos(a) cos(b) cos(g)),
    // strictly positive for a valid (non-degenerate) cell.
    fn volume_factor(&self) -> f64 {
        let ca = self.alpha.to_radians().cos();
        let cb = self.beta.to_radians().cos();
        let cg = self.gamma.to_radians().cos();
        (1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg).sqrt()
    }

    /// The matrix converting fractional (crystal-basis) coordinates to
    /// orthonormal coordinates, using the PDB axes convention (NCODE=1):
    /// x along a, y in the a-b plane, z completing the right-handed frame.
    pub fn orthogonalization_matrix(&self) -> Matrix3<f64> {
        let ca = self.alpha.to_radians().cos();
        let cb = self.beta.to_radians().cos();
        let cg = self.gamma.to_radians().cos();
        let sg = self.gamma.to_radians().sin();
        let v = self.volume_factor();

        Matrix3::new(
            self.a,
            self.b * cg,
            self.c * cb,
            0.0,
            self.b * sg,
            self.c * (ca - cb * cg) / sg,
            0.0,
            0.0,
            self.c * v / sg,
        )
    }

    /// The inverse of [`Self::orthogonalization_matrix`], in closed form
    /// (both matrices are upper triangular).
    pub fn fractionalization_matrix(&self) -> Matrix3<f64> {
        let ca = self.alpha.to_radians().cos();
        let cb = self.beta.to_radians().cos();
        let cg = self.gamma.to_radians().cos();
        let sg = self.gamma.to_radians().sin();
        let v = self.volume_factor();

        Matrix3::new(
            1.0 / self.a,
            -cg / (self.a * sg),
            (ca * cg - cb) / (self.a * v * sg),
            0.0,
            1.0 / (self.b * sg),
            (cb * cg - ca) / (self.b * v * sg),
            0.0,
            0.0,
            sg / (self.c * v),
        )
    }

    /// Converts an affine transform expressed in fractional coordinates into
    /// the orthonormal basis.
    ///
    /// For a fractional operator x' = R x + t, the orthonormal equivalent is
    /// R_orth = Mo R Mo^-1 and t_orth = Mo t, with Mo the orthogonalization
    /// matrix. Pure function of (cell, operator).
    pub fn transf_to_orthonormal(&self, fractional: &Matrix4<f64>) -> Matrix4<f64> {
        let mo = self.orthogonalization_matrix();
        let mo_inv = self.fractionalization_matrix();

        let rot = fractional.fixed_view::<3, 3>(0, 0).into_owned();
        let trans: Vector3<f64> = fractional.fixed_view::<3, 1>(0, 3).into_owned();

        let rot_orth = mo * rot * mo_inv;
        let trans_orth = mo * trans;

        let mut out = Matrix4::identity();
        out.fixed_view_mut::<3, 3>(0, 0).copy_from(&rot_orth);
        out.fixed_view_mut::<3, 1>(0, 3).copy_from(&trans_orth);
        out
    }
}
