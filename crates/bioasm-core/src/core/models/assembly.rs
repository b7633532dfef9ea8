use nalgebra::{Matrix4, Point3};

/// A single symmetry transformation of a biological-assembly definition.
///
/// Identifies which chains of the asymmetric unit it applies to and carries
/// a 4x4 affine matrix expressed in orthonormal coordinates. A biological
/// assembly is an ordered sequence of these; insertion order is application
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    /// Operator identifier from the source entry (e.g., "1", "2").
    pub id: String,
    /// The chain letters of the asymmetric unit this transformation applies to.
    pub chain_ids: Vec<char>,
    /// Affine transform in orthonormal coordinates.
    pub matrix: Matrix4<f64>,
}

impl Transformation {
    pub fn new(id: &str, chain_ids: Vec<char>, matrix: Matrix4<f64>) -> Self {
        Self {
            id: id.to_string(),
            chain_ids,
            matrix,
        }
    }

    /// An identity transformation. Assemblies routinely list one so that the
    /// original chains appear in the rebuilt structure alongside the
    /// symmetry copies.
    pub fn identity(id: &str, chain_ids: Vec<char>) -> Self {
        Self::new(id, chain_ids, Matrix4::identity())
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix4::identity()
    }

    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }
}

/// The transformations registered for one biological-assembly index.
///
/// Created once when the source entry's metadata is parsed; read-only
/// thereafter. Index 0 (the asymmetric unit itself) is never stored as a
/// record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BiologicalAssembly {
    pub transforms: Vec<Transformation>,
}

impl BiologicalAssembly {
    pub fn new(transforms: Vec<Transformation>) -> Self {
        Self { transforms }
    }
}
