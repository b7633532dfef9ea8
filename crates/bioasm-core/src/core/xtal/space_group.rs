use nalgebra::Matrix4;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SpaceGroupError {
    #[error("space group '{symbol}' declares multiplicity {declared} but {actual} operators were provided")]
    OperatorCountMismatch {
        symbol: String,
        declared: usize,
        actual: usize,
    },
    #[error("operator 0 of space group '{symbol}' must be the identity")]
    NonIdentityFirstOperator { symbol: String },
}

/// A space group as declared by a source entry: short Hermann-Mauguin
/// symbol plus its symmetry operators in fractional coordinates.
///
/// The operator list comes from an external transformation table; this type
/// only enforces the structural invariants: the operator count equals the
/// declared multiplicity, and operator 0 is the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceGroup {
    short_symbol: String,
    operators: Vec<Matrix4<f64>>,
}

impl SpaceGroup {
    pub fn new(
        short_symbol: &str,
        multiplicity: usize,
        operators: Vec<Matrix4<f64>>,
    ) -> Result<Self, SpaceGroupError> {
        if operators.len() != multiplicity {
            return Err(SpaceGroupError::OperatorCountMismatch {
                symbol: short_symbol.to_string(),
                declared: multiplicity,
                actual: operators.len(),
            });
        }
        match operators.first() {
            Some(first) if *first == Matrix4::identity() => {}
            _ => {
                return Err(SpaceGroupError::NonIdentityFirstOperator {
                    symbol: short_symbol.to_string(),
                });
            }
        }
        Ok(Self {
            short_symbol: short_symbol.to_string(),
            operators,
        })
    }

    /// The triclinic group P 1: the identity operator only.
    pub fn p1() -> Self {
        Self {
            short_symbol: "P 1".to_string(),
            operators: vec![Matrix4::identity()],
        }
    }

    pub fn short_symbol(&self) -> &str {
        &self.short_symbol
    }

    pub fn num_operators(&self) -> usize {
        self.operators.len()
    }

    pub fn transformation(&self, index: usize) -> Option<&Matrix4<f64>> {
        self.operators.get(index)
    }

    pub fn operators(&self) -> &[Matrix4<f64>] {
        &self.operators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_fold_operator() -> Matrix4<f64> {
        // (x + 1/2, -y, -z)
        let mut op = Matrix4::identity();
        op[(1, 1)] = -1.0;
        op[(2, 2)] = -1.0;
        op[(0, 3)] = 0.5;
        op
    }

    #[test]
    fn p1_is_the_identity_only_group() {
        let sg = SpaceGroup::p1();
        assert_eq!(sg.short_symbol(), "P 1");
        assert_eq!(sg.num_operators(), 1);
        assert_eq!(sg.transformation(0), Some(&Matrix4::identity()));
        assert!(sg.transformation(1).is_none());
    }

    #[test]
    fn accepts_operators_matching_declared_multiplicity() {
        let sg =
            SpaceGroup::new("P 21", 2, vec![Matrix4::identity(), two_fold_operator()]).unwrap();
        assert_eq!(sg.num_operators(), 2);
        assert_eq!(sg.transformation(1), Some(&two_fold_operator()));
    }

    #[test]
    fn rejects_operator_count_mismatch() {
        let result = SpaceGroup::new("P 21 21 21", 4, vec![Matrix4::identity()]);
        assert_eq!(
            result,
            Err(SpaceGroupError::OperatorCountMismatch {
                symbol: "P 21 21 21".to_string(),
                declared: 4,
                actual: 1,
            })
        );
    }

    #[test]
    fn rejects_non_identity_first_operator() {
        let result = SpaceGroup::new("P 21", 2, vec![two_fold_operator(), Matrix4::identity()]);
        assert!(matches!(
            result,
            Err(SpaceGroupError::NonIdentityFirstOperator { .. })
        ));
    }

    #[test]
    fn rejects_empty_operator_list() {
        assert!(matches!(
            SpaceGroup::new("P 1", 0, vec![]),
            Err(SpaceGroupError::NonIdentityFirstOperator { .. })
        ));
    }
}
