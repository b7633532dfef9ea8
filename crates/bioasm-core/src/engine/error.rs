use crate::core::io::traits::RetrievalError;
use thiserror::Error;

/// Failures of biological-assembly resolution and reconstruction.
///
/// `NotAvailable` and `NoTransformations` are deliberately distinct: the
/// first means the entry declares no assembly at the requested index, the
/// second that an assembly was declared but its transformation list was
/// never populated. Neither is ever downgraded to a silent empty result.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("no biological assembly available for assembly nr {0}")]
    NotAvailable(usize),

    #[error("no transformations available to recreate biological assembly nr {index}")]
    NoTransformations { index: usize },

    #[error("transformation references chain '{chain}' which is not present in the asymmetric unit")]
    MissingChain { chain: char },

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}
