use crate::core::models::system::SystemError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Cannot rename {field}: {old} old names but {new} new names")]
    MismatchedNames {
        field: &'static str,
        old: usize,
        new: usize,
    },

    #[error("Selection is empty: provide atom names, residue names, or both")]
    EmptySelector,

    #[error(transparent)]
    System(#[from] SystemError),
}
