//! Errors raised while assembling domain data.

use thiserror::Error;

use crate::ids::AbilityId;

/// Problems found while building an [`crate::AbilityCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("ability {0:?} is defined more than once")]
    DuplicateId(AbilityId),

    #[error("ability name '{0}' is used by more than one entry")]
    DuplicateName(String),

    #[error("ability {id:?} declares zero charges")]
    ZeroCharges { id: AbilityId },

    #[error("ability '{0}' is not in the catalog")]
    UnknownName(String),
}
