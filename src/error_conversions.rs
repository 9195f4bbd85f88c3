//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository error types, but sources
//! validating backend payloads want to bubble constraint failures up with `?`.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
