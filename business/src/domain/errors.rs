/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// A missing record is not an error: repository lookups return `Option`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// A unique constraint in the store rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    /// Any other driver or connection failure.
    #[error("repository.database_error")]
    DatabaseError,
}
