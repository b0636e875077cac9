//! Registry error types.

/// Errors reported by the [`Registry`](crate::Registry).
///
/// Only invalid arguments are errors; missing entities and kinds that were
/// never inserted simply produce empty results.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A query named no component kinds.
    #[error("query must name at least one component kind")]
    EmptyQuery,
}
