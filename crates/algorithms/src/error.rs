use thiserror::Error;

/// Error returned by the fallible lookup table queries.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LookupTableError {
    /// The query needs at least one sample point.
    #[error("The lookup table is empty: no drawable segment was sampled.")]
    Empty,
}
