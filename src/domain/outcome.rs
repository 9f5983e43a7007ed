//! Explicit degrade-or-abort values for collaborator lookups.
//!
//! Callers pick a path deliberately: `or_default_logged` for lookups that may
//! degrade (company data, gender, mission), `required` for steps that must
//! abort the current profile (profile fetch, template selection, drafting).

use super::DomainError;
use tracing::warn;

/// Result of a lookup against an external collaborator.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The collaborator answered with usable data.
    Found(T),
    /// The collaborator answered, but had nothing for us.
    Empty,
    /// The call failed; the reason is kept for logging or propagation.
    Failed(DomainError),
}

impl<T> Outcome<T> {
    /// Degrade path: data when found, `T::default()` otherwise. Failures are logged.
    pub fn or_default_logged(self, what: &str) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Found(v) => v,
            Outcome::Empty => T::default(),
            Outcome::Failed(e) => {
                warn!(lookup = what, error = %e, "lookup failed, using default");
                T::default()
            }
        }
    }

    /// Abort path: data when found, an error otherwise. `Empty` becomes `on_empty`.
    pub fn required(self, on_empty: impl FnOnce() -> DomainError) -> Result<T, DomainError> {
        match self {
            Outcome::Found(v) => Ok(v),
            Outcome::Empty => Err(on_empty()),
            Outcome::Failed(e) => Err(e),
        }
    }
}

impl<T> From<Result<Option<T>, DomainError>> for Outcome<T> {
    fn from(r: Result<Option<T>, DomainError>) -> Self {
        match r {
            Ok(Some(v)) => Outcome::Found(v),
            Ok(None) => Outcome::Empty,
            Err(e) => Outcome::Failed(e),
        }
    }
}
