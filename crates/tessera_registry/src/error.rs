//! Error types for registry operations.

use crate::resource::ResourceId;

/// Errors that can occur during registry operations.
///
/// Both variants are recoverable, expected outcomes reported to the
/// immediate caller — absence and duplication are values, never panics,
/// and never converted into placeholder resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An insert was attempted with an id that is already present.
    ///
    /// The existing entry is left untouched; the insert is rejected, not
    /// merged or overwritten.
    #[error("duplicate resource id: {0}")]
    DuplicateId(ResourceId),

    /// A required lookup found no entry with the given id.
    #[error("resource not found: {0}")]
    NotFound(ResourceId),
}

impl RegistryError {
    /// Returns the id the failed operation was keyed on.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        match self {
            Self::DuplicateId(id) | Self::NotFound(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_id() {
        let dup = RegistryError::DuplicateId(ResourceId::new(5));
        assert_eq!(dup.to_string(), "duplicate resource id: 5");
        assert_eq!(dup.id(), ResourceId::new(5));

        let missing = RegistryError::NotFound(ResourceId::new(12));
        assert_eq!(missing.to_string(), "resource not found: 12");
        assert_eq!(missing.id(), ResourceId::new(12));
    }
}
