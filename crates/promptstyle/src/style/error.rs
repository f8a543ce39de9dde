//! Style registry validation errors.

/// Error returned when registry validation fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two records were declared with the same key.
    #[error("style key {key} is declared more than once ('{first}' and '{second}')")]
    DuplicateKey {
        key: u32,
        first: &'static str,
        second: &'static str,
    },
    /// A record uses a key the catalog reserves for its "no style" sentinel.
    #[error("style '{name}' uses reserved key {key}")]
    ReservedKey { key: u32, name: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_error_display() {
        let err = RegistryError::DuplicateKey {
            key: 2,
            first: "3D Clay",
            second: "Photo Realism",
        };
        let msg = err.to_string();
        assert!(msg.contains("key 2"));
        assert!(msg.contains("3D Clay"));
        assert!(msg.contains("Photo Realism"));
    }

    #[test]
    fn test_reserved_key_error_display() {
        let err = RegistryError::ReservedKey {
            key: 0,
            name: "Shadow",
        };
        assert_eq!(err.to_string(), "style 'Shadow' uses reserved key 0");
    }
}
