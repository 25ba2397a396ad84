//! Perfil Core Library
//!
//! Domain model, store, validation, templates and JSON interchange for
//! lithologic/constructive well profiles.

pub mod error;
pub mod labels;
pub mod store;
pub mod templates;
pub mod types;
pub mod validate;

// Re-export commonly used types and functions
pub use error::CoreError;
pub use store::WellStore;
pub use templates::{builtin_templates, WellTemplate};
pub use types::{
    ConstructiveElement, ConstructiveProfile, ElementKind, ElementType, LithologicLayer, SoilType,
    VocReading, WaterLevel, Well, WellInfo,
};
pub use validate::{validate, ValidationReport};

/// Version information for the perfil core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
