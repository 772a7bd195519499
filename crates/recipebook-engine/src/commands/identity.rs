//! Identity command handlers with boundary logging.
//!
//! Registration is a one-time, guarded initialization: once an identity
//! exists, further registrations fail with `AlreadyExists` and the store is
//! left untouched.

#![allow(clippy::result_large_err)]

use recipebook_core::errors::JournalError;
use recipebook_core::{log_op_end, log_op_error, log_op_start, Identity};
use recipebook_store::errors::Result;
use recipebook_store::RecipeStore;

/// Fetch the current identity, if one was registered
///
/// ## Errors
///
/// - `StorageUnavailable`: Database error
pub fn identity_current(store: &RecipeStore) -> Result<Option<Identity>> {
    log_op_start!("identity_current");
    let start = std::time::Instant::now();

    let result = store.current_identity().map_err(|e| {
        log_op_error!(
            "identity_current",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "identity_current",
        duration_ms = start.elapsed().as_millis() as u64,
        found = result.is_some()
    );

    Ok(result)
}

/// Register the journal's identity
///
/// ## Arguments
///
/// - `name`: Display name as entered by the user
/// - `store`: The open recipe store
///
/// ## Returns
///
/// The newly created Identity
///
/// ## Errors
///
/// - `Validation`: Name is empty after trimming
/// - `AlreadyExists`: An identity is already registered
/// - `StorageUnavailable`: Database error
pub fn identity_register(name: &str, store: &RecipeStore) -> Result<Identity> {
    log_op_start!("identity_register");
    let start = std::time::Instant::now();

    let identity = identity_register_impl(name, store).map_err(|e| {
        log_op_error!(
            "identity_register",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "identity_register",
        duration_ms = start.elapsed().as_millis() as u64,
        identity_id = identity.id.0
    );

    Ok(identity)
}

fn identity_register_impl(name: &str, store: &RecipeStore) -> Result<Identity> {
    if let Some(existing) = store.current_identity()? {
        return Err(JournalError::IdentityAlreadyExists {
            name: existing.name,
        }
        .into());
    }

    store.create_identity(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook_core::ExErrorKind;

    #[test]
    fn test_register_then_current() {
        let store = RecipeStore::open_in_memory().unwrap();
        assert!(identity_current(&store).unwrap().is_none());

        let identity = identity_register("Fati", &store).unwrap();

        assert_eq!(identity_current(&store).unwrap(), Some(identity));
    }

    #[test]
    fn test_second_registration_rejected() {
        let store = RecipeStore::open_in_memory().unwrap();
        identity_register("Fati", &store).unwrap();

        let err = identity_register("Amina", &store).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::AlreadyExists);
        assert_eq!(err.entity_id(), Some("Fati"));
        assert_eq!(identity_current(&store).unwrap().unwrap().name, "Fati");
    }

    #[test]
    fn test_blank_registration_rejected() {
        let store = RecipeStore::open_in_memory().unwrap();

        let err = identity_register("  ", &store).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Validation);
        assert!(identity_current(&store).unwrap().is_none());
    }
}
