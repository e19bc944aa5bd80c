//! SinglesStore trait definition.
//!
//! This trait abstracts storage of music singles so that the server works
//! with any backend (in-memory today, a durable store later) without
//! knowing which one it holds.

use thiserror::Error;

use crate::catalog::{MusicSingleRelease, ValidationError};

pub const ISRC_ALREADY_EXISTS: &str = "ISRC already exists";
pub const SINGLE_NOT_FOUND: &str = "Single not found";

/// Errors reported by a [`SinglesStore`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{}", ISRC_ALREADY_EXISTS)]
    DuplicateKey { isrc: String },

    #[error("{}", SINGLE_NOT_FOUND)]
    NotFound { isrc: String },

    #[error("Operation '{operation}' is not implemented by this store")]
    NotImplemented { operation: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for singles storage backends, keyed by ISRC.
///
/// Every method defaults to [`StoreError::NotImplemented`]: a backend that
/// leaves one out fails loudly when it is called. Implementations carry no
/// locking of their own, callers sharing a store across threads must
/// serialize access.
pub trait SinglesStore: Send {
    /// Store a new single. Fails with `DuplicateKey` if its ISRC is taken.
    fn create_single(&mut self, single: MusicSingleRelease) -> StoreResult<MusicSingleRelease> {
        let _ = single;
        Err(StoreError::NotImplemented {
            operation: "create_single",
        })
    }

    /// All stored singles, in the order they were created.
    fn list_singles(&self) -> StoreResult<Vec<MusicSingleRelease>> {
        Err(StoreError::NotImplemented {
            operation: "list_singles",
        })
    }

    /// The single stored under `isrc`, or `NotFound`.
    fn read_single(&self, isrc: &str) -> StoreResult<MusicSingleRelease> {
        let _ = isrc;
        Err(StoreError::NotImplemented {
            operation: "read_single",
        })
    }

    /// Replace the single stored under `isrc` with `updated_single`, which is
    /// then stored under its own ISRC.
    fn update_single(
        &mut self,
        isrc: &str,
        updated_single: MusicSingleRelease,
    ) -> StoreResult<MusicSingleRelease> {
        let _ = (isrc, updated_single);
        Err(StoreError::NotImplemented {
            operation: "update_single",
        })
    }

    /// Remove the single stored under `isrc`, or fail with `NotFound`.
    fn delete_single(&mut self, isrc: &str) -> StoreResult<()> {
        let _ = isrc;
        Err(StoreError::NotImplemented {
            operation: "delete_single",
        })
    }
}
