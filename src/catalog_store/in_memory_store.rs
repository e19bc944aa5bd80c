//! In-memory singles store.
//!
//! Keeps every single in process memory, nothing survives a restart.

use std::collections::HashMap;

use super::trait_def::{SinglesStore, StoreError, StoreResult};
use crate::catalog::MusicSingleRelease;

/// A [`SinglesStore`] backed by a map from ISRC to single.
///
/// `order` holds the keys in creation order and always contains exactly
/// the keys of `singles`.
#[derive(Debug, Default)]
pub struct InMemorySinglesStore {
    singles: HashMap<String, MusicSingleRelease>,
    order: Vec<String>,
}

impl InMemorySinglesStore {
    pub fn new() -> InMemorySinglesStore {
        InMemorySinglesStore::default()
    }

    pub fn len(&self) -> usize {
        self.singles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_empty()
    }

    fn position_of(&self, isrc: &str) -> Option<usize> {
        self.order.iter().position(|key| key == isrc)
    }
}

impl SinglesStore for InMemorySinglesStore {
    fn create_single(&mut self, single: MusicSingleRelease) -> StoreResult<MusicSingleRelease> {
        let isrc = single.isrc().to_string();
        if self.singles.contains_key(&isrc) {
            return Err(StoreError::DuplicateKey { isrc });
        }
        self.order.push(isrc.clone());
        self.singles.insert(isrc, single.clone());
        Ok(single)
    }

    fn list_singles(&self) -> StoreResult<Vec<MusicSingleRelease>> {
        Ok(self
            .order
            .iter()
            .filter_map(|isrc| self.singles.get(isrc))
            .cloned()
            .collect())
    }

    fn read_single(&self, isrc: &str) -> StoreResult<MusicSingleRelease> {
        self.singles
            .get(isrc)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                isrc: isrc.to_owned(),
            })
    }

    fn update_single(
        &mut self,
        isrc: &str,
        updated_single: MusicSingleRelease,
    ) -> StoreResult<MusicSingleRelease> {
        let position = self.position_of(isrc).ok_or_else(|| StoreError::NotFound {
            isrc: isrc.to_owned(),
        })?;

        let new_isrc = updated_single.isrc().to_string();
        // Re-keying onto another stored single would silently drop it.
        if new_isrc != isrc && self.singles.contains_key(&new_isrc) {
            return Err(StoreError::DuplicateKey { isrc: new_isrc });
        }

        self.singles.remove(isrc);
        self.order[position] = new_isrc.clone();
        self.singles.insert(new_isrc, updated_single.clone());
        Ok(updated_single)
    }

    fn delete_single(&mut self, isrc: &str) -> StoreResult<()> {
        let position = self.position_of(isrc).ok_or_else(|| StoreError::NotFound {
            isrc: isrc.to_owned(),
        })?;
        self.order.remove(position);
        self.singles.remove(isrc);
        Ok(())
    }
}
