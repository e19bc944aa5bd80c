mod in_memory_store;
mod null_store;
mod trait_def;

pub use in_memory_store::InMemorySinglesStore;
pub use null_store::NullSinglesStore;
pub use trait_def::{
    SinglesStore, StoreError, StoreResult, ISRC_ALREADY_EXISTS, SINGLE_NOT_FOUND,
};
