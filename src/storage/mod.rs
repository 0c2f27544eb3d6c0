pub mod dedup;
pub mod json_file;

pub use dedup::filter_new;
pub use json_file::JsonFileStorage;

use crate::model::{Listing, StorageError};

/// Persistence for the known-set of listings.
pub trait ListingStore {
    /// Never fails: anything unreadable is logged and treated as "no prior state".
    fn load(&self) -> Vec<Listing>;

    /// Replaces the stored set with `listings`.
    fn save(&self, listings: &[Listing]) -> Result<(), StorageError>;
}
