pub mod error;
pub mod slot;
mod store;

pub use crate::store::FavoritesStore;
