mod catalog;
pub mod error;
mod locator;
pub mod models;

pub use crate::catalog::Catalog;
pub use crate::locator::{Locator, Resolution};
