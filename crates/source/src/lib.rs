pub mod backend;
pub mod error;
mod loader;
mod session;

pub use crate::backend::SourceBackend;
pub use crate::loader::Loader;
pub use crate::session::{LoadSession, LoadState, LoadTicket};
use std::sync::Arc;

pub type BackendHandle = Arc<dyn SourceBackend + Send + Sync>;
