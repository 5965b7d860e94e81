//! Todo module
//!
//! Owner-scoped todo records and their storage.

mod file_store;
mod model;
mod repository;

pub use file_store::FileTodoStore;
pub use model::*;
pub use repository::TodoRepository;
