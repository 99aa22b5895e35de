pub mod list;
pub mod store;
pub mod task;

pub use list::TaskList;
pub use store::{FileStore, TaskStore};
