pub mod files;
pub mod store;

pub use files::{atomic_write, ensure_agenda_dir, get_agenda_dir, init_local_agenda, tasks_file};
pub use store::{load_tasks, save_tasks, StoreError};
