pub mod codec;
pub mod files;
pub mod store;

pub use codec::{decode_flag, decode_tasks, encode_flag, encode_tasks};
pub use store::{FileStore, KeyValueStore, DARK_MODE_KEY, TASKS_KEY};

#[cfg(test)]
pub use store::MemoryStore;
