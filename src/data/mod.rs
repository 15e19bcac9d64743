mod loader;

pub use loader::{DEFAULT_POEMS_PATH, DataError, PoemStore};
