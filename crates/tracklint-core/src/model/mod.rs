pub mod file_index;
pub mod file_meta;
pub mod violation;

pub use file_index::FileIndex;
pub use file_meta::{FileMetadata, Permission};
pub use violation::{Rule, Violation};
