//! Validated path and entry types.

mod dest_dir;
mod entry_type;
mod safe_path;

pub use dest_dir::DestDir;
pub use entry_type::EntryType;
pub use safe_path::SafePath;
pub(crate) use safe_path::normalize_lexically;
