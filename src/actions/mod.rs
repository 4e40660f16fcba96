//! File actions module.
//!
//! Currently a single action: permanent removal of the deletion set, with a
//! dry-run mode that only reports what would be removed.
//!
//! ```no_run
//! use osu_cleaner::actions::delete::remove_file;
//! use std::path::Path;
//!
//! let result = remove_file(Path::new("/games/osu!/Songs/1 A - B/video.mp4"));
//! ```

pub mod delete;

// Re-export commonly used types
pub use delete::{
    delete_batch, remove_file, simulate_remove, BatchDeleteResult, DeleteConfig, DeleteError,
    DeleteProgressCallback, DeleteResult,
};
