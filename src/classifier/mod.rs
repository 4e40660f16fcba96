//! Category classifier.
//!
//! Decides, from a file's name alone, whether it is deleted directly, parsed
//! for references, or kept.
//!
//! # Architecture
//!
//! - [`extensions`]: the fixed extension table and [`FileKind`] inference
//! - [`skin`]: skin element file name markers
//! - [`options`]: user [`Selection`] and the derived [`DeletionOptions`]
//! - [`classify`](mod@classify): the ordered rule table
//!
//! Classification never touches the filesystem. Resolving the references
//! found inside `.osu`/`.osb` files is the scanner's job.

pub mod classify;
pub mod extensions;
pub mod options;
pub mod record;
pub mod skin;

pub use classify::{classify, Classification, ReferenceKind};
pub use extensions::FileKind;
pub use options::{DeletionOptions, Selection};
pub use record::FileRecord;
pub use skin::{is_skin_element_name, SKIN_FILENAME_PREFIXES};
