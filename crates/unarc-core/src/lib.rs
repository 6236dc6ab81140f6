//! Extract zip and 7z archives into a sibling folder.
//!
//! `unarc-core` materialises every entry of an archive under
//! `parent(archive)/stem(archive)`, creating intermediate directories as
//! needed. Paths that already exist are resolved through an
//! [`OverwritePolicy`], and the source archive can be deleted once every
//! entry was processed. Entry paths that would escape the destination are
//! rejected.
//!
//! # Examples
//!
//! ```no_run
//! use unarc_core::{ExtractionRequest, NeverOverwrite, extract};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ExtractionRequest::new("/proj/assets/photos.zip")?.delete_source(true);
//! let report = extract(&request, &mut NeverOverwrite)?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod command;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod policy;
pub mod report;
pub mod request;
pub mod security;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract;
pub use api::extract_archive;
pub use api::extract_with_progress;
pub use command::ArchiveCommand;
pub use command::CommandContext;
pub use command::CommandRegistry;
pub use command::ConfirmDelete;
pub use command::DeleteSource;
pub use command::ExtractCommand;
pub use config::ExtractionConfig;
pub use error::ExtractionError;
pub use error::QuotaResource;
pub use error::Result;
pub use formats::ArchiveType;
pub use formats::detect::SUPPORTED_EXTENSIONS;
pub use formats::detect::detect_format;
pub use formats::detect::is_supported_archive;
pub use policy::AlwaysOverwrite;
pub use policy::NeverOverwrite;
pub use policy::OverwriteDecision;
pub use policy::OverwritePolicy;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use request::ExtractionRequest;

// Re-export types module for easier access
pub use types::DestDir;
pub use types::EntryType;
pub use types::SafePath;
