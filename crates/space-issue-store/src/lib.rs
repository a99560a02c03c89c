//! `space-issue-store` — per-space issue records for a chat-bot add-on.
//!
//! Each chat space owns at most one [`Issue`], stored as JSON under the space
//! id in a string-keyed [`PropertyStore`]. The store is injected, so tests can
//! run against [`MemoryProperties`] and the CLI against [`FileProperties`].
//!
//! # Quick Start
//!
//! ```
//! use space_issue_store::{IssueRecordStore, MemoryProperties, Status};
//!
//! let mut store = IssueRecordStore::new(MemoryProperties::new());
//!
//! let issue = store.create("Login broken", "500 on submit", "spaces/AAA", "sub-1").unwrap();
//! assert_eq!(issue.space_id, "AAA");
//! assert!(store.should_help_with_inclusivity("spaces/AAA").unwrap());
//!
//! store.disable_inclusivity_help("spaces/AAA").unwrap();
//! let closed = store.close("spaces/AAA", None, "https://example.com/report").unwrap();
//! assert_eq!(closed.status, Status::Closed);
//! assert_eq!(closed.resolution, "Unknown");
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod properties;
pub mod store;

pub use error::{Result, StoreError};
pub use model::{Issue, SPACE_PREFIX, Status, UNKNOWN_RESOLUTION, normalize_space_id};
pub use properties::{FileProperties, MemoryProperties, PropertyStore};
pub use store::IssueRecordStore;
