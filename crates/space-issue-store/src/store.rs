//! Issue record store over an injected property store.
//!
//! Each operation is a fresh read and/or write against the backend; nothing
//! is cached between calls. Read-modify-write operations take no lock, so
//! concurrent writers on the same space can lose updates.

use tracing::{debug, info};

use crate::codec;
use crate::error::Result;
use crate::model::Issue;
use crate::properties::PropertyStore;

/// One issue record per chat space, keyed by the space id the caller passes.
#[derive(Debug)]
pub struct IssueRecordStore<P> {
    props: P,
}

impl<P: PropertyStore> IssueRecordStore<P> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    #[must_use]
    pub const fn new(props: P) -> Self {
        Self { props }
    }

    #[must_use]
    pub const fn properties(&self) -> &P {
        &self.props
    }

    #[must_use]
    pub fn into_inner(self) -> P {
        self.props
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Open a new issue for a space, replacing any record stored under
    /// `space_id`.
    ///
    /// The record's own `spaceId` has the `spaces/` prefix stripped, but the
    /// record is stored and re-read under `space_id` exactly as given. The
    /// returned issue is the re-read value.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write or re-read fails.
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        space_id: &str,
        subscription_id: &str,
    ) -> Result<Issue> {
        let issue = Issue::opened(title, description, space_id, subscription_id);
        self.write(space_id, &issue)?;
        info!(key = space_id, space = %issue.space_id, "Opened issue");

        self.read(space_id)
    }

    /// Close the issue of a space.
    ///
    /// A missing or empty `resolution` becomes `"Unknown"`; `report_url` is
    /// stored verbatim. Closing twice simply overwrites. Returns the updated
    /// record without re-reading it.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the space has no record, `Decode` if the
    /// stored value is malformed, or the backend's error.
    pub fn close(
        &mut self,
        space_id: &str,
        resolution: Option<&str>,
        report_url: &str,
    ) -> Result<Issue> {
        let mut issue = self.read(space_id)?;
        issue.close(resolution, report_url);
        self.write(space_id, &issue)?;
        info!(key = space_id, resolution = %issue.resolution, "Closed issue");

        Ok(issue)
    }

    /// Stop offering inclusivity help in a space. There is no way back
    /// short of creating a new issue for the space.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the space has no record, `Decode` if the
    /// stored value is malformed, or the backend's error.
    pub fn disable_inclusivity_help(&mut self, space_id: &str) -> Result<()> {
        let mut issue = self.read(space_id)?;
        issue.inclusivity_help = false;
        self.write(space_id, &issue)?;
        info!(key = space_id, "Disabled inclusivity help");
        Ok(())
    }

    /// Whether the bot should offer inclusivity help in a space.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the space has no record, `Decode` if the
    /// stored value is malformed, or the backend's error.
    pub fn should_help_with_inclusivity(&self, space_id: &str) -> Result<bool> {
        Ok(self.read(space_id)?.inclusivity_help)
    }

    /// Fetch the record stored under `space_id`.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the space has no record, `Decode` if the
    /// stored value is malformed, or the backend's error.
    pub fn get(&self, space_id: &str) -> Result<Issue> {
        self.read(space_id)
    }

    /// Every stored record with its key, ordered by key.
    ///
    /// # Errors
    ///
    /// Fails on the first key whose value is not a valid record, or with the
    /// backend's error.
    pub fn list(&self) -> Result<Vec<(String, Issue)>> {
        let keys = self.props.keys()?;
        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let issue = self.read(&key)?;
            records.push((key, issue));
        }
        Ok(records)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn read(&self, key: &str) -> Result<Issue> {
        let raw = self.props.get_property(key)?;
        debug!(key, found = raw.is_some(), "Read issue record");
        codec::decode(key, raw)
    }

    fn write(&mut self, key: &str, issue: &Issue) -> Result<()> {
        let json = codec::encode(issue)?;
        debug!(key, bytes = json.len(), "Write issue record");
        self.props.set_property(key, &json)
    }
}
