use serde::{Deserialize, Serialize};
use space_issue_store::Issue;

/// Issue with the property key it is stored under.
///
/// The key can differ from `spaceId` when the record was created with a
/// `spaces/`-prefixed id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyedIssue {
    pub key: String,
    #[serde(flatten)]
    pub issue: Issue,
}

/// Inclusivity help flag for one space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HelpStatus {
    pub key: String,
    pub inclusivity_help: bool,
}
