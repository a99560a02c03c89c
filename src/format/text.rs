//! Text formatting functions for `spi`.
//!
//! Plain text (non-ANSI) output:
//! - Status icons (○ ✓)
//! - One-line issue summaries
//! - Multi-line issue details

use space_issue_store::{Issue, Status};

/// Status icon characters.
pub mod icons {
    /// Opened issue (hollow circle).
    pub const OPENED: &str = "○";
    /// Closed issue (checkmark).
    pub const CLOSED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: &Status) -> &'static str {
    match status {
        Status::Opened => icons::OPENED,
        Status::Closed => icons::CLOSED,
    }
}

/// Format a single-line issue summary.
///
/// Format: `{icon} {key} [{status}] {title}`
#[must_use]
pub fn format_issue_line(key: &str, issue: &Issue) -> String {
    format!(
        "{} {} [{}] {}",
        format_status_icon(&issue.status),
        key,
        issue.status,
        issue.title,
    )
}

/// Format the full record for `show`.
#[must_use]
pub fn format_issue_details(key: &str, issue: &Issue) -> String {
    let mut lines = vec![
        format_issue_line(key, issue),
        format!("  Space:        {}", issue.space_id),
        format!("  Subscription: {}", issue.subscription_id),
        format!("  Help:         {}", format_help_flag(issue.inclusivity_help)),
    ];
    if issue.status.is_terminal() {
        lines.push(format!("  Resolution:   {}", issue.resolution));
        if !issue.report_url.is_empty() {
            lines.push(format!("  Report:       {}", issue.report_url));
        }
    }
    if !issue.description.is_empty() {
        lines.push(String::new());
        lines.push(issue.description.clone());
    }
    lines.join("\n")
}

#[must_use]
pub const fn format_help_flag(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_issue() -> Issue {
        Issue::opened("Login broken", "500 on submit", "spaces/abc", "sub1")
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(&Status::Opened), "○");
        assert_eq!(format_status_icon(&Status::Closed), "✓");
    }

    #[test]
    fn test_format_issue_line_opened() {
        let issue = make_test_issue();
        let line = format_issue_line("spaces/abc", &issue);
        assert_eq!(line, "○ spaces/abc [OPENED] Login broken");
    }

    #[test]
    fn test_format_issue_line_closed() {
        let mut issue = make_test_issue();
        issue.close(Some("Fixed"), "");
        let line = format_issue_line("abc", &issue);
        assert!(line.starts_with("✓"));
        assert!(line.contains("[CLOSED]"));
    }

    #[test]
    fn test_details_opened_hides_resolution() {
        let issue = make_test_issue();
        let details = format_issue_details("spaces/abc", &issue);
        assert!(details.contains("Space:        abc"));
        assert!(details.contains("Help:         enabled"));
        assert!(!details.contains("Resolution"));
        assert!(details.ends_with("500 on submit"));
    }

    #[test]
    fn test_details_closed_shows_resolution_and_report() {
        let mut issue = make_test_issue();
        issue.close(None, "https://example.com/r/1");
        issue.inclusivity_help = false;
        let details = format_issue_details("abc", &issue);
        assert!(details.contains("Resolution:   Unknown"));
        assert!(details.contains("Report:       https://example.com/r/1"));
        assert!(details.contains("Help:         disabled"));
    }
}
