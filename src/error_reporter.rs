//! Error reporting for the CLI.
//!
//! Builds on [`VidflowError::display_for_user`] and adds help that depends on
//! which command was running.

use vidflow_utils::{UserFriendlyError, VidflowError};

/// Operation-specific hints appended to a user-facing error report.
fn operation_hints(error: &VidflowError, operation: &str) -> Vec<&'static str> {
    match (operation, error) {
        ("status", VidflowError::Store(_)) => vec![
            "Pass the path of a record file, e.g. manuscript/devops/argo-cd.yaml",
        ],
        ("phases" | "list" | "tui", VidflowError::Store(_)) => vec![
            "Run 'vidflow config' to check which index and manuscript directory are used",
        ],
        (_, VidflowError::Config(_)) => {
            vec!["Run 'vidflow config --config <path>' to inspect a specific file"]
        }
        _ => Vec::new(),
    }
}

/// Full report for stderr: message, context, suggestions and
/// operation-specific hints.
#[must_use]
pub fn create_contextual_report(error: &VidflowError, operation: &str) -> String {
    let mut report = error.display_for_user();
    let hints = operation_hints(error, operation);
    if !hints.is_empty() {
        report.push_str(&format!("\nWhile running '{operation}':\n"));
        for hint in hints {
            report.push_str(&format!("  • {hint}\n"));
        }
    }
    report.push_str(&format!("\n[{}]", error.category()));
    report
}
