use super::{CommandResult, CommandSummary};
use crate::issues::{Report, Severity};

pub fn finish(summary: CommandSummary, exit_on_errors: bool) -> CommandResult {
    let (error_count, warning_count) = match &summary {
        CommandSummary::Status(status) => {
            let issues = status.locales.iter().flat_map(|locale| &locale.issues);
            issues.fold((0, 0), |(errors, warnings), issue| {
                match issue.report_severity() {
                    Severity::Error => (errors + 1, warnings),
                    Severity::Warning => (errors, warnings + 1),
                }
            })
        }
        _ => (0, 0),
    };

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
    }
}
