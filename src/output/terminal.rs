//! Terminal summary output.

use colored::Colorize;

/// One-line summary of a run, e.g. `merge: 12 in -> 3 blocks`.
///
/// `blocks` is `None` when the operation produced no result at all.
pub fn summary_line(operation: &str, inputs: usize, blocks: Option<usize>) -> String {
    let result = match blocks {
        Some(count) => format!("{count} blocks").green().to_string(),
        None => "no result".yellow().to_string(),
    };
    format!("{}: {inputs} in -> {result}", operation.bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_plain_text() {
        colored::control::set_override(false);
        assert_eq!(summary_line("merge", 12, Some(3)), "merge: 12 in -> 3 blocks");
        assert_eq!(summary_line("group", 0, None), "group: 0 in -> no result");
    }
}
