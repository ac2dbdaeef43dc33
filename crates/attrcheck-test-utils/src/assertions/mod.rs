//! Common assertion macros for validator tests

/// Assert that a diagnostics list is empty
#[macro_export]
macro_rules! assert_no_diagnostics {
    ($diagnostics:expr) => {
        let diagnostics = &$diagnostics;
        assert!(diagnostics.is_empty(), "Expected no diagnostics, but got:\n{}", diagnostics);
    };
}

/// Assert that a diagnostics list holds exactly `errors` errors and `warnings` warnings
#[macro_export]
macro_rules! assert_diagnostic_counts {
    ($diagnostics:expr, errors: $errors:expr, warnings: $warnings:expr) => {
        let diagnostics = &$diagnostics;
        assert_eq!(
            (diagnostics.error_count(), diagnostics.warning_count()),
            ($errors, $warnings),
            "Unexpected (errors, warnings) in:\n{}",
            diagnostics
        );
    };
}

/// Assert that an error with the given summary was reported, optionally
/// checking its detail
#[macro_export]
macro_rules! assert_error_summary {
    ($diagnostics:expr, $summary:expr) => {
        let diagnostics = &$diagnostics;
        assert!(
            diagnostics.iter().any(|d| d.is_error() && d.summary == $summary),
            "Expected error '{}', but got:\n{}",
            $summary,
            diagnostics
        );
    };
    ($diagnostics:expr, $summary:expr, $detail:expr) => {
        let diagnostics = &$diagnostics;
        assert!(
            diagnostics.iter().any(|d| d.is_error() && d.summary == $summary && d.detail == $detail),
            "Expected error '{}' with detail '{}', but got:\n{}",
            $summary,
            $detail,
            diagnostics
        );
    };
}

/// Assert that a warning with the given summary was reported
#[macro_export]
macro_rules! assert_warning_summary {
    ($diagnostics:expr, $summary:expr) => {
        let diagnostics = &$diagnostics;
        let found = diagnostics.iter().any(|d| d.is_warning() && d.summary == $summary);
        if !found {
            let warnings_str = diagnostics
                .warnings()
                .iter()
                .map(|w| format!("  - {}", w.summary))
                .collect::<Vec<_>>()
                .join("\n");
            panic!(
                "Expected warning '{}', but got:\n{}",
                $summary,
                if warnings_str.is_empty() { "  (no warnings)".to_string() } else { warnings_str }
            );
        }
    };
}
