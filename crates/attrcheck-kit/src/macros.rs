#[macro_export]
macro_rules! diagnosed_error {
    ($summary:expr, $($arg:tt)*) => {{
        use $crate::types::diagnostics::Diagnostic;

        let detail = format_args!($($arg)*).to_string();
        Diagnostic::error($summary, detail)
    }};
}
