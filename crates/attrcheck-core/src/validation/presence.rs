//! Resolution of path expressions into classified concrete paths.

use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::Expression;
use kit::types::path::Path;
use kit::types::types::Presence;

/// Every concrete path matched by a set of expressions, split by presence,
/// in match order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedPaths {
    pub configured: Vec<Path>,
    pub null: Vec<Path>,
    pub unknown: Vec<Path>,
    /// Matcher and attribute lookup diagnostics, in the order they occurred.
    pub diagnostics: Diagnostics,
}

impl ClassifiedPaths {
    fn record(&mut self, path: Path, presence: Presence) {
        match presence {
            Presence::Unknown => self.unknown.push(path),
            Presence::Null => self.null.push(path),
            Presence::Known => self.configured.push(path),
        }
    }
}

/// Resolve each expression and classify the value behind every match.
///
/// Problems resolving one expression (or reading one path) are recorded and
/// the remaining expressions are still processed. `skip` excludes a path,
/// typically the attribute a validator is attached to.
pub fn classify<'a, I>(config: &dyn ConfigReader, expressions: I, skip: Option<&Path>) -> ClassifiedPaths
where
    I: IntoIterator<Item = &'a Expression>,
{
    let mut classified = ClassifiedPaths::default();

    for expression in expressions {
        let matches = config.path_matches(expression);
        let failed = matches.diagnostics.has_error();
        classified.diagnostics.append(matches.diagnostics);

        // Collect all errors
        if failed {
            continue;
        }

        for path in matches.paths {
            if skip == Some(&path) {
                continue;
            }
            match config.get_attribute(&path) {
                Ok(value) => classified.record(path, value.presence()),
                Err(diagnostic) => classified.diagnostics.push(diagnostic),
            }
        }
    }

    classified
}
