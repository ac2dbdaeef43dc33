use std::fmt;
use std::str::FromStr;

use super::path::{Path, PathStep};
use super::types::Value;

/// One step of a path expression.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionStep {
    AttributeNameExact(String),
    ElementKeyIntExact(i64),
    ElementKeyIntAny,
    ElementKeyStringExact(String),
    ElementKeyStringAny,
    ElementKeyValueExact(Value),
    ElementKeyValueAny,
    Parent,
}

impl ExpressionStep {
    /// Whether this step accepts the given concrete step.
    pub fn matches(&self, step: &PathStep) -> bool {
        match (self, step) {
            (ExpressionStep::AttributeNameExact(expected), PathStep::AttributeName(name)) => {
                expected == name
            }
            (ExpressionStep::ElementKeyIntExact(expected), PathStep::ElementKeyInt(index)) => {
                expected == index
            }
            (ExpressionStep::ElementKeyIntAny, PathStep::ElementKeyInt(_)) => true,
            (ExpressionStep::ElementKeyStringExact(expected), PathStep::ElementKeyString(key)) => {
                expected == key
            }
            (ExpressionStep::ElementKeyStringAny, PathStep::ElementKeyString(_)) => true,
            (ExpressionStep::ElementKeyValueExact(expected), PathStep::ElementKeyValue(value)) => {
                expected == value
            }
            (ExpressionStep::ElementKeyValueAny, PathStep::ElementKeyValue(_)) => true,
            _ => false,
        }
    }

    /// The single concrete step designated by an exact step.
    pub fn exact(&self) -> Option<PathStep> {
        match self {
            ExpressionStep::AttributeNameExact(name) => Some(PathStep::AttributeName(name.clone())),
            ExpressionStep::ElementKeyIntExact(index) => Some(PathStep::ElementKeyInt(*index)),
            ExpressionStep::ElementKeyStringExact(key) => Some(PathStep::ElementKeyString(key.clone())),
            ExpressionStep::ElementKeyValueExact(value) => {
                Some(PathStep::ElementKeyValue(value.clone()))
            }
            _ => None,
        }
    }
}

impl From<&PathStep> for ExpressionStep {
    fn from(step: &PathStep) -> Self {
        match step {
            PathStep::AttributeName(name) => ExpressionStep::AttributeNameExact(name.clone()),
            PathStep::ElementKeyInt(index) => ExpressionStep::ElementKeyIntExact(*index),
            PathStep::ElementKeyString(key) => ExpressionStep::ElementKeyStringExact(key.clone()),
            PathStep::ElementKeyValue(value) => ExpressionStep::ElementKeyValueExact(value.clone()),
        }
    }
}

impl fmt::Display for ExpressionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionStep::AttributeNameExact(name) => write!(f, "{}", name),
            ExpressionStep::ElementKeyIntExact(index) => write!(f, "[{}]", index),
            ExpressionStep::ElementKeyIntAny => write!(f, "[*]"),
            ExpressionStep::ElementKeyStringExact(key) => write!(f, "[{:?}]", key),
            ExpressionStep::ElementKeyStringAny => write!(f, "[\"*\"]"),
            ExpressionStep::ElementKeyValueExact(value) => write!(f, "[Value({})]", value),
            ExpressionStep::ElementKeyValueAny => write!(f, "[Value(*)]"),
            ExpressionStep::Parent => write!(f, "<"),
        }
    }
}

/// An unresolved reference to zero or more attributes.
///
/// Root expressions start at the top of the configuration; relative ones are
/// meant to be merged onto another expression (usually the expression of the
/// attribute a validator is attached to).
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    root: bool,
    steps: Vec<ExpressionStep>,
}

impl Expression {
    pub fn match_root(name: impl Into<String>) -> Self {
        Expression { root: true, steps: vec![ExpressionStep::AttributeNameExact(name.into())] }
    }

    pub fn match_relative() -> Self {
        Expression { root: false, steps: vec![] }
    }

    pub fn from_path(path: &Path) -> Self {
        Expression { root: true, steps: path.steps().iter().map(ExpressionStep::from).collect() }
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn steps(&self) -> &[ExpressionStep] {
        &self.steps
    }

    pub fn at_name(&self, name: impl Into<String>) -> Self {
        self.at_step(ExpressionStep::AttributeNameExact(name.into()))
    }

    pub fn at_list_index(&self, index: i64) -> Self {
        self.at_step(ExpressionStep::ElementKeyIntExact(index))
    }

    pub fn at_any_list_index(&self) -> Self {
        self.at_step(ExpressionStep::ElementKeyIntAny)
    }

    pub fn at_map_key(&self, key: impl Into<String>) -> Self {
        self.at_step(ExpressionStep::ElementKeyStringExact(key.into()))
    }

    pub fn at_any_map_key(&self) -> Self {
        self.at_step(ExpressionStep::ElementKeyStringAny)
    }

    pub fn at_set_value(&self, value: Value) -> Self {
        self.at_step(ExpressionStep::ElementKeyValueExact(value))
    }

    pub fn at_any_set_value(&self) -> Self {
        self.at_step(ExpressionStep::ElementKeyValueAny)
    }

    pub fn at_parent(&self) -> Self {
        self.at_step(ExpressionStep::Parent)
    }

    pub fn at_step(&self, step: ExpressionStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Expression { root: self.root, steps }
    }

    /// Collapse parent steps. A root expression cannot climb above the top
    /// of the configuration, so surplus parents are dropped; a relative one
    /// keeps its leading parents.
    pub fn resolve(&self) -> Expression {
        let mut steps: Vec<ExpressionStep> = Vec::with_capacity(self.steps.len());
        for step in self.steps.iter() {
            if let ExpressionStep::Parent = step {
                match steps.last() {
                    Some(ExpressionStep::Parent) | None => {
                        if !self.root {
                            steps.push(ExpressionStep::Parent);
                        }
                    }
                    Some(_) => {
                        steps.pop();
                    }
                }
                continue;
            }
            steps.push(step.clone());
        }
        Expression { root: self.root, steps }
    }

    /// A root `other` replaces `self`; a relative `other` continues from it.
    pub fn merge(&self, other: &Expression) -> Expression {
        if other.root {
            return other.clone();
        }
        let mut steps = self.steps.clone();
        steps.extend(other.steps.iter().cloned());
        Expression { root: self.root, steps }
    }

    /// `self` followed by every `other` merged onto it, without duplicates.
    pub fn merge_expressions(&self, others: &Expressions) -> Expressions {
        let mut result = Expressions::new();
        result.push_unique(self.clone());
        for other in others.iter() {
            result.push_unique(self.merge(other));
        }
        result
    }

    /// Structural equality after resolution.
    pub fn equivalent(&self, other: &Expression) -> bool {
        self.resolve() == other.resolve()
    }

    /// Whether the expression designates exactly `path`.
    pub fn matches(&self, path: &Path) -> bool {
        let resolved = self.resolve();
        resolved.steps.len() == path.len() && resolved.prefix_matches(path)
    }

    /// Whether `path` is an ancestor of something the expression designates.
    pub fn matches_parent(&self, path: &Path) -> bool {
        let resolved = self.resolve();
        resolved.steps.len() > path.len() && resolved.prefix_matches(path)
    }

    /// Extend `path`, an ancestor of what the expression designates, with the
    /// remaining steps. Only possible when every remaining step is exact.
    pub fn complete_exact(&self, path: &Path) -> Option<Path> {
        let resolved = self.resolve();
        if !resolved.matches_parent(path) {
            return None;
        }
        let mut steps = path.steps().to_vec();
        for step in resolved.steps[path.len()..].iter() {
            steps.push(step.exact()?);
        }
        Some(Path::from_steps(steps))
    }

    fn prefix_matches(&self, path: &Path) -> bool {
        self.steps.iter().zip(path.steps().iter()).all(|(expected, step)| expected.matches(step))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = self.resolve();
        for (i, step) in resolved.steps.iter().enumerate() {
            let dotted = match step {
                ExpressionStep::AttributeNameExact(_) => i > 0 || !resolved.root,
                ExpressionStep::Parent => i > 0,
                _ => false,
            };
            // Relative expressions starting with a name keep their leading `.`
            if dotted {
                write!(f, ".")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Ordered list of expressions, displayed as `[a,b]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expressions(Vec<Expression>);

impl Expressions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, expression: Expression) {
        self.0.push(expression);
    }

    /// Push unless an equivalent expression is already present.
    pub fn push_unique(&mut self, expression: Expression) {
        if !self.contains(&expression) {
            self.0.push(expression);
        }
    }

    pub fn contains(&self, expression: &Expression) -> bool {
        self.0.iter().any(|e| e.equivalent(expression))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Expressions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, expression) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", expression)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Expression>> for Expressions {
    fn from(expressions: Vec<Expression>) -> Self {
        Expressions(expressions)
    }
}

impl FromIterator<Expression> for Expressions {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Expressions(iter.into_iter().collect())
    }
}

impl IntoIterator for Expressions {
    type Item = Expression;
    type IntoIter = std::vec::IntoIter<Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Expressions {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionParseError {
    #[error("path expression is empty")]
    Empty,
    #[error("unexpected character '{found}' at offset {offset} in path expression '{expression}'")]
    UnexpectedCharacter { expression: String, offset: usize, found: char },
    #[error("unexpected end of path expression '{0}'")]
    UnexpectedEnd(String),
    #[error("invalid list index '{index}' in path expression '{expression}'")]
    InvalidIndex { expression: String, index: String },
    #[error("set value keys other than '*' cannot be written in path expression '{0}'")]
    UnsupportedValueKey(String),
}

/// Parses the textual form produced by `Display`: `a.b[0]["key"][*]`.
/// A leading `<` (parent) or `.` makes the expression relative.
impl FromStr for Expression {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpressionParser::new(s).parse()
    }
}

struct ExpressionParser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> ExpressionParser<'a> {
    fn new(source: &'a str) -> Self {
        ExpressionParser { source, chars: source.chars().collect(), pos: 0 }
    }

    fn parse(mut self) -> Result<Expression, ExpressionParseError> {
        if self.chars.is_empty() {
            return Err(ExpressionParseError::Empty);
        }

        let mut expression = match self.peek() {
            Some('<') => {
                self.pos += 1;
                Expression::match_relative().at_parent()
            }
            Some('.') => {
                self.pos += 1;
                let name = self.name()?;
                Expression::match_relative().at_name(name)
            }
            _ => Expression::match_root(self.name()?),
        };

        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    self.pos += 1;
                    if self.peek() == Some('<') {
                        self.pos += 1;
                        expression = expression.at_parent();
                    } else {
                        expression = expression.at_name(self.name()?);
                    }
                }
                '[' => {
                    self.pos += 1;
                    expression = expression.at_step(self.bracket()?);
                }
                other => return Err(self.unexpected(other)),
            }
        }
        Ok(expression)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<char, ExpressionParseError> {
        let c = self.peek().ok_or_else(|| ExpressionParseError::UnexpectedEnd(self.source.to_string()))?;
        self.pos += 1;
        Ok(c)
    }

    fn expect(&mut self, expected: char) -> Result<(), ExpressionParseError> {
        match self.next()? {
            c if c == expected => Ok(()),
            c => {
                self.pos -= 1;
                Err(self.unexpected(c))
            }
        }
    }

    fn unexpected(&self, found: char) -> ExpressionParseError {
        ExpressionParseError::UnexpectedCharacter {
            expression: self.source.to_string(),
            offset: self.pos,
            found,
        }
    }

    fn name(&mut self) -> Result<String, ExpressionParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if start == self.pos {
            return match self.peek() {
                Some(c) => Err(self.unexpected(c)),
                None => Err(ExpressionParseError::UnexpectedEnd(self.source.to_string())),
            };
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn bracket(&mut self) -> Result<ExpressionStep, ExpressionParseError> {
        let step = match self.peek() {
            Some('*') => {
                self.pos += 1;
                ExpressionStep::ElementKeyIntAny
            }
            Some('"') => {
                self.pos += 1;
                let key = self.quoted()?;
                if key == "*" {
                    ExpressionStep::ElementKeyStringAny
                } else {
                    ExpressionStep::ElementKeyStringExact(key)
                }
            }
            Some('V') => {
                for expected in "Value(".chars() {
                    self.expect(expected)?;
                }
                if self.peek() != Some('*') {
                    return Err(ExpressionParseError::UnsupportedValueKey(self.source.to_string()));
                }
                self.pos += 1;
                self.expect(')')?;
                ExpressionStep::ElementKeyValueAny
            }
            Some(_) => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c == ']' {
                        break;
                    }
                    self.pos += 1;
                }
                let raw: String = self.chars[start..self.pos].iter().collect();
                let index = raw.trim().parse::<i64>().map_err(|_| ExpressionParseError::InvalidIndex {
                    expression: self.source.to_string(),
                    index: raw.clone(),
                })?;
                ExpressionStep::ElementKeyIntExact(index)
            }
            None => return Err(ExpressionParseError::UnexpectedEnd(self.source.to_string())),
        };
        self.expect(']')?;
        Ok(step)
    }

    fn quoted(&mut self) -> Result<String, ExpressionParseError> {
        let mut key = String::new();
        loop {
            match self.next()? {
                '"' => return Ok(key),
                '\\' => key.push(self.next()?),
                c => key.push(c),
            }
        }
    }
}
