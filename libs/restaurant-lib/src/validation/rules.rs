//! Field-level validation rules.
//!
//! A validator is a set of (field, error kind, predicate) rules. Every rule
//! is evaluated independently and all violations are collected, so a request
//! with several invalid fields surfaces every failure in one pass.

use std::fmt;

/// A single violated rule: which field failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<K> {
    pub field: &'static str,
    pub kind: K,
}

impl<K: fmt::Display> fmt::Display for Failure<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Outcome of evaluating a rule set: success, or the failures in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult<K> {
    failures: Vec<Failure<K>>,
}

impl<K> ValidationResult<K> {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Failure<K>] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<Failure<K>> {
        self.failures
    }

    pub fn has(&self, kind: &K) -> bool
    where
        K: PartialEq,
    {
        self.failures.iter().any(|f| &f.kind == kind)
    }
}

impl<K: fmt::Display> ValidationResult<K> {
    /// Render each failure as `field: message`, in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.to_string()).collect()
    }
}

struct Rule<'a, T, K> {
    field: &'static str,
    kind: K,
    check: Box<dyn Fn(&T) -> bool + 'a>,
}

/// An ordered list of rules over a value of type `T`, each tagged with the
/// error kind `K` it reports when its predicate fails.
pub struct RuleSet<'a, T, K> {
    rules: Vec<Rule<'a, T, K>>,
}

impl<'a, T, K: Clone> RuleSet<'a, T, K> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule. `check` returns `true` when the value is acceptable.
    pub fn rule(
        mut self,
        field: &'static str,
        kind: K,
        check: impl Fn(&T) -> bool + 'a,
    ) -> Self {
        self.rules.push(Rule {
            field,
            kind,
            check: Box::new(check),
        });
        self
    }

    /// Evaluate every rule against `value`, accumulating all failures.
    pub fn evaluate(&self, value: &T) -> ValidationResult<K> {
        let failures = self
            .rules
            .iter()
            .filter(|rule| !(rule.check)(value))
            .map(|rule| Failure {
                field: rule.field,
                kind: rule.kind.clone(),
            })
            .collect();
        ValidationResult { failures }
    }
}

impl<T, K: Clone> Default for RuleSet<'_, T, K> {
    fn default() -> Self {
        Self::new()
    }
}
