//! Minimal assertion runner for the per-helper test cases declared in the registry.
//!
//! Results are returned as a [`TestReport`] value; nothing is counted globally,
//! so runs can be repeated or nested freely.

use std::fmt;

use crate::helpers::{Invoke, Value};
use crate::registry::Registry;

/// Produces the observed value, given the helper under test.
pub type Thunk = fn(Invoke) -> Value;

#[derive(Debug, Clone)]
pub enum Expectation {
    Equals(Value),
    Satisfies(fn(&Value) -> bool),
}

impl Expectation {
    pub fn check(&self, observed: &Value) -> bool {
        match self {
            Expectation::Equals(expected) => expected == observed,
            Expectation::Satisfies(predicate) => predicate(observed),
        }
    }

    fn describe(&self) -> String {
        match self {
            Expectation::Equals(expected) => expected.to_string(),
            Expectation::Satisfies(_) => "predicate to hold".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestCase {
    pub label: &'static str,
    pub run: Thunk,
    pub expect: Expectation,
    pub comment: Option<&'static str>,
}

impl TestCase {
    pub fn equals(label: &'static str, run: Thunk, expected: impl Into<Value>) -> Self {
        Self {
            label,
            run,
            expect: Expectation::Equals(expected.into()),
            comment: None,
        }
    }

    pub fn satisfies(label: &'static str, run: Thunk, predicate: fn(&Value) -> bool) -> Self {
        Self {
            label,
            run,
            expect: Expectation::Satisfies(predicate),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn run(&self, implementation: Invoke) -> Outcome {
        let observed = (self.run)(implementation);
        Outcome {
            label: self.label,
            comment: self.comment,
            passed: self.expect.check(&observed),
            expected: self.expect.describe(),
            observed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub label: &'static str,
    pub comment: Option<&'static str>,
    pub observed: Value,
    pub expected: String,
    pub passed: bool,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Testing: {}", self.label)?;
        if let Some(comment) = self.comment {
            write!(f, " ({comment})")?;
        }
        if self.passed {
            write!(f, " Success (observed value [{}])", self.observed)
        } else {
            write!(
                f,
                " FAIL (observed [{}], expected: [{}])",
                self.observed, self.expected
            )
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestReport {
    pub outcomes: Vec<Outcome>,
}

impl TestReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_green(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn summary(&self) -> String {
        format!(
            "Failed tests: {}, successful tests: {}",
            self.failed(),
            self.passed()
        )
    }

    pub fn merge(&mut self, other: TestReport) {
        self.outcomes.extend(other.outcomes);
    }
}

/// Runs `cases` against one implementation.
pub fn run_cases(cases: &[TestCase], implementation: Invoke) -> TestReport {
    let outcomes = cases
        .iter()
        .map(|case| {
            let outcome = case.run(implementation);
            if outcome.passed {
                tracing::debug!("{outcome}");
            } else {
                tracing::warn!("{outcome}");
            }
            outcome
        })
        .collect();
    TestReport { outcomes }
}

/// Runs every declared test of every descriptor, in registry order.
pub fn run_registry(registry: &Registry) -> TestReport {
    let mut report = TestReport::default();
    for descriptor in registry.descriptors() {
        report.merge(run_cases(&descriptor.tests, descriptor.invoke));
    }
    tracing::info!("{}", report.summary());
    report
}
