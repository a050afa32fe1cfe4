//! Rule trait for structural validation.

use crate::error::Violation;

/// A structural check run against a builder when it is finalized.
pub(crate) trait Rule<S: ?Sized> {
    /// The name of this rule.
    fn name(&self) -> &'static str;

    /// A one-line summary of what the rule enforces.
    fn description(&self) -> &'static str;

    /// Check the subject, returning the first violation found.
    fn check(&self, subject: &S) -> Result<(), Violation>;

    fn info(&self) -> RuleInfo {
        RuleInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Name and description of a rule, for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub name: &'static str,
    pub description: &'static str,
}
