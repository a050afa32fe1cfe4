//! Duplicate name detection for types that own named members.

use std::collections::HashSet;

use super::super::Rule;
use crate::{
    builder::{ClassBuilder, InterfaceBuilder, NamespaceBuilder},
    error::Violation,
};

/// Lint-style rule shared by classes, interfaces and namespaces.
///
/// Names are compared exactly, since C# identifiers are case-sensitive.
/// Members without a name are skipped; they fail on their own build.
pub(crate) struct UniqueMemberNames;

fn first_duplicate<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .find(|name| !seen.insert(*name))
        .map(str::to_string)
}

impl Rule<ClassBuilder> for UniqueMemberNames {
    fn name(&self) -> &'static str {
        "unique-member-names"
    }

    fn description(&self) -> &'static str {
        "Members have distinct names that differ from the enclosing type"
    }

    fn check(&self, class: &ClassBuilder) -> Result<(), Violation> {
        let names: Vec<&str> = class
            .fields
            .iter()
            .filter_map(|f| f.name.as_deref())
            .chain(class.properties.iter().filter_map(|p| p.name.as_deref()))
            .chain(class.nested_types.iter().filter_map(|t| t.name()))
            .collect();

        if let Some(own) = class.name.as_deref() {
            if let Some(member) = names.iter().find(|name| **name == own) {
                return Err(Violation::MemberNamedAfterType {
                    member: member.to_string(),
                });
            }
        }

        match first_duplicate(names) {
            Some(member) => Err(Violation::DuplicateMember { member }),
            None => Ok(()),
        }
    }
}

impl Rule<InterfaceBuilder> for UniqueMemberNames {
    fn name(&self) -> &'static str {
        "unique-member-names"
    }

    fn description(&self) -> &'static str {
        "Interface properties have distinct names"
    }

    fn check(&self, interface: &InterfaceBuilder) -> Result<(), Violation> {
        let names = interface.properties.iter().filter_map(|p| p.name.as_deref());
        match first_duplicate(names) {
            Some(member) => Err(Violation::DuplicateMember { member }),
            None => Ok(()),
        }
    }
}

impl Rule<NamespaceBuilder> for UniqueMemberNames {
    fn name(&self) -> &'static str {
        "unique-member-names"
    }

    fn description(&self) -> &'static str {
        "Types declared in a namespace have distinct names"
    }

    fn check(&self, namespace: &NamespaceBuilder) -> Result<(), Violation> {
        let names = namespace.members.iter().filter_map(|m| m.name());
        match first_duplicate(names) {
            Some(member) => Err(Violation::DuplicateMember { member }),
            None => Ok(()),
        }
    }
}
