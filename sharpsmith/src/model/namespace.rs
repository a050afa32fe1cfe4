use indexmap::IndexSet;
use serde::Serialize;

use super::TypeModel;

/// A namespace with its `using` directives and member types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamespaceModel {
    pub(crate) name: String,
    pub(crate) usings: IndexSet<String>,
    pub(crate) members: Vec<TypeModel>,
}

impl NamespaceModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usings(&self) -> &IndexSet<String> {
        &self.usings
    }

    pub fn members(&self) -> &[TypeModel] {
        &self.members
    }

    /// Looks up a member type by exact name.
    pub fn member(&self, name: &str) -> Option<&TypeModel> {
        self.members.iter().find(|m| m.name() == name)
    }
}
