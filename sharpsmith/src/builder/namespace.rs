use indexmap::IndexSet;

use super::{MemberKind, NameComparison, TypeBuilder, contains_member, required, required_all};
use crate::{
    error::{Construct, Error, Result},
    model::NamespaceModel,
    options::RenderOptions,
    render::CSharpRenderer,
    validate,
};

/// Builder for a namespace and its `using` directives.
#[derive(Debug, Clone, Default)]
pub struct NamespaceBuilder {
    pub(crate) name: Option<String>,
    pub(crate) usings: IndexSet<String>,
    pub(crate) members: Vec<TypeBuilder>,
}

impl NamespaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.name = Some(required("name", name)?);
        Ok(self)
    }

    /// Adds a `using` directive. Repeated directives are written once.
    pub fn add_using(&mut self, namespace: impl Into<String>) -> Result<&mut Self> {
        self.usings.insert(required("using", namespace)?);
        Ok(self)
    }

    pub fn add_usings<I>(&mut self, namespaces: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.usings.extend(required_all("usings", namespaces)?);
        Ok(self)
    }

    pub fn add_type(&mut self, member: impl Into<TypeBuilder>) -> &mut Self {
        self.members.push(member.into());
        self
    }

    pub fn add_types<I>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<TypeBuilder>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.has_member_with(name, MemberKind::Any, NameComparison::IgnoreCase)
    }

    pub fn has_member_with(
        &self,
        name: &str,
        kind: MemberKind,
        comparison: NameComparison,
    ) -> bool {
        let members = self.members.iter().map(|m| (m.name(), m.member_kind()));
        contains_member(members, name, kind, comparison)
    }

    pub fn build(self) -> Result<NamespaceModel> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::missing(Construct::Namespace, "name"))?;

        validate::check(validate::NAMESPACE_RULES, &self)
            .map_err(|violation| Error::syntax(Construct::Namespace, &name, violation))?;

        let members = self
            .members
            .into_iter()
            .map(TypeBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            name = %name,
            usings = self.usings.len(),
            members = members.len(),
            "built namespace"
        );

        Ok(NamespaceModel {
            name,
            usings: self.usings,
            members,
        })
    }

    pub fn to_source_code(self) -> Result<String> {
        self.to_source_code_with(&RenderOptions::default())
    }

    pub fn to_source_code_with(self, options: &RenderOptions) -> Result<String> {
        Ok(CSharpRenderer::new(*options).render(&self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{ClassBuilder, EnumBuilder, InterfaceBuilder},
        error::{ErrorKind, Violation},
        model::TypeKind,
    };

    fn class(name: &str) -> ClassBuilder {
        let mut c = ClassBuilder::new(TypeKind::Class);
        c.with_name(name).unwrap();
        c
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            NamespaceBuilder::new().build().unwrap_err(),
            Error::missing(Construct::Namespace, "name")
        );
    }

    #[test]
    fn test_members_keep_insertion_order() {
        let mut status = EnumBuilder::new();
        status.with_name("Status").unwrap();
        let mut ns = NamespaceBuilder::new();
        ns.with_name("App.Models")
            .unwrap()
            .add_type(class("Person"))
            .add_type(status)
            .add_type(class("Address"));

        let model = ns.build().unwrap();
        let names: Vec<_> = model.members().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Person", "Status", "Address"]);
    }

    #[test]
    fn test_usings_are_atomic_and_deduplicated() {
        let mut ns = NamespaceBuilder::new();
        ns.add_usings(["System", "System.Linq", "System"]).unwrap();
        assert_eq!(ns.usings.len(), 2);

        let err = ns.add_usings(["System.IO", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
        assert_eq!(ns.usings.len(), 2);
    }

    #[test]
    fn test_duplicate_type_names() {
        let mut ns = NamespaceBuilder::new();
        ns.with_name("App")
            .unwrap()
            .add_types([class("Person"), class("Person")]);
        assert_eq!(
            ns.build().unwrap_err().violation(),
            Some(&Violation::DuplicateMember {
                member: "Person".into()
            })
        );
    }

    #[test]
    fn test_has_member_by_kind() {
        let mut person = InterfaceBuilder::new();
        person.with_name("IPerson").unwrap();
        let mut ns = NamespaceBuilder::new();
        ns.add_type(person).add_type(class("Person"));

        assert!(ns.has_member("iperson"));
        assert!(ns.has_member_with("Person", MemberKind::Class, NameComparison::Exact));
        assert!(!ns.has_member_with("IPerson", MemberKind::Class, NameComparison::IgnoreCase));
        assert!(!ns.has_member_with("Person", MemberKind::Struct, NameComparison::IgnoreCase));
    }
}
