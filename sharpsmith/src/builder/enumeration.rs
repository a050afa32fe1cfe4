//! Enum and enum member builders.

use super::{MemberKind, NameComparison, contains_member, required, required_all};
use crate::{
    error::{Construct, Error, Result},
    model::{Accessibility, EnumMemberModel, EnumModel},
    options::RenderOptions,
    render::CSharpRenderer,
    validate,
};

/// Builder for a single enum member.
#[derive(Debug, Clone, Default)]
pub struct EnumMemberBuilder {
    pub(crate) name: Option<String>,
    pub(crate) value: Option<i64>,
    pub(crate) docs: Vec<String>,
}

impl EnumMemberBuilder {
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

    /// Sets an explicit value, written as `Name = value`.
    pub fn with_value(&mut self, value: i64) -> &mut Self {
        self.value = Some(value);
        self
    }

    pub fn add_doc(&mut self, line: impl Into<String>) -> &mut Self {
        self.docs.push(line.into());
        self
    }

    pub fn build(self) -> Result<EnumMemberModel> {
        let name = self
            .name
            .ok_or_else(|| Error::missing(Construct::EnumMember, "name"))?;

        Ok(EnumMemberModel {
            name,
            value: self.value,
            docs: self.docs,
        })
    }
}

/// Builder for C# enums.
#[derive(Debug, Clone)]
pub struct EnumBuilder {
    pub(crate) name: Option<String>,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) flags: bool,
    pub(crate) underlying_type: Option<String>,
    pub(crate) members: Vec<EnumMemberBuilder>,
}

impl EnumBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            access: Accessibility::Public,
            docs: Vec::new(),
            attributes: Vec::new(),
            flags: false,
            underlying_type: None,
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.name = Some(required("name", name)?);
        Ok(self)
    }

    pub fn with_access(&mut self, access: Accessibility) -> &mut Self {
        self.access = access;
        self
    }

    pub fn add_doc(&mut self, line: impl Into<String>) -> &mut Self {
        self.docs.push(line.into());
        self
    }

    pub fn add_attribute(&mut self, attribute: impl Into<String>) -> Result<&mut Self> {
        self.attributes.push(required("attribute", attribute)?);
        Ok(self)
    }

    pub fn add_attributes<I>(&mut self, attributes: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.attributes
            .extend(required_all("attributes", attributes)?);
        Ok(self)
    }

    /// Marks the enum as a bit field. Members without values get powers of two.
    pub fn make_flags(&mut self) -> &mut Self {
        self.flags = true;
        self
    }

    /// Sets the integral type after the colon, e.g. `byte`.
    pub fn with_underlying_type(&mut self, ty: impl Into<String>) -> Result<&mut Self> {
        self.underlying_type = Some(required("underlying type", ty)?);
        Ok(self)
    }

    pub fn add_member(&mut self, member: EnumMemberBuilder) -> &mut Self {
        self.members.push(member);
        self
    }

    pub fn add_members(
        &mut self,
        members: impl IntoIterator<Item = EnumMemberBuilder>,
    ) -> &mut Self {
        self.members.extend(members);
        self
    }

    /// Appends a member with no explicit value.
    pub fn add_member_named(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = required("name", name)?;
        self.members.push(EnumMemberBuilder {
            name: Some(name),
            ..EnumMemberBuilder::default()
        });
        Ok(self)
    }

    pub fn add_member_with_value(
        &mut self,
        name: impl Into<String>,
        value: i64,
    ) -> Result<&mut Self> {
        let name = required("name", name)?;
        self.members.push(EnumMemberBuilder {
            name: Some(name),
            value: Some(value),
            docs: Vec::new(),
        });
        Ok(self)
    }

    /// Appends one valueless member per name; nothing is added if a name is blank.
    pub fn add_member_names<I>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names = required_all("members", names)?;
        self.members.extend(names.into_iter().map(|name| EnumMemberBuilder {
            name: Some(name),
            ..EnumMemberBuilder::default()
        }));
        Ok(self)
    }

    /// Returns true if a member with this name exists, ignoring case.
    pub fn has_member(&self, name: &str) -> bool {
        self.has_member_with(name, MemberKind::Any, NameComparison::IgnoreCase)
    }

    pub fn has_member_with(
        &self,
        name: &str,
        kind: MemberKind,
        comparison: NameComparison,
    ) -> bool {
        let members = self
            .members
            .iter()
            .map(|m| (m.name.as_deref(), MemberKind::EnumMember));
        contains_member(members, name, kind, comparison)
    }

    /// Whether `build` will replace member values with derived flag values.
    pub(crate) fn derives_values(&self) -> bool {
        self.flags && self.members.iter().any(|m| m.value.is_none())
    }

    pub fn build(self) -> Result<EnumModel> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::missing(Construct::Enum, "name"))?;

        validate::check(validate::ENUM_RULES, &self)
            .map_err(|violation| Error::syntax(Construct::Enum, &name, violation))?;

        let derive = self.derives_values();
        let mut members = self
            .members
            .into_iter()
            .map(EnumMemberBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        if derive {
            for (index, member) in members.iter_mut().enumerate() {
                member.value = Some(flag_value(index));
            }
        }

        tracing::debug!(
            name = %name,
            members = members.len(),
            flags = self.flags,
            derived = derive,
            "built enum"
        );

        Ok(EnumModel {
            name,
            access: self.access,
            docs: self.docs,
            attributes: self.attributes,
            flags: self.flags,
            underlying_type: self.underlying_type,
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

impl Default for EnumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `0` for the first member, then `1, 2, 4, ...`.
fn flag_value(index: usize) -> i64 {
    match index {
        0 => 0,
        n => 1i64 << (n - 1),
    }
}
