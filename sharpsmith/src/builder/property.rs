//! Property and accessor builders.

use super::{required, required_all};
use crate::{
    error::{Construct, Error, Result},
    model::{Accessibility, AccessorBody, AccessorKind, AccessorModel, PropertyModel},
    options::RenderOptions,
    render::CSharpRenderer,
    validate,
};

/// Builder for a `get`, `set` or `init` accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorBuilder {
    pub(crate) kind: AccessorKind,
    pub(crate) access: Accessibility,
    pub(crate) body: AccessorBody,
}

impl AccessorBuilder {
    /// An auto-implemented accessor that inherits the property's access.
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            kind,
            access: Accessibility::None,
            body: AccessorBody::Auto,
        }
    }

    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    pub fn with_access(&mut self, access: Accessibility) -> &mut Self {
        self.access = access;
        self
    }

    /// Makes the accessor expression-bodied: `get => expression;`.
    pub fn with_expression(&mut self, expression: impl Into<String>) -> Result<&mut Self> {
        self.body = AccessorBody::Expression(required("expression", expression)?);
        Ok(self)
    }

    /// Appends a statement to a block body, replacing an auto or expression body.
    pub fn add_statement(&mut self, statement: impl Into<String>) -> Result<&mut Self> {
        let statement = required("statement", statement)?;
        match &mut self.body {
            AccessorBody::Block(lines) => lines.push(statement),
            body => *body = AccessorBody::Block(vec![statement]),
        }
        Ok(self)
    }

    pub fn add_statements<I>(&mut self, statements: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let statements = required_all("statements", statements)?;
        match &mut self.body {
            AccessorBody::Block(lines) => lines.extend(statements),
            _ if statements.is_empty() => {}
            body => *body = AccessorBody::Block(statements),
        }
        Ok(self)
    }

    pub fn build(self) -> Result<AccessorModel> {
        Ok(AccessorModel {
            kind: self.kind,
            access: self.access,
            body: self.body,
        })
    }
}

/// Builder for C# properties.
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    pub(crate) ty: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) is_static: bool,
    pub(crate) accessors: Vec<AccessorBuilder>,
    pub(crate) default_value: Option<String>,
}

impl PropertyBuilder {
    pub fn new() -> Self {
        Self {
            ty: None,
            name: None,
            access: Accessibility::Public,
            docs: Vec::new(),
            attributes: Vec::new(),
            is_static: false,
            accessors: Vec::new(),
            default_value: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_type(&mut self, ty: impl Into<String>) -> Result<&mut Self> {
        self.ty = Some(required("type", ty)?);
        Ok(self)
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

    pub fn make_static(&mut self) -> &mut Self {
        self.is_static = true;
        self
    }

    pub fn add_accessor(&mut self, accessor: AccessorBuilder) -> &mut Self {
        self.accessors.push(accessor);
        self
    }

    pub fn add_accessors(
        &mut self,
        accessors: impl IntoIterator<Item = AccessorBuilder>,
    ) -> &mut Self {
        self.accessors.extend(accessors);
        self
    }

    /// Adds an auto-implemented `get;`.
    pub fn with_getter(&mut self) -> &mut Self {
        self.add_accessor(AccessorBuilder::new(AccessorKind::Get))
    }

    /// Adds an auto-implemented `set;`.
    pub fn with_setter(&mut self) -> &mut Self {
        self.add_accessor(AccessorBuilder::new(AccessorKind::Set))
    }

    /// Adds an auto-implemented `init;`.
    pub fn with_init(&mut self) -> &mut Self {
        self.add_accessor(AccessorBuilder::new(AccessorKind::Init))
    }

    /// Sets the initializer written after the accessor list.
    pub fn with_default_value(&mut self, expression: impl Into<String>) -> Result<&mut Self> {
        self.default_value = Some(required("default value", expression)?);
        Ok(self)
    }

    /// The type and name, or the first of them that was never set.
    pub(crate) fn require_settings(&self) -> Result<(String, String)> {
        let ty = self
            .ty
            .clone()
            .ok_or_else(|| Error::missing(Construct::Property, "type"))?;
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::missing(Construct::Property, "name"))?;
        Ok((ty, name))
    }

    /// Finalizes the property. A property without accessors becomes `{ get; set; }`.
    pub fn build(self) -> Result<PropertyModel> {
        let (ty, name) = self.require_settings()?;

        validate::check(validate::PROPERTY_RULES, &self)
            .map_err(|violation| Error::syntax(Construct::Property, &name, violation))?;

        let accessors = if self.accessors.is_empty() {
            vec![
                AccessorBuilder::new(AccessorKind::Get),
                AccessorBuilder::new(AccessorKind::Set),
            ]
        } else {
            self.accessors
        };
        let accessors = accessors
            .into_iter()
            .map(AccessorBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(name = %name, accessors = accessors.len(), "built property");

        Ok(PropertyModel {
            ty,
            name,
            access: self.access,
            docs: self.docs,
            attributes: self.attributes,
            is_static: self.is_static,
            accessors,
            default_value: self.default_value,
        })
    }

    pub fn to_source_code(self) -> Result<String> {
        self.to_source_code_with(&RenderOptions::default())
    }

    pub fn to_source_code_with(self, options: &RenderOptions) -> Result<String> {
        Ok(CSharpRenderer::new(*options).render(&self.build()?))
    }
}

impl Default for PropertyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
