use super::{required, required_all};
use crate::{
    error::{Construct, Error, Result},
    model::{Accessibility, FieldModel},
    options::RenderOptions,
    render::CSharpRenderer,
    validate,
};

/// Builder for C# fields.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    pub(crate) ty: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) is_static: bool,
    pub(crate) is_readonly: bool,
    pub(crate) is_const: bool,
    pub(crate) value: Option<String>,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self {
            ty: None,
            name: None,
            access: Accessibility::Public,
            docs: Vec::new(),
            attributes: Vec::new(),
            is_static: false,
            is_readonly: false,
            is_const: false,
            value: None,
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

    pub fn make_readonly(&mut self) -> &mut Self {
        self.is_readonly = true;
        self
    }

    /// Marks the field `const`; an initializer is then required.
    pub fn make_const(&mut self) -> &mut Self {
        self.is_const = true;
        self
    }

    /// Sets the initializer expression.
    pub fn with_value(&mut self, expression: impl Into<String>) -> Result<&mut Self> {
        self.value = Some(required("value", expression)?);
        Ok(self)
    }

    pub(crate) fn require_settings(&self) -> Result<(String, String)> {
        let ty = self
            .ty
            .clone()
            .ok_or_else(|| Error::missing(Construct::Field, "type"))?;
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::missing(Construct::Field, "name"))?;
        Ok((ty, name))
    }

    pub fn build(self) -> Result<FieldModel> {
        let (ty, name) = self.require_settings()?;

        validate::check(validate::FIELD_RULES, &self)
            .map_err(|violation| Error::syntax(Construct::Field, &name, violation))?;

        tracing::debug!(name = %name, ty = %ty, "built field");

        Ok(FieldModel {
            ty,
            name,
            access: self.access,
            docs: self.docs,
            attributes: self.attributes,
            is_static: self.is_static,
            is_readonly: self.is_readonly,
            is_const: self.is_const,
            value: self.value,
        })
    }

    pub fn to_source_code(self) -> Result<String> {
        self.to_source_code_with(&RenderOptions::default())
    }

    pub fn to_source_code_with(self, options: &RenderOptions) -> Result<String> {
        Ok(CSharpRenderer::new(*options).render(&self.build()?))
    }
}

impl Default for FieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    fn max() -> FieldBuilder {
        let mut f = FieldBuilder::new();
        f.with_type("int").unwrap().with_name("Max").unwrap();
        f
    }

    #[test]
    fn test_missing_name() {
        let mut f = FieldBuilder::new();
        f.with_type("int").unwrap();
        assert_eq!(
            f.build().unwrap_err(),
            Error::missing(Construct::Field, "name")
        );
    }

    #[test]
    fn test_const_requires_value() {
        let mut f = max();
        f.make_const();
        assert_eq!(
            f.build().unwrap_err().violation(),
            Some(&Violation::ConstWithoutValue)
        );
    }

    #[test]
    fn test_const_cannot_be_static() {
        let mut f = max();
        f.make_const().make_static().with_value("10").unwrap();
        assert_eq!(
            f.build().unwrap_err().violation(),
            Some(&Violation::ConstWithModifier)
        );
    }

    #[test]
    fn test_readonly_field_model() {
        let mut f = FieldBuilder::new();
        f.with_type("string")
            .unwrap()
            .with_name("_name")
            .unwrap()
            .with_access(Accessibility::Private)
            .make_readonly();
        let model = f.build().unwrap();
        assert!(model.is_readonly());
        assert_eq!(model.access(), Accessibility::Private);
        assert_eq!(model.value(), None);
    }

    #[test]
    fn test_const_source_code() {
        let mut f = max();
        f.make_const().with_value("10").unwrap();
        assert_eq!(f.to_source_code().unwrap(), "public const int Max = 10;\n");
    }
}
