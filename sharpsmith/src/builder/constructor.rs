//! Constructor builder.

use super::{required, required_all};
use crate::{
    error::{Construct, Error, Result},
    model::{Accessibility, ConstructorInitializer, ConstructorModel, ParameterModel},
    options::RenderOptions,
    render::CSharpRenderer,
    validate,
};

/// Builder for C# constructors.
///
/// The constructor takes its name from the enclosing class or struct, which
/// sets it during the parent's `build`.
#[derive(Debug, Clone)]
pub struct ConstructorBuilder {
    pub(crate) type_name: Option<String>,
    pub(crate) access: Accessibility,
    pub(crate) is_static: bool,
    pub(crate) docs: Vec<String>,
    pub(crate) parameters: Vec<ParameterModel>,
    pub(crate) initializer: Option<ConstructorInitializer>,
    pub(crate) body: Vec<String>,
}

impl ConstructorBuilder {
    pub fn new() -> Self {
        Self {
            type_name: None,
            access: Accessibility::Public,
            is_static: false,
            docs: Vec::new(),
            parameters: Vec::new(),
            initializer: None,
            body: Vec::new(),
        }
    }

    /// Sets the type name for a constructor built on its own.
    pub fn with_type_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.type_name = Some(required("type name", name)?);
        Ok(self)
    }

    pub fn with_access(&mut self, access: Accessibility) -> &mut Self {
        self.access = access;
        self
    }

    /// Makes this a static constructor.
    pub fn make_static(&mut self) -> &mut Self {
        self.is_static = true;
        self
    }

    pub fn add_doc(&mut self, line: impl Into<String>) -> &mut Self {
        self.docs.push(line.into());
        self
    }

    /// Appends a parameter. Parameter names must be unique.
    pub fn add_parameter(
        &mut self,
        ty: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<&mut Self> {
        let parameter = self.parameter(ty.into(), name.into(), None)?;
        self.parameters.push(parameter);
        Ok(self)
    }

    /// Appends a parameter with a default value: `int retries = 3`.
    pub fn add_parameter_with_default(
        &mut self,
        ty: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Result<&mut Self> {
        let default_value = required("default value", default_value)?;
        let parameter = self.parameter(ty.into(), name.into(), Some(default_value))?;
        self.parameters.push(parameter);
        Ok(self)
    }

    /// Appends `(type, name)` pairs; nothing is added if any pair is rejected.
    pub fn add_parameters<T, N>(
        &mut self,
        parameters: impl IntoIterator<Item = (T, N)>,
    ) -> Result<&mut Self>
    where
        T: Into<String>,
        N: Into<String>,
    {
        let mut staged = self.parameters.clone();
        for (index, (ty, name)) in parameters.into_iter().enumerate() {
            let (ty, name) = (ty.into(), name.into());
            if ty.trim().is_empty() || name.trim().is_empty() {
                return Err(Error::ArgumentInvalid {
                    argument: "parameters",
                    reason: format!("element {} is empty", index),
                });
            }
            let parameter = Self::unique_parameter(&staged, ty, name, None)?;
            staged.push(parameter);
        }
        self.parameters = staged;
        Ok(self)
    }

    /// Chains to a base class constructor: `: base(args)`.
    pub fn call_base<I>(&mut self, arguments: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.initializer = Some(ConstructorInitializer::Base(required_all(
            "base arguments",
            arguments,
        )?));
        Ok(self)
    }

    /// Chains to another constructor of the same type: `: this(args)`.
    pub fn call_this<I>(&mut self, arguments: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.initializer = Some(ConstructorInitializer::This(required_all(
            "this arguments",
            arguments,
        )?));
        Ok(self)
    }

    pub fn add_statement(&mut self, statement: impl Into<String>) -> Result<&mut Self> {
        self.body.push(required("statement", statement)?);
        Ok(self)
    }

    pub fn add_statements<I>(&mut self, statements: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.body.extend(required_all("statements", statements)?);
        Ok(self)
    }

    pub fn build(self) -> Result<ConstructorModel> {
        let type_name = self
            .type_name
            .clone()
            .ok_or_else(|| Error::missing(Construct::Constructor, "type name"))?;

        validate::check(validate::CONSTRUCTOR_RULES, &self)
            .map_err(|violation| Error::syntax(Construct::Constructor, &type_name, violation))?;

        tracing::debug!(
            type_name = %type_name,
            parameters = self.parameters.len(),
            is_static = self.is_static,
            "built constructor"
        );

        Ok(ConstructorModel {
            type_name,
            access: if self.is_static {
                Accessibility::None
            } else {
                self.access
            },
            is_static: self.is_static,
            docs: self.docs,
            parameters: self.parameters,
            initializer: self.initializer,
            body: self.body,
        })
    }

    pub fn to_source_code(self) -> Result<String> {
        self.to_source_code_with(&RenderOptions::default())
    }

    pub fn to_source_code_with(self, options: &RenderOptions) -> Result<String> {
        Ok(CSharpRenderer::new(*options).render(&self.build()?))
    }

    fn parameter(
        &self,
        ty: String,
        name: String,
        default_value: Option<String>,
    ) -> Result<ParameterModel> {
        let ty = required("type", ty)?;
        let name = required("name", name)?;
        Self::unique_parameter(&self.parameters, ty, name, default_value)
    }

    fn unique_parameter(
        existing: &[ParameterModel],
        ty: String,
        name: String,
        default_value: Option<String>,
    ) -> Result<ParameterModel> {
        let name = name.trim().to_string();
        if existing.iter().any(|p| p.name == name) {
            return Err(Error::ArgumentInvalid {
                argument: "parameters",
                reason: format!("duplicate parameter name '{}'", name),
            });
        }
        Ok(ParameterModel {
            ty: ty.trim().to_string(),
            name,
            default_value,
        })
    }
}

impl Default for ConstructorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
