//! Fields, properties and constructors.

use sharpsmith_writer::CodeFragment;

use super::{CSharpNode, declaration, preamble};
use crate::{
    model::{AccessorBody, AccessorModel, ConstructorModel, FieldModel, PropertyModel},
    options::RenderOptions,
};

impl CSharpNode for FieldModel {
    fn fragments(&self, _options: &RenderOptions) -> Vec<CodeFragment> {
        let mut out = preamble(&self.docs, self.attributes.iter().map(String::as_str));

        let storage = if self.is_const {
            "const"
        } else if self.is_readonly {
            "readonly"
        } else {
            ""
        };
        let head = declaration([
            self.access.keyword(),
            if self.is_static { "static" } else { "" },
            storage,
            self.ty.as_str(),
            self.name.as_str(),
        ]);
        out.push(CodeFragment::line(match &self.value {
            Some(value) => format!("{} = {};", head, value),
            None => format!("{};", head),
        }));
        out
    }
}

/// `private set` or `get`.
fn accessor_head(accessor: &AccessorModel) -> String {
    declaration([accessor.access.keyword(), accessor.kind.keyword()])
}

/// `get;` or `get => expression;`. Block bodies are written by [`accessor_fragment`].
fn inline_accessor(accessor: &AccessorModel) -> String {
    let head = accessor_head(accessor);
    match &accessor.body {
        AccessorBody::Expression(expression) => format!("{} => {};", head, expression),
        _ => format!("{};", head),
    }
}

fn accessor_fragment(accessor: &AccessorModel) -> CodeFragment {
    match &accessor.body {
        AccessorBody::Block(lines) => CodeFragment::braced(
            accessor_head(accessor),
            lines.iter().map(CodeFragment::line).collect(),
        ),
        _ => CodeFragment::line(inline_accessor(accessor)),
    }
}

impl CSharpNode for PropertyModel {
    fn fragments(&self, _options: &RenderOptions) -> Vec<CodeFragment> {
        let mut out = preamble(&self.docs, self.attributes.iter().map(String::as_str));
        let head = declaration([
            self.access.keyword(),
            if self.is_static { "static" } else { "" },
            self.ty.as_str(),
            self.name.as_str(),
        ]);

        let inline = self
            .accessors
            .iter()
            .all(|accessor| !matches!(accessor.body, AccessorBody::Block(_)));

        if inline {
            let accessors = self
                .accessors
                .iter()
                .map(inline_accessor)
                .collect::<Vec<_>>();
            let mut line = format!("{} {{ {} }}", head, accessors.join(" "));
            if let Some(default) = &self.default_value {
                line.push_str(&format!(" = {};", default));
            }
            out.push(CodeFragment::line(line));
        } else {
            let body = self.accessors.iter().map(accessor_fragment).collect();
            out.push(CodeFragment::braced(head, body));
        }
        out
    }
}

impl CSharpNode for ConstructorModel {
    fn fragments(&self, _options: &RenderOptions) -> Vec<CodeFragment> {
        let mut out = preamble(&self.docs, std::iter::empty());

        let parameters = self
            .parameters
            .iter()
            .map(|p| match &p.default_value {
                Some(default) => format!("{} {} = {}", p.ty, p.name, default),
                None => format!("{} {}", p.ty, p.name),
            })
            .collect::<Vec<_>>()
            .join(", ");

        let mut header = if self.is_static {
            format!("static {}()", self.type_name)
        } else {
            format!(
                "{}({})",
                declaration([self.access.keyword(), self.type_name.as_str()]),
                parameters
            )
        };
        if let Some(initializer) = &self.initializer {
            header.push_str(&format!(
                " : {}({})",
                initializer.keyword(),
                initializer.arguments().join(", ")
            ));
        }

        out.push(CodeFragment::braced(
            header,
            self.body.iter().map(CodeFragment::line).collect(),
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CSharpRenderer,
        model::{Accessibility, AccessorKind, ConstructorInitializer, ParameterModel},
    };

    fn render(node: &impl CSharpNode) -> String {
        CSharpRenderer::default().render(node)
    }

    fn accessor(kind: AccessorKind, access: Accessibility, body: AccessorBody) -> AccessorModel {
        AccessorModel { kind, access, body }
    }

    fn property(accessors: Vec<AccessorModel>) -> PropertyModel {
        PropertyModel {
            ty: "string".into(),
            name: "Name".into(),
            access: Accessibility::Public,
            docs: Vec::new(),
            attributes: Vec::new(),
            is_static: false,
            accessors,
            default_value: None,
        }
    }

    #[test]
    fn test_private_setter_inline() {
        let p = property(vec![
            accessor(AccessorKind::Get, Accessibility::None, AccessorBody::Auto),
            accessor(AccessorKind::Set, Accessibility::Private, AccessorBody::Auto),
        ]);
        assert_eq!(render(&p), "public string Name { get; private set; }\n");
    }

    #[test]
    fn test_expression_accessor_inline() {
        let p = property(vec![accessor(
            AccessorKind::Get,
            Accessibility::None,
            AccessorBody::Expression("_name".into()),
        )]);
        assert_eq!(render(&p), "public string Name { get => _name; }\n");
    }

    #[test]
    fn test_block_accessor_expands_property() {
        let p = property(vec![
            accessor(
                AccessorKind::Get,
                Accessibility::None,
                AccessorBody::Expression("_name".into()),
            ),
            accessor(
                AccessorKind::Set,
                Accessibility::Protected,
                AccessorBody::Block(vec!["_name = value;".into()]),
            ),
        ]);
        assert_eq!(
            render(&p),
            "public string Name\n\
             {\n    get => _name;\n    protected set\n    {\n        _name = value;\n    }\n}\n"
        );
    }

    #[test]
    fn test_interface_style_property_has_no_modifier() {
        let mut p = property(vec![accessor(
            AccessorKind::Get,
            Accessibility::None,
            AccessorBody::Auto,
        )]);
        p.access = Accessibility::None;
        assert_eq!(render(&p), "string Name { get; }\n");
    }

    #[test]
    fn test_field_with_docs_and_attribute() {
        let field = FieldModel {
            ty: "int".into(),
            name: "_count".into(),
            access: Accessibility::Private,
            docs: vec!["Cached count.".into()],
            attributes: vec!["NonSerialized".into()],
            is_static: true,
            is_readonly: true,
            is_const: false,
            value: Some("0".into()),
        };
        assert_eq!(
            render(&field),
            "/// <summary>\n/// Cached count.\n/// </summary>\n[NonSerialized]\nprivate static readonly int _count = 0;\n"
        );
    }

    #[test]
    fn test_static_constructor() {
        let ctor = ConstructorModel {
            type_name: "Cache".into(),
            access: Accessibility::None,
            is_static: true,
            docs: Vec::new(),
            parameters: Vec::new(),
            initializer: None,
            body: vec!["Instance = new Cache();".into()],
        };
        assert_eq!(
            render(&ctor),
            "static Cache()\n{\n    Instance = new Cache();\n}\n"
        );
    }

    #[test]
    fn test_constructor_base_call() {
        let ctor = ConstructorModel {
            type_name: "Employee".into(),
            access: Accessibility::Protected,
            is_static: false,
            docs: Vec::new(),
            parameters: vec![ParameterModel {
                ty: "string".into(),
                name: "name".into(),
                default_value: None,
            }],
            initializer: Some(ConstructorInitializer::Base(vec!["name".into()])),
            body: Vec::new(),
        };
        assert_eq!(
            render(&ctor),
            "protected Employee(string name) : base(name)\n{\n}\n"
        );
    }
}
