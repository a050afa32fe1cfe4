//! Type declarations: classes, structs, interfaces and enums.

use sharpsmith_writer::CodeFragment;

use super::{CSharpNode, declaration, preamble};
use crate::{
    model::{ClassModel, EnumModel, InterfaceModel, TypeModel},
    options::RenderOptions,
};

const FLAGS_ATTRIBUTE: &str = "System.Flags";

/// Appends ` : A, B` when `bases` is non-empty.
fn with_bases<'a>(header: String, bases: impl IntoIterator<Item = &'a str>) -> String {
    let bases: Vec<_> = bases.into_iter().collect();
    if bases.is_empty() {
        header
    } else {
        format!("{} : {}", header, bases.join(", "))
    }
}

impl CSharpNode for ClassModel {
    fn fragments(&self, options: &RenderOptions) -> Vec<CodeFragment> {
        let mut out = preamble(&self.docs, self.attributes.iter().map(String::as_str));

        let header = declaration([
            self.access.keyword(),
            self.modifier.map(|m| m.keyword()).unwrap_or_default(),
            if self.is_partial { "partial" } else { "" },
            self.kind.keyword(),
            self.name.as_str(),
        ]);
        let header = with_bases(
            header,
            self.base_type
                .as_deref()
                .into_iter()
                .chain(self.interfaces.iter().map(String::as_str)),
        );

        let members: Vec<Vec<CodeFragment>> = self
            .fields
            .iter()
            .map(|f| f.fragments(options))
            .chain(self.constructors.iter().map(|c| c.fragments(options)))
            .chain(self.properties.iter().map(|p| p.fragments(options)))
            .chain(self.nested_types.iter().map(|t| t.fragments(options)))
            .collect();

        out.push(CodeFragment::braced(
            header,
            CodeFragment::separated(members, options.blank_line_between_members),
        ));
        out
    }
}

impl CSharpNode for InterfaceModel {
    fn fragments(&self, options: &RenderOptions) -> Vec<CodeFragment> {
        let mut out = preamble(&self.docs, self.attributes.iter().map(String::as_str));

        let header = declaration([self.access.keyword(), "interface", self.name.as_str()]);
        let header = with_bases(header, self.interfaces.iter().map(String::as_str));

        let members = self
            .properties
            .iter()
            .map(|p| p.fragments(options))
            .collect();

        out.push(CodeFragment::braced(
            header,
            CodeFragment::separated(members, options.blank_line_between_members),
        ));
        out
    }
}

impl CSharpNode for EnumModel {
    fn fragments(&self, _options: &RenderOptions) -> Vec<CodeFragment> {
        let flags = self.flags.then_some(FLAGS_ATTRIBUTE);
        let mut out = preamble(
            &self.docs,
            flags
                .into_iter()
                .chain(self.attributes.iter().map(String::as_str)),
        );

        let header = declaration([self.access.keyword(), "enum", self.name.as_str()]);
        let header = with_bases(header, self.underlying_type.as_deref());

        let last = self.members.len().saturating_sub(1);
        let body = self
            .members
            .iter()
            .enumerate()
            .flat_map(|(index, member)| {
                let separator = if index < last { "," } else { "" };
                let mut lines = preamble(&member.docs, std::iter::empty());
                lines.push(CodeFragment::line(match member.value {
                    Some(value) => format!("{} = {}{}", member.name, value, separator),
                    None => format!("{}{}", member.name, separator),
                }));
                lines
            })
            .collect();

        out.push(CodeFragment::braced(header, body));
        out
    }
}

impl CSharpNode for TypeModel {
    fn fragments(&self, options: &RenderOptions) -> Vec<CodeFragment> {
        match self {
            Self::Class(model) => model.fragments(options),
            Self::Interface(model) => model.fragments(options),
            Self::Enum(model) => model.fragments(options),
        }
    }
}
