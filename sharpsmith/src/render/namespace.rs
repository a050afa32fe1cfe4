use sharpsmith_writer::CodeFragment;

use super::CSharpNode;
use crate::{
    model::NamespaceModel,
    options::{NamespaceStyle, RenderOptions},
};

impl CSharpNode for NamespaceModel {
    fn fragments(&self, options: &RenderOptions) -> Vec<CodeFragment> {
        let mut out: Vec<CodeFragment> = self
            .usings
            .iter()
            .map(|using| CodeFragment::line(format!("using {};", using)))
            .collect();
        if !out.is_empty() {
            out.push(CodeFragment::blank());
        }

        // Types in a namespace are always set apart by a blank line.
        let members = CodeFragment::separated(
            self.members.iter().map(|m| m.fragments(options)).collect(),
            true,
        );

        match options.namespace_style {
            NamespaceStyle::Block => {
                out.push(CodeFragment::braced(format!("namespace {}", self.name), members));
            }
            NamespaceStyle::FileScoped => {
                out.push(CodeFragment::line(format!("namespace {};", self.name)));
                if !members.is_empty() {
                    out.push(CodeFragment::blank());
                    out.extend(members);
                }
            }
        }
        out
    }
}
