//! Java text for synthesized test cases

use crate::config::{BraceStyle, RenderConfig};
use crate::synthesis::TestCaseSpec;

/// Imports every generated test file needs.
pub const REQUIRED_IMPORTS: [&str; 2] = [
    "import static org.mockito.Mockito.mock;",
    "import org.junit.Test;",
];

#[derive(Debug, Clone)]
pub struct JavaRenderer {
    indent: String,
    brace_style: BraceStyle,
}

impl JavaRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            indent: config.indent.clone(),
            brace_style: config.brace_style,
        }
    }

    /// One test method, indented as a class member.
    pub fn render_method(&self, case: &TestCaseSpec) -> String {
        let member = &self.indent;
        let body = format!("{}{}", self.indent, self.indent);

        let mut lines = vec![format!("{}{}", member, case.annotation())];
        let header = format!("{}public void {}()", member, case.name);
        match self.brace_style {
            BraceStyle::NextLine => {
                lines.push(header);
                lines.push(format!("{}{{", member));
            }
            BraceStyle::SameLine => lines.push(format!("{} {{", header)),
        }
        for binding in &case.bindings {
            lines.push(format!(
                "{}{} {} = {};",
                body,
                binding.declared_type.type_text(),
                binding.name,
                binding.expression
            ));
        }
        let arguments: Vec<&str> = case.bindings.iter().map(|b| b.name.as_str()).collect();
        lines.push(format!("{}new {}({});", body, case.target, arguments.join(", ")));
        lines.push(format!("{}}}", member));
        lines.join("\n")
    }

    /// Methods separated by blank lines.
    pub fn render_methods(&self, cases: &[TestCaseSpec]) -> String {
        cases
            .iter()
            .map(|case| self.render_method(case))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn brace_on_next_line(&self) -> bool {
        self.brace_style == BraceStyle::NextLine
    }
}
