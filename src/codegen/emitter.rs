use reflectgen_core::ClassEntity;

use crate::config::OutputLayout;

const INDENT: &str = "    ";

/// Accumulates the generated translation unit.
pub struct RegistrationEmitter<'a> {
    layout: &'a OutputLayout,
    output: String,
}

impl<'a> RegistrationEmitter<'a> {
    pub fn new(layout: &'a OutputLayout) -> Self {
        Self {
            layout,
            output: String::new(),
        }
    }

    /// Banner comment, framework includes and one include per header.
    pub fn emit_preamble(&mut self, includes: &[String]) {
        for line in &self.layout.banner {
            self.output.push_str(&format!("// {line}\n"));
        }
        if !self.layout.banner.is_empty() {
            self.output.push('\n');
        }

        let framework = self.layout.framework_includes.iter();
        for include in framework.chain(includes) {
            self.output.push_str(&format!("#include \"{include}\"\n"));
        }
        self.output.push('\n');
    }

    /// Open the entry function and bail out early when the runtime is not up.
    pub fn open_entry(&mut self) {
        let layout = self.layout;
        let OutputLayout {
            entry_function,
            runtime_namespace,
            context,
            reflect_system,
            ..
        } = layout;

        self.output.push_str(&format!("void {entry_function}() {{\n"));
        self.output
            .push_str(&format!("{INDENT}using namespace {runtime_namespace};\n"));
        self.emit_null_guard(&format!("{context} == nullptr"));
        self.emit_null_guard(&format!(
            "{context}->{reflect_system}.getInstance() == nullptr"
        ));
        self.output.push_str(&format!(
            "{INDENT}auto& {reflect_system} = *{context}->{reflect_system};\n\n"
        ));
    }

    fn emit_null_guard(&mut self, condition: &str) {
        self.output.push_str(&format!("{INDENT}if ({condition}) {{\n"));
        self.output.push_str(&format!("{INDENT}{INDENT}return;\n"));
        self.output.push_str(&format!("{INDENT}}}\n"));
    }

    /// One scoped registration block. Classes without a registration name
    /// emit nothing.
    pub fn emit_class(&mut self, class: &ClassEntity) {
        let Some(registration_name) = class.registration_name() else {
            return;
        };
        let qualified = class.qualified_name();
        let layout = self.layout;
        let OutputLayout {
            reflect_system,
            class_builder,
            class_call,
            member_call,
            function_call,
            ..
        } = layout;

        let add_class = format!("{reflect_system}.{class_call}<{qualified}>");
        self.output.push_str(&format!("{INDENT}{{\n"));
        self.output.push_str(&format!(
            "{INDENT}{INDENT}auto {class_builder} = {add_class}(\"{registration_name}\");\n"
        ));
        for member in class.members() {
            self.output.push_str(&format!(
                "{INDENT}{INDENT}{class_builder}.{member_call}(\"{}\", &{qualified}::{});\n",
                member.registration_name, member.identifier
            ));
        }
        for function in class.functions() {
            self.output.push_str(&format!(
                "{INDENT}{INDENT}{class_builder}.{function_call}(\"{}\", &{qualified}::{});\n",
                function.registration_name, function.identifier
            ));
        }
        self.output.push_str(&format!("{INDENT}}}\n\n"));
    }

    /// Close the entry function and return the source.
    pub fn finish(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
