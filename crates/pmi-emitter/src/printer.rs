//! Text rendering of a [`SynthesizedInitializer`].
//!
//! Multiline layout:
//!
//! ```swift
//! public init(
//!     a: String,
//!     b: Int
//! ) {
//!     self.a = a
//!     self.b = b
//! }
//! ```
//!
//! An initializer with no parameters prints as `public init() {}`.
//! Output never ends with a newline; the caller decides how to splice it.

use crate::ir::SynthesizedInitializer;
use crate::options::{Layout, PrinterOptions};

pub struct InitializerPrinter {
    options: PrinterOptions,
    indent_unit: String,
    output: String,
    indent_level: usize,
}

impl InitializerPrinter {
    #[must_use]
    pub fn new(options: PrinterOptions) -> Self {
        let indent_unit = options.indent_unit();
        Self {
            options,
            indent_unit,
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Render `init` with the default options.
    #[must_use]
    pub fn emit_to_string(init: &SynthesizedInitializer) -> String {
        let mut printer = Self::new(PrinterOptions::default());
        printer.print(init);
        printer.take_output()
    }

    pub fn print(&mut self, init: &SynthesizedInitializer) {
        self.write(init.access.keyword());
        self.write(" init(");

        if init.is_empty() {
            self.write(") {}");
            return;
        }

        match self.options.layout {
            Layout::Multiline => {
                self.write_line();
                self.increase_indent();
                for (i, param) in init.parameters.iter().enumerate() {
                    self.write_indent();
                    self.write(&param.name);
                    self.write(": ");
                    self.write(&param.type_text);
                    if i + 1 < init.parameters.len() {
                        self.write(",");
                    }
                    self.write_line();
                }
                self.decrease_indent();
                self.write_indent();
                self.write(") {");
            }
            Layout::SingleLine => {
                for (i, param) in init.parameters.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write(&param.name);
                    self.write(": ");
                    self.write(&param.type_text);
                }
                self.write(") {");
            }
        }
        self.write_line();

        self.increase_indent();
        for assignment in &init.assignments {
            self.write_indent();
            self.write("self.");
            self.write(&assignment.member);
            self.write(" = ");
            self.write(&assignment.value);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    #[must_use]
    pub fn take_output(self) -> String {
        self.output
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_unit);
        }
    }

    const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}
