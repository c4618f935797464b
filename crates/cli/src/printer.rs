use miette::IntoDiagnostic;
use starbase_styles::color::{self, OwoStyle};
use std::io::{self, Write};

pub struct Printer {
    buffer: String,
    depth: u8,
}

impl Printer {
    pub fn new() -> Self {
        Printer {
            buffer: String::new(),
            depth: 0,
        }
    }

    pub fn flush(&mut self) -> miette::Result<()> {
        let mut stdout = io::stdout().lock();

        stdout.write_all(self.buffer.as_bytes()).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;

        self.buffer.clear();

        Ok(())
    }

    pub fn line(&mut self) {
        self.buffer.push('\n');
    }

    pub fn section(
        &mut self,
        func: impl FnOnce(&mut Printer) -> miette::Result<()>,
    ) -> miette::Result<()> {
        self.depth += 1;
        func(self)?;
        self.depth -= 1;

        Ok(())
    }

    pub fn named_section<T: AsRef<str>>(
        &mut self,
        name: T,
        func: impl FnOnce(&mut Printer) -> miette::Result<()>,
    ) -> miette::Result<()> {
        self.line();
        self.write_line(
            OwoStyle::new()
                .bold()
                .style(color::muted_light(name.as_ref()))
                .to_string(),
        );
        self.section(func)?;

        Ok(())
    }

    pub fn indent(&mut self) {
        if self.depth > 0 {
            self.buffer.push_str(&"  ".repeat(self.depth as usize));
        }
    }

    pub fn entry<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) {
        self.write_line(format!("{}: {}", key.as_ref(), value.as_ref()));
    }

    pub fn write_line<T: AsRef<str>>(&mut self, line: T) {
        self.indent();
        self.buffer.push_str(line.as_ref());
        self.line();
    }
}
