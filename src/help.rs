use std::fmt;

use crate::Parser;

const MIN_NAME_PADDING: usize = 8;

impl Parser {
    /// One line per option in registration order, `M` marking the mandatory
    /// ones:
    ///
    /// ```text
    ///  -c, --config  M Configuration file
    ///      --count     Number of iterations (default: 10)
    /// ```
    pub fn render_help(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let longest = self.options().map(|it| it.long_name().len()).max().unwrap_or(0);
        let width = MIN_NAME_PADDING + longest;

        for opt in self.options() {
            let names = match opt.short_name() {
                Some(short) => format!("-{}, --{}", short, opt.long_name()),
                None => format!("    --{}", opt.long_name()),
            };
            let marker = if opt.is_mandatory() { "M " } else { "  " };
            write!(f, " {:<width$}{}{}", names, marker, opt.description(), width = width)?;
            if opt.is_optional() {
                write!(f, " (default: {})", opt.default_value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
