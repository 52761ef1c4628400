//! Registry based command line options parser.
//!
//! Options are registered up front, an argument vector is parsed in a single
//! left-to-right pass, and values are read back through typed accessors:
//!
//! ```
//! let mut p = xopts::Parser::new();
//! p.add_mandatory("mode", 'm', "Operation mode").validator(|v| v == "fast" || v == "slow");
//! p.add_optional("count", None, "Number of iterations", "10");
//! p.add_flag("verbose", 'v', "Be chatty");
//!
//! assert!(p.parse(["prg", "-m", "fast", "--", "a", "b"]));
//! assert_eq!(p.as_string("mode"), "fast");
//! assert_eq!(p.as_int("count"), 10);
//! assert!(!p.as_bool("verbose"));
//! assert_eq!(p.positionals(), ["a", "b"]);
//! ```
//!
//! Everything after a standalone `--` is collected verbatim as positional
//! arguments. There is no `--opt=value` syntax and no grouping of short flags.
use std::fmt;

macro_rules! format_err {
    ($($tt:tt)*) => {
        $crate::Error { msg: format!($($tt)*) }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

mod convert;
mod help;
mod opt;
mod parser;

pub use crate::{
    convert::{to_bool, to_double, to_int, to_uint},
    opt::{Kind, Opt, Validator},
    parser::Parser,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A malformed invocation: unknown option, missing or rejected value, or a
/// mandatory option that never showed up.
#[derive(Debug)]
pub struct Error {
    msg: String,
}

impl Error {
    /// Prints the message to stderr and exits the process with status 2.
    pub fn exit(self) -> ! {
        eprintln!("{}", self);
        std::process::exit(2)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.msg, f)
    }
}

impl std::error::Error for Error {}
