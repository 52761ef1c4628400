use std::fmt;

use crate::{convert, Result};

/// Predicate deciding whether a candidate value may be assigned to an option.
pub type Validator = Box<dyn Fn(&str) -> bool>;

/// What an option expects on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A switch without a value; reads as `true` when present.
    Flag,
    /// Takes a value, falls back to the stored default when absent.
    Optional(String),
    /// Takes a value which must be supplied.
    Mandatory,
}

/// A single registered option: its names, its kind and whatever the last
/// parse stored in it.
///
/// Options start out as flags. Typed accessors read the supplied value if
/// there is one and the default otherwise; flags and mandatory options have
/// an empty default.
pub struct Opt {
    long: String,
    short: Option<char>,
    description: String,
    kind: Kind,
    validator: Option<Validator>,
    value: Option<String>,
}

impl Opt {
    pub fn new(
        long_name: impl Into<String>,
        short_name: impl Into<Option<char>>,
        description: impl Into<String>,
    ) -> Opt {
        Opt {
            long: long_name.into(),
            short: short_name.into(),
            description: description.into(),
            kind: Kind::Flag,
            validator: None,
            value: None,
        }
    }

    /// Requires a value on the command line. Overrides a previous
    /// [`Opt::optional`].
    pub fn mandatory(&mut self) -> &mut Opt {
        self.kind = Kind::Mandatory;
        self
    }

    /// Takes a value, using `default_value` when none is given. Overrides a
    /// previous [`Opt::mandatory`].
    pub fn optional(&mut self, default_value: impl Into<String>) -> &mut Opt {
        self.kind = Kind::Optional(default_value.into());
        self
    }

    /// Only values accepted by `f` can be assigned. Flags are never validated.
    pub fn validator(&mut self, f: impl Fn(&str) -> bool + 'static) -> &mut Opt {
        self.validator = Some(Box::new(f));
        self
    }

    /// Stores `value` unless the validator rejects it, in which case nothing
    /// changes.
    pub fn assign(&mut self, value: &str) -> Result<()> {
        if self.has_argument() {
            if let Some(validator) = &self.validator {
                if !validator(value) {
                    bail!("Invalid value for `--{}`: `{}`", self.long, value)
                }
            }
        }
        self.value = Some(value.to_string());
        Ok(())
    }

    /// Marks a flag as present; it reads as `"true"` from then on.
    pub fn mark_present(&mut self) {
        self.value = Some("true".to_string());
    }

    /// Forgets the supplied value.
    pub fn reset(&mut self) {
        self.value = None;
    }

    pub fn long_name(&self) -> &str {
        &self.long
    }
    pub fn short_name(&self) -> Option<char> {
        self.short
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn kind(&self) -> &Kind {
        &self.kind
    }
    pub fn default_value(&self) -> &str {
        match &self.kind {
            Kind::Optional(default) => default,
            Kind::Flag | Kind::Mandatory => "",
        }
    }

    pub fn is_flag(&self) -> bool {
        self.kind == Kind::Flag
    }
    pub fn is_optional(&self) -> bool {
        matches!(self.kind, Kind::Optional(_))
    }
    pub fn is_mandatory(&self) -> bool {
        self.kind == Kind::Mandatory
    }
    pub fn has_argument(&self) -> bool {
        !self.is_flag()
    }
    pub fn was_supplied(&self) -> bool {
        self.value.is_some()
    }

    /// Whether `token` names this option, either as `--long` or `-s`.
    pub(crate) fn matches(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.long;
        }
        match (token.strip_prefix('-'), self.short) {
            (Some(rest), Some(short)) => {
                let mut chars = rest.chars();
                chars.next() == Some(short) && chars.next().is_none()
            }
            _ => false,
        }
    }

    pub fn as_int(&self) -> i32 {
        convert::to_int(self.as_string())
    }
    pub fn as_uint(&self) -> u32 {
        convert::to_uint(self.as_string())
    }
    pub fn as_double(&self) -> f64 {
        convert::to_double(self.as_string())
    }
    pub fn as_bool(&self) -> bool {
        convert::to_bool(self.as_string())
    }
    pub fn as_string(&self) -> &str {
        match &self.value {
            Some(value) => value,
            None => self.default_value(),
        }
    }
}

impl fmt::Debug for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("long", &self.long)
            .field("short", &self.short)
            .field("kind", &self.kind)
            .field("validator", &self.validator.is_some())
            .field("value", &self.value)
            .finish()
    }
}
