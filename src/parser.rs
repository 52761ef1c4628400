use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
};

use crate::{Opt, Result};

/// The options a program accepts, plus the state of the last parse.
///
/// Register options with the `add_*` methods, call [`Parser::parse`] (or
/// [`Parser::try_parse`] to learn what went wrong), then read values back by
/// long name. Reading an option that was never registered is a bug in the
/// calling program and panics.
///
/// Recognized tokens are `--long`, `-s`, a value right after an option that
/// takes one, and a standalone `--` after which every token is positional.
/// Positional tokens are kept as given, other tokens must be valid UTF-8.
/// When an option is given twice the later value wins.
#[derive(Debug, Default)]
pub struct Parser {
    opts: Vec<Opt>,
    positional: Vec<OsString>,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Registers an already built option.
    pub fn add(&mut self, opt: Opt) -> &mut Opt {
        if self.opts.iter().any(|it| it.long_name() == opt.long_name()) {
            log::warn!("option `--{}` registered more than once", opt.long_name());
        }
        if let Some(short) = opt.short_name() {
            if self.opts.iter().any(|it| it.short_name() == Some(short)) {
                log::warn!("short option `-{}` registered more than once", short);
            }
        }
        self.opts.push(opt);
        let idx = self.opts.len() - 1;
        &mut self.opts[idx]
    }

    pub fn add_flag(
        &mut self,
        long_name: &str,
        short_name: impl Into<Option<char>>,
        description: &str,
    ) -> &mut Opt {
        self.add(Opt::new(long_name, short_name, description))
    }

    pub fn add_optional(
        &mut self,
        long_name: &str,
        short_name: impl Into<Option<char>>,
        description: &str,
        default_value: &str,
    ) -> &mut Opt {
        self.add(Opt::new(long_name, short_name, description)).optional(default_value)
    }

    pub fn add_mandatory(
        &mut self,
        long_name: &str,
        short_name: impl Into<Option<char>>,
        description: &str,
    ) -> &mut Opt {
        self.add(Opt::new(long_name, short_name, description)).mandatory()
    }

    /// Parses `args`, skipping the first token (the program name).
    pub fn parse<I>(&mut self, args: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.try_parse(args).is_ok()
    }

    /// Parses `args` starting at token `start`.
    pub fn parse_at<I>(&mut self, args: I, start: usize) -> bool
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.try_parse_at(args, start).is_ok()
    }

    /// Parses the arguments of the current process.
    pub fn parse_env(&mut self) -> bool {
        self.try_parse_env().is_ok()
    }

    pub fn try_parse<I>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.try_parse_at(args, 1)
    }

    pub fn try_parse_env(&mut self) -> Result<()> {
        self.try_parse_at(std::env::args_os(), 1)
    }

    /// Parses `args` starting at token `start`, reporting the first problem.
    ///
    /// State from a previous parse is discarded first. On failure, options
    /// assigned before the offending token keep their values.
    pub fn try_parse_at<I>(&mut self, args: I, start: usize) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.reset();

        let mut args = args.into_iter().skip(start).map(Into::<OsString>::into);
        let mut after_double_dash = false;

        while let Some(arg) = args.next() {
            if after_double_dash {
                log::trace!("positional {:?}", arg);
                self.positional.push(arg);
                continue;
            }

            let arg = into_string("argument", arg)?;
            log::trace!("token {:?}", arg);
            if arg == "--" {
                log::debug!("`--` found, collecting positional arguments");
                after_double_dash = true;
                continue;
            }

            let opt = match self.opts.iter_mut().find(|it| it.matches(&arg)) {
                Some(it) => it,
                None => {
                    log::debug!("unknown option {:?}", arg);
                    if arg.starts_with('-') {
                        bail!("Unknown flag: `{}`", arg)
                    }
                    bail!("Unexpected argument: `{}`, positional arguments go after `--`", arg)
                }
            };

            if opt.has_argument() {
                let value = match args.next() {
                    Some(it) => into_string(&arg, it)?,
                    None => {
                        log::debug!("no value for {:?}", arg);
                        bail!("expected a value for `{}`", arg)
                    }
                };
                if let Err(err) = opt.assign(&value) {
                    log::debug!("value {:?} rejected for {:?}", value, arg);
                    return Err(err);
                }
                log::debug!("`--{}` = {:?}", opt.long_name(), value);
            } else {
                opt.mark_present();
                log::debug!("`--{}` present", opt.long_name());
            }
        }

        let missing = self.opts.iter().find(|it| it.is_mandatory() && !it.was_supplied());
        if let Some(missing) = missing {
            log::debug!("mandatory `--{}` not supplied", missing.long_name());
            bail!("Flag is required: `--{}`", missing.long_name())
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.opts.iter_mut().for_each(Opt::reset);
        self.positional.clear();
    }

    /// Options in registration order.
    pub fn options(&self) -> impl Iterator<Item = &Opt> {
        self.opts.iter()
    }

    /// Looks up an option by its long name.
    pub fn get(&self, long_name: &str) -> Option<&Opt> {
        self.opts.iter().find(|it| it.long_name() == long_name)
    }

    #[track_caller]
    fn lookup(&self, long_name: &str) -> &Opt {
        match self.get(long_name) {
            Some(it) => it,
            None => panic!("option `{}` is not registered", long_name),
        }
    }

    #[track_caller]
    pub fn was_supplied(&self, long_name: &str) -> bool {
        self.lookup(long_name).was_supplied()
    }
    #[track_caller]
    pub fn as_int(&self, long_name: &str) -> i32 {
        self.lookup(long_name).as_int()
    }
    #[track_caller]
    pub fn as_uint(&self, long_name: &str) -> u32 {
        self.lookup(long_name).as_uint()
    }
    #[track_caller]
    pub fn as_double(&self, long_name: &str) -> f64 {
        self.lookup(long_name).as_double()
    }
    #[track_caller]
    pub fn as_bool(&self, long_name: &str) -> bool {
        self.lookup(long_name).as_bool()
    }
    #[track_caller]
    pub fn as_string(&self, long_name: &str) -> &str {
        self.lookup(long_name).as_string()
    }

    pub fn positional_count(&self) -> usize {
        self.positional.len()
    }

    /// The `idx`-th token after `--`, with invalid UTF-8 replaced. Panics if
    /// there are not that many.
    #[track_caller]
    pub fn positional(&self, idx: usize) -> Cow<'_, str> {
        self.positional_os(idx).to_string_lossy()
    }

    /// Like [`Parser::positional`], but returns the token unchanged.
    #[track_caller]
    pub fn positional_os(&self, idx: usize) -> &OsStr {
        match self.positional.get(idx) {
            Some(it) => it,
            None => panic!(
                "positional argument {} requested, but only {} given",
                idx,
                self.positional.len()
            ),
        }
    }

    pub fn positionals(&self) -> &[OsString] {
        &self.positional
    }
}

fn into_string(what: &str, arg: OsString) -> Result<String> {
    match arg.into_string() {
        Ok(it) => Ok(it),
        Err(it) => bail!("Can't parse `{}`, invalid utf8: {:?}", what, it),
    }
}
