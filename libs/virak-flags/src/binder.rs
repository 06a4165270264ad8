// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Flag registration
//!
//! An options struct describes its flags as a closed list of [`Field`]s
//! (usually generated by the [`options!`](crate::options) macro). The binder
//! turns that list into clap arguments, and [`Flags`] captures the parsed
//! values together with whether each one was set explicitly.

use std::fmt;
use std::marker::PhantomData;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, FromArgMatches};
use indexmap::IndexMap;

use crate::values::{FlagValue, Values};

/// Flag carrying an explicit zone ID on zone-scoped commands
pub const ZONE_ID_FLAG: &str = "zoneId";

/// Flag selecting the configured default zone on zone-scoped commands
pub const DEFAULT_ZONE_FLAG: &str = "default-zone";

/// How a flag is stored into its options struct.
///
/// Each variant pairs the flag kind with a setter of the matching type, so a
/// binding can never write a bool into a string field.
pub enum Binding<T> {
    Str {
        default: &'static str,
        set: fn(&mut T, String),
    },
    Bool {
        default: bool,
        set: fn(&mut T, bool),
    },
    Int {
        default: i64,
        set: fn(&mut T, i64),
    },
    StrList {
        default: &'static [&'static str],
        set: fn(&mut T, Vec<String>),
    },
}

impl<T> Binding<T> {
    fn default_value(&self) -> FlagValue {
        match self {
            Self::Str { default, .. } => FlagValue::Str((*default).to_string()),
            Self::Bool { default, .. } => FlagValue::Bool(*default),
            Self::Int { default, .. } => FlagValue::Int(*default),
            Self::StrList { default, .. } => {
                FlagValue::StrList(default.iter().map(|s| (*s).to_string()).collect())
            }
        }
    }
}

/// One declared flag of an options struct
pub struct Field<T> {
    pub name: &'static str,
    pub usage: &'static str,
    pub binding: Binding<T>,
}

impl<T> Field<T> {
    pub fn new(name: &'static str, usage: &'static str, binding: Binding<T>) -> Self {
        Self {
            name,
            usage,
            binding,
        }
    }

    pub fn spec(&self) -> FlagSpec {
        FlagSpec {
            name: self.name,
            usage: self.usage,
            default: self.binding.default_value(),
        }
    }
}

/// Static description of a registered flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub default: FlagValue,
}

/// A struct whose fields are populated from command-line flags
pub trait Options: Default + Sized + 'static {
    /// Zone-scoped commands get `--zoneId` and `--default-zone` registered
    /// and have a zone resolved before they run.
    const ZONE_SCOPED: bool = false;

    fn fields() -> Vec<Field<Self>>;
}

/// Every flag registered for `T`, including the zone flags when applicable
pub fn specs<T: Options>() -> Vec<FlagSpec> {
    let mut specs: Vec<FlagSpec> = T::fields().iter().map(Field::spec).collect();
    if T::ZONE_SCOPED {
        specs.push(FlagSpec {
            name: ZONE_ID_FLAG,
            usage: "Zone ID to operate in",
            default: FlagValue::Str(String::new()),
        });
        specs.push(FlagSpec {
            name: DEFAULT_ZONE_FLAG,
            usage: "Use the default zone from the config file",
            default: FlagValue::Bool(false),
        });
    }
    specs
}

/// Register the flags of `T` on a clap command
pub fn bind<T: Options>(mut cmd: Command) -> Command {
    for spec in specs::<T>() {
        cmd = cmd.arg(to_arg(&spec));
    }
    cmd
}

fn to_arg(spec: &FlagSpec) -> Arg {
    let arg = Arg::new(spec.name).long(spec.name).help(spec.usage);
    match &spec.default {
        FlagValue::Str(default) => {
            let arg = arg.action(ArgAction::Set).value_name("string");
            if default.is_empty() {
                arg
            } else {
                arg.default_value(default.clone())
            }
        }
        // `--flag` means true, `--flag=false` turns a true default off
        FlagValue::Bool(default) => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .default_value(default.to_string())
            .value_parser(clap::value_parser!(bool)),
        FlagValue::Int(default) => arg
            .action(ArgAction::Set)
            .value_name("int")
            .allow_negative_numbers(true)
            .default_value(default.to_string())
            .value_parser(clap::value_parser!(i64)),
        FlagValue::StrList(default) => {
            let arg = arg
                .action(ArgAction::Append)
                .value_name("strings")
                .value_delimiter(',');
            if default.is_empty() {
                arg
            } else {
                arg.default_values(default.clone())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) value: FlagValue,
    pub(crate) changed: bool,
}

/// Parsed flag values of one invocation for the options struct `T`
pub struct Flags<T> {
    pub(crate) entries: IndexMap<&'static str, Entry>,
    pub(crate) _options: PhantomData<fn() -> T>,
}

impl<T> Clone for Flags<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _options: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Flags<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, e)| (k, &e.value)))
            .finish()
    }
}

impl<T: Options> Flags<T> {
    /// Current value of a flag, if registered
    pub fn value(&self, name: &str) -> Option<&FlagValue> {
        self.entries.get(name).map(|e| &e.value)
    }

    /// Integer value of an int flag
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.value(name) {
            Some(FlagValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    fn capture(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut entries = IndexMap::new();
        for spec in specs::<T>() {
            let value = read_value(matches, &spec)?;
            let changed = matches!(
                matches.value_source(spec.name),
                Some(ValueSource::CommandLine)
            );
            entries.insert(spec.name, Entry { value, changed });
        }
        Ok(Self {
            entries,
            _options: PhantomData,
        })
    }
}

fn read_value(matches: &ArgMatches, spec: &FlagSpec) -> Result<FlagValue, clap::Error> {
    let lookup_error = |e: clap::parser::MatchesError| {
        clap::Error::raw(
            clap::error::ErrorKind::InvalidValue,
            format!("flag --{}: {e}\n", spec.name),
        )
    };
    let value = match &spec.default {
        FlagValue::Str(_) => FlagValue::Str(
            matches
                .try_get_one::<String>(spec.name)
                .map_err(lookup_error)?
                .cloned()
                .unwrap_or_default(),
        ),
        FlagValue::Bool(default) => FlagValue::Bool(
            matches
                .try_get_one::<bool>(spec.name)
                .map_err(lookup_error)?
                .copied()
                .unwrap_or(*default),
        ),
        FlagValue::Int(default) => FlagValue::Int(
            matches
                .try_get_one::<i64>(spec.name)
                .map_err(lookup_error)?
                .copied()
                .unwrap_or(*default),
        ),
        FlagValue::StrList(_) => FlagValue::StrList(
            matches
                .try_get_many::<String>(spec.name)
                .map_err(lookup_error)?
                .map(|items| items.cloned().collect())
                .unwrap_or_default(),
        ),
    };
    Ok(value)
}

impl<T: Options> Values for Flags<T> {
    fn get_string(&self, name: &str) -> String {
        match self.value(name) {
            Some(FlagValue::Bool(_)) | None => String::new(),
            Some(value) => value.to_string(),
        }
    }

    fn get_bool(&self, name: &str) -> bool {
        matches!(self.value(name), Some(FlagValue::Bool(true)))
    }

    fn changed(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.changed)
    }
}

impl<T: Options> clap::Args for Flags<T> {
    fn augment_args(cmd: Command) -> Command {
        bind::<T>(cmd)
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        bind::<T>(cmd)
    }
}

impl<T: Options> FromArgMatches for Flags<T> {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        Self::capture(matches)
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::capture(matches)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::options;
    use pretty_assertions::assert_eq;

    options! {
        struct Sample: zone {
            name: string = ("name", "", "Name"),
            policy: string = ("policy", "Private", "Policy"),
            force: bool = ("force", false, "Force"),
            enabled: bool = ("enabled", true, "Enabled"),
            size: int = ("size", -1, "Size"),
            keys: strings = ("keys", [], "Keys"),
        }
    }

    fn parse(args: &[&str]) -> Flags<Sample> {
        let cmd = bind::<Sample>(Command::new("sample"));
        let matches = cmd
            .try_get_matches_from(std::iter::once("sample").chain(args.iter().copied()))
            .expect("arguments should parse");
        Flags::from_arg_matches(&matches).expect("flags should capture")
    }

    #[test]
    fn test_specs_include_zone_flags() {
        let names: Vec<&str> = specs::<Sample>().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "policy",
                "force",
                "enabled",
                "size",
                "keys",
                ZONE_ID_FLAG,
                DEFAULT_ZONE_FLAG
            ]
        );
    }

    #[test]
    fn test_defaults_are_not_changed() {
        let flags = parse(&[]);
        assert_eq!(flags.get_string("policy"), "Private");
        assert_eq!(flags.get_string("size"), "-1");
        assert!(flags.get_bool("enabled"));
        assert!(!flags.changed("policy"));
        assert!(!flags.changed("enabled"));
        assert!(!flags.changed(ZONE_ID_FLAG));
    }

    #[test]
    fn test_explicit_values_are_changed() {
        let flags = parse(&["--name", "", "--size", "3", "--force", "--zoneId", "z1"]);
        assert!(flags.changed("name"));
        assert_eq!(flags.get_string("name"), "");
        assert_eq!(flags.get_int("size"), Some(3));
        assert!(flags.get_bool("force"));
        assert_eq!(flags.get_string(ZONE_ID_FLAG), "z1");
    }

    #[test]
    fn test_bool_can_be_turned_off() {
        let flags = parse(&["--enabled=false"]);
        assert!(!flags.get_bool("enabled"));
        assert!(flags.changed("enabled"));
    }

    #[test]
    fn test_negative_int() {
        let flags = parse(&["--size", "-5"]);
        assert_eq!(flags.get_int("size"), Some(-5));
    }

    #[test]
    fn test_string_list_split_and_repeat() {
        let flags = parse(&["--keys", "a,b", "--keys", "c"]);
        assert_eq!(
            flags.value("keys"),
            Some(&FlagValue::StrList(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
        assert_eq!(flags.get_string("keys"), "a,b,c");
    }

    #[test]
    fn test_bool_reads_empty_as_string() {
        let flags = parse(&["--force"]);
        assert_eq!(flags.get_string("force"), "");
        assert!(!flags.get_bool("name"));
    }

    #[test]
    fn test_unknown_flag_reads_empty() {
        let flags = parse(&[]);
        assert_eq!(flags.get_string("missing"), "");
        assert!(!flags.get_bool("missing"));
        assert!(!flags.changed("missing"));
    }
}
