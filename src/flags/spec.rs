// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use crate::flags::value::Value;
use std::collections::HashSet;
use std::fmt;

/// The flags which are reserved for requesting help. These are always
/// recognized by the parser, and may not be declared by the caller.
pub(crate) const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// ValueType determines how the raw string value of an argument is
/// interpreted after parsing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueType {
    /// A signed integer, written in decimal.
    Integer,
    /// The raw token, uninterpreted.
    String,
    /// A switch which takes no value; present means true.
    Boolean,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ValueType::Integer => "int",
            ValueType::String => "string",
            ValueType::Boolean => "flag",
        })
    }
}

/// Type denotes the particular kind of argument a Spec structure describes,
/// along with any extra metadata which only makes sense for that kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Type {
    /// A mandatory argument, identified purely by its position amongst the
    /// other non-flag tokens. Its value is always the raw token.
    Positional,
    /// An optional argument, identified by one of its flags, which consumes
    /// the following token as its value.
    Named {
        /// How the value token is interpreted.
        value_type: ValueType,
        /// The value used if the flag doesn't appear at all. This may be
        /// Value::Absent.
        default_value: Value,
    },
    /// An optional switch, which consumes no value token.
    Boolean,
}

/// Spec describes a single argument, in such a way that the parser can
/// correctly identify it in the set of arguments given on the command-line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spec {
    /// The logical name of this argument; this is the key its value is stored
    /// under after parsing.
    name: String,
    /// The help string to print out for this argument.
    help: String,
    /// The flag strings which identify this argument, in declaration order.
    /// Empty for positional arguments.
    flags: Vec<String>,
    flag_type: Type,
}

fn is_long_flag(flag: &str) -> bool {
    flag.len() > 2 && flag.starts_with("--")
}

fn is_short_flag(flag: &str) -> bool {
    flag.len() > 1 && flag.starts_with('-') && flag[1..].chars().all(|c| c != '-')
}

/// Validate the given flag strings, returning them as owned Strings.
fn validate_flags(flags: &[&str]) -> Result<Vec<String>> {
    if flags.is_empty() {
        return Err(Error::InvalidArgument(
            "optional arguments need at least one flag".to_owned(),
        ));
    }

    let mut validated = Vec::with_capacity(flags.len());
    for &flag in flags {
        if !is_long_flag(flag) && !is_short_flag(flag) {
            return Err(Error::InvalidArgument(format!(
                "'{}' is not a valid flag; expected '-x' or '--name'",
                flag
            )));
        }
        // Inline values split at the first '='.
        if flag.contains('=') {
            return Err(Error::InvalidArgument(format!(
                "'{}' is not a valid flag; flags may not contain '='",
                flag
            )));
        }
        if HELP_FLAGS.contains(&flag) {
            return Err(Error::InvalidArgument(format!(
                "'{}' is reserved for requesting help",
                flag
            )));
        }
        validated.push(flag.to_owned());
    }
    Ok(validated)
}

/// Derive the logical name for an argument from its flags: the first long
/// flag if there is one, otherwise the first short flag, with leading dashes
/// stripped and inner dashes replaced by underscores.
fn name_from_flags(flags: &[String]) -> String {
    let flag = flags
        .iter()
        .find(|f| is_long_flag(f))
        .or_else(|| flags.first())
        .map(|f| f.trim_start_matches('-'))
        .unwrap_or("");
    flag.replace('-', "_")
}

impl Spec {
    /// Constructs a Spec which describes a positional argument. Positional
    /// arguments are always mandatory, and are filled in the order in which
    /// they are added to a Specs structure.
    pub fn positional(name: &str, help: &str) -> Result<Spec> {
        if name.is_empty() || name.starts_with('-') {
            return Err(Error::InvalidArgument(format!(
                "'{}' is not a valid positional argument name",
                name
            )));
        }

        Ok(Spec {
            name: name.to_owned(),
            help: help.to_owned(),
            flags: vec![],
            flag_type: Type::Positional,
        })
    }

    /// Constructs a Spec which describes an optional argument taking a value.
    /// If no default value is given, the argument resolves to
    /// Value::Absent when it is omitted. A default must have the same type
    /// as the argument itself.
    pub fn named(
        flags: &[&str],
        value_type: ValueType,
        default_value: Option<Value>,
        help: &str,
    ) -> Result<Spec> {
        if value_type == ValueType::Boolean {
            return Err(Error::InvalidArgument(
                "boolean arguments take no value; use Spec::boolean instead".to_owned(),
            ));
        }
        let flags = validate_flags(flags)?;

        let default_value = default_value.unwrap_or(Value::Absent(value_type));
        if default_value.value_type() != value_type {
            return Err(Error::InvalidArgument(format!(
                "default value {} for '{}' is not of type {}",
                default_value,
                flags.join("/"),
                value_type
            )));
        }

        Ok(Spec {
            name: name_from_flags(&flags),
            help: help.to_owned(),
            flags: flags,
            flag_type: Type::Named {
                value_type: value_type,
                default_value: default_value,
            },
        })
    }

    /// Constructs a Spec which describes a boolean switch. It is true if any
    /// of its flags appear on the command line, and false otherwise.
    pub fn boolean(flags: &[&str], help: &str) -> Result<Spec> {
        let flags = validate_flags(flags)?;
        Ok(Spec {
            name: name_from_flags(&flags),
            help: help.to_owned(),
            flags: flags,
            flag_type: Type::Boolean,
        })
    }

    /// Returns true if this Spec describes a boolean switch, which does not
    /// consume a value token during parsing.
    pub(crate) fn is_boolean(&self) -> bool {
        match self.flag_type {
            Type::Boolean => true,
            _ => false,
        }
    }

    /// Returns true if this Spec describes a positional argument.
    pub(crate) fn is_positional(&self) -> bool {
        match self.flag_type {
            Type::Positional => true,
            _ => false,
        }
    }

    /// Returns true if this Spec describes an argument identified by flags.
    /// This is equivalent to !is_positional().
    pub(crate) fn is_named(&self) -> bool {
        !self.is_positional()
    }

    /// Returns this argument's logical name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human-readable help text for this argument.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns the flag strings identifying this argument. This is empty for
    /// positional arguments.
    pub fn get_flags(&self) -> &[String] {
        self.flags.as_slice()
    }

    /// Returns the type of value this argument resolves to.
    pub fn get_value_type(&self) -> ValueType {
        match self.flag_type {
            Type::Positional => ValueType::String,
            Type::Named { value_type, .. } => value_type,
            Type::Boolean => ValueType::Boolean,
        }
    }

    pub(crate) fn get_flag_type(&self) -> &Type {
        &self.flag_type
    }

    /// Returns the value this argument takes if it isn't given on the
    /// command line. Positional arguments have no default, since they are
    /// mandatory.
    pub(crate) fn get_default_value(&self) -> Option<Value> {
        match self.flag_type {
            Type::Positional => None,
            Type::Named {
                ref default_value, ..
            } => Some(default_value.clone()),
            Type::Boolean => Some(Value::Boolean(false)),
        }
    }

    /// The placeholder shown for this argument's value in usage and help
    /// output, e.g. "FIRST" for "--first".
    pub(crate) fn get_metavar(&self) -> String {
        self.name.to_uppercase()
    }

    /// All of this argument's flags joined for display, e.g. "-f/--first".
    /// For positionals this is just the name.
    pub(crate) fn get_display_flags(&self) -> String {
        match self.is_positional() {
            true => self.name.clone(),
            false => self.flags.join("/"),
        }
    }

    /// The flag shown for this argument in the one-line usage summary: its
    /// first short flag if it has one, otherwise its first flag.
    pub(crate) fn get_usage_flag(&self) -> &str {
        self.flags
            .iter()
            .find(|f| is_short_flag(f))
            .or_else(|| self.flags.first())
            .map_or(self.name.as_str(), |f| f.as_str())
    }
}

/// Specs is the complete, ordered list of arguments a program accepts. Once
/// built it is immutable; parsing only ever reads from it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Specs {
    specs: Vec<Spec>,
}

impl Specs {
    /// Construct a new Specs structure from the given complete list of Spec
    /// structures.
    ///
    /// This returns an error if the Spec structures, taken together, are
    /// invalid: every name must be unique, and every flag must identify
    /// exactly one argument.
    pub fn new(specs: Vec<Spec>) -> Result<Specs> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut flags: HashSet<&str> = HashSet::new();
        for spec in &specs {
            if !names.insert(spec.get_name()) {
                return Err(Error::InvalidArgument(format!(
                    "argument name '{}' is declared more than once",
                    spec.get_name()
                )));
            }
            for flag in spec.get_flags() {
                if !flags.insert(flag.as_str()) {
                    return Err(Error::InvalidArgument(format!(
                        "flag '{}' is declared more than once",
                        flag
                    )));
                }
            }
        }

        Ok(Specs { specs: specs })
    }

    /// Returns an Iterator over the Spec structures this Specs contains, in
    /// declaration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Spec> {
        self.specs.iter()
    }

    /// Returns an Iterator over just the positional arguments, in the order
    /// they are expected on the command line.
    pub fn positionals(&self) -> impl Iterator<Item = &Spec> {
        self.specs.iter().filter(|s| s.is_positional())
    }

    /// Returns an Iterator over just the flag-identified arguments.
    pub fn named(&self) -> impl Iterator<Item = &Spec> {
        self.specs.iter().filter(|s| s.is_named())
    }

    /// Locate the argument identified by the given flag string (e.g. "-f" or
    /// "--first"), if any.
    pub fn find_named_spec(&self, flag: &str) -> Option<&Spec> {
        self.named()
            .find(|s| s.get_flags().iter().any(|f| f == flag))
    }
}

/// SpecsBuilder accumulates argument declarations in order, and then
/// validates them all at once in build(). The first invalid declaration is
/// remembered and reported from build(), so declarations can be chained.
#[derive(Debug, Default)]
pub struct SpecsBuilder {
    specs: Vec<Spec>,
    error: Option<Error>,
}

impl SpecsBuilder {
    /// Start a new, empty schema.
    pub fn new() -> Self {
        SpecsBuilder {
            specs: vec![],
            error: None,
        }
    }

    fn push(mut self, spec: Result<Spec>) -> Self {
        if self.error.is_none() {
            match spec {
                Ok(spec) => self.specs.push(spec),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Declare a mandatory positional argument.
    pub fn declare_positional(self, name: &str, help: &str) -> Self {
        self.push(Spec::positional(name, help))
    }

    /// Declare an optional argument identified by the given flags.
    pub fn declare_optional(
        self,
        flags: &[&str],
        value_type: ValueType,
        default_value: Option<Value>,
        help: &str,
    ) -> Self {
        self.push(Spec::named(flags, value_type, default_value, help))
    }

    /// Declare a boolean switch identified by the given flags.
    pub fn declare_flag(self, flags: &[&str], help: &str) -> Self {
        self.push(Spec::boolean(flags, help))
    }

    /// Finish the schema, returning the first declaration error (if any).
    pub fn build(self) -> Result<Specs> {
        match self.error {
            Some(e) => Err(e),
            None => Specs::new(self.specs),
        }
    }
}
