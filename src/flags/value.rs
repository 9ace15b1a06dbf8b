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

use crate::flags::error::{ValueError, ValueResult};
use crate::flags::spec::{Spec, Specs, ValueType};
use log::warn;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::Write;

/// A Value is the typed value associated with a given argument after
/// parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A signed integer value, from an argument declared as ValueType::Integer.
    Integer(i64),
    /// A raw string value. Positional arguments always have this type.
    String(String),
    /// The state of a boolean switch.
    Boolean(bool),
    /// No value was supplied, and the argument has no default. The sentinel
    /// still records which type of value would have been there.
    Absent(ValueType),
}

impl Value {
    /// Returns the type of this value. For Value::Absent, this is the type of
    /// the slot which is empty.
    pub fn value_type(&self) -> ValueType {
        match *self {
            Value::Integer(_) => ValueType::Integer,
            Value::String(_) => ValueType::String,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Absent(t) => t,
        }
    }

    /// Returns true if this is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        match *self {
            Value::Absent(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::String(ref s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Absent(_) => f.write_str("None"),
        }
    }
}

/// Convert the raw string collected for the given argument into its typed
/// Value. Boolean switches don't collect a string at all.
pub(crate) fn coerce(spec: &Spec, raw: Option<String>) -> ValueResult<Value> {
    let raw = match raw {
        None => return Ok(Value::Boolean(true)),
        Some(raw) => raw,
    };

    match spec.get_value_type() {
        ValueType::Integer => match raw.parse::<i64>() {
            Ok(i) => Ok(Value::Integer(i)),
            Err(_) => Err(ValueError::TypeCoercion {
                argument: spec.get_display_flags(),
                value_type: ValueType::Integer,
                value: raw,
            }),
        },
        ValueType::String => Ok(Value::String(raw)),
        ValueType::Boolean => Err(ValueError::UnexpectedValue {
            argument: spec.get_display_flags(),
            value: raw,
        }),
    }
}

/// Values contains all of the parsed command-line argument values, or the
/// default values for optional arguments which weren't given. Every
/// argument in the Specs it was parsed with has an entry.
///
/// A Values is only ever constructed by a successful parse, and is not
/// modified afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Values {
    values: HashMap<String, Value>,
    /// The names of the arguments which were explicitly given on the command
    /// line, as opposed to taking their default.
    filled: HashSet<String>,
}

impl Values {
    pub(crate) fn new(values: HashMap<String, Value>, filled: HashSet<String>) -> Self {
        Values {
            values: values,
            filled: filled,
        }
    }

    /// Returns whether or not there exists a Value for the given argument.
    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the Value of the given argument, or None if no such argument
    /// was declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns true if the given argument appeared on the command line,
    /// rather than taking its default value.
    pub fn is_filled(&self, name: &str) -> bool {
        self.filled.contains(name)
    }

    /// Returns the given argument's string value. None is returned if the
    /// argument is absent, undeclared, or not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the given argument's integer value. None is returned if the
    /// argument is absent, undeclared, or not an integer.
    pub fn get_integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(Value::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Returns the state of the given boolean switch. Anything other than a
    /// switch which was turned on is false.
    pub fn get_boolean(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(Value::Boolean(b)) => *b,
            _ => false,
        }
    }

    /// Returns an Iterator over every (name, value) pair, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize these values back into the shortest token list which parses
    /// (with the same Specs) to an equal Values: every positional in order,
    /// followed by each optional argument which was explicitly given.
    pub fn to_args(&self, specs: &Specs) -> Vec<String> {
        let mut args: Vec<String> = specs
            .positionals()
            .filter_map(|s| self.values.get(s.get_name()))
            .map(|v| v.to_string())
            .collect();

        for spec in specs.named().filter(|s| self.is_filled(s.get_name())) {
            let flag = match spec.get_flags().first() {
                Some(flag) => flag.clone(),
                None => continue,
            };
            args.push(flag);
            if !spec.is_boolean() {
                if let Some(value) = self.values.get(spec.get_name()) {
                    args.push(value.to_string());
                }
            }
        }

        args
    }
}

/// Print one "name: value" line per argument to the given writer, in
/// declaration order. String values are quoted; absent values print as None.
pub fn print_values<W: Write>(
    f: &mut W,
    specs: &Specs,
    values: &Values,
) -> crate::error::Result<()> {
    for spec in specs.iter() {
        match values.get(spec.get_name()) {
            Some(Value::String(s)) => writeln!(f, "{}: '{}'", spec.get_name(), s)?,
            Some(v) => writeln!(f, "{}: {}", spec.get_name(), v)?,
            None => warn!("no value for '{}'", spec.get_name()),
        }
    }
    f.flush()?;
    Ok(())
}
