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
use crate::flags::help;
use crate::flags::spec::{Spec, Specs, HELP_FLAGS};
use crate::flags::value::{coerce, Value, Values};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Outcome is what a successful pass over the command-line arguments
/// produces. Asking for help is not an error, but it also doesn't produce
/// any values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Every argument was resolved.
    Parsed(Values),
    /// "-h" or "--help" appeared; the caller should print help and exit
    /// successfully.
    Help,
}

/// Returns true if the given token should be looked up as a flag. A lone "-"
/// is conventionally a positional value (stdin / stdout), not a flag.
fn is_flag_token(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

/// Split a flag token into the flag itself and an inline value, if it was
/// passed as "--name=value". Only long flags can carry an inline value.
fn split_inline_value(arg: &str) -> (&str, Option<&str>) {
    if arg.starts_with("--") {
        if let Some(eq_idx) = arg.find('=') {
            return (&arg[..eq_idx], Some(&arg[eq_idx + 1..]));
        }
    }
    (arg, None)
}

/// Parser binds a program name to the Specs it accepts. The program name is
/// only used for usage and help output.
#[derive(Clone, Debug)]
pub struct Parser {
    program: String,
    specs: Specs,
}

impl Parser {
    /// Construct a new Parser for the given program and argument schema.
    pub fn new(program: &str, specs: Specs) -> Self {
        Parser {
            program: program.to_owned(),
            specs: specs,
        }
    }

    /// Returns the program name shown in usage and help output.
    pub fn get_program(&self) -> &str {
        self.program.as_str()
    }

    /// Returns the schema this Parser accepts.
    pub fn get_specs(&self) -> &Specs {
        &self.specs
    }

    /// The one-line usage summary for this program.
    pub fn usage(&self) -> String {
        help::usage(&self.program, &self.specs)
    }

    /// The full help message for this program.
    pub fn help(&self) -> String {
        help::help(&self.program, &self.specs)
    }

    /// Parse the given command-line arguments (not including the program
    /// name itself).
    ///
    /// Tokens are scanned left to right. A token matching a declared flag
    /// consumes the token after it as its value (unless it is a boolean
    /// switch), even if that value itself looks like a flag. Any other token
    /// fills the next unfilled positional argument. If an optional argument
    /// appears more than once, the last occurrence wins.
    ///
    /// Nothing is returned on failure except the error: either every
    /// argument is resolved, or none are.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> ValueResult<Outcome> {
        let mut positionals = self.specs.positionals();
        let mut raw_values: HashMap<&str, Option<String>> = HashMap::new();
        let mut help_requested = false;

        let mut args = args.iter().map(|a| a.as_ref());
        while let Some(arg) = args.next() {
            if !is_flag_token(arg) {
                let spec = positionals
                    .next()
                    .ok_or_else(|| ValueError::UnexpectedArgument(arg.to_owned()))?;
                trace!("positional '{}' = '{}'", spec.get_name(), arg);
                raw_values.insert(spec.get_name(), Some(arg.to_owned()));
                continue;
            }

            let (flag, inline_value) = split_inline_value(arg);
            if HELP_FLAGS.contains(&flag) {
                if let Some(v) = inline_value {
                    return Err(ValueError::UnexpectedValue {
                        argument: HELP_FLAGS.join("/"),
                        value: v.to_owned(),
                    });
                }
                trace!("help requested via '{}'", arg);
                help_requested = true;
                continue;
            }

            let spec: &Spec = self
                .specs
                .find_named_spec(flag)
                .ok_or_else(|| ValueError::UnrecognizedArgument(arg.to_owned()))?;

            let value: Option<String> = if spec.is_boolean() {
                if let Some(v) = inline_value {
                    return Err(ValueError::UnexpectedValue {
                        argument: spec.get_display_flags(),
                        value: v.to_owned(),
                    });
                }
                None
            } else {
                match inline_value {
                    Some(v) => Some(v.to_owned()),
                    None => Some(
                        args.next()
                            .ok_or_else(|| ValueError::MissingValue(spec.get_display_flags()))?
                            .to_owned(),
                    ),
                }
            };
            trace!("flag '{}' ({}) = {:?}", flag, spec.get_name(), value);
            raw_values.insert(spec.get_name(), value);
        }

        if help_requested {
            debug!("help requested for '{}'", self.program);
            return Ok(Outcome::Help);
        }

        let missing: Vec<String> = positionals.map(|s| s.get_name().to_owned()).collect();
        if !missing.is_empty() {
            return Err(ValueError::MissingArgument(missing));
        }

        let mut values: HashMap<String, Value> = HashMap::new();
        let mut filled: HashSet<String> = HashSet::new();
        for spec in self.specs.iter() {
            let name = spec.get_name().to_owned();
            let value = match raw_values.remove(spec.get_name()) {
                Some(raw) => {
                    filled.insert(name.clone());
                    coerce(spec, raw)?
                }
                None => match spec.get_default_value() {
                    Some(default_value) => default_value,
                    // Every positional was filled above.
                    None => continue,
                },
            };
            values.insert(name, value);
        }

        debug!(
            "parsed {} arguments ({} given explicitly)",
            values.len(),
            filled.len()
        );
        Ok(Outcome::Parsed(Values::new(values, filled)))
    }
}
