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
use crate::flags::help;
use crate::flags::parse::{Outcome, Parser};
use crate::flags::value::Values;
use log::debug;
use std::io::Write;

/// An alias for Result, which has an arbitrary Error type. This is used to
/// denote the actual Result returned by the caller-provided callback which
/// consumes the parsed values.
///
/// Note that the Ok value accepted is just (); this library has no logic to
/// deal with application-specific success return values.
pub type CommandResult<E> = ::std::result::Result<(), E>;

/// Completion describes how a call to parse_and_execute finished, when it
/// didn't fail internally.
#[derive(Debug, Eq, PartialEq)]
pub enum Completion<E> {
    /// The arguments were valid, and the callback returned this result.
    Executed(CommandResult<E>),
    /// Help was requested, and has been printed.
    Help,
    /// The arguments were invalid. The usage error has been printed, and the
    /// callback was not called.
    UsageError,
}

/// This function parses the given program parameters, and calls the given
/// callback with the resulting values. Help output is written to `output`,
/// and usage errors are written to `error_output`.
///
/// The outer Result being an Err means that something went wrong internally,
/// e.g. writing help text failed. Invalid arguments are *not* an internal
/// error; they are reported to the user and Completion::UsageError is
/// returned.
pub fn parse_and_execute<E, F, O, W>(
    parser: &Parser,
    args: &[String],
    callback: F,
    output: &mut O,
    error_output: &mut W,
) -> Result<Completion<E>>
where
    F: FnOnce(Values) -> CommandResult<E>,
    O: Write,
    W: Write,
{
    match parser.parse(args) {
        Ok(Outcome::Parsed(values)) => Ok(Completion::Executed(callback(values))),
        Ok(Outcome::Help) => {
            help::print_help(output, parser.get_program(), parser.get_specs())?;
            output.flush()?;
            Ok(Completion::Help)
        }
        Err(e) => {
            debug!("rejecting command-line arguments: {:?}", e);
            help::print_error(error_output, parser.get_program(), parser.get_specs(), &e)?;
            error_output.flush()?;
            Ok(Completion::UsageError)
        }
    }
}
