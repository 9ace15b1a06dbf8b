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
use crate::flags::parse::Parser;
use crate::flags::parse_and_execute::{parse_and_execute, CommandResult, Completion};
use crate::flags::value::Values;
use std::env;
use std::fmt::{Debug, Display};
use std::path::Path;
use std::process;

/// The integer which is returned from main() if the program exits
/// successfully, including after printing help.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error other than a usage error.
pub const EXIT_FAILURE: i32 = 1;
/// The integer which is returned from main() if the command-line arguments
/// were invalid. This matches what argparse-based programs return.
pub const EXIT_USAGE: i32 = 2;

/// Returns the current program's parameters (accessed essentialy via
/// `std::env::args`) collected into a Vec. The 0'th parameter (the executable)
/// is omitted.
pub fn get_program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

/// Returns the name this program was invoked as: the file name of the 0'th
/// parameter. If that isn't available for some reason, the given fallback is
/// returned instead.
pub fn get_program_name(fallback: &str) -> String {
    env::args()
        .next()
        .as_ref()
        .and_then(|p| Path::new(p).file_name())
        .and_then(|n| n.to_str())
        .unwrap_or(fallback)
        .to_owned()
}

/// This is a utility function, which handles the given result returned by
/// parse_and_execute. The *outer* Result being an Err means that something
/// went wrong internally. The *inner* Result, on the other hand, is the actual
/// Result returned by the caller-provided callback.
///
/// Errors which haven't already been reported are printed to standard error.
/// In any case, the appropriate exit code is returned.
pub(crate) fn handle_result<E: Display + Debug>(r: Result<Completion<E>>) -> i32 {
    match r {
        Ok(Completion::Executed(Ok(_))) => EXIT_SUCCESS,
        Ok(Completion::Help) => EXIT_SUCCESS,
        // The usage error was already printed.
        Ok(Completion::UsageError) => EXIT_USAGE,
        Ok(Completion::Executed(Err(e))) => {
            eprintln!(
                "{}",
                match cfg!(debug_assertions) {
                    false => e.to_string(),
                    true => format!("{:?}", e),
                }
            );
            EXIT_FAILURE
        }
        Err(e) => {
            eprintln!(
                "Error parsing command-line arguments: {}",
                match cfg!(debug_assertions) {
                    false => e.to_string(),
                    true => format!("{:?}", e),
                },
            );
            EXIT_FAILURE
        }
    }
}

/// Parses command-line parameters and calls the given callback with the
/// resulting values.
///
/// This function exits this process with an appropriate exit code. Like
/// `std::process::exit`, because this function never returns and it terminates
/// the process, no destructors on the current stack or any other thread's
/// stack will be run. The caller should ensure that this function is called
/// from the only thread, and that any destructors which need to be run are in
/// the stack of the callback.
pub fn main_impl<E, F>(parser: &Parser, callback: F) -> !
where
    E: Display + Debug,
    F: FnOnce(Values) -> CommandResult<E>,
{
    process::exit(handle_result(parse_and_execute(
        parser,
        &get_program_parameters(),
        callback,
        &mut ::std::io::stdout(),
        &mut ::std::io::stderr(),
    )));
}
