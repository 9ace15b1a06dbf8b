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

use crate::flags::spec::ValueType;
use thiserror::Error;

/// ValueError describes everything that can be wrong with the arguments a
/// user passed on the command line. Every variant carries the argument (or
/// raw token) involved, so the message can point at it.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValueError {
    /// One or more positional arguments were never filled. The names are
    /// listed in declaration order, so the first one is the first positional
    /// which is missing.
    #[error("the following arguments are required: {}", .0.join(", "))]
    MissingArgument(Vec<String>),
    /// A flag which takes a value was the last token on the command line.
    #[error("argument {0}: expected one argument")]
    MissingValue(String),
    /// A value destined for a typed slot could not be converted.
    #[error("argument {argument}: invalid {value_type} value: '{value}'")]
    TypeCoercion {
        /// The flags identifying the argument, e.g. "-f/--first".
        argument: String,
        /// The type the value was supposed to have.
        value_type: ValueType,
        /// The offending literal.
        value: String,
    },
    /// A positional token was found after every positional was filled.
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    /// An inline value ("--flag=value") was given to a boolean flag.
    #[error("argument {argument}: ignored explicit argument '{value}'")]
    UnexpectedValue {
        /// The flags identifying the argument.
        argument: String,
        /// The value which was given.
        value: String,
    },
    /// A token looked like a flag, but no such flag was declared.
    #[error("unrecognized arguments: {0}")]
    UnrecognizedArgument(String),
}

/// A Result type for parsing command-line values.
pub type ValueResult<T> = Result<T, ValueError>;
