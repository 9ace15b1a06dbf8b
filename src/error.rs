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

use thiserror::Error;

/// Error represents the errors which can come up outside of parsing the
/// user's arguments: building an invalid schema, failing to write output, or
/// failing to set up logging.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way. This is what a malformed schema declaration
    /// produces.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An I/O error, generally encountered while writing help or error output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// An error encountered while compiling a log filter's module regex.
    #[error("{0}")]
    Regex(#[from] regex::Error),
    /// An error encountered when attempting to set the global Logger
    /// implementation.
    #[error("{0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// A Result type which uses clargs' internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
