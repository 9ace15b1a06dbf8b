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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! clargs parses a program's command-line arguments against a statically
//! declared schema of positional and optional arguments, producing typed
//! values or an argparse-style usage error.

/// error defines the crate-level error type, which aggregates schema
/// construction errors, I/O errors, and errors from our dependencies.
pub mod error;
/// flags defines the argument schema, the parser, and the help / usage
/// rendering built on top of it.
pub mod flags;
/// logging provides a Logger implementation suitable for command-line
/// applications.
#[cfg(feature = "logging")]
pub mod logging;
