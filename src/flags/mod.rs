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

/// error defines the errors a user's command-line arguments can produce.
pub mod error;
/// main_impl provides the glue between a Parser and a program's main().
pub mod main_impl;
/// parse implements the actual scan over command-line arguments.
pub mod parse;
/// parse_and_execute runs a callback with parsed values, reporting help and
/// usage errors along the way.
pub mod parse_and_execute;
/// spec defines how the arguments a program accepts are declared.
pub mod spec;
/// value defines the typed values produced by parsing.
pub mod value;

pub(crate) mod help;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::error::{ValueError, ValueResult};
pub use self::main_impl::main_impl;
pub use self::parse::{Outcome, Parser};
pub use self::parse_and_execute::{parse_and_execute, CommandResult, Completion};
pub use self::spec::{Spec, Specs, SpecsBuilder, ValueType};
pub use self::value::{print_values, Value, Values};
