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

use clargs::error::Result;
use clargs::flags::main_impl::{get_program_name, EXIT_FAILURE};
use clargs::flags::{main_impl, print_values, Parser, SpecsBuilder, Value, ValueType, Values};
use clargs::logging;
use log::debug;
use std::io;
use std::process;

fn build_parser(program: &str) -> Result<Parser> {
    let specs = SpecsBuilder::new()
        .declare_positional("input", "input file")
        .declare_positional("output", "output file")
        .declare_positional("temp", "")
        .declare_optional(
            &["-f", "--first"],
            ValueType::Integer,
            Some(Value::Integer(1)),
            "first int optional argument",
        )
        .declare_optional(
            &["-s", "--second"],
            ValueType::String,
            Some(Value::String("default".to_owned())),
            "second string optional argument",
        )
        .declare_optional(&["-t"], ValueType::Integer, None, "third int optional argument")
        .declare_optional(&["--fourth"], ValueType::Integer, None, "")
        .build()?;
    Ok(Parser::new(program, specs))
}

fn run(parser: &Parser, values: Values) -> Result<()> {
    let explicit = parser
        .get_specs()
        .iter()
        .filter(|s| values.is_filled(s.get_name()))
        .count();
    debug!("{} arguments given explicitly", explicit);

    print_values(&mut io::stdout(), parser.get_specs(), &values)
}

fn main() {
    let program = get_program_name("clargs");

    let logging_options = logging::OptionsBuilder::new().set_program(&program).build();
    if let Err(e) = logging_options.and_then(logging::try_init) {
        eprintln!("{}: failed to initialize logging: {}", program, e);
    }

    let parser = match build_parser(&program) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("{}: {}", program, e);
            process::exit(EXIT_FAILURE);
        }
    };

    main_impl(&parser, |values| run(&parser, values));
}
