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
use crate::flags::error::ValueError;
use crate::flags::spec::{Spec, Specs, Type};
use std::io::Write;

/// Indentation before each argument in the help listing.
const PADDING: usize = 2;
/// The column at which help text starts.
const FIRST_COLUMN_SIZE: usize = 24;

const HELP_INVOCATION: &str = "-h, --help";
const HELP_TEXT: &str = "show this help message and exit";

fn usage_entry(spec: &Spec) -> String {
    match spec.is_boolean() {
        true => format!("[{}]", spec.get_usage_flag()),
        false => format!("[{} {}]", spec.get_usage_flag(), spec.get_metavar()),
    }
}

/// The one-line usage summary, without a trailing newline.
pub(crate) fn usage(program: &str, specs: &Specs) -> String {
    let mut line = format!("usage: {} [-h]", program);
    for spec in specs.named() {
        line.push(' ');
        line.push_str(&usage_entry(spec));
    }
    for spec in specs.positionals() {
        line.push(' ');
        line.push_str(spec.get_name());
    }
    line
}

/// How an argument is written in the left column of the help listing, e.g.
/// "-f FIRST, --first FIRST".
fn invocation(spec: &Spec) -> String {
    if spec.is_positional() {
        return spec.get_name().to_owned();
    }
    spec.get_flags()
        .iter()
        .map(|f| match spec.is_boolean() {
            true => f.clone(),
            false => format!("{} {}", f, spec.get_metavar()),
        })
        .collect::<Vec<String>>()
        .join(", ")
}

/// The bracketed type / default summary appended to an optional argument's
/// help text.
fn annotation(spec: &Spec) -> Option<String> {
    match spec.get_flag_type() {
        Type::Positional => None,
        Type::Boolean => Some("[flag]".to_owned()),
        Type::Named {
            value_type,
            default_value,
        } => Some(match default_value.is_absent() {
            true => format!("[{}]", value_type),
            false => format!("[{}, default: {}]", value_type, default_value),
        }),
    }
}

fn append_entry(out: &mut String, invocation: &str, help: &str) {
    let mut line = format!("{:width$}{}", "", invocation, width = PADDING);
    if line.len() >= FIRST_COLUMN_SIZE && !help.is_empty() {
        out.push_str(&line);
        out.push('\n');
        line.clear();
    }
    line.push_str(&format!(
        "{:width$}{}",
        "",
        help,
        width = FIRST_COLUMN_SIZE.saturating_sub(line.len())
    ));
    out.push_str(line.trim_end());
    out.push('\n');
}

/// The full help message: usage, then one section for positional arguments
/// and one for optional arguments, each followed by a blank line.
pub(crate) fn help(program: &str, specs: &Specs) -> String {
    let mut out = usage(program, specs);
    out.push_str("\n\n");

    if specs.positionals().next().is_some() {
        out.push_str("positional arguments:\n");
        for spec in specs.positionals() {
            append_entry(&mut out, &invocation(spec), spec.get_help());
        }
        out.push('\n');
    }

    out.push_str("optional arguments:\n");
    append_entry(&mut out, HELP_INVOCATION, HELP_TEXT);
    for spec in specs.named() {
        let help = match annotation(spec) {
            None => spec.get_help().to_owned(),
            Some(a) if spec.get_help().is_empty() => a,
            Some(a) => format!("{} {}", spec.get_help(), a),
        };
        append_entry(&mut out, &invocation(spec), &help);
    }
    out.push('\n');

    out
}

/// Print the help message to the given writer.
pub(crate) fn print_help<W: Write>(f: &mut W, program: &str, specs: &Specs) -> Result<()> {
    f.write_all(help(program, specs).as_bytes())?;
    Ok(())
}

/// Print the usage summary followed by a description of the given error, the
/// way argparse reports bad arguments.
pub(crate) fn print_error<W: Write>(
    f: &mut W,
    program: &str,
    specs: &Specs,
    error: &ValueError,
) -> Result<()> {
    f.write_fmt(format_args!("{}\n", usage(program, specs)))?;
    f.write_fmt(format_args!("{}: error: {}\n", program, error))?;
    Ok(())
}
