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

use super::{build_test_parser, build_test_specs, parse_ok};
use crate::flags::*;

fn parse_err(parser: &Parser, args: &[&str]) -> ValueError {
    match parser.parse(args) {
        Ok(outcome) => panic!("expected {:?} to fail, got {:?}", args, outcome),
        Err(e) => e,
    }
}

#[test]
fn test_only_positional_args() {
    let parser = build_test_parser();
    let values = parse_ok(&parser, &["a", "b", "c"]);

    assert_eq!(Some("a"), values.get_str("input"));
    assert_eq!(Some("b"), values.get_str("output"));
    assert_eq!(Some("c"), values.get_str("temp"));
    assert_eq!(Some(&Value::Integer(1)), values.get("first"));
    assert_eq!(Some(&Value::String("default".to_owned())), values.get("second"));
    assert_eq!(Some(&Value::Absent(ValueType::Integer)), values.get("t"));
    assert_eq!(Some(&Value::Absent(ValueType::Integer)), values.get("fourth"));

    assert!(values.is_filled("input"));
    assert!(!values.is_filled("first"));
    assert!(!values.is_filled("second"));
    assert!(!values.is_filled("t"));
}

#[test]
fn test_flags_interleaved_with_positionals() {
    let parser = build_test_parser();
    for args in &[
        vec!["-f", "5", "a", "b", "c"],
        vec!["a", "-f", "5", "b", "c"],
        vec!["a", "b", "-f", "5", "c"],
        vec!["a", "b", "c", "-f", "5"],
        vec!["a", "b", "c", "--first", "5"],
        vec!["a", "--first=5", "b", "c"],
    ] {
        let values = parse_ok(&parser, args);
        assert_eq!(Some(5), values.get_integer("first"), "{:?}", args);
        assert!(values.is_filled("first"));
        assert_eq!(Some("a"), values.get_str("input"));
        assert_eq!(Some("b"), values.get_str("output"));
        assert_eq!(Some("c"), values.get_str("temp"));
    }
}

#[test]
fn test_all_optionals() {
    let parser = build_test_parser();
    let values = parse_ok(
        &parser,
        &["a", "b", "c", "-f", "123", "-s", "value", "-t", "-7", "--fourth", "+4"],
    );
    assert_eq!(Some(123), values.get_integer("first"));
    assert_eq!(Some("value"), values.get_str("second"));
    assert_eq!(Some(-7), values.get_integer("t"));
    assert_eq!(Some(4), values.get_integer("fourth"));
}

#[test]
fn test_last_occurrence_wins() {
    let parser = build_test_parser();
    let values = parse_ok(&parser, &["-f", "1", "-f", "2", "a", "b", "c"]);
    assert_eq!(Some(2), values.get_integer("first"));

    let values = parse_ok(&parser, &["--second", "x", "a", "b", "c", "-s", "y"]);
    assert_eq!(Some("y"), values.get_str("second"));

    // Only the surviving occurrence is coerced.
    let values = parse_ok(&parser, &["-f", "x", "-f", "2", "a", "b", "c"]);
    assert_eq!(Some(2), values.get_integer("first"));
}

#[test]
fn test_flag_values_consumed_literally() {
    let parser = build_test_parser();
    let values = parse_ok(&parser, &["-s", "-f", "a", "b", "c"]);
    assert_eq!(Some("-f"), values.get_str("second"));
    assert_eq!(Some(1), values.get_integer("first"));

    let values = parse_ok(&parser, &["-s", "--help", "a", "b", "c"]);
    assert_eq!(Some("--help"), values.get_str("second"));
}

#[test]
fn test_dashed_args() {
    let parser = build_test_parser();
    let values = parse_ok(&parser, &["-", "b", "c", "--second", "-"]);
    assert_eq!(Some("-"), values.get_str("input"));
    assert_eq!(Some("-"), values.get_str("second"));
}

#[test]
fn test_boolean_switch() {
    let parser = Parser::new("exename", build_test_specs(true));

    let values = parse_ok(&parser, &["--mark", "a", "b", "c"]);
    assert!(values.get_boolean("mark"));
    assert!(values.is_filled("mark"));
    assert_eq!(Some("a"), values.get_str("input"));

    let values = parse_ok(&parser, &["a", "b", "c"]);
    assert!(!values.get_boolean("mark"));
    assert_eq!(Some(&Value::Boolean(false)), values.get("mark"));
    assert!(!values.is_filled("mark"));

    assert_eq!(
        ValueError::UnexpectedValue {
            argument: "--mark/-m".to_owned(),
            value: "yes".to_owned(),
        },
        parse_err(&parser, &["--mark=yes", "a", "b", "c"])
    );
}

#[test]
fn test_type_coercion_error() {
    let parser = build_test_parser();
    let err = parse_err(&parser, &["-f", "x", "a", "b", "c"]);
    assert_eq!(
        ValueError::TypeCoercion {
            argument: "-f/--first".to_owned(),
            value_type: ValueType::Integer,
            value: "x".to_owned(),
        },
        err
    );
    assert_eq!("argument -f/--first: invalid int value: 'x'", err.to_string());

    match parse_err(&parser, &["a", "b", "c", "--fourth", "4.5"]) {
        ValueError::TypeCoercion { argument, value, .. } => {
            assert_eq!("--fourth", argument);
            assert_eq!("4.5", value);
        }
        e => panic!("unexpected error {:?}", e),
    }
    match parse_err(&parser, &["a", "b", "c", "-t", " 3"]) {
        ValueError::TypeCoercion { .. } => {}
        e => panic!("unexpected error {:?}", e),
    }
}

#[test]
fn test_missing_positional() {
    let parser = build_test_parser();
    assert_eq!(
        ValueError::MissingArgument(vec!["temp".to_owned()]),
        parse_err(&parser, &["a", "b"])
    );
    let err = parse_err(&parser, &["-f", "2"]);
    assert_eq!(
        ValueError::MissingArgument(vec![
            "input".to_owned(),
            "output".to_owned(),
            "temp".to_owned()
        ]),
        err
    );
    assert_eq!(
        "the following arguments are required: input, output, temp",
        err.to_string()
    );
}

#[test]
fn test_unexpected_positional() {
    let parser = build_test_parser();
    assert_eq!(
        ValueError::UnexpectedArgument("d".to_owned()),
        parse_err(&parser, &["a", "b", "c", "d"])
    );
}

#[test]
fn test_unrecognized_flag() {
    let parser = build_test_parser();
    assert_eq!(
        ValueError::UnrecognizedArgument("--error".to_owned()),
        parse_err(&parser, &["--error"])
    );
    assert_eq!(
        ValueError::UnrecognizedArgument("--bogus=1".to_owned()),
        parse_err(&parser, &["a", "b", "c", "--bogus=1"])
    );
    // Negative numbers are only accepted as flag values.
    assert_eq!(
        ValueError::UnrecognizedArgument("-5".to_owned()),
        parse_err(&parser, &["a", "b", "-5"])
    );
    // There is no combined short flag syntax.
    assert_eq!(
        ValueError::UnrecognizedArgument("-f5".to_owned()),
        parse_err(&parser, &["-f5", "a", "b", "c"])
    );
}

#[test]
fn test_missing_flag_value() {
    let parser = build_test_parser();
    assert_eq!(
        ValueError::MissingValue("-s/--second".to_owned()),
        parse_err(&parser, &["a", "b", "c", "-s"])
    );
}

#[test]
fn test_help_requested() {
    let parser = build_test_parser();
    assert_eq!(Outcome::Help, parser.parse(&["--help"]).unwrap());
    assert_eq!(Outcome::Help, parser.parse(&["a", "-h"]).unwrap());
    // Help wins over errors which are only detected after the scan.
    assert_eq!(Outcome::Help, parser.parse(&["-f", "x", "-h"]).unwrap());
    // But not over errors which abort the scan before it is seen.
    assert_eq!(
        ValueError::UnrecognizedArgument("--error".to_owned()),
        parse_err(&parser, &["--error", "-h"])
    );
}

#[test]
fn test_help_with_inline_value() {
    let parser = build_test_parser();
    assert_eq!(
        ValueError::UnexpectedValue {
            argument: "-h/--help".to_owned(),
            value: "x".to_owned(),
        },
        parse_err(&parser, &["--help=x"])
    );
}

#[test]
fn test_only_optional_schema() {
    let specs = SpecsBuilder::new()
        .declare_optional(
            &["--first", "-f"],
            ValueType::Integer,
            Some(Value::Integer(1)),
            "",
        )
        .build()
        .unwrap();
    let parser = Parser::new("exename", specs);
    let no_args: [&str; 0] = [];
    let values = parse_ok(&parser, &no_args);
    assert_eq!(Some(1), values.get_integer("first"));
    assert!(!values.is_filled("first"));
    assert_eq!(
        ValueError::UnexpectedArgument("a".to_owned()),
        parse_err(&parser, &["a"])
    );
}

#[test]
fn test_parse_accepts_owned_strings() {
    let parser = build_test_parser();
    let args: Vec<String> = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    match parser.parse(&args).unwrap() {
        Outcome::Parsed(values) => assert_eq!(Some("c"), values.get_str("temp")),
        Outcome::Help => panic!("unexpected help request"),
    }
}
