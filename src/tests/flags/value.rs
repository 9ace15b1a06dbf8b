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

#[test]
fn test_value_types() {
    assert_eq!(ValueType::Integer, Value::Integer(3).value_type());
    assert_eq!(ValueType::String, Value::String("x".to_owned()).value_type());
    assert_eq!(ValueType::Boolean, Value::Boolean(true).value_type());
    assert_eq!(ValueType::Integer, Value::Absent(ValueType::Integer).value_type());
    assert!(Value::Absent(ValueType::String).is_absent());
    assert!(!Value::String(String::new()).is_absent());
}

#[test]
fn test_typed_accessors() {
    let parser = build_test_parser();
    let values = parse_ok(&parser, &["a", "b", "c", "-t", "9"]);

    assert_eq!(Some(9), values.get_integer("t"));
    assert_eq!(None, values.get_str("t"));
    assert_eq!(None, values.get_integer("fourth"));
    assert_eq!(None, values.get_integer("input"));
    assert_eq!(None, values.get_str("nonexistent"));
    assert!(!values.get_boolean("first"));

    assert!(values.contains_key("fourth"));
    assert!(!values.contains_key("nonexistent"));
    assert_eq!(7, values.iter().count());
}

#[test]
fn test_canonical_args() {
    let parser = build_test_parser();
    let values = parse_ok(&parser, &["--second=x", "a", "-f", "+05", "b", "c"]);
    assert_eq!(
        vec!["a", "b", "c", "-f", "5", "-s", "x"],
        values.to_args(parser.get_specs())
    );

    let values = parse_ok(&parser, &["a", "b", "c"]);
    assert_eq!(vec!["a", "b", "c"], values.to_args(parser.get_specs()));
}

#[test]
fn test_canonical_round_trip() {
    let parser = Parser::new("exename", build_test_specs(true));
    for args in &[
        vec!["a", "b", "c"],
        vec!["-f", "5", "a", "b", "c"],
        vec!["-f", "1", "-f", "2", "a", "b", "c"],
        vec!["-", "--second", "-f", "b", "c", "--mark"],
        vec!["a", "-m", "b", "--fourth=-3", "c", "-t", "0"],
        vec!["-s", "", "a", "b", "c", "-s", "--help"],
    ] {
        let values = parse_ok(&parser, args);
        let canonical = values.to_args(parser.get_specs());
        let canonical: Vec<&str> = canonical.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            values,
            parse_ok(&parser, &canonical),
            "{:?} -> {:?}",
            args,
            canonical
        );
    }
}

#[test]
fn test_print_values() {
    let parser = build_test_parser();
    let values = parse_ok(&parser, &["a", "b", "c", "-s", "x y", "--fourth", "-4"]);
    let mut out: Vec<u8> = vec![];
    print_values(&mut out, parser.get_specs(), &values).unwrap();
    assert_eq!(
        concat!(
            "input: 'a'\n",
            "output: 'b'\n",
            "temp: 'c'\n",
            "first: 1\n",
            "second: 'x y'\n",
            "t: None\n",
            "fourth: -4\n",
        ),
        String::from_utf8(out).unwrap()
    );
}

#[test]
fn test_print_values_boolean_switch() {
    let parser = Parser::new("exename", build_test_specs(true));
    let values = parse_ok(&parser, &["-m", "a", "b", "c"]);
    let mut out: Vec<u8> = vec![];
    print_values(&mut out, parser.get_specs(), &values).unwrap();
    assert!(String::from_utf8(out).unwrap().ends_with("fourth: None\nmark: true\n"));
}
