use super::*;

#[test]
fn can_skip_empty_lines_and_count_them() {
    let mut reader = LineReader::new(BufReader::new("\n first  \n\n  \nsecond\n".as_bytes()));

    assert_eq!(reader.next_line().ok().flatten().map(|(line, text)| (line, text.to_string())), Some((2, "first".to_string())));
    assert_eq!(reader.next_line().ok().flatten().map(|(line, text)| (line, text.to_string())), Some((5, "second".to_string())));
    assert_eq!(reader.next_line().ok().flatten().map(|(line, text)| (line, text.to_string())), None);
}

parameterized_test! {can_parse_value, (token, expected), {
    can_parse_value_impl(token, expected);
}}

can_parse_value! {
    case_01_valid: (Some("42"), Ok(42)),
    case_02_missing: (None, Err("line 3: demand is missing".to_string())),
    case_03_invalid: (Some("4x"), Err("line 3: cannot parse demand from '4x': invalid digit found in string".to_string())),
}

fn can_parse_value_impl(token: Option<&str>, expected: Result<i32, String>) {
    let result = parse_value::<i32>(token, "demand", 3).map_err(|err| err.to_string());

    assert_eq!(result, expected);
}

#[test]
fn can_detect_unexpected_tokens() {
    assert_eq!(expect_end("".split_whitespace(), 1), Ok(()));
    assert_eq!(expect_end("1 2".split_whitespace(), 7), Err("line 7: unexpected token '1'".into()));
}
