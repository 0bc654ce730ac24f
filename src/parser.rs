use std::str::FromStr;

use nom::branch::alt;
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, eof, map_res};
use nom::{Finish, IResult, Parser};

/// One line of input, with its terminator already stripped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Line {
    Number(u64),
    Separator,
}

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

fn number(input: &str) -> IResult<&str, Line> {
    base10_numeric.map(Line::Number).parse(input)
}

// Only a line with nothing on it separates groups. Whitespace doesn't count.
fn separator(input: &str) -> IResult<&str, Line> {
    eof.map(|_| Line::Separator).parse(input)
}

fn line(input: &str) -> IResult<&str, Line> {
    all_consuming(alt((number, separator))).parse(input)
}

pub fn parse_line(input: &str) -> Result<Line, nom::error::Error<String>> {
    nom_parse_to_owned(line, input)
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// Lifetime hacks to make the `?` operator usable with nom results.
pub fn nom_parse_to_owned<I, O, P>(
    mut parser: P,
    input: &I,
) -> Result<O, nom::error::Error<I::Owned>>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
    P: for<'i> Parser<&'i I, O, nom::error::Error<&'i I>>,
{
    match parser.parse(input).finish() {
        Ok((_i, o)) => Ok(o),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse_line("0"), Ok(Line::Number(0)));
        assert_eq!(parse_line("1000"), Ok(Line::Number(1000)));
        assert_eq!(parse_line("007"), Ok(Line::Number(7)));
        assert_eq!(
            parse_line("18446744073709551615"),
            Ok(Line::Number(u64::MAX))
        );
    }

    #[test]
    fn test_separator() {
        assert_eq!(parse_line(""), Ok(Line::Separator));
    }

    #[test]
    fn test_rejects() {
        for bad in [" ", "\t", " 5", "5 ", "-3", "+3", "12a", "abc", "1.5"] {
            assert!(parse_line(bad).is_err(), "{:?} should not parse", bad);
        }

        // Too big for a u64.
        assert!(parse_line("18446744073709551616").is_err());
    }

    #[test]
    fn test_owned_error_keeps_remaining_input() {
        let e = parse_line("12a").unwrap_err();
        assert_eq!(e.input, "a");
    }
}
