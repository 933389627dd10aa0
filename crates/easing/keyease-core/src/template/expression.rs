//! Numeric expression literals.
//!
//! Text bound as [`Literal::Expression`](super::Literal::Expression) must be
//! arithmetic the host can reduce to a finite number: number literals,
//! dotted names (`Math.PI`), calls (`Math.pow(2, 3)`), unary `+`/`-`,
//! binary `+ - * / %` and parentheses, on a single line.

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit0, digit1, one_of, satisfy, space0},
    combinator::{all_consuming, opt, recognize, value, verify},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

type ParseResult<'a, O> = IResult<&'a str, O>;

/// Globals that never evaluate to a finite number.
const NON_NUMERIC_NAMES: &[&str] = &["NaN", "Infinity", "undefined", "null", "true", "false", "this"];

fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> ParseResult<'a, O>,
) -> impl FnMut(&'a str) -> ParseResult<'a, O> {
    delimited(space0, inner, space0)
}

fn number(input: &str) -> ParseResult<'_, &str> {
    verify(
        recognize(pair(
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        )),
        |text: &str| text.parse::<f64>().map_or(false, f64::is_finite),
    )(input)
}

fn identifier(input: &str) -> ParseResult<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_' || c == '$'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    ))(input)
}

fn path(input: &str) -> ParseResult<'_, &str> {
    verify(
        recognize(pair(identifier, many0(pair(char('.'), identifier)))),
        |text: &str| text.split('.').all(|seg| !NON_NUMERIC_NAMES.contains(&seg)),
    )(input)
}

fn call_args(input: &str) -> ParseResult<'_, ()> {
    value(
        (),
        delimited(
            char('('),
            separated_list0(char(','), expr),
            preceded(space0, char(')')),
        ),
    )(input)
}

fn atom(input: &str) -> ParseResult<'_, ()> {
    alt((
        value((), number),
        value((), pair(path, opt(preceded(space0, call_args)))),
        value((), delimited(char('('), expr, char(')'))),
    ))(input)
}

fn unary(input: &str) -> ParseResult<'_, ()> {
    preceded(opt(ws(one_of("+-"))), atom)(input)
}

fn expr(input: &str) -> ParseResult<'_, ()> {
    value(
        (),
        pair(ws(unary), many0(pair(one_of("+-*/%"), ws(unary)))),
    )(input)
}

/// Whether `text` is arithmetic over finite numbers and named values.
pub fn is_numeric_expression(text: &str) -> bool {
    // `--`/`++` would lex as update operators in the host
    !text.contains("--") && !text.contains("++") && all_consuming(expr)(text).is_ok()
}
