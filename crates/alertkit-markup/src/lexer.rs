//! Inline token parsers.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{anychar, char, one_of},
    combinator::{map, verify},
    multi::fold_many1,
    sequence::{delimited, preceded, tuple},
    IResult,
};

/// Characters that may be escaped with a backslash.
pub const ESCAPABLE: &str = "\\*[]()";

/// An inline element of the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    Text(String),
    Bold(String),
    Link { label: String, url: &'a str },
}

/// Parse a backslash escape, yielding the escaped character.
pub fn escaped(input: &str) -> IResult<&str, char> {
    preceded(char('\\'), one_of(ESCAPABLE))(input)
}

/// Parse a span of text with no markup characters.
pub fn plain(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !matches!(c, '\\' | '*' | '['))(input)
}

/// Text inside a bold span; escapes are resolved, `*` ends the span.
fn bold_body(input: &str) -> IResult<&str, String> {
    fold_many1(
        alt((
            map(escaped, String::from),
            map(take_while1(|c: char| !matches!(c, '\\' | '*')), String::from),
            map(char('\\'), String::from),
        )),
        String::new,
        |mut acc, piece| {
            acc.push_str(&piece);
            acc
        },
    )(input)
}

/// Parse `**bold**`.
pub fn bold(input: &str) -> IResult<&str, String> {
    delimited(tag("**"), bold_body, tag("**"))(input)
}

fn link_label(input: &str) -> IResult<&str, String> {
    fold_many1(
        alt((
            map(escaped, String::from),
            map(take_while1(|c: char| !matches!(c, '\\' | ']')), String::from),
            map(char('\\'), String::from),
        )),
        String::new,
        |mut acc, piece| {
            acc.push_str(&piece);
            acc
        },
    )(input)
}

/// Parse `[label](url)`.
pub fn link(input: &str) -> IResult<&str, (String, &str)> {
    map(
        tuple((
            delimited(char('['), link_label, tag("](")),
            verify(take_while1(|c: char| c != ')'), |url: &str| !url.contains('\n')),
            char(')'),
        )),
        |(label, url, _)| (label, url),
    )(input)
}

/// Parse the next inline element. Markup that does not close is taken literally.
pub fn inline(input: &str) -> IResult<&str, Inline<'_>> {
    alt((
        map(bold, Inline::Bold),
        map(link, |(label, url)| Inline::Link { label, url }),
        map(escaped, |c| Inline::Text(c.to_string())),
        map(plain, |s| Inline::Text(s.to_string())),
        map(anychar, |c| Inline::Text(c.to_string())),
    ))(input)
}

/// Split markup into inline elements.
pub fn tokenize(mut input: &str) -> Vec<Inline<'_>> {
    let mut result = Vec::new();
    while !input.is_empty() {
        match inline(input) {
            Ok((rest, item)) => {
                result.push(item);
                input = rest;
            }
            Err(_) => break,
        }
    }
    result
}
