//! MTEXT inline formatting removal
//!
//! MTEXT content embeds formatting codes: `\P` paragraph breaks, groups such
//! as `{\fArial|b1;Bold}`, control codes like `\H2.5;` and grouping braces.
//! Stripping runs four passes in order, each replacing every leftmost,
//! non-overlapping match.

use nom::{
    bytes::complete::{tag, take_while},
    character::complete::{char, one_of, satisfy},
    combinator::{recognize, value},
    sequence::{delimited, pair, terminated, tuple},
    IResult,
};

/// Reduce MTEXT content to plain text.
///
/// `\P` becomes a newline, `{\code;text}` groups keep their text, other
/// `\X...;` codes are dropped and remaining braces removed.
pub fn strip_mtext_formatting(text: &str) -> String {
    let text = replace_all(text, paragraph_break);
    let text = replace_all(&text, format_group);
    let text = replace_all(&text, control_code);
    text.chars().filter(|c| !matches!(c, '{' | '}')).collect()
}

/// `\P` or `\p`
fn paragraph_break(input: &str) -> IResult<&str, &str> {
    value("\n", pair(char('\\'), one_of("Pp")))(input)
}

/// `{\<codes>;<text>}`, yielding `<text>`
fn format_group(input: &str) -> IResult<&str, &str> {
    delimited(
        pair(tag("{\\"), terminated(take_while(|c: char| c != ';'), char(';'))),
        take_while(|c: char| c != '}'),
        char('}'),
    )(input)
}

/// `\<letter><args>;`, yielding nothing
fn control_code(input: &str) -> IResult<&str, &str> {
    value(
        "",
        recognize(tuple((
            char('\\'),
            satisfy(|c: char| c.is_ascii_alphabetic()),
            take_while(|c: char| c != ';'),
            char(';'),
        ))),
    )(input)
}

/// Replace every match of `parser` in `input` with its output
fn replace_all<'a, P>(input: &'a str, mut parser: P) -> String
where
    P: FnMut(&'a str) -> IResult<&'a str, &'a str>,
{
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while !rest.is_empty() {
        match parser(rest) {
            Ok((remaining, replacement)) if remaining.len() < rest.len() => {
                output.push_str(replacement);
                rest = remaining;
            }
            _ => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    output.push(c);
                }
                rest = chars.as_str();
            }
        }
    }
    output
}
