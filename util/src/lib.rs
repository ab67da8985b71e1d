use std::{
    error::Error,
    io::{self, Read},
    str::FromStr,
};

use anyhow::{Context, Result};
use miette::GraphicalReportHandler;
use nom::{
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    error::ParseError,
    sequence::tuple,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{BaseErrorKind, ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

pub type Span<'a> = LocatedSpan<&'a str>;

type ErrorKind = BaseErrorKind<&'static str, Box<dyn Error + Send + Sync + 'static>>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: ErrorKind,
}

/// A token that did not parse, with a rendered diagnostic pointing at the
/// offending character.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{report}")]
pub struct ParseFailure {
    pub input: String,
    pub offset: usize,
    pub report: String,
}

/// Optionally signed decimal integer that fits in an `i64`.
pub fn parse_number<'a, E>(i: Span<'a>) -> IResult<Span<'a>, i64, E>
where
    E: ParseError<Span<'a>> + nom::error::FromExternalError<Span<'a>, std::num::ParseIntError>,
{
    map_res(recognize(tuple((opt(char('-')), digit1))), |i: Span<'a>| {
        FromStr::from_str(i.fragment())
    })(i)
}

fn into_base(e: ErrorTree<Span<'_>>) -> Option<(usize, ErrorKind)> {
    match e {
        GenericErrorTree::Base { location, kind } => Some((location.location_offset(), kind)),
        GenericErrorTree::Stack { base, .. } => into_base(*base),
        GenericErrorTree::Alt(alternatives) => alternatives.into_iter().find_map(into_base),
    }
}

/// Runs `parse_fun` over the whole of `l`, rendering a miette report when it
/// fails or leaves input behind.
pub fn parse_nice<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T, ParseFailure>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line_span = Span::new(l);
    let line: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(line_span);
    line.map_err(|e| {
        let Some((offset, kind)) = into_base(e) else {
            return ParseFailure {
                input: l.to_string(),
                offset: 0,
                report: format!("bad input: {l}"),
            };
        };

        let err = BadInput {
            src: l,
            bad_bit: miette::SourceSpan::new(offset.into(), 0.into()),
            kind,
        };
        let mut report = String::new();
        if GraphicalReportHandler::new()
            .render_report(&mut report, &err)
            .is_err()
        {
            report = format!("{err}: {}", err.kind);
        }

        ParseFailure {
            input: l.to_string(),
            offset,
            report,
        }
    })
}

pub fn read_input_as_string() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case("-7", -7)]
    #[case("007", 7)]
    #[case("9223372036854775807", i64::MAX)]
    #[case("-9223372036854775808", i64::MIN)]
    fn parse_nice_number_ok(#[case] input: &str, #[case] expected: i64) {
        let res = parse_nice(input, parse_number);
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), expected);
    }

    #[rstest]
    #[case("", 0)]
    #[case("x", 0)]
    #[case("-", 1)]
    #[case("12a", 2)]
    #[case("+3", 0)]
    #[case("1.5", 1)]
    fn parse_nice_number_bad(#[case] input: &str, #[case] offset: usize) {
        let res = parse_nice(input, parse_number);
        assert!(res.is_err());

        let failure = res.unwrap_err();
        assert_eq!(failure.input, input);
        assert_eq!(failure.offset, offset);
        assert!(!failure.report.is_empty());
    }

    #[test]
    fn parse_nice_number_overflow() {
        let res = parse_nice("9223372036854775808", parse_number);
        assert!(res.is_err());
        assert_eq!(res.unwrap_err().offset, 0);
    }
}
