use nom::Parser;
use nom::IResult;
use nom::character::complete::{char as nom_char, u32 as nom_u32};
use nom::combinator::all_consuming;
use nom::sequence::separated_pair;

use crate::core::error::{Error, ErrorKind, Result};
use crate::query::types::PassageQuery;

/// Parses user-supplied query strings into a validated `PassageQuery`.
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        QueryParser
    }

    /// Parse a `"CHAPTER:VERSE"` string, e.g. "9:23".
    pub fn parse(&self, input: &str) -> Result<PassageQuery> {
        let (_, (chapter, verse)) = all_consuming(pair_parser)
            .parse(input.trim())
            .map_err(|_| {
                Error::new(
                    ErrorKind::InvalidQuery,
                    format!("expected CHAPTER:VERSE, got '{}'", input),
                )
            })?;

        PassageQuery::new(chapter, verse)
    }

    /// Parse a chapter and verse given as separate strings (CLI arguments).
    pub fn parse_pair(&self, chapter: &str, verse: &str) -> Result<PassageQuery> {
        let chapter = parse_number(chapter, "chapter")?;
        let verse = parse_number(verse, "verse")?;
        PassageQuery::new(chapter, verse)
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        QueryParser::new()
    }
}

fn pair_parser(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(nom_u32, nom_char(':'), nom_u32).parse(input)
}

fn parse_number(input: &str, field: &str) -> Result<u32> {
    input.trim().parse::<u32>().map_err(|_| {
        Error::new(
            ErrorKind::InvalidQuery,
            format!("{} must be a positive integer, got '{}'", field, input),
        )
    })
}
