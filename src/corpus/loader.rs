use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nom::Parser;
use nom::IResult;
use nom::character::complete::{char as nom_char, u32 as nom_u32};
use nom::combinator::all_consuming;
use nom::sequence::separated_pair;
use serde_json::Value;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::VerseRecord;
use crate::corpus::store::VerseStore;

/// Outcome of a corpus load: the store plus how many entries were skipped.
pub struct LoadReport {
    pub store: VerseStore,
    pub skipped: usize,
}

/// Reads a verse corpus from a JSON object of `"Book C:V": "text"` entries.
///
/// Malformed entries (unparseable reference, zero chapter/verse, non-string
/// text) are skipped here; downstream components never see them.
pub struct CorpusLoader;

impl CorpusLoader {
    pub fn load_path(path: &Path) -> Result<LoadReport> {
        let file = File::open(path).map_err(|err| {
            Error::new(ErrorKind::Io, format!("cannot open {}: {}", path.display(), err))
        })?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        Self::from_value(value)
    }

    pub fn load_str(json: &str) -> Result<LoadReport> {
        Self::from_value(serde_json::from_str(json)?)
    }

    fn from_value(value: Value) -> Result<LoadReport> {
        let map = match value {
            Value::Object(map) => map,
            _ => {
                return Err(Error::new(
                    ErrorKind::Parse,
                    "corpus root must be a JSON object of reference/text pairs".to_string(),
                ));
            }
        };

        let mut records = Vec::with_capacity(map.len());
        let mut skipped = 0;

        for (reference, text) in &map {
            match (parse_reference(reference), text.as_str()) {
                (Some((book, chapter, verse)), Some(text)) => {
                    records.push(VerseRecord::new(book, chapter, verse, text));
                }
                _ => skipped += 1,
            }
        }

        Ok(LoadReport {
            store: VerseStore::new(records),
            skipped,
        })
    }
}

fn chapter_verse(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(nom_u32, nom_char(':'), nom_u32).parse(input)
}

/// Splits `"1 Kings 9:23"` into ("1 Kings", 9, 23).
///
/// The book name is everything before the final space, so numbered books
/// keep their prefix.
pub fn parse_reference(reference: &str) -> Option<(String, u32, u32)> {
    let (book, numbers) = reference.rsplit_once(' ')?;
    let book = book.trim();
    if book.is_empty() {
        return None;
    }

    let (_, (chapter, verse)) = all_consuming(chapter_verse).parse(numbers).ok()?;
    if chapter == 0 || verse == 0 {
        return None;
    }

    Some((book.to_string(), chapter, verse))
}
