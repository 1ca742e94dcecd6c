use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

/// A validated chapter/verse pair.
///
/// Construction rejects zero on either side, so the matcher never sees an
/// invalid query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageQuery {
    pub chapter: u32,
    pub verse: u32,
}

impl PassageQuery {
    pub fn new(chapter: u32, verse: u32) -> Result<Self> {
        if chapter == 0 || verse == 0 {
            return Err(Error::new(
                ErrorKind::InvalidQuery,
                format!("chapter and verse must be positive, got {}:{}", chapter, verse),
            ));
        }
        Ok(PassageQuery { chapter, verse })
    }
}

impl fmt::Display for PassageQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "chapter {}, verse {}", self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_pair() {
        let query = PassageQuery::new(9, 23).unwrap();
        assert_eq!(query.chapter, 9);
        assert_eq!(query.verse, 23);
    }

    #[test]
    fn rejects_zero() {
        assert!(PassageQuery::new(0, 23).is_err());
        assert!(PassageQuery::new(9, 0).is_err());
    }
}
