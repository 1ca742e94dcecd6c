use std::borrow::Cow;
use regex::Regex;

/// Removes square-bracketed editorial annotations before analysis.
///
/// Translator insertions like "[and he said]" are not scripture text and
/// must not contribute to counts or pattern matches.
pub struct AnnotationStripper {
    brackets: Regex,
}

impl AnnotationStripper {
    pub fn new() -> Self {
        AnnotationStripper {
            brackets: Regex::new(r"\[[^\]]*\]").unwrap(),
        }
    }

    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.brackets.replace_all(text, "")
    }
}

impl Default for AnnotationStripper {
    fn default() -> Self {
        AnnotationStripper::new()
    }
}
