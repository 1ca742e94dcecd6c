use crate::analysis::token::Token;
use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Standard Unicode word tokenizer.
///
/// Emits surface forms unchanged; case folding belongs to the filter chain.
#[derive(Clone)]
pub struct StandardTokenizer {
    pub max_token_length: usize,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer {
            max_token_length: 255,
        }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;

        for (offset, word) in text.unicode_word_indices() {
            if word.len() <= self.max_token_length {
                tokens.push(Token::new(word.to_string(), position, offset));
                position += 1;
            }
        }

        tokens
    }

    fn name(&self) -> &str {
        "standard"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn splits_on_word_boundaries() {
        let tokens = StandardTokenizer::default().tokenize("And God said, Let there be light");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["And", "God", "said", "Let", "there", "be", "light"]);
    }

    #[test]
    fn tags_numeric_tokens() {
        let tokens = StandardTokenizer::default().tokenize("laboured for 70 years");
        let number = tokens.iter().find(|t| t.text == "70").unwrap();
        assert_eq!(number.token_type, TokenType::Number);
        assert_eq!(tokens[0].token_type, TokenType::Word);
    }

    #[test]
    fn records_byte_offsets() {
        let tokens = StandardTokenizer::default().tokenize("on the seventh day");
        let seventh = tokens.iter().find(|t| t.text == "seventh").unwrap();
        assert_eq!(seventh.offset, 7);
        assert_eq!(seventh.length, 7);
    }
}
