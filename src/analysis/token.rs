use serde::{Serialize, Deserialize};

/// Token produced by the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: u32,     // Token position within the verse text
    pub offset: usize,     // Byte offset in the original text
    pub length: usize,     // Token length in bytes
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    Word,
    Number,
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        let token_type = if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            TokenType::Number
        } else {
            TokenType::Word
        };
        let length = text.len();
        Token {
            text,
            position,
            offset,
            length,
            token_type,
        }
    }
}
