use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Case-folds token text so frequency counts accumulate case-insensitively.
pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.text = token.text.to_lowercase();
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "lowercase"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(LowercaseFilter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case() {
        let tokens = vec![Token::new("Seven".to_string(), 0, 0)];
        let filtered = LowercaseFilter.filter(tokens);
        assert_eq!(filtered[0].text, "seven");
    }
}
