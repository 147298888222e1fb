//! Proto schema lexer.
//!
//! Converts schema text into a flat token list with line/column positions.
//! Whitespace and `//` / `/* */` comments are trivia.

use crate::error::ParseError;

/// Token category.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifier or keyword.
    Ident(String),
    /// Integer literal, unsigned as written (decimal, hex or octal).
    Int(String),
    /// Floating point literal.
    Float(String),
    /// String literal with escapes processed.
    Str(String),
    /// Single punctuation character.
    Symbol(char),
}

impl TokenKind {
    /// Describes the token for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Ident(s) => format!("identifier '{s}'"),
            Self::Int(s) | Self::Float(s) => format!("number '{s}'"),
            Self::Str(s) => format!("string \"{s}\""),
            Self::Symbol(c) => format!("'{c}'"),
        }
    }
}

/// A token with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token category and text.
    pub kind: TokenKind,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

/// Pull-based lexer over schema text.
pub struct Lexer<'a> {
    source_id: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `text`.
    #[must_use]
    pub fn new(source_id: &'a str, text: &'a str) -> Self {
        Self {
            source_id,
            chars: text.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Lexes the whole input.
    ///
    /// # Errors
    /// Returns `ParseError::Syntax` on unterminated literals or comments and
    /// on characters outside the schema alphabet.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Pulls the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_trivia()?;

        let (line, column) = (self.line, self.column);
        let Some(&ch) = self.chars.peek() else {
            return Ok(None);
        };

        let kind = if ch.is_ascii_alphabetic() || ch == '_' {
            TokenKind::Ident(self.take_while(|c| c.is_ascii_alphanumeric() || c == '_'))
        } else if ch.is_ascii_digit() {
            self.lex_number()
        } else if ch == '"' || ch == '\'' {
            self.lex_string(ch, line, column)?
        } else if "{}[]()<>;=,.-+:".contains(ch) {
            self.bump();
            TokenKind::Symbol(ch)
        } else {
            return Err(self.error(line, column, format!("unexpected character '{ch}'")));
        };

        Ok(Some(Token { kind, line, column }))
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !pred(ch) {
                break;
            }
            text.push(ch);
            self.bump();
        }
        text
    }

    fn error(&self, line: usize, column: usize, message: impl Into<String>) -> ParseError {
        ParseError::syntax(self.source_id, line, column, message)
    }

    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.chars.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let (line, column) = (self.line, self.column);
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    match lookahead.peek() {
                        Some('/') => {
                            while let Some(ch) = self.bump() {
                                if ch == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            self.bump();
                            self.bump();
                            self.skip_block_comment(line, column)?;
                        }
                        _ => return Err(self.error(line, column, "unexpected character '/'")),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self, line: usize, column: usize) -> Result<(), ParseError> {
        let mut prev = '\0';
        while let Some(ch) = self.bump() {
            if prev == '*' && ch == '/' {
                return Ok(());
            }
            prev = ch;
        }
        Err(self.error(line, column, "unterminated block comment"))
    }

    fn lex_number(&mut self) -> TokenKind {
        let mut literal = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let hex = literal.starts_with("0x") || literal.starts_with("0X");
        let mut is_float = !hex && literal.contains(['e', 'E']);

        if !hex && self.chars.peek() == Some(&'.') {
            is_float = true;
            literal.push('.');
            self.bump();
            literal.push_str(&self.take_while(|c| c.is_ascii_alphanumeric()));
        }
        if is_float && literal.ends_with(['e', 'E']) {
            if let Some(&sign @ ('+' | '-')) = self.chars.peek() {
                literal.push(sign);
                self.bump();
                literal.push_str(&self.take_while(|c| c.is_ascii_digit()));
            }
        }

        if is_float {
            TokenKind::Float(literal)
        } else {
            TokenKind::Int(literal)
        }
    }

    fn lex_string(
        &mut self,
        quote: char,
        line: usize,
        column: usize,
    ) -> Result<TokenKind, ParseError> {
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some('0') => value.push('\0'),
                    Some(other) => value.push(other),
                    None => return Err(self.error(line, column, "unterminated escape sequence")),
                },
                Some(ch) if ch == quote => return Ok(TokenKind::Str(value)),
                Some('\n') | None => {
                    return Err(self.error(line, column, "unterminated string literal"));
                }
                Some(ch) => value.push(ch),
            }
        }
    }
}

/// Lexes `text` into tokens.
///
/// # Errors
/// Returns `ParseError::Syntax` if the text contains malformed tokens.
pub fn tokenize(source_id: &str, text: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source_id, text).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize("test.proto", text)
            .expect("Failed to tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_field() {
        assert_eq!(
            kinds("repeated string tags = 3;"),
            vec![
                TokenKind::Ident("repeated".into()),
                TokenKind::Ident("string".into()),
                TokenKind::Ident("tags".into()),
                TokenKind::Symbol('='),
                TokenKind::Int("3".into()),
                TokenKind::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_comments() {
        let text = "// leading\npackage a.b; /* block\n comment */ option x = 'y';";
        let tokens = kinds(text);
        assert_eq!(tokens[0], TokenKind::Ident("package".into()));
        assert_eq!(tokens.last(), Some(&TokenKind::Symbol(';')));
        assert!(tokens.contains(&TokenKind::Str("y".into())));
    }

    #[test]
    fn test_tokenize_numbers() {
        assert_eq!(kinds("0x1F"), vec![TokenKind::Int("0x1F".into())]);
        assert_eq!(kinds("1.5"), vec![TokenKind::Float("1.5".into())]);
        assert_eq!(kinds("2e-3"), vec![TokenKind::Float("2e-3".into())]);
        assert_eq!(
            kinds("-4"),
            vec![TokenKind::Symbol('-'), TokenKind::Int("4".into())]
        );
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("test.proto", "message\n  Foo").expect("Failed to tokenize");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("test.proto", "option x = \"abc").unwrap_err();
        assert!(err.to_string().contains("unterminated string literal"));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize("test.proto", "/* never closed").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, column: 1, .. }));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("test.proto", "message Foo { # }").unwrap_err();
        assert!(err.to_string().contains("'#'"));
    }
}
