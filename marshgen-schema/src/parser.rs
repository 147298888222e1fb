//! Proto schema parser.
//!
//! This module parses proto2/proto3 schema text into a [`SchemaFile`].
//! Top-level messages and enums are supported; nested declarations,
//! `oneof`, `map<,>`, groups, services and extensions are rejected.

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind, tokenize};
use crate::types::{
    EnumType, EnumValue, FieldDescriptor, FieldLabel, MessageType, SchemaFile, SchemaOption,
    qualify_name,
};

/// Parses schema text into a [`SchemaFile`].
///
/// # Arguments
/// * `identifier` - Source identifier used in error messages and as the file id
/// * `text` - Schema content
///
/// # Returns
/// Parsed schema file or parse error.
///
/// # Errors
/// Returns `ParseError` if the text is malformed or uses an unsupported construct.
pub fn parse_schema(identifier: &str, text: &str) -> Result<SchemaFile, ParseError> {
    let tokens = tokenize(identifier, text)?;
    Parser::new(identifier, tokens).parse_file()
}

struct Parser<'a> {
    source_id: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source_id: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            source_id,
            tokens,
            pos: 0,
        }
    }

    fn parse_file(mut self) -> Result<SchemaFile, ParseError> {
        let mut file = SchemaFile::new(self.source_id, "");
        let mut package_seen = false;

        while let Some(token) = self.peek().cloned() {
            match &token.kind {
                TokenKind::Symbol(';') => {
                    self.pos += 1;
                }
                TokenKind::Ident(kw) => match kw.as_str() {
                    "syntax" => {
                        self.pos += 1;
                        self.expect_symbol('=')?;
                        file.syntax = Some(self.expect_string("syntax version")?);
                        self.expect_symbol(';')?;
                    }
                    "package" => {
                        if package_seen {
                            return Err(self.error_at(&token, "multiple package statements"));
                        }
                        package_seen = true;
                        self.pos += 1;
                        file.package = self.parse_dotted_name("package name")?;
                        self.expect_symbol(';')?;
                    }
                    "import" => {
                        self.pos += 1;
                        if self.peek_ident_is("public") || self.peek_ident_is("weak") {
                            self.pos += 1;
                        }
                        file.imports.push(self.expect_string("import path")?);
                        self.expect_symbol(';')?;
                    }
                    "option" => {
                        let option = self.parse_option_statement()?;
                        file.options.push(option);
                    }
                    "message" => {
                        let message = self.parse_message()?;
                        file.add_message(message);
                    }
                    "enum" => {
                        let enum_type = self.parse_enum()?;
                        file.add_enum(enum_type);
                    }
                    "service" | "extend" | "edition" => {
                        return Err(ParseError::unsupported(self.source_id, token.line, kw));
                    }
                    _ => return Err(self.unexpected(&token, "top-level declaration")),
                },
                _ => return Err(self.unexpected(&token, "top-level declaration")),
            }
        }

        // Full names depend on the package, which may follow the declarations.
        for message in &mut file.messages {
            message.full_name = qualify_name(&file.package, &message.name);
        }
        for enum_type in &mut file.enums {
            enum_type.full_name = qualify_name(&file.package, &enum_type.name);
        }

        Ok(file)
    }

    fn parse_message(&mut self) -> Result<MessageType, ParseError> {
        self.expect_keyword("message")?;
        let name = self.expect_ident("message name")?;
        self.expect_symbol('{')?;

        let mut message = MessageType::new(name, String::new());

        loop {
            let token = self.peek_or_eof("'}'")?.clone();
            match &token.kind {
                TokenKind::Symbol('}') => {
                    self.pos += 1;
                    break;
                }
                TokenKind::Symbol(';') => {
                    self.pos += 1;
                }
                TokenKind::Ident(kw) if kw == "option" => {
                    let option = self.parse_option_statement()?;
                    message.options.push(option);
                }
                TokenKind::Ident(kw) if kw == "reserved" || kw == "extensions" => {
                    self.skip_statement()?;
                }
                TokenKind::Ident(kw)
                    if matches!(kw.as_str(), "message" | "enum" | "oneof" | "extend") =>
                {
                    return Err(ParseError::unsupported(self.source_id, token.line, kw));
                }
                TokenKind::Ident(_) => {
                    let field = self.parse_field()?;
                    message.add_field(field);
                }
                _ => return Err(self.unexpected(&token, "field declaration")),
            }
        }

        Ok(message)
    }

    fn parse_field(&mut self) -> Result<FieldDescriptor, ParseError> {
        let mut label = FieldLabel::Implicit;
        if let Some(TokenKind::Ident(kw)) = self.peek().map(|t| &t.kind) {
            if let Some(parsed) = FieldLabel::parse(kw) {
                label = parsed;
                self.pos += 1;
            }
        }

        let type_token = self.peek_or_eof("field type")?.clone();
        let type_name = self.parse_dotted_name("field type")?;
        if type_name == "group" || (type_name == "map" && self.peek_symbol_is('<')) {
            return Err(ParseError::unsupported(
                self.source_id,
                type_token.line,
                type_name,
            ));
        }

        let name = self.expect_ident("field name")?;
        self.expect_symbol('=')?;
        let number_token = self.peek_or_eof("field number")?.clone();
        let number = self.parse_integer("field number")?;
        let number = u32::try_from(number)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                self.error_at(&number_token, format!("invalid field number {number}"))
            })?;

        if self.peek_symbol_is('[') {
            self.skip_bracketed()?;
        }
        self.expect_symbol(';')?;

        Ok(FieldDescriptor {
            name,
            type_name,
            number,
            label,
        })
    }

    fn parse_enum(&mut self) -> Result<EnumType, ParseError> {
        self.expect_keyword("enum")?;
        let name = self.expect_ident("enum name")?;
        self.expect_symbol('{')?;

        let mut enum_type = EnumType::new(name, String::new());

        loop {
            let token = self.peek_or_eof("'}'")?.clone();
            match &token.kind {
                TokenKind::Symbol('}') => {
                    self.pos += 1;
                    break;
                }
                TokenKind::Symbol(';') => {
                    self.pos += 1;
                }
                TokenKind::Ident(kw) if kw == "option" => {
                    let option = self.parse_option_statement()?;
                    enum_type.options.push(option);
                }
                TokenKind::Ident(kw) if kw == "reserved" => {
                    self.skip_statement()?;
                }
                TokenKind::Ident(value_name) => {
                    self.pos += 1;
                    self.expect_symbol('=')?;
                    let ordinal_token = self.peek_or_eof("enum ordinal")?.clone();
                    let ordinal = self.parse_integer("enum ordinal")?;
                    let ordinal = i32::try_from(ordinal).map_err(|_| {
                        self.error_at(&ordinal_token, format!("enum ordinal {ordinal} out of range"))
                    })?;
                    if self.peek_symbol_is('[') {
                        self.skip_bracketed()?;
                    }
                    self.expect_symbol(';')?;
                    enum_type.add_value(EnumValue::new(value_name.clone(), ordinal));
                }
                _ => return Err(self.unexpected(&token, "enum value")),
            }
        }

        Ok(enum_type)
    }

    fn parse_option_statement(&mut self) -> Result<SchemaOption, ParseError> {
        self.expect_keyword("option")?;

        let mut name = String::new();
        if self.peek_symbol_is('(') {
            self.pos += 1;
            name.push('(');
            name.push_str(&self.parse_dotted_name("option name")?);
            self.expect_symbol(')')?;
            name.push(')');
        } else {
            name.push_str(&self.expect_ident("option name")?);
        }
        while self.peek_symbol_is('.') {
            self.pos += 1;
            name.push('.');
            name.push_str(&self.expect_ident("option name")?);
        }

        self.expect_symbol('=')?;
        let value = self.parse_constant()?;
        self.expect_symbol(';')?;

        Ok(SchemaOption::new(name, value))
    }

    fn parse_constant(&mut self) -> Result<String, ParseError> {
        let token = self.next_or_eof("constant")?;
        match &token.kind {
            TokenKind::Str(s) => {
                // Adjacent string literals concatenate.
                let mut value = s.clone();
                while let Some(TokenKind::Str(next)) = self.peek().map(|t| &t.kind) {
                    value.push_str(next);
                    self.pos += 1;
                }
                Ok(value)
            }
            TokenKind::Ident(s) | TokenKind::Int(s) | TokenKind::Float(s) => Ok(s.clone()),
            TokenKind::Symbol(sign @ ('-' | '+')) => {
                let next = self.next_or_eof("number")?;
                match &next.kind {
                    TokenKind::Int(s) | TokenKind::Float(s) => Ok(format!("{sign}{s}")),
                    TokenKind::Ident(s) if s == "inf" || s == "nan" => Ok(format!("{sign}{s}")),
                    _ => Err(self.unexpected(&next, "number")),
                }
            }
            TokenKind::Symbol('{') => Err(ParseError::unsupported(
                self.source_id,
                token.line,
                "aggregate option value",
            )),
            _ => Err(self.unexpected(&token, "constant")),
        }
    }

    fn parse_integer(&mut self, what: &str) -> Result<i64, ParseError> {
        let mut negative = false;
        if self.peek_symbol_is('-') {
            negative = true;
            self.pos += 1;
        }
        let token = self.next_or_eof(what)?;
        let TokenKind::Int(literal) = &token.kind else {
            return Err(self.unexpected(&token, what));
        };

        let parsed = if let Some(hex) = literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))
        {
            i64::from_str_radix(hex, 16)
        } else if literal.len() > 1 && literal.starts_with('0') {
            i64::from_str_radix(&literal[1..], 8)
        } else {
            literal.parse::<i64>()
        };

        let value =
            parsed.map_err(|_| self.error_at(&token, format!("invalid integer '{literal}'")))?;
        Ok(if negative { -value } else { value })
    }

    fn parse_dotted_name(&mut self, what: &str) -> Result<String, ParseError> {
        let mut name = String::new();
        if self.peek_symbol_is('.') {
            self.pos += 1;
            name.push('.');
        }
        name.push_str(&self.expect_ident(what)?);
        while self.peek_symbol_is('.') {
            self.pos += 1;
            name.push('.');
            name.push_str(&self.expect_ident(what)?);
        }
        Ok(name)
    }

    /// Skips a `[ ... ]` option list, honoring nesting.
    fn skip_bracketed(&mut self) -> Result<(), ParseError> {
        self.expect_symbol('[')?;
        let mut depth = 1usize;
        while depth > 0 {
            let token = self.next_or_eof("']'")?;
            match token.kind {
                TokenKind::Symbol('[') => depth += 1,
                TokenKind::Symbol(']') => depth -= 1,
                _ => {}
            }
        }
        Ok(())
    }

    /// Skips tokens up to and including the next `;`.
    fn skip_statement(&mut self) -> Result<(), ParseError> {
        loop {
            let token = self.next_or_eof("';'")?;
            if token.kind == TokenKind::Symbol(';') {
                return Ok(());
            }
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_or_eof(&self, expected: &str) -> Result<&Token, ParseError> {
        self.peek()
            .ok_or_else(|| ParseError::eof(self.source_id, expected))
    }

    fn next_or_eof(&mut self, expected: &str) -> Result<Token, ParseError> {
        let token = self.peek_or_eof(expected)?.clone();
        self.pos += 1;
        Ok(token)
    }

    fn peek_symbol_is(&self, symbol: char) -> bool {
        matches!(self.peek(), Some(Token { kind: TokenKind::Symbol(c), .. }) if *c == symbol)
    }

    fn peek_ident_is(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(Token { kind: TokenKind::Ident(s), .. }) if s == keyword)
    }

    fn expect_symbol(&mut self, symbol: char) -> Result<(), ParseError> {
        let expected = format!("'{symbol}'");
        let token = self.next_or_eof(&expected)?;
        if token.kind == TokenKind::Symbol(symbol) {
            Ok(())
        } else {
            Err(self.unexpected(&token, &expected))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        let expected = format!("'{keyword}'");
        let token = self.next_or_eof(&expected)?;
        match &token.kind {
            TokenKind::Ident(s) if s == keyword => Ok(()),
            _ => Err(self.unexpected(&token, &expected)),
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        let token = self.next_or_eof(what)?;
        match &token.kind {
            TokenKind::Ident(s) => Ok(s.clone()),
            _ => Err(self.unexpected(&token, what)),
        }
    }

    fn expect_string(&mut self, what: &str) -> Result<String, ParseError> {
        let token = self.next_or_eof(what)?;
        match &token.kind {
            TokenKind::Str(s) => Ok(s.clone()),
            _ => Err(self.unexpected(&token, what)),
        }
    }

    fn unexpected(&self, token: &Token, expected: &str) -> ParseError {
        self.error_at(
            token,
            format!("expected {expected}, found {}", token.kind.describe()),
        )
    }

    fn error_at(&self, token: &Token, message: impl Into<String>) -> ParseError {
        ParseError::syntax(self.source_id, token.line, token.column, message)
    }
}
