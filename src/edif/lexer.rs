//! Lexer (tokenizer) for EDIF netlists.

use std::io::{BufRead, BufReader, Read, Write};

use super::keywords::{CellType, Direction, Keyword, ValueTable, ViewType};
use crate::error::{EdifError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's source text (decoded contents for strings)
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in EDIF.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Open parenthesis '('
    OpenParen,
    /// Close parenthesis ')'
    CloseParen,
    /// A reserved word in head position
    Keyword(Keyword),
    /// A user-chosen name, case preserved
    Identifier,
    /// An integer literal with its value
    Integer(i64),
    /// A double-quoted string literal
    String,
    /// `celltype` argument
    CellType(CellType),
    /// `viewtype` argument
    ViewType(ViewType),
    /// `direction` argument
    Direction(Direction),
    /// End of input
    Eof,
    /// A character sequence that starts no valid token
    Invalid,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Diagnostic name of the token, with keywords and enumerated values
    /// canonicalized to lower case.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer(_) => "Integer",
            TokenKind::String => "String",
            TokenKind::CellType(v) => v.as_str(),
            TokenKind::ViewType(v) => v.as_str(),
            TokenKind::Direction(v) => v.as_str(),
            TokenKind::Eof => "end of file",
            TokenKind::Invalid => "invalid token",
        }
    }

    /// Short description used in syntax errors.
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Identifier => format!("identifier `{}`", self.text),
            TokenKind::Integer(v) => format!("integer {}", v),
            TokenKind::String => format!("string \"{}\"", self.text),
            TokenKind::Keyword(kw) => format!("keyword `{}`", kw),
            TokenKind::Invalid => format!("invalid token `{}`", self.text),
            _ => format!("`{}`", self.name()),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// What the next word is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Context {
    /// Plain argument: every word is an identifier
    Argument,
    /// Directly after '(': keyword table
    Head,
    /// After `celltype`, `viewtype` or `direction`
    Value(ValueTable),
}

/// Pull-based lexer over a byte stream.
///
/// The lexer keeps only a cursor (line/column), the in-progress literal
/// buffer and a one-word context; rebinding it with
/// [`switch_streams`](Lexer::switch_streams) discards all of it.
pub struct Lexer<'a> {
    input: Option<Box<dyn BufRead + 'a>>,
    output: Option<Box<dyn Write + 'a>>,
    line: usize,
    column: usize,
    context: Context,
    buffer: Vec<u8>,
    at_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with no stream bound; it yields end-of-file until
    /// [`switch_streams`](Lexer::switch_streams) is called.
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            line: 1,
            column: 1,
            context: Context::Argument,
            buffer: Vec::new(),
            at_eof: false,
        }
    }

    /// Create a lexer reading from `reader`.
    pub fn from_reader<R: Read + 'a>(reader: R) -> Self {
        let mut lexer = Self::new();
        lexer.switch_streams(reader, None);
        lexer
    }

    /// Create a lexer over in-memory text.
    pub fn from_text(text: &'a str) -> Self {
        Self::from_reader(text.as_bytes())
    }

    /// Rebind the lexer to a new input stream, and optionally a transcript
    /// sink that receives one `line:column name text` line per token.
    pub fn switch_streams<R: Read + 'a>(&mut self, input: R, output: Option<Box<dyn Write + 'a>>) {
        self.input = Some(Box::new(BufReader::new(input)));
        self.output = output;
        self.line = 1;
        self.column = 1;
        self.context = Context::Argument;
        self.buffer.clear();
        self.at_eof = false;
    }

    /// Current cursor position (line, column).
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Get the next token.
    pub fn get_token(&mut self) -> Result<Token> {
        let token = self.scan()?;
        if let Some(out) = self.output.as_mut() {
            writeln!(out, "{}:{} {} {}", token.line, token.column, token.name(), token.text)?;
        }
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token> {
        self.skip_whitespace()?;

        let (line, column) = (self.line, self.column);
        let ch = match self.peek_byte()? {
            Some(ch) => ch,
            None => {
                self.at_eof = true;
                self.context = Context::Argument;
                return Ok(Token::new(TokenKind::Eof, "", line, column));
            }
        };

        let token = match ch {
            b'(' => {
                self.advance()?;
                self.context = Context::Head;
                Token::new(TokenKind::OpenParen, "(", line, column)
            }
            b')' => {
                self.advance()?;
                self.context = Context::Argument;
                Token::new(TokenKind::CloseParen, ")", line, column)
            }
            b'"' => {
                let text = self.read_string(line, column)?;
                self.context = Context::Argument;
                Token::new(TokenKind::String, text, line, column)
            }
            b'-' | b'+' | b'0'..=b'9' => {
                let token = self.read_number(line, column)?;
                self.context = Context::Argument;
                token
            }
            _ if is_word_start(ch) => {
                let text = self.read_word()?;
                let kind = match self.context {
                    Context::Head => Keyword::lookup(&text).map(TokenKind::Keyword),
                    Context::Value(table) => value_kind(table, &text),
                    Context::Argument => None,
                }
                .unwrap_or(TokenKind::Identifier);
                self.context = match &kind {
                    TokenKind::Keyword(kw) => kw.value_table().map_or(Context::Argument, Context::Value),
                    _ => Context::Argument,
                };
                Token::new(kind, text, line, column)
            }
            _ => {
                self.advance()?;
                self.context = Context::Argument;
                let text = String::from_utf8_lossy(&[ch]).into_owned();
                Token::new(TokenKind::Invalid, text, line, column)
            }
        };

        Ok(token)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.at_eof {
            return Ok(None);
        }
        match self.input.as_mut() {
            Some(input) => Ok(input.fill_buf()?.first().copied()),
            None => Ok(None),
        }
    }

    fn advance(&mut self) -> Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if let Some(b) = byte {
            if let Some(input) = self.input.as_mut() {
                input.consume(1);
            }
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        Ok(byte)
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(ch) = self.peek_byte()? {
            if matches!(ch, b' ' | b'\t' | b'\r' | b'\n' | 0x0c) {
                self.advance()?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn read_word(&mut self) -> Result<String> {
        self.buffer.clear();
        while let Some(ch) = self.peek_byte()? {
            if is_word_char(ch) {
                self.buffer.push(ch);
                self.advance()?;
            } else {
                break;
            }
        }
        Ok(String::from_utf8_lossy(&self.buffer).into_owned())
    }

    fn read_number(&mut self, line: usize, column: usize) -> Result<Token> {
        self.buffer.clear();

        // Optional sign
        if let Some(sign @ (b'-' | b'+')) = self.peek_byte()? {
            self.buffer.push(sign);
            self.advance()?;
        }

        let mut digits = 0;
        while let Some(ch) = self.peek_byte()? {
            if ch.is_ascii_digit() {
                self.buffer.push(ch);
                self.advance()?;
                digits += 1;
            } else {
                break;
            }
        }

        // Digits running into a word, or a bare sign, start no valid token
        let mut malformed = digits == 0;
        while let Some(ch) = self.peek_byte()? {
            if is_word_char(ch) {
                self.buffer.push(ch);
                self.advance()?;
                malformed = true;
            } else {
                break;
            }
        }

        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        if malformed {
            return Ok(Token::new(TokenKind::Invalid, text, line, column));
        }

        let value = text.parse::<i64>().map_err(|_| {
            EdifError::lexer(line, column, format!("integer literal out of range: {}", text))
        })?;
        Ok(Token::new(TokenKind::Integer(value), text, line, column))
    }

    fn read_string(&mut self, line: usize, column: usize) -> Result<String> {
        let unterminated = || EdifError::lexer(line, column, "unterminated string");

        self.advance()?; // opening quote
        self.buffer.clear();
        loop {
            match self.advance()?.ok_or_else(unterminated)? {
                b'"' => break,
                b'\\' => match self.advance()?.ok_or_else(unterminated)? {
                    escaped @ (b'"' | b'\\') => self.buffer.push(escaped),
                    other => self.buffer.extend_from_slice(&[b'\\', other]),
                },
                b'%' => match self.read_ascii_escape()? {
                    Escape::Decoded => {}
                    Escape::StringClosed => break,
                    Escape::Unterminated => return Err(unterminated()),
                },
                other => self.buffer.push(other),
            }
        }
        Ok(String::from_utf8_lossy(&self.buffer).into_owned())
    }

    /// Decode an EDIF `%code code ...%` escape into the literal buffer.
    /// Anything that is not a list of byte values is kept verbatim.
    fn read_ascii_escape(&mut self) -> Result<Escape> {
        let mut raw = Vec::new();
        let end = loop {
            match self.advance()? {
                Some(b'%') => break Escape::Decoded,
                Some(b'"') => break Escape::StringClosed,
                Some(ch) => raw.push(ch),
                None => return Ok(Escape::Unterminated),
            }
        };

        let codes = std::str::from_utf8(&raw)
            .ok()
            .and_then(|s| {
                s.split_ascii_whitespace()
                    .map(|code| code.parse::<u8>().ok())
                    .collect::<Option<Vec<u8>>>()
            })
            .filter(|codes| !codes.is_empty());

        match (end, codes) {
            (Escape::Decoded, Some(codes)) => self.buffer.extend_from_slice(&codes),
            _ => {
                self.buffer.push(b'%');
                self.buffer.extend_from_slice(&raw);
                if end == Escape::Decoded {
                    self.buffer.push(b'%');
                }
            }
        }
        Ok(end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Escape {
    Decoded,
    StringClosed,
    Unterminated,
}

impl Default for Lexer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'&' || ch == b'_'
}

fn is_word_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_' || ch == b'&'
}

fn value_kind(table: ValueTable, word: &str) -> Option<TokenKind> {
    match table {
        ValueTable::CellType => CellType::lookup(word).map(TokenKind::CellType),
        ValueTable::ViewType => ViewType::lookup(word).map(TokenKind::ViewType),
        ValueTable::Direction => Direction::lookup(word).map(TokenKind::Direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(text: &str, count: usize) -> Vec<&'static str> {
        let mut lexer = Lexer::from_text(text);
        (0..count).map(|_| lexer.get_token().unwrap().name()).collect()
    }

    #[test]
    fn test_lexer_keywords_in_head_and_argument_position() {
        for &kw in Keyword::ALL {
            let text = format!("({} {})", kw, kw);
            assert_eq!(
                names(&text, 5),
                vec!["(", kw.as_str(), "Identifier", ")", "end of file"],
                "lexing {}",
                text
            );
        }
    }

    #[test]
    fn test_lexer_keyword_argument_keeps_case() {
        let mut lexer = Lexer::from_text("(Cell CELL)");
        lexer.get_token().unwrap();
        let head = lexer.get_token().unwrap();
        assert_eq!(head.kind, TokenKind::Keyword(Keyword::Cell));
        assert_eq!(head.text, "Cell");
        let arg = lexer.get_token().unwrap();
        assert_eq!(arg.kind, TokenKind::Identifier);
        assert_eq!(arg.text, "CELL");
    }

    #[test]
    fn test_lexer_celltype() {
        for text in ["(celltype generic)", "(CellType Generic)", "(CELLTYPE GENERIC)"] {
            assert_eq!(names(text, 5), vec!["(", "celltype", "generic", ")", "end of file"]);
        }
    }

    #[test]
    fn test_lexer_viewtype() {
        for text in ["(viewtype netlist)", "(ViewType Netlist)", "(VIEWTYPE NETLIST)"] {
            assert_eq!(names(text, 5), vec!["(", "viewtype", "netlist", ")", "end of file"]);
        }
    }

    #[test]
    fn test_lexer_direction() {
        for value in ["inout", "input", "output"] {
            let variants = [
                format!("(direction {})", value),
                format!("(Direction {}{})", value[..1].to_uppercase(), &value[1..]),
                format!("(DIRECTION {})", value.to_uppercase()),
            ];
            for text in &variants {
                assert_eq!(names(text, 5), vec!["(", "direction", value, ")", "end of file"]);
            }
        }
        let mut lexer = Lexer::from_text("(Direction InOut)");
        lexer.get_token().unwrap();
        lexer.get_token().unwrap();
        assert_eq!(lexer.get_token().unwrap().kind, TokenKind::Direction(Direction::Inout));
    }

    #[test]
    fn test_lexer_unknown_enum_value_is_identifier() {
        let mut lexer = Lexer::from_text("(direction sideways)");
        lexer.get_token().unwrap();
        lexer.get_token().unwrap();
        let tok = lexer.get_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "sideways");
    }

    #[test]
    fn test_lexer_enum_value_only_after_its_keyword() {
        let mut lexer = Lexer::from_text("(port input)");
        lexer.get_token().unwrap();
        lexer.get_token().unwrap();
        assert_eq!(lexer.get_token().unwrap().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_lexer_integer() {
        let mut lexer = Lexer::from_text("(edifVersion 2 0 -17 +4)");
        lexer.get_token().unwrap();
        lexer.get_token().unwrap();
        let values: Vec<TokenKind> = (0..4).map(|_| lexer.get_token().unwrap().kind).collect();
        assert_eq!(
            values,
            vec![
                TokenKind::Integer(2),
                TokenKind::Integer(0),
                TokenKind::Integer(-17),
                TokenKind::Integer(4)
            ]
        );
    }

    #[test]
    fn test_lexer_integer_overflow() {
        let mut lexer = Lexer::from_text("99999999999999999999");
        let err = lexer.get_token().unwrap_err();
        assert!(err.is_lexical());
    }

    #[test]
    fn test_lexer_malformed_number_is_invalid() {
        let mut lexer = Lexer::from_text("12ab -");
        let tok = lexer.get_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Invalid);
        assert_eq!(tok.text, "12ab");
        assert_eq!(lexer.get_token().unwrap().kind, TokenKind::Invalid);
    }

    #[test]
    fn test_lexer_string() {
        let mut lexer = Lexer::from_text(r#""a \"quoted\" word" "100%%" "50% done" "%34%x%34%" "two
lines""#);
        assert_eq!(lexer.get_token().unwrap().text, r#"a "quoted" word"#);
        assert_eq!(lexer.get_token().unwrap().text, "100%%");
        assert_eq!(lexer.get_token().unwrap().text, "50% done");
        assert_eq!(lexer.get_token().unwrap().text, r#""x""#);
        let tok = lexer.get_token().unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.text, "two\nlines");
        assert!(lexer.get_token().unwrap().is_eof());
    }

    #[test]
    fn test_lexer_unterminated_string() {
        let mut lexer = Lexer::from_text("(comment \"never closed");
        lexer.get_token().unwrap();
        lexer.get_token().unwrap();
        let err = lexer.get_token().unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.position(), Some((1, 10)));
    }

    #[test]
    fn test_lexer_identifiers() {
        let mut lexer = Lexer::from_text("&1 Data_Out n_42 &_bus");
        let texts: Vec<String> = (0..4)
            .map(|_| {
                let tok = lexer.get_token().unwrap();
                assert_eq!(tok.kind, TokenKind::Identifier);
                tok.text
            })
            .collect();
        assert_eq!(texts, vec!["&1", "Data_Out", "n_42", "&_bus"]);
    }

    #[test]
    fn test_lexer_positions() {
        let mut lexer = Lexer::from_text("(edif top\n  (status))");
        let toks: Vec<(usize, usize)> = (0..7)
            .map(|_| {
                let t = lexer.get_token().unwrap();
                (t.line, t.column)
            })
            .collect();
        assert_eq!(toks, vec![(1, 1), (1, 2), (1, 7), (2, 3), (2, 4), (2, 10), (2, 11)]);
    }

    #[test]
    fn test_lexer_invalid_character() {
        let mut lexer = Lexer::from_text("(cell #)");
        lexer.get_token().unwrap();
        lexer.get_token().unwrap();
        let tok = lexer.get_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Invalid);
        assert_eq!(tok.text, "#");
        assert_eq!(lexer.get_token().unwrap().kind, TokenKind::CloseParen);
    }

    #[test]
    fn test_lexer_eof_is_idempotent() {
        let mut lexer = Lexer::from_text("x ");
        lexer.get_token().unwrap();
        for _ in 0..5 {
            let tok = lexer.get_token().unwrap();
            assert!(tok.is_eof());
            assert_eq!((tok.line, tok.column), (1, 3));
        }
        let mut unbound = Lexer::new();
        assert!(unbound.get_token().unwrap().is_eof());
        assert!(unbound.get_token().unwrap().is_eof());
    }

    #[test]
    fn test_switch_streams_resets_state() {
        let first = "(direction\n\n  ";
        let second = "input";
        let mut lexer = Lexer::from_text(first);
        while !lexer.get_token().unwrap().is_eof() {}
        assert_eq!(lexer.position(), (3, 3));

        lexer.switch_streams(second.as_bytes(), None);
        let tok = lexer.get_token().unwrap();
        // no leftover `direction` context and no leftover position
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!((tok.line, tok.column), (1, 1));
        assert!(lexer.get_token().unwrap().is_eof());
    }

    #[test]
    fn test_switch_streams_after_lex_error() {
        let mut lexer = Lexer::from_text("\"open");
        assert!(lexer.get_token().is_err());
        lexer.switch_streams("\"closed\"".as_bytes(), None);
        let tok = lexer.get_token().unwrap();
        assert_eq!(tok.text, "closed");
    }

    #[test]
    fn test_token_transcript() {
        let mut out = Vec::new();
        {
            let mut lexer = Lexer::new();
            lexer.switch_streams("(net n1)".as_bytes(), Some(Box::new(&mut out)));
            while !lexer.get_token().unwrap().is_eof() {}
        }
        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(
            transcript,
            "1:1 ( (\n1:2 net net\n1:6 Identifier n1\n1:8 ) )\n1:9 end of file \n"
        );
    }
}
