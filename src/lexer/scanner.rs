//! Scanning Engine
//!
//! Line-oriented maximal-munch tokenizer driven by a `LanguageProfile`.
//!
//! ## State Machine
//!
//! The scanner walks the input one physical line at a time and carries a
//! [`ScanMode`] across line boundaries:
//!
//! ```text
//! Normal ──"/*"──────▶ InBlockComment ──"*/"──▶ Normal
//! Normal ──"\"\"\""──▶ InMultilineString ──"\"\"\""──▶ Normal
//! ```
//!
//! A construct that spans lines is emitted as one token per line segment.
//! Every character of the input lands in exactly one token, so joining the
//! lexemes reproduces the source.
//!
//! ## Usage
//!
//! ```rust
//! use lexiscan::lexer::{scan, LanguageId};
//!
//! let result = scan("x = 1 + 2 // note", LanguageId::JavaScript.profile());
//! assert_eq!(result.summary["whitespace"], 5);
//! assert_eq!(result.reconstruct(), "x = 1 + 2 // note");
//! ```

use tracing::{debug, instrument};

use super::profile::LanguageProfile;
use crate::types::{AnalysisResult, Token, TokenKind};

// =============================================================================
// Scan State
// =============================================================================

/// Lexical mode carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Normal,
    /// Inside a `/* ... */` comment opened on an earlier line
    InBlockComment,
    /// Inside a block string opened on an earlier line
    InMultilineString { delimiter: &'static str },
}

/// Cursor and mode owned by a single scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub mode: ScanMode,
    /// 1-based line of the next character
    pub line: usize,
    /// 1-based column of the next character, counted in chars
    pub column: usize,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            mode: ScanMode::Normal,
            line: 1,
            column: 1,
        }
    }
}

/// Winning match at the cursor
#[derive(Debug, Clone, Copy)]
struct Candidate {
    kind: CandidateKind,
    /// Byte length of the lexeme
    len: usize,
    /// Mode to continue in after this lexeme
    next_mode: ScanMode,
}

/// `TokenKind` minus the owned `Other` payload, so candidates stay `Copy`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateKind {
    Comment,
    String,
    Literal,
    Number,
    Word,
    Operator,
    Punctuation,
    Delimiter,
    Whitespace,
}

// =============================================================================
// Scanner
// =============================================================================

/// Incremental scanner, fed one physical line at a time
pub struct Scanner<'p> {
    profile: &'p LanguageProfile,
    state: ScanState,
    tokens: Vec<Token>,
}

impl<'p> Scanner<'p> {
    pub fn new(profile: &'p LanguageProfile) -> Self {
        Self {
            profile,
            state: ScanState::default(),
            tokens: Vec::new(),
        }
    }

    pub fn mode(&self) -> ScanMode {
        self.state.mode
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Scan one physical line, including its `\n` or `\r\n` terminator if
    /// it has one. The terminator is what advances the line counter.
    pub fn feed_line(&mut self, line: &str) {
        let mut pos = self.resume(line);

        while pos < line.len() {
            let rest = &line[pos..];
            let (kind, len, next_mode) = match self.next_candidate(rest) {
                Some(c) => (self.classify(c.kind, &rest[..c.len]), c.len, c.next_mode),
                None => {
                    // No matcher applies: claim a single char and keep going
                    let len = rest.chars().next().map_or(1, char::len_utf8);
                    (TokenKind::Error, len, ScanMode::Normal)
                }
            };
            self.emit(kind, &rest[..len]);
            self.state.mode = next_mode;
            pos += len;
        }

        if line.ends_with('\n') {
            self.state.line += 1;
            self.state.column = 1;
        }
    }

    /// Consume the token stream and derive its summary
    pub fn finish(self) -> AnalysisResult {
        AnalysisResult::from_tokens(self.tokens)
    }

    /// Continue a construct left open by the previous line. Returns the byte
    /// offset where normal scanning picks up.
    fn resume(&mut self, line: &str) -> usize {
        let (kind, close, escapes) = match self.state.mode {
            ScanMode::Normal => return 0,
            ScanMode::InBlockComment => match self.profile.block_comment {
                Some((_, close)) => (TokenKind::Comment, close, false),
                None => {
                    self.state.mode = ScanMode::Normal;
                    return 0;
                }
            },
            ScanMode::InMultilineString { delimiter } => (TokenKind::String, delimiter, true),
        };

        match find_close(line, close, escapes) {
            Some(end) => {
                self.emit(kind, &line[..end]);
                self.state.mode = ScanMode::Normal;
                end
            }
            None => {
                self.emit(kind, line);
                line.len()
            }
        }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str) {
        self.tokens.push(Token::new(
            kind,
            lexeme,
            self.state.line,
            self.state.column,
        ));
        self.state.column += lexeme.chars().count();
    }

    fn classify(&self, kind: CandidateKind, lexeme: &str) -> TokenKind {
        match kind {
            CandidateKind::Comment => TokenKind::Comment,
            CandidateKind::String => TokenKind::String,
            CandidateKind::Literal => TokenKind::Literal,
            CandidateKind::Number => TokenKind::Number,
            CandidateKind::Word if self.profile.is_keyword(lexeme) => TokenKind::Keyword,
            CandidateKind::Word => TokenKind::Identifier,
            CandidateKind::Operator => TokenKind::Operator,
            CandidateKind::Punctuation => TokenKind::Punctuation,
            CandidateKind::Delimiter => TokenKind::Delimiter,
            CandidateKind::Whitespace => TokenKind::Whitespace,
        }
    }

    /// Longest match wins; on equal length the earlier matcher keeps it
    fn next_candidate(&self, rest: &str) -> Option<Candidate> {
        let matchers: [fn(&LanguageProfile, &str) -> Option<Candidate>; 10] = [
            match_block_comment,
            match_line_comment,
            match_block_string,
            match_quoted,
            match_number,
            match_word,
            match_operator,
            match_punctuation,
            match_delimiter,
            match_whitespace,
        ];

        let mut best: Option<Candidate> = None;
        for matcher in matchers {
            if let Some(candidate) = matcher(self.profile, rest)
                && candidate.len > 0
                && best.is_none_or(|b| candidate.len > b.len)
            {
                best = Some(candidate);
            }
        }
        best
    }
}

/// Scan a complete source text
#[instrument(skip(source, profile), fields(language = %profile.language, bytes = source.len()))]
pub fn scan(source: &str, profile: &LanguageProfile) -> AnalysisResult {
    let mut scanner = Scanner::new(profile);
    for line in source.split_inclusive('\n') {
        scanner.feed_line(line);
    }

    if scanner.mode() != ScanMode::Normal {
        debug!(mode = ?scanner.mode(), "Input ended inside an open construct");
    }

    let result = scanner.finish();
    debug!(tokens = result.tokens.len(), "Local scan complete");
    result
}

// =============================================================================
// Matchers
// =============================================================================

fn candidate(kind: CandidateKind, len: usize) -> Option<Candidate> {
    Some(Candidate {
        kind,
        len,
        next_mode: ScanMode::Normal,
    })
}

/// Byte length of `line` without its trailing `\n` / `\r\n`
fn content_len(line: &str) -> usize {
    let trimmed = line.strip_suffix('\n').unwrap_or(line);
    trimmed.strip_suffix('\r').unwrap_or(trimmed).len()
}

/// Byte offset just past the first `close` marker, skipping backslash
/// escapes when `escapes` is set
fn find_close(text: &str, close: &str, escapes: bool) -> Option<usize> {
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        if escapes && c == '\\' {
            chars.next();
            continue;
        }
        if text[i..].starts_with(close) {
            return Some(i + close.len());
        }
    }
    None
}

fn match_block_comment(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let (open, close) = profile.block_comment?;
    let body = rest.strip_prefix(open)?;

    match find_close(body, close, false) {
        Some(end) => candidate(CandidateKind::Comment, open.len() + end),
        None => Some(Candidate {
            kind: CandidateKind::Comment,
            len: rest.len(),
            next_mode: ScanMode::InBlockComment,
        }),
    }
}

fn match_line_comment(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    profile
        .line_comments
        .iter()
        .any(|marker| rest.starts_with(marker))
        .then(|| content_len(rest))
        .and_then(|len| candidate(CandidateKind::Comment, len))
}

fn match_block_string(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let delimiter = profile
        .block_strings
        .iter()
        .copied()
        .find(|d| rest.starts_with(d))?;
    let body = &rest[delimiter.len()..];

    match find_close(body, delimiter, true) {
        Some(end) => candidate(CandidateKind::String, delimiter.len() + end),
        None => Some(Candidate {
            kind: CandidateKind::String,
            len: rest.len(),
            next_mode: ScanMode::InMultilineString { delimiter },
        }),
    }
}

/// Single-line quoted string or character literal. An unterminated quote
/// takes the rest of the line, stopping before the terminator.
fn match_quoted(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let quote = rest.chars().next()?;
    let kind = if profile.string_quotes.contains(&quote) {
        CandidateKind::String
    } else if profile.char_quotes.contains(&quote) {
        CandidateKind::Literal
    } else {
        return None;
    };

    let line = &rest[..content_len(rest)];
    let body = &line[quote.len_utf8()..];
    let mut buf = [0u8; 4];
    let len = match find_close(body, quote.encode_utf8(&mut buf), true) {
        Some(end) => quote.len_utf8() + end,
        None => line.len(),
    };
    candidate(kind, len)
}

/// `0x1F`, `42`, `3.14`, `.5`
fn match_number(_: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let bytes = rest.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    if bytes.len() > 2 && bytes[0] == b'0' && matches!(bytes[1], b'x' | b'X') {
        let hex = bytes[2..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        if hex > 0 {
            return candidate(CandidateKind::Number, 2 + hex);
        }
    }

    let int = digits_from(0);
    let len = if int > 0 {
        match bytes.get(int) {
            Some(b'.') if digits_from(int + 1) > 0 => int + 1 + digits_from(int + 1),
            _ => int,
        }
    } else if bytes.first() == Some(&b'.') && digits_from(1) > 0 {
        1 + digits_from(1)
    } else {
        return None;
    };
    candidate(CandidateKind::Number, len)
}

/// Identifier-shaped run; keyword classification happens afterwards on
/// the same span
fn match_word(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let is_extra = |c: char| profile.identifier_extras.contains(&c);
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    if !(first.is_alphabetic() || first == '_' || is_extra(first)) {
        return None;
    }

    let len = chars
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_' || is_extra(c)))
        .map_or(rest.len(), |(i, _)| i);
    candidate(CandidateKind::Word, len)
}

fn match_operator(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    profile
        .operators()
        .iter()
        .find(|op| rest.starts_with(*op))
        .and_then(|op| candidate(CandidateKind::Operator, op.len()))
}

fn match_punctuation(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let c = rest.chars().next()?;
    profile
        .punctuation
        .contains(&c)
        .then(|| candidate(CandidateKind::Punctuation, c.len_utf8()))
        .flatten()
}

fn match_delimiter(profile: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let c = rest.chars().next()?;
    profile
        .delimiters
        .contains(&c)
        .then(|| candidate(CandidateKind::Delimiter, c.len_utf8()))
        .flatten()
}

fn match_whitespace(_: &LanguageProfile, rest: &str) -> Option<Candidate> {
    let len = rest
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(rest.len(), |(i, _)| i);
    candidate(CandidateKind::Whitespace, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LanguageId;
    use proptest::prelude::*;

    fn kinds(result: &AnalysisResult) -> Vec<TokenKind> {
        result.tokens.iter().map(|t| t.kind.clone()).collect()
    }

    fn lexemes(result: &AnalysisResult) -> Vec<&str> {
        result.tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    #[test]
    fn test_javascript_assignment_with_comment() {
        let result = scan("x = 1 + 2 // note", LanguageId::JavaScript.profile());

        assert_eq!(
            kinds(&result),
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Operator,
                TokenKind::Whitespace,
                TokenKind::Number,
                TokenKind::Whitespace,
                TokenKind::Operator,
                TokenKind::Whitespace,
                TokenKind::Number,
                TokenKind::Whitespace,
                TokenKind::Comment,
            ]
        );
        assert_eq!(result.tokens[0].line, Some(1));
        assert_eq!(result.tokens[0].column, Some(1));
        assert_eq!(result.tokens[10].lexeme, "// note");
        assert_eq!(result.tokens[10].column, Some(11));

        let expected: Vec<(String, usize)> = vec![
            ("comment".into(), 1),
            ("identifier".into(), 1),
            ("number".into(), 2),
            ("operator".into(), 2),
            ("whitespace".into(), 5),
        ];
        assert_eq!(result.summary.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_unterminated_block_comment_single_token() {
        for id in [LanguageId::C, LanguageId::Cpp, LanguageId::Java, LanguageId::JavaScript] {
            let result = scan("/* never closed", id.profile());
            assert_eq!(result.tokens.len(), 1, "{}", id);
            assert_eq!(result.tokens[0].kind, TokenKind::Comment);
            assert_eq!(result.tokens[0].lexeme, "/* never closed");
        }
    }

    #[test]
    fn test_block_comment_across_lines() {
        let source = "a /* one\ntwo\nthree */ b";
        let result = scan(source, LanguageId::C.profile());

        assert_eq!(
            lexemes(&result),
            vec!["a", " ", "/* one\n", "two\n", "three */", " ", "b"]
        );
        assert_eq!(result.count(&TokenKind::Comment), 3);
        assert_eq!(result.tokens[4].line, Some(3));
        assert_eq!(result.tokens[4].column, Some(1));
        assert_eq!(result.tokens[6].column, Some(10));
        assert_eq!(result.reconstruct(), source);
    }

    #[test]
    fn test_block_comment_closed_on_same_line() {
        let result = scan("int /* x */ y;", LanguageId::C.profile());
        assert_eq!(
            lexemes(&result),
            vec!["int", " ", "/* x */", " ", "y", ";"]
        );
        assert_eq!(result.tokens[0].kind, TokenKind::Keyword);
        assert_eq!(result.tokens[5].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_comment_open_marker_not_reused_as_close() {
        let mut scanner = Scanner::new(LanguageId::C.profile());
        scanner.feed_line("/*/ still open\n");
        assert_eq!(scanner.mode(), ScanMode::InBlockComment);
        scanner.feed_line("*/");
        assert_eq!(scanner.mode(), ScanMode::Normal);
        assert_eq!(scanner.finish().tokens.len(), 2);
    }

    #[test]
    fn test_python_triple_string_across_lines() {
        let source = "s = \"\"\"first\nsecond\"\"\" + x\n";
        let result = scan(source, LanguageId::Python.profile());

        assert_eq!(
            lexemes(&result),
            vec!["s", " ", "=", " ", "\"\"\"first\n", "second\"\"\"", " ", "+", " ", "x", "\n"]
        );
        assert_eq!(result.count(&TokenKind::String), 2);
        assert_eq!(result.reconstruct(), source);
    }

    #[test]
    fn test_scanner_tracks_multiline_string_mode() {
        let mut scanner = Scanner::new(LanguageId::Python.profile());
        scanner.feed_line("doc = '''start\n");
        assert_eq!(
            scanner.mode(),
            ScanMode::InMultilineString { delimiter: "'''" }
        );
        scanner.feed_line("\"\"\" is not the closer\n");
        assert!(matches!(scanner.mode(), ScanMode::InMultilineString { .. }));
        scanner.feed_line("end'''\n");
        assert_eq!(scanner.mode(), ScanMode::Normal);
        assert_eq!(scanner.state().line, 4);
    }

    #[test]
    fn test_python_hash_comment_and_floor_division() {
        let result = scan("a // b  # halve", LanguageId::Python.profile());
        assert_eq!(lexemes(&result), vec!["a", " ", "//", " ", "b", "  ", "# halve"]);
        assert_eq!(result.tokens[2].kind, TokenKind::Operator);
        assert_eq!(result.tokens[6].kind, TokenKind::Comment);
    }

    #[test]
    fn test_line_comment_leaves_terminator_as_whitespace() {
        let result = scan("// a\r\nb", LanguageId::Java.profile());
        assert_eq!(lexemes(&result), vec!["// a", "\r\n", "b"]);
        assert_eq!(result.tokens[2].line, Some(2));
        assert_eq!(result.tokens[2].column, Some(1));
    }

    #[test]
    fn test_keywords_are_classified_on_identifier_span() {
        let python = LanguageId::Python.profile();
        let result = scan("def define(): return True", python);
        assert_eq!(result.tokens[0].kind, TokenKind::Keyword);
        assert_eq!(result.tokens[2].kind, TokenKind::Identifier);
        assert_eq!(result.tokens[2].lexeme, "define");
        assert_eq!(result.count(&TokenKind::Keyword), 3);

        // `while` in C is always a keyword regardless of context
        let c = LanguageId::C.profile();
        for source in ["while", "(while)", "x=while;", "/**/while"] {
            let result = scan(source, c);
            let hit = result.tokens.iter().find(|t| t.lexeme == "while").unwrap();
            assert_eq!(hit.kind, TokenKind::Keyword, "{source}");
        }
    }

    #[test]
    fn test_maximal_munch_operators() {
        let result = scan("a==b", LanguageId::C.profile());
        assert_eq!(lexemes(&result), vec!["a", "==", "b"]);

        let result = scan("x >>>= 2", LanguageId::JavaScript.profile());
        assert_eq!(result.tokens[2].lexeme, ">>>=");

        let result = scan("a === b", LanguageId::JavaScript.profile());
        assert_eq!(result.tokens[2].lexeme, "===");

        let result = scan("std::cout", LanguageId::Cpp.profile());
        assert_eq!(lexemes(&result), vec!["std", "::", "cout"]);
    }

    #[test]
    fn test_numbers() {
        let c = LanguageId::C.profile();

        let result = scan("1.2.3", c);
        assert_eq!(lexemes(&result), vec!["1.2", ".3"]);
        assert!(result.tokens.iter().all(|t| t.kind == TokenKind::Number));

        let result = scan("0xFF + 42", c);
        assert_eq!(result.tokens[0].lexeme, "0xFF");
        assert_eq!(result.tokens[0].kind, TokenKind::Number);

        let result = scan("7.", c);
        assert_eq!(lexemes(&result), vec!["7", "."]);
        assert_eq!(result.tokens[1].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_string_and_char_literals() {
        let java = LanguageId::Java.profile();
        let result = scan(r#"s = "a\"b"; c = 'x';"#, java);
        assert_eq!(result.tokens[4].lexeme, r#""a\"b""#);
        assert_eq!(result.tokens[4].kind, TokenKind::String);
        let literal = result.tokens.iter().find(|t| t.lexeme == "'x'").unwrap();
        assert_eq!(literal.kind, TokenKind::Literal);

        let js = LanguageId::JavaScript.profile();
        let result = scan("'x' `y`", js);
        assert_eq!(result.count(&TokenKind::String), 2);
    }

    #[test]
    fn test_unterminated_string_stops_at_line_end() {
        let result = scan("x = \"open\ny", LanguageId::C.profile());
        assert_eq!(
            lexemes(&result),
            vec!["x", " ", "=", " ", "\"open", "\n", "y"]
        );
        assert_eq!(result.tokens[4].kind, TokenKind::String);
        assert_eq!(result.tokens[6].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_error_char_recovery() {
        let result = scan("a ` b", LanguageId::C.profile());
        assert_eq!(lexemes(&result), vec!["a", " ", "`", " ", "b"]);
        assert_eq!(result.tokens[2].kind, TokenKind::Error);
        assert_eq!(result.count(&TokenKind::Error), 1);
        assert_eq!(result.count(&TokenKind::Identifier), 2);
    }

    #[test]
    fn test_identifier_extras() {
        let result = scan("$el", LanguageId::JavaScript.profile());
        assert_eq!(lexemes(&result), vec!["$el"]);

        let result = scan("$el", LanguageId::Python.profile());
        assert_eq!(result.tokens[0].kind, TokenKind::Error);
    }

    #[test]
    fn test_columns_count_chars() {
        let result = scan("s = \"héllo\" + x", LanguageId::Python.profile());
        let x = result.tokens.last().unwrap();
        assert_eq!(x.lexeme, "x");
        assert_eq!(x.column, Some(15));
    }

    #[test]
    fn test_empty_source() {
        let result = scan("", LanguageId::Python.profile());
        assert!(result.tokens.is_empty());
        assert!(result.summary.is_empty());
    }

    proptest! {
        #[test]
        fn prop_coverage(source in "[ -~\\t\\n\\r]{0,200}", idx in 0usize..5) {
            let profile = LanguageId::ALL[idx].profile();
            let result = scan(&source, profile);
            prop_assert_eq!(result.reconstruct(), source);
            prop_assert!(result.tokens.iter().all(|t| !t.lexeme.is_empty()));
        }

        #[test]
        fn prop_deterministic(source in "\\PC{0,120}", idx in 0usize..5) {
            let profile = LanguageId::ALL[idx].profile();
            prop_assert_eq!(scan(&source, profile), scan(&source, profile));
        }

        #[test]
        fn prop_summary_matches_tokens(source in "[a-z0-9 =+/*\"'#.\\n]{0,120}", idx in 0usize..5) {
            let result = scan(&source, LanguageId::ALL[idx].profile());
            let total: usize = result.summary.values().sum();
            prop_assert_eq!(total, result.tokens.len());
            prop_assert!(result.summary.values().all(|&n| n > 0));
        }
    }
}
