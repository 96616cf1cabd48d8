//! Lexical analysis of data arguments.
//!
//! A data argument is a whitespace separated list of items:
//!
//! - bare items: `apple`, `42`, `x-ray`
//! - quoted items with escapes: `"New York"`, `"say \"hi\""`
//! - file references: `@fruits.txt`, `@"my data.txt"`
//!
//! [`tokenize`] recovers after an error by skipping to the next whitespace,
//! or past the closing quote when the error sits inside quotes, so one pass
//! reports every broken item.

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, eof, peek, repeat, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{none_of, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A bare or quoted item with escapes resolved
    Item(String),
    /// The path following `@`
    FileRef(String),
    Whitespace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionedToken {
    pub token: Token,
    pub span: Span,
}

/// Diagnostic context attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LexerDiagnostic>>;

/// Parse an escape sequence inside quotes, starting at the backslash.
fn escape(input: &mut Input<'_>) -> IResult<char> {
    let escape_start = input.current_token_start();

    '\\'.parse_next(input)?;

    cut_err(one_of(['"', '\\', 'n', 'r', 't']).map(|c| match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }))
    .context(LexerDiagnostic {
        code: ErrorCode::E003,
        message: "invalid escape sequence",
        help: Some("valid escapes: `\\\"`, `\\\\`, `\\n`, `\\r`, `\\t`"),
        start: escape_start,
    })
    .parse_next(input)
}

/// Parse a double-quoted string and return its unescaped content.
fn quoted_text(input: &mut Input<'_>) -> IResult<String> {
    let start = input.current_token_start();

    '"'.parse_next(input)?;

    let content = repeat(0.., alt((escape, none_of(['"', '\\'])))).fold(
        String::new,
        |mut acc, ch| {
            acc.push(ch);
            acc
        },
    );

    // Commit after the opening quote
    cut_err(terminated(content, '"'))
        .context(LexerDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated quoted item",
            help: Some("add a closing `\"`"),
            start,
        })
        .parse_next(input)
}

fn bare_text<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '"').parse_next(input)
}

/// Require whitespace or the end of input after an item.
fn item_end(input: &mut Input<'_>) -> IResult<()> {
    let start = input.current_token_start();

    cut_err(peek(alt((eof.void(), one_of(char::is_whitespace).void()))))
        .context(LexerDiagnostic {
            code: ErrorCode::E002,
            message: "items must be separated by whitespace",
            help: Some("insert a space, or quote the whole item"),
            start,
        })
        .parse_next(input)
}

fn quoted_item(input: &mut Input<'_>) -> IResult<Token> {
    terminated(quoted_text, item_end)
        .map(Token::Item)
        .parse_next(input)
}

/// Parse `@path` or `@"path with spaces"`.
fn file_ref(input: &mut Input<'_>) -> IResult<Token> {
    let start = input.current_token_start();

    '@'.parse_next(input)?;

    let path = cut_err(alt((quoted_text, bare_text.map(|path: &str| path.to_owned()))))
        .context(LexerDiagnostic {
            code: ErrorCode::E004,
            message: "empty file reference",
            help: Some("write the path right after `@`, e.g. `@items.txt`"),
            start,
        })
        .parse_next(input)?;

    item_end(input)?;
    Ok(Token::FileRef(path))
}

fn bare_item(input: &mut Input<'_>) -> IResult<Token> {
    terminated(bare_text, item_end)
        .map(|item: &str| Token::Item(item.to_owned()))
        .parse_next(input)
}

fn whitespace(input: &mut Input<'_>) -> IResult<Token> {
    take_while(1.., char::is_whitespace)
        .value(Token::Whitespace)
        .parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token(input: &mut Input<'_>) -> IResult<PositionedToken> {
    let start_pos = input.current_token_start();

    let token = alt((
        whitespace,
        quoted_item,
        file_ref,  // Must come before bare items
        bare_item,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken {
        token,
        span: Span::new(start_pos..end_pos),
    })
}

/// Skip past the closing quote of a string whose escape at the current
/// position was rejected, or to the end of input if it is never closed.
fn skip_quoted_rest(input: &mut Input<'_>) {
    // The rejected escape character is string content
    if input.next_token().is_none() {
        return;
    }
    while let Some(c) = input.next_token() {
        match c {
            '"' => return,
            '\\' => {
                input.next_token();
            }
            _ => {}
        }
    }
}

/// Lexer that accumulates tokens and diagnostics during tokenization.
struct Lexer {
    tokens: Vec<PositionedToken>,
    diagnostics: DiagnosticCollector,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn tokenize(&mut self, mut input: Input<'_>) {
        while !input.is_empty() {
            let token_start = input.current_token_start();
            match positioned_token(&mut input) {
                Ok(token) => {
                    if token.token == Token::Item(String::new()) {
                        self.diagnostics.emit(
                            Diagnostic::warning("empty quoted item")
                                .with_label(token.span, "this item is the empty string")
                                .with_help("remove the quotes if no item was intended"),
                        );
                    }
                    self.tokens.push(token);
                }
                Err(e) => {
                    let error_pos = input.current_token_start();
                    let next_len = input.chars().next().map_or(0, char::len_utf8);
                    let diagnostic = Self::convert_err_mode(e, error_pos, next_len);
                    if diagnostic.code() == Some(ErrorCode::E003) {
                        skip_quoted_rest(&mut input);
                    }
                    self.diagnostics.emit(diagnostic);

                    // Skip the rest of the broken item
                    while input.chars().next().is_some_and(|c| !c.is_whitespace()) {
                        input.next_token();
                    }
                    if input.current_token_start() == token_start {
                        input.next_token();
                    }
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<PositionedToken>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Empty spans are widened to cover the next character (`next_len`
    /// bytes). Falls back to E002 when no context is attached.
    fn convert_err_mode(
        err: ErrMode<ContextError<LexerDiagnostic>>,
        error_pos: usize,
        next_len: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        let widen = |start: usize| {
            if start < error_pos {
                Span::new(start..error_pos)
            } else {
                Span::new(error_pos..error_pos + next_len)
            }
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(widen(*start), code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        Diagnostic::error("unexpected character")
            .with_code(ErrorCode::E002)
            .with_label(widen(error_pos), ErrorCode::E002.description())
    }
}

/// Tokenize a data argument, collecting every error.
///
/// Warnings (such as empty quoted items) are logged and do not fail.
pub(crate) fn tokenize(input: &str) -> Result<Vec<PositionedToken>, ParseError> {
    let mut lexer = Lexer::new();
    lexer.tokenize(LocatingSlice::new(input));
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|positioned| positioned.token)
            .collect()
    }

    fn item(value: &str) -> Token {
        Token::Item(value.to_string())
    }

    fn error_codes(input: &str) -> Vec<ErrorCode> {
        tokenize(input)
            .unwrap_err()
            .diagnostics()
            .iter()
            .filter_map(Diagnostic::code)
            .collect()
    }

    #[test]
    fn test_bare_items() {
        assert_eq!(
            tokens("apple  banana\tcherry"),
            vec![
                item("apple"),
                Token::Whitespace,
                item("banana"),
                Token::Whitespace,
                item("cherry"),
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokens("").is_empty());
        assert_eq!(tokens("   \n "), vec![Token::Whitespace]);
    }

    #[test]
    fn test_quoted_items() {
        assert_eq!(
            tokens(r#""New York" Paris"#),
            vec![item("New York"), Token::Whitespace, item("Paris")]
        );
        assert_eq!(tokens(r#""""#), vec![item("")]);
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(tokens(r#""say \"hi\"""#), vec![item("say \"hi\"")]);
        assert_eq!(tokens(r#""a\\b""#), vec![item("a\\b")]);
        assert_eq!(tokens(r#""tab\there\nnext\r""#), vec![item("tab\there\nnext\r")]);
    }

    #[test]
    fn test_backslash_is_literal_outside_quotes() {
        assert_eq!(tokens(r"C:\data"), vec![item(r"C:\data")]);
    }

    #[test]
    fn test_file_references() {
        assert_eq!(
            tokens(r#"@items.txt x @"my data.txt""#),
            vec![
                Token::FileRef("items.txt".to_string()),
                Token::Whitespace,
                item("x"),
                Token::Whitespace,
                Token::FileRef("my data.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_at_sign_inside_item_is_literal() {
        assert_eq!(tokens("me@example.org"), vec![item("me@example.org")]);
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize(r#"ab "c d" @f"#).unwrap();
        assert_eq!(tokens[0].span, Span::new(0..2));
        assert_eq!(tokens[2].span, Span::new(3..8));
        assert_eq!(tokens[4].span, Span::new(9..11));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = tokenize(r#"a "bc"#).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.labels()[0].span(), Span::new(2..5));
        assert_eq!(diag.help(), Some("add a closing `\"`"));
    }

    #[test]
    fn test_invalid_escape() {
        let err = tokenize(r#""a\qb" c"#).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E003));
        assert_eq!(diag.labels()[0].span(), Span::new(2..3));
        // Recovery resumes at the next whitespace
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_invalid_escape_before_space_in_quotes() {
        let err = tokenize(r#""a\q b" c"#).unwrap_err();

        assert_eq!(err.diagnostics().len(), 1, "{:?}", err.diagnostics());
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E003));
        assert_eq!(err.diagnostics()[0].labels()[0].span(), Span::new(2..3));
    }

    #[test]
    fn test_invalid_escape_in_quoted_file_reference() {
        assert_eq!(
            error_codes(r#"@"my\q data.txt" ok"#),
            vec![ErrorCode::E003]
        );
    }

    #[test]
    fn test_missing_separator() {
        let err = tokenize(r#""a"b"#).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E002));
        assert_eq!(diag.labels()[0].span(), Span::new(3..4));
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_empty_file_reference() {
        let err = tokenize("a @ b").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E004));
        assert_eq!(diag.labels()[0].span(), Span::new(2..3));
    }

    #[test]
    fn test_multiple_errors_in_one_pass() {
        assert_eq!(
            error_codes(r#"@ ok "x\z" fine "open"#),
            vec![ErrorCode::E004, ErrorCode::E003, ErrorCode::E001]
        );
    }

    #[test]
    fn test_empty_quoted_item_is_only_a_warning() {
        assert!(tokenize(r#"a "" b"#).is_ok());
    }
}
