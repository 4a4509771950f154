use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Identifier tokens, such as `x` or `fact`.
    ///
    /// A letter or `_`, then letters only. Digits end an identifier, so `x1`
    /// is the identifier `x` followed by the integer `1`.
    #[regex(r"[\p{L}_]\p{L}*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens: `!` is true and `?` is false.
    #[token("!", parse_bool)]
    #[token("?", parse_bool)]
    Bool(bool),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^` (equality)
    #[token("^")]
    Caret,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `'Comments between single quotes.'`
    #[regex(r"'[^']*'", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    }, allow_greedy = true)]
    Comment,
    /// A `'` with no closing partner. Never reaches the parser.
    #[regex(r"'[^']*", allow_greedy = true)]
    UnterminatedComment,
    /// Whitespace of any kind.
    #[regex(r"\p{White_Space}+", |lex| {
        lex.extras.line += lex.slice().chars().filter(|&c| c == '\n').count();
        logos::Skip
    })]
    Whitespace,
    /// End of input. Appended by [`tokenize`], never matched.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`!` or `?`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "!" => Some(true),
        "?" => Some(false),
        _ => None,
    }
}

/// Converts source text into a token sequence.
///
/// Each token is paired with the line it appears on. Whitespace and comments
/// are skipped, and the sequence always ends with [`Token::Eof`].
///
/// # Errors
/// - `UnexpectedCharacter` for a character that starts no token.
/// - `UnterminatedComment` when the input ends inside a comment.
/// - `IntegerTooLarge` for an integer literal outside the `i64` range.
///
/// # Example
/// ```
/// use mexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("'ignored' 5").unwrap();
/// assert_eq!(tokens, vec![(Token::Integer(5), 1), (Token::Eof, 1)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(Token::UnterminatedComment) => return Err(LexError::UnterminatedComment { line }),
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => return Err(classify_error(lexer.slice(), line)),
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Maps a slice the lexer rejected to the matching error.
///
/// An all-digit slice can only fail through the integer callback, so it is an
/// out-of-range literal; anything else is a stray character.
fn classify_error(slice: &str, line: usize) -> LexError {
    if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        return LexError::IntegerTooLarge { literal: slice.to_string(),
                                           line };
    }
    LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\u{FFFD}'),
                                    line }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Bool(true) => write!(f, "'!'"),
            Self::Bool(false) => write!(f, "'?'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Equals => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::Greater => write!(f, "'>'"),
            Self::Less => write!(f, "'<'"),
            Self::Ampersand => write!(f, "'&'"),
            Self::Pipe => write!(f, "'|'"),
            Self::Comment | Self::UnterminatedComment => write!(f, "comment"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}
