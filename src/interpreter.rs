/// The evaluator module executes the syntax tree and computes results.
///
/// The evaluator walks the tree directly, resolving identifiers through the
/// environment chain, applying operators and calling closures. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression form and both statement kinds.
/// - Creates closures from definitions and applies them with fresh frames.
/// - Reports runtime errors such as division by zero, bad indices or arity
///   mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// paired with the line it appears on. Whitespace and `'...'` comments are
/// dropped here. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into line-tagged tokens.
/// - Recognizes integers, the boolean literals `!` and `?`, identifiers,
///   operators and delimiters.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is recursive descent with one function per precedence level.
/// It decides between definitions and expressions with a bounded lookahead
/// that never consumes input.
///
/// # Responsibilities
/// - Converts tokens into `Program`, `Statement` and `Expr` nodes.
/// - Validates the grammar, reporting errors with the offending token and
///   its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, vectors of values and closures. Booleans are not a
/// separate type; they evaluate to `1` and `0`.
pub mod value;
/// Lexical scope frames.
///
/// An environment maps names to values and links to the frame it was created
/// in. Closures capture the frame current at their definition.
pub mod environment;
