use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::Token,
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Returned by [`Parser::peek`] once the cursor runs past the last token.
static END_OF_INPUT: Token = Token::Eof;

/// Parser state: the token sequence and a cursor into it.
///
/// All grammar functions are methods on this type and advance `position` as
/// they consume tokens. Lookahead that may fail saves and restores `position`
/// explicitly (see [`Parser::is_definition`]).
pub struct Parser<'a> {
    tokens:   &'a [(Token, usize)],
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back to a position previously returned by
    /// [`Parser::position`].
    pub(crate) const fn restore(&mut self, position: usize) {
        self.position = position;
    }

    /// Returns the current token and its line without consuming it.
    ///
    /// Past the end of the slice this keeps answering [`Token::Eof`] on the
    /// last known line.
    pub(crate) fn peek(&self) -> (&'a Token, usize) {
        match self.tokens.get(self.position) {
            Some((tok, line)) => (tok, *line),
            None => (&END_OF_INPUT, self.tokens.last().map_or(1, |(_, line)| *line)),
        }
    }

    /// Returns `true` if the current token is `expected`.
    pub(crate) fn check(&self, expected: &Token) -> bool {
        self.peek().0 == expected
    }

    /// Returns `true` once the cursor sits on the end-of-input marker.
    pub(crate) fn at_end(&self) -> bool {
        self.check(&Token::Eof)
    }

    /// Consumes and returns the current token. The end marker is never
    /// consumed.
    pub(crate) fn advance(&mut self) -> (&'a Token, usize) {
        let current = self.peek();
        if !self.at_end() {
            self.position += 1;
        }
        current
    }

    /// Consumes the current token if it is `expected`.
    pub(crate) fn eat(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes `expected` or fails with an error naming what was required.
    ///
    /// # Returns
    /// The line of the consumed token.
    pub(crate) fn expect(&mut self, expected: &Token, description: &'static str)
                         -> ParseResult<usize> {
        if self.check(expected) {
            return Ok(self.advance().1);
        }
        Err(self.unexpected(description))
    }

    /// Builds the error for the current token given what was expected.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            (Token::Eof, line) => ParseError::UnexpectedEndOfInput { expected, line },
            (tok, line) => ParseError::UnexpectedToken { token: tok.to_string(),
                                                         expected,
                                                         line },
        }
    }

    /// Parses the whole token sequence into a program.
    ///
    /// Statements are parsed one after another until the end-of-input marker.
    ///
    /// Grammar: `program := statement* EOF`
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while !self.at_end() {
            statements.push(self.parse_statement()?);
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing.
    /// It begins at the lowest-precedence level, `|`, and recursively
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := logical_or`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_logical_or())
    }
}

/// Parses a token sequence produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize) into a program.
///
/// # Errors
/// Returns a `ParseError` for any unexpected token, missing delimiter or
/// malformed definition header.
///
/// # Example
/// ```
/// use mexpr::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("f(x) = x * 2 f(21)").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, FunctionDef, LiteralValue, Statement, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse_source(source: &str) -> ParseResult<Program> {
        parse(&tokenize(source).unwrap())
    }

    fn single_expression(source: &str) -> Expr {
        let program = parse_source(source).unwrap();
        assert_eq!(program.statements.len(), 1);
        match program.statements.into_iter().next() {
            Some(Statement::Expression { expr, .. }) => expr,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    fn int(value: i64) -> Expr {
        Expr::Literal { value: LiteralValue::Integer(value),
                        line:  1, }
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier { name: name.to_string(),
                           line: 1, }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line: 1 }
    }

    #[test]
    fn empty_program_has_no_statements() {
        assert_eq!(parse_source("").unwrap(), Program::default());
        assert_eq!(parse_source("'only a comment'").unwrap(), Program::default());
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(single_expression("1 + 2 * 3"),
                   binary(int(1), BinaryOperator::Add, binary(int(2), BinaryOperator::Mul, int(3))));
    }

    #[test]
    fn operators_are_left_associative() {
        assert_eq!(single_expression("8 - 4 - 2"),
                   binary(binary(int(8), BinaryOperator::Sub, int(4)),
                          BinaryOperator::Sub,
                          int(2)));
        assert_eq!(single_expression("1 < 2 < 3"),
                   binary(binary(int(1), BinaryOperator::Less, int(2)),
                          BinaryOperator::Less,
                          int(3)));
    }

    #[test]
    fn precedence_ladder_from_or_to_comparison() {
        assert_eq!(single_expression("1 | 2 & 3 ^ 4 > 5"),
                   binary(int(1),
                          BinaryOperator::Or,
                          binary(int(2),
                                 BinaryOperator::And,
                                 binary(int(3),
                                        BinaryOperator::Equal,
                                        binary(int(4), BinaryOperator::Greater, int(5))))));
    }

    #[test]
    fn unary_minus_nests_and_binds_tighter_than_multiplication() {
        let negate = |expr| Expr::UnaryOp { op:   UnaryOperator::Negate,
                                            expr: Box::new(expr),
                                            line: 1, };
        assert_eq!(single_expression("--x * 2"),
                   binary(negate(negate(ident("x"))), BinaryOperator::Mul, int(2)));
    }

    #[test]
    fn postfix_chains_apply_left_to_right() {
        let call_f = Expr::Call { callee:    Box::new(ident("f")),
                                  arguments: vec![ident("x")],
                                  line:      1, };
        let index = Expr::Index { target: Box::new(call_f),
                                  index:  Box::new(int(0)),
                                  line:   1, };
        let expected = Expr::Call { callee:    Box::new(index),
                                    arguments: vec![ident("y")],
                                    line:      1, };
        assert_eq!(single_expression("f(x)[0](y)"), expected);
    }

    #[test]
    fn leading_bracket_is_a_vector_literal_and_trailing_bracket_an_index() {
        let vector = Expr::VectorLiteral { elements: vec![int(1), int(2), int(3)],
                                           line:     1, };
        assert_eq!(single_expression("[1, 2, 3][1]"),
                   Expr::Index { target: Box::new(vector),
                                 index:  Box::new(int(1)),
                                 line:   1, });
        assert_eq!(single_expression("[]"),
                   Expr::VectorLiteral { elements: vec![],
                                         line:     1, });
    }

    #[test]
    fn booleans_are_literals() {
        assert_eq!(single_expression("!"),
                   Expr::Literal { value: LiteralValue::Bool(true),
                                   line:  1, });
    }

    #[test]
    fn definitions_are_detected() {
        let program = parse_source("add(a, b) = a + b\nadd(1, 2)").unwrap();
        assert_eq!(program.statements[0],
                   Statement::Definition(FunctionDef { name:   "add".to_string(),
                                                       params: vec!["a".to_string(),
                                                                    "b".to_string()],
                                                       body:   Rc::new(binary(ident("a"),
                                                                              BinaryOperator::Add,
                                                                              ident("b"))),
                                                       line:   1, }));
        assert!(matches!(program.statements[1], Statement::Expression { line: 2, .. }));
    }

    #[test]
    fn call_without_equals_is_an_expression() {
        let program = parse_source("f(g(1), 2)").unwrap();
        assert!(matches!(program.statements[0], Statement::Expression { .. }));
    }

    #[test]
    fn zero_parameter_definition() {
        let program = parse_source("five() = 5").unwrap();
        assert!(matches!(&program.statements[0],
                         Statement::Definition(FunctionDef { params, .. }) if params.is_empty()));
    }

    #[test]
    fn non_identifier_parameter_is_rejected() {
        assert!(matches!(parse_source("f(1) = 2"),
                         Err(ParseError::InvalidParameter { .. })));
        assert!(matches!(parse_source("f(g(x)) = 2"),
                         Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn missing_closing_delimiters_are_reported() {
        assert!(matches!(parse_source("(1 + 2"),
                         Err(ParseError::UnexpectedEndOfInput { expected: "')'", .. })));
        assert!(matches!(parse_source("[1, 2"),
                         Err(ParseError::UnexpectedEndOfInput { expected: "']'", .. })));
        assert!(matches!(parse_source("v[1"),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn stray_tokens_are_reported() {
        assert!(matches!(parse_source("1 + )"),
                         Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse_source("x = 5"),
                         Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse_source("[1,]"),
                         Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn unbalanced_probe_falls_back_to_expression_parsing() {
        assert!(matches!(parse_source("f((1)"),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn probe_restores_the_cursor() {
        let tokens = tokenize("f(x) + 1").unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(!parser.is_definition());
        assert_eq!(parser.position(), 0);

        let tokens = tokenize("f(x) = 1").unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(parser.is_definition());
        assert_eq!(parser.position(), 0);
    }

    #[test]
    fn statements_and_expressions_record_their_lines() {
        let program = parse_source("1\n'note'\nf(x) =\n  x\n\nf(2)").unwrap();
        let lines = program.statements.iter().map(Statement::line_number).collect::<Vec<_>>();
        assert_eq!(lines, vec![1, 3, 6]);

        match &program.statements[1] {
            Statement::Definition(def) => assert_eq!(def.body.line_number(), 4),
            other => panic!("expected a definition, got {other:?}"),
        }
    }

    #[test]
    fn deeply_nested_trees_parse_and_drop() {
        let negations = format!("{}1", "-".repeat(100_000));
        assert_eq!(parse_source(&negations).unwrap().statements.len(), 1);

        let chain = vec!["1"; 100_000].join("+");
        assert_eq!(parse_source(&chain).unwrap().statements.len(), 1);
    }

    #[test]
    fn missing_eof_marker_is_tolerated() {
        let tokens = vec![(Token::Integer(1), 1)];
        assert_eq!(parse(&tokens).unwrap().statements.len(), 1);
    }
}
