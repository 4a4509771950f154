use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses `|` expressions, the lowest precedence level.
    ///
    /// The rule is: `logical_or := logical_and ("|" logical_and)*`
    pub(crate) fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_logical_and, |op| matches!(op, BinaryOperator::Or))
    }

    /// Parses `&` expressions.
    ///
    /// The rule is: `logical_and := equality ("&" equality)*`
    pub(crate) fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_equality, |op| matches!(op, BinaryOperator::And))
    }

    /// Parses `^` (equality) expressions.
    ///
    /// The rule is: `equality := relational ("^" relational)*`
    pub(crate) fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_relational, |op| {
                matches!(op, BinaryOperator::Equal)
            })
    }

    /// Parses `>` and `<` expressions.
    ///
    /// Repeated comparisons fold to the left: `a < b < c` is `(a < b) < c`.
    ///
    /// The rule is: `relational := additive ((">" | "<") additive)*`
    pub(crate) fn parse_relational(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_additive, |op| {
                matches!(op, BinaryOperator::Greater | BinaryOperator::Less)
            })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_multiplicative, |op| {
                matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            })
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_unary, |op| {
                matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            })
    }

    /// Parses one left-associative precedence level.
    ///
    /// Operands come from `operand`; the loop continues while the current
    /// token maps to an operator accepted by `accepts`.
    ///
    /// # Parameters
    /// - `operand`: Parser for the next-higher precedence level.
    /// - `accepts`: Whether an operator belongs to this level.
    fn parse_left_associative(&mut self,
                              operand: fn(&mut Self) -> ParseResult<Expr>,
                              accepts: fn(BinaryOperator) -> bool)
                              -> ParseResult<Expr> {
        let mut left = operand(self)?;
        loop {
            let (token, line) = self.peek();
            match token_to_binary_operator(token) {
                Some(op) if accepts(op) => {
                    self.advance();
                    let right = operand(self)?;
                    left = Expr::BinaryOp { left: Box::new(left),
                                            op,
                                            right: Box::new(right),
                                            line };
                },
                _ => break,
            }
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use mexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Equal));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Equal),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Less => Some(BinaryOperator::Less),
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
