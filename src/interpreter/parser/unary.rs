use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Prefix minus is right-associative, so `--x` is parsed as `-(-x)`.
    /// Without a prefix operator the function parses a primary expression and
    /// then folds in any postfix calls and indices via [`Parser::parse_postfix`].
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | primary postfix*
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let (Token::Minus, line) = self.peek() {
            self.advance();
            let expr = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                      expr: Box::new(expr),
                                      line });
        }
        let primary = self.parse_primary()?;
        self.parse_postfix(primary)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the expression grammar:
    /// - integer and boolean literals
    /// - identifiers
    /// - parenthesized expressions
    /// - vector literals (`[ ... ]`)
    ///
    /// A `[` reaching this point always starts a vector literal; brackets
    /// after an expression are handled by [`Parser::parse_postfix`] instead.
    ///
    /// Grammar (simplified):
    /// ```text
    ///     primary := INTEGER | BOOL | IDENTIFIER
    ///              | "(" expression ")"
    ///              | "[" elements "]"
    /// ```
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            (Token::Integer(n), line) => {
                self.advance();
                Ok(Expr::Literal { value: LiteralValue::from(*n),
                                   line })
            },
            (Token::Bool(b), line) => {
                self.advance();
                Ok(Expr::Literal { value: LiteralValue::from(*b),
                                   line })
            },
            (Token::Identifier(name), line) => {
                self.advance();
                Ok(Expr::Identifier { name: name.clone(),
                                      line })
            },
            (Token::LParen, _) => self.parse_grouping(),
            (Token::LBracket, _) => self.parse_vector_literal(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses postfix operators applied to an expression.
    ///
    /// Two kinds of postfix constructs can be chained in any order:
    ///
    /// 1. **Calls** `expr(arg1, arg2)`
    /// 2. **Indexing** `expr[index]`
    ///
    /// so `f(x)[0](y)` is a call of the element at index `0` of `f(x)`.
    ///
    /// Grammar:
    /// ```text
    ///     postfix := "(" (expression ("," expression)*)? ")"
    ///              | "[" expression "]"
    /// ```
    pub(crate) fn parse_postfix(&mut self, mut node: Expr) -> ParseResult<Expr> {
        loop {
            match self.peek() {
                (Token::LParen, line) => {
                    self.advance();
                    let arguments =
                        self.parse_comma_separated(Self::parse_expression, &Token::RParen, "')'")?;
                    node = Expr::Call { callee: Box::new(node),
                                        arguments,
                                        line };
                },
                (Token::LBracket, line) => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(&Token::RBracket, "']' after index")?;
                    node = Expr::Index { target: Box::new(node),
                                         index: Box::new(index),
                                         line };
                },
                _ => break,
            }
        }
        Ok(node)
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    ///
    /// # Returns
    /// The inner expression as-is (no wrapper node).
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen, "'('")?;
        let expr = self.parse_expression()?;
        self.expect(&Token::RParen, "')'")?;
        Ok(expr)
    }

    /// Parses a vector literal of the form `[expr1, expr2, ..., exprN]`.
    ///
    /// An empty vector `[]` is accepted; a trailing comma is not.
    fn parse_vector_literal(&mut self) -> ParseResult<Expr> {
        let line = self.expect(&Token::LBracket, "'['")?;
        let elements =
            self.parse_comma_separated(Self::parse_expression, &Token::RBracket, "']'")?;
        Ok(Expr::VectorLiteral { elements, line })
    }
}
