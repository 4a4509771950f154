use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is either a function definition or an expression. The
    /// choice is made by [`Parser::is_definition`] without consuming input.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.is_definition() {
            return Ok(Statement::Definition(self.parse_function_definition()?));
        }

        let line = self.peek().1;
        let expr = self.parse_expression()?;
        Ok(Statement::Expression { expr, line })
    }

    /// Checks whether a function definition starts at the cursor.
    ///
    /// This function identifies a definition by checking:
    /// 1. The current token is an identifier.
    /// 2. It is immediately followed by `(`.
    /// 3. A matching `)` exists (nested parentheses inside are allowed).
    /// 4. The token after the closing `)` is `=`.
    ///
    /// The cursor is restored before returning, whatever the outcome. Running
    /// into the end of input while parentheses are still open means "not a
    /// definition"; the expression parser then reports the real error.
    pub(crate) fn is_definition(&mut self) -> bool {
        let start = self.position();
        let found = self.probe_definition_header();
        self.restore(start);
        found
    }

    /// Walks over `identifier ( ... ) =` and reports whether it matched.
    /// Leaves the cursor wherever the walk stopped.
    fn probe_definition_header(&mut self) -> bool {
        if !matches!(self.peek().0, Token::Identifier(_)) {
            return false;
        }
        self.advance();
        if !self.eat(&Token::LParen) {
            return false;
        }

        let mut depth = 1usize;
        while depth > 0 {
            match self.advance().0 {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                Token::Eof => return false,
                _ => {},
            }
        }

        self.check(&Token::Equals)
    }

    /// Parses a function definition of the form
    /// `<name>(param1, param2, ...) = <expression>`.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - a parameter is not a bare identifier,
    /// - `)` or `=` is missing,
    /// - the body expression fails to parse.
    pub(crate) fn parse_function_definition(&mut self) -> ParseResult<FunctionDef> {
        let (name, line) = match self.peek() {
            (Token::Identifier(name), line) => (name.clone(), line),
            _ => return Err(self.unexpected("a function name")),
        };
        self.advance();
        self.expect(&Token::LParen, "'(' after function name")?;

        let params = self.parse_comma_separated(Self::parse_parameter, &Token::RParen, "')'")?;
        self.expect(&Token::Equals, "'=' after parameter list")?;

        let body = self.parse_expression()?;
        Ok(FunctionDef { name,
                         params,
                         body: body.into(),
                         line })
    }
}
