use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by vector literals, call argument lists and
    /// definition headers. It repeatedly calls `parse_item` to parse one
    /// element, expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - the specified closing token, to end it.
    ///
    /// An immediately encountered closing token produces an empty list. The
    /// opening delimiter must already be consumed.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The token that terminates the list (e.g. `]` or `)`).
    /// - `closing_name`: How the closing token is named in errors.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: fn(&mut Self) -> ParseResult<T>,
        closing: &Token,
        closing_name: &'static str)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.eat(closing) {
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(closing, closing_name)?;
            break;
        }
        Ok(items)
    }

    /// Parses a plain identifier in parameter position and returns its name.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the current token is anything other than
    /// an identifier, or `UnexpectedEndOfInput` at the end of input.
    pub(in crate::interpreter::parser) fn parse_parameter(&mut self) -> ParseResult<String> {
        match self.peek() {
            (Token::Identifier(name), _) => {
                self.advance();
                Ok(name.clone())
            },
            (Token::Eof, _) => Err(self.unexpected("a parameter name")),
            (tok, line) => Err(ParseError::InvalidParameter { token: tok.to_string(),
                                                              line }),
        }
    }
}
