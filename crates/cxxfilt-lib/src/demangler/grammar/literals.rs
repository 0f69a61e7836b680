//! Literal and expression productions.
//!
//! Expressions cover the subset that shows up in real template arguments
//! (`X … E`) and decltype signatures: function-parameter references,
//! literals, template parameters, scope resolution, member access, and
//! infix operators. Anything else fails the parse.

use crate::demangler::Parser;
use crate::{Error, Result};

use super::super::tables;

impl Parser<'_> {
    /// `<expr-primary> ::= L <type code> <value> E | L _Z <name> E`
    pub(crate) fn parse_expr_primary(&mut self) -> Result<()> {
        self.expect("L")?;
        let Some(code) = self.byte_at(0) else {
            return Err(Error::Syntax);
        };
        match code {
            b's' | b'i' | b'l' | b'x' => {
                self.pos += 1;
                if self.eat("n") {
                    self.append("-")?;
                }
                let digits = self.digit_run(false);
                self.append(digits)?;
            }
            b't' | b'j' | b'm' | b'y' => {
                self.pos += 1;
                let digits = self.digit_run(false);
                self.append(digits)?;
            }
            b'b' => {
                self.pos += 1;
                let digits = self.digit_run(false);
                match digits {
                    "0" => self.append("false")?,
                    "1" => self.append("true")?,
                    _ => {
                        self.append("(bool)")?;
                        self.append(digits)?;
                    }
                }
            }
            b'f' | b'd' | b'e' => {
                self.pos += 1;
                let digits = self.digit_run(true);
                self.append(match code {
                    b'f' => "(float){",
                    b'd' => "(double){",
                    _ => "(long double){",
                })?;
                self.append(digits)?;
                self.append("}")?;
            }
            b'c' | b'a' | b'h' => {
                self.pos += 1;
                let digits = self.digit_run(false);
                self.append(match code {
                    b'c' => "(char)",
                    b'a' => "(signed char)",
                    _ => "(unsigned char)",
                })?;
                self.append(digits)?;
            }
            b'A' => {
                // string literal: only the length survives mangling
                self.pos += 1;
                let len = self.number()?;
                self.expect("_")?;
                if self.eat("Kc") {
                    self.append("\"")?;
                } else if self.eat("Kw") {
                    self.append("L\"")?;
                }
                for _ in 0..len {
                    self.append("?")?;
                }
                self.append("\"")?;
            }
            b'D' if self.peek("Dn") => {
                self.pos += 2;
                self.append("nullptr")?;
            }
            b'_' if self.peek("_Z") => {
                self.pos += 2;
                self.parse_name()?;
            }
            _ => return Err(Error::Syntax),
        }
        self.expect("E")
    }

    pub(crate) fn parse_expression(&mut self) -> Result<()> {
        self.enter_recursion()?;
        let result = self.expression_inner();
        self.exit_recursion();
        result
    }

    fn expression_inner(&mut self) -> Result<()> {
        if self.eat("fp") {
            let seq = if self.at_digit() { self.number()? + 1 } else { 0 };
            self.expect("_")?;
            self.append("{parm#")?;
            self.append(&seq.to_string())?;
            self.append("}")
        } else if self.at_template_param() {
            self.parse_template_param()
        } else if self.peek("L") {
            self.parse_expr_primary()
        } else if self.eat("sr") {
            self.parse_type()?;
            self.append("::")?;
            self.parse_unqualified_name()
        } else if self.eat("dt") {
            self.parse_expression()?;
            self.append(".")?;
            self.parse_expression()
        } else if let Some((code, symbol)) = tables::operator(self.rest()) {
            if code == "cv" {
                return Err(Error::Syntax);
            }
            self.pos += 2;
            self.parse_expression()?;
            self.append(symbol)?;
            self.parse_expression()
        } else {
            Err(Error::Syntax)
        }
    }
}
