//! Back-reference productions and template argument lists.

use crate::demangler::Parser;
use crate::{Error, Result};

impl Parser<'_> {
    /// True at `S` introducing a numbered substitution. Lower-case second
    /// bytes belong to the predefined `St`/`Sa`/… abbreviations instead.
    pub(crate) fn at_substitution(&self) -> bool {
        self.peek("S")
            && self
                .byte_at(1)
                .is_some_and(|b| b.is_ascii_digit() || b.is_ascii_uppercase() || b == b'_')
    }

    pub(crate) fn at_template_param(&self) -> bool {
        self.peek("T")
            && self
                .byte_at(1)
                .is_some_and(|b| b.is_ascii_digit() || b == b'_')
    }

    /// Table index the `T…_` token at the cursor would refer to, without
    /// consuming anything.
    pub(crate) fn peek_template_param_index(&self) -> Option<usize> {
        if !self.at_template_param() {
            return None;
        }
        let rest = &self.rest()[1..];
        if rest.starts_with('_') {
            return Some(0);
        }
        let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if rest.as_bytes().get(digits) != Some(&b'_') {
            return None;
        }
        let n: usize = rest[..digits].parse().ok()?;
        Some(n + 1)
    }

    /// `<substitution> ::= S_ | S <base-36 seq-id> _`
    ///
    /// `S_` is entry 0, `S0_` entry 1, `Sa_` entry 11, and so on.
    pub(crate) fn parse_substitution(&mut self) -> Result<()> {
        self.expect("S")?;
        let mut index = 0usize;
        if !self.peek("_") {
            while !self.peek("_") && !self.on_sentinel() {
                let digit = match self.byte_at(0) {
                    Some(b) if b.is_ascii_digit() => (b - b'0') as usize,
                    Some(b) if b.is_ascii_uppercase() => (b - b'A' + 10) as usize,
                    _ => return Err(Error::Syntax),
                };
                index = index
                    .checked_mul(36)
                    .and_then(|i| i.checked_add(digit))
                    .ok_or(Error::Syntax)?;
                self.pos += 1;
            }
            index += 1;
        }
        self.expect("_")?;
        let text = self
            .substitutions
            .get(index)
            .ok_or(Error::UnknownSubstitution)?
            .clone();
        self.append(&text)
    }

    /// `<template-param> ::= T_ | T <number> _`
    pub(crate) fn parse_template_param(&mut self) -> Result<()> {
        self.expect("T")?;
        let mut index = 0usize;
        if !self.peek("_") {
            let n = self.number()?;
            index = usize::try_from(n).map_err(|_| Error::Syntax)? + 1;
        }
        self.expect("_")?;
        let text = self
            .template_params
            .get(index)
            .ok_or(Error::UnknownSubstitution)?
            .text
            .clone();
        self.append(&text)?;
        // a template expansion counts as a fresh substitution candidate
        self.add_substitution_text(text);
        Ok(())
    }

    /// `<template-args> ::= I <template-arg>* E`
    ///
    /// `<template-arg> ::= <type> | X <expression> E | <expr-primary>
    ///                   | J <template-arg>* E`
    ///
    /// Arguments bind `T_`, `T0_`, …. On exit any enclosing list's
    /// parameters are discarded and the fresh ones shift down: the innermost
    /// list shadows, it does not concatenate. A `J…E` pack binds as a single
    /// comma-joined entry.
    pub(crate) fn parse_template_args(&mut self) -> Result<()> {
        if !self.eat("I") {
            return Ok(());
        }
        let enclosing = self.template_params.len();
        if self.out.ends_with('<') {
            self.append(" ")?;
        }
        self.append("<")?;
        let mut count = 0;
        while !self.eat("E") {
            if self.on_sentinel() {
                return Err(Error::Syntax);
            }
            if count > 0 {
                self.append(",")?;
            }
            let mark = self.out.len();
            if self.eat("J") {
                let mut elems = 0;
                while !self.eat("E") {
                    if self.on_sentinel() {
                        return Err(Error::Syntax);
                    }
                    if elems > 0 {
                        self.append(",")?;
                    }
                    self.parse_type()?;
                    elems += 1;
                }
                self.add_template_param(mark, true);
            } else if self.eat("X") {
                self.parse_expression()?;
                self.expect("E")?;
                self.add_template_param(mark, false);
            } else {
                self.parse_type()?;
                self.add_template_param(mark, false);
            }
            count += 1;
        }
        if self.out.ends_with('>') {
            self.append(" ")?;
        }
        self.append(">")?;
        if enclosing > 0 {
            self.template_params.drain(..enclosing);
        }
        Ok(())
    }
}
