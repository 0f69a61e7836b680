//! Name productions: plain, nested, local, unqualified, constructors and
//! destructors, operators, closures, and their satellites.

use crate::demangler::Parser;
use crate::demangler::core::MAX_FUNC_NESTING;
use crate::demangler::output::find_matching;
use crate::{Error, Result};

use super::super::tables;

impl Parser<'_> {
    pub(crate) fn at_operator(&self) -> bool {
        tables::operator(self.rest()).is_some()
    }

    pub(crate) fn at_ctor_dtor(&self) -> bool {
        ["C1", "C2", "C3", "CI1", "CI2", "D0", "D1", "D2"]
            .iter()
            .any(|kw| self.peek(kw))
    }

    /// `<name> ::= <nested-name> | <local-name>
    ///           | <unscoped-name> [<template-args>]`
    ///
    /// An unscoped name directly followed by `I` is a template instantiation;
    /// the bare name becomes a substitution before its arguments parse.
    pub(crate) fn parse_name(&mut self) -> Result<()> {
        let mark = self.out.len();
        let mut is_unscoped = true;
        if self.peek("N") {
            self.parse_nested_name()?;
            is_unscoped = false;
        } else if self.peek("Z") {
            self.parse_local_name()?;
            is_unscoped = false;
        } else if self.eat("St") {
            self.append("std::")?;
            self.parse_unqualified_name()?;
        } else if self.at_substitution() {
            self.parse_substitution()?;
        } else if self.at_operator() {
            self.parse_operator_name()?;
            self.parse_abi_tags()?;
        } else if self.at_ctor_dtor() {
            self.parse_ctor_dtor_name()?;
        } else if self.at_digit() {
            self.parse_source_name()?;
            self.parse_abi_tags()?;
        } else if self.eat("L") {
            self.parse_source_name()?;
            self.parse_discriminator()?;
        } else if self.eat("DC") {
            self.parse_structured_binding()?;
        } else if self.peek("Ut") {
            self.parse_unnamed_type_name()?;
        } else if self.peek("Ul") {
            self.parse_closure_type_name()?;
        } else {
            return Err(Error::Syntax);
        }
        if is_unscoped && self.peek("I") {
            self.add_substitution(mark);
            self.parse_template_args()?;
        }
        Ok(())
    }

    /// `<nested-name> ::= N [<cv-quals>] [<ref-qual>] <prefix> <component>* E`
    ///
    /// Components are `::name` pieces, template-argument lists, or the `M`
    /// closure marker (skipped). Each completed prefix span joins the
    /// substitution table; the final component at the outermost level is the
    /// entity itself and stays out. Qualifiers collected here apply
    /// immediately at depth > 1 but defer to the end of the parameter list
    /// at depth 1, so `f() const` renders in the right place.
    pub(crate) fn parse_nested_name(&mut self) -> Result<()> {
        self.expect("N")?;
        self.nest += 1;
        let quals = self.collect_qualifiers(true);
        let mark = self.out.len();

        if self.peek("Dt") || self.peek("DT") {
            self.parse_decltype()?;
            self.add_substitution(mark);
        } else if let Some((_, expansion)) = tables::abbreviation(self.rest()) {
            self.pos += 2;
            self.append(expansion)?;
        } else if self.at_substitution() {
            self.parse_substitution()?;
        } else if self.at_template_param() {
            self.parse_template_param()?;
        } else {
            self.parse_unqualified_name()?;
            self.add_substitution(mark);
        }

        if !self.eat("E") {
            loop {
                if self.eat("M") {
                    continue;
                }
                if self.peek("I") {
                    self.parse_template_args()?;
                } else {
                    self.append("::")?;
                    self.parse_unqualified_name()?;
                }
                let done = self.eat("E");
                if !done || self.nest > 1 {
                    self.add_substitution(mark);
                }
                if done {
                    break;
                }
            }
        }

        if self.nest > 1 {
            self.apply_qualifiers(&quals)?;
        } else {
            self.qualifiers = quals;
        }
        self.nest -= 1;
        Ok(())
    }

    /// `<unqualified-name> ::= <source-name> [<abi-tags>]
    ///                       | <operator-name> [<abi-tags>]
    ///                       | <ctor-dtor-name>
    ///                       | L <source-name> <discriminator>
    ///                       | DC <source-name>+ E
    ///                       | Ut [<number>] _
    ///                       | Ul <lambda-sig> E [<number>] _`
    pub(crate) fn parse_unqualified_name(&mut self) -> Result<()> {
        if self.eat("DC") {
            self.parse_structured_binding()
        } else if self.peek("Ut") {
            self.parse_unnamed_type_name()
        } else if self.peek("Ul") {
            self.parse_closure_type_name()
        } else if self.at_digit() {
            self.parse_source_name()?;
            self.parse_abi_tags()
        } else if self.eat("L") {
            self.parse_source_name()?;
            self.parse_discriminator()
        } else if self.at_ctor_dtor() {
            self.parse_ctor_dtor_name()
        } else if self.at_operator() {
            self.parse_operator_name()?;
            self.parse_abi_tags()
        } else {
            Err(Error::Syntax)
        }
    }

    /// `<source-name> ::= <number> <identifier>`: a length-prefixed slice of
    /// the input, copied through verbatim.
    pub(crate) fn parse_source_name(&mut self) -> Result<()> {
        if !self.at_digit() {
            return Err(Error::Syntax);
        }
        let len = usize::try_from(self.number()?).map_err(|_| Error::Syntax)?;
        let rest = self.rest();
        if len > rest.len() {
            return Err(Error::Syntax);
        }
        let name = &rest[..len];
        self.pos += len;
        self.append(name)
    }

    /// Trailing `B <source-name>` tags render as `[abi:name]` suffixes.
    fn parse_abi_tags(&mut self) -> Result<()> {
        while self.peek("B") && self.byte_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
            self.append("[abi:")?;
            self.parse_source_name()?;
            self.append("]")?;
        }
        Ok(())
    }

    /// `<discriminator> ::= _ <digit> | _ _ <digit>+ _`, parsed and
    /// discarded.
    fn parse_discriminator(&mut self) -> Result<()> {
        if self.eat("_") {
            if self.eat("_") {
                self.digit_run(false);
                self.expect("_")?;
            } else if self.byte_at(0).is_some() {
                self.pos += 1;
            }
        }
        Ok(())
    }

    /// `<ctor-dtor-name> ::= C1|C2|C3|CI1|CI2|D0|D1|D2`
    ///
    /// The class name is not repeated in the mangling; it is recovered from
    /// the output by walking back over balanced groups and `::` separators
    /// to the previous identifier.
    pub(crate) fn parse_ctor_dtor_name(&mut self) -> Result<()> {
        let bytes = self.out.as_bytes();
        let mut tail = bytes.len();
        if tail >= 2 && bytes[tail - 2..] == *b"::" {
            tail -= 2;
        }
        loop {
            if tail == 0 {
                break;
            }
            match bytes[tail - 1] {
                c @ (b')' | b']' | b'}' | b'>') => match find_matching(bytes, 0, tail - 1, c) {
                    Some(open) => tail = open,
                    None => break,
                },
                b':' if tail >= 2 && bytes[tail - 2] == b':' => tail -= 2,
                _ => break,
            }
        }
        let mut head = tail;
        while head > 0 && (bytes[head - 1].is_ascii_alphanumeric() || bytes[head - 1] == b'_') {
            head -= 1;
        }
        if head == tail {
            return Err(Error::Syntax);
        }
        let class_name = self.out[head..tail].to_owned();

        let is_dtor = self.byte_at(0) == Some(b'D');
        if !self.out.ends_with(':') {
            self.append("::")?;
        }
        if is_dtor {
            self.append("~")?;
        }
        self.append(&class_name)?;

        self.pos += 1; // 'C' or 'D'
        self.eat("I");
        if !self.at_digit() {
            return Err(Error::Syntax);
        }
        self.pos += 1; // variant digit
        Ok(())
    }

    /// Emits `operator` plus the symbol, with a space before alphabetic
    /// symbols (`operator new`). The typecast operator instead parses its
    /// target type and flags the encoding so the next type is not taken as
    /// a return type.
    pub(crate) fn parse_operator_name(&mut self) -> Result<()> {
        let Some((code, symbol)) = tables::operator(self.rest()) else {
            return Err(Error::Syntax);
        };
        self.pos += 2;
        self.append_space()?;
        self.append("operator")?;
        if code == "cv" {
            self.append(" ")?;
            self.parse_type()?;
            self.is_typecast_op = true;
        } else {
            if symbol.as_bytes()[0].is_ascii_alphabetic() {
                self.append(" ")?;
            }
            self.append(symbol)?;
        }
        Ok(())
    }

    /// `<local-name> ::= Z <function encoding> E (<entity name> | s)
    ///                   [<discriminator>]`
    pub(crate) fn parse_local_name(&mut self) -> Result<()> {
        self.expect("Z")?;
        if self.func_nest + 1 >= MAX_FUNC_NESTING {
            return Err(Error::NestingLimitExceeded);
        }
        self.func_nest += 1;
        self.parse_function_encoding()?;
        self.func_nest -= 1;
        self.append("::")?;
        self.expect("E")?;
        if self.eat("s") {
            self.append("{string-literal}")?;
        } else {
            self.parse_name()?;
        }
        self.parse_discriminator()
    }

    /// `<unnamed-type-name> ::= Ut [<number>] _`
    fn parse_unnamed_type_name(&mut self) -> Result<()> {
        self.expect("Ut")?;
        self.digit_run(false);
        self.expect("_")?;
        self.append("{unnamed type}")
    }

    /// `<closure-type-name> ::= Ul <lambda-sig> E [<number>] _`
    ///
    /// Renders as `{lambda(sig)#N}`; the sequence number is one-based with
    /// the bare form first (`UlvE_` is #1, `UlvE0_` is #2).
    fn parse_closure_type_name(&mut self) -> Result<()> {
        self.expect("Ul")?;
        self.append("{lambda(")?;
        let mut count = 0;
        while !self.peek("E") {
            if self.on_sentinel() {
                return Err(Error::Syntax);
            }
            let mark = self.out.len();
            if count > 0 {
                self.append(",")?;
            }
            self.parse_type()?;
            if count == 0 && self.text_from(mark) == "void" && self.peek("E") {
                self.out.truncate(mark);
            }
            count += 1;
        }
        self.expect("E")?;
        let seq = if self.at_digit() { self.number()? + 1 } else { 0 };
        self.expect("_")?;
        self.append(")#")?;
        self.append(&(seq + 1).to_string())?;
        self.append("}")
    }

    /// `DC <source-name>+ E`: structured binding declaration, rendered as a
    /// bracketed name list. The introducer is consumed by the caller.
    fn parse_structured_binding(&mut self) -> Result<()> {
        self.append("[")?;
        let mut count = 0;
        while self.at_digit() {
            if count > 0 {
                self.append(", ")?;
            }
            self.parse_source_name()?;
            count += 1;
        }
        self.expect("E")?;
        self.append("]")
    }
}
