//! Top-level `<encoding>`: the special `TV`/`TT`/`TI`/`TS` prefixes, and the
//! function/data split with return-type handling for template instantiations.

use crate::demangler::Parser;
use crate::{Error, Result};

impl Parser<'_> {
    pub(crate) fn parse_encoding(&mut self) -> Result<()> {
        if self.eat("TV") {
            self.append("vtable for ")?;
            self.parse_type()
        } else if self.eat("TT") {
            self.append("vtable index for ")?;
            self.parse_type()
        } else if self.eat("TI") {
            self.append("typeinfo for ")?;
            self.parse_type()
        } else if self.eat("TS") {
            self.append("typeinfo name for ")?;
            self.parse_type()
        } else {
            self.parse_function_encoding()
        }
    }

    /// `<function-encoding> ::= <name> <type>*`
    ///
    /// The type list is absent for data symbols. For functions whose name is
    /// a template instantiation the first type is the return type; it is
    /// parsed up front, held aside, and prefixed only after the parameter
    /// list and deferred qualifiers exist, splitting at its own insertion
    /// point to produce forms like `int(*f<T>())()`.
    pub(crate) fn parse_function_encoding(&mut self) -> Result<()> {
        self.parse_name()?;

        if self.on_sentinel() || (self.nest > 0 && self.eat("E")) {
            // data symbol: a bare name with no parameter list
            if self.func_nest > 0 {
                return Err(Error::Syntax);
            }
            return Ok(());
        }
        if self.out.is_empty() {
            return Err(Error::Syntax);
        }

        self.nest += 1;

        let mut return_type: Option<(String, usize)> = None;
        if self.out.ends_with('>') && !self.is_typecast_op {
            let mark = self.out.len();
            self.parse_type()?;
            if self.func_nest == 0 {
                let text = self.out[mark..].to_owned();
                let split = self.insertion_point(mark) - mark;
                return_type = Some((text, split));
            }
            // encodings nested in a local scope drop their return type
            self.out.truncate(mark);
        }

        self.append("(")?;
        let mut count = 0;
        while !self.on_sentinel() && !(self.func_nest > 0 && self.peek("E")) {
            let mark = self.out.len();
            self.parameter_base[self.func_nest] = Some(mark);
            if count > 0 {
                self.append(",")?;
            }
            self.parse_type()?;
            if count == 0
                && self.text_from(mark) == "void"
                && (self.on_sentinel() || (self.func_nest > 0 && self.peek("E")))
            {
                self.out.truncate(mark);
            }
            count += 1;
        }
        self.nest -= 1;
        self.append(")")?;
        if self.nest == 0 {
            let quals = std::mem::take(&mut self.qualifiers);
            self.apply_qualifiers(&quals)?;
        }

        if let Some((mut text, split)) = return_type {
            if split == text.len() {
                text.push(' ');
            } else {
                let tail = text.split_off(split);
                self.append(&tail)?;
            }
            self.insert(0, &text)?;
        }
        Ok(())
    }
}
