//! The `<type>` production and its satellites: qualifiers, function types,
//! arrays, pointer-to-member, vendor qualifiers, decltype, pack expansion.

use crate::demangler::Parser;
use crate::demangler::core::MAX_FUNC_NESTING;
use crate::{Error, Result};

use super::super::tables;

const MAX_ARRAY_DIMENSIONS: usize = 10;
const MAX_EXTENDED_QUALIFIERS: usize = 10;

impl Parser<'_> {
    /// Dispatches one `<type>`. Every parsed type is recorded as a
    /// substitution except bare builtins and the direct expansion of an
    /// existing back-reference.
    pub(crate) fn parse_type(&mut self) -> Result<()> {
        self.enter_recursion()?;
        let result = self.type_inner();
        self.exit_recursion();
        result
    }

    fn type_inner(&mut self) -> Result<()> {
        let mark = self.out.len();
        if let Some((code, name)) = tables::builtin_type(self.rest()) {
            self.pos += code.len();
            self.append(name)?;
        } else if matches!(self.byte_at(0), Some(b'r' | b'V' | b'K')) {
            let quals = self.collect_qualifiers(false);
            self.parse_type()?;
            self.apply_qualifiers(&quals)?;
            self.add_substitution(mark);
        } else if self.peek("U") {
            self.parse_extended_qualifier()?;
        } else if self.peek("F") {
            self.parse_function_type()?;
            self.add_substitution(mark);
        } else if self.peek("A") {
            self.parse_array_type()?;
        } else if self.eat("P") {
            self.parse_type()?;
            self.insert_decoration(mark, "*", "(*)")?;
            self.add_substitution(mark);
        } else if self.eat("R") {
            self.parse_type()?;
            self.insert_decoration(mark, "&", "(&)")?;
            self.add_substitution(mark);
        } else if self.eat("O") {
            self.parse_type()?;
            self.append("&&")?;
            self.add_substitution(mark);
        } else if self.eat("Dp") {
            self.parse_pack_expansion(mark)?;
        } else if self.peek("Dt") || self.peek("DT") {
            self.parse_decltype()?;
            self.add_substitution(mark);
        } else if let Some((code, expansion)) = tables::abbreviation(self.rest()) {
            self.pos += 2;
            self.append(expansion)?;
            if code == "St" {
                self.append("::")?;
                self.parse_unqualified_name()?;
                self.add_substitution(mark);
            }
            if self.peek("I") {
                self.parse_template_args()?;
                self.add_substitution(mark);
            }
        } else if self.at_substitution() {
            self.parse_substitution()?;
            self.parse_template_args()?;
        } else if self.at_template_param() {
            self.parse_template_param()?;
            self.parse_template_args()?;
        } else if self.peek("N") {
            self.parse_nested_name()?;
        } else if self.peek("Z") {
            self.parse_local_name()?;
        } else if self.peek("M") {
            self.parse_pointer_to_member_type()?;
        } else if self.peek("L") {
            self.parse_expr_primary()?;
        } else if self.at_digit()
            || (self.peek("u") && self.byte_at(1).is_some_and(|b| b.is_ascii_digit()))
        {
            // vendor-extended types print as their bare source name
            self.eat("u");
            self.parse_source_name()?;
            self.add_substitution(mark);
            self.parse_template_args()?;
        } else {
            return Err(Error::Syntax);
        }
        Ok(())
    }

    /// Splices a pointer/reference decorator at the insertion point,
    /// parenthesizing when it lands on a parameter list or array brackets.
    fn insert_decoration(&mut self, mark: usize, bare: &str, wrapped: &str) -> Result<()> {
        let at = self.insertion_point(mark);
        let needs_parens = matches!(self.out.as_bytes().get(at), Some(b'(' | b'['));
        self.insert(at, if needs_parens { wrapped } else { bare })
    }

    /// Collects a run of `r`/`V`/`K` codes (plus `R`/`O` ref-qualifiers when
    /// requested) without rendering them; they apply after the type.
    pub(crate) fn collect_qualifiers(&mut self, include_ref: bool) -> String {
        let mut quals = String::new();
        while let Some(b @ (b'r' | b'V' | b'K')) = self.byte_at(0) {
            quals.push(b as char);
            self.pos += 1;
        }
        if include_ref {
            while let Some(b @ (b'R' | b'O')) = self.byte_at(0) {
                quals.push(b as char);
                self.pos += 1;
            }
        }
        quals
    }

    pub(crate) fn apply_qualifiers(&mut self, quals: &str) -> Result<()> {
        for q in quals.chars() {
            if q != 'R' && q != 'O' {
                self.append_space()?;
            }
            match q {
                'r' => self.append("restrict")?,
                'V' => self.append("volatile")?,
                'K' => self.append("const")?,
                'R' => self.append("&")?,
                'O' => self.append("&&")?,
                _ => {}
            }
        }
        Ok(())
    }

    /// `<extended-qualifier> ::= ( U <source-name> <template-arg>* )+ <type>`
    ///
    /// Vendor qualifiers print as suffixes on the inner type, innermost
    /// last, so the names are scanned first and re-read after the type.
    fn parse_extended_qualifier(&mut self) -> Result<()> {
        self.expect("U")?;
        let base = self.out.len();
        let mut starts = Vec::new();
        loop {
            starts.push(self.pos);
            self.parse_source_name()?;
            self.parse_template_args()?;
            if starts.len() >= MAX_EXTENDED_QUALIFIERS || !self.eat("U") {
                break;
            }
        }
        self.out.truncate(base);
        self.parse_type()?;
        let resume = self.pos;
        for &start in starts.iter().rev() {
            self.pos = start;
            self.append_space()?;
            self.parse_source_name()?;
            self.add_substitution(base);
        }
        self.pos = resume;
        Ok(())
    }

    /// `<function-type> ::= F [Y] <return-type> <parameter-type>* E`
    ///
    /// Emits `return(params)`; the surrounding type context splices `(*)`
    /// and friends in between. The list is re-homed onto the enclosing
    /// parameter's declarator when one is active.
    fn parse_function_type(&mut self) -> Result<()> {
        self.expect("F")?;
        self.eat("Y");
        self.parse_type()?;

        let list_start = self.out.len();
        if self.func_nest + 1 >= MAX_FUNC_NESTING {
            return Err(Error::NestingLimitExceeded);
        }
        self.func_nest += 1;
        self.append("(")?;
        let mut count = 0;
        while !self.peek("E") {
            if self.on_sentinel() {
                return Err(Error::Syntax);
            }
            let mark = self.out.len();
            self.parameter_base[self.func_nest] = Some(mark);
            if count > 0 {
                self.append(",")?;
            }
            self.parse_type()?;
            if count == 0 && self.text_from(mark) == "void" && self.peek("E") {
                self.out.truncate(mark);
            }
            count += 1;
        }
        self.append(")")?;
        self.expect("E")?;
        self.func_nest -= 1;

        if let Some(base) = self.parameter_base[self.func_nest] {
            let list = self.out[list_start..].to_owned();
            self.out.truncate(list_start);
            let at = self.insertion_point(base);
            self.insert(at, &list)?;
        }
        Ok(())
    }

    /// `<array-type> ::= A [<number>] _ <type>`, right-to-left associative.
    ///
    /// Dimensions are skipped first, the element type parsed, then the
    /// `[N]` brackets spliced back in reverse order; each intermediate
    /// array form becomes a substitution.
    fn parse_array_type(&mut self) -> Result<()> {
        self.expect("A")?;
        let mut dims = Vec::new();
        loop {
            dims.push(self.pos);
            while !self.peek("_") {
                if self.on_sentinel() {
                    return Err(Error::Syntax);
                }
                self.pos += 1;
            }
            self.expect("_")?;
            if dims.len() >= MAX_ARRAY_DIMENSIONS || !self.eat("A") {
                break;
            }
        }

        let mark = self.out.len();
        self.parse_type()?;

        let resume = self.pos;
        let at = self.out.len();
        for &dim in dims.iter().rev() {
            self.pos = dim;
            if self.at_digit() {
                let n = self.number()?;
                self.insert(at, &format!("[{n}]"))?;
            } else {
                self.insert(at, "[]")?;
            }
            self.add_substitution(mark);
        }
        self.pos = resume;
        Ok(())
    }

    /// `<pointer-to-member-type> ::= M <class type> <member type>`
    ///
    /// `Class::*` lands at the member type's insertion point, gaining its
    /// own parentheses when the member is a function.
    fn parse_pointer_to_member_type(&mut self) -> Result<()> {
        self.expect("M")?;
        let mark = self.out.len();
        self.parse_type()?;
        let mut class_type = self.out[mark..].to_owned();
        class_type.push_str("::*");
        self.out.truncate(mark);

        self.parse_type()?;
        let at = self.insertion_point(mark);
        if self.out.as_bytes().get(at) == Some(&b'(') {
            self.insert(at, " ()")?;
            self.insert(at + 2, &class_type)?;
        } else {
            self.insert(at, " ")?;
            self.insert(at + 1, &class_type)?;
        }
        self.add_substitution(mark);
        Ok(())
    }

    /// `Dp <type>`: a bound argument pack expands to its joined elements;
    /// any other operand renders as `(T)...`.
    fn parse_pack_expansion(&mut self, mark: usize) -> Result<()> {
        let expands_pack = self
            .peek_template_param_index()
            .and_then(|i| self.template_params.get(i))
            .is_some_and(|p| p.is_pack);
        self.parse_type()?;
        if !expands_pack {
            self.insert(mark, "(")?;
            self.append(")...")?;
        }
        Ok(())
    }

    /// `<decltype> ::= Dt <expression> E | DT <expression> E`
    pub(crate) fn parse_decltype(&mut self) -> Result<()> {
        if !self.eat("Dt") {
            self.expect("DT")?;
        }
        self.append("decltype(")?;
        self.parse_expression()?;
        self.expect("E")?;
        self.append(")")
    }
}
