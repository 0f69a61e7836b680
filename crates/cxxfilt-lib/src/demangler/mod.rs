//! Recursive-descent demangler for the Itanium C++ ABI mangling grammar.
//!
//! # Architecture
//!
//! A single forward pass over the mangled bytes drives three cooperating
//! state machines:
//!
//! - A **substitution table**: every completed type (except bare builtins and
//!   the direct expansion of an existing entry) is recorded so that later
//!   `S_`, `S0_`, … tokens can replay it by index.
//! - A **template-parameter table**: each `I … E` argument list binds `T_`,
//!   `T0_`, … to the rendered arguments. The innermost list shadows any
//!   enclosing one; expanding a template parameter also records the expansion
//!   as an ordinary substitution.
//! - A **text assembler** that appends eagerly and splices decorators
//!   (`*`, `&`, `[N]`, parameter lists, the prefix return type) into
//!   positions that only become known after further parsing.
//!
//! There is no token stream and no syntax tree: the grammar is
//! context-sensitive at the byte level (length-prefixed identifiers, codes
//! whose meaning depends on the enclosing production), so productions read
//! the cursor directly and write straight into the output buffer.
//!
//! # Grammar subset (EBNF-ish)
//!
//! ```text
//! mangled-name = "_Z" encoding
//! encoding     = "TV"|"TT"|"TI"|"TS" type | function-encoding
//! name         = nested-name | local-name | "St" unqualified-name
//!              | substitution | unqualified-name [template-args]
//! nested-name  = "N" [cv-quals] [ref-qual] prefix suffix* "E"
//! type         = builtin | qualified | pointer | reference | array
//!              | function | pointer-to-member | class-enum [template-args]
//!              | template-param | substitution | decltype | pack-expansion
//! ```
//!
//! Failures are total: the first error aborts the parse and the caller never
//! observes the partially assembled text.

mod core;
mod grammar;
mod output;
mod substitutions;
mod tables;

#[cfg(test)]
mod tables_tests;
#[cfg(test)]
mod tests;

use crate::Result;

pub(crate) use self::core::Parser;

/// Default cap on the demangled text, in bytes.
///
/// Generous for real-world symbols (the longest ones in libstdc++ stay well
/// under 1 KiB) while keeping pathological inputs from ballooning memory.
pub const DEFAULT_OUTPUT_LIMIT: usize = 4096;

/// Demangles a symbol with the default output limit.
///
/// Convenience wrapper around [`Demangler`].
pub fn demangle(mangled: &str) -> Result<String> {
    Demangler::new(mangled).run()
}

/// Configurable demangling entry point.
///
/// ```
/// use cxxfilt_lib::Demangler;
///
/// let plain = Demangler::new("_Z3funi").with_output_limit(64).run().unwrap();
/// assert_eq!(plain, "fun(int)");
/// ```
pub struct Demangler<'sym> {
    mangled: &'sym str,
    output_limit: usize,
}

impl<'sym> Demangler<'sym> {
    pub fn new(mangled: &'sym str) -> Self {
        Self {
            mangled,
            output_limit: DEFAULT_OUTPUT_LIMIT,
        }
    }

    /// Caps the size of the demangled text; exceeding it fails the parse
    /// with [`Error::OutputLimitExceeded`](crate::Error::OutputLimitExceeded).
    pub fn with_output_limit(mut self, limit: usize) -> Self {
        self.output_limit = limit;
        self
    }

    pub fn run(self) -> Result<String> {
        let Some(encoding) = self.mangled.strip_prefix("_Z") else {
            return Err(crate::Error::NotMangled);
        };
        // linker symbols are ASCII by construction; rejecting anything else
        // up front lets the parser index bytes freely
        if !encoding.is_ascii() {
            return Err(crate::Error::Syntax);
        }
        let mut parser = Parser::new(encoding, self.output_limit);
        parser.parse_encoding()?;
        Ok(parser.into_output())
    }
}
