//! Demangler for Itanium C++ ABI linker symbols.
//!
//! # Example
//!
//! ```
//! use cxxfilt_lib::demangle;
//!
//! let plain = demangle("_ZN6System5Sound4beepEv").expect("well-formed symbol");
//! assert_eq!(plain, "System::Sound::beep()");
//! ```
//!
//! Symbols that do not parse (wrong prefix, malformed grammar, productions
//! outside the supported subset) come back as an [`Error`]; no partial text
//! ever escapes.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod demangler;

pub use demangler::{DEFAULT_OUTPUT_LIMIT, Demangler, demangle};

/// Errors that can occur while demangling a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input does not begin with the `_Z` mangling prefix.
    #[error("input is not an Itanium-mangled symbol")]
    NotMangled,

    /// Malformed input, or a production outside the supported subset.
    #[error("malformed or unsupported mangling")]
    Syntax,

    /// A `S…_` or `T…_` back-reference names an entry that does not exist.
    #[error("back-reference to an unknown substitution")]
    UnknownSubstitution,

    /// The demangled text would exceed the configured output limit.
    #[error("output limit exceeded")]
    OutputLimitExceeded,

    /// Function, array, or recursion nesting deeper than the fixed bounds.
    #[error("nesting limit exceeded")]
    NestingLimitExceeded,
}

/// Result type for demangling operations.
pub type Result<T> = std::result::Result<T, Error>;
