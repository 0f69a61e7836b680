//! Grammar productions for the mangling subset.
//!
//! Each submodule implements its `parse_*` methods as an extension of
//! [`Parser`](super::Parser). Productions read the cursor directly and write
//! into the output buffer; the first error aborts the whole parse.

mod encoding;
mod literals;
mod names;
mod templates;
mod types;
