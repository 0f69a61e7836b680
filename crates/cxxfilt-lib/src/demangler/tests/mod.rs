//! Corpus-driven tests, organized by grammar area. Expected strings follow
//! the classic `c++filt` rendering for the supported subset.

mod encodings_tests;
mod failures_tests;
mod types_tests;
