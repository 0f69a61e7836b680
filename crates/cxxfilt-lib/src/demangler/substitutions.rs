//! The two bounded back-reference tables.
//!
//! Both are append-only for the lifetime of a parse and hold owned copies of
//! output slices, so later inserts into the output cannot shift what an
//! index refers to. Ordering is load-bearing: `S<k>_` resolves to the k-th
//! entry counted in the order the corresponding types finished parsing.

use super::core::Parser;

pub(super) const MAX_SUBSTITUTIONS: usize = 20;
pub(super) const MAX_TEMPLATE_SUBST: usize = 10;

/// One bound template argument. A `J … E` argument pack binds as a single
/// entry with `is_pack` set; expanding it via `Dp` emits the joined elements
/// without the `(…)...` wrapping.
pub(crate) struct TemplateParam {
    pub(super) text: String,
    pub(super) is_pack: bool,
}

impl Parser<'_> {
    /// Records the output from `mark` onward as a substitution target.
    /// Entries past capacity are silently dropped; a later back-reference to
    /// one then misses, which correctly rejects inputs beyond the
    /// implemented subset.
    pub(super) fn add_substitution(&mut self, mark: usize) {
        let text = self.out[mark..].to_owned();
        self.add_substitution_text(text);
    }

    pub(super) fn add_substitution_text(&mut self, text: String) {
        if self.substitutions.len() < MAX_SUBSTITUTIONS {
            self.substitutions.push(text);
        }
    }

    pub(super) fn add_template_param(&mut self, mark: usize, is_pack: bool) {
        if self.template_params.len() < MAX_TEMPLATE_SUBST {
            self.template_params.push(TemplateParam {
                text: self.out[mark..].to_owned(),
                is_pack,
            });
        }
    }
}
