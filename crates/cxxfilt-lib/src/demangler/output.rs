//! Output assembly: bounded append/insert plus the insertion-point resolver
//! that decides where pointer stars, array brackets, and parameter lists get
//! spliced into already-emitted text.

use crate::{Error, Result};

use super::core::Parser;

/// Balanced partner of the bracket at `c`, within `bytes[head..=tail]`.
///
/// Openers scan forward from `head`, closers scan backward from `tail`.
/// Nested occurrences of the same bracket are counted; `None` means the
/// slice is unbalanced.
pub(super) fn find_matching(bytes: &[u8], head: usize, tail: usize, c: u8) -> Option<usize> {
    let (partner, forward) = match c {
        b'(' => (b')', true),
        b')' => (b'(', false),
        b'[' => (b']', true),
        b']' => (b'[', false),
        b'<' => (b'>', true),
        b'>' => (b'<', false),
        b'{' => (b'}', true),
        b'}' => (b'{', false),
        _ => return None,
    };
    let mut nest = 0usize;
    if forward {
        let mut i = head + 1;
        while i <= tail {
            if bytes[i] == c {
                nest += 1;
            } else if bytes[i] == partner {
                if nest == 0 {
                    return Some(i);
                }
                nest -= 1;
            }
            i += 1;
        }
    } else {
        let mut i = tail;
        while i > head {
            i -= 1;
            if bytes[i] == c {
                nest += 1;
            } else if bytes[i] == partner {
                if nest == 0 {
                    return Some(i);
                }
                nest -= 1;
            }
        }
    }
    None
}

impl Parser<'_> {
    /// Appends to the demangled text, failing on the output limit.
    pub(super) fn append(&mut self, text: &str) -> Result<()> {
        if self.out.len() + text.len() > self.output_limit {
            return Err(Error::OutputLimitExceeded);
        }
        self.out.push_str(text);
        Ok(())
    }

    /// Appends a single space unless the output already ends in a separator.
    /// Errs on the side of too many spaces rather than glueing words.
    pub(super) fn append_space(&mut self) -> Result<()> {
        match self.out.as_bytes().last() {
            None | Some(b' ' | b'(' | b'[' | b'<' | b',' | b':') => Ok(()),
            Some(_) => self.append(" "),
        }
    }

    /// Inserts at byte position `mark`; inserting at the end is appending.
    pub(super) fn insert(&mut self, mark: usize, text: &str) -> Result<()> {
        if self.out.len() + text.len() > self.output_limit {
            return Err(Error::OutputLimitExceeded);
        }
        self.out.insert_str(mark, text);
        Ok(())
    }

    pub(super) fn text_from(&self, mark: usize) -> &str {
        &self.out[mark..]
    }

    /// Locates the opener of a trailing parameter list or array-bracket run
    /// in the output from `base` onward, looking through a parenthesized
    /// head and a trailing ` const`. `None` when the segment ends in neither.
    pub(super) fn check_func_array(&self, base: usize) -> Option<usize> {
        let bytes = self.out.as_bytes();
        if base >= bytes.len() {
            return None;
        }
        let mut p = bytes.len() - 1;
        if bytes[base] == b'(' {
            // constrain the scan to the parenthesized section
            p = find_matching(bytes, base, p, b'(')?;
            p = p.checked_sub(1)?;
        }
        if p == bytes.len() - 1 && p >= 5 && bytes[p - 4..=p] == *b"const" {
            p -= 5;
        }
        if p > 0 && bytes[p] == b' ' {
            p -= 1;
        }
        if bytes[p] == b')' {
            p = find_matching(bytes, 0, p, b')')?;
            // the parens of a decltype are part of the type name, not a
            // parameter list a decorator could attach to
            if self.out[..p].ends_with("decltype") {
                return None;
            }
        } else if bytes[p] == b']' {
            // consecutive array dimensions belong to one declarator
            while bytes[p] == b']' {
                p = find_matching(bytes, 0, p, b']')?;
                if p > base && bytes[p - 1] == b']' {
                    p -= 1;
                }
            }
        }
        if p >= base && (bytes[p] == b'(' || bytes[p] == b'[') {
            Some(p)
        } else {
            None
        }
    }

    /// Where the next decorator (pointer star, array bracket, spliced
    /// parameter list) must land within the output from `base` onward.
    ///
    /// Walks into the most deeply nested `(*` or `(Class::*` group, skipping
    /// balanced template-argument spans on the way; a trailing parameter
    /// list or bracket run redirects to its opener. This is what turns
    /// `int` + `*` into `int*` but `int(char)` + `*` into `int(*)(char)`.
    pub(super) fn insertion_point(&self, base: usize) -> usize {
        let bytes = self.out.as_bytes();
        let len = bytes.len();
        let mut mark = base;
        let mut post_mark = base;
        let mut started = false;
        loop {
            let mut head = if started { mark + 1 } else { mark };
            while head < len {
                match bytes[head] {
                    b'(' => break,
                    b'<' => {
                        let mut angle = 0usize;
                        while head < len {
                            match bytes[head] {
                                b'<' => angle += 1,
                                b'>' => {
                                    angle -= 1;
                                    if angle == 0 {
                                        break;
                                    }
                                }
                                _ => {}
                            }
                            head += 1;
                        }
                        if head < len {
                            head += 1;
                        }
                    }
                    _ => head += 1,
                }
            }
            if head >= len {
                break;
            }
            let mut tail = head + 1;
            match bytes.get(tail) {
                Some(b'*') => {
                    while bytes.get(tail + 1) == Some(&b'*') {
                        tail += 1;
                    }
                }
                Some(&b) if b.is_ascii_alphabetic() || b == b'_' => {
                    while tail < len && bytes[tail] != b')' && bytes[tail] != b':' {
                        tail += 1;
                    }
                    if tail + 2 < len
                        && bytes[tail] == b':'
                        && bytes[tail + 1] == b':'
                        && bytes[tail + 2] == b'*'
                    {
                        tail += 2;
                        while bytes.get(tail + 1) == Some(&b'*') {
                            tail += 1;
                        }
                    }
                }
                _ => {}
            }
            if bytes.get(tail) != Some(&b'*') {
                break;
            }
            mark = head;
            post_mark = tail;
            started = true;
        }

        if let Some(p) = self.check_func_array(mark) {
            return p;
        }
        if bytes.get(mark) == Some(&b'(') && bytes.get(post_mark) == Some(&b'*') {
            // the decorator belongs right after the stars of "(*"
            post_mark + 1
        } else if mark == base {
            len
        } else {
            mark
        }
    }
}
