//! Static lexical tables: builtin type codes, operator codes, and the
//! standard-library abbreviations, with constant-time-ish classification
//! helpers over them.

/// `<builtin-type>` codes. Two-byte `D…` codes coexist with one-byte codes;
/// [`builtin_type`] resolves them longest-match-first.
pub(super) const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("v", "void"),
    ("w", "wchar_t"),
    ("b", "bool"),
    ("c", "char"),
    ("a", "signed char"),
    ("h", "unsigned char"),
    ("s", "short"),
    ("t", "unsigned short"),
    ("i", "int"),
    ("j", "unsigned int"),
    ("l", "long"),
    ("m", "unsigned long"),
    ("x", "long long"),
    ("y", "unsigned long long"),
    ("n", "__int128"),
    ("o", "unsigned __int128"),
    ("f", "float"),
    ("d", "double"),
    ("e", "long double"),
    ("g", "__float128"),
    ("z", "ellipsis"),
    ("Da", "auto"),
    ("Dc", "decltype(auto)"),
    ("Dn", "std::nullptr_t"),
    ("Dh", "decimal16"),
    ("Df", "decimal32"),
    ("Dd", "decimal64"),
    ("De", "decimal128"),
    ("Du", "char8_t"),
    ("Ds", "char16_t"),
    ("Di", "char32_t"),
];

/// `<operator-name>` codes. The typecast operator `cv` is special-cased by
/// the name grammar (its "symbol" is the operand type, parsed separately).
pub(super) const OPERATORS: &[(&str, &str)] = &[
    ("cv", "(?)"),
    ("nw", "new"),
    ("na", "new[]"),
    ("dl", "delete"),
    ("da", "delete[]"),
    ("ng", "-"),
    ("ad", "&"),
    ("de", "*"),
    ("co", "~"),
    ("pl", "+"),
    ("mi", "-"),
    ("ml", "*"),
    ("dv", "/"),
    ("rm", "%"),
    ("an", "&"),
    ("or", "|"),
    ("eo", "^"),
    ("aS", "="),
    ("pL", "+="),
    ("mI", "-="),
    ("mL", "*="),
    ("dV", "/="),
    ("rM", "%="),
    ("aN", "&="),
    ("oR", "|="),
    ("eO", "^="),
    ("ls", "<<"),
    ("rs", ">>"),
    ("lS", "<<="),
    ("rS", ">>="),
    ("eq", "=="),
    ("ne", "!="),
    ("lt", "<"),
    ("gt", ">"),
    ("le", "<="),
    ("ge", ">="),
    ("ss", "<=>"),
    ("nt", "!"),
    ("aa", "&&"),
    ("oo", "||"),
    ("pp", "++"),
    ("mm", "--"),
    ("cm", ","),
    ("pm", "->*"),
    ("pt", "->"),
    ("cl", "()"),
    ("ix", "[]"),
    ("qu", "?"),
];

/// Predefined `<substitution>` abbreviations for common std entities.
/// `St` is first; several grammar sites treat it specially (it prefixes a
/// further unqualified name instead of standing alone).
pub(super) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("St", "std"),
    ("Sa", "std::allocator"),
    ("Sb", "std::basic_string"),
    ("Ss", "std::string"),
    ("Si", "std::istream"),
    ("So", "std::ostream"),
    ("Sd", "std::iostream"),
];

/// Longest builtin-type code matching the front of `input`.
pub(super) fn builtin_type(input: &str) -> Option<(&'static str, &'static str)> {
    let mut best: Option<(&'static str, &'static str)> = None;
    for &(code, name) in BUILTIN_TYPES {
        if input.starts_with(code) && best.is_none_or(|(b, _)| code.len() > b.len()) {
            best = Some((code, name));
        }
    }
    best
}

/// Operator record for the two-byte code at the front of `input`.
pub(super) fn operator(input: &str) -> Option<(&'static str, &'static str)> {
    let code = input.get(..2)?;
    OPERATORS
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(c, n)| (c, n))
}

/// Abbreviation record for the two-byte code at the front of `input`.
pub(super) fn abbreviation(input: &str) -> Option<(&'static str, &'static str)> {
    let code = input.get(..2)?;
    ABBREVIATIONS
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(c, n)| (c, n))
}
