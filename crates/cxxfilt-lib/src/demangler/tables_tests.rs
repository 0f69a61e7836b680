use super::tables::{abbreviation, builtin_type, operator};

#[test]
fn longest_builtin_code_wins() {
    assert_eq!(builtin_type("Di_rest"), Some(("Di", "char32_t")));
    assert_eq!(builtin_type("d"), Some(("d", "double")));
    assert_eq!(builtin_type("Dx"), None);
}

#[test]
fn operator_codes_are_exact_two_byte_matches() {
    assert_eq!(operator("plxyz"), Some(("pl", "+")));
    assert_eq!(operator("aS"), Some(("aS", "=")));
    assert_eq!(operator("p"), None);
    assert_eq!(operator("zz"), None);
}

#[test]
fn abbreviations_cover_the_std_entities() {
    assert_eq!(abbreviation("St3foo"), Some(("St", "std")));
    assert_eq!(abbreviation("Ss"), Some(("Ss", "std::string")));
    assert_eq!(abbreviation("Sx"), None);
}
