use crate::demangle;

// ============================================================================
// Pointers & qualifiers
// ============================================================================

#[test]
fn pointer_to_const() {
    insta::assert_snapshot!(demangle("_Z3fooPKi").unwrap(), @"foo(int const*)");
}

#[test]
fn volatile_member_typedef_behind_a_pointer() {
    insta::assert_snapshot!(demangle("_Z1fI1XEvPVN1AIT_E1TE").unwrap(), @"void f<X>(A<X>::T volatile*)");
}

#[test]
fn vendor_qualifiers_render_as_suffixes() {
    insta::assert_snapshot!(
        demangle("_ZlsRKU3fooU4bart1XS0_").unwrap(),
        @"operator<<(X bart foo const&,X bart)"
    );
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn array_parameter_and_pointer_to_array() {
    insta::assert_snapshot!(demangle("_Z1fA37_iPS_").unwrap(), @"f(int[37],int(*)[37])");
}

#[test]
fn pointer_to_pointer_to_array() {
    insta::assert_snapshot!(demangle("_Z1sPA37_iPS0_").unwrap(), @"s(int(*)[37],int(**)[37])");
}

#[test]
fn array_of_unknown_bound() {
    insta::assert_snapshot!(demangle("_Z3fooA30_A_i").unwrap(), @"foo(int[30][])");
}

#[test]
fn pointer_to_multidimensional_array() {
    insta::assert_snapshot!(demangle("_Z3kooPA28_A30_i").unwrap(), @"koo(int(*)[28][30])");
}

#[test]
fn array_as_template_argument() {
    insta::assert_snapshot!(demangle("_ZN3FooIA4_iE3barE").unwrap(), @"Foo<int[4]>::bar");
}

#[test]
fn reference_to_const_array() {
    insta::assert_snapshot!(demangle("_Z3fooIA3_iEvRKT_").unwrap(), @"void foo<int[3]>(int(&)[3] const)");
}

#[test]
fn reference_to_const_pointer_to_array() {
    insta::assert_snapshot!(
        demangle("_Z3fooIPA3_iEvRKT_").unwrap(),
        @"void foo<int(*)[3]>(int(*&)[3] const)"
    );
}

// ============================================================================
// Pointers to members
// ============================================================================

#[test]
fn pointer_to_pointer_to_data_member() {
    insta::assert_snapshot!(demangle("_Z3fooPM2ABi").unwrap(), @"foo(int AB::**)");
}

#[test]
fn pointer_to_const_member_function() {
    insta::assert_snapshot!(demangle("_Z1fM1AKFvvE").unwrap(), @"f(void (A::*)() const)");
    insta::assert_snapshot!(demangle("_Z1fM1AKFivE").unwrap(), @"f(int (A::*)() const)");
}

#[test]
fn member_function_pointer_substitutes_its_function_type() {
    insta::assert_snapshot!(demangle("_Z1fM1AFivEPS0_").unwrap(), @"f(int (A::*)(),int(*)())");
}

#[test]
fn member_function_pointer_substitutes_itself() {
    insta::assert_snapshot!(demangle("_Z1jM1AFivEPS1_").unwrap(), @"j(int (A::*)(),int (A::**)())");
}

#[test]
fn pointer_to_const_member_function_pointer() {
    insta::assert_snapshot!(demangle("_Z1fPKM1AFivE").unwrap(), @"f(int (A::**)() const)");
}

#[test]
fn const_data_member_pointer() {
    insta::assert_snapshot!(demangle("_Z1fM1AKiPKS1_").unwrap(), @"f(int const A::*,int const A::* const*)");
}

// ============================================================================
// Function pointers
// ============================================================================

#[test]
fn function_pointer_and_member_function_pointer() {
    insta::assert_snapshot!(demangle("_Z1fPFvvEM1SFvvE").unwrap(), @"f(void(*)(),void (S::*)())");
}

#[test]
fn plain_function_pointer_parameter() {
    insta::assert_snapshot!(demangle("_Z5outerPFsiEl").unwrap(), @"outer(short(*)(int),long)");
}

#[test]
fn function_pointer_returning_function_pointer() {
    insta::assert_snapshot!(
        demangle("_Z10hairyfunc5PFPFilEPcE").unwrap(),
        @"hairyfunc5(int(*(*)(char*))(long))"
    );
}

#[test]
fn function_pointer_returning_pointer_to_array() {
    insta::assert_snapshot!(demangle("_Z1fPFPA1_ivE").unwrap(), @"f(int(*(*)())[1])");
}

#[test]
fn function_pointer_as_template_argument() {
    insta::assert_snapshot!(demangle("_Z1fP1cIPFiiEE").unwrap(), @"f(c<int(*)(int)>*)");
}
