use crate::{Demangler, demangle};

#[test]
fn special_prefixes() {
    insta::assert_snapshot!(demangle("_ZTV10GameOfLife").unwrap(), @"vtable for GameOfLife");
    insta::assert_snapshot!(demangle("_ZTT1A").unwrap(), @"vtable index for A");
    insta::assert_snapshot!(demangle("_ZTI1A").unwrap(), @"typeinfo for A");
    insta::assert_snapshot!(demangle("_ZTS1A").unwrap(), @"typeinfo name for A");
}

#[test]
fn typeinfo_of_a_nested_type() {
    insta::assert_snapshot!(demangle("_ZTIN6System5SoundE").unwrap(), @"typeinfo for System::Sound");
}

#[test]
fn demangling_is_idempotent() {
    let symbol = "_ZNKSt15_Deque_iteratorIP15memory_block_stRKS1_PS2_EeqERKS5_";
    assert_eq!(demangle(symbol).unwrap(), demangle(symbol).unwrap());
}

#[test]
fn successful_output_has_balanced_brackets() {
    let symbols = [
        "_Z10hairyfunc5PFPFilEPcE",
        "_Z1fPFPA1_ivE",
        "_ZNKSt17__normal_iteratorIPK6optionSt6vectorIS0_SaIS0_EEEmiERKS6_",
        "_ZZZ1fILb0EJiiEEvvENKUlvE_clEvE1n",
    ];
    for symbol in symbols {
        let plain = demangle(symbol).unwrap();
        for (open, close) in [('(', ')'), ('[', ']'), ('<', '>'), ('{', '}')] {
            let opens = plain.matches(open).count();
            let closes = plain.matches(close).count();
            assert_eq!(opens, closes, "unbalanced {open}{close} in {plain:?}");
        }
    }
}

#[test]
fn output_limit_fails_the_parse() {
    let result = Demangler::new("_ZN6System5Sound4beepEv")
        .with_output_limit(4)
        .run();
    assert_eq!(result, Err(crate::Error::OutputLimitExceeded));
}

#[test]
fn generous_limit_still_succeeds() {
    let plain = Demangler::new("_Z3funi").with_output_limit(64).run().unwrap();
    assert_eq!(plain, "fun(int)");
}
