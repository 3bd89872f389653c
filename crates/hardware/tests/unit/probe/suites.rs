//! Built-in suite contents and selector parsing.

use rstest::rstest;
use xprobe_core::common::{Value, Vector3};
use xprobe_core::isa::xcustom::Opcode;
use xprobe_core::probe::suites::UnknownSuite;
use xprobe_core::probe::{Inputs, Suite, SuiteSelector};

#[test]
fn mod_suite_operands_and_literals() {
    let cases = Suite::Mod.cases();
    let got: Vec<_> = cases
        .iter()
        .map(|c| (c.label().to_string(), *c.inputs(), c.expected()))
        .collect();
    let want: Vec<_> = (0..5)
        .map(|i| {
            (
                format!("mod[{i}]"),
                Inputs::IntPair(11 * (i + 1), 10),
                Some(Value::Int(i + 1)),
            )
        })
        .collect();
    assert_eq!(got, want);
    assert!(cases.iter().all(|c| c.op() == Opcode::Mod));
}

#[test]
fn ninst_suite_operands_and_literals() {
    let cases = Suite::Ninst.cases();
    assert_eq!(cases.len(), 5);
    for (i, case) in (0..).zip(&cases) {
        assert_eq!(case.op(), Opcode::Ninst);
        assert_eq!(*case.inputs(), Inputs::IntPair(5, i + 1));
        assert_eq!(case.expected(), Some(Value::Int(4 - i)));
    }
}

#[test]
fn fdist_suite_has_no_literal() {
    let cases = Suite::Fdist.cases();
    assert_eq!(cases.len(), 1);
    assert_eq!(
        *cases[0].inputs(),
        Inputs::Vec3Pair(Vector3::new(3.3, 1.1, 2.2), Vector3::new(1.1, 2.2, 3.3))
    );
    assert_eq!(cases[0].expected(), None);
}

#[test]
fn ninst_single_expects_three() {
    let cases = Suite::NinstSingle.cases();
    assert_eq!(cases.len(), 1);
    assert_eq!(*cases[0].inputs(), Inputs::IntPair(5, 2));
    assert_eq!(cases[0].expected(), Some(Value::Int(3)));
}

#[rstest]
#[case("all", SuiteSelector::All, 4)]
#[case("mod", SuiteSelector::Mod, 1)]
#[case("ninst", SuiteSelector::Ninst, 1)]
#[case("fdist", SuiteSelector::Fdist, 1)]
#[case("ninst-single", SuiteSelector::NinstSingle, 1)]
fn selector_names(#[case] name: &str, #[case] selector: SuiteSelector, #[case] count: usize) {
    assert_eq!(name.parse::<SuiteSelector>(), Ok(selector));
    assert_eq!(selector.suites().len(), count);
}

#[test]
fn all_expands_in_run_order() {
    assert_eq!(SuiteSelector::All.suites(), Suite::ALL.to_vec());
    let names: Vec<_> = Suite::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["mod", "ninst", "fdist", "ninst-single"]);
}

#[test]
fn unknown_selector_is_rejected() {
    assert_eq!(
        "ninst_single".parse::<SuiteSelector>(),
        Err(UnknownSuite("ninst_single".into()))
    );
}
