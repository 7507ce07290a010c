//! Parameter comparator tests: value-kind equality, both real policies,
//! both scan modes.

use changelens_core::compare::{
    params_changed, values_equal, ParamCompareMode, RealEqualityPolicy, MM_PER_FOOT,
};
use changelens_core::model::{Element, ParamValue};
use changelens_core_types::{ElementId, TypeId};
use proptest::prelude::*;

fn duct(params: &[(&str, ParamValue)]) -> Element {
    let mut e = Element::new(ElementId::new(1), TypeId::new(100), "Ducts", "duct");
    for (name, value) in params {
        e = e.with_parameter(*name, value.clone());
    }
    e
}

#[test]
fn test_text_equality_is_exact() {
    let policy = RealEqualityPolicy::Millimeters;
    assert!(values_equal(
        &ParamValue::Text("Supply Air".into()),
        &ParamValue::Text("Supply Air".into()),
        policy
    ));
    assert!(!values_equal(
        &ParamValue::Text("Supply Air".into()),
        &ParamValue::Text("Return Air".into()),
        policy
    ));
    // Absent host strings normalize to "" at load, so empty == empty
    assert!(values_equal(
        &ParamValue::Text(String::new()),
        &ParamValue::Text(String::new()),
        policy
    ));
}

#[test]
fn test_integer_and_reference_equality() {
    let policy = RealEqualityPolicy::RawUnits;
    assert!(values_equal(
        &ParamValue::Integer(3),
        &ParamValue::Integer(3),
        policy
    ));
    assert!(!values_equal(
        &ParamValue::Integer(3),
        &ParamValue::Integer(4),
        policy
    ));
    assert!(values_equal(
        &ParamValue::Reference(9001),
        &ParamValue::Reference(9001),
        policy
    ));
    assert!(!values_equal(
        &ParamValue::Reference(9001),
        &ParamValue::Reference(9002),
        policy
    ));
}

#[test]
fn test_mm_policy_boundary() {
    // Exactly 1mm apart is not equal (strict <); 0.999mm is
    let base = 2.0;
    let one_mm = ParamValue::Real(base + 1.0 / MM_PER_FOOT);
    let under_mm = ParamValue::Real(base + 0.999 / MM_PER_FOOT);
    let base = ParamValue::Real(base);
    assert!(!values_equal(&base, &one_mm, RealEqualityPolicy::Millimeters));
    assert!(values_equal(&base, &under_mm, RealEqualityPolicy::Millimeters));
}

#[test]
fn test_policies_disagree_on_small_raw_differences() {
    // 0.0005 ft = 0.1524 mm: different under raw units, same under mm
    let a = ParamValue::Real(1.0);
    let b = ParamValue::Real(1.0005);
    assert!(!values_equal(&a, &b, RealEqualityPolicy::RawUnits));
    assert!(values_equal(&a, &b, RealEqualityPolicy::Millimeters));
}

#[test]
fn test_full_mode_scans_every_shared_name() {
    let new_el = duct(&[
        ("Diameter", ParamValue::Real(1.0)),
        ("Mark", ParamValue::Text("D-7".into())),
    ]);
    let old_el = duct(&[
        ("Diameter", ParamValue::Real(1.0)),
        ("Mark", ParamValue::Text("D-6".into())),
    ]);
    assert!(params_changed(
        &new_el,
        &old_el,
        ParamCompareMode::Full,
        RealEqualityPolicy::Millimeters
    ));
    assert!(!params_changed(
        &new_el,
        &old_el,
        ParamCompareMode::Tracked,
        RealEqualityPolicy::Millimeters
    ));
}

#[test]
fn test_tracked_mode_without_tracked_names_is_unchanged() {
    let new_el = duct(&[("Mark", ParamValue::Text("D-7".into()))]);
    let old_el = duct(&[("Mark", ParamValue::Text("D-6".into()))]);
    assert!(!params_changed(
        &new_el,
        &old_el,
        ParamCompareMode::Tracked,
        RealEqualityPolicy::Millimeters
    ));
}

#[test]
fn test_tracked_mode_sees_all_locale_variants() {
    for name in ["Diameter", "直径", "Height", "高さ", "Width", "幅", "System Type", "システムタイプ"] {
        let new_el = duct(&[(name, ParamValue::Text("a".into()))]);
        let old_el = duct(&[(name, ParamValue::Text("b".into()))]);
        assert!(
            params_changed(
                &new_el,
                &old_el,
                ParamCompareMode::Tracked,
                RealEqualityPolicy::Millimeters
            ),
            "tracked name {} not scanned",
            name
        );
    }
}

proptest! {
    #[test]
    fn prop_values_equal_is_symmetric(
        a in -1000.0..1000.0f64,
        b in -1000.0..1000.0f64,
    ) {
        for policy in [RealEqualityPolicy::RawUnits, RealEqualityPolicy::Millimeters] {
            let va = ParamValue::Real(a);
            let vb = ParamValue::Real(b);
            prop_assert_eq!(values_equal(&va, &vb, policy), values_equal(&vb, &va, policy));
        }
    }

    #[test]
    fn prop_values_equal_is_reflexive(v in -1000.0..1000.0f64) {
        for policy in [RealEqualityPolicy::RawUnits, RealEqualityPolicy::Millimeters] {
            let value = ParamValue::Real(v);
            prop_assert!(values_equal(&value, &value, policy));
        }
    }
}
