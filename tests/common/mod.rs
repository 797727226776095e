//! Shared assertions for the example test suites.

use esm_examples::model::EnergySystem;

/// Asserts that `es` carries the expected uid and passes validation.
pub fn assert_example(es: &EnergySystem, uid: &str) {
    assert_eq!(es.uid, uid);
    let errors = es.validate();
    assert!(errors.is_empty(), "{uid}: {errors:?}");
}
