//! Scientific study cases and the catalog dispatch surface.

mod common;

use common::assert_example;
use esm_examples::catalog::{self, EXAMPLES};
use esm_examples::scientific;

#[test]
fn hamburg_inspired_hnp_msc() {
    assert_example(
        &scientific::create_hamburg_inspired_hnp_msc(24).unwrap(),
        "Energy System Hamburg",
    );
}

#[test]
fn catalog_covers_every_name() {
    for name in EXAMPLES {
        let es = catalog::create(name).unwrap();
        assert!(
            es.validate().is_empty(),
            "catalog entry {name} produced an invalid system",
        );
    }
}

#[test]
fn catalog_rejects_unknown_names() {
    assert!(catalog::create("does_not_exist").is_err());
}
