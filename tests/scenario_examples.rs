//! Scenario, plausibility and specialized builders under their published uids.

mod common;

use common::assert_example;
use esm_examples::plausibility;
use esm_examples::scenarios::{self, GridParams};
use esm_examples::specialized;

#[test]
fn grid_es() {
    assert_example(&scenarios::create_grid_es(), "my_energy_system");
}

#[test]
fn generic_grid() {
    assert_example(&scenarios::create_generic_grid(), "Generic_Grid");
}

#[test]
fn hhes() {
    assert_example(
        &scenarios::create_hhes(24).unwrap(),
        "Energy System Hamburg",
    );
}

#[test]
fn grid_kp_es() {
    assert_example(
        &scenarios::create_grid_kp_es(&GridParams::default()).unwrap(),
        "Energy System Grid \"Kupferplatte\"",
    );
}

#[test]
fn grid_cs_es() {
    assert_example(
        &scenarios::create_grid_cs_es(&GridParams::default()).unwrap(),
        "Energy System Grid Connectors and Storage",
    );
}

#[test]
fn grid_cp_es() {
    assert_example(
        &scenarios::create_grid_cp_es(&GridParams::default()).unwrap(),
        "Energy System Grid Connectors and Powersource/-sink",
    );
}

#[test]
fn grid_ts_es() {
    assert_example(
        &scenarios::create_grid_ts_es(&GridParams::default()).unwrap(),
        "Energy System Grid Transformers and Storages",
    );
}

#[test]
fn grid_tp_es() {
    assert_example(
        &scenarios::create_grid_tp_es(&GridParams::default()).unwrap(),
        "Energy System Grid Transformers and Powersources/-sinks",
    );
}

#[test]
fn grid_family_honors_custom_periods() {
    let params = GridParams {
        periods: 4,
        ..GridParams::default()
    };
    let es = scenarios::create_grid_ts_es(&params).unwrap();
    assert_eq!(es.timeframe.periods, 4);
    assert!(es.validate().is_empty());
}

#[test]
fn self_similar_system_model() {
    assert_example(
        &specialized::create_self_similar_system_model(3, None),
        "Self Similar System Model (n=3)",
    );
}

#[test]
fn minimal_es_unit() {
    assert_example(
        &specialized::create_minimal_es_unit(0, None, Some(42)),
        "Minimum Self Similar System Model Unit 0",
    );
}

#[test]
fn chp_emissions() {
    assert_example(&plausibility::create_chp_emissions(), "Chp Emissions MSC");
}

#[test]
fn storage_emissions() {
    assert_example(
        &plausibility::create_storage_emissions(),
        "Storage Emissions MSC",
    );
}
