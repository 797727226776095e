//! Every basic example builds and validates under its published uid.

mod common;

use common::assert_example;
use esm_examples::basic;

#[test]
fn mwe() {
    assert_example(&basic::create_mwe(), "Minimum_Working_Example");
}

#[test]
fn fpwe() {
    assert_example(&basic::create_fpwe(), "Fully_Parameterized_Working_Example");
}

#[test]
fn emission_objective() {
    assert_example(
        &basic::create_emission_objective(),
        "Emission_Objective_Example",
    );
}

#[test]
fn connected_es() {
    assert_example(
        &basic::create_connected_es(),
        "Connected-Energy-Systems-Example",
    );
}

#[test]
fn chp() {
    assert_example(&basic::create_chp(), "CHP_Example");
}

#[test]
fn variable_chp() {
    assert_example(&basic::create_variable_chp(), "CHP_Example");
}

#[test]
fn storage_example() {
    assert_example(
        &basic::create_storage_example(),
        "Storage-Energysystem-Example",
    );
}

#[test]
fn storage_fixed_ratio_expansion_example() {
    assert_example(
        &basic::create_storage_fixed_ratio_expansion_example(),
        "Storage-Energysystem-Example",
    );
}

#[test]
fn expansion_plan_example() {
    assert_example(
        &basic::create_expansion_plan_example(),
        "Expansion Plan Example",
    );
}

#[test]
fn simple_transformer_grid_es() {
    assert_example(
        &basic::create_simple_transformer_grid_es(),
        "Two Transformer Grid Example",
    );
}

#[test]
fn time_varying_efficiency_transformer() {
    assert_example(
        &basic::create_time_varying_efficiency_transformer(),
        "Transformer-Timeseries-Example",
    );
}

#[test]
fn zero_costs_es() {
    assert_example(&basic::create_zero_costs_es(), "Zero Costs Example");
}

#[test]
fn mssesu() {
    assert_example(&basic::create_mssesu(0, Some(42)), "Energy_System_0");
    // unit 1 expects a neighboring unit 0, so only the uid is checked here
    assert_eq!(basic::create_mssesu(1, Some(42)).uid, "Energy_System_1");
}

#[test]
fn self_similar_energy_system() {
    assert_example(
        &basic::create_self_similar_energy_system(4, None),
        "Self_Similar_Energy_System_(N=4)",
    );
}

#[test]
fn statistical_identification_example() {
    assert_example(
        &basic::create_statistical_identification_example(24).unwrap(),
        "Statistical Identification Example",
    );
}
