mod common;

use common::{assert_close, FailingProvider, FakeProvider};
use process_engineering_toolbox::piping::sizing::{size_pipe, InsulationSpec, PipeSizingInput};
use process_engineering_toolbox::piping::FittingInventory;
use process_engineering_toolbox::properties::{ProviderConfig, StandardProvider};
use process_engineering_toolbox::CalcError;

fn steam_line() -> PipeSizingInput {
    PipeSizingInput {
        fluid: "Water".into(),
        mass_flow_kg_per_h: 50.0,
        pressure_bar_abs: 4.0,
        temperature_c: 145.0,
        straight_length_m: 1.0,
        min_diameter_mm: 20.0,
        max_diameter_mm: 50.0,
        step_mm: 5.0,
        material: "Carbon Steel".into(),
        fittings: FittingInventory::new(),
        min_velocity_m_s: 20.0,
        max_velocity_m_s: 30.0,
        max_pressure_drop_mbar: 100.0,
        insulation: None,
    }
}

#[test]
fn scans_every_candidate_in_ascending_order() {
    let result = size_pipe(&FakeProvider::new(), &steam_line()).expect("sizing");
    let diameters: Vec<f64> = result.rows.iter().map(|r| r.diameter_mm).collect();
    assert_eq!(diameters, vec![20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0]);
    assert!(result.rows.windows(2).all(|w| w[0].velocity_m_s > w[1].velocity_m_s));
    assert!(result.rows.iter().all(|r| r.insulation_mm.is_none()));
}

#[test]
fn recommends_smallest_acceptable_diameter() {
    let result = size_pipe(&FakeProvider::new(), &steam_line()).expect("sizing");
    let idx = result.recommended.expect("recommendation");
    assert!(result.rows[..idx].iter().all(|r| !r.acceptable));
    let best = result.recommendation().expect("row");
    assert!(best.acceptable);
    assert!(best.velocity_m_s >= 20.0 && best.velocity_m_s <= 30.0);
    assert!(best.pressure_drop_mbar <= 100.0);
    // 20 mm에서 약 22 m/s, 25 mm에서는 20 m/s 아래로 떨어진다
    assert_eq!(best.diameter_mm, 20.0);
}

#[test]
fn fittings_lengthen_the_line() {
    let mut input = steam_line();
    input.fittings = FittingInventory::parse("90_elbow=2").expect("fittings");
    let result = size_pipe(&FakeProvider::new(), &input).expect("sizing");
    let first = &result.rows[0];
    assert_close("eq length", first.equivalent_length_m, 2.0 * 30.0 * 0.02, 1e-12);
    assert_close("total", first.total_length_m, 1.0 + 1.2, 1e-12);
}

#[test]
fn impossible_constraints_leave_no_recommendation() {
    let mut input = steam_line();
    input.min_velocity_m_s = 500.0;
    input.max_velocity_m_s = 600.0;
    let result = size_pipe(&FakeProvider::new(), &input).expect("sizing");
    assert!(result.recommended.is_none());
    assert!(result.recommendation().is_none());
    assert!(!result.warnings.is_empty());
}

#[test]
fn insulation_column_when_requested() {
    let mut input = steam_line();
    input.insulation = Some(InsulationSpec {
        ambient_temp_c: 25.0,
        max_heat_loss_w_per_m: 30.0,
        conductivity_w_per_mk: 0.04,
    });
    let result = size_pipe(&FakeProvider::new(), &input).expect("sizing");
    let thickness: Vec<f64> = result.rows.iter().filter_map(|r| r.insulation_mm).collect();
    assert_eq!(thickness.len(), result.rows.len());
    assert!(thickness.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn rejects_bad_inputs() {
    let mut input = steam_line();
    input.material = "Unobtainium".into();
    assert!(matches!(
        size_pipe(&FakeProvider::new(), &input),
        Err(CalcError::InvalidInput(_))
    ));

    let mut input = steam_line();
    input.step_mm = 0.0;
    assert!(matches!(
        size_pipe(&FakeProvider::new(), &input),
        Err(CalcError::Domain { .. })
    ));

    let mut input = steam_line();
    input.max_diameter_mm = 10.0;
    assert!(matches!(
        size_pipe(&FakeProvider::new(), &input),
        Err(CalcError::InvalidInput(_))
    ));

    assert!(matches!(
        size_pipe(&FailingProvider, &steam_line()),
        Err(CalcError::PropertyLookup(_))
    ));
}

#[test]
fn superheated_steam_with_real_properties() {
    let provider = StandardProvider::new(ProviderConfig::default());
    let result = size_pipe(&provider, &steam_line()).expect("sizing");
    // 4 bar a, 145 °C 과열증기 밀도는 약 2.1 kg/m³
    assert!(
        result.density_kg_m3 > 2.0 && result.density_kg_m3 < 2.3,
        "density {}",
        result.density_kg_m3
    );
    assert!(result.rows.iter().all(|r| r.friction_converged));
}
