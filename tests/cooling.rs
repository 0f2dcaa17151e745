mod common;

use common::{assert_close, FailingProvider, FakeProvider};
use process_engineering_toolbox::{
    air::{atmospheric_pressure_kpa, psychrometric_properties},
    cooling::{cooling_tower, pump_system},
    properties::{ProviderConfig, StandardProvider},
    CalcError,
};

fn tower_input() -> cooling_tower::CoolingTowerInput {
    cooling_tower::CoolingTowerInput {
        heat_load_kw: 80.0,
        water_cp_kj_per_kgk: 4.18,
        water_in_c: 31.0,
        wet_bulb_c: 18.99,
        approach_c: 3.0,
    }
}

fn pump_input() -> pump_system::PumpSystemInput {
    pump_system::PumpSystemInput {
        fluid: "Water".into(),
        demand_flow_l_min: 20.0,
        pipe_length_m: 50.0,
        diameter_m: 0.025,
        temperature_c: 20.0,
        pressure_bar: 1.0,
        elevations_m: vec![0.0, 0.0],
        pump_rated_pressure_bar: 3.0,
        pump_max_flow_l_min: 35.0,
    }
}

#[test]
fn cooling_tower_range_approach() {
    let res = cooling_tower::compute_cooling_tower(&tower_input()).expect("tower");
    assert!((res.water_out_c - 21.99).abs() < 1e-9);
    assert!((res.range_c - 9.01).abs() < 1e-9);
    assert_close("flow", res.water_flow_kg_s, 80.0 / (4.18 * 9.01), 1e-12);
    assert!((res.water_flow_kg_s - 2.124).abs() < 1e-3);
    assert!((res.effectiveness - 0.7502).abs() < 1e-4);
    assert!(res.warnings.is_empty());
}

#[test]
fn cooling_tower_small_approach_warns() {
    let mut input = tower_input();
    input.approach_c = 1.0;
    let res = cooling_tower::compute_cooling_tower(&input).expect("tower");
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn cooling_tower_non_positive_range_is_domain_error() {
    let mut input = tower_input();
    input.water_in_c = 21.99;
    assert!(matches!(
        cooling_tower::compute_cooling_tower(&input),
        Err(CalcError::Domain { .. })
    ));
    input.water_in_c = 15.0;
    assert!(matches!(
        cooling_tower::compute_cooling_tower(&input),
        Err(CalcError::Domain { .. })
    ));
}

#[test]
fn cooling_tower_losses() {
    let losses = cooling_tower::compute_cooling_tower_losses(2.0, 10.0, 3.0).expect("losses");
    let flow_kg_h = 7200.0;
    assert_close("evap", losses.evaporation_kg_h, 0.000_85 * flow_kg_h * 10.0, 1e-12);
    assert_close("drift", losses.drift_kg_h, 0.002 * flow_kg_h, 1e-12);
    assert_close("blowdown", losses.blowdown_kg_h, losses.evaporation_kg_h / 2.0, 1e-12);
    assert_close(
        "makeup",
        losses.makeup_kg_h(),
        losses.evaporation_kg_h + losses.drift_kg_h + losses.blowdown_kg_h,
        1e-12,
    );

    for coc in [1.0, 0.5] {
        assert!(matches!(
            cooling_tower::compute_cooling_tower_losses(2.0, 10.0, coc),
            Err(CalcError::Domain { .. })
        ));
    }
}

#[test]
fn atmospheric_pressure_by_altitude() {
    assert_close("sea level", atmospheric_pressure_kpa(0.0).expect("p"), 101.3, 1e-12);
    assert_close("1884 m", atmospheric_pressure_kpa(1884.0).expect("p"), 80.627, 1e-4);
    assert!(matches!(
        atmospheric_pressure_kpa(50_000.0),
        Err(CalcError::Domain { .. })
    ));
}

#[test]
fn psychrometrics_partial_pressures() {
    let air = psychrometric_properties(&FakeProvider::new(), 24.0, 60.0, 0.0).expect("air");
    assert_close(
        "Pv",
        air.vapor_pressure_kpa,
        0.6 * air.saturation_pressure_kpa,
        1e-12,
    );
    assert_close(
        "Pa",
        air.dry_air_pressure_kpa + air.vapor_pressure_kpa,
        air.atmospheric_pressure_kpa,
        1e-12,
    );
    assert_close(
        "ω",
        air.specific_humidity,
        0.622 * air.vapor_pressure_kpa / air.dry_air_pressure_kpa,
        1e-12,
    );
    assert_eq!(air.wet_bulb_c, 18.99);

    for rh in [-1.0, 101.0] {
        assert!(matches!(
            psychrometric_properties(&FakeProvider::new(), 24.0, rh, 0.0),
            Err(CalcError::Domain { .. })
        ));
    }
    assert!(matches!(
        psychrometric_properties(&FailingProvider, 24.0, 60.0, 0.0),
        Err(CalcError::PropertyLookup(_))
    ));
}

#[test]
fn psychrometrics_wet_bulb_from_standard_provider() {
    let provider = StandardProvider::new(ProviderConfig::default());
    let air = psychrometric_properties(&provider, 24.0, 60.0, 1884.0).expect("air");
    assert!(air.wet_bulb_c < 24.0 && air.wet_bulb_c > 10.0, "Twb={}", air.wet_bulb_c);

    let saturated = psychrometric_properties(&provider, 24.0, 100.0, 0.0).expect("air");
    assert!((saturated.wet_bulb_c - 24.0).abs() < 0.05);
}

#[test]
fn cooling_tower_pipeline() {
    let sizing = cooling_tower::size_cooling_tower(
        &FakeProvider::new(),
        &cooling_tower::CoolingTowerSizingInput {
            altitude_m: 1884.0,
            dry_bulb_c: 24.0,
            relative_humidity_pct: 60.0,
            heat_load_kw: 80.0,
            water_in_c: 31.0,
            approach_c: 3.0,
            cycles_of_concentration: 3.0,
            water_cp_kj_per_kgk: 4.18,
        },
    )
    .expect("sizing");
    assert_close("P_atm", sizing.air.atmospheric_pressure_kpa, 80.627, 1e-4);
    assert!((sizing.performance.water_out_c - 21.99).abs() < 1e-9);
    assert_close(
        "blowdown",
        sizing.losses.blowdown_kg_h,
        sizing.losses.evaporation_kg_h / 2.0,
        1e-12,
    );
}

#[test]
fn pump_flat_profile_is_friction_only() {
    let res = pump_system::compute_pump_system(&FakeProvider::new(), &pump_input()).expect("pump");
    assert_close("head", res.total_head_m, res.friction_head_m, 1e-12);
    assert!(res.friction_head_m > 0.0);
    // 20 L/min, 25 mm: v≈0.68 m/s, Re≈1.7e4 → Blasius
    assert_close("velocity", res.velocity_m_s, 0.679, 1e-3);
    assert_close("f", res.friction_factor, 0.316 / res.reynolds.powf(0.25), 1e-12);
    assert_close(
        "dp",
        res.required_pressure_pa,
        res.total_head_m * res.density_kg_m3 * 9.81,
        1e-9,
    );
    assert!(res.flow_ok && res.pressure_ok && res.feasible());
}

#[test]
fn pump_elevation_adds_static_head() {
    let flat = pump_system::compute_pump_system(&FakeProvider::new(), &pump_input()).expect("flat");
    let mut input = pump_input();
    input.elevations_m = vec![0.0, 4.0, 10.0];
    let res = pump_system::compute_pump_system(&FakeProvider::new(), &input).expect("pump");
    assert_close("friction", res.friction_head_m, flat.friction_head_m, 1e-9);
    assert_close("total", res.total_head_m, flat.friction_head_m + 10.0, 1e-9);
}

#[test]
fn pump_limits_are_inclusive() {
    let mut input = pump_input();
    input.demand_flow_l_min = input.pump_max_flow_l_min;
    let res = pump_system::compute_pump_system(&FakeProvider::new(), &input).expect("pump");
    assert!(res.flow_ok);

    input.demand_flow_l_min = 36.0;
    input.pump_rated_pressure_bar = 0.01;
    let res = pump_system::compute_pump_system(&FakeProvider::new(), &input).expect("pump");
    assert!(!res.flow_ok && !res.pressure_ok);
    assert!(!res.feasible());
    assert_eq!(res.warnings.len(), 2);
}

#[test]
fn pump_curves() {
    let res = pump_system::compute_pump_system(&FakeProvider::new(), &pump_input()).expect("pump");
    let first = res.curve.first().expect("curve");
    assert_eq!(first.flow_l_min, 0.0);
    assert!(first.system_head_m.is_infinite());
    assert_close(
        "shutoff head",
        first.pump_head_m,
        3.0e5 / (res.density_kg_m3 * 9.81),
        1e-12,
    );
    let last = res.curve.last().expect("curve");
    assert!(last.flow_l_min <= 35.0);
    assert!(res.curve.windows(2).all(|w| w[1].pump_head_m < w[0].pump_head_m));
}

#[test]
fn small_pump_curve_uses_fractional_steps() {
    let mut input = pump_input();
    input.demand_flow_l_min = 0.4;
    input.pump_max_flow_l_min = 0.5;
    let res = pump_system::compute_pump_system(&FakeProvider::new(), &input).expect("pump");
    assert_eq!(res.curve.len(), 21);
    assert_close("step", res.curve[1].flow_l_min, 0.025, 1e-12);
    assert_close("q_max", res.curve[20].flow_l_min, 0.5, 1e-12);
    assert_close("pump head at q_max", res.curve[20].pump_head_m, 0.0, 1e-9);
    assert!(res.curve[1..].iter().all(|p| p.system_head_m.is_finite()));
    assert!(res.curve[1..]
        .windows(2)
        .all(|w| w[1].system_head_m > w[0].system_head_m));
}

#[test]
fn pump_needs_two_elevations() {
    let mut input = pump_input();
    input.elevations_m = vec![0.0];
    assert!(matches!(
        pump_system::compute_pump_system(&FakeProvider::new(), &input),
        Err(CalcError::InvalidInput(_))
    ));
}
