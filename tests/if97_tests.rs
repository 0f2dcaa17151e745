//! IF97 기준점 회귀 테스트. IAPWS-IF97 공식 문서의 검증 예제 값을 물성 제공자 경유로 확인한다.
use process_engineering_toolbox::properties::{
    FluidState, PropertyProvider, ProviderConfig, StandardProvider, StatePair, SubstanceConstant,
    WaterModel,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn water_tp(p_bar: f64, t_c: f64) -> FluidState {
    StandardProvider::new(ProviderConfig::default())
        .lookup(
            "Water",
            StatePair::TemperaturePressure {
                t_k: t_c + 273.15,
                p_pa: p_bar * 1e5,
            },
        )
        .expect("water lookup")
}

fn assert_hvs(tag: &str, st: &FluidState, h: f64, v: f64, s: f64, tol: f64) {
    assert_close(&format!("h{tag}"), st.enthalpy_j_per_kg, h, tol);
    assert_close(&format!("v{tag}"), 1.0 / st.density_kg_m3, v, tol);
    assert_close(&format!("s{tag}"), st.entropy_j_per_kgk, s, tol);
    assert!(st.viscosity_pa_s > 0.0, "μ{tag}");
    assert!(st.quality.is_none());
}

#[test]
fn region1_reference_point() {
    // IF97: p = 3 MPa (30 bar abs), T = 300 K (26.85 °C)
    let st = water_tp(30.0, 26.85);
    assert_hvs(
        "",
        &st,
        115_331.273_021_438_4,
        0.001_002_151_679_686_694_3,
        392.294_792_402_624_27,
        1e-6,
    );
}

#[test]
fn region2_reference_points() {
    // IF97: p = 0.0035 MPa (0.035 bar abs), T = 300 K (26.85 °C)
    let st = water_tp(0.035, 26.85);
    assert_hvs(
        "300K",
        &st,
        2_549_911.450_840_020_3,
        39.491_386_637_762_98,
        8_522.389_667_335_792,
        1e-6,
    );

    // IF97: p = 0.0035 MPa (0.035 bar abs), T = 700 K (426.85 °C)
    let st = water_tp(0.035, 426.85);
    assert_hvs(
        "700K",
        &st,
        3_335_683.753_731_224,
        92.301_589_817_419_68,
        10_174.999_578_595_989,
        1e-6,
    );
}

#[test]
fn region3_reference_point() {
    // IF97: p = 25 MPa (250 bar abs), T = 650 K (376.85 °C)
    let st = water_tp(250.0, 376.85);
    assert_hvs(
        "",
        &st,
        1_876_359.122_516_944_4,
        0.002_045_512_438_704_213_3,
        4_075.979_000_313_241,
        5e-4,
    );
}

#[test]
fn region5_reference_points() {
    // IF97: p = 0.5 MPa (5 bar abs), T = 1500 K (1226.85 °C)
    let st = water_tp(5.0, 1_226.85);
    assert_hvs(
        "1500K-0.5MPa",
        &st,
        5_219_768.551_208_338,
        1.384_550_898_781_53,
        9_654.088_753_312_948,
        1e-6,
    );

    // IF97: p = 30 MPa (300 bar abs), T = 1500 K (1226.85 °C)
    let st = water_tp(300.0, 1_226.85);
    assert_hvs(
        "1500K-30MPa",
        &st,
        5_167_235.140_089_517,
        0.023_076_129_947_253_575,
        7_729.701_326_182_764,
        1e-6,
    );
}

#[test]
fn saturation_at_one_atmosphere() {
    let provider = StandardProvider::new(ProviderConfig::default());
    let liquid = provider
        .lookup("Water", StatePair::PressureQuality { p_pa: 101_325.0, quality: 0.0 })
        .expect("saturated liquid");
    assert_close("Tsat", liquid.temperature_k, 373.124, 1e-5);
    assert_close("hf", liquid.enthalpy_j_per_kg, 419_099.0, 1e-3);

    let vapor = provider
        .lookup("Steam", StatePair::TemperatureQuality { t_k: liquid.temperature_k, quality: 1.0 })
        .expect("saturated vapor");
    assert_close("Psat", vapor.pressure_pa, 101_325.0, 1e-4);
    assert_close("hfg", vapor.enthalpy_j_per_kg - liquid.enthalpy_j_per_kg, 2_256_400.0, 2e-3);
    assert!(vapor.density_kg_m3 < liquid.density_kg_m3);
}

#[test]
fn two_phase_inversion_by_enthalpy_and_entropy() {
    let provider = StandardProvider::new(ProviderConfig::default());
    let mid = provider
        .lookup("H2O", StatePair::PressureQuality { p_pa: 5e5, quality: 0.3 })
        .expect("wet steam");

    let by_h = provider
        .lookup(
            "Water",
            StatePair::PressureEnthalpy { p_pa: 5e5, h_j_per_kg: mid.enthalpy_j_per_kg },
        )
        .expect("ph");
    assert_close("x(h)", by_h.quality.expect("two-phase"), 0.3, 1e-6);
    assert_close("T(h)", by_h.temperature_k, mid.temperature_k, 1e-9);

    let by_s = provider
        .lookup(
            "Water",
            StatePair::PressureEntropy { p_pa: 5e5, s_j_per_kgk: mid.entropy_j_per_kgk },
        )
        .expect("ps");
    assert_close("x(s)", by_s.quality.expect("two-phase"), 0.3, 1e-6);

    // 돔 바깥이면 단상
    let superheated = provider
        .lookup("Water", StatePair::PressureEnthalpy { p_pa: 5e5, h_j_per_kg: 3.0e6 })
        .expect("superheated");
    assert!(superheated.quality.is_none());
    assert!(superheated.temperature_k > mid.temperature_k);
}

#[test]
fn invalid_water_states_are_lookup_errors() {
    let provider = StandardProvider::new(ProviderConfig::default());
    assert!(provider
        .lookup("Water", StatePair::PressureQuality { p_pa: 1e5, quality: 1.5 })
        .is_err());
    assert!(provider
        .lookup("Water", StatePair::TemperatureQuality { t_k: 700.0, quality: 0.5 })
        .is_err());
    assert!(provider
        .lookup("Water", StatePair::TemperaturePressure { t_k: 300.0, p_pa: -1.0 })
        .is_err());
    assert!(provider
        .lookup("Unobtainium", StatePair::TemperaturePressure { t_k: 300.0, p_pa: 1e5 })
        .is_err());
}

#[test]
fn water_constants() {
    let provider = StandardProvider::new(ProviderConfig::default());
    assert_close(
        "M",
        provider.molar_mass("Water").expect("M"),
        0.018_015_268,
        1e-12,
    );
    assert_eq!(
        provider
            .constant("Water", SubstanceConstant::CriticalTemperature)
            .expect("Tc"),
        647.096
    );
    assert_eq!(
        provider.constant("Water", SubstanceConstant::Gwp100).expect("gwp"),
        0.0
    );
}

#[test]
fn iapws95_water_model_agrees_with_if97() {
    let if97 = StandardProvider::new(ProviderConfig::default());
    let iapws95 = StandardProvider::new(ProviderConfig {
        water_model: WaterModel::CoolProp,
    });
    let pair = StatePair::PressureQuality { p_pa: 101_325.0, quality: 0.0 };
    let a = if97.lookup("Water", pair).expect("IF97");
    let b = iapws95.lookup("Water", pair).expect("IAPWS-95");
    assert_close("Tsat", b.temperature_k, a.temperature_k, 1e-4);
    assert_close("hf", b.enthalpy_j_per_kg, a.enthalpy_j_per_kg, 1e-3);
    assert_close("rho", b.density_kg_m3, a.density_kg_m3, 1e-3);
    assert!(iapws95.constant("Water", SubstanceConstant::CriticalTemperature).is_ok());
}
