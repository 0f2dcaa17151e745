use thiserror::Error;
use tracing::info;

use crate::air::psychrometric_properties;
use crate::cli::{Cli, Commands};
use crate::config::{self, Config, ConfigError};
use crate::cooling::cooling_tower::{size_cooling_tower, CoolingTowerSizingInput};
use crate::cooling::pump_system::{compute_pump_system, PumpSystemInput};
use crate::diagram::process_path;
use crate::error::CalcError;
use crate::gas::GasMixture;
use crate::piping::insulation::{required_thickness, InsulationInput};
use crate::piping::sizing::{size_pipe, InsulationSpec, PipeSizingInput};
use crate::piping::{solve_colebrook, solve_explicit, FittingInventory};
use crate::properties::{PropertyProvider, StandardProvider};
use crate::refrigeration::{
    solve_refrigeration_cycle, substance_ratings, CompressionModel, EnvironmentalImpact,
    RefrigerationCycleInput,
};
use crate::units::kelvin_to_celsius;
use crate::vacuum::{continuous_operation_sizing, pumpdown_sizing, ContinuousInput, PumpDownInput};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Calc(#[from] CalcError),
}

/// 설정 파일을 정하고 하위 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => config::load_or_default()?,
    };
    let provider = StandardProvider::new(cfg.provider);
    info!(command = ?cli.command, water_model = ?cfg.provider.water_model, "계산 시작");
    execute(&cli.command, &cfg, &provider)
}

fn execute(command: &Commands, cfg: &Config, provider: &dyn PropertyProvider) -> Result<(), AppError> {
    match command {
        Commands::Friction {
            reynolds,
            relative_roughness,
            explicit,
        } => {
            if *explicit {
                println!("마찰계수(근사식): {:.6}", solve_explicit(*reynolds)?);
            } else {
                let sol = solve_colebrook(*reynolds, *relative_roughness)?;
                println!(
                    "마찰계수(Colebrook): {:.6}  반복 {}회, 수렴 {}",
                    sol.friction_factor, sol.iterations, sol.converged
                );
            }
        }
        Commands::PipeSizing {
            fluid,
            mass_flow,
            pressure,
            temperature,
            length,
            min_d,
            max_d,
            step,
            material,
            fittings,
            vmin,
            vmax,
            dp_max,
            ambient,
            q_max,
            k,
        } => {
            let input = PipeSizingInput {
                fluid: fluid.clone(),
                mass_flow_kg_per_h: *mass_flow,
                pressure_bar_abs: *pressure,
                temperature_c: *temperature,
                straight_length_m: *length,
                min_diameter_mm: *min_d,
                max_diameter_mm: *max_d,
                step_mm: step.unwrap_or(cfg.pipe_sizing.step_mm),
                material: material.clone(),
                fittings: FittingInventory::parse(fittings)?,
                min_velocity_m_s: *vmin,
                max_velocity_m_s: *vmax,
                max_pressure_drop_mbar: *dp_max,
                insulation: ambient.map(|t| InsulationSpec {
                    ambient_temp_c: t,
                    max_heat_loss_w_per_m: *q_max,
                    conductivity_w_per_mk: *k,
                }),
            };
            let result = size_pipe(provider, &input)?;
            println!(
                "밀도 {:.4} kg/m³, 점도 {:.4e} Pa·s, 거칠기 {} m",
                result.density_kg_m3, result.viscosity_pa_s, result.roughness_m
            );
            println!("내경[mm]  유속[m/s]  압력강하[mbar]  등가길이[m]  보온[mm]  적합");
            for row in &result.rows {
                let ins = match row.insulation_mm {
                    None => "-".to_string(),
                    Some(t) if t.is_finite() => format!("{t:.1}"),
                    Some(_) => "과대".to_string(),
                };
                println!(
                    "{:>8.1}  {:>9.2}  {:>14.2}  {:>11.3}  {:>8}  {}",
                    row.diameter_mm,
                    row.velocity_m_s,
                    row.pressure_drop_mbar,
                    row.equivalent_length_m,
                    ins,
                    if row.acceptable { "O" } else { "-" }
                );
            }
            if let Some(row) = result.recommendation() {
                println!(
                    "추천 내경: {:.1} mm (유속 {:.2} m/s, 압력강하 {:.2} mbar)",
                    row.diameter_mm, row.velocity_m_s, row.pressure_drop_mbar
                );
            }
            print_warnings(&result.warnings);
        }
        Commands::Insulation {
            diameter,
            fluid_temp,
            ambient,
            q_max,
            k,
        } => {
            let result = required_thickness(&InsulationInput {
                diameter_m: *diameter,
                fluid_temp_c: *fluid_temp,
                ambient_temp_c: *ambient,
                max_heat_loss_w_per_m: *q_max,
                conductivity_w_per_mk: *k,
            });
            println!("필요 보온 두께: {:.1} mm", result.thickness_mm);
            print_warnings(&result.warnings);
        }
        Commands::Psychro { dry_bulb, rh, altitude } => {
            let st = psychrometric_properties(provider, *dry_bulb, *rh, *altitude)?;
            println!("대기압: {:.2} kPa", st.atmospheric_pressure_kpa);
            println!("포화 수증기압: {:.3} kPa", st.saturation_pressure_kpa);
            println!("수증기 분압: {:.3} kPa", st.vapor_pressure_kpa);
            println!("건공기 분압: {:.3} kPa", st.dry_air_pressure_kpa);
            println!("비습도: {:.5} kg/kg", st.specific_humidity);
            println!("습구온도: {:.2} °C", st.wet_bulb_c);
        }
        Commands::CoolingTower {
            altitude,
            dry_bulb,
            rh,
            heat_load,
            water_in,
            approach,
            coc,
        } => {
            let sizing = size_cooling_tower(
                provider,
                &CoolingTowerSizingInput {
                    altitude_m: *altitude,
                    dry_bulb_c: *dry_bulb,
                    relative_humidity_pct: *rh,
                    heat_load_kw: *heat_load,
                    water_in_c: *water_in,
                    approach_c: *approach,
                    cycles_of_concentration: *coc,
                    water_cp_kj_per_kgk: cfg.cooling_tower.water_cp_kj_per_kgk,
                },
            )?;
            println!("대기압: {:.2} kPa", sizing.air.atmospheric_pressure_kpa);
            println!("습구온도: {:.2} °C", sizing.air.wet_bulb_c);
            println!("출구 수온: {:.2} °C", sizing.performance.water_out_c);
            println!("순환수량: {:.0} kg/h", sizing.performance.water_flow_kg_s * 3600.0);
            println!("효율: {:.1} %", sizing.performance.effectiveness * 100.0);
            println!("증발 손실: {:.0} kg/h", sizing.losses.evaporation_kg_h);
            println!("비산 손실: {:.0} kg/h", sizing.losses.drift_kg_h);
            println!("블로다운: {:.0} kg/h", sizing.losses.blowdown_kg_h);
            println!("보충수: {:.0} kg/h", sizing.losses.makeup_kg_h());
            print_warnings(&sizing.performance.warnings);
        }
        Commands::Cycle {
            refrigerant,
            t_evap,
            t_cond,
            power,
            efficiency,
        } => {
            let compression = match efficiency {
                Some(eta) => CompressionModel::Isentropic { efficiency: *eta },
                None => cfg.refrigeration.compression,
            };
            let result = solve_refrigeration_cycle(
                provider,
                &RefrigerationCycleInput {
                    refrigerant: refrigerant.clone(),
                    evaporator_temp_c: *t_evap,
                    condenser_temp_c: *t_cond,
                    compressor_power_kw: *power,
                    compression,
                },
            )?;
            println!("상태  P[kPa]     T[°C]     h[kJ/kg]   s[kJ/kg·K]");
            for (label, st) in result.states() {
                println!(
                    "{:>4}  {:>9.3}  {:>8.2}  {:>9.2}  {:>9.4}",
                    label,
                    st.pressure_pa / 1000.0,
                    kelvin_to_celsius(st.temperature_k),
                    st.enthalpy_j_per_kg / 1000.0,
                    st.entropy_j_per_kgk / 1000.0
                );
            }
            println!("COP: {:.3}", result.cop);
            println!("냉매 유량: {:.4} kg/s", result.mass_flow_kg_s);
            println!("방열량: {:.2} kW", result.heat_load_kw);
            println!("흡열량: {:.2} kW", result.cooling_load_kw);
            println!("온도 상승폭: {:.1} K", result.temperature_lift_k);
        }
        Commands::Ratings { fluid } => {
            let ratings = substance_ratings(provider, fluid)?;
            match ratings.environmental {
                EnvironmentalImpact::None => println!("환경 영향: 없음(물)"),
                EnvironmentalImpact::Rated { gwp100, gwp20, odp } => {
                    println!("GWP100: {gwp100}, GWP20: {gwp20}, ODP: {odp}")
                }
                EnvironmentalImpact::Unavailable => println!("환경 지표 정보 없음"),
            }
            println!(
                "건강 위험도: {}, 인화성: {}, 물리적 위험도: {}",
                ratings.hazards.health, ratings.hazards.flammability, ratings.hazards.physical
            );
        }
        Commands::Pumpdown {
            components,
            volume,
            pi,
            pf,
            temperature,
            time,
        } => {
            let result = pumpdown_sizing(
                provider,
                &PumpDownInput {
                    mixture: parse_mixture(components)?,
                    volume_m3: *volume,
                    initial_pressure_mbar: *pi,
                    final_pressure_mbar: *pf,
                    temperature_c: *temperature,
                    duration_s: *time,
                },
                &cfg.vacuum,
            )?;
            println!(
                "배기 속도: {:.2} m³/h ({:.2} Nm³/h)",
                result.flow_m3_h, result.flow_nm3_h
            );
            println!("혼합 몰질량: {:.3} kg/kmol", result.molar_mass_kg_per_mol * 1000.0);
            println!("밀도(초기 압력): {:.4} kg/m³", result.density_kg_m3);
            println!("점도(초기 압력): {:.3e} Pa·s", result.viscosity_pa_s);
            if let Some(tsat) = result.saturation_temp_c {
                println!("물 포화온도(초기 압력): {tsat:.2} °C");
            }
        }
        Commands::Continuous {
            pressure,
            temperature,
            steam,
            co2,
        } => {
            let result = continuous_operation_sizing(
                provider,
                &ContinuousInput {
                    pressure_mbar: *pressure,
                    temperature_c: *temperature,
                    steam_kg_h: *steam,
                    co2_kg_h: *co2,
                },
                &cfg.vacuum,
            )?;
            println!(
                "필요 흡입 용량: {:.2} m³/h ({:.2} Nm³/h)",
                result.flow_m3_h, result.flow_nm3_h
            );
            println!(
                "몰분율: 증기 {:.3}, CO₂ {:.3}",
                result.steam_mole_fraction, result.co2_mole_fraction
            );
            println!("혼합 밀도: {:.4} kg/m³", result.density_kg_m3);
            println!("혼합 점도: {:.3e} Pa·s", result.viscosity_pa_s);
        }
        Commands::Pump {
            fluid,
            flow,
            length,
            diameter,
            temperature,
            pressure,
            elevations,
            rated_pressure,
            max_flow,
        } => {
            let result = compute_pump_system(
                provider,
                &PumpSystemInput {
                    fluid: fluid.clone(),
                    demand_flow_l_min: *flow,
                    pipe_length_m: *length,
                    diameter_m: *diameter,
                    temperature_c: *temperature,
                    pressure_bar: *pressure,
                    elevations_m: parse_list(elevations)?,
                    pump_rated_pressure_bar: *rated_pressure,
                    pump_max_flow_l_min: *max_flow,
                },
            )?;
            println!("유속: {:.3} m/s, Re: {:.0}, f: {:.5}", result.velocity_m_s, result.reynolds, result.friction_factor);
            println!("총 수두(마찰+고도): {:.3} m", result.total_head_m);
            println!("필요 압력: {:.4} bar", result.required_pressure_bar());
            println!("유량 충족: {}, 압력 충족: {}", result.flow_ok, result.pressure_ok);
            println!("유량[L/min]  계통수두[m]  펌프수두[m]");
            for p in &result.curve {
                println!("{:>11.1}  {:>11.3}  {:>11.3}", p.flow_l_min, p.system_head_m, p.pump_head_m);
            }
            print_warnings(&result.warnings);
        }
        Commands::Path {
            fluid,
            temperature,
            pressure,
            process,
            end,
            points,
        } => {
            let states = process_path(
                provider,
                fluid,
                *temperature,
                *pressure,
                (*process).into(),
                *end,
                *points,
            )?;
            println!("T[°C]     P[bar]    h[kJ/kg]   s[kJ/kg·K]");
            for st in &states {
                println!(
                    "{:>8.2}  {:>8.4}  {:>9.2}  {:>9.4}",
                    st.temperature_c(),
                    st.pressure_pa / 1e5,
                    st.enthalpy_j_per_kg / 1000.0,
                    st.entropy_j_per_kgk / 1000.0
                );
            }
        }
    }
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    for w in warnings {
        println!("주의: {w}");
    }
}

/// `"0,1.5,3"` → [0.0, 1.5, 3.0]
fn parse_list(text: &str) -> Result<Vec<f64>, CalcError> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| CalcError::invalid_input(format!("숫자가 아닙니다: {s}")))
        })
        .collect()
}

/// `["Air=0.8", "Water=0.2"]` → 혼합물
fn parse_mixture(items: &[String]) -> Result<GasMixture, CalcError> {
    let components = items
        .iter()
        .map(|item| {
            let (name, frac) = item
                .split_once('=')
                .ok_or_else(|| CalcError::invalid_input(format!("'물질=질량비' 형식이 아님: {item}")))?;
            let frac = frac
                .trim()
                .parse::<f64>()
                .map_err(|_| CalcError::invalid_input(format!("질량비 오류: {item}")))?;
            Ok((name.trim().to_string(), frac))
        })
        .collect::<Result<Vec<_>, CalcError>>()?;
    Ok(GasMixture::new(components))
}
