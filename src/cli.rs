//! 명령줄 인자 정의. 기본값은 대표 운전 조건이다.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::diagram::ProcessKind;

#[derive(Parser, Debug)]
#[command(name = "process_engineering_toolbox")]
#[command(about = "공정 엔지니어링 계산 도구 (배관, 냉각탑, 냉동 사이클, 진공, 펌프)", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로(없으면 ./config.toml을 사용하거나 생성)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Darcy 마찰계수 (Colebrook 또는 근사식)
    Friction {
        #[arg(long)]
        reynolds: f64,
        /// 상대 거칠기 ε/D
        #[arg(long, default_value_t = 0.0)]
        relative_roughness: f64,
        /// 층류/Blasius 근사식 사용
        #[arg(long)]
        explicit: bool,
    },
    /// 후보 내경을 훑어 배관 크기 선정
    PipeSizing {
        #[arg(long, default_value = "Water")]
        fluid: String,
        /// 질량유량 [kg/h]
        #[arg(long, default_value_t = 50.0)]
        mass_flow: f64,
        /// 압력 [bar a]
        #[arg(long, default_value_t = 4.0)]
        pressure: f64,
        /// 온도 [°C]
        #[arg(long, default_value_t = 145.0)]
        temperature: f64,
        /// 직관 길이 [m]
        #[arg(long, default_value_t = 1.0)]
        length: f64,
        /// 최소 내경 [mm]
        #[arg(long, default_value_t = 20.0)]
        min_d: f64,
        /// 최대 내경 [mm]
        #[arg(long, default_value_t = 50.0)]
        max_d: f64,
        /// 내경 간격 [mm] (생략 시 설정값)
        #[arg(long)]
        step: Option<f64>,
        #[arg(long, default_value = "Carbon Steel")]
        material: String,
        /// 부속 목록, 예: "90_elbow=2,gate_valve=1"
        #[arg(long, default_value = "")]
        fittings: String,
        /// 최소 유속 [m/s]
        #[arg(long, default_value_t = 20.0)]
        vmin: f64,
        /// 최대 유속 [m/s]
        #[arg(long, default_value_t = 30.0)]
        vmax: f64,
        /// 최대 압력강하 [mbar]
        #[arg(long, default_value_t = 100.0)]
        dp_max: f64,
        /// 보온 계산용 주위 온도 [°C]. 지정하면 보온 두께도 계산한다.
        #[arg(long)]
        ambient: Option<f64>,
        /// 허용 열손실 [W/m]
        #[arg(long, default_value_t = 30.0)]
        q_max: f64,
        /// 보온재 열전도율 [W/m·K]
        #[arg(long, default_value_t = 0.04)]
        k: f64,
    },
    /// 보온 두께
    Insulation {
        /// 배관 외경 [m]
        #[arg(long)]
        diameter: f64,
        #[arg(long)]
        fluid_temp: f64,
        #[arg(long, default_value_t = 25.0)]
        ambient: f64,
        #[arg(long, default_value_t = 30.0)]
        q_max: f64,
        #[arg(long, default_value_t = 0.04)]
        k: f64,
    },
    /// 습공기 상태
    Psychro {
        #[arg(long, default_value_t = 24.0)]
        dry_bulb: f64,
        /// 상대습도 [%]
        #[arg(long, default_value_t = 60.0)]
        rh: f64,
        #[arg(long, default_value_t = 0.0)]
        altitude: f64,
    },
    /// 냉각탑 성능과 물 손실
    CoolingTower {
        #[arg(long, default_value_t = 1884.0)]
        altitude: f64,
        #[arg(long, default_value_t = 24.0)]
        dry_bulb: f64,
        #[arg(long, default_value_t = 60.0)]
        rh: f64,
        /// 열부하 [kW]
        #[arg(long, default_value_t = 80.0)]
        heat_load: f64,
        /// 온수 입구 온도 [°C]
        #[arg(long, default_value_t = 31.0)]
        water_in: f64,
        #[arg(long, default_value_t = 3.0)]
        approach: f64,
        /// 농축배수
        #[arg(long, default_value_t = 3.0)]
        coc: f64,
    },
    /// 증기압축 사이클
    Cycle {
        #[arg(long, default_value = "Water")]
        refrigerant: String,
        #[arg(long, default_value_t = 25.0)]
        t_evap: f64,
        #[arg(long, default_value_t = 100.0)]
        t_cond: f64,
        /// 압축기 동력 [kW]
        #[arg(long, default_value_t = 40.0)]
        power: f64,
        /// 등엔트로피 효율. 생략 시 설정의 압축 모델을 쓴다.
        #[arg(long)]
        efficiency: Option<f64>,
    },
    /// 환경 지표와 위험도
    Ratings {
        #[arg(long, default_value = "Water")]
        fluid: String,
    },
    /// 배기(pump-down) 진공펌프 용량
    Pumpdown {
        /// 성분=질량비, 반복 지정 가능 (예: --component Air=1)
        #[arg(long = "component", default_value = "Air=1")]
        components: Vec<String>,
        /// 용기 체적 [m³]
        #[arg(long, default_value_t = 1.0)]
        volume: f64,
        /// 초기 압력 [mbar]
        #[arg(long, default_value_t = 830.0)]
        pi: f64,
        /// 목표 압력 [mbar]
        #[arg(long, default_value_t = 50.0)]
        pf: f64,
        #[arg(long, default_value_t = 25.0)]
        temperature: f64,
        /// 배기 시간 [s]
        #[arg(long, default_value_t = 60.0)]
        time: f64,
    },
    /// 연속 운전 진공펌프 용량
    Continuous {
        /// 용기 압력 [mbar]
        #[arg(long, default_value_t = 200.0)]
        pressure: f64,
        #[arg(long, default_value_t = 100.0)]
        temperature: f64,
        /// 증기 유량 [kg/h]
        #[arg(long, default_value_t = 50.0)]
        steam: f64,
        /// CO₂ 유량 [kg/h]
        #[arg(long, default_value_t = 2.0)]
        co2: f64,
    },
    /// 펌프 계통 수두와 곡선
    Pump {
        #[arg(long, default_value = "Water")]
        fluid: String,
        /// 요구 유량 [L/min]
        #[arg(long, default_value_t = 20.0)]
        flow: f64,
        /// 배관 길이 [m]
        #[arg(long, default_value_t = 50.0)]
        length: f64,
        /// 내경 [m]
        #[arg(long, default_value_t = 0.025)]
        diameter: f64,
        #[arg(long, default_value_t = 20.0)]
        temperature: f64,
        /// 유체 압력 [bar a]
        #[arg(long, default_value_t = 1.0)]
        pressure: f64,
        /// 고도 점 [m], 쉼표 구분
        #[arg(long, default_value = "0,0")]
        elevations: String,
        /// 펌프 정격 압력 [bar]
        #[arg(long, default_value_t = 3.0)]
        rated_pressure: f64,
        /// 펌프 최대 유량 [L/min]
        #[arg(long, default_value_t = 35.0)]
        max_flow: f64,
    },
    /// T-s/P-h 선도용 과정 경로
    Path {
        #[arg(long, default_value = "Water")]
        fluid: String,
        #[arg(long, default_value_t = 150.0)]
        temperature: f64,
        /// 시작 압력 [bar]
        #[arg(long, default_value_t = 5.0)]
        pressure: f64,
        #[arg(long, value_enum, default_value_t = ProcessArg::Isobaric)]
        process: ProcessArg,
        /// 등압: 끝 온도 [°C], 등온/등엔탈피: 끝 압력 [bar]
        #[arg(long, default_value_t = 200.0)]
        end: f64,
        #[arg(long, default_value_t = 10)]
        points: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessArg {
    Isobaric,
    Isothermal,
    Isenthalpic,
}

impl From<ProcessArg> for ProcessKind {
    fn from(value: ProcessArg) -> Self {
        match value {
            ProcessArg::Isobaric => ProcessKind::Isobaric,
            ProcessArg::Isothermal => ProcessKind::Isothermal,
            ProcessArg::Isenthalpic => ProcessKind::Isenthalpic,
        }
    }
}
