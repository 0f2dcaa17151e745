//! 배관 부속류와 등가길이(L/D) 표.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// 지원하는 부속 종류. 정의 순서가 결과 분해표의 순서이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingKind {
    #[serde(rename = "90_elbow")]
    Elbow90,
    #[serde(rename = "45_elbow")]
    Elbow45,
    GlobeValve,
    GateValve,
    BallValve,
    CheckValve,
    TeeRun,
    TeeBranch,
}

impl FittingKind {
    pub const ALL: [FittingKind; 8] = [
        FittingKind::Elbow90,
        FittingKind::Elbow45,
        FittingKind::GlobeValve,
        FittingKind::GateValve,
        FittingKind::BallValve,
        FittingKind::CheckValve,
        FittingKind::TeeRun,
        FittingKind::TeeBranch,
    ];

    /// 무차원 등가길이비 L/D
    pub fn length_ratio(&self) -> f64 {
        match self {
            FittingKind::Elbow90 => 30.0,
            FittingKind::Elbow45 => 16.0,
            FittingKind::GlobeValve => 340.0,
            FittingKind::GateValve => 8.0,
            FittingKind::BallValve => 3.0,
            FittingKind::CheckValve => 100.0,
            FittingKind::TeeRun => 20.0,
            FittingKind::TeeBranch => 60.0,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FittingKind::Elbow90 => "90_elbow",
            FittingKind::Elbow45 => "45_elbow",
            FittingKind::GlobeValve => "globe_valve",
            FittingKind::GateValve => "gate_valve",
            FittingKind::BallValve => "ball_valve",
            FittingKind::CheckValve => "check_valve",
            FittingKind::TeeRun => "tee_run",
            FittingKind::TeeBranch => "tee_branch",
        }
    }
}

impl fmt::Display for FittingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FittingKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FittingKind::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::invalid_input(format!("알 수 없는 부속 종류: {s}")))
    }
}

/// 부속 종류별 개수. 등록되지 않은 종류는 0개로 본다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FittingInventory {
    counts: BTreeMap<FittingKind, u32>,
}

impl FittingInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: FittingKind, count: u32) -> Self {
        self.set(kind, count);
        self
    }

    pub fn set(&mut self, kind: FittingKind, count: u32) {
        self.counts.insert(kind, count);
    }

    pub fn count(&self, kind: FittingKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// `"90_elbow=4,gate_valve=2"` 형식을 해석한다.
    pub fn parse(text: &str) -> Result<Self, CalcError> {
        let mut inventory = Self::new();
        for item in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, count) = item
                .split_once('=')
                .ok_or_else(|| CalcError::invalid_input(format!("'종류=개수' 형식이 아님: {item}")))?;
            let kind: FittingKind = key.parse()?;
            let count: u32 = count
                .trim()
                .parse()
                .map_err(|_| CalcError::invalid_input(format!("부속 개수 오류: {item}")))?;
            inventory.set(kind, count);
        }
        Ok(inventory)
    }
}
