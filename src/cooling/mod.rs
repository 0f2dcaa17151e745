//! 냉각수 계통 계산 모듈을 모아둔다.
//! 증발식 냉각탑 성능/손실, 펌프 계통 수두와 펌프 곡선으로 구성한다.

pub mod cooling_tower;
pub mod pump_system;
