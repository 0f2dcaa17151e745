//! Darcy 마찰계수 계산기.
//!
//! 두 전략을 별도 함수로 제공한다. 고 Re에서 서로 다른 값을 내므로 하나로 합치지 않는다.
//! - [`solve_colebrook`]: Colebrook-White 암시식 고정점 반복
//! - [`solve_explicit`]: 층류 64/Re + Blasius 근사

use tracing::{debug, warn};

use crate::error::{CalcError, CalcResult};

/// Colebrook 층류 경계 Reynolds 수
pub const COLEBROOK_LAMINAR_RE: f64 = 2300.0;
/// Blasius 근사 층류 경계 Reynolds 수
pub const EXPLICIT_LAMINAR_RE: f64 = 2000.0;
const SEED: f64 = 0.001;
const MAX_ITER: usize = 5000;
const TOLERANCE: f64 = 1e-6;

/// Colebrook 반복 결과. `converged == false`면 반복 상한에 도달한 최선 추정치이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookSolution {
    pub friction_factor: f64,
    /// 수행한 반복 횟수. 층류 분기면 0.
    pub iterations: usize,
    pub converged: bool,
}

/// Colebrook 식 `1/√f = -2·log10(ε/D/3.7 + 2.51/(Re·√f))`를 고정점 반복으로 푼다.
/// Re ≤ 2300은 층류로 보고 64/Re를 그대로 반환한다.
pub fn solve_colebrook(reynolds: f64, relative_roughness: f64) -> CalcResult<ColebrookSolution> {
    if !(reynolds > 0.0) {
        return Err(CalcError::domain("레이놀즈수", reynolds));
    }
    if reynolds <= COLEBROOK_LAMINAR_RE {
        return Ok(ColebrookSolution {
            friction_factor: 64.0 / reynolds,
            iterations: 0,
            converged: true,
        });
    }

    let mut f = SEED;
    let mut iterations = 0;
    let mut converged = false;
    while iterations < MAX_ITER {
        iterations += 1;
        let lhs = 1.0 / f.sqrt();
        let rhs = -2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * f.sqrt())).log10();
        if (lhs - rhs).abs() < TOLERANCE {
            converged = true;
            break;
        }
        f = 1.0 / (rhs * rhs);
    }

    if converged {
        debug!(reynolds, relative_roughness, f, iterations, "Colebrook 수렴");
    } else {
        warn!(reynolds, relative_roughness, f, "Colebrook 반복 상한 도달, 최선 추정치 사용");
    }
    Ok(ColebrookSolution {
        friction_factor: f,
        iterations,
        converged,
    })
}

/// 반복 없는 근사식: Re < 2000은 64/Re, 그 외는 Blasius `0.316/Re^0.25`.
pub fn solve_explicit(reynolds: f64) -> CalcResult<f64> {
    if !(reynolds > 0.0) {
        return Err(CalcError::domain("레이놀즈수", reynolds));
    }
    if reynolds < EXPLICIT_LAMINAR_RE {
        Ok(64.0 / reynolds)
    } else {
        Ok(0.316 / reynolds.powf(0.25))
    }
}
