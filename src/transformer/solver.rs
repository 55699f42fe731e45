use crate::transformer::efficiency::{self, EfficiencyResult};
use crate::transformer::inputs::TestInputs;
use crate::transformer::open_circuit::{self, OpenCircuitError};
use crate::transformer::referral::{self, EquivalentCircuit};
use crate::transformer::regulation::{self, RegulationError, RegulationResult};
use crate::transformer::short_circuit::{self, ShortCircuitError};

/// 계산은 이어가되 사용자에게 알려야 하는 비치명 경고.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveWarning {
    /// 단락 시험 측정값이 서로 모순되어 X_eq를 0으로 강제함
    InconsistentImpedance,
}

impl std::fmt::Display for SolveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveWarning::InconsistentImpedance => {
                write!(f, "임피던스 측정값이 일관되지 않아 X_eq를 0으로 설정했습니다.")
            }
        }
    }
}

/// 해석 전체를 중단시키는 오류 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// 단락 시험 계산 오류
    ShortCircuit(ShortCircuitError),
    /// 개방 시험 계산 오류
    OpenCircuit(OpenCircuitError),
    /// 전압 변동/효율 계산 오류
    Regulation(RegulationError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::ShortCircuit(e) => write!(f, "단락 시험 오류: {e}"),
            SolveError::OpenCircuit(e) => write!(f, "개방 시험 오류: {e}"),
            SolveError::Regulation(e) => write!(f, "운전점 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<ShortCircuitError> for SolveError {
    fn from(value: ShortCircuitError) -> Self {
        SolveError::ShortCircuit(value)
    }
}

impl From<OpenCircuitError> for SolveError {
    fn from(value: OpenCircuitError) -> Self {
        SolveError::OpenCircuit(value)
    }
}

impl From<RegulationError> for SolveError {
    fn from(value: RegulationError) -> Self {
        SolveError::Regulation(value)
    }
}

/// 한 번의 해석으로 얻는 결과 스냅샷.
#[derive(Debug, Clone)]
pub struct TransformerAnalysis {
    /// 권수비 a = Vp/Vs
    pub turns_ratio: f64,
    /// 단락 시험 역률
    pub sc_power_factor: f64,
    /// 단락 시험 위상각 [°]
    pub sc_phase_angle_deg: f64,
    /// 1차 환산 파라미터
    pub primary: EquivalentCircuit,
    /// 2차 환산 파라미터
    pub secondary: EquivalentCircuit,
    pub regulation: RegulationResult,
    pub efficiency: EfficiencyResult,
    /// 비치명 경고 목록
    pub warnings: Vec<SolveWarning>,
}

/// 검증된 입력으로 전체 해석을 수행한다.
///
/// 권수비 → 단락 환산 → 개방 환산 → 2차 환산 → 전압 변동 → 효율 순의
/// 순차 계산이다. 호출 간 공유 상태는 없고 같은 입력이면 같은 결과를 낸다.
pub fn solve(inputs: &TestInputs) -> Result<TransformerAnalysis, SolveError> {
    let turns_ratio = inputs.turns_ratio();
    let a_squared = turns_ratio * turns_ratio;

    let sc = short_circuit::solve_short_circuit(inputs.short_circuit)?;
    let oc = open_circuit::solve_open_circuit(inputs.open_circuit, a_squared)?;

    let primary = EquivalentCircuit {
        z_eq_mag_ohm: sc.z_eq_mag_ohm,
        z_eq_angle_deg: sc.phase_angle_deg,
        r_eq_ohm: sc.r_eq_ohm,
        x_eq_ohm: sc.x_eq_ohm,
        y_mag_siemens: oc.y_mag_siemens,
        y_angle_deg: oc.phase_angle_deg,
        conductance_siemens: oc.conductance_siemens,
        susceptance_siemens: oc.susceptance_siemens,
        core_resistance_ohm: oc.core_resistance_ohm,
        magnetizing_reactance_ohm: oc.magnetizing_reactance_ohm,
    };
    let secondary = referral::refer_to_secondary(&primary, a_squared);

    let regulation = regulation::solve_regulation(
        inputs.power_rating_va,
        inputs.secondary_voltage_v,
        secondary.r_eq_ohm,
        secondary.x_eq_ohm,
    )?;
    let efficiency = efficiency::solve_efficiency(
        inputs.power_rating_va,
        inputs.secondary_voltage_v,
        secondary.r_eq_ohm,
        secondary.x_eq_ohm,
        secondary.core_resistance_ohm,
    )?;

    let mut warnings = Vec::new();
    if sc.reactance_clamped {
        warnings.push(SolveWarning::InconsistentImpedance);
    }

    Ok(TransformerAnalysis {
        turns_ratio,
        sc_power_factor: sc.power_factor,
        sc_phase_angle_deg: sc.phase_angle_deg,
        primary,
        secondary,
        regulation,
        efficiency,
        warnings,
    })
}
