use crate::transformer::inputs::ShortCircuitTest;

/// 단락 시험에서 환산한 직렬 등가 임피던스.
#[derive(Debug, Clone, Copy)]
pub struct ShortCircuitSolution {
    /// 역률 cos(θ). [-1, 1]로 클램프한 값.
    pub power_factor: f64,
    /// 위상각 θ [°]
    pub phase_angle_deg: f64,
    /// |Z_eq| [Ω]
    pub z_eq_mag_ohm: f64,
    /// R_eq [Ω]
    pub r_eq_ohm: f64,
    /// X_eq [Ω]
    pub x_eq_ohm: f64,
    /// 측정값이 서로 모순되어 X_eq를 0으로 강제했는지 여부
    pub reactance_clamped: bool,
}

/// 단락 시험 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortCircuitError {
    /// Vsc·Isc가 0이라 역률을 정의할 수 없음
    DegenerateTest,
}

impl std::fmt::Display for ShortCircuitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortCircuitError::DegenerateTest => {
                write!(f, "Vsc와 Isc는 0일 수 없습니다.")
            }
        }
    }
}

impl std::error::Error for ShortCircuitError {}

/// 단락 시험 측정값을 직렬 등가 임피던스로 환산한다.
///
/// |Z_eq| = Vsc/Isc, R_eq = Psc/Isc², X_eq = sqrt(|Z_eq|² - R_eq²).
/// 측정 오차로 제곱근 안이 음수가 되면 X_eq = 0으로 두고 플래그만 세운다.
pub fn solve_short_circuit(
    test: ShortCircuitTest,
) -> Result<ShortCircuitSolution, ShortCircuitError> {
    let apparent_va = test.voltage_v * test.current_a;
    if apparent_va == 0.0 {
        return Err(ShortCircuitError::DegenerateTest);
    }

    let power_factor = (test.power_w / apparent_va).clamp(-1.0, 1.0);
    let phase_angle_deg = power_factor.acos().to_degrees();

    let z_eq_mag = test.voltage_v / test.current_a;
    let r_eq = test.power_w / (test.current_a * test.current_a);
    let x_eq_sq = z_eq_mag * z_eq_mag - r_eq * r_eq;
    let (x_eq, reactance_clamped) = if x_eq_sq < 0.0 {
        (0.0, true)
    } else {
        (x_eq_sq.sqrt(), false)
    };

    Ok(ShortCircuitSolution {
        power_factor,
        phase_angle_deg,
        z_eq_mag_ohm: z_eq_mag,
        r_eq_ohm: r_eq,
        x_eq_ohm: x_eq,
        reactance_clamped,
    })
}
