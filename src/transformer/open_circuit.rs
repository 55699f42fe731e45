use crate::transformer::inputs::OpenCircuitTest;

/// G/B를 0으로 간주하는 문턱값.
const ADMITTANCE_EPS: f64 = 1e-12;

/// 개방 시험에서 환산한 여자 분기 어드미턴스.
#[derive(Debug, Clone, Copy)]
pub struct OpenCircuitSolution {
    /// |Y_φ| [S]. 측정이 2차측이므로 a²를 곱해 1차 환산한 값.
    pub y_mag_siemens: f64,
    /// 역률 cos(θ). [-1, 1]로 클램프한 값.
    pub power_factor: f64,
    /// 위상각 θ [°]
    pub phase_angle_deg: f64,
    /// 컨덕턴스 G_φ [S]
    pub conductance_siemens: f64,
    /// 서셉턴스 B_φ [S]. 지상 분기라 음수가 된다.
    pub susceptance_siemens: f64,
    /// 철손 저항 R_c [Ω]. |G|가 문턱값 이하이면 None.
    pub core_resistance_ohm: Option<f64>,
    /// 자화 리액턴스 X_m [Ω]. |B|가 문턱값 이하이면 None.
    pub magnetizing_reactance_ohm: Option<f64>,
}

/// 개방 시험 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenCircuitError {
    /// Voc가 0
    ZeroVoltage,
    /// Voc·Ioc가 0이라 역률을 정의할 수 없음
    DegenerateTest,
}

impl std::fmt::Display for OpenCircuitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenCircuitError::ZeroVoltage => write!(f, "Voc는 0일 수 없습니다."),
            OpenCircuitError::DegenerateTest => {
                write!(f, "Voc와 Ioc는 0일 수 없습니다.")
            }
        }
    }
}

impl std::error::Error for OpenCircuitError {}

/// 개방 시험 측정값을 여자 분기 어드미턴스로 환산한다.
///
/// 전류가 전압보다 θ만큼 뒤지므로 분기 어드미턴스 각은 -θ로 잡는다.
/// R_c와 X_m은 a⁴/G, a⁴/|B| 스케일을 사용한다.
pub fn solve_open_circuit(
    test: OpenCircuitTest,
    a_squared: f64,
) -> Result<OpenCircuitSolution, OpenCircuitError> {
    if test.voltage_v == 0.0 {
        return Err(OpenCircuitError::ZeroVoltage);
    }
    let apparent_va = test.voltage_v * test.current_a;
    if apparent_va == 0.0 {
        return Err(OpenCircuitError::DegenerateTest);
    }

    let y_mag = a_squared * test.current_a / test.voltage_v;
    let power_factor = (test.power_w / apparent_va).clamp(-1.0, 1.0);
    let theta_rad = power_factor.acos();

    let conductance = y_mag.abs() * (-theta_rad).cos();
    let susceptance = y_mag * (-theta_rad).sin();

    let a_fourth = a_squared * a_squared;
    let core_resistance = if conductance.abs() > ADMITTANCE_EPS {
        Some(a_fourth / conductance)
    } else {
        None
    };
    let magnetizing_reactance = if susceptance.abs() > ADMITTANCE_EPS {
        Some(a_fourth / susceptance.abs())
    } else {
        None
    };

    Ok(OpenCircuitSolution {
        y_mag_siemens: y_mag,
        power_factor,
        phase_angle_deg: theta_rad.to_degrees(),
        conductance_siemens: conductance,
        susceptance_siemens: susceptance,
        core_resistance_ohm: core_resistance,
        magnetizing_reactance_ohm: magnetizing_reactance,
    })
}
