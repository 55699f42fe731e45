use num_complex::Complex64;

/// 전압 변동 평가에 쓰는 기준 역률.
const REFERENCE_PF: f64 = 0.8;

/// 역률 조건 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerFactorCase {
    /// 단위 역률
    Unity,
    /// 0.8 지상
    Lagging,
    /// 0.8 진상
    Leading,
}

/// 단일 역률 조건에서의 전압 변동 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct RegulationCase {
    pub case: PowerFactorCase,
    /// 역률 값
    pub power_factor: f64,
    /// 전부하 2차 전압 크기 |V₂,fl| [V]
    pub full_load_voltage_v: f64,
    /// 전압 변동률 [%]. 전부하 전압이 0이면 None.
    pub regulation_percent: Option<f64>,
}

/// 세 가지 역률 조건의 전압 변동 결과.
#[derive(Debug, Clone)]
pub struct RegulationResult {
    /// 정격 2차 전류 I₂ = S/Vs [A]
    pub rated_secondary_current_a: f64,
    /// 무부하 2차 전압 V₂,nl [V]
    pub no_load_voltage_v: f64,
    /// 단위 역률, 0.8 지상, 0.8 진상 순서
    pub cases: [RegulationCase; 3],
}

impl RegulationResult {
    /// 단위 역률 조건의 결과.
    pub fn unity(&self) -> &RegulationCase {
        &self.cases[0]
    }
}

/// 전압 변동/효율 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegulationError {
    /// 정격 2차 전압이 0이라 정격 전류를 정의할 수 없음
    ZeroRatedVoltage,
}

impl std::fmt::Display for RegulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegulationError::ZeroRatedVoltage => {
                write!(f, "정격 2차 전압은 0일 수 없습니다.")
            }
        }
    }
}

impl std::error::Error for RegulationError {}

/// 정격 부하에서 세 가지 역률 조건의 전압 변동률을 계산한다.
///
/// V₂,fl = V₂,nl - Z_eq·I₂ 페이저 연산으로 구하고,
/// VR% = (|V₂,nl| - |V₂,fl|) / |V₂,fl| × 100.
pub fn solve_regulation(
    power_rating_va: f64,
    secondary_voltage_v: f64,
    r_eq_sec_ohm: f64,
    x_eq_sec_ohm: f64,
) -> Result<RegulationResult, RegulationError> {
    if secondary_voltage_v == 0.0 {
        return Err(RegulationError::ZeroRatedVoltage);
    }
    let i2_rated = power_rating_va / secondary_voltage_v;
    let z_eq = Complex64::new(r_eq_sec_ohm, x_eq_sec_ohm);
    let v2_nl = Complex64::new(secondary_voltage_v, 0.0);

    // 지상은 전류가 전압보다 뒤지므로 -φ, 진상은 +φ.
    let phi = REFERENCE_PF.acos();
    let cases = [
        (PowerFactorCase::Unity, 1.0, 0.0),
        (PowerFactorCase::Lagging, REFERENCE_PF, -phi),
        (PowerFactorCase::Leading, REFERENCE_PF, phi),
    ]
    .map(|(case, pf, angle)| regulation_case(case, pf, angle, i2_rated, v2_nl, z_eq));

    Ok(RegulationResult {
        rated_secondary_current_a: i2_rated,
        no_load_voltage_v: secondary_voltage_v,
        cases,
    })
}

fn regulation_case(
    case: PowerFactorCase,
    power_factor: f64,
    current_angle_rad: f64,
    i2_rated: f64,
    v2_nl: Complex64,
    z_eq: Complex64,
) -> RegulationCase {
    let i2 = Complex64::from_polar(i2_rated, current_angle_rad);
    let v2_fl = v2_nl - z_eq * i2;
    let v2_fl_mag = v2_fl.norm();
    let regulation_percent = if v2_fl_mag != 0.0 {
        Some((v2_nl.re - v2_fl_mag) / v2_fl_mag * 100.0)
    } else {
        None
    };
    RegulationCase {
        case,
        power_factor,
        full_load_voltage_v: v2_fl_mag,
        regulation_percent,
    }
}
