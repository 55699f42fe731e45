/// 한 권선 측에서 본 등가 회로 파라미터 일습.
#[derive(Debug, Clone, Copy)]
pub struct EquivalentCircuit {
    /// |Z_eq| [Ω]
    pub z_eq_mag_ohm: f64,
    /// Z_eq 위상각 [°]
    pub z_eq_angle_deg: f64,
    /// R_eq [Ω]
    pub r_eq_ohm: f64,
    /// X_eq [Ω]
    pub x_eq_ohm: f64,
    /// |Y_φ| [S]
    pub y_mag_siemens: f64,
    /// 여자 분기 위상각 [°]. 표시할 때는 부호를 반전한다.
    pub y_angle_deg: f64,
    /// G_φ [S]
    pub conductance_siemens: f64,
    /// B_φ [S]
    pub susceptance_siemens: f64,
    /// R_c [Ω]
    pub core_resistance_ohm: Option<f64>,
    /// X_m [Ω]
    pub magnetizing_reactance_ohm: Option<f64>,
}

/// 1차측 파라미터를 권수비 제곱으로 2차측에 환산한다.
///
/// 임피던스성 값과 어드미턴스성 값 모두 a²로 나누는 규약이다. 각도는 그대로 둔다.
pub fn refer_to_secondary(primary: &EquivalentCircuit, a_squared: f64) -> EquivalentCircuit {
    EquivalentCircuit {
        z_eq_mag_ohm: primary.z_eq_mag_ohm / a_squared,
        z_eq_angle_deg: primary.z_eq_angle_deg,
        r_eq_ohm: primary.r_eq_ohm / a_squared,
        x_eq_ohm: primary.x_eq_ohm / a_squared,
        y_mag_siemens: primary.y_mag_siemens / a_squared,
        y_angle_deg: primary.y_angle_deg,
        conductance_siemens: primary.conductance_siemens / a_squared,
        susceptance_siemens: primary.susceptance_siemens / a_squared,
        core_resistance_ohm: primary.core_resistance_ohm.map(|r| r / a_squared),
        magnetizing_reactance_ohm: primary.magnetizing_reactance_ohm.map(|x| x / a_squared),
    }
}
