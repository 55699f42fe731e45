use num_complex::Complex64;

use crate::transformer::regulation::RegulationError;

/// 손실과 효율 분해 결과. 계산 불가능한 항목은 None으로 남는다.
#[derive(Debug, Clone, Copy)]
pub struct EfficiencyResult {
    /// 동손 P_cu = I₂²·R_eq [W]
    pub copper_loss_w: f64,
    /// 출력 전력 P_out [W]. 단위 역률 전부하 기준.
    pub output_power_w: f64,
    /// 철손 P_core = Vs²/R_c [W]. R_c가 없으면 None.
    pub core_loss_w: Option<f64>,
    /// 입력 전력 P_in = P_out + P_cu + P_core [W]. 철손이 없으면 None.
    pub input_power_w: Option<f64>,
    /// 효율 η [%]. P_in이 없거나 0이면 None.
    pub efficiency_percent: Option<f64>,
}

/// 정격 부하·단위 역률 기준의 손실과 효율을 계산한다.
///
/// 철손 항이 빠져도 동손과 출력 전력은 그대로 계산한다. 누락은 P_in과 η에만
/// 전파된다.
pub fn solve_efficiency(
    power_rating_va: f64,
    secondary_voltage_v: f64,
    r_eq_sec_ohm: f64,
    x_eq_sec_ohm: f64,
    core_resistance_sec_ohm: Option<f64>,
) -> Result<EfficiencyResult, RegulationError> {
    if secondary_voltage_v == 0.0 {
        return Err(RegulationError::ZeroRatedVoltage);
    }
    let i2_rated = power_rating_va / secondary_voltage_v;

    // 단위 역률 전부하 2차 전압
    let v2_nl = Complex64::new(secondary_voltage_v, 0.0);
    let z_eq = Complex64::new(r_eq_sec_ohm, x_eq_sec_ohm);
    let v2_fl_mag = (v2_nl - z_eq * Complex64::new(i2_rated, 0.0)).norm();

    let copper_loss = i2_rated * i2_rated * r_eq_sec_ohm;
    let output_power = v2_fl_mag * i2_rated;
    let core_loss = core_resistance_sec_ohm
        .map(|r_c| secondary_voltage_v * secondary_voltage_v / r_c);
    let input_power = core_loss.map(|p_core| output_power + copper_loss + p_core);
    let efficiency_percent = input_power.and_then(|p_in| {
        if p_in == 0.0 {
            None
        } else {
            Some(output_power / p_in * 100.0)
        }
    });

    Ok(EfficiencyResult {
        copper_loss_w: copper_loss,
        output_power_w: output_power,
        core_loss_w: core_loss,
        input_power_w: input_power,
        efficiency_percent,
    })
}
