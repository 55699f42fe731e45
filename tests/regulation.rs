//! 전압 변동률·효율 계산 회귀 테스트.
use transformer_toolbox::transformer::{
    solve_efficiency, solve_regulation, PowerFactorCase, RegulationError,
};

#[test]
fn zero_impedance_gives_zero_regulation() {
    let reg = solve_regulation(1000.0, 110.0, 0.0, 0.0).expect("regulation");
    for case in &reg.cases {
        assert!((case.full_load_voltage_v - 110.0).abs() < 1e-12);
        assert_eq!(case.regulation_percent, Some(0.0));
    }
}

#[test]
fn regulation_reference_case() {
    // S=1000 VA, Vs=110 V, R=0.4 Ω, X=0.3 Ω
    let reg = solve_regulation(1000.0, 110.0, 0.4, 0.3).expect("regulation");
    let i2 = 1000.0 / 110.0;
    assert!((reg.rated_secondary_current_a - i2).abs() < 1e-9);
    assert!((reg.no_load_voltage_v - 110.0).abs() < 1e-12);
    let unity = reg.unity();
    let expected = ((110.0 - 0.4 * i2).powi(2) + (0.3 * i2).powi(2)).sqrt();
    assert!((unity.full_load_voltage_v - expected).abs() < 1e-9);
    let vr = unity.regulation_percent.expect("vr");
    assert!((vr - (110.0 - expected) / expected * 100.0).abs() < 1e-9);
}

#[test]
fn lagging_regulation_exceeds_leading() {
    let reg = solve_regulation(1000.0, 110.0, 0.4, 0.3).expect("regulation");
    assert_eq!(reg.cases[0].case, PowerFactorCase::Unity);
    assert_eq!(reg.cases[1].case, PowerFactorCase::Lagging);
    assert_eq!(reg.cases[2].case, PowerFactorCase::Leading);
    let unity = reg.cases[0].regulation_percent.expect("unity");
    let lag = reg.cases[1].regulation_percent.expect("lagging");
    let lead = reg.cases[2].regulation_percent.expect("leading");
    assert!(lag > unity);
    assert!(unity > lead);
}

#[test]
fn zero_full_load_voltage_leaves_regulation_undefined() {
    // R = Vs²/S 이면 단위 역률 전부하 전압이 정확히 0이 된다
    let reg = solve_regulation(100.0, 10.0, 1.0, 0.0).expect("regulation");
    let unity = reg.unity();
    assert!(unity.full_load_voltage_v.abs() < 1e-12);
    assert_eq!(unity.regulation_percent, None);
    // 다른 역률 조건은 그대로 계산된다
    assert!(reg.cases[1].regulation_percent.is_some());
    assert!(reg.cases[2].regulation_percent.is_some());
}

#[test]
fn zero_rated_voltage_is_rejected() {
    assert!(matches!(
        solve_regulation(1000.0, 0.0, 0.4, 0.3),
        Err(RegulationError::ZeroRatedVoltage)
    ));
    assert!(matches!(
        solve_efficiency(1000.0, 0.0, 0.4, 0.3, Some(400.0)),
        Err(RegulationError::ZeroRatedVoltage)
    ));
}

#[test]
fn efficiency_reference_case() {
    // R_c2 = Vs²/30 으로 잡으면 철손이 정확히 30 W
    let r_c_sec = 12_100.0 / 30.0;
    let eff = solve_efficiency(1000.0, 110.0, 0.4, 0.3, Some(r_c_sec)).expect("efficiency");
    let i2 = 1000.0 / 110.0;
    assert!((eff.copper_loss_w - i2 * i2 * 0.4).abs() < 1e-9);
    assert!((eff.core_loss_w.expect("core loss") - 30.0).abs() < 1e-9);
    let v2_fl = ((110.0 - 0.4 * i2).powi(2) + (0.3 * i2).powi(2)).sqrt();
    assert!((eff.output_power_w - v2_fl * i2).abs() < 1e-9);
    let p_in = eff.input_power_w.expect("input power");
    assert!((p_in - (eff.output_power_w + eff.copper_loss_w + 30.0)).abs() < 1e-9);
    let eta = eff.efficiency_percent.expect("efficiency");
    assert!((eta - eff.output_power_w / p_in * 100.0).abs() < 1e-9);
    assert!(eta > 90.0 && eta < 100.0);
}

#[test]
fn missing_core_resistance_blanks_only_dependent_fields() {
    let eff = solve_efficiency(1000.0, 110.0, 0.4, 0.3, None).expect("efficiency");
    assert_eq!(eff.core_loss_w, None);
    assert_eq!(eff.input_power_w, None);
    assert_eq!(eff.efficiency_percent, None);
    // 동손과 출력 전력은 철손 없이도 계산된다
    let i2 = 1000.0 / 110.0;
    assert!((eff.copper_loss_w - i2 * i2 * 0.4).abs() < 1e-9);
    assert!(eff.output_power_w > 0.0);
}
