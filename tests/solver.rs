//! 변압기 해석 전체 흐름 회귀 테스트.
use transformer_toolbox::transformer::{
    solve, OpenCircuitError, OpenCircuitTest, ShortCircuitError, ShortCircuitTest, SolveError,
    SolveWarning, TestInputs,
};

fn sample_inputs() -> TestInputs {
    TestInputs::new(
        1000.0,
        220.0,
        110.0,
        OpenCircuitTest {
            voltage_v: 110.0,
            current_a: 0.5,
            power_w: 30.0,
        },
        ShortCircuitTest {
            voltage_v: 10.0,
            current_a: 5.0,
            power_w: 40.0,
        },
    )
    .expect("valid inputs")
}

#[test]
fn turns_ratio_is_exact() {
    let analysis = solve(&sample_inputs()).expect("solve");
    assert!((analysis.turns_ratio - 2.0).abs() < 1e-9);
}

#[test]
fn short_circuit_reduction_reference_values() {
    // Vsc=10, Isc=5, Psc=40 → pf 0.8, θ 36.87°, |Z|=2, R=1.6, X=1.2
    let analysis = solve(&sample_inputs()).expect("solve");
    assert!((analysis.sc_power_factor - 0.8).abs() < 1e-6);
    assert!((analysis.sc_phase_angle_deg - 36.869_897_645_844_02).abs() < 1e-6);
    let p = &analysis.primary;
    assert!((p.z_eq_mag_ohm - 2.0).abs() < 1e-6);
    assert!((p.r_eq_ohm - 1.6).abs() < 1e-6);
    assert!((p.x_eq_ohm - 1.2).abs() < 1e-6);
    assert!(analysis.warnings.is_empty());
}

#[test]
fn open_circuit_reduction_reference_values() {
    let analysis = solve(&sample_inputs()).expect("solve");
    let p = &analysis.primary;
    let y_expected = 4.0 * 0.5 / 110.0;
    let pf_oc: f64 = 30.0 / 55.0;
    let sin_theta = (1.0 - pf_oc * pf_oc).sqrt();
    assert!((p.y_mag_siemens - y_expected).abs() < 1e-9);
    assert!((p.conductance_siemens - y_expected * pf_oc).abs() < 1e-9);
    // 지상 분기라 서셉턴스는 음수
    assert!((p.susceptance_siemens + y_expected * sin_theta).abs() < 1e-9);
    let a_fourth = 16.0;
    let rc = p.core_resistance_ohm.expect("Rc");
    let xm = p.magnetizing_reactance_ohm.expect("Xm");
    assert!((rc - a_fourth / (y_expected * pf_oc)).abs() < 1e-6);
    assert!((xm - a_fourth / (y_expected * sin_theta)).abs() < 1e-6);
}

#[test]
fn power_factor_clamps_above_unity() {
    // Psc/(Vsc·Isc) = 60/50 = 1.2 → pf 1.0, θ 0°. R > |Z|라 X_eq는 0으로 강제된다.
    let inputs = TestInputs::new(
        1000.0,
        220.0,
        110.0,
        OpenCircuitTest {
            voltage_v: 110.0,
            current_a: 0.5,
            power_w: 30.0,
        },
        ShortCircuitTest {
            voltage_v: 10.0,
            current_a: 5.0,
            power_w: 60.0,
        },
    )
    .expect("valid inputs");
    let analysis = solve(&inputs).expect("solve");
    assert!((analysis.sc_power_factor - 1.0).abs() < 1e-12);
    assert!(analysis.sc_phase_angle_deg.abs() < 1e-12);
    assert!(analysis.primary.x_eq_ohm.abs() < 1e-12);
    assert_eq!(analysis.warnings, vec![SolveWarning::InconsistentImpedance]);
    // 경고가 있어도 나머지 결과는 그대로 나온다
    assert!((analysis.primary.z_eq_mag_ohm - 2.0).abs() < 1e-9);
    assert!(analysis.efficiency.output_power_w > 0.0);
}

#[test]
fn secondary_referral_round_trip() {
    let analysis = solve(&sample_inputs()).expect("solve");
    let a_sq = analysis.turns_ratio * analysis.turns_ratio;
    let p = &analysis.primary;
    let s = &analysis.secondary;
    assert!((s.z_eq_mag_ohm * a_sq - p.z_eq_mag_ohm).abs() < 1e-9);
    assert!((s.r_eq_ohm * a_sq - p.r_eq_ohm).abs() < 1e-9);
    assert!((s.x_eq_ohm * a_sq - p.x_eq_ohm).abs() < 1e-9);
    assert!((s.y_mag_siemens * a_sq - p.y_mag_siemens).abs() < 1e-9);
    assert!((s.conductance_siemens * a_sq - p.conductance_siemens).abs() < 1e-9);
    assert!((s.susceptance_siemens * a_sq - p.susceptance_siemens).abs() < 1e-9);
    let rc_p = p.core_resistance_ohm.expect("primary Rc");
    let rc_s = s.core_resistance_ohm.expect("secondary Rc");
    assert!((rc_s * a_sq - rc_p).abs() < 1e-6);
    let xm_p = p.magnetizing_reactance_ohm.expect("primary Xm");
    let xm_s = s.magnetizing_reactance_ohm.expect("secondary Xm");
    assert!((xm_s * a_sq - xm_p).abs() < 1e-6);
    // 각도는 환산해도 변하지 않는다
    assert!((s.z_eq_angle_deg - p.z_eq_angle_deg).abs() < 1e-12);
    assert!((s.y_angle_deg - p.y_angle_deg).abs() < 1e-12);
}

#[test]
fn degenerate_short_circuit_test_rejected() {
    let inputs = TestInputs::new(
        1000.0,
        220.0,
        110.0,
        OpenCircuitTest {
            voltage_v: 110.0,
            current_a: 0.5,
            power_w: 30.0,
        },
        ShortCircuitTest {
            voltage_v: 10.0,
            current_a: 0.0,
            power_w: 40.0,
        },
    )
    .expect("valid inputs");
    let err = solve(&inputs).expect_err("must fail");
    assert!(matches!(
        err,
        SolveError::ShortCircuit(ShortCircuitError::DegenerateTest)
    ));
}

#[test]
fn open_circuit_zero_voltage_rejected() {
    let inputs = TestInputs::new(
        1000.0,
        220.0,
        110.0,
        OpenCircuitTest {
            voltage_v: 0.0,
            current_a: 0.5,
            power_w: 30.0,
        },
        ShortCircuitTest {
            voltage_v: 10.0,
            current_a: 5.0,
            power_w: 40.0,
        },
    )
    .expect("valid inputs");
    let err = solve(&inputs).expect_err("must fail");
    assert!(matches!(
        err,
        SolveError::OpenCircuit(OpenCircuitError::ZeroVoltage)
    ));
}

#[test]
fn open_circuit_zero_current_rejected() {
    let inputs = TestInputs::new(
        1000.0,
        220.0,
        110.0,
        OpenCircuitTest {
            voltage_v: 110.0,
            current_a: 0.0,
            power_w: 30.0,
        },
        ShortCircuitTest {
            voltage_v: 10.0,
            current_a: 5.0,
            power_w: 40.0,
        },
    )
    .expect("valid inputs");
    let err = solve(&inputs).expect_err("must fail");
    assert!(matches!(
        err,
        SolveError::OpenCircuit(OpenCircuitError::DegenerateTest)
    ));
}

#[test]
fn solver_is_deterministic() {
    let a1 = solve(&sample_inputs()).expect("solve");
    let a2 = solve(&sample_inputs()).expect("solve");
    assert_eq!(a1.turns_ratio, a2.turns_ratio);
    assert_eq!(a1.secondary.r_eq_ohm, a2.secondary.r_eq_ohm);
    assert_eq!(a1.efficiency.output_power_w, a2.efficiency.output_power_w);
    assert_eq!(
        a1.regulation.unity().full_load_voltage_v,
        a2.regulation.unity().full_load_voltage_v
    );
}
