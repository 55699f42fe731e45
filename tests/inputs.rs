//! 입력 파싱·검증 회귀 테스트.
use transformer_toolbox::transformer::{
    OpenCircuitTest, RawTestInputs, ShortCircuitTest, TestInputs, ValidationError,
};

fn raw(power: &str, vp: &str, vs: &str) -> RawTestInputs {
    RawTestInputs {
        power_rating: power.to_string(),
        primary_voltage: vp.to_string(),
        secondary_voltage: vs.to_string(),
        voc: "110".to_string(),
        ioc: "0.5".to_string(),
        poc: "30".to_string(),
        vsc: "10".to_string(),
        isc: "5".to_string(),
        psc: "40".to_string(),
    }
}

#[test]
fn parses_nine_numeric_fields() {
    let inputs = raw("1000", "220", "110").parse().expect("parse");
    assert!((inputs.power_rating_va - 1000.0).abs() < 1e-12);
    assert!((inputs.turns_ratio() - 2.0).abs() < 1e-9);
    assert!((inputs.open_circuit.current_a - 0.5).abs() < 1e-12);
    assert!((inputs.short_circuit.power_w - 40.0).abs() < 1e-12);
}

#[test]
fn tolerates_surrounding_whitespace() {
    let inputs = raw(" 1000 ", "220\n", " 110").parse().expect("parse");
    assert!((inputs.primary_voltage_v - 220.0).abs() < 1e-12);
}

#[test]
fn rejects_non_numeric_field_by_name() {
    let mut bad = raw("1000", "220", "110");
    bad.voc = "abc".to_string();
    assert_eq!(
        bad.parse().expect_err("must fail"),
        ValidationError::NonNumericInput("voc")
    );
}

#[test]
fn rejects_empty_field() {
    let mut bad = raw("1000", "220", "110");
    bad.psc = String::new();
    assert_eq!(
        bad.parse().expect_err("must fail"),
        ValidationError::NonNumericInput("psc")
    );
}

#[test]
fn rejects_non_finite_values() {
    assert_eq!(
        raw("inf", "220", "110").parse().expect_err("must fail"),
        ValidationError::NonNumericInput("power_rating")
    );
    let err = TestInputs::new(
        f64::NAN,
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
    .expect_err("must fail");
    assert_eq!(err, ValidationError::NonNumericInput("power_rating"));
}

#[test]
fn rejects_step_up_configuration() {
    assert_eq!(
        raw("1000", "110", "220").parse().expect_err("must fail"),
        ValidationError::StepUpNotAllowed
    );
}

#[test]
fn rejects_zero_secondary_voltage() {
    assert_eq!(
        raw("1000", "220", "0").parse().expect_err("must fail"),
        ValidationError::ZeroSecondaryVoltage
    );
}
