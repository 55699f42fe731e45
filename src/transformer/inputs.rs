/// 폼/프롬프트에서 읽어온 원시 입력 문자열 묶음. 파싱 전 상태를 그대로 담는다.
#[derive(Debug, Clone, Default)]
pub struct RawTestInputs {
    pub power_rating: String,
    pub primary_voltage: String,
    pub secondary_voltage: String,
    pub voc: String,
    pub ioc: String,
    pub poc: String,
    pub vsc: String,
    pub isc: String,
    pub psc: String,
}

/// 개방 회로 시험 측정값. 2차 개방 상태에서 정격 전압을 인가해 측정한다.
#[derive(Debug, Clone, Copy)]
pub struct OpenCircuitTest {
    /// 시험 전압 Voc [V]
    pub voltage_v: f64,
    /// 시험 전류 Ioc [A]
    pub current_a: f64,
    /// 시험 전력 Poc [W]
    pub power_w: f64,
}

/// 단락 회로 시험 측정값. 2차 단락 상태에서 저전압을 인가해 측정한다.
#[derive(Debug, Clone, Copy)]
pub struct ShortCircuitTest {
    /// 시험 전압 Vsc [V]
    pub voltage_v: f64,
    /// 시험 전류 Isc [A]
    pub current_a: f64,
    /// 시험 전력 Psc [W]
    pub power_w: f64,
}

/// 검증이 끝난 변압기 시험 입력.
#[derive(Debug, Clone, Copy)]
pub struct TestInputs {
    /// 정격 용량 S [VA]
    pub power_rating_va: f64,
    /// 1차 정격 전압 Vp [V]
    pub primary_voltage_v: f64,
    /// 2차 정격 전압 Vs [V]
    pub secondary_voltage_v: f64,
    pub open_circuit: OpenCircuitTest,
    pub short_circuit: ShortCircuitTest,
}

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 숫자로 해석할 수 없는 필드
    NonNumericInput(&'static str),
    /// 승압 구성(Vs > Vp)은 지원하지 않음
    StepUpNotAllowed,
    /// 2차 전압이 0
    ZeroSecondaryVoltage,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NonNumericInput(field) => {
                write!(f, "숫자로 해석할 수 없는 입력: {field}")
            }
            ValidationError::StepUpNotAllowed => {
                write!(f, "강압 변압기만 지원합니다 (Vs ≤ Vp).")
            }
            ValidationError::ZeroSecondaryVoltage => {
                write!(f, "2차 전압은 0일 수 없습니다.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl RawTestInputs {
    /// 아홉 개 필드를 전부 파싱한 뒤 구성 제약을 검사한다.
    pub fn parse(&self) -> Result<TestInputs, ValidationError> {
        let power_rating = parse_field(&self.power_rating, "power_rating")?;
        let primary_voltage = parse_field(&self.primary_voltage, "primary_voltage")?;
        let secondary_voltage = parse_field(&self.secondary_voltage, "secondary_voltage")?;
        let voc = parse_field(&self.voc, "voc")?;
        let ioc = parse_field(&self.ioc, "ioc")?;
        let poc = parse_field(&self.poc, "poc")?;
        let vsc = parse_field(&self.vsc, "vsc")?;
        let isc = parse_field(&self.isc, "isc")?;
        let psc = parse_field(&self.psc, "psc")?;
        TestInputs::new(
            power_rating,
            primary_voltage,
            secondary_voltage,
            OpenCircuitTest {
                voltage_v: voc,
                current_a: ioc,
                power_w: poc,
            },
            ShortCircuitTest {
                voltage_v: vsc,
                current_a: isc,
                power_w: psc,
            },
        )
    }
}

fn parse_field(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NonNumericInput(field)),
    }
}

fn check_finite(value: f64, field: &'static str) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonNumericInput(field))
    }
}

impl TestInputs {
    /// 숫자 입력을 받아 유한성과 구성 제약을 검사한다. 연산은 검증 통과 후에만 수행한다.
    pub fn new(
        power_rating_va: f64,
        primary_voltage_v: f64,
        secondary_voltage_v: f64,
        open_circuit: OpenCircuitTest,
        short_circuit: ShortCircuitTest,
    ) -> Result<Self, ValidationError> {
        let power_rating_va = check_finite(power_rating_va, "power_rating")?;
        let primary_voltage_v = check_finite(primary_voltage_v, "primary_voltage")?;
        let secondary_voltage_v = check_finite(secondary_voltage_v, "secondary_voltage")?;
        check_finite(open_circuit.voltage_v, "voc")?;
        check_finite(open_circuit.current_a, "ioc")?;
        check_finite(open_circuit.power_w, "poc")?;
        check_finite(short_circuit.voltage_v, "vsc")?;
        check_finite(short_circuit.current_a, "isc")?;
        check_finite(short_circuit.power_w, "psc")?;

        if secondary_voltage_v > primary_voltage_v {
            return Err(ValidationError::StepUpNotAllowed);
        }
        if secondary_voltage_v == 0.0 {
            return Err(ValidationError::ZeroSecondaryVoltage);
        }
        Ok(Self {
            power_rating_va,
            primary_voltage_v,
            secondary_voltage_v,
            open_circuit,
            short_circuit,
        })
    }

    /// 권수비 a = N1/N2 = Vp/Vs.
    pub fn turns_ratio(&self) -> f64 {
        self.primary_voltage_v / self.secondary_voltage_v
    }
}
