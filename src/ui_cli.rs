use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::transformer::{
    solver, EquivalentCircuit, PowerFactorCase, RawTestInputs, TransformerAnalysis,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compute,
    Impedances,
    VoltageRegulation,
    Efficiency,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPUTE));
    println!("{}", tr.t(keys::MAIN_MENU_IMPEDANCES));
    println!("{}", tr.t(keys::MAIN_MENU_REGULATION));
    println!("{}", tr.t(keys::MAIN_MENU_EFFICIENCY));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compute),
            "2" => return Ok(MenuChoice::Impedances),
            "3" => return Ok(MenuChoice::VoltageRegulation),
            "4" => return Ok(MenuChoice::Efficiency),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 아홉 개 시험값을 읽어 해석을 수행한다.
/// 검증/계산 오류는 메시지만 출력하고 None을 반환한다.
pub fn handle_compute(
    tr: &Translator,
    cfg: &Config,
) -> Result<Option<TransformerAnalysis>, AppError> {
    println!("{}", tr.t(keys::COMPUTE_HEADING));
    println!("{}", tr.t(keys::COMPUTE_NOTE_STEP_DOWN));
    println!("{}", tr.t(keys::HELP_COMPUTE));

    let power_rating = read_line(tr.t(keys::PROMPT_POWER_RATING))?;
    let primary_voltage = read_line(tr.t(keys::PROMPT_PRIMARY_VOLTAGE))?;
    let secondary_voltage = read_line(tr.t(keys::PROMPT_SECONDARY_VOLTAGE))?;
    println!("{}", tr.t(keys::OPEN_CIRCUIT_HEADING));
    let voc = read_line(tr.t(keys::PROMPT_OC_VOLTAGE))?;
    let ioc = read_line(tr.t(keys::PROMPT_OC_CURRENT))?;
    let poc = read_line(tr.t(keys::PROMPT_OC_POWER))?;
    println!("{}", tr.t(keys::SHORT_CIRCUIT_HEADING));
    let vsc = read_line(tr.t(keys::PROMPT_SC_VOLTAGE))?;
    let isc = read_line(tr.t(keys::PROMPT_SC_CURRENT))?;
    let psc = read_line(tr.t(keys::PROMPT_SC_POWER))?;

    let raw = RawTestInputs {
        power_rating,
        primary_voltage,
        secondary_voltage,
        voc,
        ioc,
        poc,
        vsc,
        isc,
        psc,
    };
    let inputs = match raw.parse() {
        Ok(inputs) => inputs,
        Err(err) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            return Ok(None);
        }
    };
    let analysis = match solver::solve(&inputs) {
        Ok(analysis) => analysis,
        Err(err) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            return Ok(None);
        }
    };

    let prec = cfg.decimals as usize;
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_TURNS_RATIO),
        analysis.turns_ratio
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_SC_POWER_FACTOR),
        analysis.sc_power_factor
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_SC_PHASE_ANGLE),
        analysis.sc_phase_angle_deg
    );
    for warning in &analysis.warnings {
        println!("{}: {warning}", tr.t(keys::WARNING_PREFIX));
    }
    println!("{}", tr.t(keys::COMPUTE_DONE));
    Ok(Some(analysis))
}

/// 등가 임피던스 화면을 출력한다.
pub fn show_impedances(tr: &Translator, cfg: &Config, analysis: Option<&TransformerAnalysis>) {
    let Some(analysis) = analysis else {
        println!("{}", tr.t(keys::RESULT_NOT_READY));
        return;
    };
    println!("{}", tr.t(keys::IMPEDANCES_HEADING));
    println!("{}", tr.t(keys::IMPEDANCES_PRIMARY));
    print_equivalent_circuit(tr, cfg, &analysis.primary);
    println!("{}", tr.t(keys::IMPEDANCES_SECONDARY));
    print_equivalent_circuit(tr, cfg, &analysis.secondary);
}

fn print_equivalent_circuit(tr: &Translator, cfg: &Config, side: &EquivalentCircuit) {
    let prec = cfg.decimals as usize;
    println!(
        "  Zeq [Ω]: {:.prec$} ∠ {:.prec$}°",
        side.z_eq_mag_ohm, side.z_eq_angle_deg
    );
    println!("  Req [Ω]: {:.prec$}", side.r_eq_ohm);
    println!("  Xeq [jΩ]: {:.prec$}", side.x_eq_ohm);
    // 여자 분기 각도는 지상 규약에 맞춰 음수로 표시한다.
    println!(
        "  Yφ [S]: {:.prec$} ∠ -{:.prec$}°",
        side.y_mag_siemens, side.y_angle_deg
    );
    println!("  Gφ [S]: {:.prec$}", side.conductance_siemens);
    println!("  Bφ [S]: {:.prec$}", side.susceptance_siemens);
    if let (Some(rc), Some(xm)) = (side.core_resistance_ohm, side.magnetizing_reactance_ohm) {
        println!("  Zφ [Ω]: {rc:.prec$} + j{xm:.prec$}");
    }
    println!(
        "  Rc [Ω]: {}",
        fmt_opt(tr, side.core_resistance_ohm, prec)
    );
    println!(
        "  Xm [Ω]: {}",
        fmt_opt(tr, side.magnetizing_reactance_ohm, prec)
    );
}

/// 전압 변동률 화면을 출력한다.
pub fn show_regulation(tr: &Translator, cfg: &Config, analysis: Option<&TransformerAnalysis>) {
    let Some(analysis) = analysis else {
        println!("{}", tr.t(keys::RESULT_NOT_READY));
        return;
    };
    let reg = &analysis.regulation;
    let prec = cfg.decimals as usize;
    println!("{}", tr.t(keys::REGULATION_HEADING));
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_RATED_CURRENT),
        reg.rated_secondary_current_a
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_NO_LOAD_VOLTAGE),
        reg.no_load_voltage_v
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_FULL_LOAD_VOLTAGE),
        reg.unity().full_load_voltage_v
    );
    for case in &reg.cases {
        let label = match case.case {
            PowerFactorCase::Unity => keys::RESULT_VR_UNITY,
            PowerFactorCase::Lagging => keys::RESULT_VR_LAGGING,
            PowerFactorCase::Leading => keys::RESULT_VR_LEADING,
        };
        println!(
            "{} {}",
            tr.t(label),
            fmt_opt(tr, case.regulation_percent, prec)
        );
    }
}

/// 효율 화면을 출력한다.
pub fn show_efficiency(tr: &Translator, cfg: &Config, analysis: Option<&TransformerAnalysis>) {
    let Some(analysis) = analysis else {
        println!("{}", tr.t(keys::RESULT_NOT_READY));
        return;
    };
    let eff = &analysis.efficiency;
    let prec = cfg.decimals as usize;
    println!("{}", tr.t(keys::EFFICIENCY_HEADING));
    println!(
        "{} {}",
        tr.t(keys::RESULT_INPUT_POWER),
        fmt_opt(tr, eff.input_power_w, prec)
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_OUTPUT_POWER),
        eff.output_power_w
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_COPPER_LOSS),
        eff.copper_loss_w
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_CORE_LOSS),
        fmt_opt(tr, eff.core_loss_w, prec)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_EFFICIENCY),
        fmt_opt(tr, eff.efficiency_percent, prec)
    );
}

/// 해석 결과 전체를 한 번에 출력한다. 일회성 compute 모드에서 사용한다.
pub fn print_analysis(tr: &Translator, cfg: &Config, analysis: &TransformerAnalysis) {
    let prec = cfg.decimals as usize;
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_TURNS_RATIO),
        analysis.turns_ratio
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_SC_POWER_FACTOR),
        analysis.sc_power_factor
    );
    println!(
        "{} {:.prec$}",
        tr.t(keys::RESULT_SC_PHASE_ANGLE),
        analysis.sc_phase_angle_deg
    );
    for warning in &analysis.warnings {
        println!("{}: {warning}", tr.t(keys::WARNING_PREFIX));
    }
    show_impedances(tr, cfg, Some(analysis));
    show_regulation(tr, cfg, Some(analysis));
    show_efficiency(tr, cfg, Some(analysis));
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.language = "auto".to_string(),
        "2" => cfg.language = "ko".to_string(),
        "3" => cfg.language = "en-us".to_string(),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
    if !sel.trim().is_empty() {
        match sel.trim().parse::<u8>() {
            Ok(n) if n <= 12 => cfg.decimals = n,
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn fmt_opt(tr: &Translator, value: Option<f64>, prec: usize) -> String {
    match value {
        Some(v) => format!("{v:.prec$}"),
        None => tr.t(keys::VALUE_UNDEFINED).to_string(),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
