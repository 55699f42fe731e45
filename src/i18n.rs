use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPUTE: &str = "main_menu.compute";
    pub const MAIN_MENU_IMPEDANCES: &str = "main_menu.impedances";
    pub const MAIN_MENU_REGULATION: &str = "main_menu.regulation";
    pub const MAIN_MENU_EFFICIENCY: &str = "main_menu.efficiency";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const COMPUTE_HEADING: &str = "compute.heading";
    pub const COMPUTE_NOTE_STEP_DOWN: &str = "compute.note_step_down";
    pub const PROMPT_POWER_RATING: &str = "prompt.power_rating";
    pub const PROMPT_PRIMARY_VOLTAGE: &str = "prompt.primary_voltage";
    pub const PROMPT_SECONDARY_VOLTAGE: &str = "prompt.secondary_voltage";
    pub const OPEN_CIRCUIT_HEADING: &str = "compute.open_circuit_heading";
    pub const PROMPT_OC_VOLTAGE: &str = "prompt.oc_voltage";
    pub const PROMPT_OC_CURRENT: &str = "prompt.oc_current";
    pub const PROMPT_OC_POWER: &str = "prompt.oc_power";
    pub const SHORT_CIRCUIT_HEADING: &str = "compute.short_circuit_heading";
    pub const PROMPT_SC_VOLTAGE: &str = "prompt.sc_voltage";
    pub const PROMPT_SC_CURRENT: &str = "prompt.sc_current";
    pub const PROMPT_SC_POWER: &str = "prompt.sc_power";
    pub const RESULT_TURNS_RATIO: &str = "result.turns_ratio";
    pub const RESULT_SC_POWER_FACTOR: &str = "result.sc_power_factor";
    pub const RESULT_SC_PHASE_ANGLE: &str = "result.sc_phase_angle";
    pub const COMPUTE_DONE: &str = "compute.done";

    pub const RESULT_NOT_READY: &str = "result.not_ready";
    pub const IMPEDANCES_HEADING: &str = "impedances.heading";
    pub const IMPEDANCES_PRIMARY: &str = "impedances.primary";
    pub const IMPEDANCES_SECONDARY: &str = "impedances.secondary";

    pub const REGULATION_HEADING: &str = "regulation.heading";
    pub const RESULT_RATED_CURRENT: &str = "result.rated_current";
    pub const RESULT_NO_LOAD_VOLTAGE: &str = "result.no_load_voltage";
    pub const RESULT_FULL_LOAD_VOLTAGE: &str = "result.full_load_voltage";
    pub const RESULT_VR_UNITY: &str = "result.vr_unity";
    pub const RESULT_VR_LAGGING: &str = "result.vr_lagging";
    pub const RESULT_VR_LEADING: &str = "result.vr_leading";

    pub const EFFICIENCY_HEADING: &str = "efficiency.heading";
    pub const RESULT_INPUT_POWER: &str = "result.input_power";
    pub const RESULT_OUTPUT_POWER: &str = "result.output_power";
    pub const RESULT_COPPER_LOSS: &str = "result.copper_loss";
    pub const RESULT_CORE_LOSS: &str = "result.core_loss";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const VALUE_UNDEFINED: &str = "result.value_undefined";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_COMPUTE: &str = "help.compute";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "주의",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Transformer Toolbox ===",
        MAIN_MENU_COMPUTE => "1) 시험값 입력 및 해석",
        MAIN_MENU_IMPEDANCES => "2) 등가 임피던스",
        MAIN_MENU_REGULATION => "3) 전압 변동률",
        MAIN_MENU_EFFICIENCY => "4) 효율",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        COMPUTE_HEADING => "\n-- 시험값 입력 --",
        COMPUTE_NOTE_STEP_DOWN => "참고: 강압 구성(Vs ≤ Vp)만 지원합니다.",
        PROMPT_POWER_RATING => "정격 용량 S [VA]: ",
        PROMPT_PRIMARY_VOLTAGE => "1차 전압 Vp [V]: ",
        PROMPT_SECONDARY_VOLTAGE => "2차 전압 Vs [V]: ",
        OPEN_CIRCUIT_HEADING => "개방 회로 시험",
        PROMPT_OC_VOLTAGE => "전압 Voc [V]: ",
        PROMPT_OC_CURRENT => "전류 Ioc [A]: ",
        PROMPT_OC_POWER => "전력 Poc [W]: ",
        SHORT_CIRCUIT_HEADING => "단락 회로 시험",
        PROMPT_SC_VOLTAGE => "전압 Vsc [V]: ",
        PROMPT_SC_CURRENT => "전류 Isc [A]: ",
        PROMPT_SC_POWER => "전력 Psc [W]: ",
        RESULT_TURNS_RATIO => "권수비 a = N1/N2:",
        RESULT_SC_POWER_FACTOR => "역률 cos(θ):",
        RESULT_SC_PHASE_ANGLE => "위상각 θ [°]:",
        COMPUTE_DONE => "해석이 끝났습니다. 메뉴에서 결과를 확인하세요.",
        RESULT_NOT_READY => "아직 해석 결과가 없습니다. 먼저 시험값을 입력하세요.",
        IMPEDANCES_HEADING => "\n-- 등가 임피던스 --",
        IMPEDANCES_PRIMARY => "[1차 환산]",
        IMPEDANCES_SECONDARY => "[2차 환산]",
        REGULATION_HEADING => "\n-- 전압 변동률 --",
        RESULT_RATED_CURRENT => "정격 2차 전류 I₂ [A]:",
        RESULT_NO_LOAD_VOLTAGE => "무부하 2차 전압 V₂,nl [V]:",
        RESULT_FULL_LOAD_VOLTAGE => "전부하 2차 전압 V₂,fl [V]:",
        RESULT_VR_UNITY => "VR (단위 역률) [%]:",
        RESULT_VR_LAGGING => "VR (0.8 지상) [%]:",
        RESULT_VR_LEADING => "VR (0.8 진상) [%]:",
        EFFICIENCY_HEADING => "\n-- 효율 --",
        RESULT_INPUT_POWER => "입력 전력 Pin [W]:",
        RESULT_OUTPUT_POWER => "출력 전력 Pout [W]:",
        RESULT_COPPER_LOSS => "동손 Pcu [W]:",
        RESULT_CORE_LOSS => "철손 Pcore [W]:",
        RESULT_EFFICIENCY => "효율 η [%]:",
        VALUE_UNDEFINED => "-",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_DECIMALS => "표시 소수 자릿수(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        HELP_COMPUTE => "도움말: 정격 S/Vp/Vs, 개방 시험 Voc/Ioc/Poc, 단락 시험 Vsc/Isc/Psc 순으로 입력합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Transformer Toolbox ===",
        MAIN_MENU_COMPUTE => "1) Enter test data & solve",
        MAIN_MENU_IMPEDANCES => "2) Equivalent impedances",
        MAIN_MENU_REGULATION => "3) Voltage regulation",
        MAIN_MENU_EFFICIENCY => "4) Efficiency",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        COMPUTE_HEADING => "\n-- Test Data --",
        COMPUTE_NOTE_STEP_DOWN => "Note: only step-down configurations (Vs ≤ Vp) are supported.",
        PROMPT_POWER_RATING => "Power rating S [VA]: ",
        PROMPT_PRIMARY_VOLTAGE => "Primary voltage Vp [V]: ",
        PROMPT_SECONDARY_VOLTAGE => "Secondary voltage Vs [V]: ",
        OPEN_CIRCUIT_HEADING => "Open-circuit test",
        PROMPT_OC_VOLTAGE => "Voltage Voc [V]: ",
        PROMPT_OC_CURRENT => "Current Ioc [A]: ",
        PROMPT_OC_POWER => "Power Poc [W]: ",
        SHORT_CIRCUIT_HEADING => "Short-circuit test",
        PROMPT_SC_VOLTAGE => "Voltage Vsc [V]: ",
        PROMPT_SC_CURRENT => "Current Isc [A]: ",
        PROMPT_SC_POWER => "Power Psc [W]: ",
        RESULT_TURNS_RATIO => "Turns ratio a = N1/N2:",
        RESULT_SC_POWER_FACTOR => "Power factor cos(θ):",
        RESULT_SC_PHASE_ANGLE => "Phase angle θ [°]:",
        COMPUTE_DONE => "Analysis complete. Check the result menus.",
        RESULT_NOT_READY => "No analysis yet. Enter test data first.",
        IMPEDANCES_HEADING => "\n-- Equivalent Impedances --",
        IMPEDANCES_PRIMARY => "[Referred to primary]",
        IMPEDANCES_SECONDARY => "[Referred to secondary]",
        REGULATION_HEADING => "\n-- Voltage Regulation --",
        RESULT_RATED_CURRENT => "Rated secondary current I₂ [A]:",
        RESULT_NO_LOAD_VOLTAGE => "No-load secondary voltage V₂,nl [V]:",
        RESULT_FULL_LOAD_VOLTAGE => "Full-load secondary voltage V₂,fl [V]:",
        RESULT_VR_UNITY => "VR (unity pf) [%]:",
        RESULT_VR_LAGGING => "VR (0.8 lagging) [%]:",
        RESULT_VR_LEADING => "VR (0.8 leading) [%]:",
        EFFICIENCY_HEADING => "\n-- Efficiency --",
        RESULT_INPUT_POWER => "Input power Pin [W]:",
        RESULT_OUTPUT_POWER => "Output power Pout [W]:",
        RESULT_COPPER_LOSS => "Copper loss Pcu [W]:",
        RESULT_CORE_LOSS => "Core loss Pcore [W]:",
        RESULT_EFFICIENCY => "Efficiency η [%]:",
        VALUE_UNDEFINED => "-",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) Korean  3) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_DECIMALS => "Display decimal places (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        HELP_COMPUTE => "Help: enter rating S/Vp/Vs, then open-circuit Voc/Ioc/Poc, then short-circuit Vsc/Isc/Psc.",
        _ => return None,
    })
}
