use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::transformer::{SolveError, TransformerAnalysis, ValidationError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 입력 검증 오류
    Validation(ValidationError),
    /// 변압기 해석 오류
    Solve(SolveError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Validation(e) => write!(f, "입력 오류: {e}"),
            AppError::Solve(e) => write!(f, "해석 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::Validation(value)
    }
}

impl From<SolveError> for AppError {
    fn from(value: SolveError) -> Self {
        AppError::Solve(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 마지막 해석 스냅샷을 들고 있다가 결과 화면 메뉴에서 보여준다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut last_analysis: Option<TransformerAnalysis> = None;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Compute => {
                if let Some(analysis) = ui_cli::handle_compute(tr, config)? {
                    last_analysis = Some(analysis);
                }
            }
            MenuChoice::Impedances => {
                ui_cli::show_impedances(tr, config, last_analysis.as_ref())
            }
            MenuChoice::VoltageRegulation => {
                ui_cli::show_regulation(tr, config, last_analysis.as_ref())
            }
            MenuChoice::Efficiency => {
                ui_cli::show_efficiency(tr, config, last_analysis.as_ref())
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
