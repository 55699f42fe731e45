use clap::{Parser, Subcommand};

use transformer_toolbox::transformer::{OpenCircuitTest, ShortCircuitTest, TestInputs};
use transformer_toolbox::{app, config, i18n, transformer, ui_cli};

/// 단상 변압기 시험 해석 CLI.
#[derive(Debug, Parser)]
#[command(name = "transformer_toolbox", version)]
struct Cli {
    /// UI 언어 (auto/ko/en-us 등)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 (기본: locales/)
    #[arg(long)]
    lang_pack: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 아홉 개 측정값으로 일회성 해석을 수행한다.
    Compute {
        /// 정격 용량 S [VA]
        #[arg(long)]
        rating: f64,
        /// 1차 전압 Vp [V]
        #[arg(long)]
        vp: f64,
        /// 2차 전압 Vs [V]
        #[arg(long)]
        vs: f64,
        /// 개방 시험 전압 Voc [V]
        #[arg(long)]
        voc: f64,
        /// 개방 시험 전류 Ioc [A]
        #[arg(long)]
        ioc: f64,
        /// 개방 시험 전력 Poc [W]
        #[arg(long)]
        poc: f64,
        /// 단락 시험 전압 Vsc [V]
        #[arg(long)]
        vsc: f64,
        /// 단락 시험 전류 Isc [A]
        #[arg(long)]
        isc: f64,
        /// 단락 시험 전력 Psc [W]
        #[arg(long)]
        psc: f64,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cli.lang_pack.as_deref());

    match cli.command {
        Some(Command::Compute {
            rating,
            vp,
            vs,
            voc,
            ioc,
            poc,
            vsc,
            isc,
            psc,
        }) => {
            let inputs = TestInputs::new(
                rating,
                vp,
                vs,
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
            )?;
            let analysis = transformer::solve(&inputs)?;
            ui_cli::print_analysis(&tr, &cfg, &analysis);
        }
        None => app::run(&mut cfg, &tr)?,
    }
    Ok(())
}
