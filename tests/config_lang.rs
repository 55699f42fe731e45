//! 설정 직렬화·언어 결정 회귀 테스트.
use transformer_toolbox::config::Config;
use transformer_toolbox::i18n::{self, keys, Language, Translator};

#[test]
fn default_config_uses_auto_language() {
    let cfg = Config::default();
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.decimals, 4);
}

#[test]
fn config_round_trips_through_toml() {
    let cfg = Config {
        language: "ko".to_string(),
        decimals: 6,
    };
    let text = toml::to_string(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.language, "ko");
    assert_eq!(back.decimals, 6);
}

#[test]
fn cli_flag_overrides_config_language() {
    let code = i18n::resolve_language("ko", Some("en-us"));
    assert!(code.starts_with("ko"));
}

#[test]
fn auto_falls_back_to_config_language() {
    let code = i18n::resolve_language("auto", Some("en-us"));
    assert_eq!(code, "en-us");
}

#[test]
fn translator_serves_built_in_strings() {
    let tr = Translator::new("ko");
    assert_eq!(tr.language(), Language::Ko);
    assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");

    let tr = Translator::new("en-us");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
}
