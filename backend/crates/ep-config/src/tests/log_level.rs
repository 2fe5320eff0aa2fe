use crate::LogLevel;

use log::LevelFilter;

#[test]
fn test_log_level_from_str_known_names() {
    assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Warn));
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Warn));
    assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Off));
}

#[test]
fn test_log_level_from_str_unknown_is_error() {
    assert!("loud".parse::<LogLevel>().is_err());
}

#[test]
fn test_log_level_deserialize_unknown_falls_back_to_info() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str("level = \"loud\"").unwrap();

    assert_eq!(wrapper.level, LogLevel(LevelFilter::Info));
}
