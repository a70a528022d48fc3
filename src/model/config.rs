use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    env,
};
use crate::i18n::Language;
use crate::model::annotation::StateFormat;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    /// 保存文件第三列的写法
    #[serde(default)]
    pub state_format: StateFormat,
    /// 上次打开/保存的目录，文件对话框从这里开始
    #[serde(default)]
    pub last_dir: Option<PathBuf>,
}

impl Config {
    /// 文件对话框的起始目录，没有记录时用当前目录
    pub fn dialog_dir(&self) -> PathBuf {
        self.last_dir
            .clone()
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn remember_dir(&mut self, file: &std::path::Path) {
        if let Some(parent) = file.parent() {
            self.last_dir = Some(parent.to_path_buf());
        }
    }
}

fn get_config_path() -> PathBuf {
    let mut path = env::current_exe().unwrap_or_default();
    path.set_file_name("config.json");
    path
}

fn parse_config(content: &str) -> Config {
    serde_json::from_str(content).unwrap_or_default()
}

pub fn load_config() -> Config {
    let path = get_config_path();
    fs::read_to_string(path)
        .map(|content| parse_config(&content))
        .unwrap_or_default()
}

pub fn save_config(config: &Config) {
    let path = get_config_path();
    match serde_json::to_string_pretty(config) {
        Ok(content) => {
            if let Err(e) = fs::write(&path, content) {
                tracing::warn!(path = %path.display(), error = %e, "failed to save config");
            }
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize config"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse_config(r#"{ "language": "Zh" }"#);
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.state_format, StateFormat::Tag);
        assert_eq!(config.last_dir, None);
    }

    #[test]
    fn broken_json_gives_default_config() {
        assert_eq!(parse_config("{ not json"), Config::default());
    }

    #[test]
    fn roundtrips_through_json() {
        let config = Config {
            language: Language::Ja,
            state_format: StateFormat::Ordinal,
            last_dir: Some(PathBuf::from("/data/pairs")),
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&json), config);
    }

    #[test]
    fn remembers_parent_of_chosen_file() {
        let mut config = Config::default();
        config.remember_dir(std::path::Path::new("/data/pairs/list.txt"));
        assert_eq!(config.last_dir, Some(PathBuf::from("/data/pairs")));
    }
}
