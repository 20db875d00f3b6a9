//! 設定ファイルとコマンドライン引数の統合
//!
//! 優先順位はコマンドライン > 設定ファイル > 既定値。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// 中断ファイルの既定の保存先
pub const DEFAULT_SAVE_PATH: &str = "output/pause.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 中断ファイルの保存先
    pub save_path: PathBuf,
    /// ANSI エスケープで升目に色を付けるか
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            color: true,
        }
    }
}

/// コマンドラインで明示された値だけを持つ上書き
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub save_path: Option<PathBuf>,
    pub no_color: bool,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Config> {
        toml::from_str(text).context("invalid config")
    }

    /// TOML ファイルを読み込む
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Config::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// 設定ファイルの有無に応じて読み込み、上書きを適用する
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Config> {
        let base = match path {
            Some(p) => Config::load(p)?,
            None => Config::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Config {
        if let Some(path) = overrides.save_path {
            self.save_path = path;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }
}
