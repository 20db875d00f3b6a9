//! 中断ファイルの保存・読み込み
//!
//! 中身は `GameSnapshot` の JSON。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_core::{Game, GameSnapshot};

pub fn save(path: &Path, game: &Game) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(&game.snapshot())?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("saved game to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Game> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot: GameSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("malformed save file {}", path.display()))?;
    let game = Game::restore(&snapshot)
        .with_context(|| format!("inconsistent save file {}", path.display()))?;
    Ok(game)
}

/// 終局後に中断ファイルを消す（無ければ何もしない）
pub fn remove(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
    }
}
