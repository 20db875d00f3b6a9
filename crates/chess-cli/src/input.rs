//! 入力行の解釈
//!
//! 指し手は `行 列 行 列` の4つの整数（区切りは空白またはカンマ）。
//! それ以外に `save` と `quit` を受け付ける。

use chess_core::{PromotionKind, RuleError, Square};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Save,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("expected 4 numbers (row col row col), got {0}")]
    WrongArity(usize),

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// 1行を `Command` に解釈する
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    match line.to_ascii_lowercase().as_str() {
        "save" => return Ok(Command::Save),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 4 {
        return Err(InputError::WrongArity(tokens.len()));
    }
    let mut coords = [0i32; 4];
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|_| InputError::NotANumber((*token).to_string()))?;
    }
    let from = Square::try_new(coords[0], coords[1])?;
    let to = Square::try_new(coords[2], coords[3])?;
    Ok(Command::Move { from, to })
}

/// 昇格先の入力を解釈する
pub fn parse_promotion(line: &str) -> Result<PromotionKind, InputError> {
    Ok(PromotionKind::from_token(line)?)
}
