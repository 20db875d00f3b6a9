//! 局面表現モジュール
//!
//! - `Board`: 8x8 の升配列と駒識別子カウンタ
//! - `MoveEffects`: 指し手を反映した結果（取った駒・昇格した駒）
//! - `json_conversion`: 中断・再開用のシリアライズ表現
//!
//! 盤面の更新は `move_piece` / `promote` / `apply` を通じて行い、
//! 合法性の判定は `rules` モジュールの責務とする。

mod board;
pub mod json_conversion;

pub use board::{Board, MAX_NEXT_ID, MoveEffects};
pub use json_conversion::{GameSnapshot, PieceSnapshot};
