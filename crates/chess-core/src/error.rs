//! エラー型
//!
//! いずれも利用者側で再入力を促せば回復できるもので、致命的なものはない。

use crate::types::{Color, PieceId, Square};

/// 指し手が拒否された理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// 移動元に駒がない
    EmptySource,
    /// 手番でない側の駒を動かそうとした
    WrongTurn,
    /// 駒の動きとして到達できない（特殊手も含めて）
    Unreachable,
    /// 指した後に自玉が王手のまま残る
    LeavesKingInCheck,
    /// 昇格になる手だが昇格先が指定されていない
    PromotionChoiceMissing,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IllegalReason::EmptySource => "no piece on the source square",
            IllegalReason::WrongTurn => "the piece belongs to the side not on move",
            IllegalReason::Unreachable => "the piece cannot reach that square",
            IllegalReason::LeavesKingInCheck => "the move leaves the king in check",
            IllegalReason::PromotionChoiceMissing => "a promotion piece must be chosen",
        };
        f.write_str(s)
    }
}

/// ルール判定のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// どのルールでも合法にならない指し手
    #[error("illegal move {from} -> {to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalReason,
    },

    /// 盤外の座標
    #[error("square ({row}, {col}) is out of range")]
    OutOfRange { row: i32, col: i32 },

    /// クイーン・ナイト・ビショップ・ルーク以外の昇格指定
    #[error("invalid promotion choice {0:?} (expected one of q, n, b, r)")]
    InvalidPromotionChoice(String),
}

impl RuleError {
    #[inline]
    pub(crate) fn illegal(from: Square, to: Square, reason: IllegalReason) -> RuleError {
        RuleError::IllegalMove { from, to, reason }
    }
}

/// 保存データから局面を復元するときのエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("board must be 8x8, got {rows} rows (first bad row has {cols} columns)")]
    BadShape { rows: usize, cols: usize },

    #[error("piece id {0} appears more than once")]
    DuplicateId(PieceId),

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("id counter {next_id} does not exceed stored id {max_id}")]
    StaleIdCounter { next_id: u16, max_id: u16 },

    #[error("id counter {next_id} leaves no room for promotions")]
    IdCounterExhausted { next_id: u16 },
}
