//! 指し手（Move）

use super::{PromotionKind, Square};

/// 合法性判定を通った指し手
///
/// 実行時にどの升を追加で書き換えるかをバリアントで区別する。
/// `Board::apply` だけがこれを盤面に反映する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// 通常の移動（駒取りを含む）
    Normal { from: Square, to: Square },
    /// キャスリング（キングとルークを同時に動かす）
    Castle {
        king_from: Square,
        king_to: Square,
        rook_from: Square,
        rook_to: Square,
    },
    /// アンパッサン。`captured` は取られるポーンの升（`to` とは異なる）
    EnPassant {
        from: Square,
        to: Square,
        captured: Square,
    },
    /// ポーンの昇格（移動または駒取りを伴う）
    Promotion {
        from: Square,
        to: Square,
        kind: PromotionKind,
    },
}

impl Move {
    /// 主となる駒の移動元
    #[inline]
    pub const fn from(&self) -> Square {
        match *self {
            Move::Normal { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Promotion { from, .. } => from,
            Move::Castle { king_from, .. } => king_from,
        }
    }

    /// 主となる駒の移動先
    #[inline]
    pub const fn to(&self) -> Square {
        match *self {
            Move::Normal { to, .. } | Move::EnPassant { to, .. } | Move::Promotion { to, .. } => {
                to
            }
            Move::Castle { king_to, .. } => king_to,
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Normal { from, to } => write!(f, "{from} -> {to}"),
            Move::Castle {
                king_from, king_to, ..
            } => write!(f, "castle {king_from} -> {king_to}"),
            Move::EnPassant { from, to, captured } => {
                write!(f, "{from} -> {to} e.p. x{captured}")
            }
            Move::Promotion { from, to, kind } => write!(f, "{from} -> {to} ={kind:?}"),
        }
    }
}
