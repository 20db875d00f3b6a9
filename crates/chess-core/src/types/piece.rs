//! 駒種（PieceKind）と駒（Piece）

use serde::{Deserialize, Serialize};

use super::Color;
use crate::error::RuleError;

/// 駒種（色の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// 初期配置の最下段（列0から列7の順）
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
}

/// 昇格先の駒種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionKind {
    Queen,
    Knight,
    Bishop,
    Rook,
}

impl PromotionKind {
    /// 入力トークンから変換
    ///
    /// `q` / `n` / `b` / `r` または駒名（大文字小文字を区別しない）。
    /// それ以外は `InvalidPromotionChoice` で、既定値にはフォールバックしない。
    pub fn from_token(token: &str) -> Result<PromotionKind, RuleError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "q" | "queen" => Ok(PromotionKind::Queen),
            "n" | "knight" => Ok(PromotionKind::Knight),
            "b" | "bishop" => Ok(PromotionKind::Bishop),
            "r" | "rook" => Ok(PromotionKind::Rook),
            _ => Err(RuleError::InvalidPromotionChoice(token.to_string())),
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionKind::Queen => PieceKind::Queen,
            PromotionKind::Knight => PieceKind::Knight,
            PromotionKind::Bishop => PieceKind::Bishop,
            PromotionKind::Rook => PieceKind::Rook,
        }
    }
}

impl From<PromotionKind> for PieceKind {
    fn from(kind: PromotionKind) -> PieceKind {
        kind.kind()
    }
}

/// 駒の識別子
///
/// 盤上の位置とは独立で、同じ色・同じ駒種の駒を区別する。
/// 昇格時は新しい識別子が割り当てられる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u16);

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 盤上の駒
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub id: PieceId,
    /// この駒自身が指された回数
    pub times_moved: u32,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, id: PieceId) -> Piece {
        Piece {
            color,
            kind,
            id,
            times_moved: 0,
        }
    }

    /// 一度も動いていないか
    #[inline]
    pub const fn is_unmoved(&self) -> bool {
        self.times_moved == 0
    }

    #[inline]
    pub fn is(&self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

/// 升の占有状態（None は空き升）
pub type Occupant = Option<Piece>;
