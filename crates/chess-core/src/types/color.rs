//! 手番（Color）

use serde::{Deserialize, Serialize};

/// 手番（白/黒）
///
/// 白は7行目側から0行目へ向かって進み、黒は0行目側から7行目へ向かって進む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 歩の前進方向（行の増分）
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// 初期配置でキング・ルークが並ぶ段
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// ポーンの初期段
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// ポーンが昇格する段（相手側の最下段）
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opponent().back_rank()
    }

    /// 2マス前進したポーンが着地する段
    #[inline]
    pub const fn double_advance_rank(self) -> u8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn test_color_ranks() {
        assert_eq!(Color::White.promotion_rank(), 0);
        assert_eq!(Color::Black.promotion_rank(), 7);
        // 初期段から2マス進むと double_advance_rank に着地する
        for c in Color::ALL {
            let landed = c.pawn_rank() as i32 + 2 * c.forward();
            assert_eq!(landed, c.double_advance_rank() as i32);
        }
    }
}
