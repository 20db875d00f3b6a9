//! 升目（Square）

use crate::error::RuleError;

/// 升目（0-63）
///
/// 配置: index = row * 8 + col
/// (0, 0) は黒の最下段左端、(7, 7) は白の最下段右端。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 64;

    /// 盤の一辺
    pub const SIZE: i32 = 8;

    /// 行・列から生成（範囲チェックなし、const 文脈用）
    ///
    /// row, col は 0..=7 でなければならない。
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// 符号付き座標から生成（盤外なら None）
    #[inline]
    pub const fn from_coords(row: i32, col: i32) -> Option<Square> {
        if in_bounds(row, col) {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// 符号付き座標から生成（盤外なら OutOfRange）
    pub fn try_new(row: i32, col: i32) -> Result<Square, RuleError> {
        Square::from_coords(row, col).ok_or(RuleError::OutOfRange { row, col })
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(n: usize) -> Option<Square> {
        if n < Square::NUM {
            Some(Square(n as u8))
        } else {
            None
        }
    }

    /// 行
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// 列
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// (dr, dc) だけずらした升（盤外なら None）
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        Square::from_coords(self.row() as i32 + dr, self.col() as i32 + dc)
    }

    /// self から to への差分 (Δrow, Δcol)
    #[inline]
    pub const fn delta_to(self, to: Square) -> (i32, i32) {
        (
            to.row() as i32 - self.row() as i32,
            to.col() as i32 - self.col() as i32,
        )
    }

    /// 180度回転
    #[inline]
    pub const fn inverse(self) -> Square {
        Square(63 - self.0)
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::NUM as u8).map(Square)
    }
}

/// 行・列が盤内かどうか
#[inline]
pub const fn in_bounds(row: i32, col: i32) -> bool {
    0 <= row && row < Square::SIZE && 0 <= col && col < Square::SIZE
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_row_col() {
        let sq = Square::new(6, 4);
        assert_eq!(sq.row(), 6);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 52);
    }

    #[test]
    fn test_in_bounds_matches_coordinate_range() {
        for row in -3..11 {
            for col in -3..11 {
                let expected = (0..8).contains(&row) && (0..8).contains(&col);
                assert_eq!(in_bounds(row, col), expected, "({row}, {col})");
                assert_eq!(Square::from_coords(row, col).is_some(), expected);
            }
        }
    }

    #[test]
    fn test_try_new_out_of_range() {
        assert_eq!(
            Square::try_new(8, 0),
            Err(RuleError::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(
            Square::try_new(0, -1),
            Err(RuleError::OutOfRange { row: 0, col: -1 })
        );
        assert_eq!(Square::try_new(7, 7), Ok(Square::new(7, 7)));
    }

    #[test]
    fn test_square_offset_and_inverse() {
        let sq = Square::new(0, 0);
        assert_eq!(sq.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(sq.inverse(), Square::new(7, 7));
        assert_eq!(Square::new(2, 5).inverse(), Square::new(5, 2));
        assert_eq!(Square::all().count(), 64);
    }
}
