//! 方向ベクトルとレイ走査
//!
//! 遠方駒（ビショップ・ルーク・クイーン）は `ray_reaches` で、
//! 近接駒（ナイト・キング）はオフセット表で到達判定を行う。

use crate::position::Board;
use crate::types::{Color, Occupant, Square};

/// 8方向の単一レイ（行方向の増分, 列方向の増分）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direct {
    U,
    D,
    L,
    R,
    LU,
    RU,
    LD,
    RD,
}

impl Direct {
    /// (Δrow, Δcol)。「上」は行番号が減る向き
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direct::U => (-1, 0),
            Direct::D => (1, 0),
            Direct::L => (0, -1),
            Direct::R => (0, 1),
            Direct::LU => (-1, -1),
            Direct::RU => (-1, 1),
            Direct::LD => (1, -1),
            Direct::RD => (1, 1),
        }
    }
}

/// ルークの4方向
pub const ORTHOGONAL: [Direct; 4] = [Direct::U, Direct::D, Direct::L, Direct::R];

/// ビショップの4方向
pub const DIAGONAL: [Direct; 4] = [Direct::LU, Direct::RU, Direct::LD, Direct::RD];

/// クイーン・キングの8方向
pub const ALL_DIRECTIONS: [Direct; 8] = [
    Direct::U,
    Direct::D,
    Direct::L,
    Direct::R,
    Direct::LU,
    Direct::RU,
    Direct::LD,
    Direct::RD,
];

/// ナイトの8つのL字オフセット
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// キングの8つの隣接オフセット
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// 2つの占有状態が同じ色の駒かどうか（空き升はどちらの側でもない）
#[inline]
pub fn same_side(a: Occupant, b: Occupant) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.color == b.color,
        _ => false,
    }
}

/// `mover` 側の駒が `to` に入れるか（経路は見ない）
///
/// 自駒のある升には入れない。空き升と相手駒の升は入れる。
#[inline]
pub fn reachable(board: &Board, mover: Color, to: Square) -> bool {
    !matches!(board.occupant_at(to), Some(p) if p.color == mover)
}

/// `delta` が `offsets` のいずれかに一致するか
#[inline]
pub fn matches_offset(delta: (i32, i32), offsets: &[(i32, i32)]) -> bool {
    offsets.contains(&delta)
}

/// `from` から `dir` 方向へ進んで `to` に到達できるか
///
/// 途中の升が1つでも埋まっていれば（色を問わず）到達できない。
/// `to` 自体の占有状態はここでは見ない。
pub fn walk_ray(board: &Board, from: Square, to: Square, dir: Direct) -> bool {
    let (dr, dc) = dir.delta();
    let mut cur = from.offset(dr, dc);
    while let Some(sq) = cur {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        cur = sq.offset(dr, dc);
    }
    false
}

/// `directions` のいずれかのレイで `to` に遮られずに到達できるか
pub fn ray_reaches(board: &Board, from: Square, to: Square, directions: &[Direct]) -> bool {
    from != to && directions.iter().any(|&dir| walk_ray(board, from, to, dir))
}
