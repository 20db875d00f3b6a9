//! 特殊な指し手（キャスリング・アンパッサン・昇格）

use crate::position::Board;
use crate::types::{Color, Move, PieceKind, Square};

/// アンパッサンで取られるポーンの升
///
/// `from` のポーンが斜め前の空き升 `to` へ進むとき、`from` と同じ行・`to` と同じ列に
/// 2マス前進した直後の相手ポーン（`times_moved == 1` かつ2マス前進の着地段にいる）が
/// いれば、その升を返す。盤面は変更しない。
pub fn en_passant_victim(board: &Board, from: Square, to: Square, mover: Color) -> Option<Square> {
    if !board.is_empty(to) {
        return None;
    }
    let (dr, dc) = from.delta_to(to);
    if dr != mover.forward() || dc.abs() != 1 {
        return None;
    }
    let victim_sq = Square::new(from.row(), to.col());
    let victim = board.occupant_at(victim_sq)?;
    let enemy = mover.opponent();
    (victim.is(enemy, PieceKind::Pawn)
        && victim.times_moved == 1
        && victim_sq.row() == enemy.double_advance_rank())
    .then_some(victim_sq)
}

/// `sq` にいる駒が昇格できる状態か
///
/// ポーンが相手側の最下段に到達している場合のみ true。
/// 自陣の最下段にいるポーン（通常の対局では現れない）は対象外。
pub fn promotion_eligible(board: &Board, sq: Square) -> bool {
    match board.occupant_at(sq) {
        Some(p) if p.kind == PieceKind::Pawn => sq.row() == p.color.promotion_rank(),
        _ => false,
    }
}

/// ポーンの移動先が昇格の段か
#[inline]
pub fn is_promotion_square(color: Color, to: Square) -> bool {
    to.row() == color.promotion_rank()
}

/// キャスリングの判定
///
/// `a` と `b` は同じ色のキングとルークの升（順不同）。両者とも一度も動いておらず、
/// 同じ行にあって間の升が全て空き、キングが2マス動ける距離（3マス以上離れている）
/// なら `Move::Castle` を返す。
///
/// 王手中のキャスリングや、攻撃されている升を通過するキャスリングは禁止しない。
/// 一方で `check::checkmate` は王手回避の候補にキャスリングを含めないため、
/// キャスリングでしか王手を外せない局面は詰みと判定される（`Game::play` ではその
/// キャスリングを指せる）。
pub fn castling(board: &Board, a: Square, b: Square) -> Option<Move> {
    let pa = board.occupant_at(a)?;
    let pb = board.occupant_at(b)?;
    if pa.color != pb.color || !pa.is_unmoved() || !pb.is_unmoved() {
        return None;
    }
    let (king_from, rook_from) = match (pa.kind, pb.kind) {
        (PieceKind::King, PieceKind::Rook) => (a, b),
        (PieceKind::Rook, PieceKind::King) => (b, a),
        _ => return None,
    };
    if king_from.row() != rook_from.row() {
        return None;
    }

    let (_, dc) = king_from.delta_to(rook_from);
    if dc.abs() < 3 {
        return None;
    }
    let step = dc.signum();
    let mut cur = king_from.offset(0, step)?;
    while cur != rook_from {
        if !board.is_empty(cur) {
            return None;
        }
        cur = cur.offset(0, step)?;
    }

    let king_to = king_from.offset(0, 2 * step)?;
    let rook_to = king_from.offset(0, step)?;
    Some(Move::Castle {
        king_from,
        king_to,
        rook_from,
        rook_to,
    })
}
