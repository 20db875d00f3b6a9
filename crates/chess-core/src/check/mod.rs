//! 王手・詰みの判定
//!
//! 詰み判定は盤面上で仮に指して王手が残るかを調べる総当たり（駒数 × 64升）。
//! 仮の指し手は `Probe` を通じてのみ行い、`Probe` の破棄時に触れた升と
//! 駒識別子カウンタを必ず元に戻す。

use std::ops::Deref;

use crate::position::Board;
use crate::rules::{PawnStep, pawn_step, piece_reaches};
use crate::types::{Color, Move, Occupant, PieceKind, Square};

/// 仮に指した局面
///
/// 生存中は盤面を排他的に借用し、`Drop` で指す前の状態に戻す。
/// 途中で panic しても巻き戻しは行われる。
pub struct Probe<'a> {
    board: &'a mut Board,
    saved: [Option<(Square, Occupant)>; 4],
    next_id: u16,
}

impl<'a> Probe<'a> {
    /// `mv` を仮に指す
    pub fn new(board: &'a mut Board, mv: &Move) -> Probe<'a> {
        let mut saved = [None; 4];
        for (slot, sq) in saved.iter_mut().zip(touched_squares(mv).into_iter().flatten()) {
            *slot = Some((sq, board.occupant_at(sq)));
        }
        let next_id = board.next_id();
        board.apply(mv);
        Probe {
            board,
            saved,
            next_id,
        }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        for (sq, occupant) in self.saved.iter().rev().flatten() {
            self.board.put(*sq, *occupant);
        }
        self.board.set_next_id(self.next_id);
    }
}

/// 指し手が書き換える升（最大4つ）
fn touched_squares(mv: &Move) -> [Option<Square>; 4] {
    match *mv {
        Move::Normal { from, to } | Move::Promotion { from, to, .. } => {
            [Some(from), Some(to), None, None]
        }
        Move::EnPassant { from, to, captured } => [Some(from), Some(to), Some(captured), None],
        Move::Castle {
            king_from,
            king_to,
            rook_from,
            rook_to,
        } => [Some(king_from), Some(king_to), Some(rook_from), Some(rook_to)],
    }
}

/// `sq` が `by` 側のいずれかの駒の動きで到達されるか
///
/// 手番は考慮しない。ポーンは移動先の占有状態で取りの動きかどうかが決まるため、
/// 駒のいる升に対してはポーンの取りの利きだけが数えられる。
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(from, _)| piece_reaches(board, from, sq))
}

/// `sq` の駒が相手の駒に攻撃されているか（空き升は false）
pub fn in_check(board: &Board, sq: Square) -> bool {
    match board.occupant_at(sq) {
        Some(p) => is_attacked(board, sq, p.color.opponent()),
        None => false,
    }
}

/// `color` のキングが王手されているか（キングがいなければ false）
pub fn king_in_check(board: &Board, color: Color) -> bool {
    board.find_king(color).is_some_and(|k| in_check(board, k))
}

/// `mv` を指した後に `color` のキングが王手されているか
///
/// 盤面は呼び出し前の状態のまま返る。
pub fn leaves_king_in_check(board: &mut Board, mv: &Move, color: Color) -> bool {
    let probe = Probe::new(board, mv);
    king_in_check(&probe, color)
}

/// 王手回避の候補手（駒種の動きのみ、キャスリングは含めない）
///
/// 昇格先の駒種は自玉の安全に影響しないため、昇格の手は通常の移動として試す。
fn escape_candidate(board: &Board, from: Square, to: Square) -> Option<Move> {
    if !piece_reaches(board, from, to) {
        return None;
    }
    let piece = board.occupant_at(from)?;
    if piece.kind == PieceKind::Pawn {
        if let Some(PawnStep::EnPassant(captured)) = pawn_step(board, from, to, &piece) {
            return Some(Move::EnPassant { from, to, captured });
        }
    }
    Some(Move::Normal { from, to })
}

/// `color` のキングを王手から逃がす手を1つ探す
pub fn find_escape(board: &mut Board, color: Color) -> Option<Move> {
    let movers: Vec<Square> = board.pieces(color).map(|(sq, _)| sq).collect();
    let mut probes = 0u32;
    for from in movers {
        for to in Square::all() {
            let Some(mv) = escape_candidate(board, from, to) else {
                continue;
            };
            probes += 1;
            if !leaves_king_in_check(board, &mv, color) {
                log::trace!("{color} escapes with {mv} after {probes} probes");
                return Some(mv);
            }
        }
    }
    log::trace!("{color} has no escape ({probes} probes)");
    None
}

/// `color` が詰んでいるか
///
/// キングが王手されていて、どの駒のどの手を仮に指しても王手が残る場合に true。
/// 王手されていなければ常に false（ステイルメイトは判定しない）。
/// 候補手にキャスリングは含めない。王手中のキャスリングは `Game::play` で受け付けるので、
/// キャスリングだけが王手を外す局面では詰みと判定しつつその手を指せる。
pub fn checkmate(board: &mut Board, color: Color) -> bool {
    if !king_in_check(board, color) {
        return false;
    }
    let mated = find_escape(board, color).is_none();
    log::debug!("{color} in check, checkmate={mated}");
    mated
}
