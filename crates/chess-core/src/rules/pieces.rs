//! 駒種別の到達判定

use crate::geometry::{
    ALL_DIRECTIONS, DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL, matches_offset,
    ray_reaches, reachable,
};
use crate::position::Board;
use crate::types::{Piece, PieceKind, Square};

use super::special::en_passant_victim;

/// ポーンの動きの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnStep {
    /// 1マス前進
    Advance,
    /// 初期段からの2マス前進
    DoubleAdvance,
    /// 斜め前の相手駒を取る
    Capture,
    /// アンパッサン。取られるポーンの升を持つ
    EnPassant(Square),
}

/// `from` の駒が駒種の動きとして `to` に到達できるか
///
/// キャスリングは含まない（`special::castling` 側で扱う）。手番や自玉の安全も見ない。
pub fn piece_reaches(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.occupant_at(from) else {
        return false;
    };
    if from == to || !reachable(board, piece.color, to) {
        return false;
    }
    let delta = from.delta_to(to);
    match piece.kind {
        PieceKind::Pawn => pawn_step(board, from, to, &piece).is_some(),
        PieceKind::Knight => matches_offset(delta, &KNIGHT_OFFSETS),
        PieceKind::Bishop => ray_reaches(board, from, to, &DIAGONAL),
        PieceKind::Rook => ray_reaches(board, from, to, &ORTHOGONAL),
        PieceKind::Queen => ray_reaches(board, from, to, &ALL_DIRECTIONS),
        PieceKind::King => matches_offset(delta, &KING_OFFSETS),
    }
}

/// ポーンの `from` → `to` を分類する（不可能なら None）
///
/// `to` が自駒でないことは呼び出し側で確認済みとする。
pub fn pawn_step(board: &Board, from: Square, to: Square, pawn: &Piece) -> Option<PawnStep> {
    let forward = pawn.color.forward();
    let (dr, dc) = from.delta_to(to);

    if dc == 0 {
        if dr == forward && board.is_empty(to) {
            return Some(PawnStep::Advance);
        }
        if dr == 2 * forward
            && pawn.is_unmoved()
            && from.row() == pawn.color.pawn_rank()
            && board.is_empty(to)
        {
            let mid = from.offset(forward, 0)?;
            if board.is_empty(mid) {
                return Some(PawnStep::DoubleAdvance);
            }
        }
        return None;
    }

    if dr != forward || dc.abs() != 1 {
        return None;
    }
    if board.occupant_at(to).is_some() {
        return Some(PawnStep::Capture);
    }
    en_passant_victim(board, from, to, pawn.color).map(PawnStep::EnPassant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn board_with(pieces: &[(u8, u8, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for &(r, c, color, kind) in pieces {
            board.place(Square::new(r, c), color, kind);
        }
        board
    }

    fn reaches(board: &Board, from: (u8, u8), to: (u8, u8)) -> bool {
        piece_reaches(board, Square::new(from.0, from.1), Square::new(to.0, to.1))
    }

    #[test]
    fn test_knight_moves() {
        let board = board_with(&[(4, 4, Color::White, PieceKind::Knight)]);
        let targets: Vec<_> = Square::all()
            .filter(|&sq| piece_reaches(&board, Square::new(4, 4), sq))
            .collect();
        assert_eq!(targets.len(), 8);
        assert!(reaches(&board, (4, 4), (2, 3)));
        assert!(reaches(&board, (4, 4), (5, 6)));
        assert!(!reaches(&board, (4, 4), (4, 6)));
        assert!(!reaches(&board, (4, 4), (6, 6)));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::startpos();
        assert!(reaches(&board, (7, 1), (5, 2)));
        assert!(reaches(&board, (7, 1), (5, 0)));
        // 自駒の升には入れない
        assert!(!reaches(&board, (7, 1), (6, 3)));
    }

    #[test]
    fn test_king_single_step() {
        let board = board_with(&[
            (4, 4, Color::White, PieceKind::King),
            (3, 3, Color::White, PieceKind::Pawn),
            (5, 5, Color::Black, PieceKind::Pawn),
        ]);
        assert!(reaches(&board, (4, 4), (3, 4)));
        assert!(reaches(&board, (4, 4), (5, 5)));
        assert!(!reaches(&board, (4, 4), (3, 3)));
        assert!(!reaches(&board, (4, 4), (2, 4)));
        assert!(!reaches(&board, (4, 4), (4, 6)));
    }

    #[test]
    fn test_sliders() {
        let board = board_with(&[
            (4, 4, Color::White, PieceKind::Queen),
            (0, 0, Color::White, PieceKind::Bishop),
            (7, 0, Color::White, PieceKind::Rook),
            (2, 2, Color::Black, PieceKind::Knight),
        ]);
        // クイーン
        assert!(reaches(&board, (4, 4), (0, 4)));
        assert!(reaches(&board, (4, 4), (7, 7)));
        assert!(reaches(&board, (4, 4), (2, 2)));
        assert!(!reaches(&board, (4, 4), (1, 1)));
        assert!(!reaches(&board, (4, 4), (2, 3)));
        // ビショップは (2,2) の駒で遮られる
        assert!(reaches(&board, (0, 0), (2, 2)));
        assert!(!reaches(&board, (0, 0), (3, 3)));
        assert!(!reaches(&board, (0, 0), (0, 1)));
        // ルーク
        assert!(!reaches(&board, (7, 0), (0, 0)));
        assert!(reaches(&board, (7, 0), (1, 0)));
        assert!(reaches(&board, (7, 0), (7, 7)));
        assert!(!reaches(&board, (7, 0), (6, 1)));
    }

    #[test]
    fn test_pawn_from_startpos() {
        let board = Board::startpos();
        assert!(reaches(&board, (6, 4), (5, 4)));
        assert!(reaches(&board, (6, 4), (4, 4)));
        assert!(!reaches(&board, (6, 4), (3, 4)));
        assert!(!reaches(&board, (6, 4), (5, 3)));
        assert!(!reaches(&board, (6, 4), (7, 4)));
        assert!(reaches(&board, (1, 2), (2, 2)));
        assert!(reaches(&board, (1, 2), (3, 2)));
        assert!(!reaches(&board, (1, 2), (0, 2)));
    }

    #[test]
    fn test_pawn_double_advance_needs_clear_path() {
        let board = board_with(&[
            (6, 0, Color::White, PieceKind::Pawn),
            (5, 0, Color::Black, PieceKind::Knight),
            (6, 1, Color::White, PieceKind::Pawn),
            (4, 1, Color::Black, PieceKind::Knight),
        ]);
        assert!(!reaches(&board, (6, 0), (4, 0)));
        assert!(!reaches(&board, (6, 0), (5, 0)));
        assert!(!reaches(&board, (6, 1), (4, 1)));
        assert!(reaches(&board, (6, 1), (5, 1)));
    }

    #[test]
    fn test_pawn_double_advance_only_from_start_rank() {
        let board = board_with(&[(5, 3, Color::White, PieceKind::Pawn)]);
        assert!(reaches(&board, (5, 3), (4, 3)));
        assert!(!reaches(&board, (5, 3), (3, 3)));
    }

    #[test]
    fn test_pawn_diagonal_capture() {
        let board = board_with(&[
            (4, 4, Color::White, PieceKind::Pawn),
            (3, 3, Color::Black, PieceKind::Rook),
            (3, 5, Color::White, PieceKind::Rook),
            (5, 5, Color::Black, PieceKind::Rook),
            (3, 4, Color::Black, PieceKind::Rook),
        ]);
        assert!(reaches(&board, (4, 4), (3, 3)));
        assert!(!reaches(&board, (4, 4), (3, 5)));
        // 後ろ向きには取れない
        assert!(!reaches(&board, (4, 4), (5, 5)));
        // 正面の駒は取れない
        assert!(!reaches(&board, (4, 4), (3, 4)));
    }

    #[test]
    fn test_empty_source_reaches_nothing() {
        let board = Board::empty();
        assert!(Square::all().all(|sq| !piece_reaches(&board, Square::new(3, 3), sq)));
    }
}
