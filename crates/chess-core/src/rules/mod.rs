//! 指し手の合法性判定
//!
//! - `pieces`: 駒種ごとの到達判定（`piece_reaches`）
//! - `special`: キャスリング・アンパッサン・昇格
//! - `resolve`: (移動元, 移動先) を `Move` に解決する
//!
//! ここでの判定は全て盤面を変更しない。盤面への反映は `Board::apply` が行う。
//! 手番と自玉の安全は `game::Game` が確認する。

pub mod pieces;
pub mod special;

pub use pieces::{PawnStep, pawn_step, piece_reaches};
pub use special::{castling, en_passant_victim, is_promotion_square, promotion_eligible};

use crate::error::{IllegalReason, RuleError};
use crate::position::Board;
use crate::types::{Move, PieceKind, PromotionKind, Square};

/// (移動元, 移動先) を実行可能な `Move` に解決する
///
/// 駒種の動きを先に調べ、キングとルークは駒種の動きで不可能な場合に
/// キャスリングとして解釈する。昇格になる手で `promotion` が None なら
/// `PromotionChoiceMissing` を返す。昇格にならない手で指定された `promotion` は無視する。
pub fn resolve(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PromotionKind>,
) -> Result<Move, RuleError> {
    let Some(piece) = board.occupant_at(from) else {
        return Err(RuleError::illegal(from, to, IllegalReason::EmptySource));
    };

    if piece_reaches(board, from, to) {
        if piece.kind != PieceKind::Pawn {
            return Ok(Move::Normal { from, to });
        }
        return match pawn_step(board, from, to, &piece) {
            Some(PawnStep::EnPassant(captured)) => Ok(Move::EnPassant { from, to, captured }),
            Some(_) if is_promotion_square(piece.color, to) => match promotion {
                Some(kind) => Ok(Move::Promotion { from, to, kind }),
                None => Err(RuleError::illegal(
                    from,
                    to,
                    IllegalReason::PromotionChoiceMissing,
                )),
            },
            Some(_) => Ok(Move::Normal { from, to }),
            None => Err(RuleError::illegal(from, to, IllegalReason::Unreachable)),
        };
    }

    if matches!(piece.kind, PieceKind::King | PieceKind::Rook) {
        if let Some(mv) = castling(board, from, to) {
            return Ok(mv);
        }
    }

    Err(RuleError::illegal(from, to, IllegalReason::Unreachable))
}

/// `from` の駒がキャスリング以外で動ける全ての升
pub fn destinations(board: &Board, from: Square) -> impl Iterator<Item = Square> + '_ {
    Square::all().filter(move |&to| piece_reaches(board, from, to))
}
