//! 対局の進行
//!
//! 手番の管理、指し手の確定、1手ごとの終局判定を行う。
//! 合法性の判定は `rules`、王手の判定は `check` に委ねる。

use crate::check::{checkmate, king_in_check, leaves_king_in_check};
use crate::error::{IllegalReason, RuleError, SnapshotError};
use crate::position::json_conversion::{board_from_cells, board_to_cells};
use crate::position::{Board, GameSnapshot, MoveEffects};
use crate::rules;
use crate::types::{Color, Move, PromotionKind, Square};

/// 手を指した後の局面の状態（手番側から見て）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// 対局継続
    Ongoing,
    /// 指定色が王手されている
    Check(Color),
    /// 詰み
    Checkmate { winner: Color },
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }
}

/// 1手を指した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyOutcome {
    pub mv: Move,
    pub effects: MoveEffects,
    pub status: GameStatus,
}

/// 対局（盤面と手番）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// 初期局面・白番で開始
    pub fn new() -> Game {
        Game {
            board: Board::startpos(),
            turn: Color::White,
        }
    }

    pub fn from_parts(board: Board, turn: Color) -> Game {
        Game { board, turn }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 手番
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// `from` → `to` が合法な昇格の手か
    ///
    /// 入力側は true のときに昇格先を尋ねてから `play` を呼ぶ。
    /// 自玉が王手のまま残る手など、昇格先によらず拒否される手では false。
    pub fn needs_promotion(&mut self, from: Square, to: Square) -> bool {
        matches!(
            self.validate(from, to, Some(PromotionKind::Queen)),
            Ok(Move::Promotion { .. })
        )
    }

    /// 手番側の手を検証して指す
    ///
    /// 拒否した場合は盤面も手番も変わらない。
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionKind>,
    ) -> Result<PlyOutcome, RuleError> {
        let mv = self.validate(from, to, promotion)?;
        let effects = self.board.apply(&mv);
        let mover = self.turn;
        self.turn = mover.opponent();
        let status = self.status();
        log::debug!("{mover} played {mv}, status={status:?}");
        Ok(PlyOutcome {
            mv,
            effects,
            status,
        })
    }

    /// 盤面を変えずに手番側の手を検証する
    ///
    /// `validate` の結果を `Board::apply` に渡すことと `play` は等価。
    pub fn validate(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionKind>,
    ) -> Result<Move, RuleError> {
        match self.board.occupant_at(from) {
            None => return Err(RuleError::illegal(from, to, IllegalReason::EmptySource)),
            Some(p) if p.color != self.turn => {
                return Err(RuleError::illegal(from, to, IllegalReason::WrongTurn));
            }
            Some(_) => {}
        }
        let mv = match rules::resolve(&self.board, from, to, promotion) {
            Ok(mv) => mv,
            Err(RuleError::IllegalMove {
                reason: IllegalReason::PromotionChoiceMissing,
                ..
            }) => {
                // どの駒に昇格しても自玉が王手のままならそちらを理由にする
                let placeholder = Move::Promotion {
                    from,
                    to,
                    kind: PromotionKind::Queen,
                };
                let reason = if leaves_king_in_check(&mut self.board, &placeholder, self.turn) {
                    IllegalReason::LeavesKingInCheck
                } else {
                    IllegalReason::PromotionChoiceMissing
                };
                log::trace!("rejected {from} -> {to}: {reason}");
                return Err(RuleError::illegal(from, to, reason));
            }
            Err(e) => {
                log::trace!("rejected {from} -> {to}: {e}");
                return Err(e);
            }
        };
        if leaves_king_in_check(&mut self.board, &mv, self.turn) {
            log::trace!("rejected {mv}: king left in check");
            return Err(RuleError::illegal(
                from,
                to,
                IllegalReason::LeavesKingInCheck,
            ));
        }
        Ok(mv)
    }

    /// 手番側から見た現在の状態
    ///
    /// 詰み判定のために盤面を一時的に変更するが、戻り時には元に戻っている。
    pub fn status(&mut self) -> GameStatus {
        let side = self.turn;
        if !king_in_check(&self.board, side) {
            GameStatus::Ongoing
        } else if checkmate(&mut self.board, side) {
            GameStatus::Checkmate {
                winner: side.opponent(),
            }
        } else {
            GameStatus::Check(side)
        }
    }

    /// 中断保存用の表現
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn: self.turn,
            next_id: self.board.next_id(),
            cells: board_to_cells(&self.board),
        }
    }

    /// 保存された表現から復元する
    pub fn restore(snapshot: &GameSnapshot) -> Result<Game, SnapshotError> {
        let board = board_from_cells(&snapshot.cells, snapshot.next_id)?;
        Ok(Game {
            board,
            turn: snapshot.turn,
        })
    }
}
