//! チェスのルールエンジン
//!
//! 盤面と指し手を受け取り、駒種ごとの合法性判定、指し手の実行、
//! 特殊ルール（キャスリング・アンパッサン・昇格）の適用、王手・詰みの判定を行う。
//! 探索・評価・棋譜形式の解析は扱わない。
//!
//! ```
//! use chess_core::{Game, GameStatus, Square};
//!
//! let mut game = Game::new();
//! let outcome = game.play(Square::new(6, 4), Square::new(4, 4), None).unwrap();
//! assert_eq!(outcome.status, GameStatus::Ongoing);
//! ```

pub mod check;
pub mod error;
pub mod game;
pub mod geometry;
pub mod position;
pub mod rules;
pub mod types;

pub use check::{checkmate, in_check, is_attacked, king_in_check};
pub use error::{IllegalReason, RuleError, SnapshotError};
pub use game::{Game, GameStatus, PlyOutcome};
pub use position::{Board, GameSnapshot, MAX_NEXT_ID, MoveEffects, PieceSnapshot};
pub use types::{Color, Move, Occupant, Piece, PieceId, PieceKind, PromotionKind, Square};
