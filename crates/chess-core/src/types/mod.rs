//! 基本型

mod color;
mod moves;
mod piece;
mod square;

pub use color::Color;
pub use moves::Move;
pub use piece::{Occupant, Piece, PieceId, PieceKind, PromotionKind};
pub use square::{in_bounds, Square};
