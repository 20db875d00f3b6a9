//! 盤面のテキスト描画
//!
//! 行番号を左、列番号を上に付けた 8x8 の表を作る。色付きのときは
//! 升目の背景を ANSI エスケープで塗り分ける。

use std::fmt::Write as _;

use chess_core::{Board, Color, Piece, PieceKind};

const LIGHT: &str = "\x1b[47m";
const DARK: &str = "\x1b[100m";
const RESET: &str = "\x1b[0m";

/// 駒の Unicode 記号
pub fn glyph(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

pub fn render(board: &Board, color: bool) -> String {
    let mut out = String::from("  ");
    for col in 0..8 {
        write!(out, " {col} ").unwrap();
    }
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        write!(out, "{row} ").unwrap();
        for (col, cell) in cells.iter().enumerate() {
            let symbol = match cell {
                Some(piece) => glyph(piece),
                None if color => ' ',
                None => '.',
            };
            if color {
                let bg = if (row + col) % 2 == 0 { LIGHT } else { DARK };
                write!(out, "{bg} {symbol} {RESET}").unwrap();
            } else {
                write!(out, " {symbol} ").unwrap();
            }
        }
        out.push('\n');
    }
    out
}
