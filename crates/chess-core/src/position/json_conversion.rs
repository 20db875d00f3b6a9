//! 中断・再開用の局面表現
//!
//! ファイル形式そのものは呼び出し側（CLI）が決める。ここでは serde で
//! 扱えるデータ構造と、`Board` との相互変換・整合性検査だけを提供する。

use serde::{Deserialize, Serialize};

use super::Board;
use super::MAX_NEXT_ID;
use crate::error::SnapshotError;
use crate::types::{Color, Piece, PieceId, PieceKind, Square};

/// 盤上の駒1枚
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub id: PieceId,
    pub times_moved: u32,
}

impl From<Piece> for PieceSnapshot {
    fn from(p: Piece) -> Self {
        PieceSnapshot {
            color: p.color,
            kind: p.kind,
            id: p.id,
            times_moved: p.times_moved,
        }
    }
}

impl From<PieceSnapshot> for Piece {
    fn from(p: PieceSnapshot) -> Self {
        Piece {
            color: p.color,
            kind: p.kind,
            id: p.id,
            times_moved: p.times_moved,
        }
    }
}

/// 対局全体の保存状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    /// 手番
    pub turn: Color,
    /// 次に割り当てる駒識別子
    pub next_id: u16,
    /// 8x8のセル配列（cells[row][col]、空き升は null）
    pub cells: Vec<Vec<Option<PieceSnapshot>>>,
}

pub(crate) fn board_to_cells(board: &Board) -> Vec<Vec<Option<PieceSnapshot>>> {
    board
        .rows()
        .map(|row| row.iter().map(|occ| occ.map(PieceSnapshot::from)).collect())
        .collect()
}

/// セル配列から盤面を組み立てる
///
/// 8x8 であること、識別子が重複しないこと、各色のキングがちょうど1枚であること、
/// `next_id` が全ての識別子より大きく `MAX_NEXT_ID` 以下であることを確認する。
pub(crate) fn board_from_cells(
    cells: &[Vec<Option<PieceSnapshot>>],
    next_id: u16,
) -> Result<Board, SnapshotError> {
    if cells.len() != 8 {
        return Err(SnapshotError::BadShape {
            rows: cells.len(),
            cols: cells.first().map_or(0, Vec::len),
        });
    }
    if let Some(bad) = cells.iter().find(|row| row.len() != 8) {
        return Err(SnapshotError::BadShape {
            rows: cells.len(),
            cols: bad.len(),
        });
    }

    let mut board = Board::empty();
    let mut seen = Vec::with_capacity(32);
    let mut kings = [0usize; Color::NUM];
    for (row, cols) in cells.iter().enumerate() {
        for (col, cell) in cols.iter().enumerate() {
            let Some(snap) = cell else { continue };
            if seen.contains(&snap.id) {
                return Err(SnapshotError::DuplicateId(snap.id));
            }
            seen.push(snap.id);
            if snap.kind == PieceKind::King {
                kings[snap.color.index()] += 1;
            }
            board.put(Square::new(row as u8, col as u8), Some(Piece::from(*snap)));
        }
    }

    for color in Color::ALL {
        let count = kings[color.index()];
        if count != 1 {
            return Err(SnapshotError::KingCount { color, count });
        }
    }
    if let Some(max_id) = seen.iter().map(|id| id.0).max() {
        if next_id <= max_id {
            return Err(SnapshotError::StaleIdCounter { next_id, max_id });
        }
    }
    if next_id > MAX_NEXT_ID {
        return Err(SnapshotError::IdCounterExhausted { next_id });
    }
    board.set_next_id(next_id);
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_roundtrip_startpos() {
        let board = Board::startpos();
        let cells = board_to_cells(&board);
        assert_eq!(cells.len(), 8);
        let restored = board_from_cells(&cells, board.next_id()).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_rejects_bad_shape() {
        let mut cells = board_to_cells(&Board::startpos());
        cells[3].pop();
        assert_eq!(
            board_from_cells(&cells, 32),
            Err(SnapshotError::BadShape { rows: 8, cols: 7 })
        );
        cells.truncate(5);
        assert!(matches!(
            board_from_cells(&cells, 32),
            Err(SnapshotError::BadShape { rows: 5, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut cells = board_to_cells(&Board::startpos());
        let dup = cells[0][0];
        cells[4][4] = dup;
        assert_eq!(
            board_from_cells(&cells, 32),
            Err(SnapshotError::DuplicateId(dup.unwrap().id))
        );
    }

    #[test]
    fn test_rejects_missing_king() {
        let mut cells = board_to_cells(&Board::startpos());
        cells[7][4] = None;
        assert_eq!(
            board_from_cells(&cells, 32),
            Err(SnapshotError::KingCount {
                color: Color::White,
                count: 0
            })
        );
    }

    #[test]
    fn test_rejects_stale_counter() {
        let cells = board_to_cells(&Board::startpos());
        assert_eq!(
            board_from_cells(&cells, 31),
            Err(SnapshotError::StaleIdCounter {
                next_id: 31,
                max_id: 31
            })
        );
    }

    #[test]
    fn test_rejects_exhausted_counter() {
        let cells = board_to_cells(&Board::startpos());
        assert_eq!(
            board_from_cells(&cells, u16::MAX),
            Err(SnapshotError::IdCounterExhausted { next_id: u16::MAX })
        );
        assert!(board_from_cells(&cells, MAX_NEXT_ID).is_ok());
    }
}
