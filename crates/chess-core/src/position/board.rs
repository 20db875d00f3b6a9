use crate::error::RuleError;
use crate::types::{Color, Move, Occupant, Piece, PieceId, PieceKind, Square};

/// 指し手を反映した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveEffects {
    /// 取られた駒（アンパッサンでは移動先とは別の升から取り除かれる）
    pub captured: Occupant,
    /// 昇格で生まれた駒
    pub promoted: Option<Piece>,
}

/// 8x8 の盤面
///
/// 駒は `Copy` な値として升に直接保持し、盤外から参照されることはない。
/// `next_id` は盤上のどの識別子よりも大きい値を保つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Occupant; Square::NUM],
    next_id: u16,
}

/// 識別子カウンタが取り得る最大値
///
/// 盤上の駒は64枚以下で、昇格のたびにポーンが1枚減るため、どの局面からでも
/// 以降の割り当ては64回に収まる。
pub const MAX_NEXT_ID: u16 = u16::MAX - Square::NUM as u16;

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

impl Board {
    /// 空の盤面
    pub fn empty() -> Board {
        Board {
            squares: [None; Square::NUM],
            next_id: 0,
        }
    }

    /// 平手初期局面（黒が0-1行目、白が6-7行目）
    pub fn startpos() -> Board {
        let mut board = Board::empty();
        for color in [Color::Black, Color::White] {
            let back = color.back_rank();
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                board.place(Square::new(back, col as u8), color, kind);
            }
            let pawns = color.pawn_rank();
            for col in 0..8 {
                board.place(Square::new(pawns, col), color, PieceKind::Pawn);
            }
        }
        board
    }

    /// 行・列が盤内かどうか
    #[inline]
    pub const fn in_bounds(row: i32, col: i32) -> bool {
        crate::types::in_bounds(row, col)
    }

    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Occupant {
        self.squares[sq.index()]
    }

    /// 符号付き座標での参照。盤外は `OutOfRange`。
    pub fn occupant_at_coords(&self, row: i32, col: i32) -> Result<Occupant, RuleError> {
        Square::try_new(row, col).map(|sq| self.occupant_at(sq))
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// 次に割り当てる識別子
    #[inline]
    pub fn next_id(&self) -> u16 {
        self.next_id
    }

    /// 識別子カウンタを書き戻す（局面の巻き戻し・復元用）
    #[inline]
    pub(crate) fn set_next_id(&mut self, next_id: u16) {
        self.next_id = next_id;
    }

    fn allocate_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// 新しい識別子で駒を置く（既存の駒は上書き）
    pub fn place(&mut self, sq: Square, color: Color, kind: PieceKind) -> PieceId {
        let id = self.allocate_id();
        self.squares[sq.index()] = Some(Piece::new(color, kind, id));
        id
    }

    /// 升の内容をそのまま書き込む
    ///
    /// 識別子の一意性は呼び出し側の責任。`next_id` は置いた駒より大きくなるよう繰り上げる。
    pub fn put(&mut self, sq: Square, occupant: Occupant) {
        if let Some(piece) = occupant {
            self.next_id = self.next_id.max(piece.id.0.saturating_add(1));
        }
        self.squares[sq.index()] = occupant;
    }

    /// 升の駒を取り除いて返す
    #[inline]
    pub fn take(&mut self, sq: Square) -> Occupant {
        self.squares[sq.index()].take()
    }

    /// 無条件に駒を移動し、その駒の `times_moved` を1増やす
    ///
    /// 合法性は一切確認しない。移動先にあった駒を返す。
    /// 移動元が空なら何もせず None を返す。
    pub fn move_piece(&mut self, from: Square, to: Square) -> Occupant {
        let Some(mut piece) = self.take(from) else {
            return None;
        };
        piece.times_moved = piece.times_moved.saturating_add(1);
        self.squares[to.index()].replace(piece)
    }

    /// ポーンを別の駒種に置き換える
    ///
    /// 色と `times_moved` を引き継ぎ、識別子は新しく割り当てる。
    /// 空き升なら何もしない。
    pub fn promote(&mut self, sq: Square, kind: PieceKind) -> Option<Piece> {
        let old = self.occupant_at(sq)?;
        let id = self.allocate_id();
        let piece = Piece {
            color: old.color,
            kind,
            id,
            times_moved: old.times_moved,
        };
        self.squares[sq.index()] = Some(piece);
        Some(piece)
    }

    /// 判定済みの指し手を盤面に反映する
    pub fn apply(&mut self, mv: &Move) -> MoveEffects {
        match *mv {
            Move::Normal { from, to } => MoveEffects {
                captured: self.move_piece(from, to),
                promoted: None,
            },
            Move::Castle {
                king_from,
                king_to,
                rook_from,
                rook_to,
            } => {
                self.move_piece(king_from, king_to);
                self.move_piece(rook_from, rook_to);
                MoveEffects::default()
            }
            Move::EnPassant { from, to, captured } => {
                self.move_piece(from, to);
                MoveEffects {
                    captured: self.take(captured),
                    promoted: None,
                }
            }
            Move::Promotion { from, to, kind } => {
                let captured = self.move_piece(from, to);
                MoveEffects {
                    captured,
                    promoted: self.promote(to, kind.kind()),
                }
            }
        }
    }

    /// 指定色のキングの升（線形走査）
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// 指定色の駒を升順に列挙
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.occupant_at(sq) {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    /// 識別子で駒を探す
    pub fn locate(&self, id: PieceId) -> Option<(Square, Piece)> {
        Square::all().find_map(|sq| match self.occupant_at(sq) {
            Some(p) if p.id == id => Some((sq, p)),
            _ => None,
        })
    }

    /// 指定色・駒種の枚数（情報表示用）
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color).filter(|(_, p)| p.kind == kind).count()
    }

    /// 行ごとの占有状態（描画・保存用）
    pub fn rows(&self) -> impl Iterator<Item = &[Occupant]> + '_ {
        self.squares.chunks(8)
    }
}
