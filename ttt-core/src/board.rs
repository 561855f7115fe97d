//! 棋盘状态

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_COLS, BOARD_ROWS, NUM_SQUARES, WIN_LINES, WIN_SCORE};
use crate::error::{GameError, Result};
use crate::mark::Mark;
use crate::moves::Move;

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 进行中
    InProgress,
    /// X 胜
    XWon,
    /// O 胜
    OWon,
    /// 和棋
    Draw,
}

impl Outcome {
    /// 是否已分出结果
    pub fn is_finished(&self) -> bool {
        *self != Outcome::InProgress
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// 棋盘
///
/// 3x3 格子，索引为 row * 3 + col。只负责规则，不关心轮到谁走
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Option<Mark>; NUM_SQUARES],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self::default()
    }

    /// 清空所有格子
    pub fn reset(&mut self) {
        self.squares = [None; NUM_SQUARES];
    }

    /// 获取 (row, col) 处的格子
    ///
    /// # Panics
    /// 越界访问直接 panic
    pub fn at(&self, row: u8, col: u8) -> Option<Mark> {
        self.squares[Self::index(row, col)]
    }

    /// 获取 (row, col) 处格子的可变引用
    ///
    /// # Panics
    /// 越界访问直接 panic
    pub fn at_mut(&mut self, row: u8, col: u8) -> &mut Option<Mark> {
        &mut self.squares[Self::index(row, col)]
    }

    /// 获取走法所在格子
    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.at(mv.row, mv.col)
    }

    fn index(row: u8, col: u8) -> usize {
        let mv = Move::new_unchecked(row, col);
        assert!(mv.is_valid(), "cell {mv} is outside the 3x3 board");
        mv.to_index()
    }

    /// 已落子的格子数
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    /// 生成所有合法走法（行优先扫描，(0, 0) 在前）
    pub fn gen_valid_moves(&self) -> Vec<Move> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_none())
            .filter_map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// 落子，目标格子必须为空
    pub fn make_move(&mut self, mv: Move, mark: Mark) -> Result<()> {
        let square = self.at_mut(mv.row, mv.col);
        if square.is_some() {
            return Err(GameError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        *square = Some(mark);
        Ok(())
    }

    /// 撤销落子，目标格子必须有子
    pub fn unmake_move(&mut self, mv: Move) -> Result<()> {
        let square = self.at_mut(mv.row, mv.col);
        if square.is_none() {
            return Err(GameError::CellEmpty {
                row: mv.row,
                col: mv.col,
            });
        }
        *square = None;
        Ok(())
    }

    /// 落子并返回守卫，守卫被 drop 时自动撤销该走法
    pub fn scoped_move(&mut self, mv: Move, mark: Mark) -> Result<MoveGuard<'_>> {
        self.make_move(mv, mark)?;
        Ok(MoveGuard { board: self, mv })
    }

    fn line_filled(&self, line: &[usize; 3], mark: Mark) -> bool {
        line.iter().all(|&index| self.squares[index] == Some(mark))
    }

    /// 第 row 行是否全为 mark
    pub fn check_row_win(&self, row: usize, mark: Mark) -> bool {
        self.line_filled(&WIN_LINES[row], mark)
    }

    /// 第 col 列是否全为 mark
    pub fn check_col_win(&self, col: usize, mark: Mark) -> bool {
        self.line_filled(&WIN_LINES[BOARD_ROWS + col], mark)
    }

    /// 主对角线 (0,0)-(1,1)-(2,2) 是否全为 mark
    pub fn check_main_diag_win(&self, mark: Mark) -> bool {
        self.line_filled(&WIN_LINES[6], mark)
    }

    /// 副对角线 (0,2)-(1,1)-(2,0) 是否全为 mark
    pub fn check_anti_diag_win(&self, mark: Mark) -> bool {
        self.line_filled(&WIN_LINES[7], mark)
    }

    /// mark 是否已连成一线
    pub fn check_win(&self, mark: Mark) -> bool {
        WIN_LINES.iter().any(|line| self.line_filled(line, mark))
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| s.is_some())
    }

    /// 是否和棋：棋盘已满且双方都没有连线
    pub fn check_draw(&self) -> bool {
        self.is_full() && !self.check_win(Mark::X) && !self.check_win(Mark::O)
    }

    /// 是否终局
    pub fn is_terminal_node(&self) -> bool {
        self.check_win(Mark::X) || self.check_win(Mark::O) || self.check_draw()
    }

    /// 从刚走完一步的一方视角评估局面
    ///
    /// 终局时返回 `Some`：己方连线 `WIN_SCORE`，对方连线 `-WIN_SCORE`，和棋 0。
    /// 未终局（搜索深度耗尽）时返回 `None`
    pub fn evaluate(&self, mark_just_moved: Mark) -> Option<i32> {
        if self.check_win(mark_just_moved) {
            Some(WIN_SCORE)
        } else if self.check_win(mark_just_moved.opponent()) {
            Some(-WIN_SCORE)
        } else if self.is_full() {
            Some(0)
        } else {
            None
        }
    }

    /// 当前对局结果
    pub fn outcome(&self) -> Outcome {
        if self.check_win(Mark::X) {
            Outcome::XWon
        } else if self.check_win(Mark::O) {
            Outcome::OWon
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(BOARD_COLS).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.map_or('_', |mark| mark.to_char()))?;
            }
        }
        Ok(())
    }
}

/// 临时落子守卫
///
/// 持有棋盘的独占借用，drop 时清空落子的格子，保证所有返回路径都能还原棋盘
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl MoveGuard<'_> {
    /// 守卫对应的走法
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        *self.board.at_mut(self.mv.row, self.mv.col) = None;
    }
}
