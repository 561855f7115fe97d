//! 走法

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_COLS, BOARD_ROWS, NUM_SQUARES};

/// 走法：在 (row, col) 处落子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Move {
    /// 创建新走法，越界时返回 None
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_ROWS && (col as usize) < BOARD_COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新走法（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_ROWS && (self.col as usize) < BOARD_COLS
    }

    /// 转换为数组索引（行优先）
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_COLS + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Self {
                row: (index / BOARD_COLS) as u8,
                col: (index % BOARD_COLS) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
