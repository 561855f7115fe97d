//! 规则常量定义

/// 棋盘行数
pub const BOARD_ROWS: usize = 3;

/// 棋盘列数
pub const BOARD_COLS: usize = 3;

/// 格子总数
pub const NUM_SQUARES: usize = BOARD_ROWS * BOARD_COLS;

/// 一方连成一线时的评估分值
pub const WIN_SCORE: i32 = 10;

/// 完整对局的最大步数，搜索深度不小于此值时不会在未终局处截断
pub const FULL_DEPTH: u8 = NUM_SQUARES as u8;

/// 全部 8 条获胜线（行、列、主对角线、副对角线），元素为格子索引
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
