//! 错误类型定义

use thiserror::Error;

/// 对局规则错误
///
/// 这些都是调用方违反前置条件造成的，返回错误时棋盘保持不变
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 目标格子已有棋子
    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    /// 撤销一个空格子上的走法
    #[error("Cell ({row}, {col}) is empty, nothing to unmake")]
    CellEmpty { row: u8, col: u8 },

    /// 没有可走的格子
    #[error("No legal moves available")]
    NoLegalMoves,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的棋盘记号
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
