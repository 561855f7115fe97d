//! 棋子（记号）定义

use serde::{Deserialize, Serialize};

/// 落子记号
///
/// 格子的三种取值为 `Some(Mark::X)`、`Some(Mark::O)` 和 `None`（空格）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// 先手
    X,
    /// 后手
    O,
}

impl Mark {
    /// 获取对方记号
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
