//! 井字棋规则核心库
//!
//! 包含:
//! - 记号、走法、棋盘等核心数据结构
//! - 合法走法生成、胜负与和棋判定
//! - 对局状态（走子方、玩家角色、结果）
//! - 棋盘记号格式

mod board;
mod constants;
mod error;
mod mark;
mod moves;
mod notation;
mod state;

pub use board::{Board, MoveGuard, Outcome};
pub use constants::*;
pub use error::{GameError, Result};
pub use mark::Mark;
pub use moves::Move;
pub use notation::{Notation, EMPTY_NOTATION};
pub use state::{GameState, PlayerKind};
