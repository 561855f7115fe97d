//! 井字棋 AI 引擎
//!
//! 包含:
//! - 叶子节点评估（符号翻转）
//! - 随机走法
//! - 穷举 Minimax，可选 Alpha-Beta 剪枝

mod evaluate;
mod search;

pub use evaluate::{leaf_sign, Evaluator};
pub use search::{AiConfig, AiEngine, Difficulty, SearchResult};
