//! 叶子节点评估

use ttt_core::{Board, Mark};

/// 叶子节点的符号
///
/// 轮到 M 走的叶子意味着上一步是对方走的。极大节点的走子方就是根走子方，
/// 所以上一步的连线属于对手，分值取反；极小节点上一步是根走子方自己走的，保持原号。
/// 符号只取决于节点类型，与轮到哪个记号无关
pub const fn leaf_sign(is_maximizing: bool) -> i32 {
    if is_maximizing {
        -1
    } else {
        1
    }
}

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估叶子节点（根走子方视角，正值对根走子方有利）
    ///
    /// `to_move` 是该节点轮到走的一方。未终局的叶子返回 None
    pub fn leaf_value(board: &Board, to_move: Mark, is_maximizing: bool) -> Option<i32> {
        board
            .evaluate(to_move.opponent())
            .map(|score| score * leaf_sign(is_maximizing))
    }
}
