//! 搜索引擎
//!
//! 实现随机走法和穷举 Minimax（可选 Alpha-Beta 剪枝）

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use ttt_core::{Board, GameError, Mark, Move, Result, FULL_DEPTH};

use crate::evaluate::Evaluator;

/// 搜索边界值
const INFINITY: i32 = 1_000_000;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：总是随机落子
    Easy,
    /// 中等：完整搜索，但有一定概率随机落子
    Medium,
    /// 困难：完整搜索
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 搜索深度（层数），不小于 `FULL_DEPTH` 时保证搜到终局
    pub max_depth: u8,
    /// Medium 难度下随机落子的概率
    pub blunder_rate: f32,
    /// 是否启用 Alpha-Beta 剪枝（结果与穷举一致）
    pub alpha_beta: bool,
    /// 随机数种子，None 时使用系统熵
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// 指定随机数种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            max_depth: FULL_DEPTH,
            blunder_rate: 0.3,
            alpha_beta: false,
            seed: None,
        }
    }
}

/// 搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 最佳走法
    pub best_move: Move,
    /// 最佳走法的分值（根走子方视角）
    pub score: i32,
    /// 搜索的节点数
    pub nodes_searched: u64,
    /// 深度耗尽时仍未终局的叶子数，完整深度下为 0
    pub unresolved_leaves: u64,
}

/// AI 引擎
///
/// 搜索期间独占借用棋盘，逐步落子和撤销，返回时棋盘与调用前一致。
/// 多局并行时每局使用各自的棋盘和引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
    unresolved_leaves: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes_searched: 0,
            unresolved_leaves: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 当前配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 按难度为 mark 选择走法
    pub fn choose_move(&mut self, board: &mut Board, mark: Mark) -> Result<Move> {
        match self.config.difficulty {
            Difficulty::Easy => self.random_move(board, mark),
            Difficulty::Medium if self.rng.gen::<f32>() < self.config.blunder_rate => {
                self.random_move(board, mark)
            }
            Difficulty::Medium | Difficulty::Hard => {
                let depth = self.config.max_depth;
                self.minimax_move(board, mark, depth).map(|result| result.best_move)
            }
        }
    }

    /// 均匀随机选择一个合法走法，不修改棋盘
    pub fn random_move(&mut self, board: &Board, mark: Mark) -> Result<Move> {
        let moves = board.gen_valid_moves();
        let mv = *moves.choose(&mut self.rng).ok_or(GameError::NoLegalMoves)?;
        trace!(%mark, %mv, "random move");
        Ok(mv)
    }

    /// 搜索 mark 的最佳走法
    ///
    /// 按扫描顺序尝试每个合法走法，只在分值严格更大时更新，
    /// 分值相同取最先出现的走法。
    ///
    /// 根节点总会试走一步，`depth = 0` 与 `depth = 1` 等价
    pub fn minimax_move(
        &mut self,
        board: &mut Board,
        mark: Mark,
        depth: u8,
    ) -> Result<SearchResult> {
        self.nodes_searched = 0;
        self.unresolved_leaves = 0;

        let moves = board.gen_valid_moves();
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let child_depth = depth.saturating_sub(1);
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let best_score = best.map_or(-INFINITY, |(_, score)| score);
            let mut guard = board.scoped_move(mv, mark)?;
            let score = if self.config.alpha_beta {
                // 窗口下界取当前最佳分值：不超过它的走法返回的上界不会被选中
                let alpha = best_score;
                self.alpha_beta(mark.opponent(), &mut guard, child_depth, alpha, INFINITY, false)?
            } else {
                self.minimax(mark.opponent(), &mut guard, child_depth, false)?
            };
            trace!(%mark, mv = %guard.mv(), score, "root move scored");
            drop(guard);

            if score > best_score {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best.ok_or(GameError::NoLegalMoves)?;

        if self.unresolved_leaves > 0 {
            warn!(
                depth,
                unresolved = self.unresolved_leaves,
                "search depth exhausted before the game ended, unresolved leaves scored as 0"
            );
        }
        debug!(
            %mark,
            %best_move,
            score,
            nodes = self.nodes_searched,
            "minimax search finished"
        );

        Ok(SearchResult {
            best_move,
            score,
            nodes_searched: self.nodes_searched,
            unresolved_leaves: self.unresolved_leaves,
        })
    }

    /// Minimax 递归，返回根走子方视角的分值
    ///
    /// `mark` 为当前节点轮到走的一方
    pub fn minimax(
        &mut self,
        mark: Mark,
        board: &mut Board,
        depth: u8,
        is_maximizing: bool,
    ) -> Result<i32> {
        self.nodes_searched += 1;

        if depth == 0 || board.is_terminal_node() {
            return Ok(self.leaf(board, mark, is_maximizing));
        }

        let mut best_score = if is_maximizing { -INFINITY } else { INFINITY };
        for mv in board.gen_valid_moves() {
            let mut guard = board.scoped_move(mv, mark)?;
            let score = self.minimax(mark.opponent(), &mut guard, depth - 1, !is_maximizing)?;
            drop(guard);

            if is_maximizing {
                if score > best_score {
                    best_score = score;
                }
            } else if score < best_score {
                best_score = score;
            }
        }

        Ok(best_score)
    }

    /// Alpha-Beta 搜索（fail-soft）
    ///
    /// 窗口内的分值与 `minimax` 完全相同。
    /// 不超过 alpha 时返回上界，不低于 beta 时返回下界
    fn alpha_beta(
        &mut self,
        mark: Mark,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        is_maximizing: bool,
    ) -> Result<i32> {
        self.nodes_searched += 1;

        if depth == 0 || board.is_terminal_node() {
            return Ok(self.leaf(board, mark, is_maximizing));
        }

        let mut best_score = if is_maximizing { -INFINITY } else { INFINITY };
        for mv in board.gen_valid_moves() {
            let mut guard = board.scoped_move(mv, mark)?;
            let score = self.alpha_beta(
                mark.opponent(),
                &mut guard,
                depth - 1,
                alpha,
                beta,
                !is_maximizing,
            )?;
            drop(guard);

            if is_maximizing {
                if score > best_score {
                    best_score = score;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                break; // 剪枝
            }
        }

        Ok(best_score)
    }

    /// 叶子节点分值，未终局的叶子计 0 并记录
    fn leaf(&mut self, board: &Board, mark: Mark, is_maximizing: bool) -> i32 {
        match Evaluator::leaf_value(board, mark, is_maximizing) {
            Some(score) => score,
            None => {
                self.unresolved_leaves += 1;
                0
            }
        }
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
