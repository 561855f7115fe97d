//! 对局状态（棋盘 + 走子方 + 玩家角色 + 结果）

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Outcome};
use crate::error::{GameError, Result};
use crate::mark::Mark;
use crate::moves::Move;

/// 玩家角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// 人类玩家
    Human,
    /// 电脑
    Computer,
}

/// 完整的对局状态
///
/// 结果会在每次通过本结构落子后重新计算。直接通过 `board_mut` 修改棋盘后
/// 需要调用 `refresh_outcome`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    side_to_move: Mark,
    x_player: PlayerKind,
    o_player: PlayerKind,
    outcome: Outcome,
    /// 已走步数
    ply: u32,
}

impl GameState {
    /// 创建新对局：X 为人类先手，O 为电脑
    pub fn new() -> Self {
        Self::with_players(PlayerKind::Human, PlayerKind::Computer)
    }

    /// 指定双方角色创建新对局
    pub fn with_players(x_player: PlayerKind, o_player: PlayerKind) -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Mark::X,
            x_player,
            o_player,
            outcome: Outcome::InProgress,
            ply: 0,
        }
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, side_to_move: Mark) -> Self {
        let mut state = Self::new();
        state.ply = board.occupied_count() as u32;
        state.outcome = board.outcome();
        state.board = board;
        state.side_to_move = side_to_move;
        state
    }

    /// 重新开局（保留玩家角色）
    pub fn reset(&mut self) {
        self.board.reset();
        self.side_to_move = Mark::X;
        self.outcome = Outcome::InProgress;
        self.ply = 0;
    }

    /// 当前走子方落子，然后切换走子方
    pub fn make_move(&mut self, mv: Move) -> Result<Outcome> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        self.board.make_move(mv, self.side_to_move)?;
        self.ply += 1;
        self.refresh_outcome();
        self.switch_side_to_move();

        if self.is_finished() {
            debug!(outcome = ?self.outcome, ply = self.ply, "game finished");
        }
        Ok(self.outcome)
    }

    /// 根据棋盘重新计算结果
    pub fn refresh_outcome(&mut self) {
        self.outcome = self.board.outcome();
    }

    /// 切换走子方
    pub fn switch_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// 当前走子方
    pub fn side_to_move(&self) -> Mark {
        self.side_to_move
    }

    /// 当前走子方要落下的记号
    ///
    /// 对局已结束时返回 None
    pub fn mark_to_move(&self) -> Option<Mark> {
        (!self.is_finished()).then_some(self.side_to_move)
    }

    /// 设置走子方
    pub fn set_side_to_move(&mut self, mark: Mark) {
        self.side_to_move = mark;
    }

    /// 获取指定记号的玩家角色
    pub fn player(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.x_player,
            Mark::O => self.o_player,
        }
    }

    /// 设置指定记号的玩家角色
    pub fn set_player(&mut self, mark: Mark, kind: PlayerKind) {
        match mark {
            Mark::X => self.x_player = kind,
            Mark::O => self.o_player = kind,
        }
    }

    /// 当前走子方的玩家角色
    pub fn player_to_move(&self) -> PlayerKind {
        self.player(self.side_to_move)
    }

    /// 对局是否结束
    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// 对局结果
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// 已走步数
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// 棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 棋盘（可变）
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// 结果文字
    pub fn outcome_text(&self) -> &'static str {
        match self.outcome {
            Outcome::InProgress => "Game in progress",
            Outcome::XWon => "X wins!",
            Outcome::OWon => "O wins!",
            Outcome::Draw => "Draw!",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Notation;

    fn mv(row: u8, col: u8) -> Move {
        Move::new_unchecked(row, col)
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.side_to_move(), Mark::X);
        assert_eq!(state.player_to_move(), PlayerKind::Human);
        assert_eq!(state.player(Mark::O), PlayerKind::Computer);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.outcome_text(), "Game in progress");
        assert_eq!(state.ply(), 0);
    }

    #[test]
    fn test_make_move_switches_side() {
        let mut state = GameState::new();
        state.make_move(mv(1, 1)).unwrap();

        assert_eq!(state.board().at(1, 1), Some(Mark::X));
        assert_eq!(state.side_to_move(), Mark::O);
        assert_eq!(state.player_to_move(), PlayerKind::Computer);
        assert_eq!(state.ply(), 1);
    }

    #[test]
    fn test_make_move_occupied_keeps_turn() {
        let mut state = GameState::new();
        state.make_move(mv(0, 0)).unwrap();

        let err = state.make_move(mv(0, 0)).unwrap_err();
        assert_eq!(err, GameError::CellOccupied { row: 0, col: 0 });
        assert_eq!(state.side_to_move(), Mark::O);
        assert_eq!(state.ply(), 1);
    }

    #[test]
    fn test_x_wins() {
        let mut state = GameState::new();
        for m in [mv(0, 0), mv(1, 0), mv(0, 1), mv(1, 1)] {
            assert_eq!(state.make_move(m).unwrap(), Outcome::InProgress);
        }
        assert_eq!(state.make_move(mv(0, 2)).unwrap(), Outcome::XWon);
        assert!(state.is_finished());
        assert_eq!(state.outcome_text(), "X wins!");

        assert_eq!(state.make_move(mv(2, 2)), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_and_reset() {
        let mut state = GameState::with_players(PlayerKind::Computer, PlayerKind::Computer);
        // X O X / X O O / O X X
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        for (row, col) in moves {
            let m = mv(row, col);
            state.make_move(m).unwrap();
        }
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.outcome_text(), "Draw!");

        state.reset();
        assert_eq!(state.board(), &Board::empty());
        assert_eq!(state.side_to_move(), Mark::X);
        assert!(!state.is_finished());
        assert_eq!(state.player(Mark::X), PlayerKind::Computer);
    }

    #[test]
    fn test_refresh_after_direct_mutation() {
        let mut state = Notation::parse("OO_/XX_/X__ o").unwrap();
        assert_eq!(state.ply(), 5);

        state.board_mut().make_move(mv(0, 2), Mark::O).unwrap();
        assert_eq!(state.outcome(), Outcome::InProgress);
        state.refresh_outcome();
        assert_eq!(state.outcome(), Outcome::OWon);
        assert_eq!(state.outcome_text(), "O wins!");
    }

    #[test]
    fn test_mark_to_move() {
        let mut state = GameState::new();
        assert_eq!(state.mark_to_move(), Some(Mark::X));
        state.make_move(mv(1, 1)).unwrap();
        assert_eq!(state.mark_to_move(), Some(Mark::O));

        let state = Notation::parse("XXX/OO_/___ o").unwrap();
        assert_eq!(state.side_to_move(), Mark::O);
        assert_eq!(state.mark_to_move(), None);
    }

    #[test]
    fn test_set_player() {
        let mut state = GameState::new();
        state.set_player(Mark::X, PlayerKind::Computer);
        state.set_side_to_move(Mark::O);
        assert_eq!(state.player(Mark::X), PlayerKind::Computer);
        assert_eq!(state.side_to_move(), Mark::O);
    }

    #[test]
    fn test_serde_round_trip() {
        let state = Notation::parse("X__/_O_/___").unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let decoded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }
}
