//! 对局控制
//!
//! 每局使用独立的对局状态和引擎，在阻塞线程池上运行

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{debug, info};
use ttt_ai::{AiConfig, AiEngine};
use ttt_core::{GameState, Mark, Outcome, PlayerKind};

use crate::config::ArenaConfig;

/// 对战统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl ArenaSummary {
    /// 记录一局结果
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWon => self.x_wins += 1,
            Outcome::OWon => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            // 对局总是下到终局
            Outcome::InProgress => return,
        }
        self.games += 1;
    }
}

/// 双方 AI 下完一整局
pub fn play_game(x_player: &AiConfig, o_player: &AiConfig) -> ttt_core::Result<GameState> {
    let mut state = GameState::with_players(PlayerKind::Computer, PlayerKind::Computer);
    let mut x_engine = AiEngine::new(x_player.clone());
    let mut o_engine = AiEngine::new(o_player.clone());

    while let Some(mark) = state.mark_to_move() {
        let engine = match mark {
            Mark::X => &mut x_engine,
            Mark::O => &mut o_engine,
        };
        let mv = engine.choose_move(state.board_mut(), mark)?;
        state.make_move(mv)?;
    }

    debug!(outcome = ?state.outcome(), ply = state.ply(), "\n{}", state.board());
    Ok(state)
}

/// 第 game 局使用的配置：有种子时每局偏移种子，避免各局完全相同
fn config_for_game(config: &AiConfig, game: usize) -> AiConfig {
    let mut config = config.clone();
    config.seed = config.seed.map(|seed| seed.wrapping_add(game as u64));
    config
}

/// 按配置进行全部对局
pub async fn run_arena(config: ArenaConfig) -> Result<ArenaSummary> {
    let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let mut handles = Vec::with_capacity(config.games);

    for game in 0..config.games {
        let permit = semaphore.clone().acquire_owned().await?;
        let x_player = config_for_game(&config.x_player, game);
        let o_player = config_for_game(&config.o_player, game);

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            play_game(&x_player, &o_player)
        }));
    }

    let mut summary = ArenaSummary::default();
    for handle in handles {
        let state = handle.await??;
        summary.record(state.outcome());
    }

    info!(
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "对战结束"
    );
    Ok(summary)
}
