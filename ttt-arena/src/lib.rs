//! 井字棋 AI 对战
//!
//! 包含:
//! - 对战配置
//! - 对局控制与结果统计

pub mod arena;
pub mod config;

pub use arena::{play_game, run_arena, ArenaSummary};
pub use config::ArenaConfig;
