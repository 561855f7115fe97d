//! 对战配置
//!
//! JSON 格式，缺省字段取默认值

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use ttt_ai::{AiConfig, Difficulty};

/// 对战配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// 对局数
    pub games: usize,
    /// 同时进行的最大对局数
    pub concurrency: usize,
    /// X 方（先手）AI
    pub x_player: AiConfig,
    /// O 方（后手）AI
    pub o_player: AiConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            concurrency: 4,
            x_player: AiConfig::from_difficulty(Difficulty::Hard),
            o_player: AiConfig::from_difficulty(Difficulty::Easy),
        }
    }
}

impl ArenaConfig {
    /// 从文件加载配置，未指定文件时使用默认配置
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("未指定配置文件，使用默认配置");
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))?;

        info!(?path, games = config.games, "已加载配置文件");
        Ok(config)
    }
}
