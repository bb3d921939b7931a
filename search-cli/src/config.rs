//! 演示程序配置
//!
//! 从 JSON 文件读取；未给出文件时使用默认值。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use search_ai::{AiConfig, Difficulty, Pruning};
use serde::{Deserialize, Serialize};
use state_space::{PuzzleBoard, TicTacToe};

/// 演示程序配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub puzzle: PuzzleSettings,
    pub game: GameSettings,
}

/// 8 数码求解设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleSettings {
    pub initial: PuzzleBoard,
    pub goal: PuzzleBoard,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            initial: PuzzleBoard::new([1, 3, 2, 4, 6, 5, 0, 7, 8]).unwrap_or_default(),
            goal: PuzzleBoard::goal(),
        }
    }
}

/// 井字棋自对弈设置，未填写的项取难度预设
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub max_depth: Option<u8>,
    pub pruning: Option<Pruning>,
    pub seed: Option<u64>,
    /// 起始局面，九个格子，`.` 为空
    pub start: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            max_depth: None,
            pruning: None,
            seed: None,
            start: TicTacToe::new().to_string(),
        }
    }
}

impl GameSettings {
    pub fn ai_config(&self) -> AiConfig {
        let preset = AiConfig::from_difficulty(self.difficulty);
        AiConfig {
            max_depth: self.max_depth.unwrap_or(preset.max_depth),
            pruning: self.pruning.unwrap_or(preset.pruning),
            seed: self.seed.unwrap_or(preset.seed),
            ..preset
        }
    }

    pub fn start_board(&self) -> Result<TicTacToe> {
        self.start
            .parse()
            .with_context(|| format!("无效的起始局面: {:?}", self.start))
    }
}

impl CliConfig {
    /// 加载配置
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))
    }
}
