//! AI 配置

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// 允许的最大搜索深度
pub const MAX_DEPTH: u8 = 64;

/// 随机走子的默认种子
const DEFAULT_SEED: u64 = 0xDEADBEEF_CAFE_1234;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：depth=2，30% 概率随机走子
    Easy,
    /// 中等：depth=4
    Medium,
    /// 困难：depth=9（井字棋可搜到底）
    Hard,
}

/// 剪枝策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pruning {
    /// Alpha-Beta 剪枝
    #[default]
    AlphaBeta,
    /// 完整 Minimax，不剪枝
    None,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
    pub pruning: Pruning,
    /// 随机走子概率 [0, 1]
    pub blunder_rate: f64,
    pub seed: u64,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                max_depth: 2,
                pruning: Pruning::AlphaBeta,
                blunder_rate: 0.3,
                seed: DEFAULT_SEED,
            },
            Difficulty::Medium => Self {
                difficulty,
                max_depth: 4,
                pruning: Pruning::AlphaBeta,
                blunder_rate: 0.0,
                seed: DEFAULT_SEED,
            },
            Difficulty::Hard => Self {
                difficulty,
                max_depth: 9,
                pruning: Pruning::AlphaBeta,
                blunder_rate: 0.0,
                seed: DEFAULT_SEED,
            },
        }
    }

    /// 检查配置是否合法
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH {
            return Err(SearchError::InvalidDepth {
                depth: self.max_depth,
                max: MAX_DEPTH,
            });
        }
        if !(0.0..=1.0).contains(&self.blunder_rate) {
            return Err(SearchError::InvalidConfig {
                reason: format!("blunder_rate {} outside [0, 1]", self.blunder_rate),
            });
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}
