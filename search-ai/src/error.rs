//! 错误类型定义

use state_space::{Player, RuleError};
use thiserror::Error;

/// 搜索错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// 局面已终结或无子可走
    #[error("No legal move available")]
    NoLegalMove,

    /// 搜索深度必须至少为 1
    #[error("Invalid search depth: {depth} (must be between 1 and {max})")]
    InvalidDepth { depth: u8, max: u8 },

    /// 请求的玩家不是当前走子方
    #[error("Not {player}'s turn")]
    NotPlayersTurn { player: Player },

    /// 配置不合法
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// 规则错误
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

/// 搜索操作结果类型
pub type Result<T> = std::result::Result<T, SearchError>;
