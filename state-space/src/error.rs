//! 错误类型定义

use thiserror::Error;

/// 状态规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// 当前局面下不合法的走法
    #[error("Invalid move {mv}: {reason}")]
    InvalidMove { mv: String, reason: String },

    /// 棋盘格子数不对
    #[error("Invalid board length: expected {expected} cells, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// 无法识别的格子内容
    #[error("Invalid cell {token:?} at index {index}")]
    InvalidCell { index: usize, token: String },

    /// 格子下标越界
    #[error("Square index {index} out of range 0..{max}")]
    InvalidSquare { index: usize, max: usize },

    /// 格子内容合法但整体局面不成立
    #[error("Invalid board: {reason}")]
    InvalidBoard { reason: String },
}

impl RuleError {
    pub(crate) fn invalid_move(mv: impl std::fmt::Display, reason: &str) -> Self {
        RuleError::InvalidMove {
            mv: mv.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, RuleError>;
