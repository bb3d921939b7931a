//! 状态空间搜索引擎
//!
//! 包含:
//! - 最佳优先搜索（A*，open 表 + closed 表）
//! - Minimax + Alpha-Beta 剪枝
//! - 终局计分
//! - AI 配置与难度预设

mod best_first;
mod config;
mod engine;
mod error;
mod frontier;
mod minimax;
mod path;
mod score;

pub use best_first::{search, BestFirstSearch, SearchStats};
pub use config::{AiConfig, Difficulty, Pruning, MAX_DEPTH};
pub use engine::{GameAi, GameRecord};
pub use error::{Result, SearchError};
pub use frontier::Frontier;
pub use minimax::MinimaxSearch;
pub use path::{Path, PathStep};
pub use score::{plies_to_win, terminal_score, WIN_SCORE};
