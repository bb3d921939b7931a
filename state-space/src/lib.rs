//! 状态空间共享定义
//!
//! 包含:
//! - 状态抽象 (SearchState, PuzzleState, GameState traits)
//! - 玩家与对局结果 (Player, Outcome)
//! - 8 数码棋盘 (PuzzleBoard, Slide)
//! - 井字棋棋盘 (TicTacToe, Square)
//! - 规则错误 (RuleError)

mod constants;
mod error;
mod puzzle;
mod state;
mod tictactoe;

pub use constants::*;
pub use error::{Result, RuleError};
pub use puzzle::{PuzzleBoard, Slide};
pub use state::{GameState, Outcome, Player, PuzzleState, SearchState};
pub use tictactoe::{Square, TicTacToe};
