//! 状态抽象
//!
//! 两个搜索引擎共用的状态接口：
//! - [`SearchState`]：不可变局面 + 有序的合法走法
//! - [`PuzzleState`]：最佳优先搜索所需的目标判定与启发函数
//! - [`GameState`]：对抗搜索所需的终局判定与静态评估

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 可搜索的局面
///
/// 相等与哈希必须是结构化的：两个布局相同的局面在去重时可以互换。
pub trait SearchState: Clone + Eq + Hash + Debug {
    /// 走法类型
    type Move: Copy + Eq + Debug;

    /// 当前局面下的所有合法走法，同一局面每次调用顺序相同
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// 执行走法，返回新局面，不修改 `self`
    ///
    /// 走法不合法时返回 [`RuleError::InvalidMove`](crate::RuleError::InvalidMove)。
    fn apply(&self, mv: Self::Move) -> Result<Self>;
}

/// 单人求解问题的局面
pub trait PuzzleState: SearchState {
    /// 是否已到达目标
    fn is_goal(&self, goal: &Self) -> bool {
        self == goal
    }

    /// 到目标的剩余代价估计，必须可采纳（不高估）
    fn heuristic(&self, goal: &Self) -> u32;
}

/// 双人零和博弈的局面
pub trait GameState: SearchState {
    /// 当前走子方
    fn to_move(&self) -> Player;

    /// 终局结果，未结束时为 `None`
    fn terminal_value(&self) -> Option<Outcome>;

    /// 静态评估，对 `player` 越有利分值越大
    fn evaluate(&self, player: Player) -> i32;
}

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手
    X,
    /// 后手
    O,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 棋盘字符
    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// 从棋盘字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'x' | 'X' => Some(Player::X),
            'o' | 'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 某方获胜
    Win(Player),
    /// 和棋
    Draw,
}

impl Outcome {
    /// 获胜方，和棋时为 `None`
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_char() {
        assert_eq!(Player::from_char('x'), Some(Player::X));
        assert_eq!(Player::from_char('O'), Some(Player::O));
        assert_eq!(Player::from_char('.'), None);
        assert_eq!(Player::X.to_char(), 'X');
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Win(Player::X).to_string(), "X wins");
    }
}
