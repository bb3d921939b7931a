//! 终局计分

use state_space::{Outcome, Player};

use crate::config::MAX_DEPTH;

/// 终局基础分，大于任何可达深度和任何静态评估值
pub const WIN_SCORE: i32 = 10_000;

/// 终局分值（`player` 视角）
///
/// 胜局为 `WIN_SCORE - depth`，负局取负，和棋为 0。越快的胜利分越高，越慢的失败分越高。
pub fn terminal_score(outcome: Outcome, player: Player, depth: u32) -> i32 {
    match outcome {
        Outcome::Win(winner) if winner == player => WIN_SCORE - depth as i32,
        Outcome::Win(_) => -(WIN_SCORE - depth as i32),
        Outcome::Draw => 0,
    }
}

/// 若分值来自终局，返回距终局的步数（正数为胜，负数为负）
pub fn plies_to_win(score: i32) -> Option<i32> {
    let threshold = WIN_SCORE - MAX_DEPTH as i32;
    if score >= threshold {
        Some(WIN_SCORE - score)
    } else if score <= -threshold {
        Some(-(WIN_SCORE + score))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_score() {
        assert_eq!(terminal_score(Outcome::Win(Player::X), Player::X, 3), WIN_SCORE - 3);
        assert_eq!(terminal_score(Outcome::Win(Player::O), Player::X, 3), -(WIN_SCORE - 3));
        assert_eq!(terminal_score(Outcome::Draw, Player::O, 5), 0);
    }

    #[test]
    fn test_faster_win_scores_higher() {
        let fast = terminal_score(Outcome::Win(Player::X), Player::X, 1);
        let slow = terminal_score(Outcome::Win(Player::X), Player::X, 5);
        assert!(fast > slow);

        // 输棋时拖得越久越好
        let early_loss = terminal_score(Outcome::Win(Player::O), Player::X, 2);
        let late_loss = terminal_score(Outcome::Win(Player::O), Player::X, 6);
        assert!(late_loss > early_loss);
    }

    #[test]
    fn test_plies_to_win() {
        assert_eq!(plies_to_win(WIN_SCORE - 3), Some(3));
        assert_eq!(plies_to_win(-(WIN_SCORE - 4)), Some(-4));
        assert_eq!(plies_to_win(7), None);
        assert_eq!(plies_to_win(0), None);
    }
}
