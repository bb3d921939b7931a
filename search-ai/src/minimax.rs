//! 对抗搜索
//!
//! 实现深度受限的 Minimax + Alpha-Beta 剪枝。每层复制局面后再走子，不做撤销。

use state_space::{GameState, Player};
use tracing::{debug, trace};

use crate::config::{Pruning, MAX_DEPTH};
use crate::error::{Result, SearchError};
use crate::score::{plies_to_win, terminal_score};

/// 搜索窗口上下界
const INF: i32 = i32::MAX;

/// Minimax 搜索器
pub struct MinimaxSearch {
    pruning: Pruning,
    nodes_searched: u64,
    cutoffs: u64,
}

impl MinimaxSearch {
    pub fn new(pruning: Pruning) -> Self {
        Self {
            pruning,
            nodes_searched: 0,
            cutoffs: 0,
        }
    }

    /// 搜索 `player` 的最佳走法
    ///
    /// 根节点为 `player` 的极大层，子节点深度为 1。分数相同时取走法生成顺序中的第一个。
    pub fn best_move<G: GameState>(
        &mut self,
        state: &G,
        player: Player,
        max_depth: u8,
    ) -> Result<G::Move> {
        check_depth(max_depth)?;
        self.reset();

        if state.terminal_value().is_some() {
            return Err(SearchError::NoLegalMove);
        }
        if state.to_move() != player {
            return Err(SearchError::NotPlayersTurn { player });
        }

        let moves = state.legal_moves();
        let mut best: Option<(G::Move, i32)> = None;
        let mut alpha = -INF;

        for mv in moves {
            let child = state.apply(mv)?;
            let score = self.value(&child, player, 1, max_depth, alpha, INF, false)?;
            trace!("Root move {:?}: score {}", mv, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if self.pruning == Pruning::AlphaBeta {
                alpha = alpha.max(score);
            }
        }

        let (mv, score) = best.ok_or(SearchError::NoLegalMove)?;
        match plies_to_win(score) {
            Some(plies) => debug!(
                "Best move {:?}: forced result in {} plies, nodes={}, cutoffs={}",
                mv, plies, self.nodes_searched, self.cutoffs
            ),
            None => debug!(
                "Best move {:?}: score {}, nodes={}, cutoffs={}",
                mv, score, self.nodes_searched, self.cutoffs
            ),
        }
        Ok(mv)
    }

    /// 局面本身的 Minimax 值（`player` 视角，完整窗口）
    ///
    /// `state` 位于深度 0；轮到 `player` 走时为极大层。
    pub fn position_value<G: GameState>(
        &mut self,
        state: &G,
        player: Player,
        max_depth: u8,
    ) -> Result<i32> {
        check_depth(max_depth)?;
        self.reset();
        let maximizing = state.to_move() == player;
        self.value(state, player, 0, max_depth, -INF, INF, maximizing)
    }

    #[allow(clippy::too_many_arguments)]
    fn value<G: GameState>(
        &mut self,
        state: &G,
        player: Player,
        depth: u8,
        max_depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32> {
        self.nodes_searched += 1;

        if let Some(outcome) = state.terminal_value() {
            return Ok(terminal_score(outcome, player, depth as u32));
        }
        if depth >= max_depth {
            return Ok(state.evaluate(player));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(state.evaluate(player));
        }

        if maximizing {
            let mut best = -INF;
            for mv in moves {
                let child = state.apply(mv)?;
                let score = self.value(&child, player, depth + 1, max_depth, alpha, beta, false)?;
                best = best.max(score);
                alpha = alpha.max(best);
                if self.should_prune(alpha, beta) {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = INF;
            for mv in moves {
                let child = state.apply(mv)?;
                let score = self.value(&child, player, depth + 1, max_depth, alpha, beta, true)?;
                best = best.min(score);
                beta = beta.min(best);
                if self.should_prune(alpha, beta) {
                    break;
                }
            }
            Ok(best)
        }
    }

    fn should_prune(&mut self, alpha: i32, beta: i32) -> bool {
        if self.pruning == Pruning::AlphaBeta && beta <= alpha {
            self.cutoffs += 1;
            return true;
        }
        false
    }

    fn reset(&mut self) {
        self.nodes_searched = 0;
        self.cutoffs = 0;
    }

    /// 最近一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 最近一次搜索的剪枝次数
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(Pruning::AlphaBeta)
    }
}

fn check_depth(max_depth: u8) -> Result<()> {
    if max_depth == 0 || max_depth > MAX_DEPTH {
        return Err(SearchError::InvalidDepth {
            depth: max_depth,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::WIN_SCORE;
    use state_space::{SearchState, Square, TicTacToe};

    fn board(s: &str) -> TicTacToe {
        s.parse().unwrap()
    }

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        // X 在第一行已有两子
        let state = board("XX. OO. ...");
        let mut engine = MinimaxSearch::default();
        let mv = engine.best_move(&state, Player::X, 9).unwrap();
        assert_eq!(mv, sq(0, 2));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // O 走：X 下一步可在 (0, 2) 连成一线
        let state = board("XX. O.. ...");
        let mut engine = MinimaxSearch::default();
        let mv = engine.best_move(&state, Player::O, 9).unwrap();
        assert_eq!(mv, sq(0, 2));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X 可以立即在 (0, 2) 获胜，也能在 (2, 2) 之后获胜
        let state = board("XX. OO. ...");
        let mut engine = MinimaxSearch::default();
        let value = engine.position_value(&state, Player::X, 9).unwrap();
        assert_eq!(value, WIN_SCORE - 1);
    }

    #[test]
    fn test_depth_one_uses_evaluation() {
        let state = TicTacToe::new();
        let mut engine = MinimaxSearch::default();
        // 深度 1 时只看一步后的开放线差：中心最好
        let mv = engine.best_move(&state, Player::X, 1).unwrap();
        assert_eq!(mv, sq(1, 1));
    }

    #[test]
    fn test_ties_keep_first_move() {
        let mut engine = MinimaxSearch::default();
        // 空棋盘上九个走法都是和棋
        let mv = engine.best_move(&TicTacToe::new(), Player::X, 9).unwrap();
        assert_eq!(mv, sq(0, 0));

        let mut full = MinimaxSearch::new(Pruning::None);
        assert_eq!(full.best_move(&TicTacToe::new(), Player::X, 9).unwrap(), sq(0, 0));
    }

    #[test]
    fn test_ties_at_depth_one() {
        // 四个角评估相同，应取下标最小的 (0, 0)
        let state = board("... .X. ...").apply(sq(0, 1)).unwrap();
        assert_eq!(state.to_move(), Player::X);
        let mut engine = MinimaxSearch::default();
        let mv = engine.best_move(&state, Player::X, 1).unwrap();
        assert_eq!(mv, sq(0, 0));
    }

    #[test]
    fn test_errors() {
        let mut engine = MinimaxSearch::default();
        let state = TicTacToe::new();

        assert_eq!(
            engine.best_move(&state, Player::X, 0),
            Err(SearchError::InvalidDepth { depth: 0, max: MAX_DEPTH })
        );
        assert_eq!(
            engine.best_move(&state, Player::O, 3),
            Err(SearchError::NotPlayersTurn { player: Player::O })
        );

        let finished = board("XXX OO. ...");
        assert_eq!(
            engine.best_move(&finished, Player::O, 3),
            Err(SearchError::NoLegalMove)
        );

        let draw = board("XOX XXO OXO");
        assert_eq!(
            engine.best_move(&draw, Player::X, 3),
            Err(SearchError::NoLegalMove)
        );
    }

    #[test]
    fn test_deterministic() {
        let state = board("X.. .O. ...");
        let mut engine = MinimaxSearch::default();
        let first = engine.best_move(&state, Player::X, 9).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.best_move(&state, Player::X, 9).unwrap(), first);
        }
    }

    #[test]
    fn test_pruning_searches_fewer_nodes() {
        let state = TicTacToe::new();

        let mut pruned = MinimaxSearch::new(Pruning::AlphaBeta);
        let pruned_move = pruned.best_move(&state, Player::X, 9).unwrap();

        let mut full = MinimaxSearch::new(Pruning::None);
        let full_move = full.best_move(&state, Player::X, 9).unwrap();

        assert_eq!(pruned_move, full_move);
        assert_eq!(full.cutoffs(), 0);
        assert!(pruned.cutoffs() > 0);
        assert!(
            pruned.nodes_searched() < full.nodes_searched(),
            "剪枝后节点数应更少: {} vs {}",
            pruned.nodes_searched(),
            full.nodes_searched()
        );
    }

    #[test]
    fn test_empty_board_is_draw() {
        let mut engine = MinimaxSearch::default();
        let value = engine.position_value(&TicTacToe::new(), Player::X, 9).unwrap();
        assert_eq!(value, 0);
    }
}
