//! AI 引擎
//!
//! 在 [`MinimaxSearch`] 之上加入难度配置：简单难度按概率随机走子，
//! 随机数由配置中的种子生成，结果可复现。

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use state_space::{GameState, Outcome, SearchState};
use tracing::{info, warn};

use crate::config::{AiConfig, Difficulty};
use crate::error::Result;
use crate::minimax::MinimaxSearch;

/// 一局对弈的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord<G: SearchState> {
    pub moves: Vec<G::Move>,
    pub final_state: G,
    /// 因步数上限中止时为 `None`
    pub outcome: Option<Outcome>,
}

/// AI 引擎
pub struct GameAi {
    config: AiConfig,
    search: MinimaxSearch,
    rng: ChaCha8Rng,
}

impl GameAi {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            search: MinimaxSearch::new(config.pruning),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        })
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let config = AiConfig::from_difficulty(difficulty);
        Self {
            search: MinimaxSearch::new(config.pruning),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为当前走子方选择走法
    pub fn choose_move<G: GameState>(&mut self, state: &G) -> Result<G::Move> {
        // 只有简单难度会随机走子
        if self.config.difficulty == Difficulty::Easy
            && self.config.blunder_rate > 0.0
            && state.terminal_value().is_none()
            && self.rng.gen_bool(self.config.blunder_rate)
        {
            let moves = state.legal_moves();
            if let Some(&mv) = moves.choose(&mut self.rng) {
                warn!("Playing random move {:?} ({:?} difficulty)", mv, self.config.difficulty);
                return Ok(mv);
            }
        }

        self.search
            .best_move(state, state.to_move(), self.config.max_depth)
    }

    /// 双方都由本引擎走子，直到终局或走满 `max_plies` 步
    pub fn self_play<G: GameState>(&mut self, start: &G, max_plies: usize) -> Result<GameRecord<G>> {
        let mut state = start.clone();
        let mut moves = Vec::new();

        while state.terminal_value().is_none() && moves.len() < max_plies {
            let mv = self.choose_move(&state)?;
            state = state.apply(mv)?;
            moves.push(mv);
        }

        let outcome = state.terminal_value();
        match outcome {
            Some(outcome) => info!("Self-play finished after {} plies: {}", moves.len(), outcome),
            None => info!("Self-play stopped at ply limit {}", max_plies),
        }

        Ok(GameRecord {
            moves,
            final_state: state,
            outcome,
        })
    }

    /// 最近一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.search.nodes_searched()
    }
}
