//! 演示：求解 8 数码并进行井字棋自对弈

use anyhow::Result;
use search_ai::{BestFirstSearch, GameAi};
use state_space::{GameState, SearchState};
use tracing::{info, warn};

use crate::config::{GameSettings, PuzzleSettings};

/// 求解配置中的 8 数码
pub fn run_puzzle(settings: &PuzzleSettings) {
    let PuzzleSettings { initial, goal } = settings;
    info!("8 数码求解: {} -> {}", initial, goal);

    if !initial.is_solvable_to(goal) {
        warn!("逆序对奇偶性不同，目标不可达，搜索将穷尽整个奇偶类");
    }

    let mut engine = BestFirstSearch::new();
    let result = engine.search(initial, goal);
    let stats = engine.stats();
    info!(
        "搜索结束: expanded={}, generated={}, stale_skipped={}, max_frontier={}",
        stats.expanded, stats.generated, stats.stale_skipped, stats.max_frontier
    );

    match result {
        Some(path) => {
            println!("Puzzle solved in {} moves\n", path.num_moves());
            for step in path.steps() {
                if let Some(mv) = step.mv {
                    println!("blank {}", mv);
                }
                println!("{}\n", step.state.to_grid());
            }
        }
        None => println!("No solution found."),
    }
}

/// 井字棋自对弈
pub fn run_game(settings: &GameSettings) -> Result<()> {
    let start = settings.start_board()?;
    let config = settings.ai_config();
    info!(
        "井字棋自对弈: difficulty={:?}, max_depth={}, pruning={:?}",
        config.difficulty, config.max_depth, config.pruning
    );

    let mut ai = GameAi::new(config)?;
    let mut state = start;
    println!("{}\n", state.to_grid());

    let max_plies = state.legal_moves().len();
    let record = ai.self_play(&start, max_plies)?;
    for mv in &record.moves {
        let player = state.to_move();
        state = state.apply(*mv)?;
        println!("{} plays {}:\n{}\n", player, mv, state.to_grid());
    }

    match record.outcome {
        Some(outcome) => println!("Result: {}", outcome),
        None => println!("Game stopped before a result."),
    }
    Ok(())
}
