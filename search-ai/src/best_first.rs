//! 最佳优先搜索
//!
//! open 表按 f = g + h 排序，closed 表记录已展开的局面。
//! 节点存放在 arena 中，父节点用下标表示，找到目标后沿下标回溯路径。

use std::collections::HashSet;

use state_space::PuzzleState;
use tracing::{debug, info, trace, warn};

use crate::frontier::Frontier;
use crate::path::{Path, PathStep};

/// 搜索树节点，创建后不再修改
struct SearchNode<S: PuzzleState> {
    state: S,
    parent: Option<usize>,
    mv: Option<S::Move>,
    /// g：距起点的步数
    depth: u32,
}

/// 搜索统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 展开（生成后继）的局面数
    pub expanded: usize,
    /// 加入 open 表的节点数（含根节点）
    pub generated: usize,
    /// 弹出时已在 closed 表中而跳过的节点数
    pub stale_skipped: usize,
    /// open 表的最大长度
    pub max_frontier: usize,
}

/// 最佳优先搜索引擎
pub struct BestFirstSearch<S: PuzzleState> {
    nodes: Vec<SearchNode<S>>,
    stats: SearchStats,
}

impl<S: PuzzleState> BestFirstSearch<S> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// 搜索从 `initial` 到 `goal` 的路径
    ///
    /// 无解时返回 `None`。局面一旦进入 closed 表就不再展开，即使之后经更短的
    /// 路径到达；单位代价下这不影响最优性。
    pub fn search(&mut self, initial: &S, goal: &S) -> Option<Path<S>> {
        self.nodes.clear();
        self.stats = SearchStats::default();

        let mut frontier = Frontier::new();
        let mut visited: HashSet<S> = HashSet::new();

        let h = initial.heuristic(goal);
        debug!("Best-first search started, h(initial)={}", h);
        self.push_node(&mut frontier, initial.clone(), None, None, 0, h);

        while let Some(index) = frontier.pop() {
            let state = self.nodes[index].state.clone();

            if visited.contains(&state) {
                self.stats.stale_skipped += 1;
                continue;
            }
            visited.insert(state.clone());

            if state.is_goal(goal) {
                let path = self.reconstruct(index);
                info!(
                    "Goal reached: {} moves, expanded={}, generated={}",
                    path.num_moves(),
                    self.stats.expanded,
                    self.stats.generated
                );
                return Some(path);
            }

            self.stats.expanded += 1;
            let depth = self.nodes[index].depth + 1;
            trace!(
                "Expanding g={}, open={}, next f={:?}",
                depth - 1,
                frontier.len(),
                frontier.peek_cost()
            );

            for mv in state.legal_moves() {
                let successor = match state.apply(mv) {
                    Ok(successor) => successor,
                    Err(e) => {
                        warn!("Skipping move {:?} from generated list: {}", mv, e);
                        continue;
                    }
                };
                if visited.contains(&successor) {
                    continue;
                }
                let cost = depth + successor.heuristic(goal);
                self.push_node(&mut frontier, successor, Some(index), Some(mv), depth, cost);
            }
        }

        info!(
            "Frontier exhausted without reaching goal, expanded={}",
            self.stats.expanded
        );
        None
    }

    fn push_node(
        &mut self,
        frontier: &mut Frontier,
        state: S,
        parent: Option<usize>,
        mv: Option<S::Move>,
        depth: u32,
        cost: u32,
    ) {
        let index = self.nodes.len();
        self.nodes.push(SearchNode {
            state,
            parent,
            mv,
            depth,
        });
        frontier.push(index, cost);

        self.stats.generated += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(frontier.len());
    }

    /// 沿父节点下标回溯到根，再反转
    fn reconstruct(&self, mut index: usize) -> Path<S> {
        let mut steps = Vec::new();
        loop {
            let node = &self.nodes[index];
            steps.push(PathStep {
                state: node.state.clone(),
                mv: node.mv,
            });
            match node.parent {
                Some(parent) => index = parent,
                None => break,
            }
        }
        steps.reverse();
        Path::new(steps)
    }

    /// 最近一次搜索的统计
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<S: PuzzleState> Default for BestFirstSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// 一次性搜索
pub fn search<S: PuzzleState>(initial: &S, goal: &S) -> Option<Path<S>> {
    BestFirstSearch::new().search(initial, goal)
}
