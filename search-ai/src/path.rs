//! 求解路径

use state_space::SearchState;

/// 路径上的一步：到达的局面和所用走法（起点没有走法）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<S: SearchState> {
    pub state: S,
    pub mv: Option<S::Move>,
}

/// 从起点到目标（含两端）的局面序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S: SearchState> {
    steps: Vec<PathStep<S>>,
}

impl<S: SearchState> Path<S> {
    /// 由起点在前的步骤列表创建，至少包含起点
    pub(crate) fn new(steps: Vec<PathStep<S>>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep<S>] {
        &self.steps
    }

    /// 走法数量
    pub fn num_moves(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn initial(&self) -> &S {
        &self.steps[0].state
    }

    pub fn last(&self) -> &S {
        &self.steps[self.steps.len() - 1].state
    }

    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.steps.iter().map(|step| &step.state)
    }

    pub fn moves(&self) -> Vec<S::Move> {
        self.steps.iter().filter_map(|step| step.mv).collect()
    }
}
