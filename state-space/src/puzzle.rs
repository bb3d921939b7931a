//! 8 数码棋盘

use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{BLANK, BOARD_CELLS, BOARD_SIDE, PUZZLE_GOAL};
use crate::error::{Result, RuleError};
use crate::state::{PuzzleState, SearchState};

/// 空格的移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slide {
    Left,
    Right,
    Up,
    Down,
}

impl Slide {
    /// 走法生成顺序
    pub const ALL: [Slide; 4] = [Slide::Left, Slide::Right, Slide::Up, Slide::Down];

    /// 空格索引的偏移量
    pub fn offset(&self) -> isize {
        match self {
            Slide::Left => -1,
            Slide::Right => 1,
            Slide::Up => -(BOARD_SIDE as isize),
            Slide::Down => BOARD_SIDE as isize,
        }
    }

    /// 反方向
    pub fn inverse(&self) -> Slide {
        match self {
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
        }
    }
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Slide::Left => "left",
            Slide::Right => "right",
            Slide::Up => "up",
            Slide::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// 8 数码局面
///
/// `tiles[i]` 为第 `i` 格（行优先）上的数字，0 表示空格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PuzzleBoard {
    tiles: [u8; BOARD_CELLS],
}

impl PuzzleBoard {
    /// 从数字排列创建，必须恰好是 0..=8 的一个排列
    pub fn new(tiles: [u8; BOARD_CELLS]) -> Result<Self> {
        let mut seen = [false; BOARD_CELLS];
        for &tile in &tiles {
            let slot = seen.get_mut(tile as usize).ok_or_else(|| RuleError::InvalidBoard {
                reason: format!("tile {} out of range 0..={}", tile, BOARD_CELLS - 1),
            })?;
            if *slot {
                return Err(RuleError::InvalidBoard {
                    reason: format!("duplicate tile {}", tile),
                });
            }
            *slot = true;
        }
        Ok(Self { tiles })
    }

    /// 默认目标局面
    pub fn goal() -> Self {
        Self { tiles: PUZZLE_GOAL }
    }

    /// 所有格子
    pub fn tiles(&self) -> &[u8; BOARD_CELLS] {
        &self.tiles
    }

    /// 空格所在索引
    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or_default()
    }

    /// 空格能否朝该方向移动
    pub fn can_slide(&self, slide: Slide) -> bool {
        let blank = self.blank_index();
        match slide {
            Slide::Left => blank % BOARD_SIDE > 0,
            Slide::Right => blank % BOARD_SIDE < BOARD_SIDE - 1,
            Slide::Up => blank >= BOARD_SIDE,
            Slide::Down => blank < BOARD_CELLS - BOARD_SIDE,
        }
    }

    /// 交换空格与相邻格（调用方保证方向合法）
    fn slid(&self, slide: Slide) -> Self {
        let blank = self.blank_index();
        let target = (blank as isize + slide.offset()) as usize;
        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Self { tiles }
    }

    /// 每个数字（不含空格）到目标位置的曼哈顿距离之和
    pub fn manhattan_distance(&self, goal: &Self) -> u32 {
        let mut goal_index = [0usize; BOARD_CELLS];
        for (index, &tile) in goal.tiles.iter().enumerate() {
            goal_index[tile as usize] = index;
        }

        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let target = goal_index[tile as usize];
                let dr = (index / BOARD_SIDE).abs_diff(target / BOARD_SIDE);
                let dc = (index % BOARD_SIDE).abs_diff(target % BOARD_SIDE);
                (dr + dc) as u32
            })
            .sum()
    }

    /// 逆序对数量（忽略空格）
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// 能否到达 `goal`
    ///
    /// 宽度为奇数时，滑动不改变逆序对的奇偶性，两局面同奇偶即可互达。
    pub fn is_solvable_to(&self, goal: &Self) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    /// 从 `goal` 出发随机走 `steps` 步得到的局面（必然可解）
    ///
    /// 不会立即走回上一步。
    pub fn scrambled<R: Rng + ?Sized>(goal: &Self, steps: usize, rng: &mut R) -> Self {
        let mut board = *goal;
        let mut last: Option<Slide> = None;

        for _ in 0..steps {
            let candidates: Vec<Slide> = board
                .legal_moves()
                .into_iter()
                .filter(|slide| Some(slide.inverse()) != last)
                .collect();
            let Some(&slide) = candidates.choose(rng) else {
                break;
            };
            board = board.slid(slide);
            last = Some(slide);
        }

        board
    }

    /// 三行网格形式，空格显示为 `_`
    pub fn to_grid(&self) -> String {
        self.tiles
            .chunks(BOARD_SIDE)
            .map(|row| {
                row.iter()
                    .map(|&t| if t == BLANK { "_".to_string() } else { t.to_string() })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for PuzzleBoard {
    fn default() -> Self {
        Self::goal()
    }
}

impl SearchState for PuzzleBoard {
    type Move = Slide;

    fn legal_moves(&self) -> Vec<Slide> {
        Slide::ALL
            .into_iter()
            .filter(|&slide| self.can_slide(slide))
            .collect()
    }

    fn apply(&self, mv: Slide) -> Result<Self> {
        if !self.can_slide(mv) {
            return Err(RuleError::invalid_move(mv, "blank is on the edge"));
        }
        Ok(self.slid(mv))
    }
}

impl PuzzleState for PuzzleBoard {
    fn heuristic(&self, goal: &Self) -> u32 {
        self.manhattan_distance(goal)
    }
}

impl TryFrom<Vec<u8>> for PuzzleBoard {
    type Error = RuleError;

    fn try_from(tiles: Vec<u8>) -> Result<Self> {
        let actual = tiles.len();
        let tiles: [u8; BOARD_CELLS] = tiles.try_into().map_err(|_| RuleError::InvalidLength {
            expected: BOARD_CELLS,
            actual,
        })?;
        Self::new(tiles)
    }
}

impl From<PuzzleBoard> for Vec<u8> {
    fn from(board: PuzzleBoard) -> Self {
        board.tiles.to_vec()
    }
}

impl FromStr for PuzzleBoard {
    type Err = RuleError;

    /// 解析 `"1,3,2,4,6,5,0,7,8"`，逗号或空白分隔
    fn from_str(s: &str) -> Result<Self> {
        let tiles = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(index, token)| {
                token.parse::<u8>().map_err(|_| RuleError::InvalidCell {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::try_from(tiles)
    }
}

impl std::fmt::Display for PuzzleBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tiles: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", tiles.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn documented_initial() -> PuzzleBoard {
        PuzzleBoard::new([1, 3, 2, 4, 6, 5, 0, 7, 8]).unwrap()
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = PuzzleBoard::new([1, 1, 2, 3, 4, 5, 6, 7, 0]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidBoard { .. }));

        let err = PuzzleBoard::new([9, 1, 2, 3, 4, 5, 6, 7, 0]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidBoard { .. }));
    }

    #[test]
    fn test_parse_and_display() {
        let board: PuzzleBoard = "1,3,2,4,6,5,0,7,8".parse().unwrap();
        assert_eq!(board, documented_initial());
        assert_eq!(board.to_string(), "1,3,2,4,6,5,0,7,8");

        let spaced: PuzzleBoard = "1 3 2\n4 6 5\n0 7 8".parse().unwrap();
        assert_eq!(spaced, board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1,2,3".parse::<PuzzleBoard>(),
            Err(RuleError::InvalidLength { expected: 9, actual: 3 })
        );
        assert!(matches!(
            "1,2,3,4,a,6,7,8,0".parse::<PuzzleBoard>(),
            Err(RuleError::InvalidCell { index: 4, .. })
        ));
    }

    #[test]
    fn test_serde_validates() {
        let board: PuzzleBoard = serde_json::from_str("[1,3,2,4,6,5,0,7,8]").unwrap();
        assert_eq!(board, documented_initial());
        assert_eq!(serde_json::to_string(&board).unwrap(), "[1,3,2,4,6,5,0,7,8]");

        assert!(serde_json::from_str::<PuzzleBoard>("[1,1,2,3,4,5,6,7,0]").is_err());
    }

    #[test]
    fn test_legal_moves_order() {
        // 空格在左下角：只能右移和上移
        let board = documented_initial();
        assert_eq!(board.blank_index(), 6);
        assert_eq!(board.legal_moves(), vec![Slide::Right, Slide::Up]);

        // 空格在中心：四个方向都可以
        let center = PuzzleBoard::new([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        assert_eq!(center.legal_moves(), Slide::ALL.to_vec());
    }

    #[test]
    fn test_apply_is_pure() {
        let board = documented_initial();
        let next = board.apply(Slide::Right).unwrap();
        assert_eq!(next.tiles(), &[1, 3, 2, 4, 6, 5, 7, 0, 8]);
        assert_eq!(board, documented_initial());
    }

    #[test]
    fn test_apply_invalid_move() {
        let board = documented_initial();
        let err = board.apply(Slide::Left).unwrap_err();
        assert!(matches!(err, RuleError::InvalidMove { .. }));
        assert!(board.apply(Slide::Down).is_err());
    }

    #[test]
    fn test_manhattan_distance() {
        let goal = PuzzleBoard::goal();
        assert_eq!(goal.manhattan_distance(&goal), 0);
        assert_eq!(documented_initial().manhattan_distance(&goal), 6);
        assert_eq!(documented_initial().heuristic(&goal), 6);
    }

    #[test]
    fn test_heuristic_changes_by_one_per_slide() {
        let goal = PuzzleBoard::goal();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let board = PuzzleBoard::scrambled(&goal, 40, &mut rng);
            let h = board.heuristic(&goal) as i64;
            for mv in board.legal_moves() {
                let next = board.apply(mv).unwrap();
                let diff = (next.heuristic(&goal) as i64 - h).abs();
                assert_eq!(diff, 1, "单步滑动应恰好改变 1: {} -> {}", board, next);
            }
        }
    }

    #[test]
    fn test_solvability() {
        let goal = PuzzleBoard::goal();
        assert_eq!(documented_initial().inversions(), 2);
        assert!(documented_initial().is_solvable_to(&goal));

        let swapped = PuzzleBoard::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(!swapped.is_solvable_to(&goal));
    }

    #[test]
    fn test_scrambled_is_solvable_and_reproducible() {
        let goal = PuzzleBoard::goal();
        let a = PuzzleBoard::scrambled(&goal, 30, &mut ChaCha8Rng::seed_from_u64(42));
        let b = PuzzleBoard::scrambled(&goal, 30, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.is_solvable_to(&goal));
        assert_eq!(PuzzleBoard::scrambled(&goal, 0, &mut ChaCha8Rng::seed_from_u64(1)), goal);
    }

    #[test]
    fn test_grid() {
        assert_eq!(documented_initial().to_grid(), "1 3 2\n4 6 5\n_ 7 8");
    }
}
