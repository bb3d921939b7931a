//! 状态空间常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIDE: usize = 3;

/// 棋盘格子总数
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// 8 数码中的空格
pub const BLANK: u8 = 0;

/// 8 数码默认目标局面
pub const PUZZLE_GOAL: [u8; BOARD_CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// 8 数码一个奇偶类中的局面数（9! / 2）
pub const PUZZLE_PARITY_CLASS_SIZE: usize = 181_440;

/// 井字棋所有获胜连线（按格子索引）
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
