//! 井字棋棋盘

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_SIDE, WIN_LINES};
use crate::error::{Result, RuleError};
use crate::state::{GameState, Outcome, Player, SearchState};

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// 从行列创建
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIDE && col < BOARD_SIDE {
            Some(Self((row * BOARD_SIDE + col) as u8))
        } else {
            None
        }
    }

    /// 从索引创建（行优先，0-8）
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_CELLS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> usize {
        self.index() / BOARD_SIDE
    }

    pub fn col(&self) -> usize {
        self.index() % BOARD_SIDE
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl TryFrom<u8> for Square {
    type Error = RuleError;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index as usize).ok_or(RuleError::InvalidSquare {
            index: index as usize,
            max: BOARD_CELLS,
        })
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

/// 井字棋局面
///
/// X 先手；走子方由棋子数推出，构造后始终与棋子数一致。
/// 序列化为九个字符的文本，反序列化时经过与 [`FromStr`] 相同的校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicTacToe {
    cells: [Option<Player>; BOARD_CELLS],
    to_move: Player,
}

impl TicTacToe {
    /// 空棋盘，X 先走
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            to_move: Player::X,
        }
    }

    /// 从格子内容创建
    ///
    /// O 的数量必须等于 X 或比 X 少 1，且双方不能同时连成一线。
    pub fn from_cells(cells: [Option<Player>; BOARD_CELLS]) -> Result<Self> {
        let x = cells.iter().filter(|c| **c == Some(Player::X)).count();
        let o = cells.iter().filter(|c| **c == Some(Player::O)).count();
        let to_move = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(RuleError::InvalidBoard {
                reason: format!("piece counts X={}, O={} (X moves first)", x, o),
            });
        };

        let board = Self { cells, to_move };
        if board.has_line(Player::X) && board.has_line(Player::O) {
            return Err(RuleError::InvalidBoard {
                reason: "both players have three in a row".to_string(),
            });
        }
        // 胜方必须是最后落子的一方
        if let Some(winner) = board.winner() {
            if winner == to_move {
                return Err(RuleError::InvalidBoard {
                    reason: format!("{} has three in a row but is to move", winner),
                });
            }
        }
        Ok(board)
    }

    /// 所有格子
    pub fn cells(&self) -> &[Option<Player>; BOARD_CELLS] {
        &self.cells
    }

    /// 获取格子上的棋子
    pub fn get(&self, square: Square) -> Option<Player> {
        self.cells[square.index()]
    }

    fn has_line(&self, player: Player) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(player)))
    }

    /// 连成一线的玩家
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.has_line(player))
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// `player` 仍有可能连成的线数（线上没有对方棋子）
    pub fn open_lines(&self, player: Player) -> i32 {
        let opponent = Some(player.opponent());
        WIN_LINES
            .iter()
            .filter(|line| line.iter().all(|&i| self.cells[i] != opponent))
            .count() as i32
    }

    /// 三行网格形式
    pub fn to_grid(&self) -> String {
        self.cells
            .chunks(BOARD_SIDE)
            .map(|row| row.iter().map(|&c| cell_char(c).to_string()).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn cell_char(cell: Option<Player>) -> char {
    cell.map(|p| p.to_char()).unwrap_or('.')
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState for TicTacToe {
    type Move = Square;

    /// 终局后没有合法走法
    fn legal_moves(&self) -> Vec<Square> {
        if self.terminal_value().is_some() {
            return Vec::new();
        }
        (0..BOARD_CELLS)
            .filter(|&i| self.cells[i].is_none())
            .filter_map(Square::from_index)
            .collect()
    }

    fn apply(&self, mv: Square) -> Result<Self> {
        if self.terminal_value().is_some() {
            return Err(RuleError::invalid_move(mv, "game is over"));
        }
        if self.cells[mv.index()].is_some() {
            return Err(RuleError::invalid_move(mv, "square is occupied"));
        }

        let mut cells = self.cells;
        cells[mv.index()] = Some(self.to_move);
        Ok(Self {
            cells,
            to_move: self.to_move.opponent(),
        })
    }
}

impl GameState for TicTacToe {
    fn to_move(&self) -> Player {
        self.to_move
    }

    fn terminal_value(&self) -> Option<Outcome> {
        if let Some(player) = self.winner() {
            Some(Outcome::Win(player))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn evaluate(&self, player: Player) -> i32 {
        self.open_lines(player) - self.open_lines(player.opponent())
    }
}

impl FromStr for TicTacToe {
    type Err = RuleError;

    /// 解析九个格子，`X`/`O` 为棋子，`.`、`-`、`_` 为空；忽略空白和 `|`
    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != BOARD_CELLS {
            return Err(RuleError::InvalidLength {
                expected: BOARD_CELLS,
                actual: symbols.len(),
            });
        }

        let mut cells = [None; BOARD_CELLS];
        for (index, &c) in symbols.iter().enumerate() {
            cells[index] = match c {
                '.' | '-' | '_' => None,
                other => Some(Player::from_char(other).ok_or_else(|| RuleError::InvalidCell {
                    index,
                    token: other.to_string(),
                })?),
            };
        }
        Self::from_cells(cells)
    }
}

impl TryFrom<String> for TicTacToe {
    type Error = RuleError;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl From<TicTacToe> for String {
    fn from(board: TicTacToe) -> Self {
        board.to_string()
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self.cells.iter().map(|&c| cell_char(c)).collect();
        write!(f, "{}", text)
    }
}
