//! 棋盘记号解析和生成
//!
//! 记号格式：`<棋盘> [走子方]`
//!
//! 棋盘按行从上到下，行之间用 `/` 分隔，`X`/`O` 表示棋子，`_` 表示空格。
//! 走子方为 `x` 或 `o`，省略时为 `x`。
//!
//! 示例：`XX_/_O_/___ o`

use std::str::FromStr;

use crate::board::Board;
use crate::constants::{BOARD_COLS, BOARD_ROWS};
use crate::error::GameError;
use crate::mark::Mark;
use crate::state::GameState;

/// 空棋盘记号
pub const EMPTY_NOTATION: &str = "___/___/___ x";

/// 记号处理
pub struct Notation;

impl Notation {
    /// 解析记号为对局状态
    pub fn parse(notation: &str) -> Result<GameState, GameError> {
        let parts: Vec<&str> = notation.split_whitespace().collect();
        if parts.is_empty() {
            return Err(GameError::InvalidNotation {
                reason: "Empty notation string".to_string(),
            });
        }
        if parts.len() > 2 {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected at most 2 fields, got {}", parts.len()),
            });
        }

        let board = Self::parse_board(parts[0])?;

        let side_to_move = match parts.get(1) {
            None => Mark::X,
            Some(field) => {
                let mut chars = field.chars();
                match (chars.next().and_then(Mark::from_char), chars.next()) {
                    (Some(mark), None) => mark,
                    _ => {
                        return Err(GameError::InvalidNotation {
                            reason: format!("Invalid side to move: {}", field),
                        })
                    }
                }
            }
        };

        Ok(GameState::from_board(board, side_to_move))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, GameError> {
        let rows: Vec<&str> = board_str.split('/').collect();
        if rows.len() != BOARD_ROWS {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_ROWS, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in row_str.chars() {
                if col >= BOARD_COLS {
                    return Err(GameError::InvalidNotation {
                        reason: format!("Row {} has too many columns", row),
                    });
                }
                let cell = match c {
                    '_' => None,
                    other => Some(Mark::from_char(other).ok_or_else(|| {
                        GameError::InvalidNotation {
                            reason: format!("Invalid cell character: {}", other),
                        }
                    })?),
                };
                *board.at_mut(row as u8, col as u8) = cell;
                col += 1;
            }
            if col != BOARD_COLS {
                return Err(GameError::InvalidNotation {
                    reason: format!("Row {} has {} columns, expected {}", row, col, BOARD_COLS),
                });
            }
        }

        Ok(board)
    }

    /// 将对局状态转换为记号
    pub fn to_string(state: &GameState) -> String {
        format!(
            "{} {}",
            Self::board_to_string(state.board()),
            state.side_to_move().to_char().to_ascii_lowercase()
        )
    }

    /// 将棋盘转换为记号的棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        board.to_string().replace('\n', "/")
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::parse_board(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Outcome;
    use crate::moves::Move;

    #[test]
    fn test_parse_empty() {
        let state = Notation::parse(EMPTY_NOTATION).unwrap();
        assert_eq!(state.board(), &Board::empty());
        assert_eq!(state.side_to_move(), Mark::X);
    }

    #[test]
    fn test_parse_board_and_side() {
        let state = Notation::parse("XX_/_O_/___ o").unwrap();
        let board = state.board();
        assert_eq!(board.at(0, 0), Some(Mark::X));
        assert_eq!(board.at(0, 1), Some(Mark::X));
        assert_eq!(board.at(0, 2), None);
        assert_eq!(board.at(1, 1), Some(Mark::O));
        assert_eq!(state.side_to_move(), Mark::O);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_side_defaults_to_x() {
        let state = Notation::parse("___/_O_/___").unwrap();
        assert_eq!(state.side_to_move(), Mark::X);
    }

    #[test]
    fn test_round_trip() {
        let text = "XO_/_X_/O__ o";
        let state = Notation::parse(text).unwrap();
        assert_eq!(Notation::to_string(&state), text);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Notation::parse(""),
            Err(GameError::InvalidNotation { .. })
        ));
        assert!(Notation::parse("___/___").is_err());
        assert!(Notation::parse("____/___/___").is_err());
        assert!(Notation::parse("__/___/___").is_err());
        assert!(Notation::parse("_Z_/___/___").is_err());
        assert!(Notation::parse("___/___/___ q").is_err());
        assert!(Notation::parse("___/___/___ xo").is_err());
        assert!(Notation::parse("___/___/___ x 1").is_err());
    }

    #[test]
    fn test_board_from_str() {
        let board: Board = " X__/___/__O ".parse().unwrap();
        assert_eq!(board.get(Move::new_unchecked(0, 0)), Some(Mark::X));
        assert_eq!(board.get(Move::new_unchecked(2, 2)), Some(Mark::O));
        assert_eq!(Notation::board_to_string(&board), "X__/___/__O");
    }
}
