//! Flat text persistence format: nine lines of nine signed cell codes (the
//! board, row-major) followed by nine lines of nine `true`/`false` tokens
//! (the flags). Reading and writing the file itself is the caller's job;
//! this module only converts between the text and a validated engine.

use core::result::Result;

use ndarray::Array2;
use thiserror::Error;

use crate::*;

#[derive(Error, Debug, PartialEq)]
pub enum SaveError {
    #[error("Save data ends before both grids are complete")]
    Truncated,
    #[error("Unreadable token {0:?} in save data")]
    BadToken(String),
    #[error(transparent)]
    Board(#[from] GameError),
}

pub fn to_text(engine: &GameEngine) -> String {
    let mut out = String::new();
    for y in 0..GRID_SIZE {
        let line = (0..GRID_SIZE)
            .map(|x| engine.cell_code((x, y)).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    for y in 0..GRID_SIZE {
        let line = (0..GRID_SIZE)
            .map(|x| engine.is_flagged((x, y)).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn from_text(text: &str) -> Result<GameEngine, SaveError> {
    let mut tokens = text.split_whitespace();

    let mut codes: Array2<CellCode> = Array2::from_elem(GRID_DIM, 0);
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let token = tokens.next().ok_or(SaveError::Truncated)?;
            codes[(x, y).to_nd_index()] = token
                .parse()
                .map_err(|_| SaveError::BadToken(token.to_string()))?;
        }
    }

    let mut flags = Array2::from_elem(GRID_DIM, false);
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let token = tokens.next().ok_or(SaveError::Truncated)?;
            flags[(x, y).to_nd_index()] = match token {
                "true" => true,
                "false" => false,
                _ => return Err(SaveError::BadToken(token.to_string())),
            };
        }
    }

    Ok(GameEngine::from_grids(codes, flags)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_engine() -> GameEngine {
        let layout =
            MineLayout::from_cell_indices([0, 10, 20, 30, 40, 50, 60, 70, 80, 5]).unwrap();
        let mut engine = GameEngine::new(layout);
        engine.reveal((8, 0));
        engine.toggle_flag((0, 4));
        engine
    }

    #[test]
    fn text_is_nine_code_lines_then_nine_flag_lines() {
        let text = to_text(&live_engine());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 18);
        for line in &lines[..9] {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), 9);
            assert!(tokens.iter().all(|token| token.parse::<CellCode>().is_ok()));
        }
        for line in &lines[9..] {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), 9);
            assert!(
                tokens
                    .iter()
                    .all(|&token| token == "true" || token == "false")
            );
        }
        // first board line starts with the hidden mine at the origin
        assert!(lines[0].starts_with("-999 "));
    }

    #[test]
    fn round_trip_reproduces_the_engine() {
        let engine = live_engine();

        let restored = from_text(&to_text(&engine)).unwrap();

        assert_eq!(restored, engine);
        assert_eq!(restored.state(), EngineState::Active);
        assert!(restored.is_flagged((0, 4)));
    }

    #[test]
    fn round_trip_keeps_a_fresh_board_fresh() {
        let engine =
            GameEngine::new(MineLayout::from_cell_indices([0, 10, 20, 30, 40, 50, 60, 70, 80, 5]).unwrap());

        let restored = from_text(&to_text(&engine)).unwrap();

        assert_eq!(restored.state(), EngineState::Ready);
        assert_eq!(restored, engine);
    }

    #[test]
    fn rejects_truncated_data() {
        let text = to_text(&live_engine());
        let cut: String = text.lines().take(12).collect::<Vec<_>>().join("\n");

        assert_eq!(from_text(&cut), Err(SaveError::Truncated));
        assert_eq!(from_text(""), Err(SaveError::Truncated));
    }

    #[test]
    fn rejects_unreadable_tokens() {
        let text = to_text(&live_engine());

        let bad_code = text.replacen("-999", "mine", 1);
        assert_eq!(
            from_text(&bad_code),
            Err(SaveError::BadToken("mine".to_string()))
        );

        let bad_flag = text.replacen("false", "maybe", 1);
        assert_eq!(
            from_text(&bad_flag),
            Err(SaveError::BadToken("maybe".to_string()))
        );
    }

    #[test]
    fn surfaces_board_validation_failures() {
        let text = to_text(&live_engine());
        let corrupt = text.replacen("-999", "0", 1);

        assert_eq!(
            from_text(&corrupt),
            Err(SaveError::Board(GameError::IllegalCellCode(0)))
        );
    }
}
