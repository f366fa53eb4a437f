use std::path::PathBuf;

use crate::error::{BingoError, Result};

pub const DEFAULT_BOARDS_PATH: &str = "input_data.txt";

/// Draw order used when no draws file is given.
pub const DEFAULT_DRAWS: [u32; 100] = [
    1, 76, 38, 96, 62, 41, 27, 33, 4, 2, 94, 15, 89, 25, 66, 14, 30, 0, 71, 21, 48, 44, 87, 73, 60,
    50, 77, 45, 29, 18, 5, 99, 65, 16, 93, 95, 37, 3, 52, 32, 46, 80, 98, 63, 92, 24, 35, 55, 12,
    81, 51, 17, 70, 78, 61, 91, 54, 8, 72, 40, 74, 68, 75, 67, 39, 64, 10, 53, 9, 31, 6, 7, 47, 42,
    90, 20, 19, 36, 22, 43, 58, 28, 79, 86, 57, 49, 83, 84, 97, 11, 85, 26, 69, 23, 59, 82, 88, 34,
    56, 13,
];

/// Which winner gets scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// The first board to complete a line.
    First,
    /// The last board to complete a line.
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub part: Part,
    pub boards_path: PathBuf,
    pub draws_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            part: Part::Last,
            boards_path: PathBuf::from(DEFAULT_BOARDS_PATH),
            draws_path: None,
        }
    }
}

impl Config {
    /// Reads `[part] [boards_file] [draws_file]`, executable name first.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();
        reversed_args.pop().ok_or_else(|| BingoError::Config {
            message: "expected the executable name to be the first argument".to_string(),
        })?;

        let mut config = Config::default();
        if let Some(part) = reversed_args.pop() {
            config.part = match part {
                "1" => Part::First,
                "2" => Part::Last,
                _ => {
                    return Err(BingoError::Config {
                        message: format!("unknown part {:?}, expected 1 or 2", part),
                    })
                }
            };
        }
        if let Some(boards_file) = reversed_args.pop() {
            config.boards_path = PathBuf::from(boards_file);
        }
        config.draws_path = reversed_args.pop().map(PathBuf::from);

        if !reversed_args.is_empty() {
            return Err(BingoError::Config {
                message: format!("unexpected extra arguments: {:?}", reversed_args),
            });
        }

        Ok(config)
    }
}
