//! Lenient token scanner for layer records.
//!
//! Reads `<float> <float> <word>` the way a `"%f%f%6s"` scan would: leading
//! whitespace before each token is skipped, scanning stops at the first token
//! that does not match, and the word is cut to six characters.

use nom::{
    bytes::complete::take_till1, character::complete::multispace0, number::complete::float,
    sequence::preceded, IResult,
};

/// Number of tokens a complete player record binds
pub const PLAYER_TOKENS: usize = 3;

/// Longest color token kept by the scanner
const COLOR_TOKEN_LEN: usize = 6;

/// Tokens bound from one player record line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerScan {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub color: Option<String>,
}

impl PlayerScan {
    /// Count of tokens bound before the first mismatch
    pub fn bound(&self) -> usize {
        match (self.x, self.y, &self.color) {
            (Some(_), Some(_), Some(_)) => 3,
            (Some(_), Some(_), None) => 2,
            (Some(_), None, _) => 1,
            (None, _, _) => 0,
        }
    }
}

fn number(input: &str) -> IResult<&str, f32> {
    preceded(multispace0, float)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(char::is_whitespace))(input)
}

/// Scan `<x> <y> <color>` from a player record line
pub fn scan_player_line(line: &str) -> PlayerScan {
    let mut scan = PlayerScan::default();

    let Ok((rest, x)) = number(line) else {
        return scan;
    };
    scan.x = Some(x);

    let Ok((rest, y)) = number(rest) else {
        return scan;
    };
    scan.y = Some(y);

    if let Ok((_, color)) = word(rest) {
        scan.color = Some(color.chars().take(COLOR_TOKEN_LEN).collect());
    }
    scan
}
