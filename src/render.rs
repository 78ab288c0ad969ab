//! Plain-text rendering of a game state.
//!
//! Each cube is drawn as its unfolded net, cubes side by side, followed by
//! the goal column:
//!
//! ```text
//!  1          2          3          4
//!    [♥]        [♥]        [♠]        [♣]       up     --
//! (♥)[♦](♥)  (♦)[♦](♥)  (♣)[♠](♣)  (♦)[♦](♠)    front  --
//!    [♣]        [♠]        [♥]        [♥]       down   --
//!    [♠]        [♣]        [♦]        [♣]       back   --
//! ```
//!
//! Side faces are bracketed with parentheses since they never count
//! toward a goal.

use std::fmt::Write as _;

use crate::core::{Cube, FaceValue, GameState, Orientation};
use crate::rules::is_solved;

/// How face values are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphStyle {
    /// Suit glyphs.
    #[default]
    Glyphs,
    /// Plain letters, for terminals without the suit glyphs.
    Letters,
}

impl GlyphStyle {
    fn draw(self, value: FaceValue) -> char {
        match self {
            GlyphStyle::Glyphs => value.glyph(),
            GlyphStyle::Letters => value.letter(),
        }
    }
}

const ROWS: usize = 4;
const CUBE_GAP: &str = "  ";
const BLANK: &str = "   ";

/// Net row an orientation is drawn on.
const fn row_of(orientation: Orientation) -> usize {
    match orientation {
        Orientation::Up => 0,
        Orientation::Left | Orientation::Front | Orientation::Right => 1,
        Orientation::Down => 2,
        Orientation::Back => 3,
    }
}

fn cell(cube: &Cube, orientation: Orientation, style: GlyphStyle) -> String {
    match cube.value_at(orientation) {
        Some(value) if orientation.is_side() => format!("({})", style.draw(value)),
        Some(value) => format!("[{}]", style.draw(value)),
        None => BLANK.to_string(),
    }
}

fn net_rows(cube: &Cube, style: GlyphStyle) -> [String; ROWS] {
    let centered = |o| format!("{BLANK}{}{BLANK}", cell(cube, o, style));
    [
        centered(Orientation::Up),
        format!(
            "{}{}{}",
            cell(cube, Orientation::Left, style),
            cell(cube, Orientation::Front, style),
            cell(cube, Orientation::Right, style)
        ),
        centered(Orientation::Down),
        centered(Orientation::Back),
    ]
}

/// Render the cubes and goals.
#[must_use]
pub fn render_state(state: &GameState, style: GlyphStyle) -> String {
    let mut header = String::new();
    let mut rows: [String; ROWS] = Default::default();

    for (index, cube) in state.cubes.iter().enumerate() {
        let label = (index + 1).to_string();
        // Nets are nine cells wide; labels sit over the left column.
        let _ = write!(header, " {label:<8}{CUBE_GAP}");
        for (row, text) in rows.iter_mut().zip(net_rows(cube, style)) {
            let _ = write!(row, "{text}{CUBE_GAP}");
        }
    }

    for goal in &state.goals {
        let mark = if goal.valid.is_valid() { "ok" } else { "--" };
        let _ = write!(rows[row_of(goal.orientation)], "  {:<6} {mark}", goal.orientation);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", header.trim_end());
    for row in &rows {
        let _ = writeln!(out, "{}", row.trim_end());
    }
    if is_solved(&state.goals) {
        let _ = writeln!(out, "solved!");
    }
    out
}
