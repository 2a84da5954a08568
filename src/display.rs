use std::fmt;

use crate::core::position::Position;
use crate::core::square::BOARD_SIZE;

const FILES: &str = "  a b c d e f g h";

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILES}")?;
        for (row, cells) in self.rows().iter().enumerate() {
            let rank = BOARD_SIZE - row;
            write!(f, "{rank} ")?;
            for cell in cells {
                let c = cell.map_or('.', |p| p.to_char());
                write!(f, "{c} ")?;
            }
            writeln!(f, "{rank}")?;
        }
        writeln!(f, "{FILES}")?;
        writeln!(f, "{} to move", self.side_to_move().name())
    }
}
