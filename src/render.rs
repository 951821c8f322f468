//! Text rendering of boards and masks.

use crate::board::{Board, CellState};
use core::fmt;

#[cfg(feature = "std")]
use crate::shape::PatternMask;

/// Displays a board as rows of numeric cell codes.
pub struct CodeView<'a, const N: usize>(pub &'a Board<N>);

/// Displays a board as rows of cell symbols.
pub struct SymbolView<'a, const N: usize>(pub &'a Board<N>);

fn write_rows<const N: usize>(
    f: &mut fmt::Formatter<'_>,
    board: &Board<N>,
    cell: impl Fn(CellState) -> char,
) -> fmt::Result {
    for ((r, c), state) in board.cells() {
        write!(f, "{} ", cell(state))?;
        if c + 1 == N && r + 1 < N {
            writeln!(f)?;
        }
    }
    Ok(())
}

impl<const N: usize> fmt::Display for CodeView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.0, |s| char::from(b'0' + s.code()))
    }
}

impl<const N: usize> fmt::Display for SymbolView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.0, CellState::symbol)
    }
}

/// Print the board with a legend, as codes or symbols.
#[cfg(feature = "std")]
pub fn print_board<const N: usize>(board: &Board<N>, symbols: bool) {
    if symbols {
        std::println!("BOARD (~=water, S=ship, *=area, X=ship+area):\n");
        std::println!("{}", SymbolView(board));
    } else {
        std::println!("BOARD (0=water, 3=ship, 5=area, 8=ship+area):\n");
        std::println!("{}", CodeView(board));
    }
}

/// Print a mask under a heading.
#[cfg(feature = "std")]
pub fn print_mask<const M: usize>(name: &str, mask: &PatternMask<M>) {
    std::println!("{} MASK (1=affected, 0=not):", name.to_uppercase());
    std::println!("{}\n", mask);
}
