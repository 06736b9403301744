//! UI components.

pub mod puzzle_board;
