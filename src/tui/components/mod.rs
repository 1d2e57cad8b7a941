//! # TUI Components
//!
//! Components receive everything they draw as props and render into a
//! `Rect`:
//!
//! - `BoardGrid`: the ASCII grid, piece glyphs, selection highlight and
//!   terminal cursor placement
//! - `StatusLine`: cursor/selection squares and key help
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── board_grid.rs    (Grid and cursor placement)
//! └── status_line.rs   (Line under the grid)
//! ```

pub mod board_grid;
pub mod status_line;

pub use board_grid::BoardGrid;
pub use status_line::StatusLine;
