//! # Core Board Logic
//!
//! The board data model and the rules for changing it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board (cells+cursor) │
//!                    │  • InputKey (events)    │
//!                    │  • apply() (mutator)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`piece`]: `Piece` values and their display letters
//! - [`board`]: The `Board` struct: cells, cursor and selection in one place
//! - [`input`]: The `InputKey` enum and `apply()`
//! - [`config`]: Config file loading and resolution

pub mod board;
pub mod config;
pub mod input;
pub mod piece;

pub use board::{Board, BoardError, Cell, Coordinate};
pub use input::{InputKey, apply};
pub use piece::{Piece, PieceColor, PieceKind};
