//! `stage_events` - normalized input events for stage-based renderers
//!
//! Converts platform mouse, touch and keyboard input into two uniform value
//! types, [`PointerEvent`] and [`KeyboardEvent`], so the rest of a rendering
//! library can consume one event shape regardless of where the input came
//! from.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Masks are narrowed after being bounded
#![allow(clippy::module_name_repetitions)] // Allow input::InputEvent etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::similar_names)] // stage_x/stage_y, client_x/client_y
#![allow(clippy::float_cmp)] // Coordinates are copied, not computed, in comparisons

pub mod error;
pub mod input;
pub mod log;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use log::{LogLevel, emit_log, set_log_callback};

// Re-export input types
pub use input::{InputEvent, KeyModifiers, KeyboardEvent, PointerEvent, StageOrigin};
