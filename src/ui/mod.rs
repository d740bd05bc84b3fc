//! Terminal UI layer for interactive tutoring sessions.
//!
//! - [`chat_loop`]: terminal setup, event handling and request dispatch.
//! - [`renderer`]: draws the sidebar, the active screen and the status line.
//! - [`picker`]: single-choice lists used by the configuration form.
//! - [`theme`]: styles.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the session logic.

pub mod chat_loop;
pub mod picker;
pub mod renderer;
pub mod theme;
