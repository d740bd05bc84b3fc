//! tutorchat is a terminal client for a language-tutoring chat service.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`api`] defines the JSON payloads of the tutoring backend and the
//!   [`api::TutorBackend`] trait with its reqwest implementation.
//! - [`core`] owns the controller: session state, the view model, and the
//!   action/command reducer that turns user intent into backend requests.
//! - [`ui`] renders the view model with ratatui and runs the interactive
//!   event loop.
//! - [`cli`] parses arguments and dispatches into the interactive client or
//!   one of the non-interactive subcommands.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
