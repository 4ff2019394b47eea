//! # Basket Console Library
//!
//! Core library for the Basket terminal application. The binary in `main.rs`
//! is a thin wrapper: parse arguments, initialize logging, construct the app,
//! hand control to the shell.
//!
//! ## Module Organization
//! ```text
//! basket_console/
//! ├── lib.rs          ◄─── You are here (module exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   └── products.rs ◄─── Product cache (ack-before-apply mutations)
//! ├── commands/
//! │   ├── mod.rs      ◄─── App wiring + shared handler plumbing
//! │   ├── products.rs ◄─── Remote-calling intents (load/submit/toggle/delete)
//! │   └── view.rs     ◄─── Local intents (filter/search/edit/reset)
//! ├── render.rs       ◄─── View derivation, RenderSink trait, terminal renderer
//! ├── shell.rs        ◄─── Intent parsing + interactive loop
//! └── error.rs        ◄─── AppError + notification texts
//! ```
//!
//! ## Seams
//! The app is generic over two traits so everything above the terminal is
//! testable headless:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   shell (event source)                                                  │
//! │        │ intents                                                        │
//! │        ▼                                                                │
//! │   App<R: RemoteStore, S: RenderSink>                                    │
//! │        │                      │                                         │
//! │        ▼                      ▼                                         │
//! │   HttpRemote / fake      TermRenderer / recording sink                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;
