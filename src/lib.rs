//! A resizable two-pane split view for terminal UIs.
//!
//! [`splitter`] holds the renderer-agnostic model: movement, drag and hover
//! handling, keyboard nudges and size observation. [`components::SplitView`]
//! binds it to ratatui and crossterm.

pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod drivers;
pub mod event_loop;
pub mod layout;
pub mod splitter;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
