//! Menhir-seeking arena controller.
//!
//! Each decision cycle the controller folds the visible tiles into its world map,
//! attacks when its weapon covers a character (or needs reloading), otherwise
//! follows a route to the menhir once one is known, and explores at random until
//! then.

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod knowledge;
pub mod registry;

pub use config::{BotConfig, Tabard};
pub use controller::{BotController, Controller, Decision, DecisionReason, RouteState};
pub use error::{ConfigError, ControllerError, Result};
pub use knowledge::{ArenaDescription, ChampionKnowledge};
pub use registry::potential_controllers;
