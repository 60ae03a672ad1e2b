//! Route search over a partially observed arena and compilation of routes into
//! turn/step actions.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod compiler;
pub mod planner;

pub use compiler::{compile, turn_actions, CompileError};
pub use planner::{find_path, GridPath};
