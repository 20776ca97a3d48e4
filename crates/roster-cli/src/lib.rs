//! Terminal front end for the roster record engine.

pub mod logging;
pub mod render;
pub mod script;
