#![forbid(unsafe_code)]

//! Scripted sessions for the carousel widget.
//!
//! [`script`] describes a session as JSON; [`replay`] drives a mounted
//! carousel through it on a simulated clock and reports what happened.

pub mod cli;
pub mod replay;
pub mod script;
