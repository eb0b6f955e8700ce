//! Physics collaborator: bodies, the world that integrates them, and the
//! hook registry the letter behaviors plug into.

pub mod hooks;
pub mod rigid_body;
pub mod rigid_body_system;
