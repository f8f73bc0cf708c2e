//! # TaskTrack Domain Models
//!
//! Core task records shared by the factory, repository, and sorting layers.

pub mod task;

pub use task::{format_timestamp, Task, TaskKind};
