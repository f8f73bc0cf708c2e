//! # TaskTrack
//!
//! Mock learning-activity backend for learning-platform integration.
//! Exposes HTTP endpoints for activity configuration, deployment (task
//! creation), task listing with pluggable sort strategies, and mock
//! analytics.
//!
//! ## Architecture
//!
//! - [`models`] - Task domain model (Simple, Priority, Deadline variants)
//! - [`factory`] - Task construction from loosely-typed parameters
//! - [`repository`] - Append-only in-memory task store
//! - [`manager`] - Coordinates factory and repository
//! - [`sorting`] - Closed set of task ordering strategies
//! - [`facade`] - Single entry point composing manager and sorter
//! - [`web`] - Axum HTTP transport over the facade
//!
//! The core is deliberately in-memory: tasks live for the process lifetime
//! only, and analytics return fixed mock values uncorrelated with the
//! repository (matching the upstream activity provider contract).

pub mod config;
pub mod error;
pub mod facade;
pub mod factory;
pub mod logging;
pub mod manager;
pub mod models;
pub mod repository;
pub mod sorting;
pub mod web;

pub use error::{Result, TaskTrackError};
