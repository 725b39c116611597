//! Step-by-step closest-pair search over a planar point set.
//!
//! Main components:
//! - [`geometry`]: points, candidate pairs and distances.
//! - [`point_set`]: x-ordered point collections and random spawning.
//! - [`error`]: input validation errors.
//! - [`strip`]: merge-strip construction and the sliding y-window.
//! - [`brute`]: quadratic reference search.
//! - [`snapshot`]: the state exposed at each checkpoint.
//! - [`engine`]: the divide-and-conquer search as a resumable state machine.
//! - [`config`]: playback pacing and spawn settings.
//! - [`driver`]: play / pause / step / reset control over an engine.
//! - [`types`]: shared enums used in snapshots.

pub mod brute;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod point_set;
pub mod snapshot;
pub mod strip;
pub mod types;
