//! Configuration shapes nested inside requests and results.
//!
//! Every shape is a plain value: all members are public `Option`s, a
//! `<Shape>Builder` offers chained construction, `Display` renders the
//! flattened `{Name: value,...}` form and equality is structural.

pub mod debugger;
pub mod human;
pub mod labeling;
pub mod monitoring;
pub mod network;
pub mod pricing;
pub mod tag;
pub mod training;
pub mod training_job;
pub mod transform;
pub mod tuning;

pub use debugger::*;
pub use human::*;
pub use labeling::*;
pub use monitoring::*;
pub use network::*;
pub use pricing::*;
pub use tag::{Tag, TagBuilder, Taggable};
pub use training::*;
pub use training_job::*;
pub use transform::*;
pub use tuning::*;
