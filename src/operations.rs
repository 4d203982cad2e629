//! Request and result shapes, one pair per operation.

pub mod human_loop;
pub mod labeling;
pub mod monitoring;
pub mod notebook;
pub mod tags;
pub mod training;
pub mod transform;
pub mod tuning;

pub use human_loop::*;
pub use labeling::*;
pub use monitoring::*;
pub use notebook::*;
pub use tags::*;
pub use training::*;
pub use transform::*;
pub use tuning::*;
