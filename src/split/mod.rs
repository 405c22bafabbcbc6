//! Size-targeted page splitting
//!
//! Partitions a document's pages into contiguous runs whose estimated
//! serialized sizes approximate a target, then writes each run as a
//! standalone PDF. Estimation happens before any file is written, so a
//! document that cannot be read safely produces no output at all.

pub mod accumulator;
pub mod estimator;
pub mod planner;
pub mod range;
pub mod writer;

pub use accumulator::{Decision, PartAccumulator};
pub use estimator::estimate_page_size;
pub use planner::{pack_pages, plan};
pub use range::PartRange;
pub use writer::{part_path, write_parts, WrittenPart};
