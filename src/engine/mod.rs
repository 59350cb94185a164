//! Core tailoring engine: retrieval, alignment, backfill, and the
//! run-to-completion pipeline

pub mod alignment;
pub mod backfill;
pub mod pipeline;
pub mod retrieval;

pub use alignment::align;
pub use backfill::backfill;
pub use pipeline::{TailorPipeline, TailorReport};
pub use retrieval::NearestBullet;
