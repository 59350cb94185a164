//! Bullet corpus: embeddings, vector store, indexing, and backfill catalogue

pub mod embedder;
pub mod indexer;
pub mod role_index;
pub mod store;

pub use embedder::{Embedder, StaticEmbedder};
pub use indexer::{index_candidate, IndexedCorpus};
pub use role_index::{BackfillCandidate, RoleIndex};
pub use store::{BulletMetadata, QueryMatch, VectorStore};
