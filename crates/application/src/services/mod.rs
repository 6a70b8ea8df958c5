mod quorum_service;
mod random_index;

pub use quorum_service::QuorumService;
pub use random_index::random_start_index;
