pub mod openalias;
pub mod quorum;

// Re-export use cases
pub use openalias::{AddressCandidates, ResolveAddressUseCase};
pub use quorum::LoadTxtRecordsUseCase;
