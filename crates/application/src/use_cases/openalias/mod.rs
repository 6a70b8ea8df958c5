mod resolve_address;

pub use resolve_address::{AddressCandidates, ResolveAddressUseCase};
