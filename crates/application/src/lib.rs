//! aliasdns application layer: ports, the quorum policy and the use cases
//! built on top of them.
pub mod ports;
pub mod services;
pub mod use_cases;
