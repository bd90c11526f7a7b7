//! Backend implementations
//!
//! One module per roff macro package. Each backend maps the transducer's
//! events to the requests of its package; shared helpers live in `common`.

pub mod common;
pub mod man;
pub mod mdoc;
pub mod mm;
pub mod mom;

pub use man::ManBackend;
pub use mdoc::MdocBackend;
pub use mm::MmBackend;
pub use mom::MomBackend;
