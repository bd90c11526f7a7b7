//! Per-dialect output tests
//!
//! Each dialect converts the kitchensink fixture plus the constructs where its
//! markup differs from the others.

mod man;
mod mdoc;
mod mm;
mod mom;
