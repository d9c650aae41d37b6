//! Wire schemas exchanged with the GéoData REST server.
//!
//! Every payload crossing the HTTP boundary has an explicit type here;
//! the frontend never renders an unparsed server row. Form-level
//! validation also lives in this crate so it can be tested natively.

pub mod domain;
pub mod stats;
pub mod validation;
