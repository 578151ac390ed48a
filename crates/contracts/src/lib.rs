//! Types shared between the catalog frontend and backend.
//!
//! Besides the wire types this crate holds the product form core: the draft
//! validation gate, the submission state machine and the table rendering
//! contract. Nothing here touches the DOM or the network, so it is tested
//! natively.

pub mod domain;
pub mod enums;
pub mod shared;
