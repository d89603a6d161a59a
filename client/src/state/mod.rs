//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `ticket` holds the session's single submitted ticket, `preview` tracks the
//! avatar drop zone's asynchronous preview reads.

pub mod preview;
pub mod ticket;
