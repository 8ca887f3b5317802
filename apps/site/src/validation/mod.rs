// Review-time checks on outbound links and in-page anchors.
// Failures are reported, never fatal: the page stays usable.

pub mod links;

pub use links::{check_portfolio, LinkReport};
