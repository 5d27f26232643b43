//! Menu actions
//!
//! One handler per menu entry. Handlers print user-facing results and
//! propagate storage failures; a missing item is reported, not raised.

pub mod items;
