//! Hierarchical composition of LMS trees (HSS, RFC 8554 section 6).

pub mod definitions;
pub mod parameter;
pub mod signing;
pub mod verify;
