//! Small supporting utilities

pub mod cyclic;

pub use cyclic::CyclicList;
