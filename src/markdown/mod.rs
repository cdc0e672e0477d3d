//! The marketdown authoring language: parsing stages and composition.

pub mod ast;
pub mod blocks;
pub mod compose;
pub mod finance;
pub mod inlines;
pub mod math;
pub mod outline;
pub mod stream;
