//! Exposition encoders.

pub mod text;

pub use text::{encode, render, CONTENT_TYPE};
