//! Password and passphrase generation with a strength gauge.
//!
//! [`pass::generate`] builds a credential from a [`pass::GenerationConfig`]
//! and [`pass::score`] rates it. Both are pure over their inputs; randomness
//! comes in through [`rand::Source`].

pub mod cli;
mod error;
pub mod export;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;

pub use error::{Error, Result};
