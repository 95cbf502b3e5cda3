//! Shared terminal utilities.
//!
//! Box drawing, the strength meter, and themed credential output.

mod output;

pub use output::*;
