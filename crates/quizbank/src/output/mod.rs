//! Output serialization.

mod writer;

pub use writer::{write_output, write_output_csv};
