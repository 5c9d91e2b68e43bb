// Adapters layer: text codecs for the number files. Storage backends live under src/config.

pub mod number_file;

pub use number_file::{format_numbers, parse_numbers, NumberFileReader, NumberFileWriter};
