//! End to end tests for decoding prism streams.
//!
//! Streams are assembled with [`utils::StreamBuilder`] rather than captured from a
//! live engine, so each test states exactly which bytes it feeds the decoder.

pub mod utils;

#[cfg(test)]
mod decode;
