/// The external parser that turns source text into a serialized tree.
///
/// Implementations own everything about how the engine runs: loading it into a
/// sandbox, copying `source` and `options` into its memory, reading the result
/// buffer back and freeing what was allocated. This crate only sees bytes.
pub trait Engine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parses `source` under the encoded `options` record and returns the
    /// serialized stream.
    ///
    /// # Errors
    ///
    /// Any failure to run the engine or to move data in or out of it.
    fn serialize(&mut self, source: &[u8], options: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    type Error = E::Error;

    fn serialize(&mut self, source: &[u8], options: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).serialize(source, options)
    }
}
