use bitflags::bitflags;

bitflags! {
    /// Serializer options applied when a value is re-encoded.
    ///
    /// These mirror the switches of a typical JSON serializer. The
    /// normalizer itself only inspects [`EncodeOptions::PRETTY_PRINT`];
    /// the escaping options are passed through to the encoding step and
    /// are otherwise opaque to the reindenting core.
    ///
    /// # Example
    ///
    /// ```rust
    /// use json_normalizer::EncodeOptions;
    ///
    /// let options = EncodeOptions::PRETTY_PRINT | EncodeOptions::ESCAPE_UNICODE;
    /// assert!(options.contains(EncodeOptions::PRETTY_PRINT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EncodeOptions: u32 {
        /// Multi-line, indented output instead of compact single-line
        /// output. Required by [`FormatNormalizer`](crate::FormatNormalizer):
        /// without line breaks there is no indentation to rewrite.
        const PRETTY_PRINT = 1 << 0;

        /// Write characters outside the ASCII range as `\uXXXX` escapes
        /// (astral characters as surrogate pairs).
        const ESCAPE_UNICODE = 1 << 1;

        /// Write `/` as `\/`, safe for embedding in `<script>` contexts.
        const ESCAPE_SOLIDUS = 1 << 2;
    }
}

impl Default for EncodeOptions {
    /// Pretty-printing only, no extra escaping.
    fn default() -> Self {
        EncodeOptions::PRETTY_PRINT
    }
}
