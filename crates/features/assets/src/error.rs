use std::borrow::Cow;

#[hm3_derive::hm3_error]
pub enum AssetError {
    #[error("Asset I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Only raised in strict mode.
    #[error("Compressor failed{}: {message}", format_context(.context))]
    Compressor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
