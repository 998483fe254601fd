use std::borrow::Cow;

#[hm3_derive::hm3_error]
pub enum KernelError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// The OS entropy source could not be read.
    #[error("Entropy source unavailable{}: {source}", format_context(.context))]
    Entropy { source: getrandom::Error, context: Option<Cow<'static, str>> },
}
