use std::borrow::Cow;

#[hm3_derive::hm3_error]
pub enum ModuleError {
    #[error("Module file unreadable{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed setup descriptor{}: {source}", format_context(.context))]
    Parse { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid setup descriptor{}: {message}", format_context(.context))]
    InvalidSetup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
