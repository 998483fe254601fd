use std::borrow::Cow;

#[hm3_derive::hm3_error]
pub enum SiteError {
    #[error("Site I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Asset walk error{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    #[error("Kernel error{}: {source}", format_context(.context))]
    Kernel { source: hm3_kernel::KernelError, context: Option<Cow<'static, str>> },

    /// The entry template has no `define('<field>', ...)` statement to stamp.
    #[error("Entry field {field} not found{}", format_context(.context))]
    MissingField { field: &'static str, context: Option<Cow<'static, str>> },
}
