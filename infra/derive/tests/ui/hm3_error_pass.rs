use hm3_derive::hm3_error;
use std::borrow::Cow;

#[hm3_error]
pub enum StageError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: StageError = "boom".into();
    assert!(matches!(err, StageError::Internal { .. }));
}
