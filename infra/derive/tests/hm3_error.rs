use hm3_derive::hm3_error;
use std::borrow::Cow;
use std::io;

#[hm3_error]
pub enum DemoError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    #[error("Bad descriptor{}: {message}", format_context(.context))]
    Descriptor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), DemoError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io error should propagate");
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "I/O failure: gone");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("reading site.js").expect_err("should fail");
    assert_eq!(err.to_string(), "I/O failure (reading site.js): gone");
}

#[test]
fn context_is_attached_to_own_results() {
    let res: Result<(), DemoError> =
        Err(DemoError::Descriptor { message: "missing page".into(), context: None });
    let err = res.context("modules/core/setup.toml").expect_err("should fail");
    assert_eq!(err.to_string(), "Bad descriptor (modules/core/setup.toml): missing page");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: DemoError = "static".into();
    let from_owned: DemoError = String::from("owned").into();
    assert!(matches!(from_static, DemoError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal fault: owned");
}

#[test]
fn ui_expansion_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/hm3_error_pass.rs");
}
