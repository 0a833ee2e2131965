use shopdesk_derive::shopdesk_error;
use std::borrow::Cow;

#[shopdesk_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Access denied{}: {message}", format_context(.context))]
    AccessDenied { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk")).context("reading settings")
}

fn main() {
    let denied = DemoError::access_denied("all shops only");
    assert!(matches!(denied, DemoError::AccessDenied { .. }));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading settings): disk");
}
