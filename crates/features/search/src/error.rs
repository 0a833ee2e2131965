use std::borrow::Cow;

/// Why a search query was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasConstraintCode {
    EmptySearchTerm,
    InvalidLimit,
}

/// A specialized [`SearchError`] enum of this crate.
#[shopdesk_derive::shopdesk_error]
pub enum SearchError {
    /// The query does not satisfy the alias constraints.
    #[error("Alias constraint violated{}: {message}", format_context(.context))]
    AliasConstraint {
        code: AliasConstraintCode,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal search error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
