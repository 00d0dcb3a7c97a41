use async_graphql::ErrorExtensions;
use infra::RecNetError;

/// GraphQL-facing wrapper for upstream failures.
///
/// async-graphql has a blanket `impl<T: Display> From<T> for Error`, so `?` on a
/// `GqlError` already yields a message. Going through `extend()` adds
/// `extensions.code` (`UPSTREAM_ERROR` or `DECODE_ERROR`) and, for non-2xx
/// answers, `extensions.status`.
#[derive(Debug)]
pub enum GqlError {
    Upstream(RecNetError),
}

impl GqlError {
    pub fn code(&self) -> &'static str {
        match self {
            GqlError::Upstream(e) if e.is_decode() => "DECODE_ERROR",
            GqlError::Upstream(_) => "UPSTREAM_ERROR",
        }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Upstream(e) if e.is_decode() => {
                write!(f, "Upstream returned an unexpected response: {e}")
            }
            GqlError::Upstream(e) => write!(f, "Upstream request failed: {e}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<RecNetError> for GqlError {
    fn from(e: RecNetError) -> Self {
        GqlError::Upstream(e)
    }
}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.code());
            let GqlError::Upstream(e) = self;
            if let Some(status) = e.status() {
                ext.set("status", status);
            }
        })
    }
}

/// Extension trait that turns an upstream `Result` into `async_graphql::Result`
/// carrying the error code extensions. The client already logged the failure.
///
/// Usage: `state.rec_net().account_by_id(id).await.upstream()?`
pub trait UpstreamResultExt<T> {
    fn upstream(self) -> async_graphql::Result<T>;
}

impl<T> UpstreamResultExt<T> for Result<T, RecNetError> {
    fn upstream(self) -> async_graphql::Result<T> {
        self.map_err(|e| GqlError::from(e).extend())
    }
}
