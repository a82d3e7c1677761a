/// Classification for retry policy.
///
/// Used by the client to decide whether a failed request is worth repeating.
///
/// | Class | Retry? |
/// |-------|--------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, after an exponentially growing delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - unknown token, bad response, or terminal failure.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Retry after a delay.
    ///
    /// Used for transient errors like rate limiting (429), upstream 5xx or
    /// timeouts.
    WithBackoff,
}

impl RetryClass {
    pub fn is_retryable(&self) -> bool {
        matches!(self, RetryClass::WithBackoff)
    }
}
