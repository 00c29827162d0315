use std::future::Future;

/// Total attempts per network operation before giving up on an item.
pub const MAX_ATTEMPTS: usize = 3;

/// Re-invoke `attempt` until it yields a value, up to `max_attempts` total
/// attempts. `None` is the indeterminate outcome (timeout, transport error,
/// bad status) that warrants another try; after exhaustion the `None` is
/// handed to the caller, who decides whether that is fatal.
pub async fn with_retries<T, F, Fut>(max_attempts: usize, mut attempt: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for _ in 0..max_attempts {
        if let Some(value) = attempt().await {
            return Some(value);
        }
    }
    None
}
