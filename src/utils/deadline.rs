//! Optional deadlines for blocking network steps.

use std::future::Future;
use std::time::Duration;

/// Await `future`, failing with `on_elapsed()` if `limit` passes first.
/// With no limit the future is awaited for as long as it takes.
pub async fn with_deadline<F, T, E>(
    limit: Option<Duration>,
    future: F,
    on_elapsed: impl FnOnce() -> E,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match limit {
        Some(limit) => match tokio::time::timeout(limit, future).await {
            Ok(result) => result,
            Err(_) => Err(on_elapsed()),
        },
        None => future.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_limit_passes_result_through() {
        let result: Result<u8, &str> = with_deadline(None, async { Ok(7) }, || "late").await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_elapsed_limit() {
        let result: Result<u8, &str> = with_deadline(
            Some(Duration::from_millis(20)),
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(7)
            },
            || "late",
        )
        .await;
        assert_eq!(result, Err("late"));
    }
}
