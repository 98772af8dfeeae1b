//! Stream-style adapters over the single-shot operations.
//!
//! Every `*_stream` method on [`AppleMusicClient`](crate::AppleMusicClient)
//! wraps the matching `async fn`, so both surfaces share the same caching
//! and ordering behavior. The stream yields exactly one item (the value or
//! the error) and then completes. Nothing runs until the stream is polled.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};

/// Wraps a single-shot future as a one-item stream.
///
/// ```rust
/// use apple_music_api::catalog::single;
/// use futures::StreamExt;
///
/// let items: Vec<Result<u32, String>> =
///     tokio_test::block_on(single(async { Ok(7) }).collect());
/// assert_eq!(items, vec![Ok(7)]);
/// ```
pub fn single<'a, T, E, F>(future: F) -> BoxStream<'a, Result<T, E>>
where
    F: Future<Output = Result<T, E>> + Send + 'a,
    T: Send + 'a,
    E: Send + 'a,
{
    stream::once(future).boxed()
}
