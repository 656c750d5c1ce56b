use std::{fmt, future::Future};

use futures::{Stream, StreamExt as _, TryStreamExt as _, stream};
use serde::Deserialize;

/// One page of a list response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// The URL of the next page. Unset on the last page.
    #[serde(default)]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// The link to the next page, treating an empty link as the end.
    pub fn next(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|l| !l.is_empty())
    }
}

impl<T> fmt::Debug for Page<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("value", &self.value)
            .field("next_link", &self.next_link)
            .finish()
    }
}

struct Paginator<F, E, T>
where
    F: FnMut(&str) -> Result<Page<T>, E>,
{
    fetch_next: F,
    batch: <Vec<T> as IntoIterator>::IntoIter,
    next_link: Option<String>,
    off: usize,
    limit: Option<usize>,
}

impl<F, E, T> Iterator for Paginator<F, E, T>
where
    F: FnMut(&str) -> Result<Page<T>, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.limit.is_some_and(|l| self.off >= l) {
            return None;
        }

        // Skip over empty pages, which the service may return mid-listing.
        loop {
            if let Some(v) = self.batch.next() {
                self.off += 1;
                return Some(Ok(v));
            }

            let link = self.next_link.take()?;
            let page = match (self.fetch_next)(&link) {
                Ok(v) => v,
                Err(e) => return Some(Err(e)),
            };

            self.next_link = page.next().map(str::to_owned);
            self.batch = page.value.into_iter();
        }
    }
}

/// Iterate over the items of `first` and every page after it, fetching
/// each following page lazily by calling `fetch_next` with its link.
pub fn paginate<F, E, T>(
    first: Page<T>,
    limit: Option<usize>,
    fetch_next: F,
) -> impl Iterator<Item = Result<T, E>>
where
    F: FnMut(&str) -> Result<Page<T>, E>,
{
    let next_link = first.next().map(str::to_owned);

    Paginator {
        fetch_next,
        batch: first.value.into_iter(),
        next_link,
        off: 0,
        limit,
    }
}

/// Where a paged stream picks up next.
pub(crate) enum Cursor<R> {
    /// The first request, not yet sent.
    Start(R),
    /// The link to the next page.
    Link(String),
}

/// Stream the items of every page, starting with the request `first`.
/// `fetch` receives either the first request or the link to a later page.
/// Nothing is fetched until the stream is polled.
pub(crate) fn paginate_stream<R, F, Fut, E, T>(
    first: R,
    limit: Option<usize>,
    fetch: F,
) -> impl Stream<Item = Result<T, E>>
where
    F: FnMut(Cursor<R>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let state = Some(Cursor::Start(first));

    stream::try_unfold((state, fetch), |(state, mut fetch)| async move {
        let Some(cursor) = state else {
            return Ok(None);
        };

        let page = match fetch(cursor).await {
            Ok(page) => page,
            Err(e) => return Err(e),
        };

        let next = page.next().map(|link| Cursor::Link(link.to_owned()));

        let items = stream::iter(page.value.into_iter().map(Ok::<T, E>));
        Ok(Some((items, (next, fetch))))
    })
    .try_flatten()
    .take(limit.unwrap_or(usize::MAX))
}
