// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Converts list RPCs into streams.

use crate::Result;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a list RPC response that can be iterated with a [Paginator].
pub trait PageableResponse {
    /// The type of the items in each page.
    type PageItem: Send;

    /// The token for the next page, empty on the last page.
    fn next_page_token(&self) -> String;

    /// Consumes the page and returns its items.
    fn into_items(self) -> Vec<Self::PageItem>;
}

/// An adapter that converts list RPCs as defined by
/// [AIP-4233](https://google.aip.dev/client-libraries/4233) into a
/// [futures::Stream] of pages.
///
/// The stream ends after the first page with an empty `next_page_token`, or
/// after the first error.
#[pin_project]
pub struct Paginator<T> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T> Paginator<T>
where
    T: PageableResponse + Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch each page.
    pub fn new<F, E>(seed_token: String, execute: E) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
        E: Fn(String) -> F + Clone + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        let state = if next.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Flattens the pages into a stream of items.
    pub fn items(self) -> impl Stream<Item = Result<T::PageItem>> + Send {
        self.flat_map(|page| {
            let items: Vec<Result<T::PageItem>> = match page {
                Ok(page) => page.into_items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        })
    }
}

impl<T> Stream for Paginator<T> {
    type Item = Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}
