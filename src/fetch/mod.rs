mod hook;

use std::{marker::PhantomData, time::Duration};

use eyre::WrapErr;
use futures::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;

pub use hook::*;

/// Something that can turn a url into a parsed body.
pub trait Fetch: Send + Sync + 'static {
    type Output: Send + 'static;

    fn fetch(&self, url: &str) -> BoxFuture<'static, eyre::Result<Self::Output>>;
}

/// GETs a url and decodes the JSON body into `T`.
pub struct HttpFetcher<T> {
    client: reqwest::Client,
    body: PhantomData<fn() -> T>,
}

impl<T> HttpFetcher<T> {
    pub fn new(timeout: Duration) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("Could not create http client")?;
        Ok(Self {
            client,
            body: PhantomData,
        })
    }
}

impl<T> Fetch for HttpFetcher<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = T;

    fn fetch(&self, url: &str) -> BoxFuture<'static, eyre::Result<T>> {
        let request = self.client.get(url);
        let url = url.to_string();
        async move {
            let response = request
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .wrap_err_with(|| format!("Request to {url} failed"))?;
            response
                .json::<T>()
                .await
                .wrap_err_with(|| format!("Could not parse response from {url}"))
        }
        .boxed()
    }
}
