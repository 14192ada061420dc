use crate::Result;

use dorm_core::{
    async_trait,
    driver::{Connection, Driver},
    Error,
};
use std::borrow::Cow;
use url::Url;

/// Selects a driver from the scheme of a connection URL.
#[derive(Debug)]
pub struct Connect {
    url: Url,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;
        Ok(Self { url })
    }
}

#[async_trait]
impl Driver for Connect {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.url.as_str())
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        match self.url.scheme() {
            "sqlite" => connect_sqlite(&self.url).await,
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={}",
                self.url
            ))),
        }
    }
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    dorm_driver_sqlite::Sqlite::new(url.as_str())?.connect().await
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}
