//! The transport chosen at wiring time.

use std::fmt;

use super::{ClientAdapter, DefaultClient, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Which transport variant a [`Transport`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Standalone [`DefaultClient`].
    Default,
    /// [`ClientAdapter`] around a caller-supplied client.
    Adapter,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Adapter => write!(f, "adapter"),
        }
    }
}

/// One of the two transport variants, never both.
#[derive(Debug, Clone)]
pub enum Transport {
    /// No external client was supplied.
    Default(DefaultClient),
    /// An external client was supplied and is wrapped as is.
    Adapter(ClientAdapter),
}

impl Transport {
    /// Selects the adapter when `client` is present, otherwise builds the
    /// default transport.
    ///
    /// The default client is only constructed on its own branch.
    #[must_use]
    pub fn select(client: Option<reqwest::Client>) -> Self {
        client.map_or_else(
            || Self::Default(DefaultClient::new()),
            |client| Self::Adapter(ClientAdapter::new(client)),
        )
    }

    /// The held variant.
    #[must_use]
    pub const fn kind(&self) -> TransportKind {
        match self {
            Self::Default(_) => TransportKind::Default,
            Self::Adapter(_) => TransportKind::Adapter,
        }
    }

    /// The wrapped external client, for the adapter variant.
    #[must_use]
    pub const fn external_client(&self) -> Option<&reqwest::Client> {
        match self {
            Self::Default(_) => None,
            Self::Adapter(adapter) => Some(adapter.inner()),
        }
    }
}

impl From<DefaultClient> for Transport {
    fn from(client: DefaultClient) -> Self {
        Self::Default(client)
    }
}

impl From<ClientAdapter> for Transport {
    fn from(adapter: ClientAdapter) -> Self {
        Self::Adapter(adapter)
    }
}

impl HttpClient for Transport {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        match self {
            Self::Default(client) => client.request(req).await,
            Self::Adapter(adapter) => adapter.request(req).await,
        }
    }
}
