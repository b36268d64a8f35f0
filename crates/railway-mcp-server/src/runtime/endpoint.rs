//! API URL newtype
//!
//! A thin wrapper around the Railway GraphQL endpoint URL, so the config can
//! carry a default without every caller knowing it.

use std::ops::Deref;

use serde::Deserialize;
use url::Url;

/// The Railway GraphQL endpoint
#[derive(Debug)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Unwrap the endpoint into its inner URL
    pub fn into_inner(self) -> Url {
        self.0
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(defaults::api_url())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let url = Url::deserialize(deserializer)?;
        Ok(Self(url))
    }
}

impl Deref for ApiUrl {
    type Target = Url;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod defaults {
    use railway_mcp_server::client::DEFAULT_API_URL;
    use url::Url;

    pub(super) fn api_url() -> Url {
        // SAFETY: DEFAULT_API_URL is a constant valid URL, checked by
        // [test::default_api_url_parses_correctly]
        #[allow(clippy::unwrap_used)]
        Url::parse(DEFAULT_API_URL).unwrap()
    }

    #[cfg(test)]
    mod test {
        use super::api_url;

        #[test]
        fn default_api_url_parses_correctly() {
            assert_eq!(api_url().host_str(), Some("backboard.railway.com"));
        }
    }
}
