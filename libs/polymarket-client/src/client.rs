//! Top-level client bundling the Gamma and CLOB APIs

use crate::auth::{ApiCredentials, AuthError, WalletSigner};
use crate::clob::{self, ClobClient};
use crate::config::Config;
use crate::gamma::GammaClient;
use crate::http::{self, HttpTransport, ReqwestTransport};

/// Entry point to the Polymarket APIs
pub struct Client<G = ReqwestTransport, C = ReqwestTransport> {
    config: Config,
    gamma: GammaClient<G>,
    clob: ClobClient<C>,
}

impl Client {
    /// Build a client over reqwest transports
    ///
    /// The Gamma transport carries `api_key` as a bearer token when one is
    /// configured; the CLOB transport never does.
    pub fn new(config: Config) -> http::Result<Self> {
        let timeout = config.timeout();

        let mut gamma = ReqwestTransport::new(&config.gamma_base_url, timeout)?;
        if let Some(api_key) = &config.api_key {
            gamma = gamma.with_bearer_token(api_key);
        }
        let clob = ReqwestTransport::new(&config.clob_base_url, timeout)?;

        Ok(Self::with_transports(config, gamma, clob))
    }
}

impl<G: HttpTransport, C: HttpTransport> Client<G, C> {
    pub fn with_transports(config: Config, gamma: G, clob: C) -> Self {
        Self {
            config,
            gamma: GammaClient::new(gamma),
            clob: ClobClient::new(clob),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gamma(&self) -> &GammaClient<G> {
        &self.gamma
    }

    pub fn clob(&self) -> &ClobClient<C> {
        &self.clob
    }

    pub fn clob_mut(&mut self) -> &mut ClobClient<C> {
        &mut self.clob
    }

    /// Derive or create CLOB credentials and install them on the CLOB client
    ///
    /// Uses `private_key` when given, otherwise the configured key.
    pub async fn auth(
        &mut self,
        private_key: Option<&str>,
        nonce: u64,
    ) -> clob::Result<ApiCredentials> {
        let private_key = private_key
            .or(self.config.private_key.as_deref())
            .filter(|k| !k.is_empty())
            .ok_or(AuthError::MissingPrivateKey)?;

        let signer = WalletSigner::new(private_key, self.config.chain_id)?;
        self.clob.authenticate(signer, nonce).await
    }
}
