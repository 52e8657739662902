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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the authentication
//! credentials, or the retry configuration of some methods. The client
//! libraries use a generic builder type to provide such functionality.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use gapic_gax::client_builder::examples;
//! # use gapic_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use gapic_gax::client_builder::examples;
//! # use gapic_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::call_settings::{RetryOverride, RetrySettings};
use crate::credentials::Credentials;
use crate::error::rpc::Code;
use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client configuration could not be loaded.
    pub fn is_config(&self) -> bool {
        matches!(&self.0, ErrorKind::Config(_))
    }

    /// If true, the client could not initialize the transport.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn config(source: crate::client_config::Error) -> Self {
        Self(ErrorKind::Config(source))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not load the client configuration")]
    Config(#[source] crate::client_config::Error),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use gapic_gax::client_builder::examples;
/// # use gapic_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://private.googleapis.com")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    /// Setting the `GAPIC_RUST_LOGGING` environment variable to `true` has
    /// the same effect.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// ```
    /// # use gapic_gax::client_builder::examples;
    /// # use gapic_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use gapic_gax::credentials::Credentials;
    /// let client = Client::builder()
    ///     .with_credentials(Credentials::from_access_token("ya29.test-only"))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.credentials = Some(v.into());
        self
    }

    /// Sets the timeout for methods that do not configure one.
    pub fn with_default_timeout(mut self, v: Duration) -> Self {
        self.config.default_timeout = Some(v);
        self
    }

    /// Replaces the retry settings of `method` for all calls made by the
    /// client.
    ///
    /// ```
    /// # use gapic_gax::client_builder::examples;
    /// # use gapic_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use gapic_gax::call_settings::{BackoffSettings, RetrySettings};
    /// use gapic_gax::error::rpc::Code;
    /// let client = Client::builder()
    ///     .with_retry("GetThing", RetrySettings::new([Code::Unavailable], BackoffSettings::default()))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry<M: Into<String>>(mut self, method: M, settings: RetrySettings) -> Self {
        self.config
            .retry_overrides
            .insert(method.into(), RetryOverride::Replace(settings));
        self
    }

    /// Disables retries for `method` for all calls made by the client.
    pub fn without_retry<M: Into<String>>(mut self, method: M) -> Self {
        self.config
            .retry_overrides
            .insert(method.into(), RetryOverride::Disable);
        self
    }

    /// Maps a status code name used in the client configuration to `code`.
    ///
    /// Names are resolved with these mappings first, then with the canonical
    /// names such as `UNAVAILABLE`.
    pub fn with_retryable_code_name<N: Into<String>>(mut self, name: N, code: Code) -> Self {
        self.config.retryable_code_names.insert(name.into(), code);
        self
    }

    /// Identifies the application in the `x-goog-api-client` header.
    pub fn with_application<N: Into<String>, V: Into<String>>(
        mut self,
        name: N,
        version: V,
    ) -> Self {
        self.config.application = Some((name.into(), version.into()));
        self
    }

    /// Sends requests using a custom transport.
    ///
    /// The endpoint is ignored when a custom transport is configured.
    pub fn with_transport<T: Transport + 'static>(mut self, v: T) -> Self {
        self.config.transport = Some(Arc::new(v));
        self
    }
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::*;
    use crate::api_callable::{ApiCallable, CallDescriptors, ClientState, create_api_call};
    use crate::api_header::XGoogApiClient;
    use crate::call_settings::CallSettings;
    use crate::transport::MethodDescriptor;

    /// The timeout for methods without a configured timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    const LOGGING_VAR: &str = "GAPIC_RUST_LOGGING";

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub credentials: Option<Credentials>,
        pub tracing: bool,
        pub default_timeout: Option<Duration>,
        pub retry_overrides: HashMap<String, RetryOverride>,
        pub retryable_code_names: HashMap<String, Code>,
        pub application: Option<(String, String)>,
        pub transport: Option<Arc<dyn Transport>>,
    }

    impl ClientConfig {
        /// Returns true if tracing is enabled, either in the configuration or
        /// via the environment.
        pub fn tracing_enabled(&self) -> bool {
            if self.tracing {
                return true;
            }
            std::env::var(LOGGING_VAR)
                .map(|v| v == "true")
                .unwrap_or(false)
        }
    }

    /// The state shared by all the methods of a generated client.
    #[derive(Debug)]
    pub struct ClientRuntime {
        transport: Arc<dyn Transport>,
        settings: HashMap<String, CallSettings>,
        default_timeout: Duration,
        descriptors: CallDescriptors,
        credentials: Credentials,
    }

    impl ClientRuntime {
        /// Loads the call settings of `service` from `client_config` and
        /// creates the transport.
        pub fn new(
            config: ClientConfig,
            service: &str,
            client_config: &str,
            default_endpoint: &str,
            api_client: &XGoogApiClient,
        ) -> Result<Self> {
            let tracing = config.tracing_enabled();
            let default_timeout = config.default_timeout.unwrap_or(DEFAULT_TIMEOUT);
            let settings = crate::client_config::load(
                service,
                client_config,
                &config.retry_overrides,
                &config.retryable_code_names,
                default_timeout,
            )
            .map_err(Error::config)?;
            let app = config
                .application
                .as_ref()
                .map(|(n, v)| (n.as_str(), v.as_str()));
            let api_client_header = api_client.to_header(app).map_err(Error::transport)?;
            let transport = match config.transport {
                Some(t) => t,
                None => default_transport(config.endpoint.as_deref().unwrap_or(default_endpoint))?,
            };
            if tracing {
                tracing::info!(
                    service,
                    methods = settings.len(),
                    "client initialized: {transport:?}"
                );
            }
            Ok(Self {
                transport,
                settings,
                default_timeout,
                descriptors: CallDescriptors {
                    api_client_header,
                    state: ClientState::new(),
                    tracing,
                },
                credentials: config.credentials.unwrap_or_default(),
            })
        }

        /// Creates the callable for `method`.
        ///
        /// Methods missing from the client configuration get the default
        /// timeout and no retries.
        pub fn callable<Req, Resp>(
            &self,
            method: &'static MethodDescriptor,
        ) -> ApiCallable<Req, Resp> {
            let settings = self
                .settings
                .get(method.name)
                .cloned()
                .unwrap_or_else(|| CallSettings::new(self.default_timeout));
            create_api_call(
                self.transport.clone(),
                method,
                settings,
                self.descriptors.clone(),
            )
        }

        /// The credentials used by the client.
        pub fn credentials(&self) -> &Credentials {
            &self.credentials
        }

        /// The closed flag and in-flight count shared by all methods.
        pub fn state(&self) -> &Arc<ClientState> {
            &self.descriptors.state
        }
    }

    #[cfg(feature = "http-transport")]
    fn default_transport(endpoint: &str) -> Result<Arc<dyn Transport>> {
        Ok(Arc::new(crate::http_client::HttpTransport::new(endpoint)))
    }

    #[cfg(not(feature = "http-transport"))]
    fn default_transport(endpoint: &str) -> Result<Arc<dyn Transport>> {
        Err(Error::transport(format!(
            "no transport configured for {endpoint}, enable the `http-transport` feature or use `with_transport()`"
        )))
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    use super::Result;
    use super::internal::ClientConfig;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(ClientConfig);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: ClientConfig) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::call_settings::{BackoffSettings, RetryOverride, RetrySettings};
        use crate::error::rpc::Code;
        use std::time::Duration;

        #[tokio::test]
        async fn build_default() -> anyhow::Result<()> {
            let client = Client::builder().build().await?;
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert!(config.credentials.is_none(), "{config:?}");
            assert!(!config.tracing);
            assert!(config.default_timeout.is_none(), "{config:?}");
            assert!(config.retry_overrides.is_empty(), "{config:?}");
            assert!(config.application.is_none(), "{config:?}");
            assert!(config.transport.is_none(), "{config:?}");
            Ok(())
        }

        #[tokio::test]
        async fn endpoint() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .build()
                .await?;
            assert_eq!(client.0.endpoint.as_deref(), Some("http://example.com"));
            Ok(())
        }

        #[tokio::test]
        async fn tracing() -> anyhow::Result<()> {
            let client = Client::builder().with_tracing().build().await?;
            assert!(client.0.tracing);
            assert!(client.0.tracing_enabled());
            Ok(())
        }

        #[tokio::test]
        async fn credentials() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_credentials(crate::credentials::Credentials::from_access_token("test"))
                .build()
                .await?;
            assert!(client.0.credentials.is_some());
            Ok(())
        }

        #[tokio::test]
        async fn retry_overrides() -> anyhow::Result<()> {
            let retry = RetrySettings::new([Code::Aborted], BackoffSettings::default());
            let client = Client::builder()
                .with_retry("Get", retry.clone())
                .without_retry("Create")
                .with_default_timeout(Duration::from_secs(5))
                .build()
                .await?;
            let config = client.0;
            assert_eq!(config.retry_overrides.get("Get"), Some(&RetryOverride::Replace(retry)));
            assert_eq!(config.retry_overrides.get("Create"), Some(&RetryOverride::Disable));
            assert_eq!(config.default_timeout, Some(Duration::from_secs(5)));
            Ok(())
        }

        #[tokio::test]
        async fn retryable_code_names() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_retryable_code_name("TRANSIENT", Code::Unavailable)
                .build()
                .await?;
            assert_eq!(
                client.0.retryable_code_names.get("TRANSIENT"),
                Some(&Code::Unavailable)
            );
            Ok(())
        }

        #[tokio::test]
        async fn application() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_application("my-app", "1.2.3")
                .build()
                .await?;
            assert_eq!(
                client.0.application,
                Some(("my-app".to_string(), "1.2.3".to_string()))
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::api_header::{GAPIC, XGoogApiClient};
    use crate::transport::{AttemptContext, HttpRule, MethodDescriptor};
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use std::error::Error as _;

    const SERVICE: &str = "google.test.v1.TestService";
    const CONFIG: &str = r#"{"interfaces": {"google.test.v1.TestService": {
        "retry_codes": {"idempotent": ["UNAVAILABLE"]},
        "retry_params": {"default": {
            "initial_retry_delay_millis": 100, "retry_delay_multiplier": 1.3,
            "max_retry_delay_millis": 60000, "initial_rpc_timeout_millis": 20000,
            "rpc_timeout_multiplier": 1.0, "max_rpc_timeout_millis": 20000,
            "total_timeout_millis": 600000}},
        "methods": {"GetThing": {"retry_codes_name": "idempotent", "retry_params_name": "default"}}
    }}}"#;
    const API_CLIENT: XGoogApiClient = XGoogApiClient {
        name: "gapic-test",
        version: "1.0.0",
        library_type: GAPIC,
    };

    static GET_THING: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "GetThing",
        http: HttpRule {
            verb: http::Method::GET,
            path: "/v1/{name=things/*}",
            body: None,
        },
    };

    static OTHER: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "Other",
        http: HttpRule {
            verb: http::Method::GET,
            path: "/v1/others",
            body: None,
        },
    };

    #[derive(Debug)]
    struct NoopTransport;
    #[async_trait::async_trait]
    impl Transport for NoopTransport {
        async fn invoke(
            &self,
            _method: &'static MethodDescriptor,
            _request: serde_json::Value,
            _context: AttemptContext,
        ) -> crate::Result<serde_json::Value> {
            Ok(serde_json::json!({}))
        }
    }

    #[test]
    fn error_config() {
        let source = crate::client_config::Error::MissingService("test".into());
        let error = Error::config(source);
        assert!(error.is_config(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("client configuration"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<crate::client_config::Error>());
        assert!(
            matches!(got, Some(crate::client_config::Error::MissingService(_))),
            "{error:?}"
        );
    }

    #[test]
    fn error_transport() {
        let error = Error::transport("uh-oh");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
    }

    #[test]
    #[serial]
    fn tracing_from_env() {
        let config = ClientConfig::default();
        let _env = ScopedEnv::remove("GAPIC_RUST_LOGGING");
        assert!(!config.tracing_enabled());
        let _env = ScopedEnv::set("GAPIC_RUST_LOGGING", "true");
        assert!(config.tracing_enabled());
        let _env = ScopedEnv::set("GAPIC_RUST_LOGGING", "false");
        assert!(!config.tracing_enabled());
    }

    #[test]
    #[serial]
    fn runtime() -> anyhow::Result<()> {
        let _env = ScopedEnv::remove("GAPIC_RUST_LOGGING");
        let config = ClientConfig {
            transport: Some(Arc::new(NoopTransport)),
            default_timeout: Some(Duration::from_secs(7)),
            ..Default::default()
        };
        let runtime = ClientRuntime::new(config, SERVICE, CONFIG, "https://test.googleapis.com", &API_CLIENT)?;
        let get = runtime.callable::<serde_json::Value, serde_json::Value>(&GET_THING);
        assert!(get.settings().retry().is_some(), "{get:?}");
        assert_eq!(get.settings().timeout(), Duration::from_secs(7));
        let other = runtime.callable::<serde_json::Value, serde_json::Value>(&OTHER);
        assert_eq!(other.settings(), &crate::call_settings::CallSettings::new(Duration::from_secs(7)));
        assert!(!runtime.state().is_closed());
        Ok(())
    }

    #[test]
    #[serial]
    fn runtime_retry_override() -> anyhow::Result<()> {
        let _env = ScopedEnv::remove("GAPIC_RUST_LOGGING");
        let config = ClientConfig {
            transport: Some(Arc::new(NoopTransport)),
            retry_overrides: HashMap::from([("GetThing".to_string(), RetryOverride::Disable)]),
            ..Default::default()
        };
        let runtime = ClientRuntime::new(config, SERVICE, CONFIG, "https://test.googleapis.com", &API_CLIENT)?;
        let get = runtime.callable::<serde_json::Value, serde_json::Value>(&GET_THING);
        assert!(get.settings().retry().is_none(), "{get:?}");
        assert_eq!(get.settings().timeout(), DEFAULT_TIMEOUT);
        Ok(())
    }

    #[test]
    #[serial]
    fn runtime_retryable_code_names() -> anyhow::Result<()> {
        let _env = ScopedEnv::remove("GAPIC_RUST_LOGGING");
        let config = ClientConfig {
            transport: Some(Arc::new(NoopTransport)),
            retryable_code_names: HashMap::from([("idempotent-alias".to_string(), Code::Aborted)]),
            ..Default::default()
        };
        let aliased = CONFIG.replace(r#"["UNAVAILABLE"]"#, r#"["idempotent-alias"]"#);
        let runtime = ClientRuntime::new(config, SERVICE, &aliased, "https://test.googleapis.com", &API_CLIENT)?;
        let get = runtime.callable::<serde_json::Value, serde_json::Value>(&GET_THING);
        let codes = get.settings().retry().map(|r| r.retryable_codes().clone());
        assert_eq!(codes, Some(std::collections::BTreeSet::from([Code::Aborted])));
        Ok(())
    }

    #[test]
    fn runtime_bad_config() {
        let config = ClientConfig {
            transport: Some(Arc::new(NoopTransport)),
            ..Default::default()
        };
        let err = ClientRuntime::new(config, "google.test.v1.Missing", CONFIG, "https://test.googleapis.com", &API_CLIENT)
            .unwrap_err();
        assert!(err.is_config(), "{err:?}");
    }

    #[test]
    fn runtime_bad_application() {
        let config = ClientConfig {
            transport: Some(Arc::new(NoopTransport)),
            application: Some(("bad\napp".to_string(), "1.0".to_string())),
            ..Default::default()
        };
        let err = ClientRuntime::new(config, SERVICE, CONFIG, "https://test.googleapis.com", &API_CLIENT)
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }
}
