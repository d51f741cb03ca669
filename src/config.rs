use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use std::{convert::Infallible, env, fmt, str::FromStr};
use tracing::info;

/// The region every table lives in.
pub const US_EAST_TWO_REGION: &str = "us-east-2";

/// The dynamodb-local container reachable from the local docker network.
pub const LOCAL_DOCKER_ENDPOINT: &str = "http://dynamodb-local:8000";

/// The environment variable read by [`Environment::from_env`].
pub const ENV_VAR: &str = "ENV";

const LOCAL_ENV: &str = "local";

/// Where the application runs, which decides the DynamoDB endpoint and credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Development against dynamodb-local with hard-coded credentials.
    Local,
    /// Any deployed stage. Uses the default credential chain and the regional endpoint.
    Deployed,
}

impl Environment {
    /// Read the environment from the `ENV` variable, falling back to
    /// [`Environment::Deployed`] when it is unset.
    pub fn from_env() -> Self {
        env::var(ENV_VAR)
            .map(|val| Self::from(val.as_str()))
            .unwrap_or(Self::Deployed)
    }

    /// The endpoint override for this environment, if any.
    pub fn endpoint_url(&self) -> Option<&'static str> {
        match self {
            Self::Local => Some(LOCAL_DOCKER_ENDPOINT),
            Self::Deployed => None,
        }
    }
}

impl From<&str> for Environment {
    fn from(val: &str) -> Self {
        if val == LOCAL_ENV {
            Self::Local
        } else {
            Self::Deployed
        }
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "{LOCAL_ENV}"),
            Self::Deployed => write!(f, "deployed"),
        }
    }
}

/// Load the AWS SDK configuration for the environment.
pub async fn load_sdk_config(env: Environment) -> SdkConfig {
    info!("loading aws config for {env} environment");

    let loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::from_static(US_EAST_TWO_REGION));

    match env {
        Environment::Local => {
            // values are irrelevant for dynamodb-local
            let creds = Credentials::new("dummy", "dummy", Some("dummy".into()), None, "local");
            loader.credentials_provider(creds).load().await
        }
        Environment::Deployed => loader.load().await,
    }
}
