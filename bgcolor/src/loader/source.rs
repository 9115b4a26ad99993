use std::{convert::Infallible, fmt, fs, path::PathBuf, str::FromStr, time::Duration};

use super::LoadError;

const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Where the image bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    LocalPath(PathBuf),
    RemoteUrl(String),
}

impl Source {
    /// Anything starting with `http://` or `https://`, in any letter case, is a URL.
    /// Everything else is a path.
    pub fn parse(source: &str) -> Self {
        let is_remote = REMOTE_SCHEMES.iter().any(|scheme| {
            source
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });

        if is_remote {
            Source::RemoteUrl(source.to_owned())
        } else {
            Source::LocalPath(source.into())
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::RemoteUrl(_))
    }

    /// Reads the whole file, or performs exactly one GET request. The timeout only
    /// applies to remote sources.
    pub fn fetch(&self, timeout: Duration) -> Result<Vec<u8>, LoadError> {
        let bytes = match self {
            Source::LocalPath(path) => fs::read(path).map_err(|source| LoadError::NotFound {
                path: path.clone(),
                source,
            })?,
            Source::RemoteUrl(url) => fetch_remote(url, timeout)?,
        };
        log::debug!("read {} bytes from {self}", bytes.len());
        Ok(bytes)
    }
}

fn fetch_remote(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
    let network_failed = |source: reqwest::Error| LoadError::NetworkFailed {
        url: url.to_owned(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(network_failed)?;

    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(network_failed)?;
    log::debug!("GET {url}: {}", response.status());

    let body = response.bytes().map_err(network_failed)?;
    Ok(body.to_vec())
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::LocalPath(path) => write!(f, "{}", path.display()),
            Source::RemoteUrl(url) => write!(f, "{url}"),
        }
    }
}
