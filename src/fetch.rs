use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;

use crate::error::{Error, Result};

pub const DEFAULT_URL: &str = "http://pallergabor.uw.hu/androidblog/dalvik_opcodes.html";

const TIMEOUT: Duration = Duration::from_secs(10);

/// Where the opcode page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub fn load(&self) -> Result<String> {
        match self {
            Source::Url(url) => fetch(url),
            Source::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One GET, no retries. Non-2xx responses are errors.
pub fn fetch(url: &str) -> Result<String> {
    let network_err = |source: Box<dyn std::error::Error + Send + Sync>| Error::Network {
        url: url.to_string(),
        source,
    };

    debug!("fetching {url}");
    let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
    let response = agent
        .get(url)
        .call()
        .map_err(|e| network_err(Box::new(e)))?;
    debug!("{url}: HTTP {}", response.status());

    let html = response
        .into_string()
        .map_err(|e| network_err(Box::new(e)))?;
    debug!("read {} bytes", html.len());
    Ok(html)
}

pub fn read_file(path: &Path) -> Result<String> {
    debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
