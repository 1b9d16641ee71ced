use crate::config::Config;
use crate::errors::CommandError;
use crate::platform::Platform;
use crate::versions::Version;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Something that can produce the toolchain archive for a version as a local file.
///
/// The returned path is removed when it is dropped.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    async fn fetch(&self, version: &Version) -> Result<TempPath, CommandError>;
}

pub struct HttpDownloader {
    client: Client,
    url_template: String,
    platform: Platform,
}

impl HttpDownloader {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            url_template: config.archive_url().to_string(),
            platform: Platform::current(),
        }
    }

    pub fn url(&self, version: &Version) -> String {
        self.platform.archive_url(&self.url_template, version)
    }
}

#[async_trait]
impl ArchiveSource for HttpDownloader {
    async fn fetch(&self, version: &Version) -> Result<TempPath, CommandError> {
        let url = self.url(version);
        let file_name = url.rsplit('/').next().unwrap_or("go.zip");

        let (file, path) = tempfile::Builder::new()
            .prefix(file_name)
            .tempfile()
            .map_err(CommandError::FailedToCreateTempFile)?
            .into_parts();
        let mut file = File::from_std(file);
        debug!("Downloading {} into {}", url, path.display());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(CommandError::HTTPFailed)?;
        let expected = response.content_length();

        let mut received: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(err) => {
                    // hyper reports a body cut short by the peer as a chunk error.
                    if let Some(expected) = expected.filter(|e| received < *e) {
                        debug!("Stream failed after {} bytes: {}", received, err);
                        return Err(CommandError::UnexpectedEof { received, expected });
                    }
                    return Err(CommandError::HTTPFailed(err));
                }
            };
            file.write_all(&chunk)
                .await
                .map_err(CommandError::FailedToWriteFile)?;
            received += chunk.len() as u64;
        }
        file.flush().await.map_err(CommandError::FailedToWriteFile)?;

        if let Some(expected) = expected {
            if received < expected {
                return Err(CommandError::UnexpectedEof { received, expected });
            }
        }

        debug!("Downloaded {} bytes", received);
        Ok(path)
    }
}
