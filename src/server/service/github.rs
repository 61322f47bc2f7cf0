//! Latest ACARS client release from GitHub, used by the download page and the client updater.

use dioxus_logger::tracing;
use reqwest::{header, StatusCode};
use serde::Deserialize;

use crate::{
    model::acars::{ReleaseAssetDto, ReleaseDto},
    server::{error::AppError, util::format::format_bytes},
};

pub const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "flightdeck";

#[derive(Deserialize)]
struct GithubRelease {
    tag_name: String,
    name: Option<String>,
    body: Option<String>,
    published_at: Option<String>,
    html_url: String,
    #[serde(default)]
    assets: Vec<GithubAsset>,
}

#[derive(Deserialize)]
struct GithubAsset {
    name: String,
    browser_download_url: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    download_count: u64,
}

pub struct GithubReleaseService<'a> {
    pub http_client: &'a reqwest::Client,
    pub repo: &'a str,
    pub token: Option<&'a str>,
    pub api_url: &'a str,
}

impl<'a> GithubReleaseService<'a> {
    pub fn new(http_client: &'a reqwest::Client, repo: &'a str, token: Option<&'a str>) -> Self {
        Self {
            http_client,
            repo,
            token,
            api_url: GITHUB_API_URL,
        }
    }

    /// Fetches the latest published release of the configured repository.
    ///
    /// A token GitHub refuses is dropped and the request retried anonymously.
    ///
    /// # Returns
    /// - `Ok(Some(ReleaseDto))` - Latest release with its installer and zip assets
    /// - `Ok(None)` - Repository has no published release
    /// - `Err(AppError)` - GitHub request failed
    pub async fn latest(&self) -> Result<Option<ReleaseDto>, AppError> {
        let mut response = self.request(self.token).await?;

        if self.token.is_some()
            && matches!(
                response.status(),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
            )
        {
            tracing::warn!(
                "GitHub rejected the configured token ({}), retrying without it",
                response.status()
            );
            response = self.request(None).await?;
        }

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let release = response
            .error_for_status()?
            .json::<GithubRelease>()
            .await?;

        Ok(Some(map_release(release)))
    }

    async fn request(&self, token: Option<&str>) -> Result<reqwest::Response, AppError> {
        let url = format!("{}/repos/{}/releases/latest", self.api_url, self.repo);

        let mut request = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, USER_AGENT);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        Ok(request.send().await?)
    }
}

fn map_release(release: GithubRelease) -> ReleaseDto {
    let total_downloads = release.assets.iter().map(|a| a.download_count).sum();

    let installer = release
        .assets
        .iter()
        .find(|a| a.name.ends_with("-Setup.exe") || a.name.ends_with(".msi"))
        .map(asset_dto);
    let zip = release
        .assets
        .iter()
        .find(|a| a.name.ends_with(".zip"))
        .map(asset_dto);

    ReleaseDto {
        version: release
            .tag_name
            .strip_prefix('v')
            .unwrap_or(&release.tag_name)
            .to_string(),
        name: release.name.unwrap_or_else(|| release.tag_name.clone()),
        notes: release.body.unwrap_or_default(),
        published_at: release.published_at,
        html_url: release.html_url,
        installer,
        zip,
        total_downloads,
    }
}

fn asset_dto(asset: &GithubAsset) -> ReleaseAssetDto {
    ReleaseAssetDto {
        name: asset.name.clone(),
        url: asset.browser_download_url.clone(),
        size: format_bytes(asset.size),
        download_count: asset.download_count,
    }
}
