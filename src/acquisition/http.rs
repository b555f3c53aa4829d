use crate::config::AcquisitionConfig;
use crate::document::RawPage;
use crate::error::AcquisitionError;
use crate::utils::calculate_timeout;

/// Fetches the static markup of `url`, following redirects
pub async fn acquire(url: &str, config: &AcquisitionConfig) -> Result<RawPage, AcquisitionError> {
    let http_error = |source: reqwest::Error| AcquisitionError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(calculate_timeout(config.timeout_secs, url.len()))
        .build()
        .map_err(http_error)?;

    ::log::info!("Fetching {}", url);
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            AcquisitionError::Timeout {
                url: url.to_string(),
                seconds: config.timeout_secs as f64,
            }
        } else {
            http_error(e)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        ::log::error!("{} answered with status {}", url, status);
        return Err(AcquisitionError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let html = response.text().await.map_err(http_error)?;
    ::log::debug!("Fetched {} bytes from {}", html.len(), final_url);

    Ok(RawPage::new(final_url, html))
}
