use crate::config::AcquisitionConfig;
use crate::document::RawPage;
use crate::error::AcquisitionError;
use crate::utils::calculate_timeout;
use fantoccini::{Client, ClientBuilder};
use tokio::time::{Duration, sleep, timeout};

/// Copies layout sizes onto each image so they survive into the page source.
/// Hidden and unloaded images are stamped 0x0 and later dropped as icons.
const STAMP_RENDERED_SIZES: &str = r#"
var images = document.querySelectorAll('img');
images.forEach(function (img) {
    img.setAttribute('data-rendered-width', String(img.width || 0));
    img.setAttribute('data-rendered-height', String(img.height || 0));
});
return images.length;
"#;

/// Renders `url` in a WebDriver-controlled browser and returns the resulting DOM
pub async fn acquire(url: &str, config: &AcquisitionConfig) -> Result<RawPage, AcquisitionError> {
    let client = connect_to_webdriver(&config.webdriver_url).await?;

    let limit = calculate_timeout(config.timeout_secs, url.len());
    let result = match timeout(limit, render(&client, url, config.settle_ms)).await {
        Ok(result) => result,
        Err(_) => {
            ::log::error!("Timeout rendering: {}", url);
            Err(AcquisitionError::Timeout {
                url: url.to_string(),
                seconds: limit.as_secs_f64(),
            })
        }
    };

    // Always release the session, whatever happened above
    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }

    result
}

/// Navigates, lets the page settle, then reads back the final URL and source
async fn render(client: &Client, url: &str, settle_ms: u64) -> Result<RawPage, AcquisitionError> {
    let browser_error = |context: &'static str| {
        move |source: fantoccini::error::CmdError| AcquisitionError::Browser {
            context,
            url: url.to_string(),
            source,
        }
    };

    ::log::info!("Navigating to {}", url);
    client.goto(url).await.map_err(browser_error("accessing"))?;

    // Give client-side rendering a chance to finish
    sleep(Duration::from_millis(settle_ms)).await;

    match client.execute(STAMP_RENDERED_SIZES, Vec::new()).await {
        Ok(count) => ::log::debug!("Stamped rendered sizes on {} images", count),
        Err(e) => ::log::warn!("Could not stamp rendered image sizes on {}: {}", url, e),
    }

    let final_url = client
        .current_url()
        .await
        .map_err(browser_error("reading the URL of"))?;
    let html = client
        .source()
        .await
        .map_err(browser_error("getting source for"))?;

    if final_url.as_str() != url {
        ::log::info!("{} resolved to {}", url, final_url);
    }
    Ok(RawPage::new(final_url, html))
}

/// Connects to the configured WebDriver instance, then to common local defaults
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client, AcquisitionError> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // geckodriver / Selenium default
        "http://127.0.0.1:4444", // Try with IP instead of localhost
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(AcquisitionError::WebDriverUnavailable {
        webdriver_url: webdriver_url.to_string(),
    })
}
