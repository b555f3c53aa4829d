use clap::Parser;
use page_features::Analyzer;
use serde::Serialize;
use std::process::ExitCode;

mod args;
use args::{Args, SourceArg, convert_source};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if args.source == SourceArg::Browser {
        ::log::info!("Browser acquisition requires a WebDriver server (e.g., ChromeDriver)");
    }

    let mut analyzer = Analyzer::new()
        .with_timeout(args.timeout)
        .with_settle_ms(args.settle_ms);
    if let Some(webdriver_url) = &args.webdriver_url {
        analyzer = analyzer.with_webdriver_url(webdriver_url.clone());
    }
    if let Some(path) = &args.config {
        analyzer = match analyzer.with_config_file(path) {
            Ok(analyzer) => analyzer,
            Err(e) => {
                ::log::error!("Failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        };
    }

    let start_time = std::time::Instant::now();
    let page = convert_source(args.source, &args.url);

    let output = match &args.landing_url {
        Some(landing_url) => {
            let landing_page = convert_source(args.source, landing_url);
            analyzer
                .analyze_pair(&page, &landing_page)
                .await
                .map(|pair| to_json(&pair, args.pretty))
        }
        None => analyzer
            .analyze(&page)
            .await
            .map(|record| to_json(&record, args.pretty)),
    };

    match output {
        Ok(Ok(json)) => {
            println!("{}", json);
            ::log::info!(
                "Extraction complete in {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            ::log::error!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            ::log::error!("Failed to analyze {}: {}", args.url, e);
            ExitCode::FAILURE
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
