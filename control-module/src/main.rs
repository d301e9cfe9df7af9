use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod client;

use cli::{parse_command, Command, USAGE};
use client::{AnalysisRequest, ClientError, ServiceClient};

const DEFAULT_ANALYSIS_SERVICE_URL: &str = "http://0.0.0.0:8000";
const DEFAULT_MOCK_SERVICE_URL: &str = "http://0.0.0.0:8001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

fn sample_readings() -> Vec<AnalysisRequest> {
    vec![
        AnalysisRequest {
            user_id: "sample-user".to_string(),
            book_id: "sample-book-1".to_string(),
            book_title: "The Little Prince".to_string(),
            book_author: "Antoine de Saint-Exupery".to_string(),
            genre: "LITERATURE".to_string(),
            reading_content: "The fox's lesson about taming stayed with me: we become \
                responsible for what we have tamed, and what is essential is invisible to the eye."
                .to_string(),
        },
        AnalysisRequest {
            user_id: "sample-user".to_string(),
            book_id: "sample-book-2".to_string(),
            book_title: "The Rust Programming Language".to_string(),
            book_author: "Steve Klabnik, Carol Nichols".to_string(),
            genre: "TECHNICAL".to_string(),
            reading_content: "Ownership finally clicked: each value has a single owner, borrows \
                are checked at compile time, and lifetimes describe how long references stay valid."
                .to_string(),
        },
    ]
}

struct ControlModule {
    analysis: ServiceClient,
    mock: ServiceClient,
}

impl ControlModule {
    fn new() -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let analysis_url = std::env::var("ANALYSIS_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_ANALYSIS_SERVICE_URL.to_string());
        let mock_url = std::env::var("MOCK_ANALYSIS_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_MOCK_SERVICE_URL.to_string());

        Ok(Self {
            analysis: ServiceClient::new(client.clone(), "analysis-service", &analysis_url),
            mock: ServiceClient::new(client, "mock-analysis-service", &mock_url),
        })
    }

    fn services(&self) -> [&ServiceClient; 2] {
        [&self.analysis, &self.mock]
    }

    async fn wait_for_services(&self) {
        info!("Waiting for services to be ready...");

        for service in self.services() {
            while !service.is_healthy().await {
                sleep(Duration::from_secs(2)).await;
            }
            info!("{} is ready", service.name());
        }

        info!("All services are ready!");
    }

    async fn run_samples(&self) {
        let readings = sample_readings();
        info!("Sending {} sample readings to each service", readings.len());

        for reading in &readings {
            for service in self.services() {
                info!(
                    "📚 Requesting {} analysis of '{}' from {}",
                    reading.genre,
                    reading.book_title,
                    service.name()
                );
                match service.generate_analysis(reading).await {
                    Ok(content) => info!(
                        "✓ {} analysed '{}':\n{}",
                        service.name(),
                        reading.book_title,
                        content
                    ),
                    Err(e) => error!("✗ {} failed on '{}': {}", service.name(), reading.book_title, e),
                }
                sleep(Duration::from_millis(100)).await;
            }
        }

        info!("Sample run complete");
    }

    async fn continuous_mode(&self) {
        info!("Starting continuous monitoring mode...");

        loop {
            for service in self.services() {
                if service.is_healthy().await {
                    info!("{} healthy", service.name());
                } else {
                    warn!("{} unhealthy", service.name());
                }
            }
            sleep(Duration::from_secs(30)).await;
        }
    }

    async fn simulate(&self, error_type: &str, duration: Option<f64>) -> Result<String, ClientError> {
        let mut query = vec![("error_type", error_type.to_string())];
        if let Some(seconds) = duration {
            query.push(("duration", seconds.to_string()));
        }
        self.mock.admin("simulate-error", &query).await
    }

    async fn set_delay(&self, seconds: f64) -> Result<String, ClientError> {
        self.mock
            .admin("set-delay", &[("delay_seconds", seconds.to_string())])
            .await
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("control_module=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            info!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let control = match ControlModule::new() {
        Ok(control) => control,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match command {
        Command::Run => {
            control.wait_for_services().await;
            control.run_samples().await;
            Ok(())
        }
        Command::Continuous => {
            control.continuous_mode().await;
            Ok(())
        }
        Command::Simulate {
            error_type,
            duration,
        } => control.simulate(&error_type, duration).await.map(|_| ()),
        Command::Delay(seconds) => control.set_delay(seconds).await.map(|_| ()),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        std::process::exit(1);
    }
}
