//! Configuration and the data source shared by every screen.

use std::rc::Rc;
use std::time::Duration;

use common::config::DashboardConfig;
use common::data_source::{Delay, MockDataSource};
use gloo_net::http::Request;
use log::{info, warn};

const CONFIG_ENDPOINT: &str = "/api/config";

/// Simulated latency backed by browser timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

pub type Source = MockDataSource<TimerDelay>;

#[derive(Clone)]
pub struct Services {
    pub config: Rc<DashboardConfig>,
    pub source: Rc<Source>,
}

impl Services {
    pub fn new(config: DashboardConfig) -> Self {
        let source = Source::new(TimerDelay, &config);
        Self {
            config: Rc::new(config),
            source: Rc::new(source),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.source, &other.source)
    }
}

/// Fetches the dashboard configuration from the host, falling back to the
/// defaults when it is unreachable or invalid.
pub async fn load_config() -> DashboardConfig {
    match fetch_config().await {
        Ok(config) => {
            info!("dashboard configuration loaded from {}", CONFIG_ENDPOINT);
            config
        }
        Err(reason) => {
            warn!("using default dashboard configuration: {}", reason);
            DashboardConfig::default()
        }
    }
}

async fn fetch_config() -> Result<DashboardConfig, String> {
    let response = Request::get(CONFIG_ENDPOINT)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("{} answered {}", CONFIG_ENDPOINT, response.status()));
    }
    let body = response.text().await.map_err(|err| err.to_string())?;
    let config: DashboardConfig = serde_json::from_str(&body).map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}
