use std::env;

/// Fraction of the subtotal charged as tax when the environment does not
/// override it via `POS_TAX_RATE`.
pub const DEFAULT_TAX_RATE: f64 = 0.10;

const DEFAULT_PAGE_LIMIT: i64 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub tax_rate: f64,
    pub page_limit: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = env::var("POS_API_URL")?;
        let tax_rate = env::var("POS_TAX_RATE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_TAX_RATE);
        let page_limit = env::var("POS_PAGE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        Ok(Self {
            api_base_url,
            tax_rate,
            page_limit,
        })
    }
}
