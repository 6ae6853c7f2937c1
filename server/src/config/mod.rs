use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_AUDIT_PAGE_LIMIT: usize = 20;

/// Largest audit page a caller may request.
pub const AUDIT_PAGE_MAX: usize = 100;

pub struct Config {
    pub bind_addr: SocketAddr,
    pub seed_demo_data: bool,
    pub audit_page_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let is_production = env::var("RUST_ENV")
            .map(|v| v.to_lowercase() == "production")
            .unwrap_or(false);

        let default_addr = SocketAddr::from(([0, 0, 0, 0], 3001));
        let bind_addr = parse_var("BIND_ADDR", DEFAULT_BIND_ADDR).unwrap_or(default_addr);
        let seed_demo_data = parse_var("SEED_DEMO_DATA", if is_production { "false" } else { "true" })
            .unwrap_or(!is_production);
        let audit_page_limit = parse_var("AUDIT_PAGE_LIMIT", "20")
            .unwrap_or(DEFAULT_AUDIT_PAGE_LIMIT)
            .clamp(1, AUDIT_PAGE_MAX);

        Self {
            bind_addr,
            seed_demo_data,
            audit_page_limit,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: &str) -> Option<T> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Config: invalid value '{}' for {}, using default", raw, key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        std::env::set_var("CAMPUS_TEST_LIMIT", "many");
        assert_eq!(parse_var::<usize>("CAMPUS_TEST_LIMIT", "20"), None);
        std::env::remove_var("CAMPUS_TEST_LIMIT");
        assert_eq!(parse_var::<usize>("CAMPUS_TEST_LIMIT", "20"), Some(20));
    }

    #[test]
    fn test_default_bind_addr_is_valid() {
        assert!(DEFAULT_BIND_ADDR.parse::<SocketAddr>().is_ok());
    }
}
