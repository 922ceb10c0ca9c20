//! Client Configuration
//!
//! The API base URL is picked from the page's hostname: local hosts talk to
//! the development backend, anything else to production.

const DEV_API_BASE: &str = "http://localhost:5052/api";
const PROD_API_BASE: &str = "https://taskmanager-production-b30a.up.railway.app/api";

/// Base URL all gateway requests are resolved against.
pub fn api_base_url() -> &'static str {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    if is_local_host(&hostname) {
        DEV_API_BASE
    } else {
        PROD_API_BASE
    }
}

fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_use_dev_backend() {
        assert!(is_local_host("localhost"));
        assert!(is_local_host("127.0.0.1"));
        assert!(!is_local_host("taskboard.example.com"));
        assert!(!is_local_host(""));
    }
}
