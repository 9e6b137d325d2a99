use axum::extract::State;
use std::fmt::Write as _;
use std::net::IpAddr;

use crate::{error::Result, AppState};

/// Plain-text diagnostics: hostname, non-loopback IPv4 addresses, and the
/// configuration file as it currently exists on disk.
#[axum::debug_handler]
pub async fn server_config(State(state): State<AppState>) -> Result<String> {
    let hostname = hostname::get()?;

    let mut out = String::new();
    let _ = writeln!(out, "Hostname: {}", hostname.to_string_lossy());

    for iface in if_addrs::get_if_addrs()? {
        if let IpAddr::V4(ip) = iface.ip() {
            if !ip.is_loopback() {
                let _ = writeln!(out, "IP Address: {}", ip);
            }
        }
    }

    let raw = tokio::fs::read_to_string(&state.config_path).await?;
    let _ = write!(out, "\nConfig File:\n{}\n", raw);

    Ok(out)
}
