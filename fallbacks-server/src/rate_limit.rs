//! Per-client request quota for template downloads.
//!
//! Each client gets `max_attempts` requests per window. The window is
//! measured from the client's last accepted request, so a client that keeps
//! retrying while blocked stays blocked only until the window has passed
//! since its last success.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::http::HeaderMap;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Stale clients are swept once the table grows past this size.
const SWEEP_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct Attempts {
    count: u32,
    last_attempt: Instant,
}

#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_attempts: u32,
    clients: Mutex<HashMap<String, Attempts>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_attempts: u32) -> Self {
        Self {
            window,
            max_attempts,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt by `client` now. Returns false when over quota.
    pub async fn check(&self, client: &str) -> bool {
        self.check_at(client, Instant::now()).await
    }

    /// Record an attempt by `client` at `now`.
    pub async fn check_at(&self, client: &str, now: Instant) -> bool {
        let mut clients = self.clients.lock().await;
        if clients.len() > SWEEP_THRESHOLD {
            let window = self.window;
            clients.retain(|_, a| now.saturating_duration_since(a.last_attempt) <= window);
        }

        match clients.get_mut(client) {
            Some(attempts) if now.saturating_duration_since(attempts.last_attempt) <= self.window => {
                if attempts.count >= self.max_attempts {
                    log::warn!("Rate limit exceeded for client {}", client);
                    return false;
                }
                attempts.count += 1;
                attempts.last_attempt = now;
                true
            }
            _ => {
                clients.insert(
                    client.to_string(),
                    Attempts {
                        count: 1,
                        last_attempt: now,
                    },
                );
                true
            }
        }
    }
}

/// Identify the caller: first `X-Forwarded-For` address, else the peer address.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match (forwarded, peer) {
        (Some(addr), _) => addr.to_string(),
        (None, Some(peer)) => peer.ip().to_string(),
        (None, None) => "unknown".to_string(),
    }
}
