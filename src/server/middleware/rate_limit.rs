//! Fixed-window request rate limiting

use crate::config::RateLimitConfig;
use crate::server::middleware::helpers::client_ip;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{ResponseError, web};
use dashmap::DashMap;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Per-client request counter over fixed windows
pub struct RateLimiter {
    /// Map of client identifier -> current window
    windows: DashMap<String, RequestWindow>,
    /// Requests allowed in one window
    max_requests: u32,
    /// Window length
    window: Duration,
    /// Total rejected requests
    rejected_count: AtomicU64,
}

struct RequestWindow {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
            rejected_count: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.requests, Duration::from_secs(config.window_secs))
    }

    /// Count one request for `client_id`
    ///
    /// Returns the seconds left in the window when the client is over its budget.
    pub fn check(&self, client_id: &str) -> Result<(), u64> {
        let now = Instant::now();

        let mut entry = self
            .windows
            .entry(client_id.to_string())
            .or_insert_with(|| RequestWindow {
                started: now,
                count: 0,
            });

        let window = entry.value_mut();
        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        if window.count >= self.max_requests {
            self.rejected_count.fetch_add(1, Ordering::Relaxed);
            let remaining = self
                .window
                .saturating_sub(now.duration_since(window.started))
                .as_secs();
            return Err(remaining.max(1));
        }

        window.count += 1;
        Ok(())
    }

    pub fn rejected_requests(&self) -> u64 {
        self.rejected_count.load(Ordering::Relaxed)
    }

    /// Drop windows that have already expired
    pub fn cleanup_expired(&self) {
        let now = Instant::now();
        self.windows
            .retain(|_, window| now.duration_since(window.started) < self.window);
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::from_config(&RateLimitConfig::default())
    }
}

/// Rate limit middleware for Actix-web
///
/// Reads the shared [`RateLimiter`] from [`AppState`].
pub struct RateLimitMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService { service }))
    }
}

/// Service implementation for rate limit middleware
pub struct RateLimitMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let limiter = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.rate_limiter.clone());

        if let Some(limiter) = limiter {
            let client_id = client_ip(&req);
            if let Err(wait_seconds) = limiter.check(&client_id) {
                warn!(
                    "Rate limit exceeded for {} on {}, retry in {}s",
                    client_id,
                    req.path(),
                    wait_seconds
                );
                let response = GatewayError::rate_limit("Too many requests").error_response();
                return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
            }
        } else {
            debug!("No application state, skipping rate limiting");
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
