//! Response context management.
//!
//! Carries the audience, environment and logging identity for one response.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::environment::{Environment, SanitizerConfig};
use crate::logging::structured::LogContext;
use crate::policy::audience::Audience;

/// Context for a single response body.
#[derive(Debug, Clone)]
pub struct ResponseContext {
    pub request_id: String,
    pub route: String,
    pub audience: Audience,
    pub environment: Environment,
    pub fallback_error_message: String,
    pub created_at: DateTime<Utc>,
}

impl ResponseContext {
    pub fn new(route: &str, audience: Audience, config: &SanitizerConfig) -> Self {
        let request_id = format!("req-{}", &Uuid::new_v4().simple().to_string()[..8]);

        Self {
            request_id,
            route: route.to_string(),
            audience,
            environment: config.environment,
            fallback_error_message: config.fallback_error_message.clone(),
            created_at: Utc::now(),
        }
    }

    /// Reuse an upstream request id instead of generating one.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = request_id.to_string();
        self
    }

    /// Milliseconds since the context was created, never negative.
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.created_at).num_milliseconds().max(0)
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.request_id)
            .with_route(&self.route)
            .with_audience(self.audience.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let ctx = ResponseContext::new("/api/users", Audience::Public, &SanitizerConfig::default());
        assert!(ctx.request_id.starts_with("req-"));
        assert_eq!(ctx.request_id.len(), 12);
        assert_eq!(ctx.environment, Environment::Development);
    }

    #[test]
    fn test_created_at_and_elapsed() {
        let before = Utc::now();
        let config = SanitizerConfig::default();
        let ctx = ResponseContext::new("/api/budget", Audience::Public, &config);
        let after = Utc::now();

        assert!(ctx.created_at >= before && ctx.created_at <= after);
        assert!(ctx.elapsed_ms() >= 0);

        let mut stale = ctx.clone();
        stale.created_at = Utc::now() - chrono::Duration::seconds(2);
        assert!(stale.elapsed_ms() >= 2_000);

        let mut future = ctx;
        future.created_at = Utc::now() + chrono::Duration::seconds(60);
        assert_eq!(future.elapsed_ms(), 0);
    }

    #[test]
    fn test_log_context() {
        let config = SanitizerConfig::default();
        let ctx = ResponseContext::new("/api/admin/users", Audience::Admin, &config)
            .with_request_id("req-upstream");
        assert_eq!(
            ctx.log_context().to_string(),
            "[request=req-upstream] [route=/api/admin/users] [audience=admin]"
        );
    }
}
