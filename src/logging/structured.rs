//! Request-scoped log prefixes.
//!
//! Every event line starts with the same bracketed prefix so a response
//! can be followed from shaping to error handling with one grep.

use std::fmt;

/// Prefix attached to every log line written while building a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub request_id: String,
    pub route: Option<String>,
    pub audience: Option<&'static str>,
}

impl LogContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            route: None,
            audience: None,
        }
    }

    pub fn with_route(mut self, route: &str) -> Self {
        self.route = Some(route.to_string());
        self
    }

    pub fn with_audience(mut self, audience: &'static str) -> Self {
        self.audience = Some(audience);
        self
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[request={}]", self.request_id)?;
        if let Some(route) = &self.route {
            write!(f, " [route={}]", route)?;
        }
        if let Some(audience) = self.audience {
            write!(f, " [audience={}]", audience)?;
        }
        Ok(())
    }
}

/// `info!` an `EVENT key=value ...` line behind the context prefix.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        log::info!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// `warn!` counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        log::warn!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// `debug!` counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        log::debug!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_accept_several_keys() {
        let ctx = LogContext::new("req-1");
        crate::log_debug!(ctx, "RESPONSE_SHAPED", records = 2, fields_removed = 5);
        crate::log_info!(ctx, "RESPONSE_SHAPED", audience = "admin");
        crate::log_warn!(ctx, "RESPONSE_REJECTED", error = "not a record");
    }

    #[test]
    fn test_prefix_grows_with_context() {
        let ctx = LogContext::new("req-123");
        assert_eq!(ctx.to_string(), "[request=req-123]");

        let routed = ctx.clone().with_route("/api/users");
        assert_eq!(routed.to_string(), "[request=req-123] [route=/api/users]");

        let full = routed.with_audience("admin");
        assert_eq!(
            full.to_string(),
            "[request=req-123] [route=/api/users] [audience=admin]"
        );

        assert_eq!(
            ctx.with_audience("public").to_string(),
            "[request=req-123] [audience=public]"
        );
    }
}
