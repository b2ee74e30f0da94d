//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones: referential integrity
//! between routes and services, and the key-collision invariant (no service
//! invoked twice on one route). Pure function; returns all errors, not just
//! the first.

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("duplicate service name '{0}'")]
    DuplicateService(String),

    #[error("duplicate route path '{0}'")]
    DuplicateRoute(String),

    #[error("route path '{0}' must start with '/'")]
    RoutePathNotAbsolute(String),

    #[error("route '{0}' has no services")]
    EmptyRoute(String),

    #[error("route '{0}' references unknown service '{1}'")]
    UnknownService(String, String),

    #[error("route '{0}' invokes service '{1}' more than once")]
    RepeatedService(String, String),
}

/// Validate a parsed configuration, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let mut service_names = HashSet::new();
    for service in &config.services {
        if !service_names.insert(service.name.as_str()) {
            errors.push(ValidationError::DuplicateService(service.name.clone()));
        }
    }

    let mut route_paths = HashSet::new();
    for route in &config.routes {
        if !route_paths.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.path.clone()));
        }

        if !route.path.starts_with('/') {
            errors.push(ValidationError::RoutePathNotAbsolute(route.path.clone()));
        }

        if route.services.is_empty() {
            errors.push(ValidationError::EmptyRoute(route.path.clone()));
        }

        let mut seen = HashSet::new();
        for name in &route.services {
            if !service_names.contains(name.as_str()) {
                errors.push(ValidationError::UnknownService(
                    route.path.clone(),
                    name.clone(),
                ));
            }
            if !seen.insert(name.as_str()) {
                errors.push(ValidationError::RepeatedService(
                    route.path.clone(),
                    name.clone(),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{RouteConfig, ServiceConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.routes.push(RouteConfig {
            path: "broken".into(),
            services: vec![],
        });

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidBindAddress(
            "not-an-address".into()
        )));
        assert!(errors.contains(&ValidationError::RoutePathNotAbsolute("broken".into())));
        assert!(errors.contains(&ValidationError::EmptyRoute("broken".into())));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_rejects_unknown_service_reference() {
        let mut config = GatewayConfig::default();
        config.routes.push(RouteConfig {
            path: "/extra".into(),
            services: vec!["ghost".into()],
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownService(
                "/extra".into(),
                "ghost".into()
            )]
        );
    }

    #[test]
    fn test_rejects_repeated_service_on_one_route() {
        let mut config = GatewayConfig::default();
        config.routes.push(RouteConfig {
            path: "/extra".into(),
            services: vec!["getTodosService".into(), "getTodosService".into()],
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RepeatedService(
                "/extra".into(),
                "getTodosService".into()
            )]
        );
    }

    #[test]
    fn test_rejects_duplicate_names_and_paths() {
        let mut config = GatewayConfig::default();
        config
            .services
            .push(ServiceConfig::remote("getTodosService", "http://x", "/y"));
        config.routes.push(RouteConfig {
            path: "/todo/todos".into(),
            services: vec!["getPostsService".into()],
        });

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateService(
            "getTodosService".into()
        )));
        assert!(errors.contains(&ValidationError::DuplicateRoute("/todo/todos".into())));
    }
}
