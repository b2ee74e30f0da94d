//! Service catalog built from configuration.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::config::ServiceConfig;
use crate::services::{HttpServiceCall, ServiceCall};

/// Failure while assembling the catalog or wiring routes to it.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("route references unknown service '{0}'")]
    UnknownService(String),
}

/// Name-indexed set of service calls, shared across all routes.
///
/// Built once at startup from the config's service table; all calls share
/// one HTTP client. Immutable afterwards.
pub struct ServiceCatalog {
    services: HashMap<String, Arc<dyn ServiceCall>>,
}

impl ServiceCatalog {
    pub fn from_config(configs: &[ServiceConfig]) -> Result<Self, BuildError> {
        // No timeout on purpose: a stalled downstream stalls the request,
        // matching the legacy deployment.
        let client = reqwest::Client::builder().build()?;

        let mut services: HashMap<String, Arc<dyn ServiceCall>> = HashMap::new();
        for config in configs {
            services.insert(
                config.name.clone(),
                Arc::new(HttpServiceCall::from_config(config, client.clone())),
            );
        }

        Ok(Self { services })
    }

    /// Look up the calls for a route, in the route's declared order.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<Arc<dyn ServiceCall>>, BuildError> {
        names
            .iter()
            .map(|name| {
                self.services
                    .get(name)
                    .cloned()
                    .ok_or_else(|| BuildError::UnknownService(name.clone()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preserves_route_order() {
        let configs = vec![
            ServiceConfig::remote("a", "http://host", "/a"),
            ServiceConfig::remote("b", "http://host", "/b"),
        ];
        let catalog = ServiceCatalog::from_config(&configs).unwrap();

        let calls = catalog
            .resolve(&["b".to_string(), "a".to_string()])
            .unwrap();
        let names: Vec<&str> = calls.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_resolve_rejects_unknown_service() {
        let catalog = ServiceCatalog::from_config(&[]).unwrap();
        let err = catalog.resolve(&["ghost".to_string()]).unwrap_err();
        assert!(matches!(err, BuildError::UnknownService(ref name) if name == "ghost"));
    }
}
