//! Config-driven downstream HTTP GET.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use thiserror::Error;

use crate::aggregator::{RequestContext, ServiceResult};
use crate::config::{QuerySeparator, ServiceConfig};
use crate::services::ServiceCall;

/// Internal failure of one fetch, before normalization.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("body encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A service call backed by a single downstream HTTP GET.
///
/// The target is `base_url + path`, with `{name}` path segments filled from
/// the request's params and the query string joined per the configured
/// separator policy. An empty `base_url` keeps legacy relative paths, which
/// fail at call time and surface as error payloads.
#[derive(Debug)]
pub struct HttpServiceCall {
    name: String,
    client: reqwest::Client,
    base_url: String,
    path: String,
    query_separator: QuerySeparator,
    forward_query: bool,
    attach_body: bool,
}

impl HttpServiceCall {
    pub fn from_config(config: &ServiceConfig, client: reqwest::Client) -> Self {
        Self {
            name: config.name.clone(),
            client,
            base_url: config.base_url.clone(),
            path: config.path.clone(),
            query_separator: config.query_separator,
            forward_query: config.forward_query,
            attach_body: config.attach_body,
        }
    }

    fn target_url(&self, ctx: &RequestContext) -> String {
        let mut url = format!(
            "{}{}",
            self.base_url,
            substitute_params(&self.path, &ctx.params)
        );

        if self.forward_query {
            let query = encode_query(&ctx.query);
            if !query.is_empty() {
                match self.query_separator {
                    QuerySeparator::Bare => url.push_str(&query),
                    QuerySeparator::Delimited => {
                        url.push('?');
                        url.push_str(&query);
                    }
                }
            }
        }

        url
    }

    async fn fetch(&self, ctx: &RequestContext) -> Result<Value, CallError> {
        let url = self.target_url(ctx);

        let mut request = self
            .client
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json");

        // Legacy behavior: the body rides along even though the method is GET.
        if self.attach_body && !ctx.body.is_null() {
            request = request.body(serde_json::to_vec(&ctx.body)?);
        }

        let response = request.send().await?;
        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl ServiceCall for HttpServiceCall {
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, ctx: &RequestContext) -> ServiceResult {
        match self.fetch(ctx).await {
            Ok(value) => ServiceResult::Ok(value),
            Err(error) => {
                tracing::error!(service = %self.name, error = %error, "Downstream call failed");
                ServiceResult::Err(error.to_string())
            }
        }
    }
}

/// Fill `{name}` segments from params. A segment with no matching param
/// becomes empty; text without a closing brace is kept verbatim.
fn substitute_params(template: &str, params: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                out.push_str(params.get(key).map(String::as_str).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Percent-encoded `k=v&k2=v2` form, empty map → empty string.
fn encode_query(query: &HashMap<String, String>) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.iter())
        .finish()
}
