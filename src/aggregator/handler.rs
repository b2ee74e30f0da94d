//! Route-level aggregation.

use std::sync::Arc;

use thiserror::Error;

use crate::aggregator::types::{AggregatedResponse, RequestContext};
use crate::services::ServiceCall;

/// Failure of the orchestration itself.
///
/// Distinct from downstream failures, which never surface here; a service
/// call always resolves to a `ServiceResult`.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("duplicate response key: {0}")]
    DuplicateKey(String),
}

/// Invoke each call in turn and merge the results under their service names.
///
/// Downstream failures land in the merged object as `{"error": msg}` values;
/// only a mis-wired route (duplicate key) makes this function fail.
pub async fn aggregate(
    calls: &[Arc<dyn ServiceCall>],
    ctx: &RequestContext,
) -> Result<AggregatedResponse, AggregateError> {
    let mut response = AggregatedResponse::default();
    for call in calls {
        let result = call.call(ctx).await;
        response.insert(call.name(), result)?;
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::types::ServiceResult;
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Debug)]
    struct CannedCall {
        name: &'static str,
        result: ServiceResult,
    }

    #[async_trait]
    impl ServiceCall for CannedCall {
        fn name(&self) -> &str {
            self.name
        }

        async fn call(&self, _ctx: &RequestContext) -> ServiceResult {
            self.result.clone()
        }
    }

    fn canned(name: &'static str, result: ServiceResult) -> Arc<dyn ServiceCall> {
        Arc::new(CannedCall { name, result })
    }

    #[tokio::test]
    async fn test_merges_one_key_per_call() {
        let calls = vec![
            canned("getTodosService", ServiceResult::Ok(json!([1, 2]))),
            canned("getPostsService", ServiceResult::Err("boom".into())),
        ];

        let merged = aggregate(&calls, &RequestContext::default()).await.unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({
                "getTodosService": [1, 2],
                "getPostsService": {"error": "boom"},
            })
        );
    }

    #[tokio::test]
    async fn test_failed_call_does_not_abort_the_route() {
        let calls = vec![
            canned("a", ServiceResult::Err("down".into())),
            canned("b", ServiceResult::Ok(json!("fine"))),
        ];

        let merged = aggregate(&calls, &RequestContext::default()).await.unwrap();
        assert!(merged.get("a").unwrap().is_err());
        assert_eq!(merged.get("b"), Some(&ServiceResult::Ok(json!("fine"))));
    }

    #[tokio::test]
    async fn test_duplicate_service_name_is_an_orchestration_error() {
        let calls = vec![
            canned("svc", ServiceResult::Ok(json!(1))),
            canned("svc", ServiceResult::Ok(json!(2))),
        ];

        let err = aggregate(&calls, &RequestContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AggregateError::DuplicateKey(ref name) if name == "svc"));
    }
}
