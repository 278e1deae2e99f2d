// Token cache behavior against a mock credential-exchange endpoint:
//  - a valid cached token short-circuits the network entirely
//  - crossing the expiry-minus-margin boundary triggers exactly one refresh
//  - a rejected exchange surfaces as an auth failure and caches nothing

#[cfg(test)]
mod test {

    use httpmock::prelude::*;
    use serde_json::json;

    use crate::client::auth::TokenProvider;
    use crate::client::error::ApiError;
    use crate::tests::common::{build_reqwest_client, test_feishu_config, TOKEN_PATH};

    #[tokio::test]
    async fn token_reused_within_validity_window() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(TOKEN_PATH)
                    .json_body(json!({"app_id": "cli_test_app", "app_secret": "test_secret"}));
                then.status(200).json_body(json!({
                    "code": 0, "msg": "ok",
                    "tenant_access_token": "t-first", "expire": 7200
                }));
            })
            .await;

        let provider =
            TokenProvider::new(build_reqwest_client(), test_feishu_config(&server.base_url()));

        assert_eq!(provider.get_token().await.unwrap(), "t-first");
        assert_eq!(provider.get_token().await.unwrap(), "t-first");

        // the second call must not hit the exchange endpoint
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn refresh_once_past_expiry_minus_margin() {
        let server = MockServer::start_async().await;
        // expire == safety margin, so the token is expired the moment it
        // is cached and the next call must refresh
        let mut first = server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(200).json_body(json!({
                    "code": 0, "msg": "ok",
                    "tenant_access_token": "t-short", "expire": 300
                }));
            })
            .await;

        let provider =
            TokenProvider::new(build_reqwest_client(), test_feishu_config(&server.base_url()));

        assert_eq!(provider.get_token().await.unwrap(), "t-short");
        first.assert_hits_async(1).await;
        first.delete_async().await;

        let second = server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(200).json_body(json!({
                    "code": 0, "msg": "ok",
                    "tenant_access_token": "t-renewed", "expire": 7200
                }));
            })
            .await;

        assert_eq!(provider.get_token().await.unwrap(), "t-renewed");
        second.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn rejected_exchange_surfaces_auth_error_and_caches_nothing() {
        let server = MockServer::start_async().await;
        let rejected = server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(200)
                    .json_body(json!({"code": 99991663, "msg": "app not found"}));
            })
            .await;

        let provider =
            TokenProvider::new(build_reqwest_client(), test_feishu_config(&server.base_url()));

        match provider.get_token().await {
            Err(ApiError::Auth(msg)) => assert_eq!(msg, "app not found"),
            other => panic!("expected auth error, got {other:?}"),
        }

        // the failure was not cached: the next call goes back upstream
        let _ = provider.get_token().await;
        rejected.assert_hits_async(2).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_expired_callers_both_refresh() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(200).json_body(json!({
                    "code": 0, "msg": "ok",
                    "tenant_access_token": "t-dup", "expire": 7200
                }));
            })
            .await;

        let provider =
            TokenProvider::new(build_reqwest_client(), test_feishu_config(&server.base_url()));

        // no single-flight guard: both callers observe the empty cache and
        // both issue an exchange call; the duplication is the accepted
        // behavior, not a bug
        let (a, b) = tokio::join!(provider.get_token(), provider.get_token());
        assert_eq!(a.unwrap(), "t-dup");
        assert_eq!(b.unwrap(), "t-dup");
        mock.assert_hits_async(2).await;
    }
}
