use log::LevelFilter;
use serial_test::serial;
use zendesk_support_requests::api::pagination::next_page_after;
use zendesk_support_requests::{
    Authenticator as _, Config, HttpRequest, OAuthAuthenticator, PostsVotesRequestBuilder,
    ZendeskSupportRequestBuilder as _,
};

use crate::authenticator;
use crate::test_utils::{env, http, MockEndpointBuilder, TestManager};

const FIRST_PAGE: &str = r#"{
    "votes": [{"id": 1, "user_id": 7, "value": 1, "item_id": 42, "item_type": "Post"}],
    "meta": {"has_more": true, "after_cursor": "eyJvIjoiaWQiLCJ2IjoiYVFFPSJ9", "before_cursor": null}
}"#;

const LAST_PAGE: &str = r#"{
    "votes": [{"id": 2, "user_id": 8, "value": -1, "item_id": 42, "item_type": "Post"}],
    "meta": {"has_more": false, "after_cursor": null, "before_cursor": "eyJvIjoiaWQiLCJ2IjoiYWdFPSJ9"}
}"#;

#[test]
fn posts_votes_request_reaches_mock() {
    let auth = authenticator();
    let manager = TestManager::new();
    let request = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_config(&manager.config())
        .with_start_time("2024-01-01T00:00:00Z")
        .unwrap()
        .with_page_size(100)
        .build()
        .unwrap();

    let manager = manager.mock_endpoint(
        MockEndpointBuilder::for_request(&request)
            .with_response_body(LAST_PAGE)
            .expect(1),
    );

    let response = http::send(&request).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(next_page_after(&response.body).unwrap(), None);
    manager.assert_mock_endpoints();
}

#[test]
fn posts_votes_follows_cursor() {
    let auth = authenticator();
    let manager = TestManager::new();
    let first = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .with_page_size(1)
        .build()
        .unwrap();
    let second = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .with_page_size(1)
        .with_page_after("eyJvIjoiaWQiLCJ2IjoiYVFFPSJ9")
        .build()
        .unwrap();

    let manager = manager
        .mock_endpoint(
            MockEndpointBuilder::for_request(&first)
                .with_response_body(FIRST_PAGE)
                .expect(1),
        )
        .mock_endpoint(
            MockEndpointBuilder::for_request(&second)
                .with_response_body(LAST_PAGE)
                .expect(1),
        );

    let response = http::send(&first).unwrap();
    let cursor = next_page_after(&response.body).unwrap();
    assert_eq!(cursor.as_deref(), Some("eyJvIjoiaWQiLCJ2IjoiYVFFPSJ9"));

    // The cursor read from the first page yields the second request.
    let next = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .with_page_size(1)
        .with_page_after(cursor.unwrap_or_default())
        .build()
        .unwrap();
    assert_eq!(next, second);

    let response = http::send(&next).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(next_page_after(&response.body).unwrap(), None);
    manager.assert_mock_endpoints();
}

#[test]
fn posts_votes_other_page_size_is_not_matched() {
    let auth = authenticator();
    let manager = TestManager::new();
    let expected = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .with_page_size(100)
        .build()
        .unwrap();
    let actual = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .with_page_size(10)
        .build()
        .unwrap();

    let manager = manager.mock_endpoint(
        MockEndpointBuilder::for_request(&expected)
            .with_response_body(LAST_PAGE)
            .expect(0),
    );

    assert!(!expected.matches(&actual));
    // mockito answers unmatched requests with 501
    assert_eq!(http::send(&actual).unwrap().status, 501);
    manager.assert_mock_endpoints();
}

#[test]
fn posts_votes_wrong_credentials_are_not_matched() {
    let auth = authenticator();
    let other = OAuthAuthenticator::new("someone-elses-token");
    let manager = TestManager::new();
    let expected = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .build()
        .unwrap();
    let actual = PostsVotesRequestBuilder::posts_votes_endpoint(&other, 42)
        .with_api_url(manager.server_url())
        .build()
        .unwrap();

    let manager = manager.mock_endpoint(
        MockEndpointBuilder::for_request(&expected)
            .with_status(200)
            .expect(0),
    );

    assert_eq!(http::send(&actual).unwrap().status, 501);
    manager.assert_mock_endpoints();
}

#[test]
fn posts_votes_any_query_params() {
    let auth = authenticator();
    let manager = TestManager::new();
    let expected = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .build()
        .unwrap()
        .with_any_query_params();
    let actual = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 42)
        .with_api_url(manager.server_url())
        .with_start_time("2024-01-01")
        .unwrap()
        .with_page_after("abc")
        .build()
        .unwrap();

    let manager = manager.mock_endpoint(
        MockEndpointBuilder::for_request(&expected)
            .with_response_body(LAST_PAGE)
            .expect(1),
    );

    assert!(expected.matches(&actual));
    assert_eq!(http::send(&actual).unwrap().status, 200);
    manager.assert_mock_endpoints();
}

#[test]
#[serial]
fn posts_votes_config_from_env() {
    let auth = authenticator();
    let manager = TestManager::new();
    env::set(&manager.server_url());
    let config = Config::from_env().unwrap();
    env::clear();
    assert_eq!(config.log_level(), LevelFilter::Debug);

    let request = PostsVotesRequestBuilder::posts_votes_endpoint(&auth, 7)
        .with_config(&config)
        .build()
        .unwrap();
    assert!(request.full_url().starts_with(&manager.server_url()));

    let manager = manager.mock_endpoint(
        MockEndpointBuilder::for_request(&request)
            .with_response_body(LAST_PAGE)
            .expect(1),
    );

    let response = http::send(&request).unwrap();
    assert_eq!(response.status, 200);

    // The URL as sent, read back into a descriptor, satisfies the expectation.
    let received = HttpRequest::from_url(&request.full_url())
        .unwrap()
        .with_header("Authorization", &auth.client_access_token());
    assert!(request.matches(&received));
    manager.assert_mock_endpoints();
}
