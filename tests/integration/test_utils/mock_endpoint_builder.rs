use mockito::{Matcher, Mock, ServerGuard};
use zendesk_support_requests::HttpRequest;

/// Builder for a mock endpoint answering a request descriptor.
///
/// The mock matches the descriptor's path, query params and headers. It is
/// only created once the builder is handed to `TestManager::mock_endpoint()`.
pub struct MockEndpointBuilder {
    /// Function which takes a mockito::ServerGuard and builds the configured mock
    /// on that server.
    builder: Box<dyn FnOnce(&mut ServerGuard) -> Mock>,
}

impl MockEndpointBuilder {
    /// Create a GET endpoint for the given request descriptor.
    pub fn for_request(request: &HttpRequest) -> Self {
        let path = request.path().to_owned();
        let query = query_matcher(request);
        let headers: Vec<(String, String)> = request
            .headers()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            builder: Box::new(move |server| {
                let mock = server
                    .mock("GET", path.as_str())
                    .match_query(query)
                    .with_header("content-type", "application/json");
                headers
                    .into_iter()
                    .fold(mock, |mock, (key, value)| {
                        mock.match_header(key, value.as_str())
                    })
            }),
        }
    }

    /// Set the status code of the mock endpoint.
    /// The default status code (if this method is not called) is 200.
    pub fn with_status(mut self, status: usize) -> Self {
        self.builder = Box::new(move |server| (self.builder)(server).with_status(status));
        self
    }

    /// Set the response body of the mock endpoint.
    pub fn with_response_body<T>(mut self, body: T) -> Self
    where
        T: AsRef<[u8]> + 'static,
    {
        self.builder = Box::new(|server| (self.builder)(server).with_body(body));
        self
    }

    /// Expect the mock endpoint to be hit exactly `hits` times.
    ///
    /// This expectation is only checked when the created mock is asserted.
    pub fn expect(mut self, hits: usize) -> Self {
        self.builder = Box::new(move |server| (self.builder)(server).expect(hits));
        self
    }

    /// Create and return the mock endpoint on the given server.
    pub(super) fn create(self, server: &mut ServerGuard) -> Mock {
        (self.builder)(server).create()
    }
}

fn query_matcher(request: &HttpRequest) -> Matcher {
    if request.accepts_any_query_params() {
        Matcher::Any
    } else if request.query_params().is_empty() {
        Matcher::Missing
    } else {
        Matcher::AllOf(
            request
                .query_params()
                .iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.clone(), value.to_string()))
                .collect(),
        )
    }
}
