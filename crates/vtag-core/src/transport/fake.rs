//! In-memory transport for tests.
//!
//! Replies are registered per `(method, url)` and served in order; the last reply of a route
//! keeps being served once the queue is down to one entry. Every request is recorded.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiRequest, Method, Transport, TransportError};

type Reply = Result<Value, TransportError>;

#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), Vec<Reply>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, method: Method, url: impl Into<String>, body: Value) -> Self {
        self.push(method, url.into(), Ok(body));
        self
    }

    pub(crate) fn fail(self, method: Method, url: impl Into<String>, err: TransportError) -> Self {
        self.push(method, url.into(), Err(err));
        self
    }

    /// Queue `other`'s replies behind the ones already registered here.
    pub(crate) fn merge(self, other: FakeTransport) -> Self {
        let extra = other.routes.into_inner().unwrap();
        {
            let mut routes = self.routes.lock().unwrap();
            for (key, replies) in extra {
                routes.entry(key).or_default().extend(replies);
            }
        }
        self
    }

    fn push(&self, method: Method, url: String, reply: Reply) {
        let mut routes = self.routes.lock().unwrap();
        routes.entry((method, url)).or_default().push(reply);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, method: Method, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let key = (request.method, request.url.clone());
        self.requests.lock().unwrap().push(request);

        let mut routes = self.routes.lock().unwrap();
        let Some(queue) = routes.get_mut(&key) else {
            return Err(TransportError::Status {
                url: key.1,
                status: 404,
            });
        };
        if queue.len() > 1 {
            queue.remove(0)
        } else {
            queue[0].clone()
        }
    }
}
