#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use http::StatusCode;
use openpay_kit::{
    config::{ClientConfig, Environment},
    transport::{HttpRequest, HttpResponse, Transport, TransportError},
};
use serde_json::{Map, Value, json};

pub const MERCHANT_ID: &str = "mzdtln0bmtms6o3kck8f";
pub const PRIVATE_KEY: &str = "sk_e568c42a6c384b7ab02cd47d2e407cab";

const RESOURCES: &[&str] = &["cards", "charges", "customers", "fees", "payouts"];

pub fn config() -> ClientConfig {
    ClientConfig::builder()
        .base_url(Environment::Sandbox.base_url().unwrap())
        .merchant_id(MERCHANT_ID)
        .private_key(PRIVATE_KEY)
        .build()
}

pub fn not_found_body() -> Value {
    json!({
        "category": "request",
        "description": "The requested resource doesn't exist",
        "http_code": 404,
        "error_code": 1005,
        "request_id": "1981cdb8-19cb-4bad-8256-e95d58bc035c"
    })
}

/// An in-memory stand-in for the gateway: stores created resources per collection path and
/// serves them back with the gateway's paging and error conventions.
#[derive(Default)]
pub struct FakeGateway {
    collections: Mutex<BTreeMap<String, Vec<Value>>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = request
            .url
            .path()
            .trim_start_matches('/')
            .split('/')
            .collect();
        let Some(resource) = segments.iter().rposition(|s| RESOURCES.contains(s)) else {
            return respond(StatusCode::NOT_FOUND, &not_found_body());
        };
        let collection = segments[..=resource].join("/");
        let rest = &segments[resource + 1..];

        match (request.method.as_str(), rest) {
            ("POST", []) => self.create(&collection, request),
            ("GET", []) => self.list(&collection, request),
            ("GET", [id]) => match self.find(&collection, id) {
                Some(item) => respond(StatusCode::OK, &item),
                None => respond(StatusCode::NOT_FOUND, &not_found_body()),
            },
            ("PUT", [id]) => self.update(&collection, id, request),
            ("DELETE", [id]) => {
                let mut collections = self.collections.lock().unwrap();
                let items = collections.entry(collection).or_default();
                match items.iter().position(|item| item["id"] == *id) {
                    Some(index) => {
                        items.remove(index);
                        HttpResponse::new(StatusCode::NO_CONTENT, "")
                    }
                    None => respond(StatusCode::NOT_FOUND, &not_found_body()),
                }
            }
            ("POST", [id, "refund"]) => self.transition(&collection, id, "refunded"),
            ("POST", [id, "capture"]) => self.transition(&collection, id, "completed"),
            _ => respond(StatusCode::NOT_FOUND, &not_found_body()),
        }
    }

    fn create(&self, collection: &str, request: &HttpRequest) -> HttpResponse {
        let mut item = body_of(request);
        let id = format!("tr{:018}", self.next_id.fetch_add(1, Ordering::SeqCst));
        item.insert("id".to_string(), Value::String(id));
        item.insert("status".to_string(), json!("completed"));
        item.insert(
            "creation_date".to_string(),
            json!("2014-05-26T11:56:25-05:00"),
        );

        let item = Value::Object(item);
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(item.clone());
        respond(StatusCode::OK, &item)
    }

    fn list(&self, collection: &str, request: &HttpRequest) -> HttpResponse {
        let query: BTreeMap<String, String> = request.url.query_pairs().into_owned().collect();
        let offset = query.get("offset").and_then(|o| o.parse().ok()).unwrap_or(0);
        let limit = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(10);

        let collections = self.collections.lock().unwrap();
        let page: Vec<Value> = collections
            .get(collection)
            .map(|items| items.iter().skip(offset).take(limit).cloned().collect())
            .unwrap_or_default();
        respond(StatusCode::OK, &Value::Array(page))
    }

    fn update(&self, collection: &str, id: &str, request: &HttpRequest) -> HttpResponse {
        let mut collections = self.collections.lock().unwrap();
        let Some(item) = collections
            .get_mut(collection)
            .and_then(|items| items.iter_mut().find(|item| item["id"] == *id))
        else {
            return respond(StatusCode::NOT_FOUND, &not_found_body());
        };
        if let Value::Object(fields) = item {
            fields.extend(body_of(request));
        }
        respond(StatusCode::OK, item)
    }

    fn transition(&self, collection: &str, id: &str, status: &str) -> HttpResponse {
        let mut collections = self.collections.lock().unwrap();
        let Some(item) = collections
            .get_mut(collection)
            .and_then(|items| items.iter_mut().find(|item| item["id"] == *id))
        else {
            return respond(StatusCode::NOT_FOUND, &not_found_body());
        };
        item["status"] = json!(status);
        respond(StatusCode::OK, item)
    }

    fn find(&self, collection: &str, id: &str) -> Option<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)?
            .iter()
            .find(|item| item["id"] == *id)
            .cloned()
    }
}

impl Transport for FakeGateway {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.handle(&request))
    }
}

/// Answers every request with the same status and body.
pub struct ScriptedTransport {
    status: StatusCode,
    body: &'static str,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        ScriptedTransport {
            status,
            body,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse::new(self.status, self.body))
    }
}

/// Fails every request without a response.
pub struct FailingTransport(pub TransportError);

impl Transport for FailingTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(self.0.clone())
    }
}

/// Responds only after `delay`.
pub struct SlowTransport {
    pub delay: Duration,
}

impl Transport for SlowTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tokio::time::sleep(self.delay).await;
        Ok(HttpResponse::new(StatusCode::OK, "[]"))
    }
}

fn body_of(request: &HttpRequest) -> Map<String, Value> {
    request
        .body
        .as_ref()
        .and_then(|body| serde_json::from_slice(body).ok())
        .unwrap_or_default()
}

fn respond(status: StatusCode, body: &Value) -> HttpResponse {
    HttpResponse::new(status, serde_json::to_vec(body).unwrap())
}
