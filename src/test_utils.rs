// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the workspace API server.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request
/// method and path, and records every request it serves.
///
/// Responses registered repeatedly for the same (method, path) are consumed
/// in registration order; the last one keeps being served, so a sequence of
/// `on_get` calls models remote state changing between polls.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), VecDeque<(u16, String)>>>>,
    requests: Arc<Mutex<Vec<(String, String, Vec<u8>)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.register("GET", path, status, body);
        self
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.register("POST", path, status, body);
        self
    }

    fn register(&self, method: &str, path: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Every (method, path) served so far, in order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(method, path, _)| (method.clone(), path.clone()))
            .collect()
    }

    /// How often the exact (method, path) was requested
    pub fn request_count(&self, method: &str, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, p, _)| m == method && p == path)
            .count()
    }

    /// The recorded bodies of requests to the exact (method, path)
    pub fn request_bodies(&self, method: &str, path: &str) -> Vec<Vec<u8>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, p, _)| m == method && p == path)
            .map(|(_, _, body)| body.clone())
            .collect()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(queue) = responses.get_mut(&(method.to_string(), path.to_string())) {
            return take_response(queue);
        }

        // Fall back to prefix match for collection paths
        for ((m, p), queue) in responses.iter_mut() {
            if m == method && path.starts_with(p.as_str()) {
                return take_response(queue);
            }
        }

        None
    }
}

/// Consume queued responses in order, keeping the last one around
fn take_response(queue: &mut VecDeque<(u16, String)>) -> Option<(u16, String)> {
    if queue.len() > 1 {
        queue.pop_front()
    } else {
        queue.front().cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let this = self.clone();

        Box::pin(async move {
            let body = match req.into_body().collect().await {
                Ok(collected) => collected.to_bytes().to_vec(),
                Err(_) => Vec::new(),
            };
            this.requests
                .lock()
                .unwrap()
                .push((method.clone(), path.clone(), body));

            match this.find_response(&method, &path) {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create a mock SyncTarget JSON object; a None path on an export reference
/// models an export local to the location workspace
pub fn sync_target_json(name: &str, exports: Vec<(Option<&str>, &str)>) -> String {
    let refs: Vec<serde_json::Value> = exports
        .into_iter()
        .map(|(path, export_name)| match path {
            Some(path) => serde_json::json!({
                "workspace": {"path": path, "exportName": export_name}
            }),
            None => serde_json::json!({
                "workspace": {"exportName": export_name}
            }),
        })
        .collect();

    serde_json::json!({
        "apiVersion": "workload.kcp.dev/v1alpha1",
        "kind": "SyncTarget",
        "metadata": {"name": name},
        "spec": {"supportedAPIExports": refs}
    })
    .to_string()
}

pub fn sync_target_list_json(items: Vec<String>) -> String {
    list_json("SyncTargetList", items)
}

/// Create a mock APIBinding JSON object
pub fn api_binding_json(name: &str, path: &str, export_name: &str, phase: Option<&str>) -> String {
    let mut object = serde_json::json!({
        "apiVersion": "apis.kcp.dev/v1alpha1",
        "kind": "APIBinding",
        "metadata": {"name": name},
        "spec": {
            "reference": {
                "workspace": {"path": path, "exportName": export_name}
            }
        }
    });
    if let Some(phase) = phase {
        object["status"] = serde_json::json!({"phase": phase});
    }
    object.to_string()
}

pub fn api_binding_list_json(items: Vec<String>) -> String {
    list_json("APIBindingList", items)
}

/// Create a mock Placement JSON object with or without a True Ready condition
pub fn placement_json(name: &str, ready: bool) -> String {
    let status = if ready {
        serde_json::json!({"conditions": [{"type": "Ready", "status": "True"}]})
    } else {
        serde_json::json!({"conditions": [{"type": "Ready", "status": "False", "message": "no ready synctarget"}]})
    };

    serde_json::json!({
        "apiVersion": "scheduling.kcp.dev/v1alpha1",
        "kind": "Placement",
        "metadata": {"name": name},
        "spec": {
            "locationSelectors": [{}],
            "locationWorkspace": "root:locations",
            "locationResource": {
                "group": "workload.kcp.dev",
                "version": "v1alpha1",
                "resource": "synctargets"
            }
        },
        "status": status
    })
    .to_string()
}

/// Create a 409 AlreadyExists status response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" already exists", resource, name),
        "reason": "AlreadyExists",
        "code": 409
    })
    .to_string()
}

fn list_json(kind: &str, items: Vec<String>) -> String {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|item| serde_json::from_str(item).unwrap())
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": kind,
        "metadata": {"resourceVersion": "1"},
        "items": items
    })
    .to_string()
}
