// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking HTTP client for the Azure DevOps work-item endpoints.
//!
//! One request is issued and fully awaited at a time; there is no retry,
//! no caching, and no timeout beyond transport defaults. Every failure is
//! terminal to the current command. Errors surface as
//! [`ado_core::Error::Transport`] so the core taxonomy stays in one place.

use reqwest::blocking::RequestBuilder;
use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use ado_core::{
    CommentList, Error, PatchDocument, Result, WiqlQuery, WiqlResult, WorkItem, WorkItemRef,
    WorkItemSource,
};

use crate::env;

const SERVICE_URL: &str = "https://dev.azure.com";
const API_VERSION: &str = "5.0-preview";
const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// The batch endpoint response envelope.
#[derive(Debug, Deserialize)]
struct BatchResponse {
    #[serde(default)]
    value: Vec<WorkItem>,
}

/// A client scoped to one organization/project pair.
pub struct Client {
    http: reqwest::blocking::Client,
    organization: String,
    project: String,
    token: String,
}

impl Client {
    /// Builds a client with the personal access token from the
    /// environment.
    ///
    /// A missing token short-circuits here, before any request exists.
    pub fn from_env(organization: String, project: String) -> Result<Self> {
        let token = env::pat_token().ok_or(Error::MissingToken)?;
        Self::new(organization, project, token)
    }

    pub fn new(organization: String, project: String, token: String) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Client {
            http,
            organization,
            project,
            token,
        })
    }

    /// API URL for a work-item endpoint path under the project.
    fn wit_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/_apis/wit/{}",
            SERVICE_URL, self.organization, self.project, path
        )
    }

    /// API URL of a single work item, used as a relation target.
    pub fn work_item_api_url(&self, id: u32) -> String {
        self.wit_url(&format!("workItems/{}", id))
    }

    /// Web URL for editing a work item in a browser.
    pub fn work_item_web_url(&self, id: u32) -> String {
        format!(
            "{}/{}/{}/_workitems/edit/{}",
            SERVICE_URL, self.organization, self.project, id
        )
    }

    /// Sends a request and parses the JSON body, mapping connection
    /// failures and non-success statuses to transport errors.
    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .basic_auth("", Some(&self.token))
            .query(&[("api-version", API_VERSION)])
            .send()
            .map_err(|e| Error::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::Transport(format!("response read failed: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Transport(format!("HTTP {}: {}", status, body)));
        }

        debug!(status = %status, "response received");
        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Submits a WIQL query.
    pub fn run_wiql(&self, wiql: &WiqlQuery) -> Result<WiqlResult> {
        debug!(query = %wiql.query, "running wiql query");
        self.send_json(self.http.post(self.wit_url("wiql")).json(wiql))
    }

    /// Retrieves one batch of work-item details with full expansion.
    ///
    /// Unresolvable ids are omitted per the `errorPolicy` directive rather
    /// than failing the call.
    pub fn work_items_batch(&self, ids: &[u32]) -> Result<Vec<WorkItem>> {
        let body = json!({
            "ids": ids,
            "$expand": "all",
            "errorPolicy": "omit",
        });
        let response: BatchResponse =
            self.send_json(self.http.post(self.wit_url("workitemsbatch")).json(&body))?;
        Ok(response.value)
    }

    /// Creates a work item of the given type from a patch document.
    pub fn create_work_item(&self, work_item_type: &str, doc: &PatchDocument) -> Result<WorkItem> {
        let url = self.wit_url(&format!("workitems/${}", work_item_type));
        self.send_patch(self.http.post(url), doc)
    }

    /// Applies a patch document to an existing work item.
    pub fn update_work_item(&self, id: u32, doc: &PatchDocument) -> Result<WorkItem> {
        let url = self.wit_url(&format!("workitems/{}", id));
        self.send_patch(self.http.patch(url), doc)
    }

    fn send_patch(&self, request: RequestBuilder, doc: &PatchDocument) -> Result<WorkItem> {
        let body = serde_json::to_vec(doc)?;
        self.send_json(
            request
                .header(header::CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
                .body(body),
        )
    }

    /// Fetches the comment list from an item-scoped comments URL.
    pub fn comments(&self, comments_url: &str) -> Result<CommentList> {
        self.send_json(self.http.get(comments_url))
    }
}

impl WorkItemSource for Client {
    fn run_query(&self, wiql: &WiqlQuery) -> Result<Vec<WorkItemRef>> {
        Ok(self.run_wiql(wiql)?.work_items)
    }

    fn fetch_batch(&self, ids: &[u32]) -> Result<Vec<WorkItem>> {
        self.work_items_batch(ids)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
