//! API path templates and `:name` placeholder expansion.

use crate::utils::error::{PlanningError, Result};
use crate::utils::validation::validate_url;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::OnceLock;
use url::Url;

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const AUTH_REFRESH: &str = "/auth/refresh";

pub const HORSE_RIDERS: &str = "/horses/:id/riders";
pub const RIDER_HORSES: &str = "/riders/:id/horses";
pub const RIDER_PACKAGES: &str = "/riders/:id/packages";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApiResource {
    Lessons,
    Horses,
    Riders,
    Packages,
    Pairings,
    Templates,
}

impl ApiResource {
    pub fn list(self) -> &'static str {
        match self {
            ApiResource::Lessons => "/lessons",
            ApiResource::Horses => "/horses",
            ApiResource::Riders => "/riders",
            ApiResource::Packages => "/packages",
            ApiResource::Pairings => "/pairings",
            ApiResource::Templates => "/templates",
        }
    }

    pub fn create(self) -> &'static str {
        self.list()
    }

    pub fn get(self) -> &'static str {
        match self {
            ApiResource::Lessons => "/lessons/:id",
            ApiResource::Horses => "/horses/:id",
            ApiResource::Riders => "/riders/:id",
            ApiResource::Packages => "/packages/:id",
            ApiResource::Pairings => "/pairings/:id",
            ApiResource::Templates => "/templates/:id",
        }
    }

    pub fn update(self) -> &'static str {
        self.get()
    }

    pub fn delete(self) -> &'static str {
        self.get()
    }

    /// Item path with `:id` filled in.
    pub fn item_path(self, id: impl Display) -> String {
        build_endpoint(self.get(), [("id", id)])
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("valid placeholder regex")
    })
}

/// Replaces the first `:key` of `template` for each `(key, value)` in
/// iteration order.
///
/// Each key is substituted once; keys without a placeholder are ignored and
/// placeholders without a key stay as they are. When one key is a prefix of
/// another (`:id` vs `:idType`) the result depends on the order of `params`.
pub fn build_endpoint<I, K, V>(template: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut endpoint = template.to_string();

    for (key, value) in params {
        let placeholder = format!(":{}", key.as_ref());
        if let Some(start) = endpoint.find(&placeholder) {
            let value = value.to_string();
            endpoint.replace_range(start..start + placeholder.len(), &value);
            tracing::trace!("📡 Replaced {} with {}", placeholder, value);
        }
    }

    let unresolved = unresolved_placeholders(&endpoint);
    if !unresolved.is_empty() {
        tracing::debug!("📡 Unresolved parameters in {}: {:?}", endpoint, unresolved);
    }

    endpoint
}

/// [`build_endpoint`] over a JSON object. Strings are inserted raw and arrays
/// as their comma-joined items (`[1, 2]` gives `1,2`); objects are inserted as
/// their JSON text.
pub fn build_endpoint_json(
    template: &str,
    params: &serde_json::Map<String, serde_json::Value>,
) -> String {
    build_endpoint(
        template,
        params.iter().map(|(key, value)| (key, json_param_text(value))),
    )
}

fn json_param_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::Null => String::new(),
                other => json_param_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        _ => value.to_string().trim_matches('"').to_string(),
    }
}

/// Names of `:name` placeholders still present in `path`, in order.
pub fn unresolved_placeholders(path: &str) -> Vec<String> {
    placeholder_pattern()
        .captures_iter(path)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Appends an expanded path to the API base URL, keeping any base path prefix.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url> {
    let base = validate_url("api.base_url", base_url)?;
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    Url::parse(&joined).map_err(|e| PlanningError::InvalidUrlError {
        url: joined.clone(),
        reason: e.to_string(),
    })
}
