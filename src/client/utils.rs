//! Helpers for building request paths and url-encoded bodies.

use crate::error::{PidmanError, Result};
use crate::protocol::paths;
use crate::types::{NewDomain, NewPid, PidSearch, PidType};
use url::form_urlencoded;

/// Domain collection path: `{prefix}/domains/`.
pub fn domains_path(prefix: &str) -> String {
    format!("{}/{}/", prefix, paths::DOMAINS)
}

/// Single domain path: `{prefix}/domains/{id}/`.
pub fn domain_path(prefix: &str, id: u64) -> String {
    format!("{}/{}/{}/", prefix, paths::DOMAINS, id)
}

/// Pid search path: `{prefix}/pids/?{query}`. The `?` is always present.
pub fn search_path(prefix: &str, query: &str) -> String {
    format!("{}/{}/?{}", prefix, paths::PIDS, query)
}

/// Pid collection path: `{prefix}/{type}/`.
pub fn pid_collection_path(prefix: &str, pid_type: PidType) -> String {
    format!("{}/{}/", prefix, pid_type)
}

/// Percent-encode one path segment. Everything but unreserved characters is
/// escaped, so `/`, `?` and `#` stay inside the segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Single pid path, without trailing slash: `{prefix}/{type}/{noid}`.
pub fn pid_path(prefix: &str, pid_type: PidType, noid: &str) -> String {
    format!("{}/{}/{}", prefix, pid_type, encode_segment(noid))
}

/// Target path: `{prefix}/{type}/{noid}/{qualifier}`. An empty qualifier
/// addresses the unqualified target and leaves a trailing slash.
pub fn target_path(prefix: &str, pid_type: PidType, noid: &str, qualifier: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        prefix,
        pid_type,
        encode_segment(noid),
        encode_segment(qualifier)
    )
}

/// Fail with [`PidmanError::MissingArgument`] if `value` is empty.
pub fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PidmanError::MissingArgument(name));
    }
    Ok(())
}

/// Form body for a new domain. Only supplied fields are encoded.
pub fn encode_new_domain(domain: &NewDomain) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());
    form.append_pair("name", &domain.name);
    if let Some(policy) = &domain.policy {
        form.append_pair("policy", policy);
    }
    if let Some(parent) = &domain.parent {
        form.append_pair("parent", parent);
    }
    form.finish()
}

/// Form body for a new pid. Only supplied fields are encoded.
pub fn encode_new_pid(pid: &NewPid) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());
    form.append_pair("domain", &pid.domain);
    form.append_pair("target_uri", &pid.target_uri);

    let optional = [
        ("name", &pid.name),
        ("external_system_id", &pid.external_system),
        ("external_system_key", &pid.external_system_key),
        ("policy", &pid.policy),
        ("proxy", &pid.proxy),
        ("qualifier", &pid.qualifier),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            form.append_pair(key, value);
        }
    }
    form.finish()
}

/// Query string for a pid search. Empty when no filter is set.
///
/// Empty strings and zero page/count values are not filters and are skipped.
pub fn encode_search(search: &PidSearch) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());

    let text = [
        ("pid", &search.pid),
        ("type", &search.pid_type),
        ("target", &search.target),
        ("domain", &search.domain),
    ];
    for (key, value) in text {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            form.append_pair(key, value);
        }
    }

    let numbers = [("page", search.page), ("count", search.count)];
    for (key, value) in numbers {
        if let Some(value) = value.filter(|v| *v != 0) {
            form.append_pair(key, &value.to_string());
        }
    }
    form.finish()
}
