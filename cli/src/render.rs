//! Plain-text output for command results.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use contract::{Page, Resource, User};
use session::format::{format_size, format_timestamp};
use session::validate::ValidationErrors;

pub fn user(user: &User) -> String {
    let address = [&user.address.street, &user.address.city, &user.address.country]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = format!("{} <{}>\nid: {}\n", user.fullname, user.email, user.id);
    if !address.is_empty() {
        out.push_str(&format!("address: {address}\n"));
    }
    out
}

fn resource_line(resource: &Resource) -> String {
    let record = &resource.resource;
    format!("{}  {:<10}  {:>9}  {}", record.id, record.status.as_str(), format_size(record.size), record.name)
}

pub fn page(page: &Page<Resource>) -> String {
    if page.data.is_empty() {
        return "No videos yet.\n".to_owned();
    }
    let mut out: String = page.data.iter().map(|r| resource_line(r) + "\n").collect();
    out.push_str(&format!("page {} of {}\n", page.page, page.total_pages));
    out
}

pub fn resource(resource: &Resource) -> String {
    let record = &resource.resource;
    let mut out = format!(
        "{}\nid: {}\nstatus: {}\nsize: {}\nuploaded: {}\n",
        record.name,
        record.id,
        record.status.as_str(),
        format_size(record.size),
        format_timestamp(&record.created_at),
    );
    if let Some(url) = resource.playable_url() {
        out.push_str(&format!("media: {url}\n"));
    }
    out
}

/// Pretty-printed JSON, the `--json` rendering of any result.
pub fn json(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// One `field: message` line per failed form field.
pub fn field_errors(errors: &ValidationErrors) -> String {
    errors.iter().map(|e| format!("  {}: {}\n", e.field, e.message)).collect()
}
