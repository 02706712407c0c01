//! Session cookies persisted between invocations.
//!
//! The server keeps the session in cookies (access and refresh token). A
//! browser holds them for us; the CLI stores them in a small text file, one
//! `name=value` per line, and replays them as a `Cookie` header.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookieJar {
    entries: BTreeMap<String, String>,
}

impl CookieJar {
    /// Parse the session file format. Blank, `#` and malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .filter(|(name, _)| !name.trim().is_empty())
            .map(|(name, value)| (name.trim().to_owned(), value.trim().to_owned()))
            .collect();
        Self { entries }
    }

    pub fn render(&self) -> String {
        self.entries.iter().map(|(name, value)| format!("{name}={value}\n")).collect()
    }

    /// Load `path`; a missing file is an empty jar.
    pub fn load(path: &Path) -> io::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Write the jar to `path`, or remove the file once the jar is empty.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if self.entries.is_empty() {
            return match std::fs::remove_file(path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
                _ => Ok(()),
            };
        }
        std::fs::write(path, self.render())
    }

    /// Apply one `Set-Cookie` header value. An empty value or an expiring
    /// `Max-Age` removes the cookie.
    pub fn absorb(&mut self, set_cookie: &str) {
        let mut parts = set_cookie.split(';');
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let value = value.trim();
        let expired = parts.filter_map(|attr| attr.split_once('=')).any(|(key, val)| {
            key.trim().eq_ignore_ascii_case("max-age") && val.trim().parse::<i64>().is_ok_and(|age| age <= 0)
        });
        if expired || value.is_empty() {
            self.entries.remove(name);
        } else {
            self.entries.insert(name.to_owned(), value.to_owned());
        }
    }

    /// Value for a `Cookie` request header, if there is anything to send.
    pub fn header(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self.entries.iter().map(|(name, value)| format!("{name}={value}")).collect();
        Some(pairs.join("; "))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
