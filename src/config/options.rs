// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub years_per_page: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            years_per_page: YEARS_PER_PAGE,
        }
    }
}

/// The three standings tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Historique,
    Qualifications,
    DeuxiemePilote,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [
        ViewKind::Historique,
        ViewKind::Qualifications,
        ViewKind::DeuxiemePilote,
    ];

    /// Yearly views are scoped to one season and driven by the year selector.
    pub fn is_yearly(self) -> bool {
        !matches!(self, ViewKind::Historique)
    }

    /// Command-line spelling, same as the site's tab ids.
    pub fn slug(self) -> &'static str {
        match self {
            ViewKind::Historique => "historique",
            ViewKind::Qualifications => "qualifications",
            ViewKind::DeuxiemePilote => "deuxieme-pilote",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        ViewKind::ALL.into_iter().find(|k| k.slug() == s)
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Where CSV text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOptions {
    /// Files below a local directory (the published site root).
    Dir(PathBuf),
    /// Plain HTTP/1.0, `prefix` is prepended to every relative path.
    Http { host: String, port: u16, prefix: String },
}

impl Default for SourceOptions {
    fn default() -> Self {
        SourceOptions::Dir(PathBuf::from(DEFAULT_DATA_DIR))
    }
}

impl SourceOptions {
    /// Parse `host` or `host:port`.
    pub fn http(host_port: &str, prefix: &str) -> Result<Self, String> {
        let (host, port) = match host_port.rsplit_once(':') {
            Some((h, p)) => {
                let port = p.parse::<u16>().map_err(|_| format!("Invalid port: {}", p))?;
                (h, port)
            }
            None => (host_port, DEFAULT_HTTP_PORT),
        };
        if host.is_empty() {
            return Err(s!("Missing host"));
        }

        // Normalize to "/prefix/" so joins never double or drop a slash
        let mut prefix = join!("/", prefix.trim_matches('/'));
        if prefix.len() > 1 {
            prefix.push('/');
        }

        Ok(SourceOptions::Http { host: s!(host), port, prefix })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_source_parses_port_and_prefix() {
        let src = SourceOptions::http("example.org:8080", "f1/").unwrap();
        assert_eq!(
            src,
            SourceOptions::Http { host: s!("example.org"), port: 8080, prefix: s!("/f1/") }
        );

        let src = SourceOptions::http("example.org", "").unwrap();
        assert_eq!(
            src,
            SourceOptions::Http { host: s!("example.org"), port: 80, prefix: s!("/") }
        );

        assert!(SourceOptions::http("example.org:http", "").is_err());
        assert!(SourceOptions::http(":80", "").is_err());
    }

    #[test]
    fn view_slugs_round_trip() {
        for k in ViewKind::ALL {
            assert_eq!(ViewKind::from_slug(k.slug()), Some(k));
        }
        assert_eq!(ViewKind::from_slug("Deuxieme-Pilote"), Some(ViewKind::DeuxiemePilote));
        assert_eq!(ViewKind::from_slug("teams"), None);
    }
}
