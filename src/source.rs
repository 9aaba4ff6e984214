// src/source.rs
use std::{fs, io, path::Path};

use crate::config::options::SourceOptions;
use crate::core::net;
use crate::error::{LoadError, Result};

/// Fetch the text at `rel_path` (e.g. `data/2023/qualifications.csv`).
pub fn fetch_text(source: &SourceOptions, rel_path: &str) -> Result<String> {
    match source {
        SourceOptions::Dir(root) => read_local(root, rel_path),
        SourceOptions::Http { host, port, prefix } => {
            let full = join!(prefix, rel_path.trim_start_matches('/'));
            logd!("Fetch: GET http://{}:{}{}", host, port, full);
            net::http_get(host, *port, &full)
        }
    }
}

fn read_local(root: &Path, rel_path: &str) -> Result<String> {
    let path = root.join(rel_path);
    logd!("Fetch: read {}", path.display());

    let bytes = match fs::read(&path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound { path: s!(rel_path) });
        }
        Err(e) => return Err(e.into()),
    };
    String::from_utf8(bytes).map_err(|_| LoadError::Utf8 { path: s!(rel_path) })
}
