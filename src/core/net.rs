// src/core/net.rs
// HTTP/1.0 GET over TCP (std-only). HTTP/1.0 so the server closes the
// connection after the body; no chunked transfer to undo.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{LoadError, Result};

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    split_response(&buf, path)
}

/// Status check + body extraction for a raw HTTP/1.x response.
pub(crate) fn split_response(raw: &[u8], path: &str) -> Result<String> {
    let resp = String::from_utf8_lossy(raw);

    let status = resp.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    match code {
        "200" => {}
        "404" => return Err(LoadError::NotFound { path: s!(path) }),
        _ => return Err(LoadError::Http { status: s!(status), path: s!(path) }),
    }

    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| LoadError::MalformedResponse { path: s!(path) })?
        + 4;
    Ok(s!(&resp[body_idx..]))
}
