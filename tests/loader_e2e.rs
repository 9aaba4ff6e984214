// tests/loader_e2e.rs
//
// Loading views from a data directory on disk, and the CLI on top.
//
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use classement::cli::{self, OutFormat};
use classement::config::options::{SourceOptions, ViewKind};
use classement::error::LoadError;
use classement::csv;
use classement::loader::{self, HistoriqueData};
use classement::source;
use classement::view::Pager;
use classement::view::{Fetch, Outcome, ViewState};

const HISTORIQUE: &str = "\
Pilote,Rang,Points,2021,2022,2023
Verstappen,1,80.0,25.0,25.0,30.0
Hamilton,3,40.0,18.0,0.0,22.0
Leclerc,2,60.0,,35.0,25.0
,9,1,1,,
";

const QUALIFS_2023: &str = "\
Pilote,Rang,Points
Verstappen,1,25
Perez,2,18
bad
";

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("classement_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(p.join("data/2023")).unwrap();
    fs::write(p.join("data/historique.csv"), HISTORIQUE).unwrap();
    fs::write(p.join("data/2023/qualifications.csv"), QUALIFS_2023).unwrap();
    p
}

#[test]
fn historique_is_filtered_sorted_and_paged() {
    let dir = tmp_dir("historique");
    let src = SourceOptions::Dir(dir);

    let data = loader::load_historique(&src).unwrap();
    assert_eq!(data.years, vec!["2021", "2022", "2023"]);
    let names: Vec<&str> = data.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["Verstappen", "Leclerc", "Hamilton"]);

    let (v, _) = ViewState::new(2).start();
    let (v, _) = v.apply(Outcome::Historique(Ok(data)));
    let t = v.current_table().unwrap();
    assert_eq!(t.header, vec!["Pilote", "Rang", "Points", "2021", "2022"]);
    assert_eq!(t.body[1], vec!["Leclerc", "2", "60", "", "35"]);
    assert_eq!(t.body[2], vec!["Hamilton", "3", "40", "18", ""]);
}

#[test]
fn yearly_view_loads_and_drops_short_rows() {
    let dir = tmp_dir("yearly");
    let src = SourceOptions::Dir(dir);

    assert_eq!(loader::load_years(&src).unwrap(), vec!["2021", "2022", "2023"]);

    let t = loader::load_yearly(&src, ViewKind::Qualifications, "2023").unwrap();
    assert_eq!(t.header, vec!["Pilote", "Rang", "Points"]);
    assert_eq!(t.nrows(), 2);
    assert_eq!(t.body[1], vec!["Perez", "2", "18"]);
}

#[test]
fn missing_file_is_a_fetch_failure_message() {
    let dir = tmp_dir("missing");
    let src = SourceOptions::Dir(dir);

    let err = loader::load_yearly(&src, ViewKind::DeuxiemePilote, "2023").unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(err.to_string(), "Fichier data/2023/deuxieme_pilote.csv introuvable.");

    let fetch = Fetch::Yearly { kind: ViewKind::DeuxiemePilote, year: "2023".into() };
    match loader::run_fetch(&src, &fetch) {
        Outcome::Yearly { result: Err(msg), year, .. } => {
            assert_eq!(year, "2023");
            assert!(msg.contains("introuvable"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn cli_prints_text_table_for_a_year() {
    let dir = tmp_dir("cli_text");
    let params = cli::parse_args([
        "--view", "qualifications",
        "--year", "2023",
        "--data", dir.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(params.view, ViewKind::Qualifications);

    let mut out = Vec::new();
    cli::execute(&params, &mut out).unwrap();
    let s = String::from_utf8(out).unwrap();
    assert!(s.starts_with("Qualifications (2023)\n"));
    assert!(s.contains("Verstappen  1     25"));
    assert!(!s.contains("bad"));
}

#[test]
fn cli_csv_page_two_of_historique() {
    let dir = tmp_dir("cli_csv");
    let params = cli::parse_args([
        "--data", dir.to_str().unwrap(),
        "--per-page", "2",
        "--page", "2",
        "--format", "csv",
    ])
    .unwrap();
    assert_eq!(params.format, OutFormat::Csv);

    let mut out = Vec::new();
    cli::execute(&params, &mut out).unwrap();
    let s = String::from_utf8(out).unwrap();
    let first = s.lines().next().unwrap();
    // 3 years, 2 per page: second page starts at 2022
    assert_eq!(first, "Pilote,Rang,Points,2022,2023");
    assert!(s.contains("Verstappen,1,80,25,30"));
}

#[test]
fn cli_rejects_unknown_year_and_args() {
    let dir = tmp_dir("cli_bad");
    let params = cli::parse_args([
        "--view", "deuxieme-pilote",
        "--year", "1999",
        "--data", dir.to_str().unwrap(),
    ])
    .unwrap();
    let err = cli::execute(&params, Vec::new()).unwrap_err();
    assert!(err.to_string().contains("1999"));

    assert!(cli::parse_args(["--view", "teams"]).is_err());
    assert!(cli::parse_args(["--page", "0"]).is_err());
    assert!(cli::parse_args(["--frobnicate"]).is_err());
}

#[test]
fn cli_http_source_from_host_flag() {
    let params = cli::parse_args(["--host", "localhost:8000", "--prefix", "site"]).unwrap();
    assert_eq!(
        params.options.source,
        SourceOptions::Http { host: "localhost".into(), port: 8000, prefix: "/site/".into() }
    );
}

#[test]
fn cli_huge_page_lands_on_the_last_page_at_once() {
    let dir = tmp_dir("cli_huge_page");
    let params = cli::parse_args([
        "--data", dir.to_str().unwrap(),
        "--per-page", "2",
        "--page", &usize::MAX.to_string(),
        "--format", "csv",
    ])
    .unwrap();

    let t0 = Instant::now();
    let mut out = Vec::new();
    cli::execute(&params, &mut out).unwrap();
    assert!(t0.elapsed() < Duration::from_millis(500));

    let s = String::from_utf8(out).unwrap();
    assert_eq!(s.lines().next().unwrap(), "Pilote,Rang,Points,2022,2023");
}

#[test]
fn blank_year_header_keeps_its_column() {
    let doc = csv::parse("Pilote,Rang,Points,2021,,2023\nA,1,30,10,5,15\n");
    let data = HistoriqueData::from_document(&doc);
    assert_eq!(data.years, vec!["2021", "", "2023"]);

    let p = Pager::new(data, 2);
    assert_eq!(p.range_label(), "2021-");
    assert_eq!(p.table().header, vec!["Pilote", "Rang", "Points", "2021", ""]);

    let p = p.next();
    assert_eq!(p.range_label(), "-2023");
    assert_eq!(p.table().header, vec!["Pilote", "Rang", "Points", "", "2023"]);
    assert_eq!(p.table().body[0], vec!["A", "1", "30", "5", "15"]);
}

/// Serves one canned response on a local port; yields the request line.
fn serve_once(response: &'static str) -> (u16, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut req = Vec::new();
        let mut buf = [0u8; 512];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = conn.read(&mut buf).unwrap();
            if n == 0 { break; }
            req.extend_from_slice(&buf[..n]);
        }
        conn.write_all(response.as_bytes()).unwrap();
        let req = String::from_utf8(req).unwrap();
        req.lines().next().unwrap_or("").to_string()
    });
    (port, handle)
}

#[test]
fn http_source_joins_prefix_and_reads_body() {
    let (port, server) = serve_once("HTTP/1.0 200 OK\r\nContent-Type: text/csv\r\n\r\nPilote,Rang,Points\nA,1,2\n");
    let src = SourceOptions::Http { host: "127.0.0.1".into(), port, prefix: "/site/".into() };

    let text = source::fetch_text(&src, "data/historique.csv").unwrap();
    assert_eq!(text, "Pilote,Rang,Points\nA,1,2\n");
    assert_eq!(server.join().unwrap(), "GET /site/data/historique.csv HTTP/1.0");
}

#[test]
fn http_404_is_not_found() {
    let (port, server) = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
    let src = SourceOptions::Http { host: "127.0.0.1".into(), port, prefix: "/".into() };

    let err = loader::load_yearly(&src, ViewKind::Qualifications, "2031").unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(server.join().unwrap(), "GET /data/2031/qualifications.csv HTTP/1.0");
}
