// src/cli.rs
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, SourceOptions, ViewKind},
    csv,
    loader,
    specs,
    table::TableModel,
    view::Pager,
};

pub type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

const HELP: &str = "\
Usage: cli [options]

  --view <name>       historique | qualifications | deuxieme-pilote (default: historique)
  --year <year>       season for yearly views (default: first listed year)
  --page <n>          historique page of years, 1-based (default: 1)
  --per-page <n>      years per historique page (default: 10)
  --data <dir>        read files below <dir> (default: docs)
  --host <host[:port]> fetch over HTTP instead
  --prefix <path>     path prefix on the HTTP host
  --format <fmt>      text | csv (default: text)
  --list-years        print the selectable years and exit
  -h, --help          this text";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub options: AppOptions,
    pub view: ViewKind,
    pub year: Option<String>,
    pub page: usize,
    pub format: OutFormat,
    pub list_years: bool,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            view: ViewKind::Historique,
            year: None,
            page: 1,
            format: OutFormat::Text,
            list_years: false,
            help: false,
        }
    }
}

pub fn run() -> CliResult<()> {
    let params = parse_args(std::env::args().skip(1))?;
    if params.help {
        println!("{HELP}");
        return Ok(());
    }
    let stdout = io::stdout();
    execute(&params, stdout.lock())
}

/// Parse everything after the program name.
pub fn parse_args<I, S>(args: I) -> CliResult<Params>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut params = Params::default();
    let mut host: Option<String> = None;
    let mut prefix = s!();

    let mut args = args.into_iter().map(Into::<String>::into);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--view" => {
                let v = args.next().ok_or("Missing value for --view")?;
                params.view = ViewKind::from_slug(&v)
                    .ok_or_else(|| format!("Unknown view: {}", v))?;
            }
            "--year" => params.year = Some(args.next().ok_or("Missing value for --year")?),
            "--page" => {
                let v: usize = args.next().ok_or("Missing value for --page")?.parse()?;
                if v == 0 { return Err("Pages start at 1".into()); }
                params.page = v;
            }
            "--per-page" => {
                let v: usize = args.next().ok_or("Missing value for --per-page")?.parse()?;
                if v == 0 { return Err("--per-page must be at least 1".into()); }
                params.options.years_per_page = v;
            }
            "--data" => {
                let v = args.next().ok_or("Missing value for --data")?;
                params.options.source = SourceOptions::Dir(PathBuf::from(v));
            }
            "--host" => host = Some(args.next().ok_or("Missing value for --host")?),
            "--prefix" => prefix = args.next().ok_or("Missing value for --prefix")?,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "text" => OutFormat::Text,
                    "csv" => OutFormat::Csv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--list-years" => params.list_years = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if let Some(h) = host {
        params.options.source = SourceOptions::http(&h, &prefix)?;
    }
    Ok(params)
}

/// Load what `params` asks for and write it to `out`.
pub fn execute<W: Write>(params: &Params, mut out: W) -> CliResult<()> {
    let src = &params.options.source;
    logf!("CLI: view={} year={:?} page={}", params.view, params.year, params.page);

    if params.list_years {
        for y in loader::load_years(src)? {
            writeln!(out, "{}", y)?;
        }
        return Ok(());
    }

    let spec = specs::spec_for(params.view);

    if spec.paged {
        let data = loader::load_historique(src)?;
        let pager = Pager::new(data, params.options.years_per_page).skip(params.page - 1);
        let label = pager.range_label();
        if params.format == OutFormat::Text && !label.is_empty() {
            writeln!(out, "{} {}", spec.title, label)?;
        }
        return write_table(&mut out, &pager.table(), params.format);
    }

    let years = loader::load_years(src)?;
    let year = match &params.year {
        Some(y) => {
            loader::check_year(&years, y)?;
            y.clone()
        }
        None => years
            .first()
            .cloned()
            .ok_or_else(|| crate::error::LoadError::MissingYear { view: s!(params.view.slug()) })?,
    };

    let table = loader::load_yearly(src, params.view, &year)?;
    if params.format == OutFormat::Text {
        writeln!(out, "{} ({})", spec.title, year)?;
    }
    write_table(&mut out, &table, params.format)
}

fn write_table<W: Write>(out: &mut W, table: &TableModel, format: OutFormat) -> CliResult<()> {
    match format {
        OutFormat::Text => out.write_all(table.to_text().as_bytes())?,
        OutFormat::Csv => {
            csv::write_row(&mut *out, &table.header, ',')?;
            for row in &table.body {
                csv::write_row(&mut *out, row, ',')?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
