// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use crate::{
    config::{self, AppOptions, WidgetOptions},
    core::{HttpTransport, Transport},
    error::{LookupError, SourceError},
    lookup::{CertLookup, Outcome, Query},
    present::View,
    progress::Progress,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub cert: Option<String>,
    pub last: Option<String>,
    pub widget: Option<String>,
    pub sources: Vec<String>,
    pub config: Option<PathBuf>,
    pub list_widgets: bool,
    pub verbose: bool,
    pub help: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Found,
    NotFound,
    Invalid,
    Failed,
    Info,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Found | Verdict::Info => 0,
            Verdict::NotFound => 2,
            Verdict::Invalid | Verdict::Failed => 1,
        }
    }
}

/// Entry point for the `cli` binary: real args, real network, stdout.
pub fn run() -> Result<Verdict, Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    let opts = config::load(params.config.as_deref())?;

    let timeout = opts.request_timeout_secs.map(Duration::from_secs);
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(timeout)?);

    let stdout = io::stdout();
    run_with(&params, &opts, transport, &mut stdout.lock())
}

/// Everything after argument parsing, with the transport and output injected.
pub fn run_with<W: Write>(
    params: &Params,
    opts: &AppOptions,
    transport: Arc<dyn Transport>,
    out: &mut W,
) -> Result<Verdict, Box<dyn Error>> {
    if params.help {
        writeln!(out, "{}", include_str!("cli_help.txt"))?;
        return Ok(Verdict::Info);
    }

    if params.list_widgets {
        for w in &opts.widgets {
            writeln!(out, "{} ({})", w.id, w.title())?;
            for url in w.source_urls() {
                writeln!(out, "  {}", url)?;
            }
        }
        return Ok(Verdict::Info);
    }

    let widget = select_widget(params, opts)?;

    // Blank input stops here: no fetch.
    let query = match Query::new(
        params.cert.as_deref().unwrap_or(""),
        params.last.as_deref().unwrap_or(""),
    ) {
        Ok(q) => q,
        Err(_) => {
            writeln!(out, "{}", View::Prompt.render_text())?;
            return Ok(Verdict::Invalid);
        }
    };

    let lookup = CertLookup::new(&widget, transport);
    let mut progress = CliProgress;
    let progress: Option<&mut dyn Progress> = if params.verbose { Some(&mut progress) } else { None };

    let (view, verdict) = match lookup.lookup(&query, progress) {
        Ok(Outcome::Found(d)) => (View::Found(d), Verdict::Found),
        Ok(Outcome::NotFound(_)) => (View::NotFound, Verdict::NotFound),
        Err(LookupError::Validation) => (View::Prompt, Verdict::Invalid),
        Err(e) => {
            loge!("Lookup failed: {e}");
            (View::Error, Verdict::Failed)
        }
    };

    writeln!(out, "{}", view.render_text())?;
    Ok(verdict)
}

/// `--source` replaces the selected widget's sheets; headers stay as configured.
fn select_widget(params: &Params, opts: &AppOptions) -> Result<WidgetOptions, Box<dyn Error>> {
    let mut widget = match &params.widget {
        Some(id) => opts
            .widget(id)
            .cloned()
            .ok_or_else(|| format!("Unknown widget: {}", id))?,
        None => opts.widgets.first().cloned().ok_or("No widgets configured")?,
    };
    if !params.sources.is_empty() {
        widget.source = None;
        widget.sources = params.sources.clone();
    }
    Ok(widget)
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" | "--cert" => params.cert = Some(args.next().ok_or("Missing value for --cert")?),
            "-l" | "--last" => params.last = Some(args.next().ok_or("Missing value for --last")?),
            "-w" | "--widget" => params.widget = Some(args.next().ok_or("Missing value for --widget")?),
            "-s" | "--source" => params.sources.push(args.next().ok_or("Missing value for --source")?),
            "--config" => {
                params.config = Some(PathBuf::from(args.next().ok_or("Missing value for --config")?))
            }
            "--list-widgets" => params.list_widgets = true,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

/// Prints one line per sheet to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Fetching {} sheet(s)…", total);
    }
    fn source_done(&mut self, index: usize, _url: &str, rows: usize) {
        eprintln!("  sheet {}: {} row(s)", index + 1, rows);
    }
    fn source_failed(&mut self, index: usize, _url: &str, err: &SourceError) {
        eprintln!("  sheet {}: skipped ({})", index + 1, err);
    }
}
