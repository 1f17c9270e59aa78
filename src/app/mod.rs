use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ranges::Filter;
use ranges::filter::hooks;

use crate::config::{Mode, SelectionConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["bytes", "characters", "fields", "lines"])))]
pub struct Cli {
    /// Select only these bytes
    #[arg(
        short,
        long,
        value_name = "LIST",
        value_parser = parse_list_arg,
        allow_hyphen_values = true
    )]
    pub bytes: Vec<String>,

    /// Select only these characters
    #[arg(
        short,
        long,
        value_name = "LIST",
        value_parser = parse_list_arg,
        allow_hyphen_values = true
    )]
    pub characters: Vec<String>,

    /// Select only these fields
    #[arg(
        short,
        long,
        value_name = "LIST",
        value_parser = parse_list_arg,
        allow_hyphen_values = true
    )]
    pub fields: Vec<String>,

    /// Select only these lines
    #[arg(
        short = 'n',
        long,
        value_name = "LIST",
        value_parser = parse_list_arg,
        allow_hyphen_values = true
    )]
    pub lines: Vec<String>,

    /// Field delimiter, a single byte (default: TAB)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Do not print lines without the delimiter
    #[arg(short = 's', long)]
    pub only_delimited: bool,

    /// Join selected fields with this string (default: the delimiter)
    #[arg(long)]
    pub output_delimiter: Option<String>,

    /// Settings file (YAML)
    #[arg(long, env = "RCUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Input files; `-` or none for stdin
    pub files: Vec<PathBuf>,
}

fn parse_list_arg(list: &str) -> Result<String, ranges::Error> {
    ranges::parse_list(list)?;
    Ok(list.to_string())
}

impl Cli {
    fn selection(&self) -> Option<(Mode, &[String])> {
        [
            (Mode::Bytes, &self.bytes),
            (Mode::Chars, &self.characters),
            (Mode::Fields, &self.fields),
            (Mode::Lines, &self.lines),
        ]
        .into_iter()
        .find(|(_, lists)| !lists.is_empty())
        .map(|(mode, lists)| (mode, lists.as_slice()))
    }
}

/// Resolved options for one run.
#[derive(Debug)]
pub struct Settings {
    pub mode: Mode,
    pub filter: Filter,
    pub delimiter: u8,
    pub output_delimiter: Vec<u8>,
    pub only_delimited: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: SelectionConfig) -> Result<Self> {
        let (mode, lists, origin) = match cli.selection() {
            Some((mode, lists)) => (mode, lists.to_vec(), "CLI"),
            None => match config.mode {
                Some(mode) => (mode, config.select.into_vec(), "Config"),
                None => bail!(
                    "CLI: one of --bytes, --characters, --fields or --lines is required"
                ),
            },
        };
        if lists.is_empty() {
            bail!("Config: mode {} has no select lists", mode.label());
        }

        let mut filter = Filter::new(Some(hooks::tracing_verbose()), Some(hooks::tracing_debug()));
        for list in &lists {
            filter
                .update(list)
                .with_context(|| format!("{}: invalid {} list {:?}", origin, mode.label(), list))?;
        }

        let delimiter = cli
            .delimiter
            .clone()
            .or(config.delimiter)
            .unwrap_or_else(|| "\t".to_string());
        let delimiter = match delimiter.as_bytes() {
            [byte] => *byte,
            _ => bail!("CLI: the delimiter must be a single byte, got {:?}", delimiter),
        };
        let output_delimiter = cli
            .output_delimiter
            .clone()
            .or(config.output_delimiter)
            .map(String::into_bytes)
            .unwrap_or_else(|| vec![delimiter]);
        let only_delimited = cli.only_delimited || config.only_delimited;

        if mode != Mode::Fields && (cli.delimiter.is_some() || only_delimited) {
            tracing::warn!("Delimiter options only apply to fields; ignoring them");
        }

        Ok(Settings {
            mode,
            filter,
            delimiter,
            output_delimiter,
            only_delimited,
        })
    }
}

/// Applies the filter to records, keeping line numbers across inputs.
pub struct Cutter<'a> {
    settings: &'a Settings,
    line_no: u64,
    selected: u64,
}

impl<'a> Cutter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            line_no: 0,
            selected: 0,
        }
    }

    pub fn lines_read(&self) -> u64 {
        self.line_no
    }

    pub fn lines_written(&self) -> u64 {
        self.selected
    }

    pub fn process<R: BufRead, W: Write>(&mut self, mut reader: R, out: &mut W) -> io::Result<()> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(());
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            self.line_no += 1;
            self.cut_line(&line, out)?;
        }
    }

    fn cut_line<W: Write>(&mut self, line: &[u8], out: &mut W) -> io::Result<()> {
        let filter = &self.settings.filter;
        match self.settings.mode {
            Mode::Lines => {
                if !filter.allows(index(self.line_no)) {
                    return Ok(());
                }
                out.write_all(line)?;
            }
            Mode::Bytes => {
                let bytes: Vec<u8> = line
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| filter.allows(position(*i)))
                    .map(|(_, b)| *b)
                    .collect();
                out.write_all(&bytes)?;
            }
            Mode::Chars => {
                // An invalid byte counts as one character and is copied as is.
                let mut i = 0;
                for chunk in line.utf8_chunks() {
                    let valid = chunk.valid();
                    for (at, c) in valid.char_indices() {
                        if filter.allows(position(i)) {
                            out.write_all(&valid.as_bytes()[at..at + c.len_utf8()])?;
                        }
                        i += 1;
                    }
                    for byte in chunk.invalid() {
                        if filter.allows(position(i)) {
                            out.write_all(std::slice::from_ref(byte))?;
                        }
                        i += 1;
                    }
                }
            }
            Mode::Fields => {
                let delimiter = self.settings.delimiter;
                if !line.contains(&delimiter) {
                    if self.settings.only_delimited {
                        return Ok(());
                    }
                    out.write_all(line)?;
                } else {
                    let mut first = true;
                    for (i, field) in line.split(|b| *b == delimiter).enumerate() {
                        if !filter.allows(position(i)) {
                            continue;
                        }
                        if !first {
                            out.write_all(&self.settings.output_delimiter)?;
                        }
                        out.write_all(field)?;
                        first = false;
                    }
                }
            }
        }
        self.selected += 1;
        out.write_all(b"\n")
    }
}

/// 1-based position of the 0-based offset `i`.
fn position(i: usize) -> i64 {
    i64::try_from(i).map_or(i64::MAX, |i| i.saturating_add(1))
}

fn index(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("CLI: Failed to open {:?}", path))?;
    Ok(Box::new(BufReader::new(file)))
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SelectionConfig::load(path)
            .with_context(|| format!("Config: Failed to load {:?}", path))?,
        None => SelectionConfig::default(),
    };
    let settings = Settings::resolve(cli, config)?;
    tracing::info!("Selecting {}: {}", settings.mode.label(), settings.filter);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut cutter = Cutter::new(&settings);

    let stdin_only = [PathBuf::from("-")];
    let inputs = if cli.files.is_empty() {
        &stdin_only[..]
    } else {
        cli.files.as_slice()
    };
    for path in inputs {
        let reader = open_input(path)?;
        cutter
            .process(reader, &mut out)
            .with_context(|| format!("Pipeline: Failed to process {:?}", path))?;
    }
    out.flush().context("Pipeline: Failed to flush output")?;

    tracing::info!(
        "Done! Written {} of {} lines",
        cutter.lines_written(),
        cutter.lines_read()
    );
    Ok(())
}
