use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use burn::config::Config;

use seq_pad::config::PadConfig;
use seq_pad::encoding::{batch_encode, write_npy, Alphabet, EncodingType};
use seq_pad::harness::{run_length_checks, CheckOptions};
use seq_pad::padding::{pad_with_config, PadLength, PadType, StrTokensExt};

fn parse_pad_length(s: &str) -> std::result::Result<PadLength, String> {
    s.parse().map_err(|err| format!("{err}"))
}

/// Where sequences come from and how lines split into tokens.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// File of sequences, one per line; stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Split each line into tokens on this string instead of per char.
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

impl InputArgs {
    /// Read non-blank lines as token sequences.
    pub fn read_sequences(&self) -> Result<Vec<Vec<String>>> {
        let reader: Box<dyn Read> = match &self.input {
            Some(path) => Box::new(
                fs::File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?,
            ),
            None => Box::new(io::stdin()),
        };

        let mut sequences = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line.context("failed to read sequence line")?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            sequences.push(match &self.delimiter {
                Some(delimiter) => line.delimited_tokens(delimiter),
                None => line.char_tokens(),
            });
        }
        Ok(sequences)
    }
}

/// Padding settings; flags override a loaded config file.
#[derive(clap::Args, Debug)]
pub struct PadSettings {
    /// JSON config to start from.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Padding policy.
    #[arg(short = 't', long, value_enum)]
    pub pad_type: Option<PadType>,

    /// Pad unit.
    #[arg(short = 's', long)]
    pub pad_str: Option<String>,

    /// Target length: a positive integer or `max`.
    #[arg(short = 'l', long, value_parser = parse_pad_length)]
    pub pad_length: Option<PadLength>,

    /// Save the resolved config as JSON.
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

impl PadSettings {
    pub fn resolve(&self) -> Result<PadConfig> {
        let mut config = match &self.config {
            Some(path) => PadConfig::load(path)
                .map_err(|err| anyhow::anyhow!("failed to load {}: {err:?}", path.display()))?,
            None => PadConfig::new(),
        };
        if let Some(pad_type) = self.pad_type {
            config.pad_type = pad_type;
        }
        if let Some(pad_str) = &self.pad_str {
            config.pad_str = pad_str.clone();
        }
        if let Some(pad_length) = self.pad_length {
            config.pad_length = pad_length;
        }
        Ok(config)
    }

    /// Write `config` to `--save-config`, if given.
    pub fn save(&self, config: &PadConfig) -> Result<()> {
        if let Some(path) = &self.save_config {
            config
                .save(path)
                .with_context(|| format!("failed to save config to {}", path.display()))?;
        }
        Ok(())
    }
}

#[derive(clap::Args, Debug)]
pub struct PadArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub settings: PadSettings,
}

impl PadArgs {
    pub fn run(&self) -> Result<()> {
        let config = self.settings.resolve()?;
        self.settings.save(&config)?;
        let sequences = self.input.read_sequences()?;
        let padded = pad_with_config(&sequences, &config)?;

        let mut out = io::stdout().lock();
        for row in padded {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub settings: PadSettings,

    /// Encoding to apply after padding.
    #[arg(short, long, value_enum)]
    pub encoding: Option<EncodingType>,

    /// Symbols of a shared column space.
    #[arg(short, long, conflicts_with = "shared")]
    pub alphabet: Option<String>,

    /// Share one column space built from every padded row.
    #[arg(long)]
    pub shared: bool,

    /// Directory for the `.npy` output.
    #[arg(short, long)]
    pub out: PathBuf,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<()> {
        let mut config = self.settings.resolve()?;
        if let Some(encoding) = self.encoding {
            config.encoding_type = encoding;
        }
        if self.alphabet.is_some() {
            config.alphabet = self.alphabet.clone();
        }
        self.settings.save(&config)?;

        let sequences = self.input.read_sequences()?;
        let padded = pad_with_config(&sequences, &config)?;

        let alphabet = if self.shared {
            Some(Alphabet::from_batch(&padded))
        } else {
            config.shared_alphabet()
        };
        let rows = batch_encode(&padded, config.encoding_type, alphabet.as_ref())?;

        let paths = write_npy(&rows, &self.out)
            .with_context(|| format!("failed to write to {}", self.out.display()))?;
        for path in paths {
            log::info!("wrote {}", path.display());
        }
        Ok(())
    }
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Symbols to draw random rows from.
    #[arg(short, long, default_value = "-")]
    pub alphabet: String,

    /// Shortest random row.
    #[arg(long, default_value_t = 1)]
    pub min_len: usize,

    /// Longest random row.
    #[arg(long, default_value_t = 200)]
    pub max_len: usize,

    /// Rows per batch.
    #[arg(short, long, default_value_t = 20)]
    pub rows: usize,

    /// Pad unit.
    #[arg(short = 's', long, default_value = seq_pad::padding::DEFAULT_PAD_STR)]
    pub pad_str: String,

    /// Target lengths to check.
    #[arg(short = 'l', long, value_parser = parse_pad_length, default_values = ["145", "max"])]
    pub lengths: Vec<PadLength>,

    /// Write a JSON report of every check.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let options = CheckOptions::new(
            self.alphabet.clone(),
            (self.min_len, self.max_len),
            self.rows,
            self.pad_str.clone(),
            self.lengths.clone(),
        );

        let outcomes = run_length_checks(&options)?;
        if let Some(path) = &self.report {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &outcomes).context("failed to write report")?;
        }

        let failed = outcomes.iter().filter(|o| !o.passed()).count();
        if failed > 0 {
            bail!("{failed} of {} length checks failed", outcomes.len());
        }
        Ok(())
    }
}
