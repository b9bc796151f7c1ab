use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossbeam::channel::{self, Sender};
use pulliter::{from_queue, BoxIter, Iter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pulliter", about = "Run a lazy pull pipeline over integers read from a file or stdin")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every element that comes out of the pipeline.
    Collect(PipelineArgs),
    /// Print the sum of the pipeline's elements.
    Sum(PipelineArgs),
    /// Print how many elements the pipeline produced.
    Count(PipelineArgs),
    /// Print the pipeline's elements in groups, one group per line.
    Chunks {
        #[command(flatten)]
        pipeline: PipelineArgs,
        /// Elements per group.
        #[arg(long, default_value_t = 2)]
        size: i64,
    },
}

#[derive(Args, Debug)]
struct PipelineArgs {
    /// File with one integer per line (default: stdin).
    #[arg(long)]
    input: Option<PathBuf>,
    /// Which elements to keep.
    #[arg(long, value_enum, default_value_t = Parity::All)]
    keep: Parity,
    /// Multiply every kept element by this factor.
    #[arg(long, default_value_t = 1)]
    scale: i64,
    /// Discard this many elements after scaling.
    #[arg(long, default_value_t = 0)]
    skip: usize,
    /// Stop after this many elements.
    #[arg(long)]
    take: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Parity {
    All,
    Even,
    Odd,
}

impl Parity {
    fn matches(self, value: &i64) -> bool {
        match self {
            Parity::All => true,
            Parity::Even => value % 2 == 0,
            Parity::Odd => value % 2 != 0,
        }
    }
}

/// Stages applied between the queue and the terminal operation
#[derive(Debug, Clone)]
struct PipelineConfig {
    keep: Parity,
    scale: i64,
    skip: usize,
    take: Option<usize>,
}

impl PipelineConfig {
    /// Pass-through pipeline
    fn new() -> Self {
        Self {
            keep: Parity::All,
            scale: 1,
            skip: 0,
            take: None,
        }
    }

    fn with_keep(mut self, keep: Parity) -> Self {
        self.keep = keep;
        self
    }

    fn with_scale(mut self, scale: i64) -> Self {
        self.scale = scale;
        self
    }

    fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    fn with_take(mut self, take: Option<usize>) -> Self {
        self.take = take;
        self
    }

    /// Wire the stages onto `source`: filter, scale, skip, then take
    fn build<'a>(&self, source: impl Iter<Item = i64> + 'a) -> BoxIter<'a, i64> {
        let keep = self.keep;
        let scale = self.scale;
        let pipeline = source
            .filter(move |value| keep.matches(value))
            .map(move |value| value.saturating_mul(scale))
            .skip(self.skip);
        match self.take {
            Some(n) => pipeline.take(n).boxed(),
            None => pipeline.boxed(),
        }
    }
}

impl From<&PipelineArgs> for PipelineConfig {
    fn from(args: &PipelineArgs) -> Self {
        PipelineConfig::new()
            .with_keep(args.keep)
            .with_scale(args.scale)
            .with_skip(args.skip)
            .with_take(args.take)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Collect(args) => run_pipeline(&args, |pipeline| {
            Ok(pipeline.reduce(String::new(), |value, mut out| {
                out.push_str(&format!("{value}\n"));
                out
            }))
        })?,
        Commands::Sum(args) => run_pipeline(&args, |pipeline| {
            let total = pipeline.reduce(0i64, |value, acc| acc.saturating_add(value));
            Ok(format!("{total}\n"))
        })?,
        Commands::Count(args) => run_pipeline(&args, |pipeline| {
            Ok(format!("{}\n", pipeline.count()))
        })?,
        Commands::Chunks { pipeline: args, size } => run_pipeline(&args, |pipeline| {
            let chunks = pipeline
                .chunk_every(size)
                .with_context(|| format!("invalid chunk size {size}"))?;
            Ok(chunks.reduce(String::new(), |chunk, mut out| {
                out.push_str(&render_chunk(&chunk));
                out.push('\n');
                out
            }))
        })?,
    };

    // Only reached once the producer finished cleanly
    print!("{output}");
    Ok(())
}

/// Open the configured input and run the pipeline over it
fn run_pipeline<F>(args: &PipelineArgs, consume: F) -> Result<String>
where
    F: FnOnce(BoxIter<'static, i64>) -> Result<String>,
{
    let config = PipelineConfig::from(args);
    info!(?config, "starting pipeline");

    let reader: Box<dyn BufRead + Send> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open input file {}", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    run_with_reader(reader, &config, consume)
}

/// Feed `reader` through a producer thread into the pipeline and render it with `consume`
///
/// The producer is joined before anything is returned. A failed producer
/// closes the queue early, which the consumer cannot tell apart from real
/// exhaustion, so its error wins over the rendered output.
fn run_with_reader<R, F>(reader: R, config: &PipelineConfig, consume: F) -> Result<String>
where
    R: BufRead + Send + 'static,
    F: FnOnce(BoxIter<'static, i64>) -> Result<String>,
{
    let (tx, rx) = channel::unbounded();
    let producer = thread::spawn(move || produce(reader, tx));

    let rendered = consume(config.build(from_queue(rx)));

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("producer thread panicked"))??;
    rendered
}

/// Parse integers line by line into `tx`; returning drops `tx`, which closes the queue
fn produce(reader: impl BufRead, tx: Sender<i64>) -> Result<()> {
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_no + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: i64 = trimmed
            .parse()
            .with_context(|| format!("invalid integer {:?} on line {}", trimmed, line_no + 1))?;
        if tx.send(value).is_err() {
            // Consumer stopped pulling (e.g. --take reached) and dropped the receiver
            debug!(line = line_no + 1, "consumer gone, stopping producer");
            return Ok(());
        }
    }
    Ok(())
}

fn render_chunk(chunk: &[i64]) -> String {
    chunk
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulliter::from_sequence;

    #[test]
    fn test_default_config_passes_through() {
        let out = PipelineConfig::new().build(from_sequence(vec![1, 2, 3])).to_vec();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_config_stage_order() {
        let config = PipelineConfig::new()
            .with_keep(Parity::Odd)
            .with_scale(10)
            .with_skip(1)
            .with_take(Some(2));
        let out = config.build(from_sequence(vec![1, 2, 3, 4, 5, 6, 7])).to_vec();
        assert_eq!(out, vec![30, 50]);
    }

    #[test]
    fn test_producer_feeds_queue() {
        let input = "3\n\n4\n 5 \n";
        let (tx, rx) = channel::unbounded();
        produce(input.as_bytes(), tx).unwrap();
        assert_eq!(from_queue(rx).to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_producer_rejects_garbage() {
        let (tx, _rx) = channel::unbounded();
        let err = produce("1\nx\n".as_bytes(), tx).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_producer_stops_when_consumer_leaves() {
        let (tx, rx) = channel::unbounded();
        drop(rx);
        assert!(produce("1\n2\n".as_bytes(), tx).is_ok());
    }

    #[test]
    fn test_bad_input_yields_no_output() {
        let err = run_with_reader("1\n2\nx\n".as_bytes(), &PipelineConfig::new(), |pipeline| {
            Ok(format!("{}", pipeline.count()))
        })
        .unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_good_input_renders_output() {
        let config = PipelineConfig::new().with_keep(Parity::Even);
        let out = run_with_reader("1\n2\n4\n".as_bytes(), &config, |pipeline| {
            Ok(format!("{}", pipeline.reduce(0i64, |value, acc| acc + value)))
        })
        .unwrap();
        assert_eq!(out, "6");
    }

    #[test]
    fn test_render_chunk() {
        assert_eq!(render_chunk(&[1, -2, 3]), "1 -2 3");
    }
}
