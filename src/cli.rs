//! utilkit command line
//!
//! A thin front end over the library, handy for poking at the helpers from a
//! shell and for end-to-end tests.

use std::io::{self, Write};
use std::net::Ipv4Addr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::collections::{BoundedRingQueue, CircularCursorList};
use crate::config::Config;
use crate::errors::UtilError;
use crate::logging::{init_tracing, logger_from_config, LogLevel, SharedLogger};
use crate::stream_ext::read_to_string_lossy;
use crate::subnet::Ipv4Subnet;
use crate::text_box::{BoxStyle, TextBox};
use crate::time_fmt::{format_duration, format_duration_compact, parse_duration};

#[derive(Parser, Debug)]
#[command(name = "utilkit")]
#[command(about = "Everyday helpers: ring queues, cursors, subnets, durations and text boxes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Log at debug level regardless of config
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a box around text (reads stdin when no text is given)
    Box {
        /// Text lines; each argument becomes one line
        text: Vec<String>,

        /// Title set into the top border
        #[arg(short, long)]
        title: Option<String>,

        /// Border style (defaults to the configured style)
        #[arg(short, long, value_enum)]
        style: Option<BoxStyle>,
    },

    /// Show network, broadcast and host range for a CIDR block
    Subnet {
        /// e.g. 10.0.5.17/16 or 10.0.5.17/255.255.0.0
        cidr: String,

        /// Also report whether this address belongs to the subnet
        #[arg(long, value_name = "IP")]
        contains: Option<String>,
    },

    /// Parse a duration like 1h30m and print it back in readable forms
    Duration {
        input: String,
    },

    /// Push values through a bounded queue and print what survives
    Queue {
        /// Queue capacity (defaults to queue.default_capacity)
        #[arg(short = 'n', long)]
        capacity: Option<usize>,

        values: Vec<String>,
    },

    /// Walk a list with the cursor
    Cursor {
        items: Vec<String>,

        /// Number of steps to take
        #[arg(short, long, default_value_t = 1)]
        steps: usize,

        /// Wrap around at the ends
        #[arg(long)]
        circular: bool,

        /// Step backwards instead of forwards
        #[arg(long)]
        backward: bool,
    },
}

/// Parse arguments, load config and run the selected command on stdout.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

/// Run a parsed command line, writing results to `out`.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.verbose {
        config.logging.level = LogLevel::Debug;
    }
    if cli.no_color {
        config.logging.color = false;
        config.text_box.color = false;
    }

    init_tracing(&config.logging);
    let logger = logger_from_config(&config.logging)?;

    match cli.command {
        Commands::Box { text, title, style } => {
            let body = if text.is_empty() {
                read_to_string_lossy(io::stdin().lock()).context("Failed to read stdin")?
            } else {
                text.join("\n")
            };
            let mut text_box = TextBox::from_config(&config.text_box);
            if let Some(style) = style {
                text_box = text_box.style(style);
            }
            if let Some(title) = title {
                text_box = text_box.title(title);
            }
            writeln!(out, "{}", text_box.render(&body))?;
        }
        Commands::Subnet { cidr, contains } => {
            let report = subnet_report(&cidr, contains.as_deref())?;
            writeln!(out, "{}", report)?;
        }
        Commands::Duration { input } => {
            let duration = parse_duration(&input).map_err(UtilError::from)?;
            writeln!(out, "{}", format_duration(duration))?;
            writeln!(out, "{}", format_duration_compact(duration))?;
            writeln!(out, "{}", duration.as_millis())?;
        }
        Commands::Queue { capacity, values } => {
            let capacity = capacity.unwrap_or(config.queue.default_capacity);
            let window = queue_window(capacity, values, &logger)?;
            writeln!(out, "{}", window.join(" "))?;
        }
        Commands::Cursor {
            items,
            steps,
            circular,
            backward,
        } => {
            for line in cursor_walk(items, steps, circular, backward) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

/// Multi-line description of a subnet.
pub fn subnet_report(cidr: &str, contains: Option<&str>) -> std::result::Result<String, UtilError> {
    let subnet: Ipv4Subnet = cidr.parse()?;
    let (first, last) = subnet.host_range();
    let mut lines = vec![
        format!("network    {}", subnet),
        format!("mask       {}", subnet.mask()),
        format!("broadcast  {}", subnet.broadcast()),
        format!("hosts      {} ({} - {})", subnet.host_count(), first, last),
    ];
    if let Some(ip) = contains {
        let ip: Ipv4Addr = ip
            .parse()
            .map_err(|_| UtilError::Usage(format!("'{}' is not an IPv4 address", ip)))?;
        lines.push(format!("contains   {} {}", ip, if subnet.contains(ip) { "yes" } else { "no" }));
    }
    Ok(lines.join("\n"))
}

/// Feed `values` through a queue of `capacity` and return the survivors,
/// oldest first. Evictions are reported to `logger` at debug level.
pub fn queue_window(
    capacity: usize,
    values: Vec<String>,
    logger: &SharedLogger,
) -> std::result::Result<Vec<String>, UtilError> {
    let queue = BoundedRingQueue::new(capacity)?;
    for value in values {
        if let Some(evicted) = queue.enqueue_evicting(value) {
            logger.debug(&format!("evicted '{}'", evicted));
        }
    }
    Ok(queue.drain())
}

/// Take `steps` cursor steps over `items`, one output line per step
/// (`-` when the cursor yields nothing).
pub fn cursor_walk(items: Vec<String>, steps: usize, circular: bool, backward: bool) -> Vec<String> {
    let mut list: CircularCursorList<String> = items.into();
    list.set_circular(circular);
    (0..steps)
        .map(|_| {
            let item = if backward {
                list.get_previous()
            } else {
                list.get_next()
            };
            item.cloned().unwrap_or_else(|| "-".to_string())
        })
        .collect()
}
