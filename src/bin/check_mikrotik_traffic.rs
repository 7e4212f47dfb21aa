use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use mikrotik_traffic::{run_cycle, Error, Levels, MetricName, Params, Report, Runner, Sample};

/// Nagios/icinga check for the wireless traffic counters of a Mikrotik RouterOS device.
///
/// The counters are the values the transport fetched from the mtxrWlRtabTable columns. A counter
/// that is left out is treated as a column without rows.
#[derive(Parser, Debug)]
#[command(name = "check_mikrotik_traffic", version, about)]
struct Cli {
    /// Current TX rate in bytes per second (mtxrWlRtabTxRate)
    #[arg(long)]
    tx_rate: Option<String>,
    /// Current RX rate in bytes per second (mtxrWlRtabRxRate)
    #[arg(long)]
    rx_rate: Option<String>,
    /// Transmitted bytes (mtxrWlRtabTxBytes)
    #[arg(long)]
    tx_bytes: Option<String>,
    /// Received bytes (mtxrWlRtabRxBytes)
    #[arg(long)]
    rx_bytes: Option<String>,
    /// sysDescr of the device, the check only applies to RouterOS devices if given
    #[arg(long)]
    sys_descr: Option<String>,
    /// TOML file with levels, keys are currentTx, currentRx, totalTx and totalRx
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Levels for the current TX rate as WARN,CRIT
    #[arg(long, value_parser = parse_levels)]
    tx_rate_levels: Option<Levels<u64>>,
    /// Levels for the current RX rate as WARN,CRIT
    #[arg(long, value_parser = parse_levels)]
    rx_rate_levels: Option<Levels<u64>>,
    /// Levels for the transmitted bytes as WARN,CRIT
    #[arg(long, value_parser = parse_levels)]
    tx_bytes_levels: Option<Levels<u64>>,
    /// Levels for the received bytes as WARN,CRIT
    #[arg(long, value_parser = parse_levels)]
    rx_bytes_levels: Option<Levels<u64>>,
    /// Log more to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn sample(&self) -> Sample {
        [&self.tx_rate, &self.rx_rate, &self.tx_bytes, &self.rx_bytes]
            .iter()
            .map(|value| match value {
                Some(value) => vec![vec![value.clone()]],
                None => Vec::new(),
            })
            .collect()
    }

    fn levels(&self) -> Params {
        let mut params = Params::new();
        params.set_levels(MetricName::CurrentTx, self.tx_rate_levels);
        params.set_levels(MetricName::CurrentRx, self.rx_rate_levels);
        params.set_levels(MetricName::TotalTx, self.tx_bytes_levels);
        params.set_levels(MetricName::TotalRx, self.rx_bytes_levels);
        params
    }
}

fn parse_levels(s: &str) -> Result<Levels<u64>, String> {
    let (warning, critical) = s
        .split_once(',')
        .ok_or_else(|| format!("expected WARN,CRIT but got {:?}", s))?;

    let parse = |v: &str| {
        v.trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid level {:?}: {}", v, e))
    };

    Ok(Levels::new(parse(warning)?, parse(critical)?))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // stdout belongs to the plugin output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn do_check(cli: &Cli) -> Result<Report, Error> {
    let mut params = match &cli.config {
        Some(path) => Params::load(path)?,
        None => Params::default(),
    };
    params.merge(&cli.levels());

    let cycle = run_cycle(&params, cli.sys_descr.as_deref(), &cli.sample())?;
    Ok(Report::from(cycle))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    Runner::new().safe_run(|| do_check(&cli)).print_and_exit()
}
