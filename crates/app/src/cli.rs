use clap::Parser;

use stockroom_observability::LogFormat;

use crate::report::ReportFormat;

#[derive(Debug, Parser)]
#[command(
    name = "stockroom",
    about = "Simple inventory management: catalog, ledger, orders and backorders",
    version
)]
pub struct Cli {
    /// Start with an empty catalog instead of the demo data
    #[arg(long)]
    pub no_seed: bool,

    /// Do not clear the terminal before each menu
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for Enter after each action
    #[arg(long)]
    pub no_pause: bool,

    /// Log encoding on stderr (text or json)
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Encoding of the order queue report
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}
