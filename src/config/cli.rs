use crate::domain::model::LoanQuote;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Monthly payment for an explicit loan
    Quote(LoanArgs),

    /// Monthly payment for a sale price using the preset down payment, term and rate
    Default {
        #[arg(long)]
        price: f64,
    },

    /// Month-by-month amortization schedule as CSV
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,

        #[arg(long, short, help = "Write CSV to this file instead of stdout")]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct LoanArgs {
    #[arg(long)]
    pub principal: f64,

    #[arg(long, help = "Annual rate in percent, e.g. 28")]
    pub rate: f64,

    #[arg(long, help = "Term in years")]
    pub term: f64,
}

impl From<LoanArgs> for LoanQuote {
    fn from(args: LoanArgs) -> Self {
        LoanQuote::new(args.principal, args.rate, args.term)
    }
}
