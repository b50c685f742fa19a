use clap::Parser;
use mortgage_calc::config::cli::Command;
use mortgage_calc::utils::logger;
use mortgage_calc::utils::validation::{validate_schedule_term, Validate};
use mortgage_calc::{
    amortization_schedule, calculate_mortgage_payment_with, format_with_currency,
    write_schedule_csv, CalcError, CliConfig, DefaultsProvider, LoanQuote, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), CalcError> {
    // 沒有指定設定檔時使用內建預設值
    let settings = match &config.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    settings.validate()?;
    let currency = settings.currency();

    match &config.command {
        Command::Quote(args) => {
            let quote = LoanQuote::from(*args);
            quote.validate()?;

            let payment = quote.monthly_payment();
            tracing::info!(?quote, payment, "calculated annuity payment");

            println!("Monthly payment: {}", format_with_currency(payment, currency));
            println!("Total paid:      {}", format_with_currency(quote.total_paid(), currency));
            println!("Overpayment:     {}", format_with_currency(quote.overpayment(), currency));
        }
        Command::Default { price } => {
            let defaults = settings.mortgage_defaults();
            let payment = calculate_mortgage_payment_with(*price, &settings);
            tracing::info!(price, ?defaults, payment, "calculated preset mortgage payment");

            println!(
                "From {} / month ({}% down, {} years, {}%)",
                format_with_currency(payment, currency),
                defaults.down_payment_percent,
                defaults.term_years,
                defaults.annual_rate_percent
            );
        }
        Command::Schedule { loan, output } => {
            let quote = LoanQuote::from(*loan);
            quote.validate()?;
            validate_schedule_term(&quote)?;

            let rows = amortization_schedule(&quote);
            match output {
                Some(path) => {
                    let file = std::fs::File::create(path)?;
                    write_schedule_csv(&rows, file)?;
                    tracing::info!(rows = rows.len(), path = %path, "schedule written");
                }
                None => write_schedule_csv(&rows, std::io::stdout().lock())?,
            }
        }
    }

    Ok(())
}
