use std::{fs::File, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use time::{Date, macros::format_description};

use expense_insights::{
    Category, ColumnModel, Config, CurrencyFormatter, DateRange, Error, MemorySource,
    NumfmtCurrencyFormatter, OwnerId, PageRequest, Pagination, PaginationIndicator,
    TransactionKind, TransactionSource, ViewContext, aggregate_by_category, category_line_chart,
    category_share_chart, ingest, materialize, project, read_transactions_csv, setup_logging,
    sorted_buckets, spending_summary,
};

/// Browse and summarise transactions exported to CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a CSV file with the columns id,title,category,date,amount,owner_id.
    #[arg(long)]
    csv: PathBuf,

    /// File path to a JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only show the transactions of this user.
    #[arg(long)]
    owner: String,

    /// The ISO 4217 currency code to show amounts in, overrides the config.
    #[arg(long)]
    currency: Option<String>,

    /// The first day to include (YYYY-MM-DD). Defaults to the start of the current month.
    #[arg(long, value_parser = parse_date)]
    from: Option<Date>,

    /// The last day to include (YYYY-MM-DD). Defaults to the end of the current month.
    #[arg(long, value_parser = parse_date)]
    to: Option<Date>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of the transactions table.
    Table {
        /// The page to show, counting from one.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// The number of transactions per page.
        #[arg(long)]
        page_size: Option<u64>,

        /// Whether the rows link to expense or income pages.
        #[arg(long, value_enum, default_value_t = Kind::Expense)]
        kind: Kind,
    },
    /// Print the total and share of each category.
    Categories {
        /// Print the buckets as JSON.
        #[arg(long)]
        json: bool,

        /// Print the options for a pie chart instead.
        #[arg(long, conflicts_with = "json")]
        chart: bool,
    },
    /// Print one category's transactions over time.
    Series {
        /// The category key, e.g. "food".
        #[arg(long)]
        category: String,

        /// Print the options for a line chart instead.
        #[arg(long)]
        chart: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Expense,
    Income,
}

impl From<Kind> for TransactionKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Expense => TransactionKind::Expense,
            Kind::Income => TransactionKind::Income,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Could not load config: {error}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = setup_logging(&config.log_level) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: Config) -> Result<(), Error> {
    let file = File::open(&args.csv)?;
    let parsed = read_transactions_csv(file)?;
    tracing::info!(
        "Read {} records from {} ({} rows skipped)",
        parsed.accepted.len(),
        args.csv.display(),
        parsed.rejected.len()
    );
    let source = MemorySource::new(parsed.accepted);

    let default_range = config.default_date_range()?;
    let date_range = DateRange::new(
        args.from.unwrap_or(default_range.start()),
        args.to.unwrap_or(default_range.end()),
    )?;
    let currency_code = args.currency.as_deref().unwrap_or(&config.currency_code);
    let context = ViewContext::new(OwnerId::new(&args.owner), currency_code, date_range);

    match args.command {
        Command::Table {
            page,
            page_size,
            kind,
        } => print_table(&source, &config, &context, page, page_size, kind.into()),
        Command::Categories { json, chart } => print_categories(&source, &context, json, chart),
        Command::Series { category, chart } => print_series(&source, &context, &category, chart),
    }
}

fn print_table(
    source: &impl TransactionSource,
    config: &Config,
    context: &ViewContext,
    page: u64,
    page_size: Option<u64>,
    kind: TransactionKind,
) -> Result<(), Error> {
    let mut pagination = Pagination::from_config(&config.pagination)?;
    if let Some(page_size) = page_size {
        pagination = pagination.set_page_size(page_size)?;
    }
    pagination = pagination.set_page_index(i64::try_from(page - 1).unwrap_or(i64::MAX));

    let mut response = source.fetch_page(&PageRequest::new(context, &pagination))?;
    pagination = pagination.set_page_count(response.page_count);

    // The requested page was past the end and got clamped.
    if !response.request.is_current(context, &pagination) {
        tracing::debug!(
            "Page {page} is out of range, showing page {} instead",
            pagination.page_index() + 1
        );
        response = source.fetch_page(&PageRequest::new(context, &pagination))?;
    }

    let rows = ingest(response.records).accepted;
    let columns = ColumnModel::transactions(kind, &config.table);
    let table = materialize(
        &rows,
        &columns,
        &pagination,
        context,
        &NumfmtCurrencyFormatter,
    );

    println!("{}", table.header.join(" | "));
    for row in &table.body {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        println!("{}", cells.join(" | "));
    }
    println!();
    println!("{}", table.summary);
    println!(
        "{}",
        format_indicators(&pagination.indicators(config.pagination.max_indicator_pages))
    );

    Ok(())
}

fn print_categories(
    source: &impl TransactionSource,
    context: &ViewContext,
    json: bool,
    chart: bool,
) -> Result<(), Error> {
    let records = source.fetch_range(&context.owner_id, context.date_range)?;
    let transactions = ingest(records).accepted;
    let buckets = sorted_buckets(&aggregate_by_category(&transactions, context.date_range));

    if json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
        return Ok(());
    }

    if chart {
        println!("{}", category_share_chart(&buckets));
        return Ok(());
    }

    let formatter = NumfmtCurrencyFormatter;
    for bucket in &buckets {
        println!(
            "{} {:<15} {:>12} {:>6.1}%",
            bucket.category.icon(),
            bucket.category.display_label(),
            formatter.format(&context.currency_code, bucket.total),
            bucket.percentage
        );
    }

    let summary = spending_summary(&transactions, context.date_range);
    println!();
    println!(
        "{} transactions totalling {} from {}",
        summary.transaction_count,
        formatter.format(&context.currency_code, summary.grand_total),
        context.date_range
    );
    if let Some(category) = summary.top_category {
        println!("Most spent on: {category}");
    }

    Ok(())
}

fn print_series(
    source: &impl TransactionSource,
    context: &ViewContext,
    category_key: &str,
    chart: bool,
) -> Result<(), Error> {
    let category = Category::resolve(category_key);
    let records = source.fetch_range(&context.owner_id, context.date_range)?;
    let transactions = ingest(records).accepted;
    let points = project(&transactions, category);

    if chart {
        println!("{}", category_line_chart(&points, &context.currency_code));
        return Ok(());
    }

    let formatter = NumfmtCurrencyFormatter;
    for point in &points {
        println!(
            "{:<10} {:>12}",
            point.label,
            formatter.format(&context.currency_code, point.amount)
        );
    }

    Ok(())
}

fn format_indicators(indicators: &[PaginationIndicator]) -> String {
    indicators
        .iter()
        .map(|indicator| match indicator {
            PaginationIndicator::Page(page) => page.to_string(),
            PaginationIndicator::CurrPage(page) => format!("[{page}]"),
            PaginationIndicator::Ellipsis => "...".to_owned(),
            PaginationIndicator::NextButton(_) => ">".to_owned(),
            PaginationIndicator::BackButton(_) => "<".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_date(text: &str) -> Result<Date, String> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map_err(|error| format!("invalid date \"{text}\": {error}"))
}
