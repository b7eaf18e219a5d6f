use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;

use taxmaster_core::{
    FederalRules, FilingStatus, SessionStore, TaxInputs, breakdown, compute, us_states,
};
use taxmaster_export::{render_document, write_sheet};
use taxmaster_session::JsonSessionStore;

mod logging;

const REPORT_TITLE: &str = "2025 Tax Estimate Report";

/// Estimate combined 2025 federal and state tax liability.
///
/// Inputs come from the saved session file (if any); every flag below
/// overrides the corresponding saved field for this run. Amounts are
/// estimates only, not filing-grade figures.
#[derive(Parser, Debug)]
#[command(name = "taxmaster")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the session file
    #[arg(long, default_value = "tax_session.json")]
    session: PathBuf,

    /// List the states in the jurisdiction table and exit
    #[arg(long, default_value_t = false)]
    list_states: bool,

    /// Filing status code: S (single) or MFJ (married filing jointly)
    #[arg(long)]
    status: Option<String>,

    /// State of residence (e.g. "California"); unknown states owe no state tax
    #[arg(long)]
    state: Option<String>,

    /// Children qualifying for the child tax credit
    #[arg(long)]
    dependents: Option<u32>,

    /// W-2 salary
    #[arg(long)]
    salary: Option<Decimal>,

    /// Self-employment profit (1099 / Schedule C)
    #[arg(long)]
    self_employment: Option<Decimal>,

    /// Qualified tips
    #[arg(long)]
    tips: Option<Decimal>,

    /// Qualified overtime premium
    #[arg(long)]
    overtime: Option<Decimal>,

    /// Short-term capital gains
    #[arg(long)]
    short_term_gains: Option<Decimal>,

    /// Long-term capital gains and distributions
    #[arg(long)]
    long_term_gains: Option<Decimal>,

    /// Dividends, including qualified
    #[arg(long)]
    dividends: Option<Decimal>,

    /// Pre-tax 401(k)/HSA/IRA contributions
    #[arg(long)]
    pretax: Option<Decimal>,

    /// Student loan interest paid
    #[arg(long)]
    student_loan: Option<Decimal>,

    /// Mortgage interest paid
    #[arg(long)]
    mortgage: Option<Decimal>,

    /// State and local taxes paid (SALT)
    #[arg(long)]
    salt: Option<Decimal>,

    /// Save the merged scenario back to the session file
    #[arg(long, default_value_t = false)]
    save: bool,

    /// Write the breakdown as a CSV sheet (default name Tax_Data_<date>.csv)
    #[arg(long, num_args = 0..=1)]
    sheet: Option<Option<PathBuf>>,

    /// Write the breakdown as a text document (default name Tax_Estimate_<date>.txt)
    #[arg(long, num_args = 0..=1)]
    document: Option<Option<PathBuf>>,
}

/// Applies command-line overrides on top of the loaded scenario.
fn merge(mut inputs: TaxInputs, args: &Args) -> Result<TaxInputs> {
    if let Some(code) = &args.status {
        inputs.filing_status = FilingStatus::parse(code).with_context(|| {
            format!("unrecognised filing status '{code}' (expected S or MFJ)")
        })?;
    }
    if let Some(state) = &args.state {
        inputs.jurisdiction = state.clone();
    }
    if let Some(dependents) = args.dependents {
        inputs.dependent_count = dependents;
    }
    if let Some(v) = args.salary {
        inputs.salary = v;
    }
    if let Some(v) = args.self_employment {
        inputs.self_employment_profit = v;
    }
    if let Some(v) = args.tips {
        inputs.qualified_tips = v;
    }
    if let Some(v) = args.overtime {
        inputs.qualified_overtime = v;
    }
    if let Some(v) = args.short_term_gains {
        inputs.short_term_gains = v;
    }
    if let Some(v) = args.long_term_gains {
        inputs.long_term_gains = v;
    }
    if let Some(v) = args.dividends {
        inputs.dividends = v;
    }
    if let Some(v) = args.pretax {
        inputs.pretax_contributions = v;
    }
    if let Some(v) = args.student_loan {
        inputs.student_loan_interest = v;
    }
    if let Some(v) = args.mortgage {
        inputs.mortgage_interest = v;
    }
    if let Some(v) = args.salt {
        inputs.salt_paid = v;
    }
    Ok(inputs)
}

fn default_export_name(stem: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!(
        "{stem}_{}.{extension}",
        Local::now().format("%Y%m%d")
    ))
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let states = us_states();
    if args.list_states {
        for name in states.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let store = JsonSessionStore::new(&args.session);
    let inputs = merge(store.load_or_default(), &args)?;
    debug!(?inputs, "merged scenario");

    let result = compute(&inputs, &FederalRules::year_2025(), &states);
    let rows = breakdown(&inputs, &result);

    print!("{}", render_document(REPORT_TITLE, &rows));

    if args.save {
        store
            .save(&inputs)
            .with_context(|| format!("failed to save session: {}", store.path().display()))?;
        println!("Scenario saved to {}", store.path().display());
    }

    if let Some(path) = &args.sheet {
        let path = path
            .clone()
            .unwrap_or_else(|| default_export_name("Tax_Data", "csv"));
        let file = File::create(&path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        write_sheet(&rows, file)
            .with_context(|| format!("failed to write sheet: {}", path.display()))?;
        println!("Sheet written to {}", path.display());
    }

    if let Some(path) = &args.document {
        let path = path
            .clone()
            .unwrap_or_else(|| default_export_name("Tax_Estimate", "txt"));
        std::fs::write(&path, render_document(REPORT_TITLE, &rows))
            .with_context(|| format!("failed to write document: {}", path.display()))?;
        println!("Document written to {}", path.display());
    }

    Ok(())
}
