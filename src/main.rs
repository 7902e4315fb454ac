//! Investment Calculator CLI
//!
//! Command-line interface for running the financial calculators. Requests
//! go through the same type-tag dispatch the HTTP collaborator uses.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use invest_calc::{create_calculator, Calculator, CalculatorInputs, ChartData};

#[derive(Parser)]
#[command(
    name = "invest_calc",
    version,
    about = "Financial calculators: DCA, compound interest, retirement planning"
)]
struct Cli {
    /// Emit the summary and chart data as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write the chart series to a CSV file
    #[arg(long, global = true, value_name = "PATH")]
    chart_csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dollar-cost-averaging projection with monthly contributions
    Dca {
        /// Monthly contribution amount
        #[arg(long)]
        monthly: f64,

        /// Investment horizon in years (at most 50)
        #[arg(long)]
        years: f64,

        /// Assumed annual return in percent (0-50)
        #[arg(long = "return")]
        return_rate: f64,
    },

    /// Lump-sum compound interest
    Compound {
        /// Starting principal
        #[arg(long)]
        principal: f64,

        /// Investment horizon in years (at most 50)
        #[arg(long)]
        years: f64,

        /// Assumed annual return in percent (0-50)
        #[arg(long = "return")]
        return_rate: f64,
    },

    /// Required monthly savings to reach a retirement target
    Retirement {
        /// Current age (18-80)
        #[arg(long)]
        current_age: f64,

        /// Planned retirement age (50-100)
        #[arg(long)]
        retirement_age: f64,

        /// Savings already accumulated (may be 0)
        #[arg(long, default_value_t = 0.0)]
        current_savings: f64,

        /// Target amount at retirement
        #[arg(long)]
        target: f64,

        /// Assumed annual return in percent (0-50)
        #[arg(long = "return")]
        return_rate: f64,
    },
}

impl Command {
    /// The wire-level type tag and raw fields for this request
    fn into_request(self) -> (&'static str, CalculatorInputs) {
        match self {
            Command::Dca {
                monthly,
                years,
                return_rate,
            } => (
                "dca",
                CalculatorInputs::new()
                    .with("monthly", monthly)
                    .with("years", years)
                    .with("returnRate", return_rate),
            ),
            Command::Compound {
                principal,
                years,
                return_rate,
            } => (
                "compound",
                CalculatorInputs::new()
                    .with("principal", principal)
                    .with("years", years)
                    .with("returnRate", return_rate),
            ),
            Command::Retirement {
                current_age,
                retirement_age,
                current_savings,
                target,
                return_rate,
            } => (
                "retirement",
                CalculatorInputs::new()
                    .with("currentAge", current_age)
                    .with("retirementAge", retirement_age)
                    .with("currentSavings", current_savings)
                    .with("targetAmount", target)
                    .with("returnRate", return_rate),
            ),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let (tag, inputs) = cli.command.into_request();

    let calculator = create_calculator(tag, &inputs)?;
    let chart = calculator.generate_chart_data();
    log::info!("{tag} calculation complete ({} chart points)", chart.len());

    if cli.json {
        let payload = serde_json::json!({
            "summary": calculator.summary(),
            "chartData": chart,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_report(&calculator, &chart);
    }

    if let Some(path) = &cli.chart_csv {
        write_chart_csv(path, &chart)
            .with_context(|| format!("failed to write chart CSV to {}", path.display()))?;
        if !cli.json {
            println!("\nChart series written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_report(calculator: &Calculator, chart: &ChartData) {
    println!("Investment Calculator v0.1.0");
    println!("============================\n");

    match calculator {
        Calculator::Dca(calc) => {
            let result = calc.calculate();
            println!("Dollar-Cost Averaging");
            println!("  Monthly Investment: ${:.2}", calc.monthly_investment());
            println!("  Years: {}", calc.years());
            println!("  Annual Return: {}%", calc.annual_return());
            println!();

            println!("{:>6} {:>14} {:>14}", "Year", "Invested", "Value");
            println!("{}", "-".repeat(36));
            if let ChartData::Dca(points) = chart {
                for point in points {
                    println!(
                        "{:>6.1} {:>14.0} {:>14.0}",
                        point.year, point.invested, point.value
                    );
                }
            }

            println!("\nSummary:");
            println!("  Final Value: ${:.2}", result.final_value);
            println!("  Total Invested: ${:.2}", result.total_invested);
            println!("  Total Return: ${:.2}", result.total_return);
            println!("  Return: {:.2}%", result.return_percentage);
        }
        Calculator::Compound(calc) => {
            let result = calc.calculate();
            println!("Compound Interest");
            println!("  Principal: ${:.2}", calc.principal());
            println!("  Years: {}", calc.years());
            println!("  Annual Return: {}%", calc.annual_return());
            println!();

            println!("{:>6} {:>14} {:>14}", "Year", "Principal", "Value");
            println!("{}", "-".repeat(36));
            if let ChartData::Compound(points) = chart {
                for point in points {
                    println!(
                        "{:>6} {:>14.0} {:>14.0}",
                        point.year, point.principal, point.value
                    );
                }
            }

            println!("\nSummary:");
            println!("  Final Value: ${:.2}", result.final_value);
            println!("  Total Return: ${:.2}", result.total_return);
            println!("  Return: {:.2}%", result.return_percentage);
            let doubling = calc.doubling_time();
            if doubling.is_finite() {
                println!("  Doubling Time: {doubling} years (Rule of 72)");
            } else {
                println!("  Doubling Time: never at 0% return");
            }
        }
        Calculator::Retirement(calc) => {
            let result = calc.calculate();
            println!("Retirement Planning");
            println!("  Current Age: {}", calc.current_age());
            println!("  Retirement Age: {}", calc.retirement_age());
            println!("  Current Savings: ${:.2}", calc.current_savings());
            println!("  Target Amount: ${:.2}", calc.target_amount());
            println!("  Annual Return: {}%", calc.annual_return());
            println!();

            println!("{:>6} {:>14} {:>14}", "Age", "Value", "Target");
            println!("{}", "-".repeat(36));
            if let ChartData::Retirement(points) = chart {
                for point in points {
                    println!(
                        "{:>6} {:>14.0} {:>14.0}",
                        point.age, point.value, point.target
                    );
                }
            }

            println!("\nSummary:");
            println!("  Years to Retirement: {}", result.years_to_retirement);
            println!("  Monthly Required: ${:.2}", result.monthly_required);
            println!("  Total to Invest: ${:.2}", result.total_to_invest);
            if result.shortfall > 0.0 {
                println!("  Shortfall: ${:.2}", result.shortfall);
            }
            if result.surplus > 0.0 {
                println!("  Surplus: ${:.2}", result.surplus);
            }
            println!(
                "  On Track: {}",
                if calc.is_on_track() { "yes" } else { "no" }
            );
        }
    }
}

fn write_chart_csv(path: &Path, chart: &ChartData) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    match chart {
        ChartData::Dca(points) => {
            for point in points {
                writer.serialize(point)?;
            }
        }
        ChartData::Compound(points) => {
            for point in points {
                writer.serialize(point)?;
            }
        }
        ChartData::Retirement(points) => {
            for point in points {
                writer.serialize(point)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
