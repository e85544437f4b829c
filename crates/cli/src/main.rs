//! # ecoscore
//!
//! Command-line interface for scoring school utility bills, forecasting
//! consumption and flagging unusual months.

use analysis::{
    Bill, BillAnalyzer, EfficiencyScores, Metric, SchoolProfile, SubmissionReport, TrendInsights,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod input;

use input::{load_history, CliError};

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Parser)]
#[command(name = "ecoscore")]
#[command(about = "School electricity and water efficiency analysis", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single bill
    Score {
        /// Enrolled students
        #[arg(long)]
        students: u32,

        /// Built area
        #[arg(long)]
        area: f64,

        /// Electricity usage in kWh
        #[arg(long)]
        kwh: f64,

        /// Water usage in liters
        #[arg(long)]
        liters: f64,
    },

    /// Analyze a bill history: trends, forecasts and anomalies
    Analyze {
        /// Input file (CSV or JSON) with month, kwh and liters per bill
        #[arg(short, long)]
        input: PathBuf,

        /// Enrolled students
        #[arg(long)]
        students: u32,

        /// Built area
        #[arg(long)]
        area: f64,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = server::config::DEFAULT_PORT)]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = server::config::DEFAULT_HOST)]
        host: String,
    },
}

fn score_bill(school: &SchoolProfile, kwh: f64, liters: f64) -> CliResult<EfficiencyScores> {
    let bill = Bill::new("", kwh, liters);
    Ok(BillAnalyzer::default().score(school, &bill)?)
}

fn run_score(students: u32, area: f64, kwh: f64, liters: f64) -> CliResult<()> {
    let scores = score_bill(&SchoolProfile::new(students, area), kwh, liters)?;

    println!("Per-student electricity: {:.2} kWh", scores.per_student_electricity);
    println!("Per-area electricity:    {:.4} kWh", scores.per_area_electricity);
    println!("Per-student water:       {:.2} L", scores.per_student_water);
    println!("Per-area water:          {:.4} L", scores.per_area_water);
    println!("Electricity score:       {:.0}", scores.electricity_score);
    println!("Water score:             {:.0}", scores.water_score);
    println!("Efficiency score:        {:.2}", scores.combined_score);
    Ok(())
}

fn format_prediction(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "n/a".to_string())
}

fn print_analysis(submission: &SubmissionReport, insights: &TrendInsights) {
    println!("Bills analyzed: {}", insights.trends.len());
    println!("\nTrend:");
    for point in &insights.trends {
        println!(
            "  {}  {:>12.2} kWh  {:>12.2} L",
            point.period, point.electricity_kwh, point.water_liters
        );
    }

    println!("\nLatest bill ({}):", submission.bill.period);
    println!("  Electricity score: {:.0}", submission.scores.electricity_score);
    println!("  Water score:       {:.0}", submission.scores.water_score);
    println!("  Efficiency score:  {:.2}", submission.efficiency_score);
    if let Some(message) = &submission.anomaly {
        println!("  Z-score check:     {}", message);
    }

    println!("\nNext period forecast:");
    for metric in Metric::ALL {
        let unit = match metric {
            Metric::Electricity => "kWh",
            Metric::Water => "L",
        };
        println!(
            "  {:<12} {} {}",
            format!("{}:", metric),
            format_prediction(insights.predictions.get(metric)),
            unit
        );
    }

    match &insights.anomaly {
        Some(message) => println!("\nAlert: {}", message),
        None => println!("\nNo unusual usage in the latest bill"),
    }
}

fn analyze(school: &SchoolProfile, history: &[Bill]) -> CliResult<(SubmissionReport, TrendInsights)> {
    let (latest, earlier) = history.split_last().ok_or(CliError::EmptyHistory)?;
    let analyzer = BillAnalyzer::default();
    let submission = analyzer.submit(school, earlier, latest)?;
    let insights = analyzer.insights(history);
    Ok((submission, insights))
}

fn run_analyze(
    input: PathBuf,
    students: u32,
    area: f64,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let mut history = load_history(&input)?;
    history.sort_by(|a, b| a.period.cmp(&b.period));
    tracing::debug!(bills = history.len(), path = ?input, "loaded history");

    let school = SchoolProfile::new(students, area);
    let (submission, insights) = analyze(&school, &history)?;
    print_analysis(&submission, &insights);

    if let Some(path) = output {
        let json = serde_json::json!({
            "school": school,
            "latest": submission,
            "insights": insights,
        });
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, &json)?;
        println!("\nResults written to {:?}", path);
    }
    Ok(())
}

fn run_serve(host: String, port: u16) -> CliResult<()> {
    let config = server::ServerConfig {
        host,
        port,
        ..server::ServerConfig::from_env()?
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config, BillAnalyzer::default()))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "cli=debug,analysis=debug,server=debug"
    } else {
        "cli=info,analysis=warn,server=info"
    };
    server::init_tracing(filter);

    let result = match cli.command {
        Commands::Score {
            students,
            area,
            kwh,
            liters,
        } => run_score(students, area, kwh, liters),

        Commands::Analyze {
            input,
            students,
            area,
            output,
        } => run_analyze(input, students, area, output),

        Commands::Serve { port, host } => run_serve(host, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
