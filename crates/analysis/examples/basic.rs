//! Basic example: score a month, forecast the next, check for spikes
//!
//! Run with: cargo run --example basic -p analysis

use analysis::{Bill, BillAnalyzer, SchoolProfile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let school = SchoolProfile::new(420, 3200.0);
    let history = vec![
        Bill::new("2024-01", 8200.0, 31000.0),
        Bill::new("2024-02", 8500.0, 30500.0),
        Bill::new("2024-03", 7900.0, 29800.0),
        Bill::new("2024-04", 8100.0, 30200.0),
    ];
    let analyzer = BillAnalyzer::default();

    println!("=== Submitting May bill ===");
    let report = analyzer.submit(&school, &history, &Bill::new("2024-05", 19500.0, 30100.0))?;
    println!("Electricity score: {:.0}", report.scores.electricity_score);
    println!("Water score:       {:.0}", report.scores.water_score);
    println!("Efficiency score:  {:.2}", report.efficiency_score);
    println!("Forecast kWh:      {:?}", report.predictions.electricity);
    println!("Anomaly:           {:?}\n", report.anomaly);

    let mut updated = history;
    updated.push(report.bill);

    println!("=== Trend insights ===");
    let insights = analyzer.insights(&updated);
    for point in &insights.trends {
        println!("  {}: {:.0} kWh, {:.0} L", point.period, point.electricity_kwh, point.water_liters);
    }
    println!("Anomaly: {:?}", insights.anomaly);

    Ok(())
}
