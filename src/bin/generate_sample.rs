use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generate a deterministic sample CSV for driving the demo pipeline:
/// shuffled daily rows with a numeric revenue column that forms three
/// separated bands (so clustering has something to find), plus a
/// categorical region column.
fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let regions = ["north", "south", "west"];
    let bands = [20.0, 150.0, 400.0];

    let mut rows: Vec<(String, f64, &str)> = (0..60)
        .map(|day| {
            let date = start + chrono::Days::new(day);
            let band = bands[(day % 3) as usize];
            let revenue = band + rng.gen_range(-10.0..10.0);
            let region = regions[rng.gen_range(0..regions.len())];
            (date.format("%Y-%m-%d").to_string(), revenue, region)
        })
        .collect();

    // Shuffle so the pipeline's chronological ordering has work to do.
    rows.shuffle(&mut rng);

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["date", "revenue", "region"])
        .expect("Failed to write header");
    for (date, revenue, region) in &rows {
        writer
            .write_record([date.as_str(), &format!("{revenue:.2}"), region])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV");

    println!("Wrote {} rows to {output_path}", rows.len());
}
