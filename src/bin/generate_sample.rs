use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use klimatdata::{MunicipalityEmissions, SectorSeries, Series, YearValue};

/// Exponentially declining path from `start` with up to ±2% yearly noise.
fn declining(
    rng: &mut StdRng,
    years: std::ops::RangeInclusive<i32>,
    start: f64,
    rate: f64,
) -> Series {
    let first = *years.start();
    years
        .map(|year| {
            let base = start * (1.0 - rate).powi(year - first);
            let noise = rng.random_range(-0.02..=0.02) * base;
            YearValue::new(year, (base + noise).max(0.0))
        })
        .collect()
}

fn main() -> Result<()> {
    // Fixed seed so the sample file is reproducible.
    let mut rng = StdRng::seed_from_u64(42);

    // Raw sector label, level in 1990 (tons CO₂e), yearly decline.
    let sectors = [
        ("Transporter", 95_000.0, 0.012),
        ("Utrikes transporter", 21_000.0, 0.004),
        ("Industri (energi + processer)", 60_000.0, 0.020),
        ("Jordbruk", 18_000.0, 0.006),
        ("Egen uppvärmning av bostäder och lokaler", 30_000.0, 0.045),
        ("El och fjärrvärme", 42_000.0, 0.035),
        ("Arbetsmaskiner", 9_000.0, 0.008),
        ("Produktanvändning (inkl. lösningsmedel)", 4_000.0, 0.010),
        ("Avfall (inkl.avlopp)", 7_000.0, 0.030),
    ];

    let sector_series: Vec<SectorSeries> = sectors
        .iter()
        .map(|&(name, start, rate)| {
            SectorSeries::new(name, declining(&mut rng, 1990..=2021, start, rate))
        })
        .collect();

    let historical: Series = (1990..=2021)
        .map(|year| {
            let total = sector_series
                .iter()
                .filter_map(|s| s.series.value_at(year))
                .sum::<f64>();
            YearValue::new(year, total)
        })
        .collect();

    let last = historical.points.last().map_or(0.0, |p| p.value);
    let trend = declining(&mut rng, 2021..=2050, last, 0.015);
    // Paris-aligned budget: halve roughly every five years from 2024.
    let budget: Series = (2024..=2050)
        .map(|year| YearValue::new(year, last * 0.87f64.powi(year - 2024)))
        .collect();

    let emissions = MunicipalityEmissions {
        name: "Exempelby".to_string(),
        historical,
        trend,
        budget,
        sectors: sector_series,
    };

    let output_path = "sample_emissions.json";
    let json = serde_json::to_string_pretty(&emissions).context("serializing sample")?;
    std::fs::write(output_path, json).with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} sectors ({} historical years) to {output_path}",
        emissions.sectors.len(),
        emissions.historical.len()
    );
    Ok(())
}
