use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const STEM: &str = "social_media_3platforms_3years";
const YEARS: [i32; 3] = [2022, 2023, 2024];

/// Per-platform base reach and how interactive its audience is.
const PLATFORMS: [(&str, f64, f64); 3] = [
    ("Instagram", 4_000.0, 0.080),
    ("TikTok", 9_000.0, 0.060),
    ("YouTube", 6_500.0, 0.045),
];

/// Per-format multiplier on reach.
const CONTENT_TYPES: [(&str, f64); 4] = [("Image", 0.7), ("Reel", 1.4), ("Story", 0.5), ("Video", 1.2)];

/// Write a synthetic post table as CSV and Parquet.
#[derive(Debug, Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Directory the files are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Posts per platform per month.
    #[arg(long, default_value_t = 30)]
    posts_per_month: u32,

    /// PRNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct SampleRow {
    date: String,
    platform: &'static str,
    content_type: &'static str,
    views: u64,
    likes: u64,
    comments: u64,
    shares: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Multiplicative jitter in `[1 - spread, 1 + spread)`.
    fn jitter(&mut self, spread: f64) -> f64 {
        1.0 - spread + 2.0 * spread * self.next_f64()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(start), Some(end)) => (end - start).num_days() as u32,
        _ => 28,
    }
}

fn generate(args: &Args) -> Vec<SampleRow> {
    let mut rng = SimpleRng::new(args.seed);
    let mut rows = Vec::new();

    for (year_idx, &year) in YEARS.iter().enumerate() {
        // Audiences grow year over year.
        let growth = 1.0 + 0.25 * year_idx as f64;
        for month in 1..=12 {
            let days = days_in_month(year, month);
            for &(platform, reach, interactivity) in &PLATFORMS {
                for _ in 0..args.posts_per_month {
                    let (content_type, boost) = CONTENT_TYPES[rng.below(CONTENT_TYPES.len() as u64) as usize];
                    let day = 1 + rng.below(u64::from(days)) as u32;

                    let views = (reach * growth * boost * rng.jitter(0.6)).round() as u64;
                    let interactions = views as f64 * interactivity;
                    let likes = (interactions * rng.jitter(0.3)).round() as u64;
                    let comments = (interactions * 0.12 * rng.jitter(0.5)).round() as u64;
                    let shares = (interactions * 0.08 * rng.jitter(0.5)).round() as u64;

                    rows.push(SampleRow {
                        date: format!("{year:04}-{month:02}-{day:02}"),
                        platform,
                        content_type,
                        views,
                        likes,
                        comments,
                        shares,
                    });
                }
            }
        }
    }

    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}

fn write_csv(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("date", DataType::Utf8, false),
        Field::new("platform", DataType::Utf8, false),
        Field::new("content_type", DataType::Utf8, false),
        Field::new("views", DataType::UInt64, false),
        Field::new("likes", DataType::UInt64, false),
        Field::new("comments", DataType::UInt64, false),
        Field::new("shares", DataType::UInt64, false),
    ]));

    let counts = |f: fn(&SampleRow) -> u64| UInt64Array::from(rows.iter().map(f).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(rows.iter().map(|r| r.date.as_str()).collect::<Vec<_>>())),
            Arc::new(StringArray::from(rows.iter().map(|r| r.platform).collect::<Vec<_>>())),
            Arc::new(StringArray::from(rows.iter().map(|r| r.content_type).collect::<Vec<_>>())),
            Arc::new(counts(|r| r.views)),
            Arc::new(counts(|r| r.likes)),
            Arc::new(counts(|r| r.comments)),
            Arc::new(counts(|r| r.shares)),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing Parquet batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rows = generate(&args);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;

    let csv_path = args.output_dir.join(format!("{STEM}.csv"));
    let parquet_path = args.output_dir.join(format!("{STEM}.parquet"));
    write_csv(&csv_path, &rows)?;
    write_parquet(&parquet_path, &rows)?;

    println!(
        "Wrote {} posts to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
