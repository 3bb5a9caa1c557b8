//! Generates 8-bit sine lookup tables as C source, for inclusion in firmware.
//!
//! Each sample is `round((sin(x) + 1) * 127.5)` over the span selected by a
//! [`WaveShape`], so every value fits in a `uint8_t`.

use std::f64::consts::PI;
use std::str::FromStr;

use thiserror::Error;

/// Table sizes the generated header can select between, ascending.
pub const SAMPLE_COUNTS: [usize; 3] = [256, 512, 1024];
pub const DEFAULT_SAMPLE_COUNT: usize = 512;
/// Values per row in the generated header.
pub const COLUMNS: usize = 14;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("sample count must be greater than zero")]
    EmptyTable,
    #[error("column count must be greater than zero")]
    NoColumns,
    #[error("unsupported sample count {0}, valid values are: 256, 512, 1024")]
    UnsupportedSampleCount(usize),
    #[error("unknown wave shape `{0}`, expected one of: full, half, quarter")]
    UnknownWaveShape(String),
}

/// Fraction of a sine period spanned by one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveShape {
    /// `[0, 2π)`
    #[default]
    Full,
    /// `[0, π)`
    Half,
    /// `[0, π/2)`
    Quarter,
}

impl WaveShape {
    /// Phase advance between two consecutive samples of a `count` sized table.
    pub fn step(self, count: usize) -> f64 {
        let span = match self {
            WaveShape::Full => 2.0 * PI,
            WaveShape::Half => PI,
            WaveShape::Quarter => PI / 2.0,
        };
        span / count as f64
    }

    pub fn table_name(self) -> &'static str {
        match self {
            WaveShape::Full => "SINE_FULL_WAVE",
            WaveShape::Half => "SINE_HALF_WAVE",
            WaveShape::Quarter => "SINE_QUARTER_WAVE",
        }
    }
}

/// Accepts `full`, `half`, `quarter` in any case, or the legacy codes `0`, `1`, `2`.
impl FromStr for WaveShape {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "0" => Ok(WaveShape::Full),
            "half" | "1" => Ok(WaveShape::Half),
            "quarter" | "2" => Ok(WaveShape::Quarter),
            _ => Err(TableError::UnknownWaveShape(s.to_owned())),
        }
    }
}

/// Ties round to even, so `sin(0)` lands on 128.
fn quantize(sine: f64) -> u8 {
    ((sine + 1.0) * 127.5).round_ties_even() as u8
}

fn compute_samples(count: usize, shape: WaveShape) -> Vec<u8> {
    let step = shape.step(count);
    (0..count).map(|i| quantize((i as f64 * step).sin())).collect()
}

/// Computes `count` samples of `shape`, starting at phase 0.
pub fn sine_samples(count: usize, shape: WaveShape) -> Result<Vec<u8>, TableError> {
    if count == 0 {
        return Err(TableError::EmptyTable);
    }
    Ok(compute_samples(count, shape))
}

fn format_table(samples: &[u8], shape: WaveShape, columns: usize) -> String {
    let rows: Vec<String> = samples
        .chunks(columns)
        .map(|row| {
            let values: Vec<String> = row.iter().map(|v| format!("{:>3}", v)).collect();
            format!("    {}", values.join(", "))
        })
        .collect();

    format!(
        "const uint8_t {}[SAMPLE_COUNT] =\n  {{\n{}\n  }};\n",
        shape.table_name(),
        rows.join(",\n")
    )
}

/// Renders `count` samples of `shape` as a declaration, `columns` values per row.
pub fn generate_table(count: usize, shape: WaveShape, columns: usize) -> Result<String, TableError> {
    if columns == 0 {
        return Err(TableError::NoColumns);
    }
    let samples = sine_samples(count, shape)?;
    Ok(format_table(&samples, shape, columns))
}

/// One table per entry of [`SAMPLE_COUNTS`], plus the count selected by `#define SAMPLE_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineArrays {
    pub sample_count: usize,
    pub shape: WaveShape,
    pub tables: [(usize, Vec<u8>); 3],
}

impl SineArrays {
    pub fn new(sample_count: usize, shape: WaveShape) -> Result<Self, TableError> {
        if !SAMPLE_COUNTS.contains(&sample_count) {
            return Err(TableError::UnsupportedSampleCount(sample_count));
        }
        Ok(Self::build(sample_count, shape))
    }

    fn build(sample_count: usize, shape: WaveShape) -> Self {
        Self {
            sample_count,
            shape,
            tables: SAMPLE_COUNTS.map(|count| (count, compute_samples(count, shape))),
        }
    }

    /// Header comment, the `SAMPLE_COUNT` define, one conditional branch per
    /// table and an `#error` fallback.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("/* Sine Wave precalculated data from \"generate_sine_array\" */\n");
        out.push_str("/* Valid values for SAMPLE_COUNT are: 256, 512, or 1024 */\n\n");
        out.push_str(&format!("#define SAMPLE_COUNT {}\n\n", self.sample_count));

        for (idx, (count, samples)) in self.tables.iter().enumerate() {
            let keyword = if idx == 0 { "#if" } else { "#elif" };
            out.push_str(&format!("{} SAMPLE_COUNT == {}\n\n", keyword, count));
            out.push_str(&format_table(samples, self.shape, COLUMNS));
            out.push('\n');
        }

        out.push_str("#else\n");
        out.push_str("#error \"Valid values for SAMPLE_COUNT are: 256, 512, 1024\"\n");
        out.push_str("#endif\n");
        out
    }
}

/// The header with `SAMPLE_COUNT` 512 and full-wave tables.
pub fn generate_document() -> String {
    SineArrays::build(DEFAULT_SAMPLE_COUNT, WaveShape::Full).render()
}

pub fn generate_document_with(sample_count: usize, shape: WaveShape) -> Result<String, TableError> {
    Ok(SineArrays::new(sample_count, shape)?.render())
}
