//! Receipt-metadata simulator.
//!
//! There is no OCR behind the receipt scanner: every field is derived from
//! the uploaded file's name and byte size. Wall-clock and randomness are
//! injected through [`Clock`] and [`DayJitter`] so the simulator stays a
//! plain function of its inputs.

use std::sync::LazyLock;

use chrono::{Days, Local, NaiveDate};
use nexus_core::{classify, format_display_date, format_inr};
use rand::Rng;
use rand::rngs::ThreadRng;
use regex::Regex;

use crate::types::ReceiptExtraction;

/// Receipt dates fall within this many days up to and including today.
pub const RECEIPT_LOOKBACK_DAYS: u32 = 10;

/// Merchant shown when nothing usable survives the file-name cleanup.
pub const FALLBACK_MERCHANT: &str = "Smart Merchant";

const SEED_FLOOR: i128 = 300;
const SEED_CEIL: i128 = 15_000;
const AMOUNT_MODULUS: i128 = 12_000;
const AMOUNT_OFFSET: i128 = 420;

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(pdf|png|jpg|jpeg)$").expect("invalid extension pattern"));

/// Source of "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Source of the backdating jitter.
pub trait DayJitter {
    /// Number of days to step back, expected in `0..window`.
    fn days_back(&mut self, window: u32) -> u32;
}

/// Local calendar date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl<F: Fn() -> NaiveDate> Clock for F {
    fn today(&self) -> NaiveDate {
        self()
    }
}

/// Uniform jitter drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R = ThreadRng> {
    rng: R,
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> RandomJitter<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DayJitter for RandomJitter<R> {
    fn days_back(&mut self, window: u32) -> u32 {
        if window == 0 {
            return 0;
        }
        self.rng.gen_range(0..window)
    }
}

impl<F: FnMut(u32) -> u32> DayJitter for F {
    fn days_back(&mut self, window: u32) -> u32 {
        self(window)
    }
}

/// Stateless apart from its clock and jitter source; keeps no reference to
/// anything it produced.
#[derive(Debug, Clone)]
pub struct ReceiptSimulator<C: Clock, J: DayJitter> {
    clock: C,
    jitter: J,
}

impl<C: Clock, J: DayJitter> ReceiptSimulator<C, J> {
    pub fn new(clock: C, jitter: J) -> Self {
        Self { clock, jitter }
    }

    /// Synthesize extraction fields for one uploaded file.
    ///
    /// Total: empty names, zero or negative sizes and huge sizes all produce
    /// a complete extraction.
    pub fn simulate(&mut self, file_name: &str, byte_size: i64) -> ReceiptExtraction {
        let merchant = merchant_from_file_name(file_name);
        let amount = amount_from_byte_size(byte_size);
        let category = classify(file_name);
        let date = self.backdated_today();

        let summary = format!(
            "AI extracted {merchant} purchase for {} on {}. Tagged to {category}.",
            format_inr(amount),
            format_display_date(date),
        );

        log::debug!("simulated receipt for {file_name:?}: {merchant} {amount} {category} {date}");

        ReceiptExtraction {
            merchant,
            amount,
            category,
            date,
            summary,
        }
    }

    fn backdated_today(&mut self) -> NaiveDate {
        let today = self.clock.today();
        // Keep the date inside the lookback window.
        let back = self
            .jitter
            .days_back(RECEIPT_LOOKBACK_DAYS)
            .min(RECEIPT_LOOKBACK_DAYS - 1);
        today
            .checked_sub_days(Days::new(u64::from(back)))
            .unwrap_or(today)
    }
}

/// Simulate with the system clock and thread-local randomness.
pub fn simulate_receipt(file_name: &str, byte_size: i64) -> ReceiptExtraction {
    ReceiptSimulator::new(SystemClock, RandomJitter::<ThreadRng>::default()).simulate(file_name, byte_size)
}

/// "indigo-flight.pdf" -> "Indigo Flight". At most two name parts are kept.
pub fn merchant_from_file_name(file_name: &str) -> String {
    let stem = EXTENSION_RE.replace(file_name, "");
    let merchant = stem
        .split(['-', '_'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .take(2)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if merchant.is_empty() {
        FALLBACK_MERCHANT.to_string()
    } else {
        merchant
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Amount in 420..=12419 seeded by the byte size.
///
/// seed = clamp(round(size / 8), 300, 15000); amount = seed % 12000 + 420.
/// Widened to i128 so `i64::MAX` cannot overflow the rounding step.
pub fn amount_from_byte_size(byte_size: i64) -> u64 {
    let seed = (i128::from(byte_size) + 4)
        .div_euclid(8)
        .clamp(SEED_FLOOR, SEED_CEIL);
    (seed % AMOUNT_MODULUS + AMOUNT_OFFSET) as u64
}
