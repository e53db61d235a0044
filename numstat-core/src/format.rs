//! Fixed-point rendering of statistics.
//!
//! `format!("{:.6}", x)` rounds exact ties to even. Results here round ties
//! away from zero instead, computed on the exact binary value of the `f64`:
//! `0.0078125` renders as `0.007813`.

/// Number of digits after the decimal point used for every statistic.
pub const DEFAULT_DECIMALS: usize = 6;

/// Largest precision accepted by the configuration.
pub const MAX_DECIMALS: usize = 20;

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Magnitude from which values are rendered in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Renders `value` with exactly `decimals` digits after the decimal point.
///
/// Negative zero renders without a sign. Non-finite values render as
/// `Infinity`, `-Infinity` or `NaN`; magnitudes of `1e21` and above use the
/// shortest exponent form (`1e+21`).
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    // Digits kept, integer part followed by the first `decimals` fraction digits.
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5');
    if round_up && increment(&mut digits) {
        digits.insert(0, b'1');
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| *d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| *d as char));
    }
    out
}

/// Adds one to the last digit of an ASCII digit string. Returns `true` when
/// the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}
