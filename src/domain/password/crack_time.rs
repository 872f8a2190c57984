//! Human-readable brute-force time estimates.

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;
const CENTURY: f64 = 100.0 * YEAR;
const MILLENNIUM: f64 = 1_000.0 * YEAR;
const MILLION_YEARS: f64 = 1_000_000.0 * YEAR;

/// Describes a duration in seconds using the coarsest fitting unit.
///
/// `log10_seconds` must be the base-10 logarithm of `seconds`; it is used
/// for the astronomical range, where `seconds` may have overflowed to infinity.
pub fn describe(seconds: f64, log10_seconds: f64) -> String {
    if seconds < 1.0 {
        return "Instantly".to_string();
    }
    if seconds < MINUTE {
        return count(seconds, 1.0, "second", "seconds");
    }
    if seconds < HOUR {
        return count(seconds, MINUTE, "minute", "minutes");
    }
    if seconds < DAY {
        return count(seconds, HOUR, "hour", "hours");
    }
    if seconds < MONTH {
        return count(seconds, DAY, "day", "days");
    }
    if seconds < YEAR {
        return count(seconds, MONTH, "month", "months");
    }
    if seconds < CENTURY {
        return count(seconds, YEAR, "year", "years");
    }
    if seconds < MILLENNIUM {
        return count(seconds, CENTURY, "century", "centuries");
    }
    if seconds < MILLION_YEARS {
        return count(seconds, MILLENNIUM, "millennium", "millennia");
    }
    scientific_years(log10_seconds - YEAR.log10())
}

fn count(seconds: f64, unit: f64, singular: &str, plural: &str) -> String {
    let n = (seconds / unit).floor() as u64;
    format!("{} {}", n, if n > 1 { plural } else { singular })
}

/// `1.23e+15 years`, computed from the exponent so it never overflows.
fn scientific_years(log10_years: f64) -> String {
    let mut exponent = log10_years.floor();
    let mut mantissa = 10f64.powf(log10_years - exponent);
    if (mantissa * 100.0).round() >= 1_000.0 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    format!("{:.2}e+{:02} years", mantissa, exponent as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(seconds: f64) -> String {
        describe(seconds, seconds.log10())
    }

    #[test]
    fn under_a_second_is_instant() {
        assert_eq!(label(0.0), "Instantly");
        assert_eq!(label(0.99), "Instantly");
    }

    #[test]
    fn each_breakpoint_picks_its_unit() {
        assert_eq!(label(20.88), "20 seconds");
        assert_eq!(label(1.0), "1 second");
        assert_eq!(label(90.0), "1 minute");
        assert_eq!(label(7_200.0), "2 hours");
        assert_eq!(label(609_568.9), "7 days");
        assert_eq!(label(DAY), "1 day");
        assert_eq!(label(3.0 * MONTH), "3 months");
        assert_eq!(label(42.0 * YEAR), "42 years");
        assert_eq!(label(250.0 * YEAR), "2 centuries");
        assert_eq!(label(150.0 * YEAR), "1 century");
        assert_eq!(label(5_500.0 * YEAR), "5 millennia");
    }

    #[test]
    fn astronomical_durations_use_scientific_notation() {
        assert_eq!(label(1.23e15 * YEAR), "1.23e+15 years");
        assert_eq!(label(2.0e6 * YEAR), "2.00e+06 years");
    }

    #[test]
    fn overflowed_seconds_still_format() {
        assert_eq!(describe(f64::INFINITY, 400.0 + YEAR.log10()), "1.00e+400 years");
    }
}
