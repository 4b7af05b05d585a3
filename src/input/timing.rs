//! Printing run times and signal durations

use std::fmt;

/// Wrapper around std::time::Duration
pub struct PrettyDuration {
    pub duration: std::time::Duration,
}

impl From<std::time::Duration> for PrettyDuration {
    fn from(duration: std::time::Duration) -> PrettyDuration {
        PrettyDuration {duration}
    }
}

impl fmt::Display for PrettyDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut t = self.duration.as_secs();
        let s = t % 60;
        t /= 60;
        let min = t % 60;
        t /= 60;
        let hr = t % 24;
        let d = t / 24;
        if d > 0 {
            write!(f, "{}d {:02}:{:02}:{:02}", d, hr, min, s)
        } else if hr > 0 || min > 0 || s > 0 {
            write!(f, "{:02}:{:02}:{:02}", hr, min, s)
        } else {
            write!(f, "{}", Seconds(self.duration.as_secs_f64()))
        }
    }
}

/// A duration in seconds, printed with the nearest SI prefix
pub struct Seconds(pub f64);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.0.is_finite() || self.0 == 0.0 {
            return write!(f, "{: >8.2}  s", self.0);
        }
        // find nearest SI prefix
        let power = 3.0 * (self.0.abs().log10() / 3.0).floor();
        // and clip to -18 <= x <= 0
        let power = power.min(0.0f64).max(-18.0f64);
        let power = power as i32;
        let (unit, scale) = match power {
            -18 => ("as", 1.0e18),
            -15 => ("fs", 1.0e15),
            -12 => ("ps", 1.0e12),
            -9  => ("ns", 1.0e9),
            -6  => ("\u{03bc}s", 1.0e6),
            -3  => ("ms", 1.0e3),
            _   => (" s", 1.0)
        };
        write!(f, "{: >8.2} {}", scale * self.0, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_format() {
        let t = 2.6e-4_f64;
        let output = Seconds(t).to_string();
        println!("\"{}\" => \"{}\"", t, output);
        assert_eq!(output, "  260.00 \u{03bc}s");

        // signals from light binaries last minutes
        let output = Seconds(157.3).to_string();
        assert_eq!(output, "  157.30  s");

        let output = Seconds(0.0).to_string();
        assert_eq!(output, "    0.00  s");
    }

    #[test]
    fn duration_format() {
        let d = std::time::Duration::from_secs(2 * 86400 + 3 * 3600 + 25);
        assert_eq!(PrettyDuration::from(d).to_string(), "2d 03:00:25");

        let d = std::time::Duration::from_secs(61);
        assert_eq!(PrettyDuration::from(d).to_string(), "00:01:01");

        let d = std::time::Duration::from_millis(12);
        assert_eq!(PrettyDuration::from(d).to_string(), "   12.00 ms");
    }
}
