//! Frequency samples and event catalogues, either listed explicitly
//! or drawn at random from a population

use rand::prelude::*;
use rand_distr::Normal;
use rand_xoshiro::Xoshiro256StarStar;

use phenomd::{Event, EventBatch};
use super::{Config, InputError};

/// Interval of admissible values of an event parameter. The upper end
/// is always included, the lower end only if `open` is false.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub open: bool,
}

impl Domain {
    const fn closed(min: f64, max: f64) -> Self {
        Domain { min, max, open: false }
    }

    const fn open_below(min: f64, max: f64) -> Self {
        Domain { min, max, open: true }
    }

    pub fn contains(&self, x: f64) -> bool {
        let above = if self.open { x > self.min } else { x >= self.min };
        above && x <= self.max
    }
}

/// Physical domain of each event parameter, used to truncate draws
/// from a population. Masses, mass ratios and distances must be
/// strictly positive.
const DOMAINS: [(&str, Domain); 5] = [
    ("chirp_mass", Domain::open_below(0.0, f64::INFINITY)),
    ("eta", Domain::open_below(0.0, 0.25)),
    ("chi1", Domain::closed(-1.0, 1.0)),
    ("chi2", Domain::closed(-1.0, 1.0)),
    ("distance", Domain::open_below(0.0, f64::INFINITY)),
];

/// Rejected draws allowed per sample before giving up.
const MAX_ATTEMPTS: usize = 10_000;

/// Reads the frequency samples from the `frequency` section, either as
/// an explicit list of `values`, or as `samples` points between `min`
/// and `max`, spaced linearly or (by default) logarithmically.
pub fn read_frequencies(config: &Config) -> Result<Vec<f64>, InputError> {
    if config.contains("frequency:values") {
        let f: Vec<f64> = config.read("frequency:values")?;
        return Ok(f);
    }

    let min: f64 = config.read("frequency:min")?;
    let max: f64 = config.read("frequency:max")?;
    let samples: usize = config.read("frequency:samples")?;
    let spacing: String = if config.contains("frequency:spacing") {
        config.read("frequency:spacing")?
    } else {
        "log".to_owned()
    };

    if samples < 2 {
        return Err(InputError::invalid("frequency:samples", "at least two samples are required"));
    }

    if !(min > 0.0 && max > min) {
        return Err(InputError::invalid("frequency", "require 0 < min < max"));
    }

    let n = (samples - 1) as f64;
    let f = match spacing.as_str() {
        "linear" | "lin" => {
            (0..samples).map(|i| min + (max - min) * (i as f64) / n).collect()
        },
        "log" | "logarithmic" => {
            let ratio = (max / min).ln();
            (0..samples).map(|i| min * (ratio * (i as f64) / n).exp()).collect()
        },
        _ => return Err(InputError::invalid("frequency:spacing", "expected 'linear' or 'log'")),
    };

    Ok(f)
}

/// Reads the events to evaluate, from the `events` section if present,
/// or by sampling the `population` section otherwise.
pub fn read_events(config: &Config) -> Result<EventBatch, InputError> {
    if config.contains("events") {
        read_catalogue(config)
    } else if config.contains("population") {
        read_population(config)
    } else {
        Err(InputError::location("events", "events"))
    }
}

/// A list of events, given field by field. Fields given as a single
/// value are shared by every event. Component masses `m1` and `m2` may
/// be given in place of the chirp mass and symmetric mass ratio.
fn read_catalogue(config: &Config) -> Result<EventBatch, InputError> {
    let (first, second) = if config.contains("events:m1") {
        ("m1", "m2")
    } else {
        ("chirp_mass", "eta")
    };

    let names = [first, second, "chi1", "chi2", "distance"];
    let mut fields: Vec<Vec<f64>> = Vec::with_capacity(names.len());

    for name in names.iter() {
        let path = format!("events:{}", name);
        // spins default to zero
        let values: Vec<f64> = if name.starts_with("chi") && !config.contains(&path) {
            vec![0.0]
        } else {
            config.read(&path)?
        };
        fields.push(values);
    }

    let len = fields.iter().map(|v| v.len()).max().unwrap_or(0);

    for (name, values) in names.iter().zip(fields.iter_mut()) {
        if values.len() == 1 {
            let v = values[0];
            values.resize(len, v);
        } else if values.len() != len {
            let msg = format!("expected 1 or {} values, found {}", len, values.len());
            return Err(InputError::invalid(&format!("events:{}", name), &msg));
        }
    }

    if first == "m1" {
        let batch = (0..len)
            .map(|i| Event::from_masses(fields[0][i], fields[1][i], fields[2][i], fields[3][i], fields[4][i]))
            .collect();
        return Ok(batch);
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    EventBatch::new(next(), next(), next(), next(), next())
        .map_err(|e| InputError::invalid("events", &e.to_string()))
}

/// How a single event parameter is distributed across a population.
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Prior {
    Fixed(f64),
    Uniform(f64, f64),
    Normal(f64, f64),
}

impl Prior {
    /// Reads a prior from `path`, which may be a scalar, a range
    /// `[min, max]`, or a mapping `{mean: .., std: ..}`.
    pub fn read(config: &Config, path: &str) -> Result<Self, InputError> {
        if config.contains(format!("{}:mean", path)) {
            let mean: f64 = config.read(format!("{}:mean", path))?;
            let std: f64 = config.read(format!("{}:std", path))?;
            if !(std > 0.0) {
                return Err(InputError::invalid(path, "standard deviation must be positive"));
            }
            return Ok(Prior::Normal(mean, std));
        }

        let values: Vec<f64> = config.read(path)?;
        match values.as_slice() {
            [x] => Ok(Prior::Fixed(*x)),
            [min, max] if max >= min => Ok(Prior::Uniform(*min, *max)),
            _ => Err(InputError::invalid(path, "expected a value, a range [min, max] or {mean, std}")),
        }
    }

    /// Draws a value that lies in `domain`, rejecting draws outside it.
    /// Returns None if no such value is found.
    pub fn sample<R: Rng>(&self, domain: &Domain, rng: &mut R) -> Option<f64> {
        let draw = |rng: &mut R| -> f64 {
            match *self {
                Prior::Fixed(x) => x,
                Prior::Uniform(a, b) => if a == b { a } else { rng.gen_range(a, b) },
                Prior::Normal(mu, sigma) => {
                    // sigma > 0 is checked when the prior is read
                    Normal::new(mu, sigma).map(|n| rng.sample(n)).unwrap_or(f64::NAN)
                },
            }
        };

        (0..MAX_ATTEMPTS)
            .map(|_| draw(&mut *rng))
            .find(|x| domain.contains(*x))
    }
}

/// A random catalogue of `count` events. Every draw is truncated to the
/// physical domain of its parameter.
fn read_population(config: &Config) -> Result<EventBatch, InputError> {
    let count: usize = config.read("population:count")?;
    let seed: u64 = if config.contains("population:seed") {
        config.read("population:seed")?
    } else {
        0
    };

    let mut priors = Vec::with_capacity(DOMAINS.len());
    for (name, _) in DOMAINS.iter() {
        let path = format!("population:{}", name);
        let prior = if name.starts_with("chi") && !config.contains(&path) {
            Prior::Fixed(0.0)
        } else {
            Prior::read(config, &path)?
        };
        priors.push(prior);
    }

    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut fields = vec![Vec::with_capacity(count); DOMAINS.len()];

    for _ in 0..count {
        for ((prior, (name, domain)), field) in priors.iter().zip(DOMAINS.iter()).zip(fields.iter_mut()) {
            let x = prior.sample(domain, &mut rng)
                .ok_or_else(|| InputError::invalid(
                    &format!("population:{}", name),
                    "prior does not overlap the physical domain"
                ))?;
            field.push(x);
        }
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    EventBatch::new(next(), next(), next(), next(), next())
        .map_err(|e| InputError::invalid("population", &e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::input::InputErrorKind;
    use super::*;

    fn config(text: &str) -> Config {
        let mut config = Config::from_string(text).unwrap();
        config.with_context("constants").unwrap();
        config
    }

    #[test]
    fn log_and_linear_grids() {
        let cfg = config("---
        frequency:
          min: 10.0
          max: 1 * kHz
          samples: 3
        ");
        let f = read_frequencies(&cfg).unwrap();
        println!("f = {:?}", f);
        assert_eq!(f.len(), 3);
        assert!((f[1] - 100.0).abs() < 1.0e-10);
        assert!((f[2] - 1000.0).abs() < 1.0e-10);

        let cfg = config("---
        frequency:
          min: 10.0
          max: 30.0
          samples: 5
          spacing: linear
        ");
        let f = read_frequencies(&cfg).unwrap();
        assert_eq!(f, vec![10.0, 15.0, 20.0, 25.0, 30.0]);

        let cfg = config("---
        frequency:
          values: [20, 50.0, 2 * 50]
        ");
        let f = read_frequencies(&cfg).unwrap();
        assert_eq!(f, vec![20.0, 50.0, 100.0]);

        let cfg = config("---
        frequency:
          min: 10.0
          max: 30.0
          samples: 5
          spacing: cubic
        ");
        assert!(read_frequencies(&cfg).is_err());
    }

    #[test]
    fn catalogue_broadcasts_scalars() {
        let cfg = config("---
        events:
          chirp_mass: [30.0, 12.0, 1.2]
          eta: 0.25
          chi1: [0.1, 0.2, 0.3]
          distance: 500 * Mpc
        ");
        let batch = read_events(&cfg).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.eta(), &[0.25, 0.25, 0.25]);
        assert_eq!(batch.chi2(), &[0.0, 0.0, 0.0]);
        assert!(batch.distance().iter().all(|d| (d - 0.5).abs() < 1.0e-15));
        assert_eq!(batch.event(2).chi1, 0.3);

        let cfg = config("---
        events:
          chirp_mass: [30.0, 12.0, 1.2]
          eta: [0.25, 0.2]
          distance: 0.5
        ");
        let err = read_events(&cfg).unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::Invalid);
    }

    #[test]
    fn catalogue_from_component_masses() {
        let cfg = config("---
        events:
          m1: [36.0, 10.0]
          m2: [29.0, 10.0]
          distance: 0.41
        ");
        let batch = read_events(&cfg).unwrap();
        let expected = Event::from_masses(36.0, 29.0, 0.0, 0.0, 0.41);
        assert_eq!(batch.event(0), expected);
        assert!((batch.eta()[1] - 0.25).abs() < 1.0e-15);
    }

    #[test]
    fn population_is_reproducible() {
        let text = "---
        population:
          count: 200
          seed: 17
          chirp_mass: [5.0, 80.0]
          eta: {mean: 0.24, std: 0.05}
          chi1: {mean: 0.0, std: 0.5}
          chi2: 0.1
          distance: [100 * Mpc, 3 * Gpc]
        ";
        let first = read_events(&config(text)).unwrap();
        let second = read_events(&config(text)).unwrap();
        assert_eq!(first.len(), 200);
        assert_eq!(first.chirp_mass(), second.chirp_mass());
        assert_eq!(first.chi1(), second.chi1());

        // every draw lies in the physical domain
        assert!(first.validate().is_ok());
        assert!(first.chirp_mass().iter().all(|m| *m >= 5.0 && *m < 80.0));
        assert!(first.eta().iter().all(|e| *e > 0.0 && *e <= 0.25));
        assert!(first.chi2().iter().all(|c| *c == 0.1));
        assert!(first.distance().iter().all(|d| *d >= 0.1 && *d < 3.0));
    }

    #[test]
    fn priors() {
        let cfg = config("---
        a: 1.5
        b: [0.0, 2.0]
        c: {mean: 1.0, std: 0.1}
        d: {mean: 1.0, std: -0.1}
        e: [0.0, 1.0, 2.0]
        f: {mean: -10.0, std: 0.1}
        ");
        assert_eq!(Prior::read(&cfg, "a").unwrap(), Prior::Fixed(1.5));
        assert_eq!(Prior::read(&cfg, "b").unwrap(), Prior::Uniform(0.0, 2.0));
        assert_eq!(Prior::read(&cfg, "c").unwrap(), Prior::Normal(1.0, 0.1));
        assert!(Prior::read(&cfg, "d").is_err());
        assert!(Prior::read(&cfg, "e").is_err());

        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let f = Prior::read(&cfg, "f").unwrap();
        let spin = Domain::closed(-1.0, 1.0);
        assert!(f.sample(&spin, &mut rng).is_none());
        assert_eq!(Prior::Fixed(1.5).sample(&spin, &mut rng), None);
        assert_eq!(Prior::Fixed(0.5).sample(&spin, &mut rng), Some(0.5));
        assert_eq!(Prior::Fixed(-1.0).sample(&spin, &mut rng), Some(-1.0));

        let mass = Domain::open_below(0.0, f64::INFINITY);
        assert_eq!(Prior::Fixed(0.0).sample(&mass, &mut rng), None);
        assert_eq!(Prior::Uniform(0.0, 0.0).sample(&mass, &mut rng), None);
        assert!(Prior::Uniform(0.0, 1.0).sample(&mass, &mut rng).unwrap() > 0.0);
    }

    #[test]
    fn malformed_optional_keys() {
        let cfg = config("---
        frequency:
          min: 10.0
          max: 30.0
          samples: 5
          spacing: [log]
        ");
        assert!(read_frequencies(&cfg).is_err());

        let cfg = config("---
        population:
          count: 3
          seed: -1
          chirp_mass: 20.0
          eta: 0.2
          distance: 1.0
        ");
        let err = read_events(&cfg).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Conversion);
    }

    #[test]
    fn zero_distance_is_outside_domain() {
        let cfg = config("---
        population:
          count: 3
          chirp_mass: 20.0
          eta: 0.2
          distance: 0.0
        ");
        let err = read_events(&cfg).unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::Invalid);

        let cfg = config("---
        population:
          count: 3
          chirp_mass: 0.0
          eta: 0.2
          distance: 1.0
        ");
        assert_eq!(read_events(&cfg).unwrap_err().kind(), InputErrorKind::Invalid);
    }
}
