//! Parse input configuration file

use std::path::Path;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;

mod error;
mod types;
mod timing;
mod catalogue;

pub use error::*;
use types::*;
pub use timing::*;
pub use catalogue::*;

/// Represents the input configuration, which defines the frequency
/// grid, the events to evaluate and what to write out.
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be opened or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| InputError::file())?;
        Self::from_string(&contents)
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)
            .map_err(|_| InputError::file())?;
        let input = input.first()
            .ok_or(InputError::file())?;

        Ok(Config {
            input: input.clone(),
            ctx: HashMapContext::new(),
        })
    }

    /// Loads automatic values for units and mathematical functions.
    /// Also loads and evaluates mathematical expressions
    /// that are given in the specified `section`.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        use helper::context_function;

        // masses in solar masses, distances in Gpc, frequencies in Hz
        let mut ctx = context_map! {
            "Msun" => 1.0,
            "Gpc" => 1.0,
            "Mpc" => 1.0e-3,
            "kpc" => 1.0e-6,
            "Hz" => 1.0,
            "kHz" => 1.0e3,
            "pi" => std::f64::consts::PI,
        }.map_err(|_| InputError::conversion(section, "default context"))?;

        context_function!(ctx, "sqrt",   f64::sqrt);
        context_function!(ctx, "cbrt",   f64::cbrt);
        context_function!(ctx, "abs",    f64::abs);
        context_function!(ctx, "exp",    f64::exp);
        context_function!(ctx, "ln",     f64::ln);
        context_function!(ctx, "log10",  f64::log10);
        context_function!(ctx, "sin",    f64::sin);
        context_function!(ctx, "cos",    f64::cos);
        context_function!(ctx, "tan",    f64::tan);
        context_function!(ctx, "floor",  f64::floor);
        context_function!(ctx, "ceil",   f64::ceil);
        context_function!(ctx, "round",  f64::round);
        context_function!(ctx, "pow",    f64::powf, 2);

        // symmetric mass ratio and chirp mass of a pair of component masses
        context_function!(ctx, "eta",        |m1: f64, m2: f64| m1 * m2 / (m1 + m2).powi(2), 2);
        context_function!(ctx, "chirp_mass", |m1: f64, m2: f64| (m1 * m2).powf(0.6) / (m1 + m2).powf(0.2), 2);

        self.ctx = ctx;

        // Read in from 'constants' block if it exists
        if self.input[section].is_badvalue() {
            return Ok(self);
        }

        let block = self.input[section].as_hash()
            .ok_or_else(|| InputError::conversion(section, section))?;

        for (a, b) in block {
            // grab the value, if possible
            let (key, value) = match (a, b) {
                (Yaml::String(k), Yaml::Integer(i)) => (Some(k), Some(*i as f64)),
                (Yaml::String(k), Yaml::Real(s)) => (Some(k), s.parse::<f64>().ok()),
                (Yaml::String(k), Yaml::String(s)) => (Some(k), eval_number_with_context(s, &self.ctx).ok()),
                _ => (None, None),
            };

            // insert it into the context so it's available for the next read
            match (key, value) {
                (Some(key), Some(v)) => {
                    self.ctx.set_value(key.clone(), Value::from(v))
                        .map_err(|_| {
                            eprintln!("Failed to insert {} = {} from constants block into context.", key, v);
                            InputError::conversion(section, key)
                        })?
                },
                // found a key, value pair but parsing failed
                (Some(key), None) => return Err(InputError::conversion(section, key)),
                _ => {},
            }
        }

        Ok(self)
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:subsubsection:key'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let address: Vec<&str> = path.as_ref().split(':').collect();
        let value = address.iter()
          .try_fold(&self.input, |y, s| {
              if y[*s].is_badvalue() {
                  Err(InputError::location(path.as_ref(), s))
              } else {
                  Ok(&y[*s])
              }
          })?;
        let last = address.last().copied().unwrap_or_default();
        T::from_yaml(value.clone(), &self.ctx)
            .map_err(|_| InputError::conversion(path.as_ref(), last))
    }

    /// Checks whether the colon-separated `path` leads to a value,
    /// without attempting to parse it.
    pub fn contains<S: AsRef<str>>(&self, path: S) -> bool {
        path.as_ref()
            .split(':')
            .try_fold(&self.input, |y, s| if y[s].is_badvalue() { None } else { Some(&y[s]) })
            .is_some()
    }

    /// Parses a string argument and evaluates it using the default context,
    /// so that e.g. `"2.0 / (1.0 + mc)"` can use `mc` from the
    /// constants block.
    #[allow(unused)]
    pub fn evaluate<S: AsRef<str>>(&self, arg: S) -> Option<f64> {
        eval_number_with_context(arg.as_ref(), &self.ctx).ok()
    }
}

mod helper {
    macro_rules! context_function {
        ($ctx:expr, $name:literal, $func:expr) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let x = arg.as_number()?;
                    Ok(Value::Float($func(x)))
                })
            ).map_err(|_| InputError::conversion("default context", $name))?
        };
        ($ctx:expr, $name:literal, $func:expr, 2) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let arg = arg.as_fixed_len_tuple(2)?;
                    let x = arg[0].as_number()?;
                    let y = arg[1].as_number()?;
                    Ok(Value::Float($func(x, y)))
                })
            ).map_err(|_| InputError::conversion("default context", $name))?
        };
    }

    pub(super) use context_function;
}
