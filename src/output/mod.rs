//! Writes waveform quantities and per-event summaries
//! as plain-text tables

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use phenomd::{Complex64, EventBatch, Grid, Remnant};
use crate::input::Config;

mod error;

pub use error::*;

/// The quantities that can be requested in the `output` section.
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Quantity {
    Phase,
    Amplitude,
    Strain,
    TimeToCoalescence,
    Cutoff,
}

impl Quantity {
    /// File stem of the table that holds this quantity
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Phase => "phase",
            Quantity::Amplitude => "amplitude",
            Quantity::Strain => "strain",
            Quantity::TimeToCoalescence => "tau",
            Quantity::Cutoff => "fcut",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Phase => "rad",
            Quantity::Amplitude | Quantity::Strain => "1/Hz",
            Quantity::TimeToCoalescence => "s",
            Quantity::Cutoff => "Hz",
        }
    }
}

impl FromStr for Quantity {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phase" | "psi" => Ok(Quantity::Phase),
            "amplitude" | "amp" => Ok(Quantity::Amplitude),
            "strain" | "h" => Ok(Quantity::Strain),
            "tau" | "time_to_coalescence" => Ok(Quantity::TimeToCoalescence),
            "fcut" | "cutoff" => Ok(Quantity::Cutoff),
            _ => Err(OutputError::conversion(s, "output quantity")),
        }
    }
}

/// Reads the list of quantities to write from `output:quantities`.
/// Phase, amplitude and the per-event summary are written if the key is absent.
pub fn read_quantities(config: &Config) -> Result<Vec<Quantity>, Box<dyn Error>> {
    let names: Vec<String> = if config.contains("output:quantities") {
        config.read("output:quantities")?
    } else {
        vec!["phase".to_owned(), "amplitude".to_owned(), "fcut".to_owned()]
    };

    let quantities = names.iter()
        .map(|s| s.parse::<Quantity>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quantities)
}

/// Reads the output directory from `output:directory`, which defaults to
/// the working directory.
pub fn read_directory(config: &Config) -> Result<PathBuf, Box<dyn Error>> {
    let dir: String = if config.contains("output:directory") {
        config.read("output:directory")?
    } else {
        ".".to_owned()
    };
    Ok(PathBuf::from(dir))
}

/// Writes a table with two header lines, holding the column names and
/// units, followed by one tab-separated row per entry of `rows`.
fn write_table<I>(path: &Path, names: &[String], units: &[String], rows: I) -> Result<(), OutputError>
where
    I: Iterator<Item = Vec<f64>>,
{
    let inner = || -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);

        writeln!(file, "{}", names.join("\t"))?;
        writeln!(file, "{}", units.join("\t"))?;

        for row in rows {
            let line: Vec<String> = row.iter().map(|x| format!("{:.9e}", x)).collect();
            writeln!(file, "{}", line.join("\t"))?;
        }

        file.flush()
    };

    inner().map_err(|_| OutputError::write(path))
}

/// Writes a real quantity, sampled at frequencies `f`, for every event.
/// The first column is the frequency, followed by one column per event.
pub fn write_quantity(dir: &Path, quantity: Quantity, f: &[f64], values: &Grid) -> Result<(), OutputError> {
    let path = dir.join(format!("{}.dat", quantity.name()));

    let mut names = vec!["f".to_owned()];
    let mut units = vec!["Hz".to_owned()];
    for i in 0..values.events() {
        names.push(format!("{}_{}", quantity.name(), i));
        units.push(quantity.unit().to_owned());
    }

    let rows = f.iter()
        .enumerate()
        .map(|(j, f)| {
            let mut row = vec![*f];
            row.extend((0..values.events()).map(|i| values[(j, i)]));
            row
        });

    write_table(&path, &names, &units, rows)
}

/// Writes the complex strain as pairs of columns, real and imaginary part,
/// for every event.
pub fn write_strain(dir: &Path, f: &[f64], values: &Grid<Complex64>) -> Result<(), OutputError> {
    let quantity = Quantity::Strain;
    let path = dir.join(format!("{}.dat", quantity.name()));

    let mut names = vec!["f".to_owned()];
    let mut units = vec!["Hz".to_owned()];
    for i in 0..values.events() {
        names.push(format!("re_h_{}", i));
        names.push(format!("im_h_{}", i));
        units.push(quantity.unit().to_owned());
        units.push(quantity.unit().to_owned());
    }

    let rows = f.iter()
        .enumerate()
        .map(|(j, f)| {
            let mut row = vec![*f];
            for i in 0..values.events() {
                let h = values[(j, i)];
                row.push(h.re);
                row.push(h.im);
            }
            row
        });

    write_table(&path, &names, &units, rows)
}

/// Writes one row per event: its parameters, the cutoff and peak
/// frequencies (in Hz), and the spin and radiated energy of the remnant.
pub fn write_events(dir: &Path, batch: &EventBatch, cutoff: &[f64], peak: &[f64], remnants: &[Remnant]) -> Result<(), OutputError> {
    let path = dir.join(format!("{}.dat", Quantity::Cutoff.name()));

    let names: Vec<String> = ["chirp_mass", "eta", "chi1", "chi2", "distance", "fcut", "fpeak", "final_spin", "radiated_energy"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let units: Vec<String> = ["Msun", "1", "1", "1", "Gpc", "Hz", "Hz", "1", "M"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows = batch.iter()
        .zip(cutoff.iter().zip(peak.iter()))
        .zip(remnants.iter())
        .map(|((ev, (fcut, fpeak)), remnant)| {
            vec![
                ev.chirp_mass, ev.eta, ev.chi1, ev.chi2, ev.distance,
                *fcut, *fpeak,
                remnant.spin, remnant.radiated_energy,
            ]
        });

    write_table(&path, &names, &units, rows)
}

#[cfg(test)]
mod tests {
    use phenomd::{Event, PhenomD};
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("phenomd-output-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn quantity_names() {
        for name in ["phase", "amplitude", "strain", "tau", "fcut"].iter() {
            let q: Quantity = name.parse().unwrap();
            assert_eq!(q.name(), *name);
        }
        let q: Result<Quantity, _> = "chirp".parse();
        assert!(q.is_err());
        println!("{}", q.unwrap_err());
    }

    #[test]
    fn output_section() {
        let config = Config::from_string("---
        output:
          directory: results
          quantities: [strain, tau]
        ").unwrap();
        assert_eq!(read_quantities(&config).unwrap(), vec![Quantity::Strain, Quantity::TimeToCoalescence]);
        assert_eq!(read_directory(&config).unwrap(), PathBuf::from("results"));

        let config = Config::from_string("---
        frequency:
          values: [20.0]
        ").unwrap();
        assert_eq!(read_quantities(&config).unwrap(), vec![Quantity::Phase, Quantity::Amplitude, Quantity::Cutoff]);
        assert_eq!(read_directory(&config).unwrap(), PathBuf::from("."));

        // present but malformed values are errors, not defaults
        let config = Config::from_string("---
        output:
          directory: [a, b]
          quantities: {phase: true}
        ").unwrap();
        let err = read_quantities(&config).unwrap_err();
        println!("{}", err);
        assert!(read_directory(&config).is_err());

        let config = Config::from_string("---
        output:
          quantities: [phase, chirp]
        ").unwrap();
        assert!(read_quantities(&config).is_err());
    }

    #[test]
    fn tables() {
        let dir = scratch("tables");
        let model = PhenomD::default();
        let batch: EventBatch = vec![
            Event::new(30.0, 0.2222222, 0.0, 0.0, 0.5),
            Event::new(12.0, 0.21, 0.6, -0.2, 1.3),
        ].into_iter().collect();

        let f = [20.0, 50.0, 100.0];
        let grid = Grid::broadcast(&f);

        let amplitude = model.amplitude(&grid, &batch).unwrap();
        write_quantity(&dir, Quantity::Amplitude, &f, &amplitude).unwrap();

        let contents = std::fs::read_to_string(dir.join("amplitude.dat")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        println!("{}", contents);
        assert_eq!(lines.len(), 2 + f.len());
        assert_eq!(lines[0], "f\tamplitude_0\tamplitude_1");
        assert_eq!(lines[1], "Hz\t1/Hz\t1/Hz");

        let row: Vec<f64> = lines[3].split('\t').map(|s| s.parse().unwrap()).collect();
        assert_eq!(row[0], 50.0);
        assert!((row[2] - amplitude[(1, 1)]).abs() < 1.0e-9 * amplitude[(1, 1)]);

        let strain = model.strain(&grid, &batch).unwrap();
        write_strain(&dir, &f, &strain).unwrap();
        let contents = std::fs::read_to_string(dir.join("strain.dat")).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(header.split('\t').count(), 1 + 2 * batch.len());

        let cutoff = model.cutoff_frequency(&batch);
        let peak = model.peak_frequency(&batch);
        let remnants = model.remnants(&batch);
        write_events(&dir, &batch, &cutoff, &peak, &remnants).unwrap();
        let contents = std::fs::read_to_string(dir.join("fcut.dat")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2 + batch.len());
        let row: Vec<f64> = lines[2].split('\t').map(|s| s.parse().unwrap()).collect();
        assert_eq!(row.len(), 9);
        assert!((row[5] - 548.9485907644039).abs() < 1.0e-6);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_location() {
        let dir = std::path::Path::new("/nonexistent/phenomd");
        let grid = Grid::broadcast(&[1.0]);
        let result = write_quantity(dir, Quantity::Phase, &[1.0], &grid);
        assert!(matches!(result, Err(OutputError::Write(_))));
    }
}
