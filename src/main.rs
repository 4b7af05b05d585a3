use std::error::Error;
use std::path::{Path, PathBuf};

use colored::*;
use phenomd::*;

mod input;
mod output;

use input::*;
use output::*;

fn run(path: &Path) -> Result<(), Box<dyn Error>> {
    let start = std::time::Instant::now();

    println!("{} configuration from {}...", "Reading".bold().cyan(), path.display().to_string().bold().blue());
    let mut config = Config::from_file(path)?;
    config.with_context("constants")?;

    let model = if config.contains("model:qnm_data") {
        let dir: String = config.read("model:qnm_data")?;
        println!("{} QNM frequencies from {}...", "Importing".bold().cyan(), dir.bold().blue());
        let table = QnmTable::from_dir(&dir)?;
        let (lo, hi) = table.spin_range();
        println!("{} import, {} knots spanning {:.3} <= a <= {:.3}.", "Completed".bold().bright_green(), table.len(), lo, hi);
        PhenomD::new(table)
    } else {
        PhenomD::default()
    };

    let f = read_frequencies(&config)?;
    let batch = read_events(&config)?;
    batch.validate()?;

    let quantities = read_quantities(&config)?;
    let dir = read_directory(&config)?;
    std::fs::create_dir_all(&dir).map_err(|_| OutputError::write(&dir))?;

    if batch.is_empty() || f.is_empty() {
        eprintln!("{} nothing to evaluate: {} events at {} frequencies.", "Warning:".bold().yellow(), batch.len(), f.len());
        return Ok(());
    }

    println!("{} {} events at {} frequencies...", "Evaluating".bold().cyan(), batch.len(), f.len());

    let f_min = f.iter().cloned().fold(f64::INFINITY, f64::min);
    let f_max = f.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let grid = Grid::broadcast(&f);
    let cutoff = model.cutoff_frequency(&batch);

    for quantity in quantities.iter() {
        match quantity {
            Quantity::Phase => write_quantity(&dir, *quantity, &f, &model.phase(&grid, &batch)?)?,
            Quantity::Amplitude => write_quantity(&dir, *quantity, &f, &model.amplitude(&grid, &batch)?)?,
            Quantity::TimeToCoalescence => write_quantity(&dir, *quantity, &f, &model.time_to_coalescence(&grid, &batch)?)?,
            Quantity::Strain => write_strain(&dir, &f, &model.strain(&grid, &batch)?)?,
            Quantity::Cutoff => {
                let peak = model.peak_frequency(&batch);
                let remnants = model.remnants(&batch);
                write_events(&dir, &batch, &cutoff, &peak, &remnants)?
            },
        }
        let filename = dir.join(format!("{}.dat", quantity.name()));
        println!("{} {}.", "Written".bold().bright_green(), filename.display());
    }

    let truncated = cutoff.iter().filter(|fc| **fc <= f_max).count();
    if truncated > 0 {
        eprintln!(
            "{} {} of {} events have a cutoff below {:.3e} Hz; their waveforms vanish above it.",
            "Warning:".bold().yellow(), truncated, batch.len(), f_max,
        );
    }

    let tau = model.time_to_coalescence(&Grid::broadcast(&[f_min]), &batch)?;
    let longest = tau.as_slice().iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!("Longest signal in band lasts {} from {:.3e} Hz.", Seconds(longest), f_min);

    println!("{} in {}.", "Completed".bold().bright_green(), PrettyDuration::from(start.elapsed()));
    Ok(())
}

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("{} {}", "Error:".bold().red(), InputError::file());
            std::process::exit(1);
        },
    };

    if let Err(e) = run(&path) {
        eprintln!("{} {}", "Error:".bold().red(), e);
        std::process::exit(1);
    }
}
