//! Step throughput benchmark on random soups of increasing size

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use sparse_life::{Cell, SimulationGrid, presets};
use tracing_subscriber::EnvFilter;

const DENSITY: f64 = 0.3;

/// Average milliseconds per generation and final population
fn benchmark_soup(size: u32, iterations: u32) -> (f64, usize, usize) {
    let mut rng = StdRng::seed_from_u64(u64::from(size));
    let mut grid = SimulationGrid::new();
    grid.seed_region(Cell::new(0, 0), size, DENSITY, &mut rng);
    let initial = grid.population();

    let start = Instant::now();
    grid.step_n(iterations as usize);
    let ms = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);

    (ms, initial, grid.population())
}

/// Pattern that grows without bound, so the frontier keeps expanding
fn benchmark_glider_gun(generations: usize) -> (f64, usize) {
    let mut grid = SimulationGrid::new();
    presets::glider_gun().place_on(&mut grid, Cell::new(0, 0));

    let start = Instant::now();
    grid.step_n(generations);
    let ms = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;

    (ms, grid.population())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Sparse Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>14}", "Soup", "Initial", "Final", "ms/gen", "cells/sec");
    println!("{:-<64}", "");

    for size in sizes {
        let (ms, initial, last) = benchmark_soup(size, iterations);
        let throughput = initial as f64 / (ms / 1000.0);
        println!(
            "{:>10} {:>12} {:>12} {:>12.2} {:>13.1}M",
            format!("{}x{}", size, size),
            initial,
            last,
            ms,
            throughput / 1_000_000.0
        );
    }

    println!("\n=== Gosper Glider Gun ===\n");

    for generations in [100, 1000, 5000] {
        let (ms, population) = benchmark_glider_gun(generations);
        println!("{:>6} gens: {:>8.3} ms/gen, population {}", generations, ms, population);
    }
}
