use std::io::{self, Lines, StdinLock, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use slope_core::traits::Derivative;
use slope_core::{parse_line, presets, solvers};

/// Numerically approximates y(tEnd) for a first-order ODE y' = f(t, y)
/// typed as a free-form expression, using the Euler, Improved Euler, and
/// classic Runge-Kutta methods. With no flags, runs an interactive loop.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Approximate one expression non-interactively, e.g. "t-1.5*y".
    #[arg(long)]
    expr: Option<String>,

    /// Run one of the built-in verification equations by name.
    #[arg(long, conflicts_with = "expr")]
    preset: Option<String>,

    /// List the built-in verification equations and exit.
    #[arg(long)]
    list_presets: bool,

    /// Initial time (used with --expr).
    #[arg(long, default_value_t = 0.0)]
    t0: f64,

    /// Initial value y(t0) (used with --expr).
    #[arg(long, default_value_t = 0.0)]
    y0: f64,

    /// End time (used with --expr).
    #[arg(long, default_value_t = 1.0)]
    t_end: f64,

    /// Step size.
    #[arg(long, default_value_t = 0.1)]
    h: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_presets {
        for p in presets::PRESETS {
            println!(
                "{:8} y' = {:10} t0 = {}, y0 = {}, tEnd = {}",
                p.name, p.formula, p.t0, p.y0, p.t_end
            );
        }
        return Ok(());
    }

    if let Some(name) = &args.preset {
        let p = presets::find(name).ok_or_else(|| anyhow!("no preset named '{name}'"))?;
        println!("y' = {}", p.formula);
        report(p, p.t0, p.y0, p.t_end, args.h);
        return Ok(());
    }

    if let Some(expr) = &args.expr {
        let ast = parse_line(expr)?;
        report(&ast, args.t0, args.y0, args.t_end, args.h);
        return Ok(());
    }

    repl()
}

fn report<D: Derivative<f64>>(f: &D, t0: f64, y0: f64, t_end: f64, h: f64) {
    println!("Euler Method: {}", solvers::euler(f, t0, y0, t_end, h));
    println!(
        "Improved Euler Method: {}",
        solvers::improved_euler(f, t0, y0, t_end, h)
    );
    println!("Runge Kutta: {}", solvers::rk4(f, t0, y0, t_end, h));
}

type InputLines = Lines<StdinLock<'static>>;

fn prompt(lines: &mut InputLines, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Re-prompts until the operator types a number. Returns None on end of
/// input.
fn prompt_number(lines: &mut InputLines, text: &str) -> Result<Option<f64>> {
    loop {
        let Some(line) = prompt(lines, text)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// The interactive loop. Every failure is recoverable: a bad expression
/// line prints its diagnostic and offers a retry.
fn repl() -> Result<()> {
    let mut lines = io::stdin().lines();

    loop {
        let Some(line) = prompt(&mut lines, "y' = ")? else {
            return Ok(());
        };

        let ast = match parse_line(&line) {
            Ok(ast) => ast,
            Err(err) => {
                println!("{err}");
                let Some(answer) = prompt(&mut lines, "Exit Application? (y/n): ")? else {
                    return Ok(());
                };
                if answer.trim() == "y" {
                    return Ok(());
                }
                println!();
                continue;
            }
        };

        let Some(t0) = prompt_number(&mut lines, "t0 = ")? else {
            return Ok(());
        };
        let Some(y0) = prompt_number(&mut lines, "y0 = ")? else {
            return Ok(());
        };
        let Some(t_end) = prompt_number(&mut lines, "tEnd = ")? else {
            return Ok(());
        };

        // Keep approximating with new step sizes until the operator types
        // anything that isn't a number.
        let mut prompt_text = "Input step size (h): ";
        loop {
            let Some(answer) = prompt(&mut lines, prompt_text)? else {
                return Ok(());
            };
            let Ok(h) = answer.trim().parse::<f64>() else {
                break;
            };
            println!();
            report(&ast, t0, y0, t_end, h);
            println!();
            prompt_text = "Input step size h (anything but a number to exit): ";
        }
        println!();
    }
}
