use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::month_window;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, paint};
use crate::utils::date::{month_label, resolve_month};
use crate::utils::formatting::pad_left;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { month } = cmd {
        let reference = resolve_month(month)?;
        let window = month_window(reference, cfg.week_start)?;

        println!("{}", month_label(window.month()));

        let mut weeks = window.weeks().peekable();
        if let Some(first) = weeks.peek() {
            let names: Vec<String> = first
                .iter()
                .map(|d| pad_left(&d.date.format("%a").to_string(), 3))
                .collect();
            println!("{}", names.join(" "));
        }

        for week in weeks {
            let cells: Vec<String> = week
                .iter()
                .map(|d| {
                    let n = pad_left(&d.date.format("%e").to_string().trim().to_string(), 3);
                    if d.in_current_month {
                        n
                    } else {
                        paint(&n, GREY, cfg.color_output)
                    }
                })
                .collect();
            println!("{}", cells.join(" "));
        }

        println!(
            "{} → {} ({} days)",
            window.start(),
            window.end(),
            window.len()
        );
    }
    Ok(())
}
