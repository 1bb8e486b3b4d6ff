use crate::cli::commands::prepare_layout;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::render::RenderOptions;
use crate::render::day::render_day;
use crate::render::month::render_month;
use crate::ui::messages::{diagnostics, info};
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Layout {
        file,
        month,
        day,
        quiet,
    } = cmd
    {
        // --day implies its own month unless --month is given
        let month = match (month, day) {
            (None, Some(d)) => Some(d.get(..7).unwrap_or(d).to_string()),
            (m, _) => m.clone(),
        };

        let (window, report) = prepare_layout(file, &month, cfg)?;

        if !*quiet {
            diagnostics(&report.diagnostics);
        }

        if let Some(d) = day {
            let date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            let Some(day_layout) = report.day(date) else {
                return Err(AppError::InvalidDate(format!(
                    "{} is not in the grid {} → {}",
                    date,
                    window.start(),
                    window.end()
                )));
            };

            if day_layout.placements.is_empty() {
                info(format!("No sessions on {}", date));
            } else {
                println!("=== {} ===", date);
                print!("{}", render_day(day_layout));
            }
            return Ok(());
        }

        print!("{}", render_month(&report, &window, &RenderOptions::from(cfg)));

        if report.is_empty() {
            info("No sessions in this month.");
        } else {
            println!("Lanes: {}", report.lane_count);
        }
    }
    Ok(())
}
