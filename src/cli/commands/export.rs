use crate::cli::commands::prepare_layout;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::diagnostics;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        file,
        month,
        force,
    } = cmd
    {
        let (_, report) = prepare_layout(file, month, cfg)?;
        diagnostics(&report.diagnostics);
        ExportLogic::export(&report, *format, out, *force)?;
    }
    Ok(())
}
