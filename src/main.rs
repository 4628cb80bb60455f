use anyhow::{Context, Result, bail};
use model_report::config::ReportConfig;
use model_report::tasks::ReportTask;
use model_report::utils::logging;

fn main() -> Result<()> {
    logging::init();

    let Some(arg) = std::env::args().nth(1) else {
        bail!("usage: model-report <config.json> | --schema");
    };

    if arg == "--schema" {
        println!("{}", serde_json::to_string_pretty(&ReportConfig::schema())?);
        return Ok(());
    }

    let config = ReportConfig::from_path(&arg)?;
    let task = ReportTask::new(config).context("invalid report configuration")?;
    for path in task.run().context("report generation failed")? {
        println!("File created -> {}", path.display());
    }
    Ok(())
}
