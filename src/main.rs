use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ifc_stream::config::{Config, DEFAULT_DOWNLOADS_DIR, DEFAULT_ROOT_CLASS};
use ifc_stream::session::Session;
use ifc_stream::ui::App;
use ifc_stream::viewer::{format_viewer_psets, PickPayload};

#[derive(Parser, Debug)]
#[command(name = "ifc-stream")]
#[command(about = "IFC Stream - extract, inspect and export quantities from IFC files")]
#[command(version)]
struct Args {
    /// Path to IFC file
    #[arg(required = true)]
    file: PathBuf,

    /// Class to extract (subclasses included)
    #[arg(long, env = "IFC_STREAM_CLASS", default_value = DEFAULT_ROOT_CLASS)]
    class: String,

    /// Export the table to CSV
    #[arg(long)]
    csv: bool,

    /// Export the table to Excel, one sheet per class
    #[arg(long)]
    xlsx: bool,

    /// Export the table to JSON
    #[arg(long)]
    json: bool,

    /// Directory exports are written to
    #[arg(long, value_name = "DIR", env = "IFC_STREAM_DOWNLOADS", default_value = DEFAULT_DOWNLOADS_DIR)]
    downloads: PathBuf,

    /// Print attributes and inverse relations of one entity
    #[arg(long, value_name = "ID")]
    inspect: Option<u64>,

    /// Format a property payload picked in a 3D viewer
    #[arg(long, value_name = "PAYLOAD.json")]
    picked: Option<PathBuf>,

    /// Print class occurrence counts
    #[arg(long)]
    frequency: bool,

    /// Only list classes with more occurrences than this
    #[arg(long, value_name = "N", env = "IFC_STREAM_FREQUENCY_THRESHOLD", default_value_t = 0)]
    higher_than: usize,

    /// New project name (written with --save)
    #[arg(long, value_name = "NAME", requires = "save")]
    rename_project: Option<String>,

    /// Write the (edited) model to a new IFC file
    #[arg(long, value_name = "OUT.ifc")]
    save: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            downloads_dir: self.downloads.clone(),
            root_class: self.class.clone(),
            frequency_threshold: self.higher_than,
        }
    }

    fn is_batch(&self) -> bool {
        self.csv
            || self.xlsx
            || self.json
            || self.inspect.is_some()
            || self.picked.is_some()
            || self.frequency
            || self.save.is_some()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut session = Session::new(args.config());
    session.load_path(&args.file)?;
    session.load_data()?;

    if let Some(name) = &args.rename_project {
        session.change_project_name(name)?;
    }

    if let Some(out) = &args.save {
        session.save_model(out)?;
        println!("Saved model: {}", out.display());
    }

    if args.csv {
        println!("Exported to CSV: {}", session.download_csv()?.display());
    }

    if args.xlsx {
        println!("Exported to Excel: {}", session.download_excel()?.display());
    }

    if args.json {
        println!("Exported to JSON: {}", session.download_json()?.display());
    }

    if args.frequency {
        for (class, count) in session.class_frequency()? {
            println!("{count:>8}  {class}");
        }
    }

    if let Some(id) = args.inspect {
        print_inspection(&mut session, id)?;
    }

    if let Some(path) = &args.picked {
        let payload: PickPayload = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        let sets = format_viewer_psets(&payload);
        println!("{}", serde_json::to_string_pretty(&sets)?);
    }

    if args.is_batch() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(session).run(terminal);
    ratatui::restore();
    result
}

fn print_inspection(session: &mut Session, id: u64) -> Result<()> {
    if !session.inspect(id, true)? {
        println!("#{id} does not exist");
        return Ok(());
    }

    let debug = session.debug();
    println!("Attributes");
    for row in &debug.attributes {
        println!("  {:<32} {}", row.name, row.string_value);
    }
    if !debug.inverse_attributes.is_empty() {
        println!("Inverse attributes");
        for row in &debug.inverse_attributes {
            println!("  {:<32} {}", row.name, row.string_value);
        }
    }
    if !debug.inverse_references.is_empty() {
        println!("Inverse references");
        for reference in &debug.inverse_references {
            println!("  {}", reference.string_value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arguments_build_the_session_config() {
        let args = Args::try_parse_from([
            "ifc-stream",
            "model.ifc",
            "--class",
            "IfcWall",
            "--downloads",
            "/tmp/ifc-exports",
            "--higher-than",
            "3",
        ])
        .unwrap();
        assert_eq!(
            args.config(),
            Config {
                downloads_dir: PathBuf::from("/tmp/ifc-exports"),
                root_class: "IfcWall".to_string(),
                frequency_threshold: 3,
            }
        );
        assert!(!args.is_batch());
    }

    #[test]
    fn rename_requires_save() {
        assert!(Args::try_parse_from(["ifc-stream", "model.ifc", "--rename-project", "X"]).is_err());
    }
}
