use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ramp Studio: browse, select and export named color ramps.
#[derive(Parser, Debug)]
#[command(name = "ramp-studio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Palette document override (defaults to `store.path` from config).
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List palettes matching a category and search text.
    List {
        /// Exact category, or "all".
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive text matched against names and tags.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print the matching records as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// List the distinct categories.
    Categories,

    /// Write one palette as a `.clr` color table.
    Clr {
        name: String,

        /// Output path, `-` for stdout. Defaults to the palette name.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write `.clr` files for several palettes (all of them if none named).
    ClrBatch {
        names: Vec<String>,

        /// Output directory (defaults to `export.output_dir`).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Export selected palettes as a JSON bundle.
    Export {
        /// Palettes to select.
        names: Vec<String>,

        /// Also select every palette in this category ("all" for any).
        #[arg(short, long)]
        category: Option<String>,

        /// Also select every palette matching this search text.
        #[arg(short, long)]
        search: Option<String>,

        /// Output path, `-` for stdout (defaults to `export.bundle_file_name`).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Delete a palette from the document (and push to the remote if configured).
    Delete { name: String },

    /// Render a palette over an elevation raster to a PNG preview.
    Preview {
        name: String,

        /// Raster file: ESRI ASCII grid (`.asc`) or a grayscale image.
        raster: PathBuf,

        /// Output PNG path.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Largest preview dimension.
        #[arg(long)]
        max_dimension: Option<u32>,

        /// Sample value rendered transparent.
        #[arg(long, allow_hyphen_values = true)]
        nodata: Option<f64>,

        /// Also treat literal 0 as no-data.
        #[arg(long)]
        zero_is_nodata: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn list_defaults_to_all() {
        let args = Args::try_parse_from(["ramp-studio", "list"]).unwrap();
        match args.command {
            Command::List {
                category,
                search,
                json,
            } => {
                assert_eq!(category, "all");
                assert_eq!(search, "");
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let args =
            Args::try_parse_from(["ramp-studio", "categories", "--store", "/tmp/p.json"]).unwrap();
        assert_eq!(args.store, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn preview_accepts_negative_nodata() {
        let args = Args::try_parse_from([
            "ramp-studio",
            "preview",
            "Dune",
            "dem.asc",
            "--nodata",
            "-9999",
        ])
        .unwrap();
        match args.command {
            Command::Preview { nodata, .. } => assert_eq!(nodata, Some(-9999.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
