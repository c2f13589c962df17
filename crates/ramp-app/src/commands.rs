//! Subcommand handlers. Each one drives a [`Session`] and prints the result.

use crate::cli::Command;
use ramp_common::{Result, StudioError};
use ramp_config::RampStudioConfig;
use ramp_preview::{read_raster, save_png, NoDataPolicy, PreviewRenderer};
use ramp_store::codec;
use ramp_store::export;
use ramp_store::filter;
use ramp_store::{
    CategoryFilter, CommandSync, FilterCriteria, NoRemote, Palette, PaletteStore, RemoteSync,
    Session,
};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn run(command: Command, config: &RampStudioConfig) -> Result<()> {
    let mut session = open_session(config);

    match command {
        Command::List {
            category,
            search,
            json,
        } => list(&mut session, &category, &search, json),
        Command::Categories => {
            println!("{}", filter::ALL_CATEGORIES);
            for category in filter::categories(load(&mut session)?) {
                println!("{category}");
            }
            Ok(())
        }
        Command::Clr { name, out } => clr(&mut session, &name, out),
        Command::ClrBatch { names, out_dir } => {
            let dir = out_dir.unwrap_or_else(|| config.export.output_dir.clone());
            clr_batch(&mut session, &names, &dir)
        }
        Command::Export {
            names,
            category,
            search,
            out,
        } => {
            let out = out.unwrap_or_else(|| PathBuf::from(&config.export.bundle_file_name));
            export_bundle(&mut session, &names, category, search, &out)
        }
        Command::Delete { name } => {
            if session.delete(&name)? {
                println!("Deleted {name}");
                Ok(())
            } else {
                Err(not_found(&name))
            }
        }
        Command::Preview {
            name,
            raster,
            out,
            max_dimension,
            nodata,
            zero_is_nodata,
        } => {
            let renderer = PreviewRenderer::new(
                max_dimension.unwrap_or(config.preview.max_dimension),
                NoDataPolicy {
                    sentinel: nodata.or(config.preview.nodata),
                    zero_is_nodata: zero_is_nodata || config.preview.zero_is_nodata,
                },
            );
            let out = out.unwrap_or_else(|| PathBuf::from(preview_file_name(&name)));
            preview(&mut session, &renderer, &name, &raster, &out)
        }
    }
}

fn open_session(config: &RampStudioConfig) -> Session {
    let remote: Box<dyn RemoteSync> = match config.sync.command.as_deref() {
        Some(argv) => match CommandSync::from_argv(argv) {
            Some(sync) => Box::new(sync),
            None => Box::new(NoRemote),
        },
        None => Box::new(NoRemote),
    };
    Session::with_remote(PaletteStore::new(&config.store.path), remote)
}

/// Load the document and surface what was skipped on the way.
fn load(session: &mut Session) -> Result<&[Palette]> {
    session.palettes()?;
    if let Some(notice) = session.load_report().notice() {
        eprintln!("note: {notice}");
    }
    Ok(session.palettes()?)
}

fn find<'a>(palettes: &'a [Palette], name: &str) -> Result<&'a Palette> {
    palettes
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| not_found(name))
}

fn not_found(name: &str) -> StudioError {
    StudioError::Other(format!("no palette named {name:?}"))
}

fn list(session: &mut Session, category: &str, search: &str, json: bool) -> Result<()> {
    let total = load(session)?.len();
    let criteria = FilterCriteria::new(CategoryFilter::parse(category), search);
    let visible = session.visible(&criteria)?;

    if json {
        println!("{}", export::bundle_json(&visible)?);
        return Ok(());
    }

    let swatches = std::io::stdout().is_terminal();
    let mut out = std::io::stdout().lock();
    for palette in &visible {
        writeln!(out, "{}", describe(palette, swatches))?;
    }
    writeln!(out, "Showing {} of {} palettes", visible.len(), total)?;
    Ok(())
}

fn describe(palette: &Palette, swatches: bool) -> String {
    let mut line = format!(
        "{}  [{}]  {} colors",
        palette.name,
        palette.category,
        palette.colors.len()
    );
    if !palette.tags.is_empty() {
        line.push_str("  #");
        line.push_str(&palette.tags.join(" #"));
    }
    if swatches {
        line.push_str("  ");
        line.push_str(&swatch_strip(&palette.colors));
    }
    line
}

/// Truecolor background blocks, one per color.
fn swatch_strip(colors: &[String]) -> String {
    let mut strip = String::new();
    for hex in colors {
        let c = codec::hex_to_rgb_or_black(hex);
        strip.push_str(&format!("\x1b[48;2;{};{};{}m  ", c.r, c.g, c.b));
    }
    strip.push_str("\x1b[0m");
    strip
}

fn clr(session: &mut Session, name: &str, out: Option<PathBuf>) -> Result<()> {
    let table = session.color_table(name)?.ok_or_else(|| not_found(name))?;
    match out {
        Some(path) if path == Path::new("-") => {
            print!("{table}");
        }
        out => {
            let path = out.unwrap_or_else(|| PathBuf::from(export::clr_file_name(name)));
            std::fs::write(&path, table)?;
            info!(path = %path.display(), "wrote color table");
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn clr_batch(session: &mut Session, names: &[String], dir: &Path) -> Result<()> {
    let palettes = load(session)?;
    let chosen: Vec<&Palette> = if names.is_empty() {
        palettes.iter().collect()
    } else {
        names
            .iter()
            .map(|n| find(palettes, n))
            .collect::<Result<_>>()?
    };

    let written = export::write_color_tables(dir, &chosen)?;
    println!("Wrote {} color tables to {}", written.len(), dir.display());
    Ok(())
}

fn export_bundle(
    session: &mut Session,
    names: &[String],
    category: Option<String>,
    search: Option<String>,
    out: &Path,
) -> Result<()> {
    let palettes = load(session)?;
    for name in names {
        if !palettes.iter().any(|p| &p.name == name) {
            warn!(name = %name, "not in the store, skipping");
        }
    }
    session.bulk_replace(names.iter().cloned());
    if category.is_some() || search.is_some() {
        let criteria = FilterCriteria::new(
            CategoryFilter::parse(category.as_deref().unwrap_or_default()),
            search.unwrap_or_default(),
        );
        session.select_all_visible(&criteria)?;
    }

    let exported = session.exported()?;
    if exported.is_empty() {
        return Err(StudioError::Other("no palettes selected".into()));
    }

    if out == Path::new("-") {
        println!("{}", export::bundle_json(&exported)?);
    } else {
        export::write_bundle(out, &exported)?;
        println!("Exported {} palettes to {}", exported.len(), out.display());
    }
    Ok(())
}

fn preview(
    session: &mut Session,
    renderer: &PreviewRenderer,
    name: &str,
    raster: &Path,
    out: &Path,
) -> Result<()> {
    let palette = find(load(session)?, name)?;
    let grid = read_raster(raster)?;
    let image = renderer.render(&grid, &palette.colors)?;
    save_png(&image, out)?;
    println!(
        "Wrote {}x{} preview to {}",
        image.width(),
        image.height(),
        out.display()
    );
    Ok(())
}

fn preview_file_name(name: &str) -> String {
    format!("{}_preview.png", name.replace(' ', "_"))
}
