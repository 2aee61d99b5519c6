//! bolt-glyph - print the glyph for a bolt between two grid cells
//!
//! # Flow
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Args (SX SY TX TY)   Config (TOML)      │
//! │          ↓                 ↓             │
//! │  classify / trace  →  GlyphSet           │
//! │                 ↓                        │
//! │              stdout                      │
//! └──────────────────────────────────────────┘
//! ```

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};

use bolt_glyph::config::Config;
use bolt_glyph::constants::{DEFAULT_PRESET, MAX_TRAIL_SPAN};
use bolt_glyph::{bolt, span, GlyphSet};

/// Print help message
fn print_help() {
    println!(
        r#"bolt-glyph {} - direction glyphs for bolts on character grids

USAGE:
    bolt-glyph [OPTIONS] SX SY TX TY

ARGS:
    SX SY    Source cell (column, row)
    TX TY    Target cell (column, row)

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --trail                 Print every cell of the bolt as "x y glyph"
                            (at most {} cells)
    --preset=NAME           Glyph preset to use instead of the config
    --init-config[=PRESET]  Generate config file with optional preset
    -f, --force             Overwrite config file without confirmation

PRESETS:
    ascii      \ / | - ?
    unicode    ╲ ╱ │ ─ ·

EXAMPLES:
    bolt-glyph 0 0 3 3                  Prints \
    bolt-glyph --preset=unicode 0 3 3 0 Prints ╱
    bolt-glyph --trail 0 0 5 2          Prints the bolt cell by cell
    bolt-glyph --init-config=unicode    Generate config with unicode glyphs

CONFIG FILE:
    ~/.config/bolt-glyph/config.toml (override with BOLT_GLYPH_CONFIG)
"#,
        env!("CARGO_PKG_VERSION"),
        MAX_TRAIL_SPAN
    );
}

/// Flags understood by the front end; anything else is a coordinate
fn is_flag(arg: &str) -> bool {
    arg.starts_with("--") || matches!(arg, "-h" | "-V" | "-f")
}

/// Value of a `--name=value` flag
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter().find_map(|a| a.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
}

/// Parse the four positional coordinates
fn parse_coordinates(args: &[String]) -> Result<[i32; 4]> {
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| !is_flag(a)).collect();
    if positional.len() != 4 {
        bail!(
            "expected 4 coordinates (SX SY TX TY), got {}; see --help",
            positional.len()
        );
    }

    let mut coords = [0i32; 4];
    for (slot, arg) in coords.iter_mut().zip(positional) {
        *slot = arg
            .parse()
            .with_context(|| format!("Invalid coordinate: {}", arg))?;
    }
    Ok(coords)
}

/// Refuse trails longer than `MAX_TRAIL_SPAN` steps
fn check_trail_span(source: (i32, i32), target: (i32, i32)) -> Result<u64> {
    let steps = span(source, target);
    if steps > MAX_TRAIL_SPAN {
        bail!("bolt spans {} cells, --trail prints at most {}", steps, MAX_TRAIL_SPAN);
    }
    Ok(steps)
}

/// Write a config template, asking before replacing an existing file
fn init_config(args: &[String], preset: &str) -> Result<()> {
    let force = args.iter().any(|a| a == "--force" || a == "-f");
    let config_path =
        Config::default_config_path().ok_or_else(|| anyhow!("Config directory not found"))?;

    if config_path.exists() && !force {
        println!("Config file already exists: {}", config_path.display());
        print!("Overwrite? [y/N]: ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let input = input.trim().to_lowercase();

        if input != "y" && input != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let path = Config::write_config_with_preset(preset, &config_path)?;
    println!("Config file generated:");
    println!("  Preset: {}", preset);
    println!("  Path:   {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Check command line arguments
    let args: Vec<String> = std::env::args().collect();

    // --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("bolt-glyph {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // --init-config or --init-config=PRESET
    if args.iter().any(|a| a == "--init-config") {
        return init_config(&args, DEFAULT_PRESET);
    }
    if let Some(preset) = flag_value(&args, "--init-config") {
        return init_config(&args, preset);
    }

    let [sx, sy, tx, ty] = parse_coordinates(&args)?;

    // --preset wins over the config file
    let glyphs = match flag_value(&args, "--preset") {
        Some(name) => GlyphSet::from_preset(name)?,
        None => Config::load().glyph_set(),
    };
    debug!("Glyph set: {:?}", glyphs);

    if args.iter().any(|a| a == "--trail") {
        let steps = check_trail_span((sx, sy), (tx, ty))?;
        info!("Bolt ({}, {}) -> ({}, {}): {} cells", sx, sy, tx, ty, steps);
        for cell in bolt((sx, sy), (tx, ty), &glyphs) {
            println!("{} {} {}", cell.x, cell.y, cell.glyph);
        }
    } else {
        println!("{}", glyphs.between((sx, sy), (tx, ty)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("bolt-glyph")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_coordinates() {
        let a = args(&["--trail", "0", "-3", "5", "2"]);
        assert_eq!(parse_coordinates(&a).unwrap(), [0, -3, 5, 2]);
    }

    #[test]
    fn test_parse_coordinates_wrong_count() {
        assert!(parse_coordinates(&args(&["1", "2", "3"])).is_err());
    }

    #[test]
    fn test_parse_coordinates_not_a_number() {
        let err = parse_coordinates(&args(&["1", "2", "x", "4"])).unwrap_err();
        assert!(err.to_string().contains("x"));
    }

    #[test]
    fn test_check_trail_span() {
        assert_eq!(check_trail_span((0, 0), (5, 2)).unwrap(), 5);
        let limit = MAX_TRAIL_SPAN as i32;
        assert!(check_trail_span((0, 0), (limit, -limit)).is_ok());
        assert!(check_trail_span((0, 0), (limit + 1, 0)).is_err());

        let err = check_trail_span((i32::MIN, 0), (i32::MAX, 0)).unwrap_err();
        assert!(err.to_string().contains("4294967295"));
    }

    #[test]
    fn test_flag_value() {
        let a = args(&["--preset=unicode", "1", "1", "2", "2"]);
        assert_eq!(flag_value(&a, "--preset"), Some("unicode"));
        assert_eq!(flag_value(&a, "--init-config"), None);
        assert_eq!(flag_value(&args(&["--presetx=1"]), "--preset"), None);
    }
}
