//! Panelpress CLI — compose a figure from a YAML description.
//!
//! ```text
//! panelpress <configuration_path> [save_path] [--dry] [--width N] [--strict]
//! ```
//!
//! The default save path is `/tmp/figure.png`. With `--dry` the layout is
//! previewed as an SVG outline sketch (the save path's extension becomes
//! `.svg`) and no panel pixels are touched.

use std::path::PathBuf;
use std::process;

use panelpress::compose::{self, RasterOptions, SketchOptions, TreeBuilder};
use panelpress::config;
use panelpress::panel::PanelLoader;

struct Args {
    configuration_path: PathBuf,
    save_path: PathBuf,
    dry: bool,
    width: u32,
    strict: bool,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(String::as_str).collect();

    let args = match parse_args(&arg_refs) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("panelpress: {message}");
            process::exit(1);
        }
    };

    if let Err(message) = run(&args) {
        eprintln!("panelpress: {message}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let spec = config::parse_file(&args.configuration_path).map_err(|e| e.to_string())?;

    let loader = PanelLoader::new().strict(args.strict);
    let tree = TreeBuilder::new(&loader).build(&spec).map_err(|e| e.to_string())?;

    if args.dry {
        let mut save_path = args.save_path.clone();
        save_path.set_extension("svg");
        compose::write_sketch(&tree, &save_path, SketchOptions::default())
            .map_err(|e| format!("unable to write sketch {}: {e}", save_path.display()))?;
        println!("wrote outline sketch to {}", save_path.display());
    } else {
        let options = RasterOptions { target_width: args.width, ..RasterOptions::default() };
        let canvas = compose::rasterize(tree, options).map_err(|e| e.to_string())?;
        canvas
            .save(&args.save_path)
            .map_err(|e| format!("unable to save figure {}: {e}", args.save_path.display()))?;
        println!("wrote figure to {}", args.save_path.display());
    }
    Ok(())
}

fn parse_args(args: &[&str]) -> Result<Args, String> {
    let mut positional: Vec<&str> = Vec::new();
    let mut dry = false;
    let mut strict = false;
    let mut width = compose::DEFAULT_TARGET_WIDTH;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--dry" => dry = true,
            "--strict" => strict = true,
            "--width" => {
                let value = iter.next().ok_or("--width requires a value")?;
                width = value
                    .parse()
                    .map_err(|_| format!("invalid --width value: '{value}'"))?;
            }
            "--help" | "-h" => return Err(usage()),
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag '{flag}'. {}", usage()));
            }
            path => positional.push(path),
        }
    }

    let mut positional = positional.into_iter();
    let configuration_path = positional
        .next()
        .ok_or_else(|| format!("no configuration file given. {}", usage()))?
        .into();
    let save_path = positional.next().map_or_else(|| PathBuf::from("/tmp/figure.png"), Into::into);
    if positional.next().is_some() {
        return Err(format!("too many arguments. {}", usage()));
    }

    Ok(Args { configuration_path, save_path, dry, width, strict })
}

fn usage() -> String {
    "Usage: panelpress <configuration_path> [save_path] [--dry] [--width N] [--strict]".to_owned()
}
