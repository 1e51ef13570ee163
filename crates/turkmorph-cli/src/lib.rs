// turkmorph-cli: shared utilities for CLI tools.

use std::path::Path;
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use turkmorph_tr::{Morphology, MorphologyOptions};

/// Environment variable naming a lexicon file to use instead of the
/// embedded one.
pub const LEXICON_ENV: &str = "TURKMORPH_LEXICON";

/// Options shared by every tool, split off from the positional arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommonArgs {
    pub lexicon: Option<String>,
    pub config: Option<String>,
    pub rest: Vec<String>,
}

/// Parse `-l/--lexicon PATH` and `--config PATH` (or their `--name=PATH`
/// forms) out of the command line.
pub fn parse_common_args(args: &[String]) -> Result<CommonArgs, String> {
    let mut parsed = CommonArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            parsed.lexicon = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--config=") {
            parsed.config = Some(val.to_string());
        } else if arg == "--lexicon" || arg == "-l" || arg == "--config" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?
                .clone();
            if arg == "--config" {
                parsed.config = Some(val);
            } else {
                parsed.lexicon = Some(val);
            }
        } else {
            parsed.rest.push(arg.clone());
        }
    }

    Ok(parsed)
}

/// Read [`MorphologyOptions`] from a JSON file. Missing fields keep their
/// defaults.
pub fn read_options(path: &Path) -> Result<MorphologyOptions, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_options(&text).map_err(|e| format!("invalid config {}: {}", path.display(), e))
}

fn parse_options(json: &str) -> Result<MorphologyOptions, serde_json::Error> {
    serde_json::from_str(json)
}

/// Build a [`Morphology`] from the parsed arguments.
///
/// Lexicon search order:
/// 1. `-l/--lexicon` argument
/// 2. `TURKMORPH_LEXICON` environment variable
/// 3. The lexicon embedded in `turkmorph-tr`
pub fn load_morphology(args: &CommonArgs) -> Result<Morphology, String> {
    let options = match &args.config {
        Some(path) => read_options(Path::new(path))?,
        None => MorphologyOptions::default(),
    };

    let lexicon = args
        .lexicon
        .clone()
        .or_else(|| std::env::var(LEXICON_ENV).ok().filter(|p| !p.is_empty()));

    match lexicon {
        Some(path) => {
            debug!(%path, "loading lexicon file");
            Morphology::from_lexicon_file(&path, options)
                .map_err(|e| format!("failed to load {path}: {e}"))
        }
        None => Morphology::create_default()
            .map(|m| m.with_options(options))
            .map_err(|e| format!("failed to build morphology: {e}")),
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Make control characters visible in one-line output.
pub fn escape_control(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn common_args_are_split_off() {
        let parsed =
            parse_common_args(&args(&["-l", "my.dict", "kitap", "--config=opts.json", "ev"]))
                .unwrap();
        assert_eq!(parsed.lexicon.as_deref(), Some("my.dict"));
        assert_eq!(parsed.config.as_deref(), Some("opts.json"));
        assert_eq!(parsed.rest, ["kitap", "ev"]);

        let parsed = parse_common_args(&args(&["--lexicon=a.dict", "--config", "b.json"])).unwrap();
        assert_eq!(parsed.lexicon.as_deref(), Some("a.dict"));
        assert_eq!(parsed.config.as_deref(), Some("b.json"));
        assert!(parsed.rest.is_empty());
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(parse_common_args(&args(&["--lexicon"])).is_err());
        assert!(parse_common_args(&args(&["kitap", "--config"])).is_err());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let options = parse_options(r#"{"cache_capacity": 16}"#).unwrap();
        assert_eq!(options.cache_capacity, 16);
        assert!(options.apostrophe_fallback);
        assert!(options.lowercase_stems);

        let options = parse_options("{}").unwrap();
        assert_eq!(options, MorphologyOptions::default());
        assert!(parse_options(r#"{"cache_capacity": "many"}"#).is_err());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = read_options(Path::new("/nonexistent/turkmorph.json")).unwrap_err();
        assert!(err.contains("/nonexistent/turkmorph.json"));
    }

    #[test]
    fn loads_embedded_lexicon_with_options() {
        let parsed = CommonArgs {
            lexicon: None,
            config: None,
            rest: Vec::new(),
        };
        // the environment may point elsewhere; only check the default path
        if std::env::var(LEXICON_ENV).is_err() {
            let m = load_morphology(&parsed).unwrap();
            assert_eq!(m.stem_word("kitapları"), "kitap");
        }
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_control("a\nb\tc"), "a\\nb\\tc");
    }
}
