// Command-line interface for mdtree
//
// This binary is an inspector: it parses a markdown file, builds its semantic tree and prints
// one of the intermediate representations.
//
// Usage:
//  mdtree inspect <path> [<transform>]     - Execute a transform (defaults to "tree-treeviz")
//  mdtree --list-transforms                - List available transforms
//
// Extra Parameters:
//
// Transform and builder parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Builder knobs (list-layout, code-trim) and the
// inspect knobs known to the configuration are folded into the config, the rest is handed
// to the transform as is.
// Example:
//  mdtree inspect README.md --extra-list-layout nested --extra-show-ids

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use mdtree::build::{CodeTrim, ListLayout, Options};
use mdtree::parse::markdown::MarkdownOptions;
use mdtree::FormatRegistry;
use mdtree_config::{Loader, MdtreeConfig};
use std::collections::HashMap;
use std::fs;
use std::str::FromStr;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the semantic tree built from markdown files")
        .long_about(
            "mdtree parses markdown with comrak and builds a typed semantic tree from it.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass builder and transform options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdtree inspect README.md                           # Tree visualization\n  \
            mdtree inspect README.md tree-json                 # Tree as JSON\n  \
            mdtree inspect README.md diagnostics               # What the tree could not hold\n  \
            mdtree inspect README.md --extra-list-layout nested",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdtree.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the trees built from a markdown file")
                .long_about(
                    "View the trees built from a markdown file at different stages.\n\n\
                    Transforms (stage-format):\n  \
                    - tree-treeviz:  semantic tree as tree visualization (default)\n  \
                    - tree-json:     semantic tree and diagnostics as JSON\n  \
                    - parse-json:    parse tree as JSON\n  \
                    - diagnostics:   nodes the semantic tree could not represent\n\n\
                    Extra Parameters:\n  \
                    --extra-show-ids            Prefix treeviz lines with node ids\n  \
                    --extra-max-label <n>       Truncate treeviz labels at n characters\n  \
                    --extra-list-layout <l>     flattened | nested\n  \
                    --extra-code-trim <t>       reference | trailing-whitespace",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'tree-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli()
        .try_get_matches_from(&cleaned_args)
        .unwrap_or_else(|e| e.exit());

    init_logging(matches.get_count("verbose"), matches.get_flag("quiet"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                eprintln!("Error: a path is required");
                std::process::exit(1);
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MdtreeConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    log::info!("inspecting {path} with {transform}");

    let params = build_inspect_params(config, extra_params);
    let markdown = MarkdownOptions::from(&config.markdown);
    let options = Options::from(config.build);

    let output = transforms::execute_transform(&source, transform, &params, &markdown, &options)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  parse       - Parse tree (comrak output lowered into closed node kinds)");
    println!("  tree        - Semantic tree (what the builders produce)\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nTree formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<12}{description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdtreeConfig {
    let loader = Loader::new().with_optional_file("mdtree.toml");
    let loader = if let Some(path) = explicit_path {
        log::info!("loading configuration from {path}");
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MdtreeConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("list-layout") {
        config.build.list_layout = parse_option_arg::<ListLayout>(&raw);
    }
    if let Some(raw) = extra_params.remove("code-trim") {
        config.build.code_trim = parse_option_arg::<CodeTrim>(&raw);
    }

    if let Some(raw) = extra_params.remove("show-ids") {
        config.inspect.treeviz.show_ids = parse_bool_arg("show-ids", &raw);
    }
    if let Some(raw) = extra_params.remove("max-label") {
        config.inspect.treeviz.max_label = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid number '{raw}' for --extra-max-label");
            std::process::exit(1);
        });
    }
    if let Some(raw) = extra_params.remove("diagnostics") {
        config.inspect.json.diagnostics = parse_bool_arg("diagnostics", &raw);
    }
}

fn build_inspect_params(
    config: &MdtreeConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "show-ids".to_string(),
        config.inspect.treeviz.show_ids.to_string(),
    );
    params.insert(
        "max-label".to_string(),
        config.inspect.treeviz.max_label.to_string(),
    );
    params.insert(
        "diagnostics".to_string(),
        config.inspect.json.diagnostics.to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn parse_option_arg<T>(raw: &str) -> T
where
    T: FromStr<Err = mdtree::Error>,
{
    raw.parse().unwrap_or_else(|err: mdtree::Error| {
        eprintln!("{err}");
        std::process::exit(1);
    })
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtree_config::load_defaults;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let args = strings(&["mdtree", "inspect", "README.md"]);
        let (cleaned, extras) = parse_extra_args(&args);
        assert_eq!(cleaned, args);
        assert!(extras.is_empty());
    }

    #[test]
    fn test_parse_extra_args_with_value() {
        let args = strings(&[
            "mdtree",
            "inspect",
            "README.md",
            "--extra-list-layout",
            "nested",
            "tree-json",
        ]);
        let (cleaned, extras) = parse_extra_args(&args);
        assert_eq!(cleaned, strings(&["mdtree", "inspect", "README.md", "tree-json"]));
        assert_eq!(extras.get("list-layout"), Some(&"nested".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag() {
        let args = strings(&["mdtree", "inspect", "README.md", "--extra-show-ids", "-v"]);
        let (cleaned, extras) = parse_extra_args(&args);
        assert_eq!(cleaned, strings(&["mdtree", "inspect", "README.md", "-v"]));
        assert_eq!(extras.get("show-ids"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let args = strings(&["mdtree", "--extras-max-label", "10"]);
        let (_, extras) = parse_extra_args(&args);
        assert_eq!(extras.get("max-label"), Some(&"10".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_keys() {
        let mut config = load_defaults().expect("defaults to load");
        let mut extras = HashMap::new();
        extras.insert("list-layout".to_string(), "nested".to_string());
        extras.insert("code-trim".to_string(), "trailing-whitespace".to_string());
        extras.insert("show-ids".to_string(), "yes".to_string());
        extras.insert("max-label".to_string(), "8".to_string());
        extras.insert("custom".to_string(), "kept".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.build.list_layout, ListLayout::Nested);
        assert_eq!(config.build.code_trim, CodeTrim::TrailingWhitespace);
        assert!(config.inspect.treeviz.show_ids);
        assert_eq!(config.inspect.treeviz.max_label, 8);
        assert_eq!(extras.len(), 1);
        assert!(extras.contains_key("custom"));
    }

    #[test]
    fn inspect_params_include_configured_defaults() {
        let config = load_defaults().expect("defaults to load");
        let mut overrides = HashMap::new();
        overrides.insert("custom".to_string(), "1".to_string());

        let params = build_inspect_params(&config, &overrides);
        assert_eq!(params.get("show-ids"), Some(&"false".to_string()));
        assert_eq!(params.get("max-label"), Some(&"30".to_string()));
        assert_eq!(params.get("diagnostics"), Some(&"true".to_string()));
        assert_eq!(params.get("custom"), Some(&"1".to_string()));
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
