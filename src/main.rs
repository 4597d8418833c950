use std::path::{Path, PathBuf};

use bibleref_check::{
    check_mapper, classify_all, load_config, load_questions, render, render_details, render_summary, CheckerConfig,
    InputError, OutputFilter, DEFAULT_CONFIG_FILE,
};

const USAGE: &str = "Usage: bibleref-check [PATH] [--valid] [--invalid] [--no-reference] [--details] [--json]
                      [--config <file>] [--mapper <file>]

Checks the biblical references of a question dataset against the canonical book names.
Without filters only the counters are printed. Exit status is 1 when any reference is invalid.";

struct CliArgs {
    path: Option<PathBuf>,
    filter: OutputFilter,
    details: bool,
    json: bool,
    config: Option<PathBuf>,
    mapper: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        path: None,
        filter: OutputFilter::default(),
        details: false,
        json: false,
        config: None,
        mapper: None,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--valid" => cli.filter.valid = true,
            "--invalid" => cli.filter.invalid = true,
            "--no-reference" => cli.filter.no_reference = true,
            "--details" => cli.details = true,
            "--json" => cli.json = true,
            "--config" => {
                let val = iter.next().ok_or_else(|| "--config expects a value".to_string())?;
                cli.config = Some(PathBuf::from(val));
            }
            "--mapper" => {
                let val = iter.next().ok_or_else(|| "--mapper expects a value".to_string())?;
                cli.mapper = Some(PathBuf::from(val));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag: {}", flag)),
            positional => {
                if cli.path.is_some() {
                    return Err("input path provided multiple times".to_string());
                }
                cli.path = Some(PathBuf::from(positional));
            }
        }
    }
    Ok(cli)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return;
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("bibleref-check {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(1);
        }
    };

    // 1) Optional config: explicit --config must load, the default file only if present
    let default_config = Path::new(DEFAULT_CONFIG_FILE);
    let config_path = cli.config.clone().or_else(|| default_config.exists().then(|| default_config.to_path_buf()));
    let config = match &config_path {
        Some(path) => match load_config(path) {
            Ok(cfg) => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "step":"load_config",
                        "file": path,
                        "status":"ok"
                    })
                );
                cfg
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "step":"load_config",
                        "file": path,
                        "error": e.to_string(),
                        "error_code": 1
                    })
                );
                std::process::exit(1);
            }
        },
        None => CheckerConfig::default(),
    };

    // 2) Mapper presence, when one is configured
    if let Some(mapper) = cli.mapper.clone().or_else(|| config.mapper_path()) {
        if let Err(e) = check_mapper(&mapper) {
            eprintln!(
                "{}",
                serde_json::json!({
                    "step":"check_mapper",
                    "file": mapper,
                    "error": e.to_string(),
                    "error_code": 1
                })
            );
            std::process::exit(1);
        }
        eprintln!(
            "{}",
            serde_json::json!({
                "step":"check_mapper",
                "file": mapper,
                "status":"ok"
            })
        );
    }

    // 3) Load dataset
    let questions_path = cli.path.clone().unwrap_or_else(|| config.questions_path());
    let set = match load_questions(&questions_path) {
        Ok(set) => set,
        Err(err) => {
            let label = match err {
                InputError::NotFound(_) => "InputNotFound",
                InputError::Read(_) => "ReadFailed",
                InputError::Malformed(_) => "MalformedInput",
            };
            eprintln!(
                "{}",
                serde_json::json!({
                    "step":"load_questions",
                    "file": questions_path,
                    "error": label,
                    "detail": err.to_string(),
                    "error_code": 1
                })
            );
            std::process::exit(1);
        }
    };
    eprintln!(
        "{}",
        serde_json::json!({
            "step":"load_questions",
            "file": questions_path,
            "count": set.records.len()
        })
    );
    if set.missing_ids > 0 {
        eprintln!(
            "{}",
            serde_json::json!({
                "step":"load_questions",
                "warning":"records without id are reported as \"unknown\"",
                "count": set.missing_ids
            })
        );
    }

    // 4) Classify
    let report = classify_all(&set.records);
    eprintln!(
        "{}",
        serde_json::json!({
            "step":"classify_all",
            "total": report.total,
            "valid": report.valid_count,
            "invalid": report.invalid_count,
            "no_reference": report.no_reference_count
        })
    );

    // 5) Report
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
    } else if cli.details {
        print!("{}", render_details(&report));
        print!("{}", render_summary(&report));
    } else {
        print!("{}", render(&report, &cli.filter));
    }

    std::process::exit(report.exit_code());
}
