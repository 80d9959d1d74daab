use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use docstyle_guard::analyzer::Analyzer;
use docstyle_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, InitArgs};
use docstyle_guard::config::{ConfigLoader, FileConfigLoader, RuleSet};
use docstyle_guard::document::Document;
use docstyle_guard::output::{
    AnalyzedDocument, ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use docstyle_guard::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> docstyle_guard::Result<i32> {
    // 1. Load the rule set
    let rules = load_rules(args.rules.as_deref(), cli.no_config)?;

    // 2. Load every input document up front; a file that does not parse is a
    //    caller error, not a compliance finding
    let documents = args
        .files
        .iter()
        .map(|path| Document::from_json_file(path).map(|doc| (path.clone(), doc)))
        .collect::<docstyle_guard::Result<Vec<_>>>()?;

    // 3. Analyze (parallel; the engine holds no mutable shared state)
    let analyzer = Analyzer::new(rules);
    let results: Vec<AnalyzedDocument> = documents
        .par_iter()
        .map(|(path, document)| AnalyzedDocument {
            path: path.clone(),
            report: analyzer.analyze(document),
        })
        .collect();

    // 4. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &results, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 5. Exit code reflects compliance
    let all_clean = results.iter().all(|r| r.report.is_clean());
    if all_clean {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_ISSUES_FOUND)
    }
}

fn load_rules(rules_path: Option<&Path>, no_config: bool) -> docstyle_guard::Result<RuleSet> {
    if no_config {
        return Ok(RuleSet::default());
    }

    let loader = FileConfigLoader::new();
    rules_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn format_output(
    format: OutputFormat,
    results: &[AnalyzedDocument],
    color_mode: ColorMode,
    verbose: u8,
) -> docstyle_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> docstyle_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> docstyle_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(docstyle_guard::DocStyleError::Config(format!(
            "Rule file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, rules_template())?;

    println!("Created rule file: {}", output_path.display());
    Ok(())
}

fn rules_template() -> String {
    r#"# docstyle-guard rule file
# Target formatting values a document is checked against.

[font]
# Required font family for all body text (exact, case-sensitive match)
name = "Times New Roman"

# Required font size in points
size_pt = 14.0

[paragraph]
# Required first-line indent in centimeters (0 = no indent required)
first_line_indent_cm = 1.25

# Required line spacing rule: single, one-point-five, double,
# at-least, exactly, multiple
line_spacing_rule = "one-point-five"

# Target multiplier, only used when line_spacing_rule = "multiple"
# line_spacing = 1.5

[margins]
# Page margins in centimeters, checked on the first section
top_cm = 2.0
bottom_cm = 2.0
left_cm = 3.0
right_cm = 1.5

[tolerance]
# Allowed deviation before a value is flagged
cm = 0.05
pt = 0.1
"#
    .to_string()
}

fn run_config(args: &docstyle_guard::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Rule file is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Rule file error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> docstyle_guard::Result<()> {
    if !config_path.exists() {
        return Err(docstyle_guard::DocStyleError::Config(format!(
            "Rule file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> docstyle_guard::Result<()> {
    let rules = load_rules(config_path, false)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&rules)?),
        "text" => {
            println!("Font:          {} at {:.1} pt", rules.font.name, rules.font.size_pt);
            println!(
                "Indent:        first line {:.2} cm",
                rules.paragraph.first_line_indent_cm
            );
            match rules.paragraph.line_spacing {
                Some(value) => println!(
                    "Line spacing:  {} ({value})",
                    rules.paragraph.line_spacing_rule.display_name()
                ),
                None => println!(
                    "Line spacing:  {}",
                    rules.paragraph.line_spacing_rule.display_name()
                ),
            }
            println!(
                "Margins:       top {:.2} / bottom {:.2} / left {:.2} / right {:.2} cm",
                rules.margins.top_cm,
                rules.margins.bottom_cm,
                rules.margins.left_cm,
                rules.margins.right_cm
            );
            println!(
                "Tolerance:     {:.2} cm, {:.1} pt",
                rules.tolerance.cm, rules.tolerance.pt
            );
        }
        other => {
            return Err(docstyle_guard::DocStyleError::Config(format!(
                "Unknown output format: {other}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
