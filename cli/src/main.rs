use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use std::fs;
use storyscript_core::ir::{to_json, to_json_pretty};
use storyscript_core::{
    compile_cst, generate_cst_from_source, generate_error_report, EntryRule, Level, Script, StoryError, StoryErrorExt,
};

fn main() {
    let cli = Command::new("Storyscript CLI")
        .version("0.1.0")
        .about("Lowers story source into its JSON intermediate representation");

    let cli = setup_cli(cli);
    let matches = cli.get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(code) = dispatch_commands(&matches) {
        std::process::exit(code);
    }
}

/// Sets up the CLI with its subcommands and arguments.
fn setup_cli(cli: Command) -> Command {
    cli.arg(
        Arg::new("verbose")
            .help("Enable debug logging")
            .short('v')
            .long("verbose")
            .global(true)
            .action(ArgAction::SetTrue),
    )
    .subcommand(
        Command::new("compile")
            .about("Compile the specified script file to IR")
            .arg(
                Arg::new("file")
                    .help("The script file to compile")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("rule")
                    .help("Grammar entry rule the file is parsed with")
                    .short('r')
                    .long("rule")
                    .value_parser(["values", "expression", "mutation", "signature"])
                    .default_value("values")
                    .value_name("RULE"),
            )
            .arg(
                Arg::new("pretty")
                    .help("Pretty-print the emitted JSON")
                    .short('p')
                    .long("pretty")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("dump")
                    .help("Specify the dump stage")
                    .short('d')
                    .long("dump")
                    .value_parser(["cst"])
                    .value_name("STAGE"),
            )
            .arg(
                Arg::new("output")
                    .help("Specify the output file")
                    .short('o')
                    .long("output")
                    .value_parser(clap::value_parser!(String))
                    .value_name("FILE"),
            ),
    )
}

/// Dispatches the subcommand. Returns the process exit code on failure.
fn dispatch_commands(matches: &ArgMatches) -> Result<(), i32> {
    match matches.subcommand() {
        Some(("compile", sub_m)) => compile_command(sub_m),
        _ => {
            println!("No valid subcommand was used. Use --help for more information.");
            Err(2)
        }
    }
}

fn compile_command(sub_m: &ArgMatches) -> Result<(), i32> {
    let (Some(file), Some(rule)) = (sub_m.get_one::<String>("file"), sub_m.get_one::<String>("rule")) else {
        return Err(2);
    };
    let entry: EntryRule = rule.parse().map_err(|e| {
        eprintln!("{}", style(e).red());
        2
    })?;

    let script = Script::new(std::path::PathBuf::from(file)).map_err(report)?;

    let cst = generate_cst_from_source(entry, &script).map_err(|e| diagnose(e, &script))?;
    if sub_m.get_one::<String>("dump").is_some_and(|stage| stage == "cst") {
        println!("{}", cst);
    }

    let unit = compile_cst(entry, &cst).map_err(|e| diagnose(e, &script))?;
    let json = if sub_m.get_flag("pretty") {
        to_json_pretty(&unit)
    } else {
        to_json(&unit)
    }
    .map_err(|e| {
        eprintln!("{}", style(format!("Failed to serialize IR: {}", e)).red());
        1
    })?;

    match sub_m.get_one::<String>("output") {
        Some(output_file) => fs::write(output_file, json).map_err(|e| {
            eprintln!("{}", style(format!("Failed to write {}: {}", output_file, e)).red());
            1
        }),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

/// Syntax errors are shown against the source; anything else falls back to
/// the one-line report.
fn diagnose(error: Box<dyn StoryErrorExt>, script: &Script) -> i32 {
    if error.level() != Level::Error {
        return report(error);
    }
    log::debug!("{:?}", error);
    eprintln!("{}", StoryError::new(error.as_ref(), script));
    1
}

fn report(error: Box<dyn StoryErrorExt>) -> i32 {
    log::debug!("{:?}", error);
    eprintln!("{}", style(generate_error_report(error.as_ref())).red());
    1
}
