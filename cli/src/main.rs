mod closest;
mod commands;
mod sample;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use commands::*;
use curvescan::algorithms::lookup_table::LookupTableOptions;
use curvescan::extra::parser::parse_path;
use curvescan::math::point;
use curvescan::path::Path;

use std::fs::{self, File};
use std::io::{self, stdout};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("curvescan command-line interface")
        .version("0.1")
        .author("Nicolas Silva <nical@fastmail.com>")
        .about("Samples paths and finds their closest point to a position")
        .subcommand_required(true)
        .subcommand(
            Command::new("sample")
                .about("Prints the lookup table of a path")
                .arg(
                    Arg::new("COUNT")
                        .short('c')
                        .long("count")
                        .help("Prints the number of segments and samples")
                        .action(ArgAction::SetTrue),
                )
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("closest")
                .about("Prints the sample of a path closest to a position")
                .arg(
                    Arg::new("X")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f32)),
                )
                .arg(
                    Arg::new("Y")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f32)),
                )
                .arg(path_arg()),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .short('i')
                .long("input")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Sets the output file to use")
                .short('o')
                .long("output")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("BUDGET")
                .help("Sets the total number of samples (100 by default)")
                .short('b')
                .long("budget")
                .value_name("BUDGET")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs debugging information")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .get_matches();

    let (name, sub_matches) = matches
        .subcommand()
        .context("A subcommand is required")?;

    let default_level = if sub_matches.get_flag("VERBOSE") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let path = get_path(sub_matches)?;
    let options = get_options(sub_matches);
    let output = get_output(sub_matches)?;

    log::debug!("{:?}", path);

    match name {
        "sample" => sample::sample(SampleCmd {
            path,
            options,
            output,
            count: sub_matches.get_flag("COUNT"),
        }),
        "closest" => {
            let x = *sub_matches.get_one::<f32>("X").context("Missing X")?;
            let y = *sub_matches.get_one::<f32>("Y").context("Missing Y")?;

            closest::closest(ClosestCmd {
                path,
                options,
                output,
                query: point(x, y),
            })
        }
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("PATH")
        .value_name("PATH")
        .help("An SVG path (a demo path is used if no path is given)")
        .required(false)
}

fn get_path(matches: &ArgMatches) -> anyhow::Result<Path> {
    let src = if let Some(input_file) = matches.get_one::<String>("INPUT") {
        fs::read_to_string(input_file)
            .with_context(|| format!("Cannot open file {}", input_file))?
    } else if let Some(src) = matches.get_one::<String>("PATH") {
        src.clone()
    } else {
        return Ok(demo_path());
    };

    let path = parse_path(&src).context("Invalid SVG path")?;

    Ok(path)
}

fn get_options(matches: &ArgMatches) -> LookupTableOptions {
    match matches.get_one::<usize>("BUDGET") {
        Some(budget) => LookupTableOptions::sample_budget(*budget),
        None => LookupTableOptions::DEFAULT,
    }
}

fn get_output(matches: &ArgMatches) -> anyhow::Result<Box<dyn io::Write>> {
    if let Some(output_file) = matches.get_one::<String>("OUTPUT") {
        let file = File::create(output_file)
            .with_context(|| format!("Cannot create file {}", output_file))?;
        return Ok(Box::new(file));
    }

    Ok(Box::new(stdout()))
}

fn demo_path() -> Path {
    let mut builder = Path::builder();
    builder.move_to(point(10.0, 20.0));
    builder.cubic_bezier_to(point(0.0, 300.0), point(300.0, 300.0), point(300.0, 160.0));
    builder.quadratic_bezier_to(point(800.0, -50.0), point(600.0, 320.0));

    builder.build()
}
