use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use kenken_csp::csp::search::{Propagator, ValueOrdering, VariableOrdering};
use kenken_csp::model::ModelKind;
use kenken_csp::puzzle::MAX_WIDTH;

const DEFAULT_PUZZLE_WIDTH: usize = 4;

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    model: ModelKind,
    propagator: Propagator,
    var_order: VariableOrdering,
    val_order: ValueOrdering,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if let Some(path) = matches.value_of("input") {
            Source::File(path.into())
        } else {
            let width = match matches.value_of("width") {
                None => DEFAULT_PUZZLE_WIDTH,
                Some(s) => s
                    .parse::<usize>()
                    .ok()
                    .filter(|&width| width >= 1 && width <= MAX_WIDTH)
                    .ok_or_else(|| anyhow!("invalid width: {}", s))?,
            };
            Source::Generate { width }
        };
        Ok(Self {
            source,
            model: parse_value(matches, "model")?,
            propagator: parse_value(matches, "propagator")?,
            var_order: parse_value(matches, "var_order")?,
            val_order: parse_value(matches, "val_order")?,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn propagator(&self) -> Propagator {
        self.propagator
    }

    pub fn var_order(&self) -> VariableOrdering {
        self.var_order
    }

    pub fn val_order(&self) -> ValueOrdering {
        self.val_order
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    File(PathBuf),
    Generate { width: usize },
}

/// Parses an argument that always has a value through its default
fn parse_value<T>(matches: &ArgMatches<'_>, name: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    let value = matches
        .value_of(name)
        .ok_or_else(|| anyhow!("missing value for {}", name))?;
    value.parse().map_err(|e: String| anyhow!(e))
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("kenken-csp")
        .about("Solve KenKen puzzles as constraint satisfaction problems")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("source")
                .args(&["generate", "input"])
                .required(true),
        )
        .arg(
            Arg::with_name("generate")
                .short("g")
                .long("generate")
                .help("generate a random KenKen puzzle")
                .display_order(1),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read a KenKen puzzle from a file")
                .display_order(1),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .value_name("WIDTH")
                .requires("generate")
                .help("set the width and height of the generated puzzle"),
        )
        .arg(
            Arg::with_name("model")
                .short("m")
                .long("model")
                .takes_value(true)
                .possible_values(&["binary", "nary", "kenken"])
                .default_value("kenken")
                .help("the constraint model; binary and nary ignore cages"),
        )
        .arg(
            Arg::with_name("propagator")
                .short("p")
                .long("propagator")
                .takes_value(true)
                .possible_values(&["bt", "fc", "gac"])
                .default_value("fc")
                .help("constraint propagation used during search"),
        )
        .arg(
            Arg::with_name("var_order")
                .long("var-order")
                .takes_value(true)
                .possible_values(&["input", "dh", "mrv"])
                .default_value("mrv")
                .help("variable ordering heuristic"),
        )
        .arg(
            Arg::with_name("val_order")
                .long("val-order")
                .takes_value(true)
                .possible_values(&["domain", "lcv"])
                .default_value("domain")
                .help("value ordering heuristic"),
        )
}
