use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use en_inflect::Inflector;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(name = "en-inflect")]
#[clap(author = "Dave Rolsky <autarch@urth.org>")]
#[clap(about = "Pluralizes and singularizes English nouns, picks \"a\" or \"an\", and compares words")]
struct Args {
    #[clap(long)]
    #[clap(help = "Turn on every classical flag.")]
    classical: bool,
    #[clap(long)]
    #[clap(help = "Use Latin and Greek plurals, like \"formulae\".")]
    ancient: bool,
    #[clap(long)]
    #[clap(help = "Pluralize \"person\" as \"persons\".")]
    persons: bool,
    #[clap(long)]
    #[clap(help = "Leave capitalized names like \"Jones\" unchanged.")]
    names: bool,
    #[clap(long)]
    #[clap(help = "Leave game animals like \"bison\" unchanged.")]
    herd: bool,
    #[clap(long)]
    #[clap(help = "Use the singular for a count of zero.")]
    zero: bool,
    #[clap(long, value_name = "SINGULAR=PLURAL")]
    #[clap(help = "Define the plural of a noun. May be repeated.")]
    def_noun: Vec<String>,
    #[clap(long, value_name = "WORD")]
    #[clap(help = "Make a word take \"a\". May be repeated.")]
    def_a: Vec<String>,
    #[clap(long, value_name = "WORD")]
    #[clap(help = "Make a word take \"an\". May be repeated.")]
    def_an: Vec<String>,
    #[clap(long, value_name = "PATTERN")]
    #[clap(help = "Make every word matching a regex take \"a\". May be repeated.")]
    def_a_pattern: Vec<String>,
    #[clap(long, value_name = "PATTERN")]
    #[clap(help = "Make every word matching a regex take \"an\". May be repeated.")]
    def_an_pattern: Vec<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[clap(about = "Prints the plural of each word")]
    Plural {
        #[clap(long, allow_hyphen_values = true)]
        #[clap(help = "Print the form that goes with this count instead.")]
        count: Option<i64>,
        #[clap(required = true)]
        words: Vec<String>,
    },
    #[clap(about = "Prints the singular of each word")]
    Singular {
        #[clap(required = true)]
        words: Vec<String>,
    },
    #[clap(about = "Prints each phrase with \"a\" or \"an\" in front of it")]
    An {
        #[clap(required = true)]
        phrases: Vec<String>,
    },
    #[clap(about = "Prints how two words relate: eq, s:p, p:s, p:p, or an empty line")]
    Compare { word1: String, word2: String },
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let inflector = configure(args)?;
    match &args.command {
        Command::Plural { count, words } => {
            for word in words {
                let new = match count {
                    Some(count) => inflector.plural_count(word, *count),
                    None => inflector.plural(word),
                };
                writeln!(out, "{}", new)?;
            }
        }
        Command::Singular { words } => {
            for word in words {
                writeln!(out, "{}", inflector.singular(word))?;
            }
        }
        Command::An { phrases } => {
            for phrase in phrases {
                writeln!(out, "{}", inflector.an(phrase))?;
            }
        }
        Command::Compare { word1, word2 } => {
            writeln!(out, "{}", inflector.compare(word1, word2))?;
        }
    }
    Ok(())
}

fn configure(args: &Args) -> Result<Inflector> {
    let inflector = Inflector::new();
    if args.classical {
        inflector.classical_all(true);
    }
    let flags = [
        (args.ancient, Inflector::classical_ancient as fn(&Inflector, bool)),
        (args.persons, Inflector::classical_persons),
        (args.names, Inflector::classical_names),
        (args.herd, Inflector::classical_herd),
        (args.zero, Inflector::classical_zero),
    ];
    for (on, set) in flags {
        if on {
            set(&inflector, true);
        }
    }

    for def in &args.def_noun {
        let (singular, plural) = def
            .split_once('=')
            .ok_or_else(|| anyhow!("`{}` is not of the form SINGULAR=PLURAL", def))?;
        inflector.def_noun(singular, plural);
    }
    for word in &args.def_a {
        inflector.def_a(word);
    }
    for word in &args.def_an {
        inflector.def_an(word);
    }
    for pattern in &args.def_a_pattern {
        inflector
            .def_a_pattern(pattern)
            .with_context(|| format!("Could not define an \"a\" pattern from `{}`", pattern))?;
    }
    for pattern in &args.def_an_pattern {
        inflector
            .def_an_pattern(pattern)
            .with_context(|| format!("Could not define an \"an\" pattern from `{}`", pattern))?;
    }

    debug!(flags = ?inflector.classical_flags(), "configured inflector");
    Ok(inflector)
}
