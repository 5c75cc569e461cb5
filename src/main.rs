//#![deny(rust_2018_idioms, unused, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]

use {
    std::{
        io::{
            self,
            prelude::*,
            stdout,
        },
        iter,
    },
    enum_iterator::IntoEnumIterator as _,
    itertools::Itertools as _,
    rand::seq::IteratorRandom as _,
    structopt::StructOpt,
    tracing_subscriber::EnvFilter,
    corekit::{
        paths,
        phase::Phase,
        Cycle as _,
        Error,
        OptionStrExt as _,
    },
};

#[derive(StructOpt)]
struct Args {
    /// phase to start from [default: dawn]
    #[structopt(long)]
    from: Option<Phase>,
    /// start from a randomly chosen phase
    #[structopt(long, conflicts_with = "from")]
    random: bool,
    /// number of phases to print [default: one full cycle]
    #[structopt(long)]
    steps: Option<usize>,
    #[structopt(long)]
    backwards: bool,
    /// name to greet, ignored if blank
    #[structopt(long)]
    name: Option<String>,
    /// also print the document directory
    #[structopt(long)]
    documents: bool,
    #[structopt(long = "debug")]
    debug: bool,
}

#[paw::main]
fn main(args: Args) -> Result<(), Error> {
    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .init();
    let stdout = stdout();
    let mut stdout = stdout.lock();
    match args.name.non_empty() {
        Some(name) => writeln!(stdout, "hello, {}", name.trim())?,
        None => tracing::debug!(name = ?args.name, "no name to greet"),
    }
    let start = if args.random {
        Phase::into_enum_iter().choose(&mut rand::thread_rng()).unwrap_or_default()
    } else {
        args.from.unwrap_or_default()
    };
    let steps = args.steps.unwrap_or_else(|| start.orbit().len());
    tracing::info!(%start, steps, backwards = args.backwards, "walking the day");
    let backwards = args.backwards;
    let mut walk = iter::successors(Some(start), |&phase| Some(if backwards { phase.prev() } else { phase.next() }))
        .take(steps);
    writeln!(stdout, "{}", walk.join(" -> "))?;
    if args.documents {
        let dir = paths::document_dir()?;
        writeln!(stdout, "documents: {}", dir.display())?;
    }
    Ok(())
}
