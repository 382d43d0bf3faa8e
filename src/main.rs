//! brickname CLI: building point names → Brick graph.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result, WrapErr};

use brickname::config::{ConvertConfig, NamespaceEntry};
use brickname::converter::{Converter, ErrorPolicy};
use brickname::graph::{OutputFormat, write_graph};

#[derive(Parser)]
#[command(
    name = "brickname",
    version,
    about = "Convert BIM and BACnet friendly point names into a Brick model"
)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Brick ontology (Turtle) used to classify classes.
    #[arg(long, global = true)]
    ontology: Option<PathBuf>,

    /// TOML category table, used when no ontology is given.
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a names file (one name per line) into a graph.
    Convert {
        /// Names file to process.
        input: PathBuf,

        /// Where to write the graph. Defaults to stdout.
        output: Option<PathBuf>,

        /// Namespace for building data; repeatable. The first one holds the entities.
        #[arg(
            long = "namespace",
            num_args = 2,
            value_names = ["PREFIX", "NAMESPACE"],
            action = clap::ArgAction::Append
        )]
        namespace: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = FormatArg::Turtle)]
        format: FormatArg,

        /// What to do with lines that fail.
        #[arg(long, value_enum)]
        on_error: Option<PolicyArg>,

        /// Reject classes that are not Locations, Points or Equipment.
        #[arg(long)]
        strict_classes: bool,
    },

    /// Parse and resolve every line, report all problems, write nothing.
    Check {
        /// Names file to check.
        input: PathBuf,
    },

    /// Show the category of one or more classes.
    Classify {
        /// Brick class names.
        #[arg(required = true)]
        classes: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Turtle,
    Ntriples,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Turtle => OutputFormat::Turtle,
            FormatArg::Ntriples => OutputFormat::NTriples,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Abort,
    Skip,
    Collect,
}

impl From<PolicyArg> for ErrorPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Abort => ErrorPolicy::Abort,
            PolicyArg::Skip => ErrorPolicy::Skip,
            PolicyArg::Collect => ErrorPolicy::Collect,
        }
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(1)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    if cli.ontology.is_some() {
        config.ontology = cli.ontology.clone();
    }
    if cli.categories.is_some() {
        config.categories = cli.categories.clone();
        if cli.ontology.is_none() {
            config.ontology = None;
        }
    }

    match cli.command {
        Commands::Convert {
            input,
            output,
            namespace,
            format,
            on_error,
            strict_classes,
        } => {
            if !namespace.is_empty() {
                config.namespaces = namespace
                    .chunks(2)
                    .filter_map(|pair| match pair {
                        [prefix, iri] => Some(NamespaceEntry {
                            prefix: prefix.clone(),
                            iri: iri.clone(),
                        }),
                        _ => None,
                    })
                    .collect();
            }
            if let Some(policy) = on_error {
                config.on_error = policy.into();
            }
            config.strict_classes |= strict_classes;

            let table = config.category_table()?;
            let mut converter = Converter::new(table, config.converter_config());
            converter.convert_file(&input)?;

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .into_diagnostic()
                        .wrap_err_with(|| format!("failed to create {}", path.display()))?;
                    let writer = write_graph(
                        converter.graph(),
                        converter.namespaces(),
                        format.into(),
                        std::io::BufWriter::new(file),
                    )?;
                    writer
                        .into_inner()
                        .map_err(|e| e.into_error())
                        .into_diagnostic()
                        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                    eprintln!(
                        "Wrote {} triples to {}",
                        converter.graph().len(),
                        path.display()
                    );
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut lock = write_graph(
                        converter.graph(),
                        converter.namespaces(),
                        format.into(),
                        stdout.lock(),
                    )?;
                    lock.flush().into_diagnostic()?;
                }
            }
        }

        Commands::Check { input } => {
            config.on_error = ErrorPolicy::Collect;
            let table = config.category_table()?;
            let mut converter = Converter::new(table, config.converter_config());
            let report = converter.convert_file(&input)?;
            println!(
                "{} name(s) OK, {} blank line(s), {} triple(s)",
                report.converted, report.blank, report.graph_len
            );
        }

        Commands::Classify { classes } => {
            let table = config.category_table()?;
            for class in &classes {
                println!("{class}\t{}", table.classify(class));
            }
        }
    }

    Ok(())
}
