use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use foldtree::{tree::check, FoldTree, FoldTreeConfig, Pipeline, PolicyRegistry, SegmentLayout, SymbolMap};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "foldtree", about = "Fold trees from secondary structure strings")]
struct Cli {
    /// Log pipeline stages at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the secondary structure elements and loops of a string.
    Spans(Input),
    /// Build and print the fold tree.
    Tree {
        #[command(flatten)]
        input: Input,
        /// Assembly policy (see `policies`).
        #[arg(long, default_value = "canonical")]
        policy: String,
        /// Skip the structural check on the assembled tree.
        #[arg(long)]
        no_verify: bool,
    },
    /// Build the fold tree without verification, then check it.
    Check {
        #[command(flatten)]
        input: Input,
        /// Assembly policy (see `policies`).
        #[arg(long, default_value = "canonical")]
        policy: String,
    },
    /// List the registered assembly policies.
    Policies,
}

#[derive(Args, Debug)]
struct Input {
    /// Secondary structure string, or `@path` to read it from a file.
    ss: String,
    /// Byte marking strand residues.
    #[arg(long, default_value_t = 'E')]
    strand: char,
    /// Byte marking helix residues.
    #[arg(long, default_value_t = 'H')]
    helix: char,
}

impl Input {
    fn symbols(&self) -> Result<SymbolMap> {
        let byte = |c: char| {
            u8::try_from(c).with_context(|| format!("label '{c}' is not a single byte"))
        };
        Ok(SymbolMap {
            strand: byte(self.strand)?,
            helix: byte(self.helix)?,
        })
    }

    fn read(&self) -> Result<String> {
        match self.ss.strip_prefix('@') {
            Some(path) => read_ss_file(&PathBuf::from(path)),
            None => Ok(self.ss.clone()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Spans(input) => run_spans(&input)?,
        Commands::Tree {
            input,
            policy,
            no_verify,
        } => run_tree(&input, policy, !no_verify)?,
        Commands::Check { input, policy } => run_check(&input, policy)?,
        Commands::Policies => run_policies(),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn pipeline(input: &Input, policy: String, verify: bool) -> Result<Pipeline> {
    let config = FoldTreeConfig {
        symbols: input.symbols()?,
        policy,
        verify,
    };
    Pipeline::new(config).context("failed to configure fold tree pipeline")
}

fn run_spans(input: &Input) -> Result<()> {
    let ss = input.read()?;
    let labels = input.symbols()?.labels(&ss);
    let layout = SegmentLayout::from_labels(&labels).context("failed to scan secondary structure")?;

    for (idx, span) in layout.active().iter().enumerate() {
        println!(
            "element {}\t{}-{}\tlength={}\thub={}",
            idx + 1,
            span.start,
            span.end,
            span.length(),
            span.midpoint()
        );
    }
    for (idx, gap) in layout.gaps().iter().enumerate() {
        println!(
            "gap {}\t{}-{}\tlength={}\thub={}\t{:?}",
            idx + 1,
            gap.span.start,
            gap.span.end,
            gap.span.length(),
            gap.span.midpoint(),
            gap.kind
        );
    }

    Ok(())
}

fn run_tree(input: &Input, policy: String, verify: bool) -> Result<()> {
    let ss = input.read()?;
    let tree = pipeline(input, policy, verify)?
        .build_from_str(&ss)
        .context("fold tree construction failed")?;
    print_tree(&tree);
    Ok(())
}

fn run_check(input: &Input, policy: String) -> Result<()> {
    let ss = input.read()?;
    let tree = pipeline(input, policy, false)?
        .build_from_str(&ss)
        .context("fold tree construction failed")?;
    print_tree(&tree);
    check(&tree).context("fold tree check failed")?;
    println!("ok\tresidues={}\tlinks={}", tree.len(), tree.num_links());
    Ok(())
}

fn run_policies() {
    for info in PolicyRegistry::with_defaults().list() {
        println!(
            "{}\tspans_all={}\t{}",
            info.name, info.spans_all, info.description
        );
    }
}

fn print_tree(tree: &FoldTree) {
    println!("{tree}");
    println!(
        "root={}\tresidues={}\tjumps={}\tfingerprint={}",
        tree.root(),
        tree.len(),
        tree.num_jumps(),
        tree.fingerprint()
    );
}

fn read_ss_file(path: &PathBuf) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read secondary structure from {}", path.display()))?;
    Ok(contents
        .lines()
        .filter(|line| !line.starts_with('>'))
        .collect::<Vec<_>>()
        .join(""))
}
