use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use verdiff::areas::workbench::Workbench;
use verdiff::artifacts::filter::path_filter::PathFilter;

const DEFAULT_FILTERS: [&str; 2] = ["/net/minecraft", "/com/mojang"];

#[derive(Parser)]
#[command(
    name = "verdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Diff the decompiled sources of two releases",
    long_about = "Compares the decompiled source trees of two releases and writes a sorted \
    change report plus one unified diff per changed file. \
    Fetching, remapping and decompiling the releases is left to other tools.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    #[arg(
        short,
        long = "filter",
        env = "VERDIFF_FILTERS",
        value_delimiter = ',',
        default_values_t = DEFAULT_FILTERS.map(String::from),
        help = "Package path tokens to diff, highest priority first"
    )]
    filters: Vec<String>,
}

impl FilterArgs {
    fn into_path_filter(self) -> Result<PathFilter> {
        PathFilter::new(self.filters)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "tree",
        about = "Diff two source trees",
        long_about = "This command diffs two arbitrary source trees and writes the report \
        and patches to the destination directory."
    )]
    Tree {
        #[arg(index = 1, help = "The old source tree")]
        old: PathBuf,
        #[arg(index = 2, help = "The new source tree")]
        new: PathBuf,
        #[arg(short, long, help = "Where to write report.txt and the patches")]
        dest: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
    #[command(
        name = "release",
        about = "Diff two decompiled releases",
        long_about = "This command diffs the client and the server sources of two releases. \
        Patches are written to <DIR>/<FROM>_to_<TO>/<side>."
    )]
    Release {
        #[arg(long, default_value = "versions", help = "The releases directory")]
        dir: String,
        #[arg(index = 1, help = "The older release")]
        from: String,
        #[arg(index = 2, help = "The newer release")]
        to: String,
        #[arg(long, help = "Diff the client and the server side concurrently")]
        parallel: bool,
        #[command(flatten)]
        filter: FilterArgs,
    },
    #[command(
        name = "cross",
        about = "Diff the server sources of a release against its client sources",
        long_about = "This command diffs the server tree of one release against its client tree. \
        Patches are written to <DIR>/<VERSION>/decomp/server_to_client."
    )]
    Cross {
        #[arg(long, default_value = "versions", help = "The releases directory")]
        dir: String,
        #[arg(index = 1, help = "The release")]
        version: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tree {
            old,
            new,
            dest,
            filter,
        } => {
            let pwd = std::env::current_dir()?;
            let workbench = Workbench::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            workbench.diff_trees(&old, &new, &dest, &filter.into_path_filter()?)?
        }
        Commands::Release {
            dir,
            from,
            to,
            parallel,
            filter,
        } => {
            let workbench = Workbench::new(&dir, Box::new(std::io::stdout()))?;

            workbench.diff_release(&from, &to, &filter.into_path_filter()?, parallel)?
        }
        Commands::Cross {
            dir,
            version,
            filter,
        } => {
            let workbench = Workbench::new(&dir, Box::new(std::io::stdout()))?;

            workbench.diff_sides(&version, &filter.into_path_filter()?)?
        }
    }

    Ok(())
}
