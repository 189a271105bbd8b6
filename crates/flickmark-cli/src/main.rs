use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use flickmark_models::MediaType;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "flickmark")]
#[command(about = "Flickmark - browse the movie catalog and keep a wishlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MediaKind {
    Movie,
    Tv,
}

impl From<MediaKind> for MediaType {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => MediaType::Movie,
            MediaKind::Tv => MediaType::Tv,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by free text
    #[command(long_about = "Search the catalog for movies or TV shows matching a free-text query. Results are paged; entries already on the wishlist are marked.")]
    Search {
        /// Search query
        query: String,

        /// Catalog namespace to search
        #[arg(long, value_enum, default_value = "movie")]
        media: MediaKind,

        /// Result page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Browse curated catalog listings
    Browse {
        #[command(subcommand)]
        cmd: BrowseCommands,
    },
    /// Show details and recommendations for one title
    Show {
        /// Catalog namespace
        #[arg(value_enum)]
        media: MediaKind,

        /// Catalog identifier
        id: String,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        cmd: WishlistCommands,
    },
    /// Display language settings
    Lang {
        #[command(subcommand)]
        cmd: LangCommands,
    },
}

#[derive(Subcommand)]
enum BrowseCommands {
    /// Movies currently in theaters
    Movies {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Popular TV shows
    Tv {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Subcommand)]
enum WishlistCommands {
    /// List wishlist entries
    List {
        /// Only show one namespace
        #[arg(long, value_enum)]
        media: Option<MediaKind>,
    },
    /// Favorite a title (fetches its details from the catalog)
    Add {
        #[arg(value_enum)]
        media: MediaKind,
        id: String,
    },
    /// Unfavorite a title. Without --media, removes the id from both
    /// namespaces.
    Remove {
        id: String,
        #[arg(long, value_enum)]
        media: Option<MediaKind>,
    },
    /// Empty the wishlist and erase its persisted record
    Clear,
}

#[derive(Subcommand)]
enum LangCommands {
    /// Show the active language
    Show,
    /// List supported languages
    List,
    /// Switch the display language
    Set {
        /// Language code (en, ar, fr, zh)
        code: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Search { query, media, page } => {
            commands::search::run_search(&query, media.into(), page, &output).await
        }
        Commands::Browse { cmd } => match cmd {
            BrowseCommands::Movies { page } => commands::browse::run_movies(page, &output).await,
            BrowseCommands::Tv { page } => commands::browse::run_tv(page, &output).await,
        },
        Commands::Show { media, id } => commands::show::run_show(media.into(), &id, &output).await,
        Commands::Wishlist { cmd } => match cmd {
            WishlistCommands::List { media } => {
                commands::wishlist::run_list(media.map(Into::into), &output)
            }
            WishlistCommands::Add { media, id } => {
                commands::wishlist::run_add(media.into(), &id, &output).await
            }
            WishlistCommands::Remove { id, media } => {
                commands::wishlist::run_remove(&id, media.map(Into::into), &output)
            }
            WishlistCommands::Clear => commands::wishlist::run_clear(&output),
        },
        Commands::Lang { cmd } => match cmd {
            LangCommands::Show => commands::lang::run_show(&output),
            LangCommands::List => commands::lang::run_list(&output),
            LangCommands::Set { code } => commands::lang::run_set(&code, &output),
        },
    }
}
