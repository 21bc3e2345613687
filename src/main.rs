use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use url::Url;

use khmer_export::cli::output::TermNotifier;
use khmer_export::cli::{analyze_cmd, chart_cmd, copy_cmd, count_cmd, export_cmd, lang_cmd};
use khmer_export::client::ServerClient;
use khmer_export::export::ExportFormat;
use khmer_export::i18n::Lang;

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000/";

#[derive(Parser, Debug)]
#[command(
    name = "khmer-export",
    about = "Client toolkit for the Khmer stop-word removal web service",
    version
)]
struct Cli {
    /// Interface language for messages and report headings
    #[arg(long, value_enum, default_value_t = Lang::En, global = true)]
    lang: Lang,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit text to the server for analysis
    Analyze {
        /// Text to analyze; reads stdin when omitted
        text: Option<String>,

        /// Server base URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: Url,

        /// Also export the returned result in this format
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,

        /// Directory exports are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Export a result from a saved page or result file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Saved JSON result to export
        #[arg(long)]
        result: Option<PathBuf>,

        /// Rendered HTML page to reconstruct the result from
        #[arg(long)]
        page: Option<PathBuf>,

        /// Directory exports are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Draw the word-frequency chart for a result
    Chart {
        /// Saved JSON result to chart
        #[arg(long)]
        result: Option<PathBuf>,

        /// Rendered HTML page to reconstruct the result from
        #[arg(long)]
        page: Option<PathBuf>,
    },

    /// Count characters and words in the input
    Count {
        /// Text to count; reads stdin when omitted
        text: Option<String>,
    },

    /// Copy a token to the system clipboard
    Copy {
        /// Token text to copy
        token: String,
    },

    /// Switch the server interface language
    Lang {
        /// Language to switch to
        #[arg(value_enum)]
        language: Lang,

        /// Server base URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: Url,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("khmer_export=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let notifier = TermNotifier::new();

    match cli.command {
        Command::Analyze {
            text,
            server,
            export,
            out_dir,
        } => {
            let text = read_input(text)?;
            let client = ServerClient::new(server)?;
            analyze_cmd::run(&client, &text, cli.lang, export, &out_dir, &notifier).await?;
        }
        Command::Export {
            format,
            result,
            page,
            out_dir,
        } => {
            export_cmd::run(
                format,
                result.as_deref(),
                page.as_deref(),
                &out_dir,
                cli.lang,
                &notifier,
            )?;
        }
        Command::Chart { result, page } => {
            chart_cmd::run(result.as_deref(), page.as_deref(), cli.lang, &notifier)?;
        }
        Command::Count { text } => {
            let text = read_input(text)?;
            count_cmd::run(&text, cli.lang);
        }
        Command::Copy { token } => {
            copy_cmd::run(&token, cli.lang, &notifier);
        }
        Command::Lang { language, server } => {
            let client = ServerClient::new(server)?;
            lang_cmd::run(&client, language, cli.lang, &notifier).await?;
        }
    }

    Ok(())
}

/// Use the argument when given, otherwise read all of stdin.
fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}
