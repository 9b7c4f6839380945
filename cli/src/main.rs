//! docsmd CLI - Google Docs as Markdown

mod client;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use client::{GoogleDocsClient, DEFAULT_API_BASE, DEFAULT_DRIVE_API_BASE};
use docsmd::{Editor, JsonFormat, ListKind, RenderOptions, TextFormat};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "docsmd")]
#[command(version)]
#[command(about = "Read Google Docs as Markdown and apply structured edits", long_about = None)]
struct Cli {
    /// OAuth access token for the Docs API
    #[arg(long, env = "GOOGLE_DOCS_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Docs API base URL
    #[arg(long, env = "GOOGLE_DOCS_API_BASE", global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Drive API base URL, used by copy and --folder
    #[arg(long, env = "GOOGLE_DRIVE_API_BASE", global = true, default_value = DEFAULT_DRIVE_API_BASE)]
    drive_api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty document
    Create {
        /// Document title
        title: String,

        /// Folder ID to create the document in
        #[arg(long, value_name = "FOLDER_ID")]
        folder: Option<String>,
    },

    /// Copy an existing document under a new title
    Copy {
        source_document_id: String,
        new_title: String,

        /// Folder ID to place the copy in
        #[arg(long, value_name = "FOLDER_ID")]
        folder: Option<String>,
    },

    /// Show document information as JSON
    Info {
        document_id: String,
    },

    /// Read a document as Markdown
    Read {
        document_id: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit the leading `# title` line
        #[arg(long)]
        no_title: bool,
    },

    /// Show the heading outline as JSON
    GetStructure {
        document_id: String,
    },

    /// Replace the whole document body with a Markdown file
    SetMarkdown {
        document_id: String,

        #[arg(value_name = "MARKDOWN_FILE")]
        file: PathBuf,
    },

    /// Replace the content under a heading with a Markdown file
    UpdateSection {
        document_id: String,

        /// Heading text (case-insensitive)
        section: String,

        #[arg(value_name = "MARKDOWN_FILE")]
        file: PathBuf,
    },

    /// Insert a paragraph right after a heading
    InsertAfter {
        document_id: String,

        /// Heading text (case-insensitive)
        section: String,

        text: String,
    },

    /// Delete text in [START, END)
    DeleteText {
        document_id: String,
        start: i64,
        end: i64,
    },

    /// Apply character formatting to [START, END)
    FormatText {
        document_id: String,
        start: i64,
        end: i64,

        #[arg(long)]
        bold: bool,

        #[arg(long)]
        italic: bool,

        #[arg(long)]
        underline: bool,

        /// Text colour (hex, e.g. #FF0000)
        #[arg(long)]
        color: Option<String>,

        /// Font size in points
        #[arg(long)]
        size: Option<f64>,
    },

    /// Align the paragraphs in [START, END)
    AlignParagraph {
        document_id: String,
        start: i64,
        end: i64,

        /// START, CENTER, END or JUSTIFIED
        alignment: String,
    },

    /// Turn the paragraphs in [START, END) into a bulleted list
    CreateBullets {
        document_id: String,
        start: i64,
        end: i64,
    },

    /// Turn the paragraphs in [START, END) into a numbered list
    CreateNumbered {
        document_id: String,
        start: i64,
        end: i64,
    },

    /// Remove list formatting from [START, END)
    RemoveBullets {
        document_id: String,
        start: i64,
        end: i64,
    },

    /// Insert an empty table
    InsertTable {
        document_id: String,
        index: i64,
        rows: u32,
        cols: u32,
    },

    /// Set the background colour of a table cell
    StyleTableCell {
        document_id: String,
        table_start: i64,
        row: u32,
        col: u32,

        /// Background colour (hex, e.g. #FF0000)
        #[arg(long)]
        bg_color: String,
    },

    /// Replace the text of a table cell
    UpdateTableCell {
        document_id: String,
        table_start: i64,
        row: u32,
        col: u32,
        text: String,
    },

    /// Insert an image by URL
    InsertImage {
        document_id: String,
        index: i64,

        #[arg(value_name = "IMAGE_URL")]
        url: String,

        /// Image width in points
        #[arg(long)]
        width: Option<f64>,

        /// Image height in points
        #[arg(long)]
        height: Option<f64>,
    },

    /// Write text into the default header
    AddHeader {
        document_id: String,
        text: String,
    },

    /// Write text into the default footer
    AddFooter {
        document_id: String,
        text: String,
    },

    /// Render a document JSON file as Markdown (offline)
    Render {
        #[arg(value_name = "JSON_FILE")]
        input: PathBuf,

        /// Omit the leading `# title` line
        #[arg(long)]
        no_title: bool,
    },

    /// Compile a Markdown file into a batch request body (offline)
    Compile {
        #[arg(value_name = "MARKDOWN_FILE")]
        input: PathBuf,

        /// Index the first insertion targets
        #[arg(long, default_value_t = docsmd::FIRST_INDEX)]
        start: i64,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult {
    let connect = || -> Result<Editor<GoogleDocsClient>, Box<dyn std::error::Error>> {
        let token = cli
            .token
            .as_deref()
            .ok_or("No access token; pass --token or set GOOGLE_DOCS_TOKEN")?;
        let client = GoogleDocsClient::new(token, &cli.api_base, &cli.drive_api_base)?;
        Ok(Editor::new(client))
    };

    match cli.command {
        Commands::Create { title, folder } => {
            let doc = connect()?.create(&title, folder.as_deref())?;
            status(&format!("Created document {:?}", doc.title));
            println!("{}", doc.document_id);
        }
        Commands::Copy {
            source_document_id,
            new_title,
            folder,
        } => {
            let doc = connect()?.copy(&source_document_id, &new_title, folder.as_deref())?;
            status(&format!("Copied document as {:?}", doc.title));
            println!("{}", doc.document_id);
        }
        Commands::Info { document_id } => {
            let info = connect()?.info(&document_id)?;
            println!("{}", docsmd::render::to_json(&info, JsonFormat::Pretty)?);
        }
        Commands::Read {
            document_id,
            output,
            no_title,
        } => {
            let options = RenderOptions::new().with_title(!no_title);
            let markdown = connect()?.read(&document_id, &options)?;
            write_output(output.as_deref(), &markdown)?;
        }
        Commands::GetStructure { document_id } => {
            let sections = connect()?.structure(&document_id)?;
            println!("{}", docsmd::render::to_json(&sections, JsonFormat::Pretty)?);
        }
        Commands::SetMarkdown { document_id, file } => {
            let markdown = read_markdown(&file)?;
            let count = connect()?.set_markdown(&document_id, &markdown)?;
            applied(count, "Document content replaced");
        }
        Commands::UpdateSection {
            document_id,
            section,
            file,
        } => {
            let markdown = read_markdown(&file)?;
            let count = connect()?.update_section(&document_id, &section, &markdown)?;
            applied(count, &format!("Section {:?} updated", section));
        }
        Commands::InsertAfter {
            document_id,
            section,
            text,
        } => {
            let count = connect()?.insert_after(&document_id, &section, &text)?;
            applied(count, &format!("Text inserted after {:?}", section));
        }
        Commands::DeleteText {
            document_id,
            start,
            end,
        } => {
            let count = connect()?.delete_text(&document_id, start, end)?;
            applied(count, &format!("Deleted [{}, {})", start, end));
        }
        Commands::FormatText {
            document_id,
            start,
            end,
            bold,
            italic,
            underline,
            color,
            size,
        } => {
            let format = TextFormat {
                bold,
                italic,
                underline,
                color,
                size,
            };
            let count = connect()?.format_text(&document_id, start, end, &format)?;
            applied(count, "Text formatted");
        }
        Commands::AlignParagraph {
            document_id,
            start,
            end,
            alignment,
        } => {
            let count = connect()?.align_paragraph(&document_id, start, end, &alignment)?;
            applied(count, &format!("Paragraphs aligned {}", alignment.to_uppercase()));
        }
        Commands::CreateBullets {
            document_id,
            start,
            end,
        } => {
            let count = connect()?.create_list(&document_id, start, end, ListKind::Bullet)?;
            applied(count, "Bulleted list created");
        }
        Commands::CreateNumbered {
            document_id,
            start,
            end,
        } => {
            let count = connect()?.create_list(&document_id, start, end, ListKind::Numbered)?;
            applied(count, "Numbered list created");
        }
        Commands::RemoveBullets {
            document_id,
            start,
            end,
        } => {
            let count = connect()?.remove_list(&document_id, start, end)?;
            applied(count, "List formatting removed");
        }
        Commands::InsertTable {
            document_id,
            index,
            rows,
            cols,
        } => {
            let count = connect()?.insert_table(&document_id, index, rows, cols)?;
            applied(count, &format!("Inserted {}x{} table", rows, cols));
        }
        Commands::StyleTableCell {
            document_id,
            table_start,
            row,
            col,
            bg_color,
        } => {
            let count = connect()?.style_table_cell(&document_id, table_start, row, col, &bg_color)?;
            applied(count, &format!("Cell ({}, {}) styled", row, col));
        }
        Commands::UpdateTableCell {
            document_id,
            table_start,
            row,
            col,
            text,
        } => {
            let count = connect()?.update_table_cell(&document_id, table_start, row, col, &text)?;
            applied(count, &format!("Cell ({}, {}) updated", row, col));
        }
        Commands::InsertImage {
            document_id,
            index,
            url,
            width,
            height,
        } => {
            let count = connect()?.insert_image(&document_id, index, &url, width, height)?;
            applied(count, "Image inserted");
        }
        Commands::AddHeader { document_id, text } => {
            let outcome = connect()?.set_header(&document_id, &text)?;
            segment_status("Header", outcome.created, &outcome.segment_id);
        }
        Commands::AddFooter { document_id, text } => {
            let outcome = connect()?.set_footer(&document_id, &text)?;
            segment_status("Footer", outcome.created, &outcome.segment_id);
        }
        Commands::Render { input, no_title } => cmd_render(&input, no_title)?,
        Commands::Compile {
            input,
            start,
            compact,
        } => cmd_compile(&input, start, compact)?,
    }

    Ok(())
}

fn cmd_render(input: &Path, no_title: bool) -> CliResult {
    let json = fs::read_to_string(input)?;
    let options = RenderOptions::new().with_title(!no_title);
    let markdown = docsmd::json_to_markdown(&json, &options)?;
    print!("{}", markdown);
    Ok(())
}

fn cmd_compile(input: &Path, start: i64, compact: bool) -> CliResult {
    let markdown = read_markdown(input)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", docsmd::markdown_to_request(&markdown, start, format)?);
    Ok(())
}

/// Read a Markdown file, normalising Windows line endings.
fn read_markdown(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    Ok(text.replace("\r\n", "\n"))
}

fn write_output(output: Option<&Path>, text: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, text)?;
        status(&format!("Saved to {}", path.display()));
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn status(message: &str) {
    eprintln!("{}", message.green());
}

fn applied(count: usize, message: &str) {
    if count == 0 {
        eprintln!("{}", "Nothing to change".yellow());
    } else {
        status(&format!("{} ({} operations)", message, count));
    }
}

fn segment_status(label: &str, created: bool, segment_id: &str) {
    let verb = if created { "created" } else { "updated" };
    status(&format!("{} {} ({})", label, verb, segment_id));
}
