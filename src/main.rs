//! sigcraft CLI - render, check and export email signatures.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sigcraft::{
    export, load_record, render_with, DataUri, Readiness, RenderConfig, Template,
};

#[derive(Parser)]
#[command(name = "sigcraft")]
#[command(about = "Render inline-styled HTML email signatures from a JSON record")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a signature record to HTML
    Render {
        /// Record JSON file (stdin if not provided)
        input: Option<PathBuf>,
        /// Render with this template instead of the record's active one
        #[arg(long)]
        template: Option<Template>,
        /// Write an .html file here instead of printing
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Refuse to render unless the record passes the validity gate
        #[arg(long)]
        strict: bool,
        /// Leave social links untouched instead of deriving the WhatsApp link
        #[arg(long)]
        no_whatsapp_sync: bool,
        /// Print the SHA-256 of the payload instead of the HTML
        #[arg(long)]
        fingerprint: bool,
    },
    /// Print the readiness checklist for a record
    Check {
        /// Record JSON file (stdin if not provided)
        input: Option<PathBuf>,
    },
    /// List the available templates
    Templates,
    /// Print an image file as a data URI for `profileImage` or `companyLogo`
    Image {
        /// Image file
        path: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            template,
            output,
            strict,
            no_whatsapp_sync,
            fingerprint,
        } => render(input, template, output, strict, !no_whatsapp_sync, fingerprint),
        Commands::Check { input } => check(input),
        Commands::Templates => {
            list_templates();
            Ok(())
        }
        Commands::Image { path } => image(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn render(
    input: Option<PathBuf>,
    template: Option<Template>,
    output: Option<PathBuf>,
    strict: bool,
    sync_whatsapp: bool,
    fingerprint: bool,
) -> sigcraft::Result<()> {
    let record = load_record(input.as_deref())?;
    let config = RenderConfig {
        template,
        require_ready: strict,
        sync_whatsapp,
    };
    let signature = render_with(&record, &config)?;

    if !strict {
        let readiness = Readiness::check(&record);
        if !readiness.is_ready() {
            log::warn!(
                "record has {} open issue(s); run `sigcraft check` before copying",
                readiness.issues.len()
            );
        }
    }

    if fingerprint {
        println!("{}", signature.fingerprint());
    } else if let Some(path) = output {
        let written = signature.write_to(&path)?;
        println!("Wrote {} ({})", written.display(), export::MIME_TYPE);
    } else {
        println!("{}", signature.html);
    }
    Ok(())
}

fn check(input: Option<PathBuf>) -> sigcraft::Result<()> {
    let record = load_record(input.as_deref())?;
    let readiness = Readiness::check(&record);
    if readiness.is_ready() {
        println!("Ready: {} can be copied or downloaded", record.active_template());
        Ok(())
    } else {
        Err(sigcraft::Error::NotReady(readiness))
    }
}

#[allow(clippy::print_literal)]
fn list_templates() {
    println!("{:<20} {:<10} {:<10} {}", "ID", "TIER", "CAPS", "DESCRIPTION");
    println!("{}", "-".repeat(90));
    for template in Template::ALL {
        let info = template.info();
        let caps = match (info.website_cap, info.social_cap) {
            (Some(w), Some(s)) => format!("{w}w/{s}s"),
            _ => "-".to_string(),
        };
        println!("{:<20} {:<10} {:<10} {}", info.id, info.tier, caps, info.description);
    }
}

fn image(path: PathBuf) -> sigcraft::Result<()> {
    let uri = DataUri::from_file(&path)?;
    println!("{}", uri);
    Ok(())
}
