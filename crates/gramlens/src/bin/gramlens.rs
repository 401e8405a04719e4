// ABOUTME: CLI binary for gramlens, a smoke harness over the lookup pipeline.
// ABOUTME: Fetches post URLs or reads a saved HTML file and prints the JSON record.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use gramlens::{Client, PostReport};

#[derive(Parser, Debug)]
#[command(name = "gramlens")]
#[command(about = "Look up engagement metadata for a public Instagram post or reel")]
struct Args {
    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Saved HTML file to extract from (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Post URL the HTML file was saved from (required with --html)
    #[arg(long = "url")]
    url: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Post URLs to look up (fetch mode)
    #[arg()]
    urls: Vec<String>,
}

fn format_output(reports: &[PostReport]) -> String {
    if reports.len() == 1 {
        serde_json::to_string_pretty(&reports[0]).unwrap()
    } else {
        serde_json::to_string_pretty(reports).unwrap()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.html.is_some() && args.url.is_none() {
        eprintln!("error: --url is required when using --html");
        return ExitCode::from(1);
    }

    if args.html.is_none() && args.urls.is_empty() {
        eprintln!("error: at least one URL is required, or use --html with --url");
        return ExitCode::from(1);
    }

    if args.html.is_some() && !args.urls.is_empty() {
        eprintln!("error: cannot use both --html and positional URLs");
        return ExitCode::from(1);
    }

    let client = Client::builder().build();

    let start = Instant::now();
    let mut reports: Vec<PostReport> = Vec::new();
    let mut had_error = false;

    if let Some(html_path) = &args.html {
        let url = args.url.as_ref().unwrap();
        match fs::read_to_string(html_path) {
            Ok(html_content) => {
                let report = client.lookup_html(&html_content, url);
                had_error |= report.is_failed();
                reports.push(report);
            }
            Err(e) => {
                eprintln!("error reading file {:?}: {}", html_path, e);
                had_error = true;
            }
        }
    } else {
        for url in &args.urls {
            let report = client.lookup(url).await;
            had_error |= report.is_failed();
            reports.push(report);
        }
    }

    let elapsed = start.elapsed();

    if !reports.is_empty() {
        let output_str = format_output(&reports);

        if let Some(output_path) = &args.output {
            if let Err(e) = fs::write(output_path, &output_str) {
                eprintln!("error writing to {:?}: {}", output_path, e);
                had_error = true;
            }
        } else {
            println!("{}", output_str);
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
