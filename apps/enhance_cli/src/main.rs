use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{
    headless::HeadlessPage,
    load_settings,
    view::{ClipboardSink, FrameworkSelect, SelectOption, COPY_DONE_LABEL},
    EnhanceController, FrameworkLoader, HttpEnhancerApi, RenderedResult, SubmitOutcome,
    SystemClipboard,
};
use tracing_subscriber::EnvFilter;

/// Enhance a prompt with one of the backend's frameworks.
#[derive(Parser, Debug)]
#[command(name = "prompt-enhance")]
struct Args {
    /// Backend base url; overrides enhancer.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Print the available frameworks and exit.
    #[arg(long)]
    list_frameworks: bool,
    /// Framework id to apply.
    #[arg(long, short)]
    framework: Option<String>,
    /// Ask the backend to explain what it changed.
    #[arg(long)]
    explain: bool,
    /// Copy the enhanced prompt to the system clipboard.
    #[arg(long)]
    copy: bool,
    /// Prompt text. Multiple words are joined with spaces.
    prompt: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings(args.api_url.as_deref())?;
    tracing::info!(api_base_url = settings.api_base_url(), "using backend");
    let api = Arc::new(HttpEnhancerApi::new(settings));

    let page = HeadlessPage::default();
    let handles = page.handles();

    if let Err(err) = FrameworkLoader::new(api.clone(), &handles).load().await {
        bail!("could not load frameworks: {err}");
    }

    let frameworks: Vec<SelectOption> = page
        .framework_select
        .options()
        .into_iter()
        .filter(|option| !option.value.is_empty())
        .collect();

    if args.list_frameworks {
        for option in &frameworks {
            println!("{:<16} {}", option.value, option.label);
        }
        return Ok(());
    }

    if let Some(id) = &args.framework {
        if !page.framework_select.select(id) {
            let known: Vec<_> = frameworks.iter().map(|option| option.value.as_str()).collect();
            bail!("unknown framework '{id}'; available: {}", known.join(", "));
        }
    }
    page.prompt_input.set_text(args.prompt.join(" "));

    let controller = EnhanceController::new(api, handles).with_explain(args.explain);
    match controller.submit().await {
        SubmitOutcome::Enhanced(_) => {}
        SubmitOutcome::Ignored => bail!("enhance is unavailable until frameworks load"),
        SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) => {
            bail!(page.notifier.take().join("\n"));
        }
    }

    let Some(rendered) = page.results.rendered() else {
        bail!("backend returned no result to display");
    };
    print_result(&rendered);

    if args.copy {
        copy_result(&SystemClipboard, &rendered)?;
        eprintln!("{COPY_DONE_LABEL}");
    }

    Ok(())
}

/// Writes the plain-text result straight to the clipboard. The page's copy
/// control, with its timed label, has no audience here.
fn copy_result(clipboard: &dyn ClipboardSink, rendered: &RenderedResult) -> Result<()> {
    clipboard
        .write_text(&rendered.plain_text())
        .context("could not copy to clipboard")
}

fn print_result(rendered: &RenderedResult) {
    for line in &rendered.output_lines {
        println!("{line}");
    }
    println!();
    println!("{}", rendered.framework_label);
    for metric in &rendered.metrics {
        println!("  {}", metric.display());
    }
    if !rendered.notes.is_empty() {
        println!("Notes:");
        for note in &rendered.notes {
            println!("  - {note}");
        }
    }
}
