use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use roster_cli::render::{render_fields, render_table};
use roster_cli::script::{RunOptions, parse_script, run_script};
use roster_core::{
    Ignored, Intent, Outcome, PageNav, Session, SessionOptions, load_seed, seed_records,
};
use roster_model::{SortConfig, SortDirection};

use crate::cli::{RunArgs, SessionArgs, ShowArgs};

/// Build a session from seed, sort, search and page flags.
pub fn open_session(args: &SessionArgs) -> Result<Session> {
    let records = match &args.seed {
        Some(path) => {
            load_seed(path).with_context(|| format!("load seed {}", path.display()))?
        }
        None => seed_records(),
    };
    let mut options = SessionOptions::new().with_items_per_page(args.page_size);
    if let Some(key) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        options = options.with_initial_sort(SortConfig::new(key, direction));
    }
    let mut session = Session::with_records(records, options).context("open session")?;
    if let Some(term) = &args.search {
        session.apply(Intent::ChangeSearch(term.clone()));
    }
    if let Some(page) = args.page {
        let outcome = session.apply(Intent::ChangePage(PageNav::To(page)));
        if let Outcome::Ignored(Ignored::PageOutOfRange { total_pages, .. }) = outcome {
            bail!("page {page} is out of range, the table has {total_pages} page(s)");
        }
    }
    Ok(session)
}

pub fn run_show(args: &ShowArgs, color: bool) -> Result<()> {
    let session = open_session(&args.session)?;
    let view = session.table_view();
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("serialize table view")?;
        println!("{json}");
    } else {
        println!("{}", render_table(&view, color));
    }
    Ok(())
}

pub fn run_script_file(args: &RunArgs, color: bool) -> Result<()> {
    let source = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?,
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("read script from stdin")?;
            source
        }
    };
    let lines = parse_script(&source)?;
    let mut session = open_session(&args.session)?;

    let span = info_span!("script", commands = lines.len());
    let _guard = span.enter();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let options = RunOptions {
        echo: args.echo,
        color,
    };
    run_script(&mut session, &lines, options, &mut out).context("write script output")?;
    writeln!(out, "{}", render_table(&session.table_view(), color))
        .context("write final table")?;
    info!(records = session.store().len(), "script finished");
    Ok(())
}

pub fn run_fields(color: bool) -> Result<()> {
    println!("{}", render_fields(color));
    Ok(())
}
