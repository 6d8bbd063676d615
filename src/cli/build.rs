//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean output (with `--clean`), load templates
//! - **Collect** - Gather markdown posts under the content directory
//! - **Compile** - Parallel post conversion, each written to `<output>/blog`
//! - **Index** - Blog index and main page from the sorted entries
//! - **Static** - Copy the static directory into the output root

use crate::{
    blog::{
        PostEntry, Templates,
        collect::{collect_all_files, collect_posts},
        index::{render_blog_index, render_main_page},
        post::PostSource,
    },
    config::SiteConfig,
    debug, log,
    utils::plural_count,
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

const INDEX_FILE: &str = "index.html";

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Post entries, newest first.
    pub entries: Vec<PostEntry>,
    pub static_files: usize,
}

/// Build the entire site
///
/// Pipeline: init -> collect -> compile -> index -> static
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let templates = init_build(config)?;

    let posts = collect_posts(&config.build.content);
    debug!(
        "build";
        "found {} under {}",
        plural_count(posts.len(), "post"),
        config.build.content.display()
    );

    let mut entries = compile_posts(config, &templates, &posts)?;
    PostEntry::sort(&mut entries);

    write_indexes(config, &templates, &entries)?;
    let static_files = copy_static(&config.build.static_dir, &config.build.output)?;

    let report = BuildReport {
        entries,
        static_files,
    };
    log_build_result(&report);
    Ok(report)
}

fn log_build_result(report: &BuildReport) {
    log!(
        "build";
        "done, {} and {}",
        plural_count(report.entries.len(), "post"),
        plural_count(report.static_files, "static file")
    );
}

/// Prepare the output directory and load templates
fn init_build(config: &SiteConfig) -> Result<Templates> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    Templates::load(&config.build.templates).context("Failed to load templates")
}

/// Convert and write every post in parallel, returning their entries
fn compile_posts(
    config: &SiteConfig,
    templates: &Templates,
    posts: &[PathBuf],
) -> Result<Vec<PostEntry>> {
    let content = &config.build.content;
    let blog_output = config.build.blog_output();
    let has_error = AtomicBool::new(false);

    posts
        .par_iter()
        .map(|path| {
            let page = PostSource::read(path, content)
                .map(|source| source.render(templates, &config.summary))
                .and_then(|page| page.write(&blog_output).map(|_| page));

            match page {
                Ok(page) => {
                    debug!("build"; "{}", config.root_relative(path).display());
                    Ok(page.entry)
                }
                Err(e) => {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{:#}", anyhow::Error::from(e));
                    }
                    Err(anyhow!("Build failed"))
                }
            }
        })
        .collect()
}

/// Write `blog/index.html` and the main page
fn write_indexes(config: &SiteConfig, templates: &Templates, entries: &[PostEntry]) -> Result<()> {
    if entries.is_empty() {
        log!("warning"; "no posts found in {}", config.build.content.display());
    } else {
        let path = config.build.blog_output().join(INDEX_FILE);
        write_file(&path, &render_blog_index(templates, entries))?;
    }

    match render_main_page(templates, &config.site, entries, config.build.recent) {
        Some(html) => write_file(&config.build.output.join(INDEX_FILE), &html),
        None => {
            debug!("build"; "no main page template, skipping {}", INDEX_FILE);
            Ok(())
        }
    }
}

/// Copy every file under `static_dir` into `output`, keeping relative paths
fn copy_static(static_dir: &Path, output: &Path) -> Result<usize> {
    if !static_dir.is_dir() {
        debug!("static"; "{} not found, skipping", static_dir.display());
        return Ok(0);
    }

    let files = collect_all_files(static_dir);
    files.par_iter().try_for_each(|file| -> Result<()> {
        let rel = file.strip_prefix(static_dir).unwrap_or(file);
        let dest = output.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &dest)
            .map(|_| ())
            .with_context(|| format!("Failed to copy {} to {}", file.display(), dest.display()))
    })?;

    Ok(files.len())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
