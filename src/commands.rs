//! Input enumeration, per-file analysis dispatch, and output.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

use anyhow::{Context, bail};
use regex::Regex;
use tokio::task::JoinSet;

use trellis_analysis::{
    DistanceParams, DistanceReport, FileReport, connected_components, greedy_coloring, max_degree,
    node_count, shortest_path,
};
use trellis_core::parse_graph;

/// Which analyses to run for each input file, plus the output format.
#[derive(Debug, Clone)]
pub struct Selection {
    pub count: bool,
    pub degree: bool,
    pub components: bool,
    pub distance: Option<DistanceRequest>,
    pub coloring: bool,
    pub json: bool,
}

/// Where shortest-path parameters come from.
#[derive(Debug, Clone)]
pub enum DistanceRequest {
    /// An explicit "source,target,expected" command-line spec.
    Explicit(DistanceParams),
    /// The named-dataset defaults, looked up per file by graph name.
    Dataset,
}

fn input_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^EX\d+\.txt$").expect("literal pattern"))
}

/// Runs the selected analyses over every input file. A missing input path
/// is fatal; any other failure is confined to its file.
pub async fn run(path: PathBuf, selection: Selection) -> anyhow::Result<()> {
    if !tokio::fs::try_exists(&path).await? {
        bail!("source {} doesn't exist", path.display());
    }

    let files = collect_inputs(&path).await?;
    tracing::info!("found {} input file(s)", files.len());

    let mut tasks = JoinSet::new();
    for file in files {
        let selection = selection.clone();
        tasks.spawn(async move {
            let report = analyze_file(&file, &selection).await;
            (file, report)
        });
    }

    let mut failures = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (file, report) = joined.context("analysis task panicked")?;
        match report {
            Ok(report) => {
                if selection.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    for line in report.render_lines() {
                        println!("{line}");
                    }
                }
            }
            Err(error) => {
                failures += 1;
                tracing::error!(file = %file.display(), "analysis failed: {error:#}");
            }
        }
    }
    if failures > 0 {
        tracing::warn!("{failures} file(s) failed");
    }
    Ok(())
}

/// Resolves the input path to the list of files to analyze. A file is taken
/// as given; a directory is walked recursively and filtered to the
/// `EX<digits>.txt` naming pattern, sorted.
async fn collect_inputs(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let metadata = tokio::fs::metadata(root)
        .await
        .with_context(|| format!("stat {}", root.display()))?;
    if !metadata.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut queue = VecDeque::from([root.to_path_buf()]);
    let mut files = Vec::new();
    while let Some(dir) = queue.pop_front() {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .with_context(|| format!("listing {}", dir.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                queue.push_back(path);
            } else if file_type.is_file() {
                let matches = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| input_pattern().is_match(n));
                if matches {
                    files.push(path);
                } else {
                    tracing::debug!(file = %path.display(), "skipping non-matching file");
                }
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Parses one file and runs the selected analyses over the resulting graph.
async fn analyze_file(path: &Path, selection: &Selection) -> anyhow::Result<FileReport> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph")
        .to_string();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let graph = parse_graph(&name, &text)?;

    let started = Instant::now();
    let mut report = FileReport::new(graph.name());

    if selection.count {
        report.node_count = Some(node_count(&graph)?);
    }
    if selection.degree {
        report.max_degree = Some(max_degree(&graph));
    }
    if selection.components {
        report.components = Some(connected_components(&graph)?);
    }
    if let Some(request) = &selection.distance {
        let params = match request {
            DistanceRequest::Explicit(params) => *params,
            DistanceRequest::Dataset => DistanceParams::for_dataset(graph.name())?,
        };
        let source = graph.resolve(params.source)?;
        let target = graph.resolve(params.target)?;
        report.distance = Some(DistanceReport {
            source: params.source,
            target: params.target,
            distance: shortest_path(&graph, source, target),
            expected: params.expected,
        });
    }
    if selection.coloring {
        report.colors = Some(greedy_coloring(&graph)?.max_color);
    }

    tracing::debug!(
        file = %path.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analyses complete"
    );
    Ok(report)
}
