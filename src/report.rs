// WHY: Output formatting for the CLI and stats files
// Kept out of analysis.rs so the core stays free of presentation concerns

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::analysis::AnalysisResult;
use crate::performance::PerformanceReport;

/// Render an analysis as human-readable text
pub fn render_text(analysis: &AnalysisResult) -> String {
    if let Some(ref error) = analysis.error {
        return format!("Error: {error}\n");
    }

    let inputs: Vec<String> = analysis.input.iter().map(|v| v.to_string()).collect();
    let mut out = format!(
        "Results ({} combinations)\nInput: [{}]\nValid Combinations:\n",
        analysis.result.len(),
        inputs.join(", ")
    );

    if analysis.result.is_empty() {
        out.push_str("  No valid combinations found\n");
    }
    for item in &analysis.result {
        out.push_str(&format!(
            "  {} + {} = {}  (A[{}] + A[{}] = A[{}])\n",
            item.pa, item.pb, item.sum, item.pa, item.pb, item.sum
        ));
    }

    if let Some(ref metrics) = analysis.performance_metrics {
        out.push_str(&render_metrics(metrics));
    }

    out
}

/// Render the performance block
pub fn render_metrics(metrics: &PerformanceReport) -> String {
    let memory = if metrics.memory_used > 0 {
        format!("{:.2}KB", metrics.memory_used as f64 / 1024.0)
    } else {
        "N/A".to_string()
    };
    let (time, space) = metrics
        .complexity
        .map(|c| (c.time, c.space))
        .unwrap_or(("N/A", "N/A"));

    [
        "Performance Analysis".to_string(),
        format!("  Algorithm:        {}", metrics.algorithm),
        format!("  Execution Time:   {:.2}ms", metrics.execution_time),
        format!("  Memory Used:      {memory}"),
        format!("  Time Complexity:  {time}"),
        format!("  Space Complexity: {space}"),
        format!("  Input Size:       {} elements", metrics.input_size),
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

/// Write analyses to `path` as a pretty-printed JSON array
pub async fn write_stats_json(path: &Path, analyses: &[AnalysisResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(analyses)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create stats file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
