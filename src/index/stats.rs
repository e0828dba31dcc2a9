use crate::query::{BoundaryRule, Searcher};
use anyhow::Result;

/// Per-title view of where a document sits in the corpus
#[derive(Debug, Clone, serde::Serialize)]
pub struct TitleStats {
    pub title: String,
    pub occurrences: usize,
    pub rule: Option<BoundaryRule>,
    pub body_bytes: usize,
}

/// Collect occurrence counts and body sizes for every catalog title
pub fn title_stats(searcher: &Searcher) -> Vec<TitleStats> {
    let extractor = searcher.extractor();
    let index = searcher.index();
    searcher
        .catalog()
        .titles()
        .iter()
        .map(|title| {
            let occurrences = index.count(title.as_bytes());
            let plan = extractor.plan(title);
            TitleStats {
                title: title.clone(),
                occurrences,
                rule: plan.as_ref().map(|p| p.rule),
                body_bytes: plan
                    .map(|p| p.boundaries.iter().map(|b| b.len()).sum())
                    .unwrap_or(0),
            }
        })
        .collect()
}

/// Display corpus and index statistics
pub fn show_stats(searcher: &Searcher) -> Result<()> {
    let index = searcher.index().stats();
    let catalog = searcher.catalog();

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Corpus size:      {}", format_size(index.text_size as u64));
    println!("Suffix count:     {}", index.suffix_count);
    println!("Index memory:     {}", format_size(index.memory_bytes as u64));
    println!("Build time:       {:.1} ms", index.build_ms);
    println!("Titles:           {}", catalog.len());
    println!("Exceptions:       {}", catalog.exceptions().len());

    println!();
    println!("Documents:");
    for stats in title_stats(searcher) {
        let rule = match stats.rule {
            None => "missing".to_string(),
            Some(BoundaryRule::Default) => String::new(),
            Some(rule) => format!("{rule:?}"),
        };
        println!(
            "  {:45} {:>3}x {:>10}  {}",
            stats.title,
            stats.occurrences,
            format_size(stats.body_bytes as u64),
            rule
        );
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
