//! Focus-chunk splitting
//!
//! The conversion provider returns the document as markdown; the focus
//! reader shows it one chunk at a time. Chunks are cut at headings so
//! each one reads as a coherent section. Documents without headings fall
//! back to paragraph grouping. Splitting never drops text.

/// Target size for grouped paragraphs when no headings are present.
const TARGET_CHUNK_CHARS: usize = 1400;

/// Split markdown narrative into focus-sized chunks.
pub fn split_into_chunks(markdown: &str) -> Vec<String> {
    let trimmed = markdown.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let by_heading = split_at_headings(trimmed);
    if by_heading.len() > 1 {
        return by_heading;
    }

    group_paragraphs(trimmed)
}

fn is_heading(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("# ") || line.starts_with("## ") || line.starts_with("### ")
}

fn split_at_headings(markdown: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in markdown.lines() {
        if is_heading(line) && !current.trim().is_empty() {
            chunks.push(current.trim().to_string());
            current = String::new();
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

fn group_paragraphs(markdown: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in markdown.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        if !current.is_empty() && current.len() + paragraph.len() > TARGET_CHUNK_CHARS {
            chunks.push(current.trim().to_string());
            current = String::new();
        }

        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(paragraph);
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}
