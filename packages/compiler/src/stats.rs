use crate::GeneratedFiles;

/// Size and line statistics of a pair of rendered snippets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub head_bytes: usize,
    pub body_bytes: usize,
    pub total_bytes: usize,
    pub head_size: String,
    pub body_size: String,
    pub total_size: String,
    pub head_lines: usize,
    pub body_lines: usize,
    pub total_lines: usize,
    pub file_count: usize,
}

pub fn stats(files: &GeneratedFiles) -> FileStats {
    // str::len is the UTF-8 encoded length
    let head_bytes = files.head_content.len();
    let body_bytes = files.body_content.len();
    let total_bytes = head_bytes + body_bytes;

    let head_lines = line_count(&files.head_content);
    let body_lines = line_count(&files.body_content);

    FileStats {
        head_bytes,
        body_bytes,
        total_bytes,
        head_size: format_file_size(head_bytes),
        body_size: format_file_size(body_bytes),
        total_size: format_file_size(total_bytes),
        head_lines,
        body_lines,
        total_lines: head_lines + body_lines,
        file_count: 2,
    }
}

/// Newline-delimited segments; an empty text is one line
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

/// `N B` below 1 KiB, otherwise KB or MB with one decimal place
pub fn format_file_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
