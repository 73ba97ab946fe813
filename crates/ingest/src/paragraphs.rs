//! Blank-line paragraph splitting.

/// Split a block of text into paragraphs.
///
/// Paragraphs are delimited by blank lines; within a paragraph, lines
/// are trimmed and joined with single spaces. A trailing paragraph
/// without a closing blank line is still emitted. Pure and stateless.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !buffer.is_empty() {
                paragraphs.push(buffer.join(" "));
                buffer.clear();
            }
        } else {
            buffer.push(trimmed);
        }
    }

    if !buffer.is_empty() {
        paragraphs.push(buffer.join(" "));
    }

    paragraphs
}
