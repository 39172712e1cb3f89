//! Greedy word wrapping for the description section.

/// A run of either whitespace or non-whitespace characters.
struct Chunk {
    text: String,
    width: usize,
    is_space: bool,
}

/// Split text into alternating word and whitespace chunks.
///
/// Every whitespace character (tabs and newlines included) becomes a plain
/// space.
fn split_chunks(text: &str) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();

    for c in text.chars() {
        let is_space = c.is_whitespace();
        let c = if is_space { ' ' } else { c };

        match chunks.last_mut() {
            Some(chunk) if chunk.is_space == is_space => {
                chunk.text.push(c);
                chunk.width += 1;
            }
            _ => chunks.push(Chunk {
                text: c.to_string(),
                width: 1,
                is_space,
            }),
        }
    }

    chunks
}

/// Wrap text into lines of at most `width` characters.
///
/// Lines break only at whitespace. A word wider than `width` is placed on a
/// line of its own rather than split. Whitespace at the end of a line, and at
/// the start of every line after the first, is dropped. A `width` of 0
/// disables wrapping.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        };
    }

    let chunks = split_chunks(text);
    let mut lines: Vec<String> = Vec::new();
    let mut i = 0;

    while i < chunks.len() {
        let mut line: Vec<&Chunk> = Vec::new();
        let mut line_width = 0;

        if !lines.is_empty() && chunks[i].is_space {
            i += 1;
        }

        while let Some(chunk) = chunks.get(i) {
            if line_width + chunk.width > width {
                break;
            }
            line_width += chunk.width;
            line.push(chunk);
            i += 1;
        }

        // Overlong word on an empty line: keep it whole.
        if line.is_empty() {
            if let Some(chunk) = chunks.get(i) {
                line.push(chunk);
                i += 1;
            }
        }

        if line.last().is_some_and(|chunk| chunk.is_space) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.iter().map(|chunk| chunk.text.as_str()).collect());
        }
    }

    lines
}

/// Wrap text and join the lines with `\n`.
pub fn fill(text: &str, width: usize) -> String {
    wrap(text, width).join("\n")
}
