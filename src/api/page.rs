//! Plain-text rendering of `/section/{id}` pages
//!
//! The service answers section lookups with a small HTML document: an `<h1>`
//! heading, an `<h3>` chapter line, the law text and optional `<h2>` titled
//! blocks (explanation, illustrations, punishment). Only that structure is
//! understood; everything else is reduced to text.

/// A line of the section body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLine {
    Subheading(String),
    Text(String),
    Blank,
}

/// Structured text of a section page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPage {
    pub heading: String,
    pub chapter: Option<String>,
    pub lines: Vec<PageLine>,
}

const NOT_FOUND_MARKER: &str = "Section not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Text,
    H1,
    H2,
    H3,
}

impl SectionPage {
    /// Parse a section page; `None` when the server reports a missing section.
    pub fn from_html(html: &str) -> Option<Self> {
        let blocks = split_blocks(content_region(html));

        let heading = blocks
            .iter()
            .find(|(kind, _)| *kind == BlockKind::H1)
            .map(|(_, text)| text.clone());

        let Some(heading) = heading else {
            let has_text = blocks.iter().any(|(_, text)| !text.is_empty());
            if !has_text || blocks.iter().any(|(_, text)| text.contains(NOT_FOUND_MARKER)) {
                return None;
            }
            return Some(Self {
                heading: String::new(),
                chapter: None,
                lines: body_lines(&blocks, None),
            });
        };

        let chapter_index = blocks.iter().position(|(kind, _)| *kind == BlockKind::H3);
        let chapter = chapter_index.map(|i| blocks[i].1.clone());

        Some(Self {
            heading,
            chapter,
            lines: body_lines(&blocks, chapter_index),
        })
    }

    /// Number of rendered rows (heading, chapter, spacer, body)
    pub fn line_count(&self) -> usize {
        let header = 1 + usize::from(self.chapter.is_some()) + 1;
        header + self.lines.len()
    }
}

fn body_lines(blocks: &[(BlockKind, String)], skip: Option<usize>) -> Vec<PageLine> {
    let mut lines = Vec::new();

    for (i, (kind, text)) in blocks.iter().enumerate() {
        if Some(i) == skip {
            continue;
        }
        match kind {
            BlockKind::H1 => {}
            BlockKind::H2 | BlockKind::H3 => {
                push_blank(&mut lines);
                lines.push(PageLine::Subheading(text.clone()));
            }
            BlockKind::Text => {
                for line in text.split('\n') {
                    if line.is_empty() {
                        push_blank(&mut lines);
                    } else {
                        lines.push(PageLine::Text(line.to_string()));
                    }
                }
                push_blank(&mut lines);
            }
        }
    }

    while lines.last() == Some(&PageLine::Blank) {
        lines.pop();
    }
    lines
}

/// Appends a blank separator unless one is already there (or nothing is).
fn push_blank(lines: &mut Vec<PageLine>) {
    if matches!(lines.last(), Some(line) if *line != PageLine::Blank) {
        lines.push(PageLine::Blank);
    }
}

/// Narrows the document to `<main>` (or `<body>`) so navigation chrome is skipped.
fn content_region(html: &str) -> &str {
    // ASCII lowercasing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();

    for (open, close) in [("<main", "</main>"), ("<body", "</body>")] {
        if let Some(start) = lower.find(open) {
            let end = lower[start..]
                .find(close)
                .map(|e| start + e)
                .unwrap_or(html.len());
            return &html[start..end];
        }
    }
    html
}

fn split_blocks(html: &str) -> Vec<(BlockKind, String)> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut kind = BlockKind::Text;
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        current.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            rest = "";
            break;
        };
        let tag = &after[..end];
        rest = &after[end + 1..];

        let closing = tag.starts_with('/');
        let name = tag_name(tag);

        match name.as_str() {
            "br" => current.push('\n'),
            "h1" | "h2" | "h3" => {
                flush(&mut blocks, kind, &mut current);
                kind = match (closing, name.as_str()) {
                    (true, _) => BlockKind::Text,
                    (false, "h1") => BlockKind::H1,
                    (false, "h2") => BlockKind::H2,
                    _ => BlockKind::H3,
                };
            }
            "p" | "div" | "section" | "main" | "body" | "header" | "li" | "tr" => {
                flush(&mut blocks, kind, &mut current);
            }
            "script" | "style" | "title" if !closing => {
                let lower = rest.to_ascii_lowercase();
                let close = format!("</{}", name);
                rest = match lower.find(&close) {
                    Some(pos) => {
                        let tail = &rest[pos..];
                        tail.find('>').map(|gt| &tail[gt + 1..]).unwrap_or("")
                    }
                    None => "",
                };
            }
            _ => {}
        }
    }

    current.push_str(rest);
    flush(&mut blocks, kind, &mut current);
    blocks
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn flush(blocks: &mut Vec<(BlockKind, String)>, kind: BlockKind, current: &mut String) {
    let raw = std::mem::take(current);
    let decoded = decode_entities(&raw);

    let text = match kind {
        BlockKind::Text => {
            let lines: Vec<String> = decoded
                .split('\n')
                .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
                .collect();
            collapse_blank_lines(&lines)
        }
        _ => decoded.split_whitespace().collect::<Vec<_>>().join(" "),
    };

    if !text.is_empty() {
        blocks.push((kind, text));
    }
}

/// Joins lines, keeping at most one empty line in a row and none at the edges.
fn collapse_blank_lines(lines: &[String]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in lines {
        if line.is_empty() && out.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last() == Some(&"") {
        out.pop();
    }
    out.join("\n")
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after
            .find(';')
            .filter(|&semi| semi <= 8)
            .and_then(|semi| entity(&after[..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "mdash" => Some('—'),
        "ndash" => Some('–'),
        "larr" => Some('←'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod page_tests;
