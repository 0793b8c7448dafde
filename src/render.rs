use tracing::{debug, trace};

use crate::config::ConvertConfig;
use crate::line::{Line, LineKind};

/// Render classified lines back to markdown, promoting bullets to headings.
///
/// Headings and other lines are emitted exactly as they were read. A bullet
/// becomes a heading one level below the most recent heading, plus one more
/// level per indent step, capped at `max_level`.
pub fn lines_to_markdown(lines: &[Line], config: &ConvertConfig) -> String {
    let mut out = Vec::with_capacity(lines.len());
    let mut heading_level: u8 = 0;
    let mut promoted = 0usize;

    for line in lines {
        match &line.kind {
            LineKind::Heading { level, .. } => {
                heading_level = *level;
                out.push(line.raw.clone());
            }
            LineKind::Bullet { content, .. } => {
                let level = subheading_level(heading_level, line.indent, config.max_level);
                trace!(level, indent = line.indent, "bullet promoted");
                promoted += 1;
                out.push(format!("{} {}", "#".repeat(level as usize), content));
            }
            LineKind::Other => out.push(line.raw.clone()),
        }
    }

    debug!(lines = lines.len(), promoted, "converted document");
    out.join("\n")
}

/// Heading depth for a bullet under `heading_level` at `indent` steps in.
pub fn subheading_level(heading_level: u8, indent: usize, max_level: u8) -> u8 {
    let level = (heading_level as usize)
        .saturating_add(indent)
        .saturating_add(1);
    level.min(max_level as usize) as u8
}
