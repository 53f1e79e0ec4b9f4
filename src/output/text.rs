//! Human-readable rendering of reports and trees.

use crate::aggregator::MetricsReport;
use crate::tree::Node;

/// Render minutes as "<h>h <m>m"
pub fn format_minutes(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Render a report as the lines printed to stdout
pub fn render_report(report: &MetricsReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Total story points: {}", report.total_story_points));
    lines.push(format!("Total time: {}", format_minutes(report.total_time)));
    lines.push(format!("Velocity: {:.2} minutes per point", report.velocity));
    lines.push(String::new());

    lines.push("Sprints:".to_string());
    for sprint in &report.sprints {
        lines.push(format!(
            "  {} ({}): {} points, {}, {}",
            sprint.name,
            sprint.project,
            sprint.story_points,
            format_minutes(sprint.time),
            format_velocity(sprint.velocity)
        ));
    }
    lines.push(String::new());

    lines.push(format!(
        "Average story points per sprint: {:.2}",
        report.averages.story_points
    ));
    lines.push(format!(
        "Average time per sprint: {}",
        format_minutes(report.averages.time.round() as u64)
    ));

    lines.join("\n")
}

fn format_velocity(velocity: Option<f64>) -> String {
    match velocity {
        Some(v) => format!("{:.2} minutes per point", v),
        None => "n/a".to_string(),
    }
}

/// Render the tree as an indented outline, two spaces per level
pub fn render_tree(root: &Node) -> String {
    let mut lines = Vec::new();
    collect_lines(root, 0, &mut lines);
    lines.join("\n")
}

fn collect_lines(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let line = match (node.time(), node.total()) {
        (Some(time), _) => format!("{}{} [{}]", indent, node.name, format_minutes(time)),
        (None, Some(total)) => format!(
            "{}{} (total {})",
            indent,
            node.name,
            format_minutes(total)
        ),
        (None, None) => format!("{}{}", indent, node.name),
    };
    lines.push(line);

    for child in node.children() {
        collect_lines(child, depth + 1, lines);
    }
}
