//! Console text for watch events. Every block opens with the tag line and
//! ends with a blank line.

use super::ArmedTarget;
use super::ChangeReport;
use crate::ConsoleConfig;
use crate::TargetAddress;

const STOPPED: &str = "Stopped listening for parameter tweaks";

pub(crate) fn armed_lines(
    config: &ConsoleConfig,
    target: &ArmedTarget,
    keep_alive: bool,
    replaced: Option<TargetAddress>,
) -> Vec<String> {
    let mut lines = vec![config.tag.clone()];
    if replaced.is_some() {
        lines.push(STOPPED.to_string());
        lines.push(String::new());
    }

    let user_name = match &target.display_name {
        Some(name) => format!(" ('{}')", name),
        None => String::new(),
    };
    lines.push(format!(
        "Listening for parameter tweaks on '{}'{}...",
        target.canonical_name, user_name
    ));
    if keep_alive {
        lines.push("Listening indefinitely. Call check with no args to stop".to_string());
    }
    lines.push(String::new());
    lines
}

pub(crate) fn stopped_lines(config: &ConsoleConfig) -> Vec<String> {
    vec![config.tag.clone(), STOPPED.to_string(), String::new()]
}

pub(crate) fn invalid_target_lines(
    config: &ConsoleConfig,
    address: &TargetAddress,
) -> Vec<String> {
    vec![
        config.tag.clone(),
        format!("Can't check for parameter changes at index `{}`", address),
        String::new(),
        "Please check that a plugin exists at this index, and".to_string(),
        "remember that group indexes are required on the".to_string(),
        "channel rack.".to_string(),
        String::new(),
        "Note that audio clips are not valid plugins.".to_string(),
        String::new(),
    ]
}

pub(crate) fn change_lines(
    config: &ConsoleConfig,
    report: &ChangeReport,
) -> Vec<String> {
    let plural = if report.changes.len() == 1 { "" } else { "s" };
    let mut lines = vec![
        config.tag.clone(),
        format!("Found tweaked parameter{}", plural),
    ];
    for change in &report.changes {
        lines.push(format!(
            "{:0>width$}: {}",
            change.index,
            change.name,
            width = config.index_width
        ));
    }
    lines.push(String::new());

    if report.disarmed {
        lines.push(STOPPED.to_string());
        lines.push(String::new());
    }
    lines
}
