//! Usage text shown when a check is requested without a target.

/// Guidance printed when stop is requested with nothing being watched.
pub fn usage_lines(tag: &str) -> Vec<String> {
    [
        tag,
        "To start listening for parameter tweaks, call check with the",
        "index of the plugin as the args. For example:",
        "    check 0      # start listening to channel 1 on the channel rack",
        "    check 1 5    # start listening to slot 6 of track 1 on the mixer",
        "To listen for changes indefinitely, add the keep-alive flag to",
        "your call, for example:",
        "    check 0 --keep-alive",
        "",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// Banner printed once when the device is loaded.
pub fn load_banner() -> Vec<String> {
    [
        "",
        "To use the Param Checker device, call",
        "check <index> or",
        "check <index> <slot_index>",
        "",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_opens_with_tag_and_ends_blank() {
        let lines = usage_lines("[Probe]");

        assert_eq!(lines.first().map(String::as_str), Some("[Probe]"));
        assert_eq!(lines.last().map(String::as_str), Some(""));
        assert!(lines.iter().any(|l| l.contains("--keep-alive")));
    }
}
