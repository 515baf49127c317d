//! Stable priority sort for packet-marking and firewall rules.
//!
//! Priority is inferred from two substrings of each command, the free-text
//! `comment=` value and the `chain=` value, through keyword predicates
//! evaluated in a fixed order. The evaluation order is authoritative:
//! several keywords overlap (a comment can match both the games and the
//! split predicate) and downstream device behavior depends on the exact
//! resulting rule order, so predicates must not be reordered or "fixed"
//! without a regression suite of known-good outputs.

use std::cmp::Ordering;

/// Priority tiers in increasing order; unmatched commands land in the
/// terminal [`RulePriority::Default`] tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RulePriority {
    Accept,
    VpnEndpoint,
    OutputSpecial,
    Games,
    Split,
    NetworkRouting,
    VpnServerInbound,
    Default,
}

/// Classify one command. Predicates run in the listed order.
pub fn classify(command: &str) -> RulePriority {
    let comment = extract_param(command, "comment")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let chain = extract_param(command, "chain").unwrap_or_default();

    if comment.contains("accept") {
        return RulePriority::Accept;
    }
    if comment.contains("endpoint") {
        return RulePriority::VpnEndpoint;
    }
    if chain == "output" {
        return RulePriority::OutputSpecial;
    }
    if comment.contains("game") {
        return RulePriority::Games;
    }
    if comment.contains("split") {
        return RulePriority::Split;
    }
    if comment.contains("network") || comment.contains("routing") || comment.contains("route") {
        return RulePriority::NetworkRouting;
    }
    if comment.contains("vpn server") || comment.contains("inbound") {
        return RulePriority::VpnServerInbound;
    }
    RulePriority::Default
}

/// Secondary ordering inside one tier.
///
/// A `mark-connection` command must precede its paired `mark-routing`
/// command; inside the Accept tier ties break by a fixed chain order.
/// Commands tying on both keys keep their input order (the sort is stable),
/// which generators emitting dependent multi-command groups rely on.
fn sub_priority(tier: RulePriority, command: &str) -> u8 {
    if tier == RulePriority::Accept {
        return match extract_param(command, "chain").unwrap_or_default() {
            "prerouting" => 0,
            "postrouting" => 1,
            "output" => 2,
            "input" => 3,
            "forward" => 4,
            _ => 5,
        };
    }
    match extract_param(command, "action").unwrap_or_default() {
        "mark-connection" => 0,
        "mark-routing" => 1,
        _ => 2,
    }
}

/// Stable priority sort of one section's commands in place.
pub fn sort_marking_rules(commands: &mut [String]) {
    commands.sort_by(|a, b| {
        let tier_a = classify(a);
        let tier_b = classify(b);
        match tier_a.cmp(&tier_b) {
            Ordering::Equal => sub_priority(tier_a, a).cmp(&sub_priority(tier_b, b)),
            unequal => unequal,
        }
    });
}

/// Extract the value of `key=` from a command, handling both quoted values
/// (up to the closing unescaped quote) and bare tokens (up to whitespace).
pub(crate) fn extract_param<'a>(command: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("{key}=");
    let mut search_from = 0;
    loop {
        let found = command[search_from..].find(&needle)? + search_from;
        // Must start a parameter, not the tail of a longer key.
        if found > 0 && !matches!(command.as_bytes()[found - 1], b' ' | b'\t') {
            search_from = found + needle.len();
            continue;
        }
        let value = &command[found + needle.len()..];
        return Some(if let Some(quoted) = value.strip_prefix('"') {
            let mut end = 0;
            let bytes = quoted.as_bytes();
            while end < bytes.len() {
                match bytes[end] {
                    b'\\' => end += 2,
                    b'"' => break,
                    _ => end += 1,
                }
            }
            &quoted[..end.min(quoted.len())]
        } else {
            value.split_whitespace().next().unwrap_or("")
        });
    }
}
