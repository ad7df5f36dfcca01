//! Parsers for `build.prop` and `/proc/net` files.
//!
//! These are pure functions over file contents so they can be tested with
//! string inputs.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

// ============ build.prop ============

/// Parses Android `build.prop` content into a property map.
///
/// Lines are `key=value`; blank lines, `#` comments and lines without `=`
/// are ignored. Read-only (`ro.`) properties keep their first definition,
/// other properties take the last one.
pub fn parse_build_prop(content: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        if key.starts_with("ro.") && props.contains_key(key) {
            continue;
        }
        props.insert(key.to_string(), value.trim().to_string());
    }

    props
}

/// Language and region of a BCP-47 style tag such as `en-US`, `zh-Hans-CN`
/// or `pt_BR`.
///
/// Script and variant subtags are skipped. The language is lowercased and
/// the region uppercased; either may be empty.
pub fn parse_locale_tag(tag: &str) -> (String, String) {
    let mut subtags = tag.trim().split(['-', '_']).filter(|s| !s.is_empty());

    let language = subtags.next().unwrap_or("").to_ascii_lowercase();
    let region = subtags
        .find(|s| {
            (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
                || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
        })
        .unwrap_or("")
        .to_ascii_uppercase();

    (language, region)
}

// ============ /proc/net/route ============

/// Route is usable (`RTF_UP`).
const RTF_UP: u16 = 0x0001;

/// One row of `/proc/net/route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub iface: String,
    pub destination: Ipv4Addr,
    pub flags: u16,
    pub metric: u32,
    pub mask: Ipv4Addr,
}

impl RouteEntry {
    pub fn is_up(&self) -> bool {
        self.flags & RTF_UP != 0
    }

    /// Whether this is a default route (`0.0.0.0/0`).
    pub fn is_default(&self) -> bool {
        self.destination.is_unspecified() && self.mask.is_unspecified()
    }

    /// Whether `addr` falls inside this route's destination network.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & u32::from(self.mask) == u32::from(self.destination)
    }
}

/// Parses a `/proc/net/route` address.
///
/// The kernel prints the raw 32-bit value in host byte order.
fn parse_route_addr(s: &str) -> Result<Ipv4Addr, ParseError> {
    let raw = u32::from_str_radix(s, 16)
        .map_err(|_| ParseError::new(format!("invalid route address '{}'", s)))?;
    Ok(Ipv4Addr::from(raw.to_ne_bytes()))
}

/// Parses `/proc/net/route` content.
///
/// Format (tab separated, one header line):
/// `Iface Destination Gateway Flags RefCnt Use Metric Mask MTU Window IRTT`
pub fn parse_route(content: &str) -> Result<Vec<RouteEntry>, ParseError> {
    let mut routes = Vec::new();

    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() || fields[0] == "Iface" {
            continue;
        }
        if fields.len() < 8 {
            continue;
        }

        routes.push(RouteEntry {
            iface: fields[0].to_string(),
            destination: parse_route_addr(fields[1])?,
            flags: u16::from_str_radix(fields[3], 16)
                .map_err(|_| ParseError::new(format!("invalid route flags '{}'", fields[3])))?,
            metric: fields[6].parse().unwrap_or(0),
            mask: parse_route_addr(fields[7])?,
        });
    }

    Ok(routes)
}

// ============ /proc/net/if_inet6 ============

/// Duplicate address detection failed (`IFA_F_DADFAILED`).
const IFA_F_DADFAILED: u32 = 0x08;
/// Duplicate address detection still running (`IFA_F_TENTATIVE`).
const IFA_F_TENTATIVE: u32 = 0x40;

/// One row of `/proc/net/if_inet6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inet6Entry {
    pub address: Ipv6Addr,
    pub flags: u32,
    pub interface: String,
}

impl Inet6Entry {
    /// Whether the address is assigned, i.e. neither tentative nor failed DAD.
    pub fn is_assigned(&self) -> bool {
        self.flags & (IFA_F_TENTATIVE | IFA_F_DADFAILED) == 0
    }
}

/// Parses `/proc/net/if_inet6` content.
///
/// Format: `address ifindex prefix_len scope flags name`, all numbers in hex,
/// the address as 32 hex digits without separators. Only the address, flags
/// and name are kept.
pub fn parse_if_inet6(content: &str) -> Result<Vec<Inet6Entry>, ParseError> {
    let mut entries = Vec::new();

    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 6 || fields[0].len() != 32 {
            return Err(ParseError::new(format!("malformed if_inet6 line '{}'", line)));
        }

        let raw = u128::from_str_radix(fields[0], 16)
            .map_err(|_| ParseError::new(format!("invalid IPv6 address '{}'", fields[0])))?;
        let flags = u32::from_str_radix(fields[4], 16)
            .map_err(|_| ParseError::new(format!("invalid if_inet6 flags '{}'", fields[4])))?;

        entries.push(Inet6Entry {
            address: Ipv6Addr::from(raw),
            flags,
            interface: fields[5].to_string(),
        });
    }

    Ok(entries)
}

// ============ /proc/net/fib_trie ============

/// Extracts local host addresses (`/32 host LOCAL`) from `/proc/net/fib_trie`.
///
/// Each address appears once, in order of first appearance. Both the `Main`
/// and `Local` tables list the same addresses on most kernels.
pub fn parse_fib_trie_locals(content: &str) -> Vec<Ipv4Addr> {
    let mut locals = Vec::new();
    let mut current: Option<Ipv4Addr> = None;

    for line in content.lines() {
        let line = line.trim();
        if let Some(addr) = line.strip_prefix("|-- ") {
            current = addr.trim().parse().ok();
        } else if line.starts_with("+--") {
            current = None;
        } else if line.starts_with("/32 host LOCAL") {
            if let Some(addr) = current {
                if !locals.contains(&addr) {
                    locals.push(addr);
                }
            }
        }
    }

    locals
}
