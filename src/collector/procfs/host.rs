//! `HostContext` backed by `build.prop` and the `/proc/net` tables.

use std::collections::{BTreeSet, HashMap};
use std::net::IpAddr;
use std::path::Path;

use tracing::{debug, warn};

use crate::collector::procfs::parser::{
    parse_build_prop, parse_fib_trie_locals, parse_if_inet6, parse_locale_tag, parse_route,
};
use crate::collector::traits::{
    BuildInfo, ConnectivityError, FileSystem, HostContext, LinkProperties, Locale,
};
use crate::model::Permission;

/// Reads device state from files, without any platform bindings.
///
/// Native processes have no package manager to ask, so granted permissions
/// are supplied by the caller. None are granted by default.
pub struct ProcfsHost<F: FileSystem> {
    fs: F,
    build_prop_path: String,
    proc_path: String,
    granted: BTreeSet<Permission>,
}

impl<F: FileSystem> ProcfsHost<F> {
    /// Creates a new host.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `build_prop_path` - Path to `build.prop` (usually "/system/build.prop")
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, build_prop_path: impl Into<String>, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            build_prop_path: build_prop_path.into(),
            proc_path: proc_path.into(),
            granted: BTreeSet::new(),
        }
    }

    /// Marks `permission` as granted.
    pub fn grant(mut self, permission: Permission) -> Self {
        self.granted.insert(permission);
        self
    }

    /// Reads build properties; an unreadable file yields no properties.
    fn properties(&self) -> HashMap<String, String> {
        match self.fs.read_to_string(Path::new(&self.build_prop_path)) {
            Ok(content) => parse_build_prop(&content),
            Err(e) => {
                warn!("cannot read {}: {}", self.build_prop_path, e);
                HashMap::new()
            }
        }
    }

    /// Assigned IPv6 addresses of `iface`, in table order. Kernels without
    /// IPv6 have no table. IPv4-mapped entries are returned as IPv4.
    fn ipv6_addresses(&self, iface: &str) -> Vec<IpAddr> {
        let path = format!("{}/net/if_inet6", self.proc_path);
        if !self.fs.exists(Path::new(&path)) {
            debug!("no IPv6 table at {}", path);
            return Vec::new();
        }
        let content = match self.fs.read_to_string(Path::new(&path)) {
            Ok(content) => content,
            Err(e) => {
                warn!("cannot read {}: {}", path, e);
                return Vec::new();
            }
        };

        match parse_if_inet6(&content) {
            Ok(entries) => entries
                .into_iter()
                .filter(|e| e.interface == iface && e.is_assigned())
                .map(|e| match e.address.to_ipv4_mapped() {
                    Some(v4) => IpAddr::V4(v4),
                    None => IpAddr::V6(e.address),
                })
                .collect(),
            Err(e) => {
                warn!("{}: {}", path, e);
                Vec::new()
            }
        }
    }
}

impl<F: FileSystem> HostContext for ProcfsHost<F> {
    fn build_info(&self) -> BuildInfo {
        let mut props = self.properties();
        let mut take = |key: &str| props.remove(key);

        BuildInfo {
            manufacturer: take("ro.product.manufacturer").unwrap_or_default(),
            model: take("ro.product.model").unwrap_or_default(),
            release: take("ro.build.version.release"),
            sdk_int: take("ro.build.version.sdk")
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }

    fn default_locale(&self) -> Locale {
        let props = self.properties();

        let tag = ["persist.sys.locale", "ro.product.locale"]
            .iter()
            .filter_map(|key| props.get(*key))
            .find(|tag| !tag.trim().is_empty());
        if let Some(tag) = tag {
            let (language, country) = parse_locale_tag(tag);
            return Locale::new(language, country);
        }

        let get = |key: &str| props.get(key).cloned().unwrap_or_default();
        Locale::new(
            get("ro.product.locale.language").to_ascii_lowercase(),
            get("ro.product.locale.region").to_ascii_uppercase(),
        )
    }

    fn is_permission_granted(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }

    /// The active link is the interface of the up default route with the
    /// lowest metric; on a tie the route listed first wins.
    ///
    /// IPv6 addresses come first, then IPv4. An IPv4 address belongs to the
    /// link when it falls inside one of the link's routed networks. A
    /// point-to-point link routes no network of its own, so it gets every
    /// non-loopback local address that no other interface's network claims.
    fn active_link(&self) -> Result<Option<LinkProperties>, ConnectivityError> {
        let route_path = format!("{}/net/route", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&route_path))?;
        let routes: Vec<_> = parse_route(&content)
            .map_err(|e| ConnectivityError::Unavailable(format!("{}: {}", route_path, e)))?
            .into_iter()
            .filter(|r| r.is_up())
            .collect();

        let Some(default) = routes
            .iter()
            .filter(|r| r.is_default())
            .min_by_key(|r| r.metric)
        else {
            return Ok(None);
        };
        let iface = default.iface.as_str();

        let (networks, foreign): (Vec<_>, Vec<_>) = routes
            .iter()
            .filter(|r| !r.is_default())
            .partition(|r| r.iface == iface);

        let trie_path = format!("{}/net/fib_trie", self.proc_path);
        let locals = match self.fs.read_to_string(Path::new(&trie_path)) {
            Ok(content) => parse_fib_trie_locals(&content),
            Err(e) => {
                warn!("cannot read {}: {}", trie_path, e);
                Vec::new()
            }
        };
        let ipv4 = locals.into_iter().filter(|addr| {
            if networks.is_empty() {
                !addr.is_loopback() && !foreign.iter().any(|r| r.contains(*addr))
            } else {
                networks.iter().any(|r| r.contains(*addr))
            }
        });

        let (mut addresses, mapped): (Vec<IpAddr>, Vec<IpAddr>) = self
            .ipv6_addresses(iface)
            .into_iter()
            .partition(|addr| addr.is_ipv6());
        for addr in ipv4.map(IpAddr::V4).chain(mapped) {
            if !addresses.contains(&addr) {
                addresses.push(addr);
            }
        }

        Ok(Some(LinkProperties {
            interface: iface.to_string(),
            addresses: addresses.iter().map(|addr| addr.to_string()).collect(),
        }))
    }
}
