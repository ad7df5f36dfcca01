//! In-memory `HostContext` for tests.

use std::collections::BTreeSet;

use crate::collector::traits::{BuildInfo, ConnectivityError, HostContext, LinkProperties, Locale};
use crate::model::Permission;

#[derive(Debug, Clone, Default)]
enum MockLink {
    Unavailable,
    #[default]
    Down,
    Up(LinkProperties),
}

/// Host whose every capability is set explicitly.
///
/// Starts with empty build metadata, an empty locale, no granted
/// permissions and no active network.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    build: BuildInfo,
    locale: Locale,
    granted: BTreeSet<Permission>,
    link: MockLink,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build(mut self, build: BuildInfo) -> Self {
        self.build = build;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn grant(mut self, permission: Permission) -> Self {
        self.granted.insert(permission);
        self
    }

    pub fn deny(mut self, permission: Permission) -> Self {
        self.granted.remove(&permission);
        self
    }

    /// Sets the active network link and its addresses in link order.
    pub fn with_link(mut self, interface: &str, addresses: &[&str]) -> Self {
        self.link = MockLink::Up(LinkProperties {
            interface: interface.to_string(),
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
        });
        self
    }

    /// Removes the active network.
    pub fn without_link(mut self) -> Self {
        self.link = MockLink::Down;
        self
    }

    /// Makes the connectivity subsystem itself unqueryable.
    pub fn with_connectivity_unavailable(mut self) -> Self {
        self.link = MockLink::Unavailable;
        self
    }
}

impl HostContext for MockHost {
    fn build_info(&self) -> BuildInfo {
        self.build.clone()
    }

    fn default_locale(&self) -> Locale {
        self.locale.clone()
    }

    fn is_permission_granted(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }

    fn active_link(&self) -> Result<Option<LinkProperties>, ConnectivityError> {
        match &self.link {
            MockLink::Unavailable => Err(ConnectivityError::Unavailable(
                "mock connectivity service missing".to_string(),
            )),
            MockLink::Down => Ok(None),
            MockLink::Up(link) => Ok(Some(link.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_host_defaults() {
        let host = MockHost::new();
        assert_eq!(host.build_info(), BuildInfo::default());
        assert!(!host.is_permission_granted(Permission::Internet));
        assert!(matches!(host.active_link(), Ok(None)));
    }

    #[test]
    fn test_mock_host_grant_and_deny() {
        let host = MockHost::new()
            .grant(Permission::Internet)
            .grant(Permission::AccessNetworkState)
            .deny(Permission::Internet);
        assert!(!host.is_permission_granted(Permission::Internet));
        assert!(host.is_permission_granted(Permission::AccessNetworkState));
    }

    #[test]
    fn test_mock_host_link_states() {
        let host = MockHost::new().with_link("eth0", &["10.0.0.2"]);
        let link = host.active_link().unwrap().unwrap();
        assert_eq!(link.interface, "eth0");
        assert_eq!(link.addresses, vec!["10.0.0.2".to_string()]);

        let host = host.with_connectivity_unavailable();
        assert!(host.active_link().is_err());
    }
}
