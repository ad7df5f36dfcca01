//! Per-field resolution against a `HostContext`.

use tracing::{debug, warn};

use crate::collector::traits::HostContext;
use crate::model::{ErrorCode, FetchResult, FieldKey, Permission};
use crate::versions::sdk_version_name;

/// Platform family reported under `C001`.
const PLATFORM: &str = "Android";

/// Separator between manufacturer and model in `C002`.
const MODEL_SEPARATOR: &str = "||";

/// Resolves catalog fields one at a time.
///
/// Holds no state between calls; every `resolve` reads the host afresh.
pub struct FieldCollector<'a, H: HostContext + ?Sized> {
    host: &'a H,
}

impl<'a, H: HostContext + ?Sized> FieldCollector<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Resolves every catalog field in catalog order.
    pub fn collect(&self) -> Vec<(FieldKey, FetchResult)> {
        FieldKey::CATALOG
            .into_iter()
            .map(|key| (key, self.resolve(key)))
            .collect()
    }

    /// Resolves a field given its wire code. Unknown codes are unavailable.
    pub fn resolve_code(&self, code: &str) -> FetchResult {
        match FieldKey::from_code(code) {
            Some(key) => self.resolve(key),
            None => {
                debug!(code, "unknown field code");
                FetchResult::Failure(ErrorCode::Empty)
            }
        }
    }

    /// Resolves a single field.
    pub fn resolve(&self, key: FieldKey) -> FetchResult {
        let result = match key {
            FieldKey::DeviceType => FetchResult::Success(PLATFORM.to_string()),
            FieldKey::DeviceModel => {
                let build = self.host.build_info();
                FetchResult::Success(format!(
                    "{}{}{}",
                    build.manufacturer, MODEL_SEPARATOR, build.model
                ))
            }
            FieldKey::DeviceOs => FetchResult::Success(self.os_descriptor()),
            FieldKey::OsVersion => match self.host.build_info().release {
                Some(release) if !release.trim().is_empty() => FetchResult::Success(release),
                _ => FetchResult::Failure(ErrorCode::Empty),
            },
            FieldKey::Locale => {
                let locale = self.host.default_locale();
                FetchResult::Success(format!("{}-{}", locale.language, locale.country))
            }
            FieldKey::IpAddress => self.ip_address(),
            FieldKey::TimeZone | FieldKey::ScreenResolution | FieldKey::DeviceName => {
                FetchResult::Failure(ErrorCode::Empty)
            }
        };
        debug!(field = %key, ?result, "resolved field");
        result
    }

    /// `Android <CODENAME> <release> API <level>`; the codename is empty
    /// for levels missing from the table.
    fn os_descriptor(&self) -> String {
        let build = self.host.build_info();
        format!(
            "{} {} {} API {}",
            PLATFORM,
            sdk_version_name(build.sdk_int).unwrap_or(""),
            build.release.as_deref().unwrap_or(""),
            build.sdk_int
        )
    }

    fn ip_address(&self) -> FetchResult {
        let granted = [Permission::Internet, Permission::AccessNetworkState]
            .into_iter()
            .all(|p| self.host.is_permission_granted(p));
        if !granted {
            return FetchResult::Failure(ErrorCode::PermissionRequired);
        }

        let link = match self.host.active_link() {
            Ok(link) => link,
            Err(e) => {
                warn!("cannot query active network: {}", e);
                return FetchResult::Failure(ErrorCode::Restriction);
            }
        };

        let Some(link) = link else {
            return FetchResult::Failure(ErrorCode::Empty);
        };

        for address in &link.addresses {
            debug!(interface = %link.interface, address = %address, "candidate address");
        }

        // First address that looks dotted; no stricter family check.
        match link.addresses.into_iter().find(|a| a.contains('.')) {
            Some(address) => FetchResult::Success(address),
            None => FetchResult::Failure(ErrorCode::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockHost;
    use crate::collector::traits::{BuildInfo, Locale};

    #[test]
    fn test_constant_and_build_fields() {
        let host = MockHost::typical_device();
        let collector = FieldCollector::new(&host);

        assert_eq!(
            collector.resolve(FieldKey::DeviceType),
            FetchResult::Success("Android".to_string())
        );
        assert_eq!(
            collector.resolve(FieldKey::DeviceModel),
            FetchResult::Success("Google||Pixel 8".to_string())
        );
        assert_eq!(
            collector.resolve(FieldKey::DeviceOs),
            FetchResult::Success("Android UPSIDE_DOWN_CAKE 14 API 34".to_string())
        );
        assert_eq!(
            collector.resolve(FieldKey::OsVersion),
            FetchResult::Success("14".to_string())
        );
        assert_eq!(
            collector.resolve(FieldKey::Locale),
            FetchResult::Success("en-US".to_string())
        );
    }

    #[test]
    fn test_os_descriptor_unknown_level() {
        let host = MockHost::new().with_build(BuildInfo {
            manufacturer: "acme".to_string(),
            model: "x1".to_string(),
            release: Some("99".to_string()),
            sdk_int: 999,
        });
        let collector = FieldCollector::new(&host);
        assert_eq!(
            collector.resolve(FieldKey::DeviceOs),
            FetchResult::Success("Android  99 API 999".to_string())
        );
    }

    #[test]
    fn test_os_version_missing_or_blank() {
        let mut build = MockHost::typical_device().build_info();

        build.release = None;
        let host = MockHost::new().with_build(build.clone());
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::OsVersion),
            FetchResult::Failure(ErrorCode::Empty)
        );

        build.release = Some("   ".to_string());
        let host = MockHost::new().with_build(build);
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::OsVersion),
            FetchResult::Failure(ErrorCode::Empty)
        );
    }

    #[test]
    fn test_locale_has_no_trailing_artifact() {
        let host = MockHost::new().with_locale(Locale::new("ru", "RU"));
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::Locale),
            FetchResult::Success("ru-RU".to_string())
        );
    }

    #[test]
    fn test_unimplemented_fields_are_empty() {
        let host = MockHost::typical_device();
        let collector = FieldCollector::new(&host);
        for key in [
            FieldKey::TimeZone,
            FieldKey::ScreenResolution,
            FieldKey::DeviceName,
        ] {
            assert_eq!(collector.resolve(key), FetchResult::Failure(ErrorCode::Empty));
        }
    }

    #[test]
    fn test_resolve_code() {
        let host = MockHost::typical_device();
        let collector = FieldCollector::new(&host);
        assert_eq!(
            collector.resolve_code("C001"),
            FetchResult::Success("Android".to_string())
        );
        for code in ["C007", "C011", "", "device type"] {
            assert_eq!(
                collector.resolve_code(code),
                FetchResult::Failure(ErrorCode::Empty)
            );
        }
    }

    #[test]
    fn test_ip_prefers_first_dotted_address() {
        let host = MockHost::typical_device();
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::IpAddress),
            FetchResult::Success("192.168.1.5".to_string())
        );
    }

    #[test]
    fn test_ip_keeps_link_order() {
        let host = MockHost::typical_device().with_link(
            "wlan0",
            &["fe80::1", "10.0.0.7", "192.168.1.5"],
        );
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::IpAddress),
            FetchResult::Success("10.0.0.7".to_string())
        );
    }

    #[test]
    fn test_ip_requires_both_permissions() {
        for denied in [Permission::Internet, Permission::AccessNetworkState] {
            let host = MockHost::typical_device().deny(denied);
            assert_eq!(
                FieldCollector::new(&host).resolve(FieldKey::IpAddress),
                FetchResult::Failure(ErrorCode::PermissionRequired)
            );
        }
    }

    #[test]
    fn test_ip_permissions_checked_before_connectivity() {
        let host = MockHost::connectivity_unavailable().deny(Permission::Internet);
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::IpAddress),
            FetchResult::Failure(ErrorCode::PermissionRequired)
        );
        assert_eq!(
            FieldCollector::new(&MockHost::without_network_permissions())
                .resolve(FieldKey::IpAddress),
            FetchResult::Failure(ErrorCode::PermissionRequired)
        );
    }

    #[test]
    fn test_ip_connectivity_unavailable() {
        let host = MockHost::connectivity_unavailable();
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::IpAddress),
            FetchResult::Failure(ErrorCode::Restriction)
        );
    }

    #[test]
    fn test_ip_without_dotted_address() {
        let host = MockHost::ipv6_only();
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::IpAddress),
            FetchResult::Failure(ErrorCode::Empty)
        );
    }

    #[test]
    fn test_ip_without_active_network() {
        let host = MockHost::typical_device().without_link();
        assert_eq!(
            FieldCollector::new(&host).resolve(FieldKey::IpAddress),
            FetchResult::Failure(ErrorCode::Empty)
        );
    }

    #[test]
    fn test_collect_resolves_every_key_once() {
        let host = MockHost::typical_device();
        let results = FieldCollector::new(&host).collect();
        let keys: Vec<FieldKey> = results.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, FieldKey::CATALOG.to_vec());
        assert_eq!(results.iter().filter(|(_, r)| r.is_success()).count(), 6);
    }
}
