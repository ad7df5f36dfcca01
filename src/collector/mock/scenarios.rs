//! Pre-built device scenarios for testing.

use super::filesystem::MockFs;
use super::host::MockHost;
use crate::collector::traits::{BuildInfo, Locale};
use crate::model::Permission;

impl MockHost {
    /// A Pixel 8 on Android 14 with both network permissions granted and an
    /// active Wi-Fi link carrying a link-local IPv6 and a private IPv4 address.
    pub fn typical_device() -> Self {
        Self::new()
            .with_build(BuildInfo {
                manufacturer: "Google".to_string(),
                model: "Pixel 8".to_string(),
                release: Some("14".to_string()),
                sdk_int: 34,
            })
            .with_locale(Locale::new("en", "US"))
            .grant(Permission::Internet)
            .grant(Permission::AccessNetworkState)
            .with_link("wlan0", &["fe80::1", "192.168.1.5"])
    }

    /// Typical device whose app was not granted network permissions.
    pub fn without_network_permissions() -> Self {
        Self::typical_device()
            .deny(Permission::Internet)
            .deny(Permission::AccessNetworkState)
    }

    /// Typical device without a connectivity service.
    pub fn connectivity_unavailable() -> Self {
        Self::typical_device().with_connectivity_unavailable()
    }

    /// Typical device on an IPv6-only network.
    pub fn ipv6_only() -> Self {
        Self::typical_device().with_link("wlan0", &["fe80::1", "2001:db8::5"])
    }
}

impl MockFs {
    /// `build.prop` and `/proc/net` of a Pixel 8 on Wi-Fi.
    ///
    /// `wlan0` carries the default route, `192.168.1.5/24`, `fe80::1` and
    /// `2001:db8::5`. A cellular interface `rmnet_data0` holds `10.42.7.9/16`
    /// without a default route.
    pub fn typical_device() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/system/build.prop",
            "\
# begin build properties
ro.build.id=UQ1A.240205.004
ro.build.version.sdk=34
ro.build.version.release=14
ro.product.manufacturer=Google
ro.product.model=Pixel 8
ro.product.locale=en-US
# end build properties
",
        );

        fs.add_file(
            "/proc/net/route",
            "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
wlan0\t00000000\t0101A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
wlan0\t0001A8C0\t00000000\t0001\t0\t0\t600\t00FFFFFF\t0\t0\t0
rmnet_data0\t00002A0A\t00000000\t0001\t0\t0\t0\t0000FFFF\t0\t0\t0
",
        );

        fs.add_file(
            "/proc/net/if_inet6",
            "\
00000000000000000000000000000001 01 80 10 80       lo
fe800000000000000000000000000001 1e 40 20 80    wlan0
20010db8000000000000000000000005 1e 40 00 00    wlan0
fe800000000000000000000000000042 1f 40 20 80 rmnet_data0
",
        );

        fs.add_file(
            "/proc/net/fib_trie",
            "\
Main:
  +-- 0.0.0.0/0 3 0 5
     |-- 0.0.0.0
        /0 universe UNICAST
     +-- 10.42.0.0/16 2 0 2
        |-- 10.42.0.0
           /16 link UNICAST
        |-- 10.42.7.9
           /32 host LOCAL
     +-- 127.0.0.0/8 2 0 2
        +-- 127.0.0.0/31 1 0 0
           |-- 127.0.0.0
              /8 host LOCAL
           |-- 127.0.0.1
              /32 host LOCAL
        |-- 127.255.255.255
           /32 link BROADCAST
     +-- 192.168.1.0/24 2 0 2
        +-- 192.168.1.0/28 2 0 2
           |-- 192.168.1.0
              /24 link UNICAST
           |-- 192.168.1.5
              /32 host LOCAL
        |-- 192.168.1.255
           /32 link BROADCAST
Local:
  +-- 0.0.0.0/0 3 0 5
     +-- 10.42.0.0/16 2 0 2
        |-- 10.42.7.9
           /32 host LOCAL
     +-- 127.0.0.0/8 2 0 2
        |-- 127.0.0.1
           /32 host LOCAL
     +-- 192.168.1.0/24 2 0 2
        |-- 192.168.1.5
           /32 host LOCAL
",
        );

        fs
    }
}
