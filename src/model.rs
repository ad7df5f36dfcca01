//! Wire-level data model: field keys, error codes and per-field results.
//!
//! Codes defined here are part of the external contract consumed by EMV 3-D
//! Secure servers and must never be renumbered.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Schema version emitted under `DV`.
pub const DATA_VERSION: &str = "1.0.0";

/// Device parameter identifier.
///
/// Variants are declared in catalog order, so the derived `Ord` matches the
/// order fields are collected and emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    /// Platform family.
    DeviceType,
    /// Manufacturer and model.
    DeviceModel,
    /// Platform, release codename, release and API level.
    DeviceOs,
    /// Raw OS release string.
    OsVersion,
    /// Default locale as `language-COUNTRY`.
    Locale,
    TimeZone,
    ScreenResolution,
    /// Secondary device name.
    DeviceName,
    /// Address of the active network link.
    IpAddress,
}

impl FieldKey {
    /// Every field, in collection order.
    pub const CATALOG: [FieldKey; 9] = [
        FieldKey::DeviceType,
        FieldKey::DeviceModel,
        FieldKey::DeviceOs,
        FieldKey::OsVersion,
        FieldKey::Locale,
        FieldKey::TimeZone,
        FieldKey::ScreenResolution,
        FieldKey::DeviceName,
        FieldKey::IpAddress,
    ];

    /// Wire identifier. `C007` is not part of the catalog.
    pub fn code(self) -> &'static str {
        match self {
            FieldKey::DeviceType => "C001",
            FieldKey::DeviceModel => "C002",
            FieldKey::DeviceOs => "C003",
            FieldKey::OsVersion => "C004",
            FieldKey::Locale => "C005",
            FieldKey::TimeZone => "C006",
            FieldKey::ScreenResolution => "C008",
            FieldKey::DeviceName => "C009",
            FieldKey::IpAddress => "C010",
        }
    }

    /// Looks up a field by its wire identifier.
    pub fn from_code(code: &str) -> Option<FieldKey> {
        Self::CATALOG.into_iter().find(|key| key.code() == code)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Reason a field could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The host refused access to the underlying subsystem.
    Restriction,
    /// Reserved; no resolver produces it yet.
    Deprecated,
    /// A runtime permission is missing.
    PermissionRequired,
    /// No value is available.
    Empty,
}

impl ErrorCode {
    pub fn code(self) -> &'static str {
        match self {
            ErrorCode::Restriction => "RE01",
            ErrorCode::Deprecated => "RE02",
            ErrorCode::PermissionRequired => "RE03",
            ErrorCode::Empty => "RE04",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Outcome of resolving a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Success(String),
    Failure(ErrorCode),
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }
}

/// Runtime permissions consulted by resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Permission {
    Internet,
    AccessNetworkState,
}

impl Permission {
    /// Android manifest name.
    pub fn manifest_name(self) -> &'static str {
        match self {
            Permission::Internet => "android.permission.INTERNET",
            Permission::AccessNetworkState => "android.permission.ACCESS_NETWORK_STATE",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Permission::Internet => "internet",
            Permission::AccessNetworkState => "network-state",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.manifest_name())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Permission::Internet, Permission::AccessNetworkState]
            .into_iter()
            .find(|p| p.manifest_name() == s || p.alias() == s)
            .ok_or_else(|| {
                format!(
                    "unknown permission '{}' (expected internet, network-state or a manifest name)",
                    s
                )
            })
    }
}
