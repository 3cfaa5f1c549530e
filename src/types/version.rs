//! Drawing metadata enums read from the header section

use std::fmt;

/// AutoCAD release that wrote the drawing, from `$ACADVER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DxfVersion {
    /// Release 12
    AC1009,
    /// Release 13
    AC1012,
    /// Release 14
    AC1014,
    /// AutoCAD 2000
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
    /// AutoCAD 2018
    AC1032,
    /// Any other version string
    Unknown(String),
}

impl DxfVersion {
    /// Parse a `$ACADVER` value
    pub fn from_version_string(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "AC1009" => DxfVersion::AC1009,
            "AC1012" => DxfVersion::AC1012,
            "AC1014" => DxfVersion::AC1014,
            "AC1015" => DxfVersion::AC1015,
            "AC1018" => DxfVersion::AC1018,
            "AC1021" => DxfVersion::AC1021,
            "AC1024" => DxfVersion::AC1024,
            "AC1027" => DxfVersion::AC1027,
            "AC1032" => DxfVersion::AC1032,
            _ => DxfVersion::Unknown(s.trim().to_string()),
        }
    }

    /// Drawings from AutoCAD 2007 on are always UTF-8 encoded
    pub fn is_unicode(&self) -> bool {
        matches!(
            self,
            DxfVersion::AC1021 | DxfVersion::AC1024 | DxfVersion::AC1027 | DxfVersion::AC1032
        )
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DxfVersion::AC1009 => write!(f, "AC1009"),
            DxfVersion::AC1012 => write!(f, "AC1012"),
            DxfVersion::AC1014 => write!(f, "AC1014"),
            DxfVersion::AC1015 => write!(f, "AC1015"),
            DxfVersion::AC1018 => write!(f, "AC1018"),
            DxfVersion::AC1021 => write!(f, "AC1021"),
            DxfVersion::AC1024 => write!(f, "AC1024"),
            DxfVersion::AC1027 => write!(f, "AC1027"),
            DxfVersion::AC1032 => write!(f, "AC1032"),
            DxfVersion::Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// Drawing units, from `$INSUNITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    Unitless,
    Inches,
    Feet,
    Miles,
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Other(i32),
}

impl Units {
    /// Map a `$INSUNITS` code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Units::Unitless,
            1 => Units::Inches,
            2 => Units::Feet,
            3 => Units::Miles,
            4 => Units::Millimeters,
            5 => Units::Centimeters,
            6 => Units::Meters,
            7 => Units::Kilometers,
            other => Units::Other(other),
        }
    }

    /// Length of one drawing unit in meters, when defined
    pub fn meters_per_unit(&self) -> Option<f64> {
        match self {
            Units::Inches => Some(0.0254),
            Units::Feet => Some(0.3048),
            Units::Miles => Some(1609.344),
            Units::Millimeters => Some(0.001),
            Units::Centimeters => Some(0.01),
            Units::Meters => Some(1.0),
            Units::Kilometers => Some(1000.0),
            Units::Unitless | Units::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert_eq!(DxfVersion::from_version_string("AC1015"), DxfVersion::AC1015);
        assert_eq!(
            DxfVersion::from_version_string("AC9999"),
            DxfVersion::Unknown("AC9999".to_string())
        );
        assert!(DxfVersion::AC1032.is_unicode());
        assert!(!DxfVersion::AC1015.is_unicode());
    }

    #[test]
    fn test_units() {
        assert_eq!(Units::from_code(4), Units::Millimeters);
        assert_eq!(Units::from_code(6).meters_per_unit(), Some(1.0));
        assert_eq!(Units::from_code(21), Units::Other(21));
    }
}
