use std::sync::OnceLock;

/// What to do when the data codewords end inside a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationPolicy {
    /// Fail with `DecodeError::InsufficientData`
    Error,
    /// Keep the units decoded so far
    Tolerate,
}

/// Decoder knobs; `Default` reads them from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub truncation: TruncationPolicy,
    /// Decode the version-information blocks of versions 7+
    pub check_version_info: bool,
}

impl DecodeOptions {
    /// Options from `QR_TRUNCATION` and `QR_CHECK_VERSION_INFO`
    pub fn from_env() -> Self {
        Self {
            truncation: truncation_policy(),
            check_version_info: check_version_info(),
        }
    }

    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_version_check(mut self, check: bool) -> Self {
        self.check_version_info = check;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

fn parse_truncation(value: &str) -> Option<TruncationPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" | "strict" => Some(TruncationPolicy::Error),
        "tolerate" | "lenient" => Some(TruncationPolicy::Tolerate),
        _ => None,
    }
}

static TRUNCATION_POLICY: OnceLock<TruncationPolicy> = OnceLock::new();

pub(crate) fn truncation_policy() -> TruncationPolicy {
    *TRUNCATION_POLICY.get_or_init(|| {
        std::env::var("QR_TRUNCATION")
            .ok()
            .and_then(|v| parse_truncation(&v))
            .unwrap_or(TruncationPolicy::Error)
    })
}

static CHECK_VERSION_INFO: OnceLock<bool> = OnceLock::new();

pub(crate) fn check_version_info() -> bool {
    *CHECK_VERSION_INFO.get_or_init(|| parse_env_bool_u8("QR_CHECK_VERSION_INFO", true))
}
