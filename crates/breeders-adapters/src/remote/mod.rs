//! Remote breed provider adapters.
//!
//! One adapter per wire format, each sitting on a [`BreedTransport`]:
//!
//! ```text
//! CatFactory ──▶ RemoteBreedAdapter ──▶ BreedTransport ──▶ breed service
//!                (JsonBreedAdapter |     (HttpTransport |
//!                 XmlBreedAdapter)        StaticTransport)
//! ```
//!
//! Endpoints are `<base>/api/cat-breeds/all/<fmt>` and
//! `<base>/api/cat-breeds/<name>/<fmt>`.

use std::sync::Arc;

use breeders_core::{application::RemoteBreedAdapter, domain::WireFormat};

pub mod json;
mod transport;
pub mod xml;

pub use json::JsonBreedAdapter;
pub use transport::{BreedTransport, HttpTransport, StaticTransport};
pub use xml::XmlBreedAdapter;

/// The adapter for `format`, reading through `transport`.
pub fn adapter_for(
    format: WireFormat,
    transport: Box<dyn BreedTransport>,
) -> Arc<dyn RemoteBreedAdapter> {
    match format {
        WireFormat::Json => Arc::new(JsonBreedAdapter::new(transport)),
        WireFormat::Xml => Arc::new(XmlBreedAdapter::new(transport)),
    }
}

pub fn all_path(format: WireFormat) -> Vec<String> {
    endpoint("all", format)
}

pub fn breed_path(name: &str, format: WireFormat) -> Vec<String> {
    endpoint(name.trim(), format)
}

fn endpoint(resource: &str, format: WireFormat) -> Vec<String> {
    vec![
        "api".to_string(),
        "cat-breeds".to_string(),
        resource.to_string(),
        format.as_str().to_string(),
    ]
}

/// `"a - b"` style ranges used by the JSON dialect.
pub(crate) mod range {
    /// `""` is no range, `"12"` is a single value, `"7 - 10"` a pair.
    pub fn parse(raw: &str) -> Result<Option<(u32, u32)>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let number = |s: &str| {
            s.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid range '{}': {}", raw, e))
        };

        let (low, high) = match raw.split_once('-') {
            Some((low, high)) => (number(low)?, number(high)?),
            None => {
                let only = number(raw)?;
                (only, only)
            }
        };

        if low > high {
            return Err(format!("invalid range '{}': low bound exceeds high", raw));
        }
        Ok(Some((low, high)))
    }

    pub fn format(low: Option<u32>, high: Option<u32>) -> String {
        match (low, high) {
            (Some(l), Some(h)) if l == h => l.to_string(),
            (Some(l), Some(h)) => format!("{l} - {h}"),
            (Some(v), None) | (None, Some(v)) => v.to_string(),
            (None, None) => String::new(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_provider_layout() {
        assert_eq!(all_path(WireFormat::Xml), ["api", "cat-breeds", "all", "xml"]);
        assert_eq!(
            breed_path(" Maine Coon ", WireFormat::Json),
            ["api", "cat-breeds", "Maine Coon", "json"]
        );
    }

    #[test]
    fn adapter_for_picks_matching_format() {
        for format in [WireFormat::Json, WireFormat::Xml] {
            let adapter = adapter_for(format, Box::new(StaticTransport::new()));
            assert_eq!(adapter.format(), format);
        }
    }
}
