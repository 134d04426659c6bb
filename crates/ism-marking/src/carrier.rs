//! # Carriers
//!
//! A `Carrier` is the minimal view of a DDMS component that security
//! attributes decorate: a name, the DDMS version it belongs to, and a set
//! of namespace-qualified attributes. Generic XML handling is left to the
//! caller; a carrier only holds what has been read or will be written.

use std::collections::BTreeMap;

use ism_core::DdmsVersion;

/// Namespace-qualified attribute name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QName {
    pub namespace: String,
    pub local: String,
}

impl QName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }
}

/// An attribute value plus the prefix it is written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub prefix: String,
    pub value: String,
}

/// A component that can carry ISM attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    name: String,
    version: DdmsVersion,
    attributes: BTreeMap<QName, AttributeValue>,
}

impl Carrier {
    pub fn new(name: impl Into<String>, version: DdmsVersion) -> Self {
        Self {
            name: name.into(),
            version,
            attributes: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> DdmsVersion {
        self.version
    }

    /// The DDMS namespace of this carrier's version.
    pub fn namespace(&self) -> &'static str {
        self.version.ddms_namespace()
    }

    /// Sets an attribute, replacing any existing value with the same
    /// qualified name.
    pub fn set_attribute(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
        local: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.attributes.insert(
            QName::new(namespace, local),
            AttributeValue {
                prefix: prefix.into(),
                value: value.into(),
            },
        );
    }

    pub fn attribute(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .get(&QName::new(namespace, local))
            .map(|a| a.value.as_str())
    }

    pub fn attribute_entry(&self, namespace: &str, local: &str) -> Option<&AttributeValue> {
        self.attributes.get(&QName::new(namespace, local))
    }

    pub fn remove_attribute(&mut self, namespace: &str, local: &str) -> Option<AttributeValue> {
        self.attributes.remove(&QName::new(namespace, local))
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&QName, &AttributeValue)> {
        self.attributes.iter()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_are_namespace_qualified() {
        let mut carrier = Carrier::new("title", DdmsVersion::V3_0);
        carrier.set_attribute("ISM", "urn:us:gov:ic:ism", "classification", "U");
        carrier.set_attribute("other", "urn:other", "classification", "X");

        assert_eq!(carrier.attribute("urn:us:gov:ic:ism", "classification"), Some("U"));
        assert_eq!(carrier.attribute("urn:other", "classification"), Some("X"));
        assert_eq!(carrier.attribute("urn:us:gov:ic:ism:v2", "classification"), None);
        assert_eq!(carrier.attribute_count(), 2);
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut carrier = Carrier::new("title", DdmsVersion::V5_0);
        carrier.set_attribute("ISM", "urn:us:gov:ic:ism", "classification", "U");
        carrier.set_attribute("ism", "urn:us:gov:ic:ism", "classification", "C");
        let entry = carrier
            .attribute_entry("urn:us:gov:ic:ism", "classification")
            .unwrap();
        assert_eq!(entry.prefix, "ism");
        assert_eq!(entry.value, "C");
        assert_eq!(carrier.namespace(), "urn:us:mil:ces:metadata:ddms:5");
    }
}
