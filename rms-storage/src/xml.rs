//! XML serialization of the adapted document
//!
//! The store itself never touches XML; this is the external edge of the
//! adapter layer. Contract: round-tripping a store through
//! adapt → serialize → parse → rebuild yields an equal store.

use rms_core::Rms;

use crate::adapted::AdaptedRms;
use crate::error::StorageResult;

impl AdaptedRms {
    /// Serialize the adapted document to an XML string
    pub fn to_xml(&self) -> StorageResult<String> {
        Ok(quick_xml::se::to_string(self)?)
    }

    /// Parse an adapted document from an XML string
    pub fn from_xml(xml: &str) -> StorageResult<Self> {
        Ok(quick_xml::de::from_str(xml)?)
    }
}

/// Serialize a whole store to XML
pub fn save_rms(rms: &Rms) -> StorageResult<String> {
    AdaptedRms::from_model(rms).to_xml()
}

/// Rebuild a store from XML
pub fn load_rms(xml: &str) -> StorageResult<Rms> {
    Ok(AdaptedRms::from_xml(xml)?.to_model()?)
}
