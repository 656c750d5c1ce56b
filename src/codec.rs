//! JSON encoding and decoding scoped to one API version's [`ModelSet`].

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    api::Page,
    models::{Model, ModelSet},
};

/// An error encountered while encoding or decoding a model.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The model does not belong to the bound API version.
    #[error("model {model:?} is not defined in API version {api_version}")]
    ModelNotInVersion {
        /// The model name.
        model: String,
        /// The API version the codec is bound to.
        api_version: &'static str,
    },
    /// The value could not be encoded.
    #[error("failed to encode {model}")]
    Encode {
        /// The model name.
        model: String,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// The body could not be decoded.
    #[error("failed to decode {model} at {path}")]
    Decode {
        /// The model name.
        model: String,
        /// The JSON path at which decoding failed.
        path: String,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}

fn check_model<M: Model>(models: &'static ModelSet) -> Result<(), CodecError> {
    if models.contains_model::<M>() {
        Ok(())
    } else {
        Err(CodecError::ModelNotInVersion {
            model: M::NAME.to_owned(),
            api_version: models.api_version(),
        })
    }
}

fn check_name(models: &'static ModelSet, model: &str) -> Result<(), CodecError> {
    if models.contains(model) {
        Ok(())
    } else {
        Err(CodecError::ModelNotInVersion {
            model: model.to_owned(),
            api_version: models.api_version(),
        })
    }
}

fn decode<T: DeserializeOwned>(model: &str, body: &[u8]) -> Result<T, CodecError> {
    let de = &mut serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(de).map_err(|e| CodecError::Decode {
        model: model.to_owned(),
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

fn encode(model: &str, value: &impl Serialize) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(|source| CodecError::Encode {
        model: model.to_owned(),
        source,
    })
}

/// Encodes request bodies using the models of exactly one API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serializer {
    models: &'static ModelSet,
}

impl Serializer {
    /// Bind a serializer to a model set.
    pub fn new(models: &'static ModelSet) -> Self {
        Self { models }
    }

    /// The model set this serializer is bound to.
    pub fn models(&self) -> &'static ModelSet {
        self.models
    }

    /// Check that `M` belongs to the bound API version without encoding
    /// anything.
    pub fn check<M: Model>(&self) -> Result<(), CodecError> {
        check_model::<M>(self.models)
    }

    /// Encode a typed model. Fails if `M` belongs to a different API version.
    pub fn serialize<M: Model>(&self, value: &M) -> Result<String, CodecError> {
        check_model::<M>(self.models)?;
        encode(M::NAME, value)
    }

    /// Encode an untyped value as the named model.
    pub fn serialize_value(
        &self,
        model: &str,
        value: &serde_json::Value,
    ) -> Result<String, CodecError> {
        check_name(self.models, model)?;
        encode(model, value)
    }
}

/// Decodes response bodies using the models of exactly one API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deserializer {
    models: &'static ModelSet,
}

impl Deserializer {
    /// Bind a deserializer to a model set.
    pub fn new(models: &'static ModelSet) -> Self {
        Self { models }
    }

    /// The model set this deserializer is bound to.
    pub fn models(&self) -> &'static ModelSet {
        self.models
    }

    /// Check that `M` belongs to the bound API version without decoding
    /// anything.
    pub fn check<M: Model>(&self) -> Result<(), CodecError> {
        check_model::<M>(self.models)
    }

    /// Decode a typed model. Fails if `M` belongs to a different API version.
    pub fn deserialize<M: Model>(&self, body: &[u8]) -> Result<M, CodecError> {
        check_model::<M>(self.models)?;
        decode(M::NAME, body)
    }

    /// Decode one page of a list response.
    pub fn deserialize_page<M: Model>(&self, body: &[u8]) -> Result<Page<M>, CodecError> {
        check_model::<M>(self.models)?;
        decode(M::NAME, body)
    }

    /// Decode an untyped value, checking only that the model exists.
    pub fn deserialize_value(
        &self,
        model: &str,
        body: &[u8],
    ) -> Result<serde_json::Value, CodecError> {
        check_name(self.models, model)?;
        decode(model, body)
    }

    /// Decode an untyped page.
    pub fn deserialize_value_page(
        &self,
        model: &str,
        body: &[u8],
    ) -> Result<Page<serde_json::Value>, CodecError> {
        check_name(self.models, model)?;
        decode(model, body)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::{v2015_08_01, v2017_04_01};

    #[test]
    fn rejects_other_version() {
        let ser = Serializer::new(&v2017_04_01::MODELS);
        let op = v2015_08_01::Operation {
            name: Some("Microsoft.EventHub/namespaces/read".into()),
            display: None,
        };

        assert_matches!(
            ser.serialize(&op),
            Err(CodecError::ModelNotInVersion { model, api_version: "2017-04-01" }) if model == "Operation"
        );
    }

    #[test]
    fn decode_namespace() -> anyhow::Result<()> {
        let de = Deserializer::new(&v2017_04_01::MODELS);
        let body = br#"{
            "id": "/subscriptions/s/resourceGroups/rg/providers/Microsoft.EventHub/namespaces/ns1",
            "name": "ns1",
            "type": "Microsoft.EventHub/Namespaces",
            "location": "West US",
            "sku": {"name": "Standard", "tier": "Standard", "capacity": 1},
            "properties": {"provisioningState": "Succeeded", "isAutoInflateEnabled": false}
        }"#;

        let ns: v2017_04_01::EhNamespace = de.deserialize(body)?;
        assert_eq!(ns.name.as_deref(), Some("ns1"));
        assert_eq!(ns.location.as_deref(), Some("West US"));
        assert_eq!(
            ns.properties.provisioning_state.as_deref(),
            Some("Succeeded")
        );

        Ok(())
    }

    #[test]
    fn decode_unknown_enum_values() -> anyhow::Result<()> {
        let de = Deserializer::new(&v2017_04_01::MODELS);

        let body = br#"{"name": "ns1", "sku": {"name": "Premium", "tier": "Premium"}}"#;
        let ns: v2017_04_01::EhNamespace = de.deserialize(body)?;
        assert_eq!(
            ns.sku.as_ref().map(|sku| &sku.name),
            Some(&v2017_04_01::SkuName::Other("Premium".into()))
        );

        let body = br#"{"name": "hub", "properties": {"status": "Migrating"}}"#;
        let hub: v2017_04_01::Eventhub = de.deserialize(body)?;
        assert_eq!(
            hub.properties.status,
            Some(v2017_04_01::EntityStatus::Other("Migrating".into()))
        );

        let body = br#"{"name": "hub", "properties": {"status": "Active"}}"#;
        let hub: v2017_04_01::Eventhub = de.deserialize(body)?;
        assert_eq!(hub.properties.status, Some(v2017_04_01::EntityStatus::Active));

        let ser = Serializer::new(&v2017_04_01::MODELS);
        let json = ser.serialize(&ns)?;
        assert!(json.contains(r#""sku":{"name":"Premium","tier":"Premium"}"#));

        Ok(())
    }

    #[test]
    fn decode_error_has_path() {
        let de = Deserializer::new(&v2017_04_01::MODELS);
        let body = br#"{"name": "hub", "properties": {"partitionCount": "four"}}"#;

        let err = de.deserialize::<v2017_04_01::Eventhub>(body).unwrap_err();
        assert_matches!(err, CodecError::Decode { ref path, .. } if path == "properties.partitionCount");
    }

    #[test]
    fn untyped_checks_name() -> anyhow::Result<()> {
        let de = Deserializer::new(&v2015_08_01::MODELS);
        assert_matches!(
            de.deserialize_value("EHNamespace", b"{}"),
            Err(CodecError::ModelNotInVersion { .. })
        );

        let v = de.deserialize_value("NamespaceResource", br#"{"location": "westus"}"#)?;
        assert_eq!(v["location"], "westus");

        Ok(())
    }

    #[test]
    fn decode_page() -> anyhow::Result<()> {
        let de = Deserializer::new(&v2017_04_01::MODELS);
        let body = br#"{"value": [{"name": "$Default"}], "nextLink": null}"#;

        let page: Page<v2017_04_01::ConsumerGroup> = de.deserialize_page(body)?;
        assert_eq!(page.value.len(), 1);
        assert_eq!(page.value[0].name.as_deref(), Some("$Default"));
        assert!(page.next_link.is_none());

        Ok(())
    }
}
