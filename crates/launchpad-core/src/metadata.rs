//! # Token Metadata
//!
//! Descriptive record published alongside every coin. The record is shared:
//! it can be read by anyone and, under the default [`MetadataUpdatePolicy::Open`],
//! edited by anyone who can reach it.

use serde::{Deserialize, Serialize};

use crate::config::MetadataUpdatePolicy;
use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::events::MetadataUpdated;
use crate::types::{Address, ObjectId, TxContext};

/// Field tag reported when the description changes
pub const FIELD_DESCRIPTION: &str = "description";

/// Field tag reported when a custom attribute changes
pub const FIELD_CUSTOM_ATTRIBUTE: &str = "custom_attribute";

/// Caller-supplied descriptive fields for a new coin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFields {
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub tags: Vec<String>,
    pub creator_message: String,
}

impl MetadataFields {
    pub fn new(name: impl Into<String>, description: impl Into<String>, icon_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon_url: icon_url.into(),
            ..Self::default()
        }
    }
}

/// One entry of the ordered attribute map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: ObjectId,
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub tags: Vec<String>,
    pub creator_message: String,
    /// Address that paid for creation
    pub creator: Address,
    /// Creation timestamp (milliseconds)
    pub launch_date: u64,
    pub total_holders: u64,
    pub community_votes: u64,
    pub verified: bool,
    /// Unique keys, kept in insertion order
    attributes: Vec<Attribute>,
}

impl Metadata {
    /// Build a fresh record: counters at zero, unverified, no attributes
    pub fn new(id: ObjectId, symbol: &str, fields: MetadataFields, creator: Address, now_ms: u64) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            name: fields.name,
            description: fields.description,
            icon_url: fields.icon_url,
            website: fields.website,
            twitter: fields.twitter,
            telegram: fields.telegram,
            tags: fields.tags,
            creator_message: fields.creator_message,
            creator,
            launch_date: now_ms,
            total_holders: 0,
            community_votes: 0,
            verified: false,
            attributes: Vec::new(),
        }
    }

    /// Check `caller` against the update policy
    pub fn authorize(&self, caller: &Address, policy: MetadataUpdatePolicy) -> LaunchpadResult<()> {
        match policy {
            MetadataUpdatePolicy::Open => Ok(()),
            MetadataUpdatePolicy::CreatorOnly if *caller == self.creator => Ok(()),
            MetadataUpdatePolicy::CreatorOnly => Err(LaunchpadError::Unauthorized),
        }
    }

    /// Replace the description in place
    pub fn update_description(
        &mut self,
        new_description: impl Into<String>,
        ctx: &TxContext,
        policy: MetadataUpdatePolicy,
    ) -> LaunchpadResult<MetadataUpdated> {
        self.authorize(&ctx.sender, policy)?;
        self.description = new_description.into();
        Ok(self.updated(FIELD_DESCRIPTION, ctx))
    }

    /// Insert or replace an attribute. A replaced key keeps its position.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        ctx: &TxContext,
        policy: MetadataUpdatePolicy,
    ) -> LaunchpadResult<MetadataUpdated> {
        self.authorize(&ctx.sender, policy)?;

        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { key, value }),
        }

        Ok(self.updated(FIELD_CUSTOM_ATTRIBUTE, ctx))
    }

    /// Remove an attribute. Returns the old value and an update event when
    /// the key was present.
    pub fn remove_attribute(
        &mut self,
        key: &str,
        ctx: &TxContext,
        policy: MetadataUpdatePolicy,
    ) -> LaunchpadResult<Option<(String, MetadataUpdated)>> {
        self.authorize(&ctx.sender, policy)?;

        let Some(index) = self.attributes.iter().position(|a| a.key == key) else {
            return Ok(None);
        };
        let removed = self.attributes.remove(index);
        Ok(Some((removed.value, self.updated(FIELD_CUSTOM_ATTRIBUTE, ctx))))
    }

    /// Look up an attribute; absence is not an error
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    fn updated(&self, field: &str, ctx: &TxContext) -> MetadataUpdated {
        MetadataUpdated {
            metadata_id: self.id,
            field: field.to_string(),
            updated_by: ctx.sender,
            timestamp_ms: ctx.timestamp_ms,
        }
    }
}
