//! Claim evidence and per-item analysis results

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use core_kernel::{ClaimId, DocumentRef, ImageRef, Money, Score};

use crate::error::AnalysisError;

/// Claim domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Health,
    Vehicle,
    Travel,
    ProductWarranty,
    Pet,
    Agricultural,
    /// Unrecognized or unclassified claim domain
    Other,
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClaimType::Health => "health",
            ClaimType::Vehicle => "vehicle",
            ClaimType::Travel => "travel",
            ClaimType::ProductWarranty => "product_warranty",
            ClaimType::Pet => "pet",
            ClaimType::Agricultural => "agricultural",
            ClaimType::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Evidence submitted with one claim
///
/// Immutable for the duration of an analysis; the orchestrator never writes
/// back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimEvidence {
    /// Claim identifier
    pub claim_id: ClaimId,
    /// Claim domain
    pub claim_type: ClaimType,
    /// Amount the claimant is requesting
    pub requested_amount: Money,
    /// Free-text description of the loss
    pub description: String,
    /// Ordered document references
    pub documents: Vec<DocumentRef>,
    /// Ordered image references
    pub images: Vec<ImageRef>,
}

impl ClaimEvidence {
    /// Creates evidence, rejecting a negative requested amount
    pub fn new(
        claim_id: ClaimId,
        claim_type: ClaimType,
        requested_amount: Money,
        description: impl Into<String>,
        documents: Vec<DocumentRef>,
        images: Vec<ImageRef>,
    ) -> Result<Self, AnalysisError> {
        if requested_amount.is_negative() {
            return Err(AnalysisError::InvalidEvidence(format!(
                "requested amount must be non-negative, got {requested_amount}"
            )));
        }
        Ok(Self {
            claim_id,
            claim_type,
            requested_amount,
            description: description.into(),
            documents,
            images,
        })
    }
}

/// Document category inferred by the OCR collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    MedicalBill,
    Invoice,
    Receipt,
    PoliceReport,
    RepairQuote,
    General,
}

/// Result of OCR processing for one document
///
/// May be partial: a scan can yield text without a usable monetary amount,
/// or an amount without a confidence reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Extracted text, absent when the page produced nothing readable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// OCR confidence for this document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Score>,
    /// Inferred document category
    pub document_kind: DocumentKind,
    /// Monetary amount extracted from the document, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_amount: Option<Money>,
}

/// Damage or injury label assigned by the image collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageAssessment {
    NoDamage,
    MinorDamage,
    ModerateDamage,
    SevereDamage,
    TotalLoss,
    NoVisibleInjury,
    VisibleInjury,
}

impl DamageAssessment {
    /// Default label when the collaborator does not supply one
    ///
    /// Vehicle claims default to a damage reading, everything else to an
    /// injury reading.
    pub fn default_for(claim_type: ClaimType) -> Self {
        match claim_type {
            ClaimType::Vehicle => DamageAssessment::ModerateDamage,
            _ => DamageAssessment::VisibleInjury,
        }
    }
}

/// Result of analyzing one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Authenticity score, 1 = fully authentic
    pub authenticity_score: Score,
    /// Damage or injury assessment; the aggregator fills in a claim-type
    /// default when the collaborator leaves this out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_assessment: Option<DamageAssessment>,
    /// Estimated repair or treatment cost, if the model produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<Money>,
    /// Model confidence for this image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Score>,
}

/// Per-item analysis outcome: a result or a recorded failure
///
/// A failure on one item never aborts its batch; it is stored under the
/// item's key so callers can see exactly which references failed. The error
/// arm serializes as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemOutcome<T> {
    Ok(T),
    Err { error: String },
}

impl<T> ItemOutcome<T> {
    /// Records a failure message for this item
    pub fn error(message: impl Into<String>) -> Self {
        ItemOutcome::Err {
            error: message.into(),
        }
    }

    /// Returns the successful result, if any
    pub fn ok(&self) -> Option<&T> {
        match self {
            ItemOutcome::Ok(value) => Some(value),
            ItemOutcome::Err { .. } => None,
        }
    }

    /// Returns true when this item failed
    pub fn is_error(&self) -> bool {
        matches!(self, ItemOutcome::Err { .. })
    }

    /// Returns the recorded failure message, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ItemOutcome::Ok(_) => None,
            ItemOutcome::Err { error } => Some(error),
        }
    }
}

/// Insertion-ordered mapping from evidence reference to per-item outcome
///
/// Preserves the order of the input reference lists so extracted text and
/// serialized results are deterministic, and never drops a key: failed
/// items stay in the mapping as error markers.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceMap<R, T> {
    entries: Vec<(R, ItemOutcome<T>)>,
}

/// Document reference -> OCR outcome
pub type DocumentResults = EvidenceMap<DocumentRef, DocumentResult>;
/// Image reference -> image analysis outcome
pub type ImageResults = EvidenceMap<ImageRef, ImageResult>;

impl<R, T> EvidenceMap<R, T>
where
    R: PartialEq,
{
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an outcome under the given reference
    pub fn insert(&mut self, reference: R, outcome: ItemOutcome<T>) {
        self.entries.push((reference, outcome));
    }

    /// Looks up the outcome for a reference
    pub fn get(&self, reference: &R) -> Option<&ItemOutcome<T>> {
        self.entries
            .iter()
            .find(|(r, _)| r == reference)
            .map(|(_, outcome)| outcome)
    }

    /// Number of entries, error markers included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no items were aggregated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&R, &ItemOutcome<T>)> {
        self.entries.iter().map(|(r, outcome)| (r, outcome))
    }

    /// Iterates outcomes in insertion order
    pub fn outcomes(&self) -> impl Iterator<Item = &ItemOutcome<T>> {
        self.entries.iter().map(|(_, outcome)| outcome)
    }

    /// Iterates successful results in insertion order
    pub fn ok_values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|(_, outcome)| outcome.ok())
    }

    /// Number of error markers
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_error())
            .count()
    }
}

impl<R: PartialEq, T> Default for EvidenceMap<R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, T> Serialize for EvidenceMap<R, T>
where
    R: Serialize,
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (reference, outcome) in &self.entries {
            map.serialize_entry(reference, outcome)?;
        }
        map.end()
    }
}

impl<'de, R, T> Deserialize<'de> for EvidenceMap<R, T>
where
    R: Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor<R, T>(PhantomData<(R, T)>);

        impl<'de, R, T> Visitor<'de> for MapVisitor<R, T>
        where
            R: Deserialize<'de>,
            T: Deserialize<'de>,
        {
            type Value = EvidenceMap<R, T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of evidence references to outcomes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((reference, outcome)) = access.next_entry()? {
                    entries.push((reference, outcome));
                }
                Ok(EvidenceMap { entries })
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}
