//! API Models
//!
//! Wire shapes of the voting API and their mapping into listing items.

use serde::{Deserialize, Serialize};
use voto_listing::Candidate;

/// Envelope every API response comes wrapped in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub status: u16,
}

/// Electoral process currently open for voting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectoralProcess {
    #[serde(rename = "nombreProceso")]
    pub name: String,
    #[serde(rename = "descripcionProceso", default)]
    pub description: String,
    #[serde(rename = "fechaInicio", default)]
    pub starts_at: String,
    #[serde(rename = "fechaFin", default)]
    pub ends_at: String,
    #[serde(rename = "candidaturas", default)]
    pub candidacies: Vec<Candidacy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidacy {
    #[serde(rename = "nombreCandidatura", default)]
    pub name: String,
    #[serde(rename = "lema", default)]
    pub motto: String,
    #[serde(rename = "partido")]
    pub party: Party,
    #[serde(rename = "candidato")]
    pub candidate: PartyCandidate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: u32,
    #[serde(rename = "nombrePartido")]
    pub name: String,
    #[serde(rename = "sigla", default)]
    pub acronym: String,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "colorHex", default)]
    pub color_hex: String,
    #[serde(rename = "fechaFundacion", default)]
    pub founded_at: Option<String>,
    #[serde(rename = "estado", default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyCandidate {
    pub id: u32,
    #[serde(rename = "nombreCandidato")]
    pub first_name: String,
    #[serde(rename = "apPaterno", default)]
    pub paternal_surname: String,
    #[serde(rename = "apMaterno", default)]
    pub maternal_surname: String,
    #[serde(rename = "fechaNacimiento", default)]
    pub born_at: Option<String>,
    #[serde(rename = "fotoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
    #[serde(rename = "propuesta", default)]
    pub proposal: String,
    #[serde(rename = "cargo", default)]
    pub office: String,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|s| s.trim()).filter(|s| !s.is_empty()).map(str::to_string)
}

impl Candidacy {
    pub fn to_candidate(&self) -> Candidate {
        let c = &self.candidate;
        let last_name = format!("{} {}", c.paternal_surname.trim(), c.maternal_surname.trim());
        Candidate {
            id: c.id,
            first_name: c.first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            party: self.party.name.trim().to_string(),
            party_logo: non_empty(&self.party.logo_url),
            photo: non_empty(&c.photo_url).or_else(|| non_empty(&c.photo)),
            registered_at: non_empty(&self.party.founded_at),
        }
    }
}

impl ElectoralProcess {
    pub fn candidates(&self) -> Vec<Candidate> {
        self.candidacies.iter().map(Candidacy::to_candidate).collect()
    }
}
