//! Reference catalogs, consumed only to populate form select options.

use serde::{Deserialize, Serialize};

/// Dataset type catalog entry (`GET /api/types`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDonnee {
    pub id_type: i64,
    pub nom_type: String,
}

/// Country catalog entry (`GET /api/types/pays`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pays {
    pub id_pays: i64,
    pub nom_pays: String,
}

/// Region catalog entry (`GET /api/types/province`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    pub id: i64,
    pub name_fr: String,
}
