//! HTTP client wrapper: one function per REST endpoint, all calls going
//! through a single [`ApiClient`] constructed at application start.

use std::fmt;

use contracts::domain::donnees::{Donnee, DonneeInput};
use contracts::domain::paiements::{InitiatePaiement, Paiement};
use contracts::domain::references::{Pays, Province, TypeDonnee};
use contracts::domain::utilisateurs::Utilisateur;
use contracts::stats::{CountResponse, MonthlyAmount, MonthlyUsers};
use gloo_net::http::Request;
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use web_sys::FormData;

/// Failure of a single HTTP call. A non-2xx status and an empty collection
/// are different things; the latter is an `Ok(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection reset, CORS, ...).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body did not match the declared schema.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "erreur réseau: {}", msg),
            ApiError::Status(code) => write!(f, "réponse HTTP {}", code),
            ApiError::Decode(msg) => write!(f, "réponse illisible: {}", msg),
        }
    }
}

/// HTTP client bound to one server base address.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

/// Fetch the [`ApiClient`] provided by `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided in component tree")
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL for a server-relative path. Attachment URLs coming
    /// back from the server are relative and resolved with this too.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // --- datasets -------------------------------------------------------

    pub async fn list_donnees(&self) -> Result<Vec<Donnee>, ApiError> {
        self.get_json("/api/donnees").await
    }

    pub async fn count_donnees(&self) -> Result<CountResponse, ApiError> {
        self.get_json("/api/donnees/count").await
    }

    pub async fn get_donnee(&self, id: i64) -> Result<Donnee, ApiError> {
        self.get_json(&format!("/api/donnees/one?id={}", id)).await
    }

    /// Create or update a dataset record. All scalar fields plus the two
    /// optional attachments go out as one multipart request; the browser
    /// supplies the boundary header.
    pub async fn save_donnee(
        &self,
        input: &DonneeInput,
        fichier: Option<web_sys::File>,
        vignette: Option<web_sys::File>,
    ) -> Result<(), ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        for (key, value) in input.fields() {
            form.append_with_str(key, &value)
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        }
        if let Some(file) = fichier {
            form.append_with_blob_and_filename("fichier", &file, &file.name())
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        }
        if let Some(file) = vignette {
            form.append_with_blob_and_filename("vignette", &file, &file.name())
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        }

        let response = Request::post(&self.url("/api/donnees"))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    // --- payments -------------------------------------------------------

    pub async fn list_paiements(&self) -> Result<Vec<Paiement>, ApiError> {
        self.get_json("/api/payment").await
    }

    pub async fn count_paiements(&self) -> Result<CountResponse, ApiError> {
        self.get_json("/api/payment/count").await
    }

    pub async fn paiement_stat(&self) -> Result<Vec<MonthlyAmount>, ApiError> {
        self.get_json("/api/payment/stat").await
    }

    pub async fn initiate_paiement(&self, request: &InitiatePaiement) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/api/payment/initiate"))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    // --- reference catalogs --------------------------------------------

    pub async fn list_types(&self) -> Result<Vec<TypeDonnee>, ApiError> {
        self.get_json("/api/types").await
    }

    pub async fn list_pays(&self) -> Result<Vec<Pays>, ApiError> {
        self.get_json("/api/types/pays").await
    }

    pub async fn list_provinces(&self) -> Result<Vec<Province>, ApiError> {
        self.get_json("/api/types/province").await
    }

    // --- users ----------------------------------------------------------

    pub async fn list_utilisateurs(&self) -> Result<Vec<Utilisateur>, ApiError> {
        self.get_json("/api/user").await
    }

    pub async fn count_utilisateurs(&self) -> Result<CountResponse, ApiError> {
        self.get_json("/api/user/count").await
    }

    pub async fn utilisateur_stat(&self) -> Result<Vec<MonthlyUsers>, ApiError> {
        self.get_json("/api/user/stat").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_normalized() {
        let client = ApiClient::new("https://geodata.example/");
        assert_eq!(client.url("/api/donnees"), "https://geodata.example/api/donnees");
    }

    #[test]
    fn errors_are_distinguishable() {
        assert_ne!(
            ApiError::Status(500),
            ApiError::Network("connexion interrompue".into())
        );
        assert_eq!(ApiError::Status(404).to_string(), "réponse HTTP 404");
    }
}
