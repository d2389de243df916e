//! HTTP implementation of [`PatientApi`].

use std::time::Duration;

use patientor_core::{Diagnosis, Entry, NewEntry, NewPatient, Patient, PatientSummary};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::PatientApi;
use crate::config::ClientConfig;
use crate::{ClientError, ClientResult};

/// Blocking REST client for the patientor API.
pub struct HttpPatientApi {
    base_url: String,
    client: Client,
    timeout_secs: u64,
}

impl HttpPatientApi {
    /// Create a client for the configured base URL.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            client,
            timeout_secs: config.timeout_secs(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        debug!(method = "GET", %url, "sending request");
        let response = self.send(self.client.get(&url))?;
        decode(response)
    }

    fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        debug!(method = "POST", %url, "sending request");
        let response = self.send(self.client.post(&url).json(body))?;
        decode(response)
    }

    /// Send a request and turn transport failures and non-2xx statuses into errors.
    fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().map_err(|e| {
            if e.is_connect() {
                ClientError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ClientError::Timeout(self.timeout_secs)
            } else {
                ClientError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    response
        .json()
        .map_err(|e| ClientError::Decode(e.to_string()))
}

impl PatientApi for HttpPatientApi {
    fn fetch_all_patients(&self) -> ClientResult<Vec<PatientSummary>> {
        self.get("/patients")
    }

    fn fetch_patient(&self, id: &str) -> ClientResult<Patient> {
        self.get(&format!("/patients/{}", id)).map_err(|e| match e {
            ClientError::Http { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
                ClientError::NotFound(format!("patient {}", id))
            }
            other => other,
        })
    }

    fn fetch_diagnoses(&self) -> ClientResult<Vec<Diagnosis>> {
        self.get("/diagnoses")
    }

    fn submit_patient(&self, patient: &NewPatient) -> ClientResult<Patient> {
        self.post("/patients", patient)
    }

    fn submit_entry(&self, patient_id: &str, entry: &NewEntry) -> ClientResult<Entry> {
        self.post(&format!("/patients/{}/entries", patient_id), entry)
    }
}
